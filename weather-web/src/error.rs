//! Page-level errors and how they turn into responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use thiserror::Error;
use tracing::{error, info};
use weather_core::LookupError;

use crate::routes::ERROR_PATH;

#[derive(Debug, Error)]
pub enum PageError {
    /// The lookup pipeline failed. The user is sent to the error page.
    #[error(transparent)]
    Lookup(#[from] LookupError),

    #[error("Template rendering failed: {0}")]
    Render(#[from] tera::Error),

    #[error("Could not build redirect for '{0}'")]
    Redirect(String),
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        match self {
            Self::Lookup(err) => {
                info!(error = %err, status = ?err.status(), "Redirecting to error page");
                Redirect::to(ERROR_PATH).into_response()
            }
            other => {
                error!(error = %other, "Failed to produce page");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error").into_response()
            }
        }
    }
}
