use axum::{
    Form, Json,
    extract::{Path, State},
    response::{Html, Redirect},
};
use serde::{Deserialize, Serialize};
use tracing::debug;
use url::Url;

use crate::{error::PageError, routes::ERROR_PATH, state::AppState};

#[derive(Debug, Deserialize)]
pub struct SearchForm {
    #[serde(default)]
    pub search: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

pub async fn index(State(state): State<AppState>) -> Result<Html<String>, PageError> {
    Ok(Html(state.pages.index()?))
}

/// Form submission from the search box: redirect to `/{city}`.
pub async fn search(Form(form): Form<SearchForm>) -> Result<Redirect, PageError> {
    let city = form.search.trim();
    if city.is_empty() {
        return Ok(Redirect::to(ERROR_PATH));
    }

    Ok(Redirect::to(&city_path(city)?))
}

pub async fn city(
    State(state): State<AppState>,
    Path(city): Path<String>,
) -> Result<Html<String>, PageError> {
    debug!(%city, "City page requested");
    let report = state.weather.lookup(&city).await?;

    Ok(Html(state.pages.report(&report)?))
}

pub async fn error_page(State(state): State<AppState>) -> Result<Html<String>, PageError> {
    Ok(Html(state.pages.error()?))
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Percent-encoded single-segment path for a city name.
fn city_path(city: &str) -> Result<String, PageError> {
    let mut url =
        Url::parse("http://localhost/").map_err(|_| PageError::Redirect(city.to_string()))?;
    url.path_segments_mut()
        .map_err(|()| PageError::Redirect(city.to_string()))?
        .clear()
        .push(city);

    Ok(url.path().to_string())
}
