use std::sync::Arc;

use weather_core::WeatherService;

use crate::templates::Pages;

/// Shared, read-only state handed to every handler.
#[derive(Debug, Clone)]
pub struct AppState {
    pub weather: Arc<WeatherService>,
    pub pages: Arc<Pages>,
}

impl AppState {
    pub fn new(weather: WeatherService, pages: Pages) -> Self {
        Self {
            weather: Arc::new(weather),
            pages: Arc::new(pages),
        }
    }
}
