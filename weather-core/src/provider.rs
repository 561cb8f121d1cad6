use crate::{
    config::Config,
    error::{ConfigError, LookupError},
    model::{Coordinate, CurrentObservation, ForecastSeries},
    provider::openweather::OpenWeatherProvider,
};
use async_trait::async_trait;
use std::{fmt::Debug, sync::Arc};

pub mod openweather;

/// Remote source of geocoding, current weather and forecast data.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    /// Candidate coordinates for a place name, best match first. Empty when unknown.
    async fn geocode(&self, place: &str, limit: u8) -> Result<Vec<Coordinate>, LookupError>;

    async fn current(&self, coord: Coordinate) -> Result<CurrentObservation, LookupError>;

    async fn forecast(&self, coord: Coordinate) -> Result<ForecastSeries, LookupError>;
}

/// Construct the OpenWeather provider from config.
///
/// Fails when no API key is configured, so a misconfigured process never
/// reaches the point of sending unauthenticated requests.
pub fn provider_from_config(config: &Config) -> Result<Arc<dyn WeatherProvider>, ConfigError> {
    let api_key = config.api_key()?;
    let provider = OpenWeatherProvider::new(api_key.to_owned(), config.openweather.clone())?;

    Ok(Arc::new(provider))
}
