//! Core library for the weather web app.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - The OpenWeather provider (geocoding, current weather, forecast)
//! - Place resolution, forecast shaping and the lookup pipeline tying them together
//!
//! It is used by `weather-web`, but can also be reused by other binaries or services.

pub mod config;
pub mod error;
pub mod lookup;
pub mod model;
pub mod provider;
pub mod resolver;
pub mod shaper;

pub use config::{Config, OpenWeatherConfig, ServerConfig};
pub use error::{ConfigError, Endpoint, LookupError};
pub use lookup::WeatherService;
pub use model::{
    Coordinate, CurrentConditions, CurrentObservation, DailyForecastEntry, ForecastSample,
    ForecastSeries, WeatherReport,
};
pub use provider::{WeatherProvider, openweather::OpenWeatherProvider, provider_from_config};
pub use resolver::{GeoResolver, ResolvedPlace, title_case};
pub use shaper::ForecastShaper;
