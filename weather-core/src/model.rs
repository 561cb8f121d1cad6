use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A resolved geographic position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

/// Current conditions as reported by the provider, before rounding.
#[derive(Debug, Clone, PartialEq)]
pub struct CurrentObservation {
    pub temperature_c: f64,
    pub min_temperature_c: f64,
    pub max_temperature_c: f64,
    /// Condition labels in provider order; the first one is the primary condition.
    pub conditions: Vec<String>,
    pub wind_speed: f64,
}

/// One timestamped sample of the provider's multi-day forecast.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastSample {
    pub timestamp: NaiveDateTime,
    pub temperature_c: f64,
    pub conditions: Vec<String>,
}

/// Forecast samples in provider order (every 3 hours for OpenWeather).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ForecastSeries {
    pub samples: Vec<ForecastSample>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentConditions {
    pub temperature_c: i64,
    pub min_temperature_c: i64,
    pub max_temperature_c: i64,
    pub condition: String,
    pub wind_speed: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyForecastEntry {
    /// Short weekday name, e.g. "Mon".
    pub day: String,
    pub temperature_c: i64,
    pub condition: String,
}

/// Everything the report page shows for one lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReport {
    pub place_name: String,
    pub display_date: String,
    pub current: CurrentConditions,
    pub forecast: Vec<DailyForecastEntry>,
}
