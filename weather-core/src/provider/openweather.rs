use async_trait::async_trait;
use chrono::NaiveDateTime;
use reqwest::Client;
use serde::{Deserialize, Deserializer, de::DeserializeOwned};
use std::time::Duration;
use tracing::{debug, instrument, warn};

use crate::{
    config::OpenWeatherConfig,
    error::{ConfigError, Endpoint, LookupError},
    model::{Coordinate, CurrentObservation, ForecastSample, ForecastSeries},
};

use super::WeatherProvider;

/// Format of the forecast `dt_txt` field, e.g. "2024-01-15 12:00:00".
const DT_TXT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone)]
pub struct OpenWeatherProvider {
    api_key: String,
    config: OpenWeatherConfig,
    http: Client,
}

impl OpenWeatherProvider {
    pub fn new(api_key: String, config: OpenWeatherConfig) -> Result<Self, ConfigError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(ConfigError::HttpClient)?;

        Ok(Self {
            api_key,
            config,
            http,
        })
    }

    fn coordinate_query(&self, coord: Coordinate) -> [(&'static str, String); 4] {
        [
            ("lat", coord.latitude.to_string()),
            ("lon", coord.longitude.to_string()),
            ("appid", self.api_key.clone()),
            ("units", "metric".to_string()),
        ]
    }

    /// GET `url`, require a success status and decode the JSON body.
    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: Endpoint,
        url: &str,
        query: &[(&'static str, String)],
    ) -> Result<T, LookupError> {
        let res = self
            .http
            .get(url)
            .query(query)
            .send()
            .await
            .map_err(|source| LookupError::Transport { endpoint, source })?;

        let status = res.status();
        let body = res
            .text()
            .await
            .map_err(|source| LookupError::Transport { endpoint, source })?;

        if !status.is_success() {
            warn!(
                %endpoint,
                status = status.as_u16(),
                body = %truncate_body(&body),
                "OpenWeather request failed"
            );
            return Err(LookupError::Upstream {
                endpoint,
                status: status.as_u16(),
            });
        }

        serde_json::from_str(&body).map_err(|e| LookupError::MalformedData {
            endpoint,
            reason: e.to_string(),
        })
    }
}

#[derive(Debug, Deserialize)]
struct OwGeoCandidate {
    lat: f64,
    lon: f64,
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
    temp_min: f64,
    temp_max: f64,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    main: String,
}

#[derive(Debug, Deserialize)]
struct OwWind {
    speed: f64,
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    main: OwMain,
    weather: Vec<OwWeather>,
    wind: OwWind,
}

#[derive(Debug, Deserialize)]
struct OwForecastMain {
    temp: f64,
}

#[derive(Debug, Deserialize)]
struct OwForecastEntry {
    main: OwForecastMain,
    weather: Vec<OwWeather>,
    #[serde(deserialize_with = "deserialize_dt_txt")]
    dt_txt: NaiveDateTime,
}

#[derive(Debug, Deserialize)]
struct OwForecastResponse {
    list: Vec<OwForecastEntry>,
}

fn deserialize_dt_txt<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    NaiveDateTime::parse_from_str(&raw, DT_TXT_FORMAT).map_err(serde::de::Error::custom)
}

fn labels(weather: Vec<OwWeather>) -> Vec<String> {
    weather.into_iter().map(|w| w.main).collect()
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    #[instrument(skip(self))]
    async fn geocode(&self, place: &str, limit: u8) -> Result<Vec<Coordinate>, LookupError> {
        debug!("Geocoding place name");

        let candidates: Vec<OwGeoCandidate> = self
            .get_json(
                Endpoint::Geocoding,
                &self.config.geocoding_url,
                &[
                    ("q", place.to_string()),
                    ("appid", self.api_key.clone()),
                    ("limit", limit.to_string()),
                ],
            )
            .await?;

        Ok(candidates
            .into_iter()
            .map(|c| Coordinate {
                latitude: c.lat,
                longitude: c.lon,
            })
            .collect())
    }

    #[instrument(skip(self), fields(lat = %coord.latitude, lon = %coord.longitude))]
    async fn current(&self, coord: Coordinate) -> Result<CurrentObservation, LookupError> {
        debug!("Fetching current weather");

        let parsed: OwCurrentResponse = self
            .get_json(
                Endpoint::Current,
                &self.config.current_url,
                &self.coordinate_query(coord),
            )
            .await?;

        Ok(CurrentObservation {
            temperature_c: parsed.main.temp,
            min_temperature_c: parsed.main.temp_min,
            max_temperature_c: parsed.main.temp_max,
            conditions: labels(parsed.weather),
            wind_speed: parsed.wind.speed,
        })
    }

    #[instrument(skip(self), fields(lat = %coord.latitude, lon = %coord.longitude))]
    async fn forecast(&self, coord: Coordinate) -> Result<ForecastSeries, LookupError> {
        debug!("Fetching 5-day forecast");

        let parsed: OwForecastResponse = self
            .get_json(
                Endpoint::Forecast,
                &self.config.forecast_url,
                &self.coordinate_query(coord),
            )
            .await?;

        let samples = parsed
            .list
            .into_iter()
            .map(|entry| ForecastSample {
                timestamp: entry.dt_txt,
                temperature_c: entry.main.temp,
                conditions: labels(entry.weather),
            })
            .collect();

        Ok(ForecastSeries { samples })
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.chars().count() > MAX {
        format!("{}...", body.chars().take(MAX).collect::<String>())
    } else {
        body.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn forecast_entry_parses_dt_txt() {
        let entry: OwForecastEntry = serde_json::from_str(
            r#"{
                "dt": 1705320000,
                "main": { "temp": 4.2, "feels_like": 1.0 },
                "weather": [{ "id": 804, "main": "Clouds", "description": "overcast clouds" }],
                "dt_txt": "2024-01-15 12:00:00"
            }"#,
        )
        .unwrap();

        let expected = NaiveDate::from_ymd_opt(2024, 1, 15)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap();
        assert_eq!(entry.dt_txt, expected);
        assert_eq!(labels(entry.weather), vec!["Clouds".to_string()]);
    }

    #[test]
    fn forecast_entry_rejects_unparseable_timestamp() {
        let result: Result<OwForecastEntry, _> = serde_json::from_str(
            r#"{
                "main": { "temp": 4.2 },
                "weather": [],
                "dt_txt": "noon-ish"
            }"#,
        );

        assert!(result.is_err());
    }

    #[test]
    fn truncate_body_limits_long_bodies() {
        let long = "é".repeat(300);
        let truncated = truncate_body(&long);

        assert!(truncated.ends_with("..."));
        assert_eq!(truncated.chars().count(), 203);
        assert_eq!(truncate_body("short"), "short");
    }
}
