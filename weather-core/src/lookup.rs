//! City lookup pipeline: resolve → fetch current + forecast → shape.

use std::sync::Arc;

use chrono::{Local, NaiveDate};
use tracing::{info, instrument, warn};

use crate::{
    config::OpenWeatherConfig,
    error::LookupError,
    model::WeatherReport,
    provider::WeatherProvider,
    resolver::GeoResolver,
    shaper::ForecastShaper,
};

/// Runs one city lookup end to end. Holds no per-request state.
#[derive(Debug, Clone)]
pub struct WeatherService {
    provider: Arc<dyn WeatherProvider>,
    resolver: GeoResolver,
    shaper: ForecastShaper,
}

impl WeatherService {
    pub fn new(provider: Arc<dyn WeatherProvider>, config: &OpenWeatherConfig) -> Self {
        Self {
            resolver: GeoResolver::new(Arc::clone(&provider), config.geocoding_limit),
            shaper: ForecastShaper::new(config.forecast_days),
            provider,
        }
    }

    /// Look up the weather for a user-entered place name, dated today in local time.
    pub async fn lookup(&self, place: &str) -> Result<WeatherReport, LookupError> {
        self.lookup_on(place, Local::now().date_naive()).await
    }

    /// Same as [`lookup`](Self::lookup) with an explicit "today".
    #[instrument(skip(self))]
    pub async fn lookup_on(
        &self,
        place: &str,
        today: NaiveDate,
    ) -> Result<WeatherReport, LookupError> {
        let result = self.run(place, today).await;

        match &result {
            Ok(report) => info!(
                place = %report.place_name,
                forecast_days = report.forecast.len(),
                "Weather lookup finished"
            ),
            Err(err) => warn!(error = %err, status = ?err.status(), "Weather lookup failed"),
        }

        result
    }

    async fn run(&self, place: &str, today: NaiveDate) -> Result<WeatherReport, LookupError> {
        let resolved = self.resolver.resolve(place).await?;

        // Both fetches only need the coordinate, so they run concurrently.
        let (current, forecast) = tokio::try_join!(
            self.provider.current(resolved.coordinate),
            self.provider.forecast(resolved.coordinate),
        )?;

        self.shaper.shape(&resolved.name, &current, &forecast, today)
    }
}
