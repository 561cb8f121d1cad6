//! Reshapes raw provider payloads into the flat model the report page renders.

use chrono::{Days, NaiveDate, NaiveDateTime, Timelike};

use crate::{
    error::{Endpoint, LookupError},
    model::{
        CurrentConditions, CurrentObservation, DailyForecastEntry, ForecastSample, ForecastSeries,
        WeatherReport,
    },
};

/// Hour of day whose sample stands in for the whole day.
const MIDDAY_HOUR: u32 = 12;

#[derive(Debug, Clone, Copy)]
pub struct ForecastShaper {
    days: u8,
}

impl Default for ForecastShaper {
    fn default() -> Self {
        Self { days: 5 }
    }
}

impl ForecastShaper {
    pub fn new(days: u8) -> Self {
        Self { days }
    }

    /// Build the report for `place_name` as seen on `today`.
    ///
    /// Forecast entries pair the day labels `today..today + days` with the
    /// midday samples in provider order, truncated to the shorter of the two.
    /// Missing midday samples shorten the forecast; nothing is padded.
    pub fn shape(
        &self,
        place_name: &str,
        current: &CurrentObservation,
        forecast: &ForecastSeries,
        today: NaiveDate,
    ) -> Result<WeatherReport, LookupError> {
        let current = CurrentConditions {
            temperature_c: round_c(current.temperature_c),
            min_temperature_c: round_c(current.min_temperature_c),
            max_temperature_c: round_c(current.max_temperature_c),
            condition: primary_condition(&current.conditions, Endpoint::Current)?,
            wind_speed: current.wind_speed,
        };

        let forecast = day_labels(today, self.days)
            .into_iter()
            .zip(midday_samples(forecast))
            .map(|(day, sample)| {
                Ok(DailyForecastEntry {
                    day,
                    temperature_c: round_c(sample.temperature_c),
                    condition: primary_condition(&sample.conditions, Endpoint::Forecast)?,
                })
            })
            .collect::<Result<Vec<_>, LookupError>>()?;

        Ok(WeatherReport {
            place_name: place_name.to_string(),
            display_date: display_date(today),
            current,
            forecast,
        })
    }
}

/// Round half away from zero: 21.5 → 22, -0.5 → -1.
pub fn round_c(value: f64) -> i64 {
    value.round() as i64
}

/// Short weekday names for `days` consecutive days starting at `start`.
pub fn day_labels(start: NaiveDate, days: u8) -> Vec<String> {
    (0..u64::from(days))
        .map_while(|offset| start.checked_add_days(Days::new(offset)))
        .map(|date| date.format("%a").to_string())
        .collect()
}

/// e.g. "Friday, November 21".
pub fn display_date(date: NaiveDate) -> String {
    date.format("%A, %B %d").to_string()
}

fn is_midday(timestamp: &NaiveDateTime) -> bool {
    timestamp.hour() == MIDDAY_HOUR && timestamp.minute() == 0 && timestamp.second() == 0
}

/// Samples taken exactly at midday, in provider order.
pub fn midday_samples(forecast: &ForecastSeries) -> impl Iterator<Item = &ForecastSample> {
    forecast.samples.iter().filter(|s| is_midday(&s.timestamp))
}

fn primary_condition(conditions: &[String], endpoint: Endpoint) -> Result<String, LookupError> {
    conditions
        .first()
        .cloned()
        .ok_or_else(|| LookupError::MalformedData {
            endpoint,
            reason: "missing weather condition".to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn monday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
    }

    fn observation(temp: f64, min: f64, max: f64) -> CurrentObservation {
        CurrentObservation {
            temperature_c: temp,
            min_temperature_c: min,
            max_temperature_c: max,
            conditions: vec!["Clouds".into(), "Mist".into()],
            wind_speed: 3.6,
        }
    }

    /// Three-hourly samples starting on `start` at `hour`, temperature = sample index.
    fn three_hourly(start: NaiveDate, hour: u32, count: u32) -> ForecastSeries {
        let origin = start.and_hms_opt(hour, 0, 0).unwrap();
        let samples = (0..count)
            .map(|i| ForecastSample {
                timestamp: origin + chrono::Duration::hours(3 * i64::from(i)),
                temperature_c: f64::from(i),
                conditions: vec![format!("Cond{i}")],
            })
            .collect();
        ForecastSeries { samples }
    }

    #[test]
    fn current_temperatures_are_rounded() {
        let report = ForecastShaper::default()
            .shape(
                "Paris",
                &observation(21.6, 18.2, 24.9),
                &ForecastSeries::default(),
                monday(),
            )
            .unwrap();

        assert_eq!(report.current.temperature_c, 22);
        assert_eq!(report.current.min_temperature_c, 18);
        assert_eq!(report.current.max_temperature_c, 25);
        assert_eq!(report.current.condition, "Clouds");
        assert_eq!(report.current.wind_speed, 3.6);
    }

    #[test]
    fn halves_round_away_from_zero() {
        assert_eq!(round_c(21.5), 22);
        assert_eq!(round_c(22.5), 23);
        assert_eq!(round_c(-0.5), -1);
        assert_eq!(round_c(-3.4), -3);
    }

    #[test]
    fn day_labels_walk_from_start_date() {
        assert_eq!(day_labels(monday(), 5), ["Mon", "Tue", "Wed", "Thu", "Fri"]);

        let saturday = NaiveDate::from_ymd_opt(2024, 1, 20).unwrap();
        assert_eq!(day_labels(saturday, 3), ["Sat", "Sun", "Mon"]);
    }

    #[test]
    fn display_date_uses_long_names() {
        let date = NaiveDate::from_ymd_opt(2025, 11, 21).unwrap();
        assert_eq!(display_date(date), "Friday, November 21");
    }

    #[test]
    fn forecast_uses_midday_samples_in_order() {
        // Monday 12:00 through Friday 18:00.
        let forecast = three_hourly(monday(), 12, 35);
        assert_eq!(forecast.samples.len(), 35);
        assert_eq!(midday_samples(&forecast).count(), 5);

        let report = ForecastShaper::default()
            .shape("Paris", &observation(1.0, 0.0, 2.0), &forecast, monday())
            .unwrap();

        let days: Vec<_> = report.forecast.iter().map(|e| e.day.as_str()).collect();
        let temps: Vec<_> = report.forecast.iter().map(|e| e.temperature_c).collect();
        let conditions: Vec<_> = report.forecast.iter().map(|e| e.condition.as_str()).collect();

        assert_eq!(days, ["Mon", "Tue", "Wed", "Thu", "Fri"]);
        assert_eq!(temps, [0, 8, 16, 24, 32]);
        assert_eq!(conditions, ["Cond0", "Cond8", "Cond16", "Cond24", "Cond32"]);
    }

    #[test]
    fn fewer_midday_samples_shorten_the_forecast() {
        let forecast = three_hourly(monday(), 0, 16);

        let report = ForecastShaper::default()
            .shape("Paris", &observation(1.0, 0.0, 2.0), &forecast, monday())
            .unwrap();

        assert_eq!(report.forecast.len(), 2);
        assert_eq!(report.forecast[1].day, "Tue");
    }

    #[test]
    fn extra_midday_samples_are_truncated_to_forecast_days() {
        let forecast = three_hourly(monday(), 0, 8 * 7);

        let report = ForecastShaper::new(5)
            .shape("Paris", &observation(1.0, 0.0, 2.0), &forecast, monday())
            .unwrap();

        assert_eq!(report.forecast.len(), 5);
    }

    #[test]
    fn samples_near_but_not_at_midday_are_ignored() {
        let day = monday();
        let forecast = ForecastSeries {
            samples: vec![
                ForecastSample {
                    timestamp: day.and_hms_opt(12, 30, 0).unwrap(),
                    temperature_c: 10.0,
                    conditions: vec!["Rain".into()],
                },
                ForecastSample {
                    timestamp: day.and_hms_opt(11, 59, 59).unwrap(),
                    temperature_c: 11.0,
                    conditions: vec!["Rain".into()],
                },
            ],
        };

        assert_eq!(midday_samples(&forecast).count(), 0);
    }

    #[test]
    fn missing_condition_is_malformed_data() {
        let mut current = observation(1.0, 0.0, 2.0);
        current.conditions.clear();

        let err = ForecastShaper::default()
            .shape("Paris", &current, &ForecastSeries::default(), monday())
            .unwrap_err();

        assert!(matches!(
            err,
            LookupError::MalformedData {
                endpoint: Endpoint::Current,
                ..
            }
        ));
    }
}
