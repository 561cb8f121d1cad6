//! Place name → coordinate resolution.

use std::sync::Arc;

use tracing::debug;

use crate::{error::LookupError, model::Coordinate, provider::WeatherProvider};

/// A place name resolved to its canonical (first) geocoding match.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedPlace {
    /// Title-cased name as shown to the user.
    pub name: String,
    pub coordinate: Coordinate,
}

#[derive(Debug, Clone)]
pub struct GeoResolver {
    provider: Arc<dyn WeatherProvider>,
    limit: u8,
}

impl GeoResolver {
    pub fn new(provider: Arc<dyn WeatherProvider>, limit: u8) -> Self {
        Self { provider, limit }
    }

    /// Resolve a user-entered place name.
    ///
    /// The first candidate returned by the provider is taken as-is; an empty
    /// candidate list is reported as `LookupError::UnresolvablePlace`.
    pub async fn resolve(&self, place: &str) -> Result<ResolvedPlace, LookupError> {
        let name = title_case(place);
        if name.is_empty() {
            return Err(LookupError::UnresolvablePlace(place.to_string()));
        }

        let candidates = self.provider.geocode(&name, self.limit).await?;
        debug!(place = %name, candidates = candidates.len(), "Geocoding finished");

        let coordinate = candidates
            .first()
            .copied()
            .ok_or_else(|| LookupError::UnresolvablePlace(name.clone()))?;

        Ok(ResolvedPlace { name, coordinate })
    }
}

/// Capitalize each whitespace-separated word and lowercase the rest of it.
///
/// "oklahoma  CITY" → "Oklahoma City". Runs of whitespace collapse to one space.
pub fn title_case(input: &str) -> String {
    input
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        error::Endpoint,
        model::{CurrentObservation, ForecastSeries},
    };
    use async_trait::async_trait;
    use std::sync::Mutex;

    #[derive(Debug, Default)]
    struct FakeGeocoder {
        candidates: Vec<Coordinate>,
        queries: Mutex<Vec<(String, u8)>>,
    }

    #[async_trait]
    impl WeatherProvider for FakeGeocoder {
        async fn geocode(&self, place: &str, limit: u8) -> Result<Vec<Coordinate>, LookupError> {
            self.queries.lock().unwrap().push((place.to_string(), limit));
            Ok(self.candidates.clone())
        }

        async fn current(&self, _coord: Coordinate) -> Result<CurrentObservation, LookupError> {
            Err(LookupError::Upstream {
                endpoint: Endpoint::Current,
                status: 500,
            })
        }

        async fn forecast(&self, _coord: Coordinate) -> Result<ForecastSeries, LookupError> {
            Err(LookupError::Upstream {
                endpoint: Endpoint::Forecast,
                status: 500,
            })
        }
    }

    fn coord(latitude: f64, longitude: f64) -> Coordinate {
        Coordinate {
            latitude,
            longitude,
        }
    }

    #[test]
    fn title_case_matches_capwords() {
        assert_eq!(title_case("oklahoma city"), "Oklahoma City");
        assert_eq!(title_case("  NEW   york "), "New York");
        assert_eq!(title_case("são paulo"), "São Paulo");
        assert_eq!(title_case("o'hare"), "O'hare");
        assert_eq!(title_case("   "), "");
    }

    #[tokio::test]
    async fn resolve_picks_first_candidate() {
        let fake = Arc::new(FakeGeocoder {
            candidates: vec![coord(35.47, -97.52), coord(1.0, 2.0), coord(3.0, 4.0)],
            ..Default::default()
        });
        let resolver = GeoResolver::new(fake.clone(), 3);

        let place = resolver.resolve("oklahoma city").await.unwrap();

        assert_eq!(place.name, "Oklahoma City");
        assert_eq!(place.coordinate, coord(35.47, -97.52));
        assert_eq!(
            *fake.queries.lock().unwrap(),
            vec![("Oklahoma City".to_string(), 3)]
        );
    }

    #[tokio::test]
    async fn resolve_reports_unresolvable_on_empty_result() {
        let fake = Arc::new(FakeGeocoder::default());
        let resolver = GeoResolver::new(fake, 3);

        let err = resolver.resolve("zzqq_nonexistent").await.unwrap_err();

        assert!(err.is_unresolvable());
    }

    #[tokio::test]
    async fn resolve_rejects_blank_name_without_calling_provider() {
        let fake = Arc::new(FakeGeocoder::default());
        let resolver = GeoResolver::new(fake.clone(), 3);

        let err = resolver.resolve("  ").await.unwrap_err();

        assert!(err.is_unresolvable());
        assert!(fake.queries.lock().unwrap().is_empty());
    }
}
