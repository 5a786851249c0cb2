//! Trait abstraction for the geography client to enable mocking in tests

use super::client::{GeoClient, GeoError, RegionOption};
use async_trait::async_trait;

/// Trait for geography lookups, enabling mocking in tests
#[allow(dead_code)]
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GeoClientTrait: Send + Sync {
    /// List the regions ("states") of a country
    async fn fetch_states(&self, country: &str) -> Result<Vec<RegionOption>, GeoError>;

    /// List the localities ("cities") of a region
    async fn fetch_cities(&self, country: &str, state: &str) -> Result<Vec<String>, GeoError>;
}

#[async_trait]
impl GeoClientTrait for GeoClient {
    async fn fetch_states(&self, country: &str) -> Result<Vec<RegionOption>, GeoError> {
        GeoClient::fetch_states(self, country).await
    }

    async fn fetch_cities(&self, country: &str, state: &str) -> Result<Vec<String>, GeoError> {
        GeoClient::fetch_cities(self, country, state).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_serves_canned_regions() {
        let mut mock = MockGeoClientTrait::new();
        mock.expect_fetch_states()
            .withf(|country| country == "india")
            .returning(|_| {
                Ok(vec![RegionOption {
                    name: "Goa".to_string(),
                    code: "GA".to_string(),
                }])
            });

        let states = tokio_test::block_on(mock.fetch_states("india")).unwrap();
        assert_eq!(states.len(), 1);
        assert_eq!(states[0].name, "Goa");
    }

    #[test]
    fn test_mock_reports_lookup_failure() {
        let mut mock = MockGeoClientTrait::new();
        mock.expect_fetch_cities()
            .returning(|_, _| Err(GeoError::Api("no such state".to_string())));

        let result = tokio_test::block_on(mock.fetch_cities("india", "Atlantis"));
        assert!(matches!(result, Err(GeoError::Api(_))));
    }
}
