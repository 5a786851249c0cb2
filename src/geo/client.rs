//! HTTP client for the countriesnow.space geography API
//!
//! Two lookups feed the wizard's location stage: the regions ("states") of a
//! country and the localities ("cities") of a region. Both are plain
//! JSON-over-HTTP POST endpoints.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default API endpoint
const DEFAULT_BASE_URL: &str = "https://countriesnow.space/api/v0.1";

/// Country the board serves; overridable through the config file
pub const DEFAULT_COUNTRY: &str = "india";

#[derive(Debug, Error)]
pub enum GeoError {
    #[error("geography API request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("geography API refused the query: {0}")]
    Api(String),
}

/// Region (state/province) entry as the API returns it
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RegionOption {
    pub name: String,
    #[serde(rename = "state_code")]
    pub code: String,
}

#[derive(Debug, Serialize)]
struct StatesRequest<'a> {
    country: &'a str,
}

#[derive(Debug, Serialize)]
struct CitiesRequest<'a> {
    country: &'a str,
    state: &'a str,
}

#[derive(Debug, Deserialize)]
struct StatesResponse {
    error: bool,
    msg: String,
    data: StatesData,
}

#[derive(Debug, Deserialize)]
struct StatesData {
    states: Vec<RegionOption>,
}

#[derive(Debug, Deserialize)]
struct CitiesResponse {
    error: bool,
    msg: String,
    data: Vec<String>,
}

/// Client for the public geography API
#[derive(Debug, Clone)]
pub struct GeoClient {
    client: reqwest::Client,
    base_url: String,
}

impl GeoClient {
    pub fn new(base_url: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
        }
    }

    /// List the regions ("states") of a country, in API order
    pub async fn fetch_states(&self, country: &str) -> Result<Vec<RegionOption>, GeoError> {
        let url = format!("{}/countries/states", self.base_url);
        let response: StatesResponse = self
            .client
            .post(&url)
            .json(&StatesRequest { country })
            .send()
            .await?
            .json()
            .await?;
        if response.error {
            return Err(GeoError::Api(response.msg));
        }
        Ok(response.data.states)
    }

    /// List the localities ("cities") of a region, in API order
    pub async fn fetch_cities(&self, country: &str, state: &str) -> Result<Vec<String>, GeoError> {
        let url = format!("{}/countries/state/cities", self.base_url);
        let response: CitiesResponse = self
            .client
            .post(&url)
            .json(&CitiesRequest { country, state })
            .send()
            .await?
            .json()
            .await?;
        if response.error {
            return Err(GeoError::Api(response.msg));
        }
        Ok(response.data)
    }
}

impl Default for GeoClient {
    fn default() -> Self {
        Self::new(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_states_response_decodes_wire_shape() {
        let payload = r#"{
            "error": false,
            "msg": "states in india retrieved",
            "data": {
                "name": "India",
                "iso3": "IND",
                "states": [
                    {"name": "Goa", "state_code": "GA"},
                    {"name": "Karnataka", "state_code": "KA"}
                ]
            }
        }"#;
        let response: StatesResponse = serde_json::from_str(payload).unwrap();
        assert!(!response.error);
        assert_eq!(response.data.states.len(), 2);
        assert_eq!(response.data.states[0].name, "Goa");
        assert_eq!(response.data.states[0].code, "GA");
    }

    #[test]
    fn test_cities_response_decodes_wire_shape() {
        let payload = r#"{
            "error": false,
            "msg": "cities retrieved",
            "data": ["Panaji", "Margao", "Mapusa"]
        }"#;
        let response: CitiesResponse = serde_json::from_str(payload).unwrap();
        assert_eq!(response.data, vec!["Panaji", "Margao", "Mapusa"]);
    }

    #[test]
    fn test_error_flag_reads_as_refusal() {
        let payload = r#"{"error": true, "msg": "no such country", "data": []}"#;
        let response: CitiesResponse = serde_json::from_str(payload).unwrap();
        assert!(response.error);
        assert_eq!(response.msg, "no such country");
    }

    #[test]
    fn test_states_request_serializes_country_key() {
        let body = serde_json::to_string(&StatesRequest { country: "india" }).unwrap();
        assert_eq!(body, r#"{"country":"india"}"#);
    }

    #[test]
    fn test_cities_request_serializes_both_keys() {
        let body = serde_json::to_string(&CitiesRequest {
            country: "india",
            state: "Goa",
        })
        .unwrap();
        assert_eq!(body, r#"{"country":"india","state":"Goa"}"#);
    }
}
