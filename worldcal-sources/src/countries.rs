//! Country source backed by the REST Countries API.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use worldcal_core::source::CountrySource;
use worldcal_core::Country;

use crate::http::fetch_with_retry;

const REST_COUNTRIES_BASE: &str = "https://restcountries.com/v3.1";

/// REST Countries v3.1 client.
#[derive(Debug, Clone)]
pub struct RestCountriesClient {
    client: Client,
    base_url: String,
}

impl Default for RestCountriesClient {
    fn default() -> Self {
        Self::new()
    }
}

impl RestCountriesClient {
    pub fn new() -> Self {
        Self::with_base_url(REST_COUNTRIES_BASE)
    }

    /// Point the client at a different server (used by tests).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        RestCountriesClient {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    async fn try_fetch(&self) -> Result<Vec<Country>, crate::http::FetchError> {
        let url = format!("{}/all", self.base_url);
        let response = fetch_with_retry(&self.client, &url).await?;
        let records: Vec<RestCountry> = response.json().await?;

        let mut countries: Vec<Country> = records
            .into_iter()
            .map(|record| Country {
                code: record.cca2,
                name: record.name.common,
                flag: record.flags.svg,
                capital: record
                    .capital
                    .and_then(|mut c| if c.is_empty() { None } else { Some(c.remove(0)) })
                    .unwrap_or_else(|| "N/A".to_string()),
            })
            .collect();
        countries.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(countries)
    }
}

#[async_trait]
impl CountrySource for RestCountriesClient {
    async fn fetch_countries(&self) -> Vec<Country> {
        match self.try_fetch().await {
            Ok(countries) => countries,
            Err(err) => {
                tracing::warn!(%err, "failed to fetch countries");
                Vec::new()
            }
        }
    }
}

#[derive(Debug, Deserialize)]
struct RestCountry {
    cca2: String,
    name: RestCountryName,
    flags: RestCountryFlags,
    capital: Option<Vec<String>>,
}

#[derive(Debug, Deserialize)]
struct RestCountryName {
    common: String,
}

#[derive(Debug, Deserialize)]
struct RestCountryFlags {
    svg: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn body() -> serde_json::Value {
        serde_json::json!([
            {
                "cca2": "DE",
                "name": { "common": "Germany" },
                "flags": { "svg": "https://flags.example/de.svg" },
                "capital": ["Berlin"]
            },
            {
                "cca2": "AQ",
                "name": { "common": "Antarctica" },
                "flags": { "svg": "https://flags.example/aq.svg" },
                "capital": null
            }
        ])
    }

    #[tokio::test]
    async fn countries_are_mapped_and_sorted_by_name() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/all"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body()))
            .mount(&server)
            .await;

        let countries = RestCountriesClient::with_base_url(server.uri())
            .fetch_countries()
            .await;

        assert_eq!(countries.len(), 2);
        assert_eq!(countries[0].name, "Antarctica");
        assert_eq!(countries[0].capital, "N/A");
        assert_eq!(countries[1].code, "DE");
        assert_eq!(countries[1].capital, "Berlin");
    }

    #[tokio::test]
    async fn failure_yields_an_empty_sequence() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/all"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let countries = RestCountriesClient::with_base_url(server.uri())
            .fetch_countries()
            .await;
        assert!(countries.is_empty());
    }
}
