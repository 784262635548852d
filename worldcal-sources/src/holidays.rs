//! Holiday source backed by the Nager.Date API.
//!
//! One fetch per available country, fanned out concurrently and collected
//! in input order so the imported event sequence is deterministic. A
//! country whose fetch fails contributes nothing; the rest still import.

use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::Client;
use serde::Deserialize;
use worldcal_core::source::HolidaySource;
use worldcal_core::{Event, EventCategory};

const NAGER_BASE: &str = "https://date.nager.at/api/v3";

/// Colors cycled over imported holidays.
const HOLIDAY_COLORS: [&str; 8] = [
    "#3B82F6", // blue
    "#10B981", // green
    "#F59E0B", // yellow
    "#EF4444", // red
    "#8B5CF6", // purple
    "#EC4899", // pink
    "#06B6D4", // cyan
    "#F97316", // orange
];

/// Nager.Date v3 client.
#[derive(Debug, Clone)]
pub struct NagerClient {
    client: Client,
    base_url: String,
}

impl Default for NagerClient {
    fn default() -> Self {
        Self::new()
    }
}

impl NagerClient {
    pub fn new() -> Self {
        Self::with_base_url(NAGER_BASE)
    }

    /// Point the client at a different server (used by tests).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        NagerClient {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    async fn available_countries(&self) -> Result<Vec<NagerCountry>, reqwest::Error> {
        let url = format!("{}/AvailableCountries", self.base_url);
        self.client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await
    }

    /// One country's holidays; empty when anything goes wrong.
    async fn country_holidays(client: Client, base_url: String, year: i32, code: String) -> Vec<Event> {
        let url = format!("{base_url}/PublicHolidays/{year}/{code}");
        let holidays: Vec<NagerHoliday> = match client.get(&url).send().await {
            Ok(response) if response.status().is_success() => match response.json().await {
                Ok(holidays) => holidays,
                Err(err) => {
                    tracing::warn!(%err, country = %code, "malformed holiday response");
                    return Vec::new();
                }
            },
            Ok(response) => {
                tracing::warn!(status = %response.status(), country = %code, "holiday fetch failed");
                return Vec::new();
            }
            Err(err) => {
                tracing::warn!(%err, country = %code, "holiday fetch failed");
                return Vec::new();
            }
        };

        holidays
            .into_iter()
            .enumerate()
            .filter_map(|(index, holiday)| holiday.into_event(&code, index))
            .collect()
    }
}

#[async_trait]
impl HolidaySource for NagerClient {
    async fn fetch_holidays(&self, year: i32) -> Vec<Event> {
        let countries = match self.available_countries().await {
            Ok(countries) => countries,
            Err(err) => {
                tracing::warn!(%err, "failed to fetch available countries");
                return Vec::new();
            }
        };

        let handles: Vec<_> = countries
            .into_iter()
            .map(|country| {
                let client = self.client.clone();
                let base_url = self.base_url.clone();
                tokio::spawn(Self::country_holidays(
                    client,
                    base_url,
                    year,
                    country.country_code,
                ))
            })
            .collect();

        let mut events = Vec::new();
        for handle in handles {
            match handle.await {
                Ok(batch) => events.extend(batch),
                Err(err) => tracing::warn!(%err, "holiday fetch task panicked"),
            }
        }
        events
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct NagerCountry {
    country_code: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct NagerHoliday {
    date: String,
    local_name: Option<String>,
    name: String,
    #[serde(default)]
    types: Option<Vec<String>>,
}

impl NagerHoliday {
    /// Build the import event. The id is deterministic
    /// (`<date>-<country>-<index>`) so re-importing the same upstream
    /// data replaces rather than duplicates.
    fn into_event(self, country: &str, index: usize) -> Option<Event> {
        let date = match NaiveDate::parse_from_str(&self.date, "%Y-%m-%d") {
            Ok(date) => date,
            Err(err) => {
                tracing::warn!(%err, date = %self.date, country, "skipping holiday with bad date");
                return None;
            }
        };

        let kind_tag = self
            .types
            .as_ref()
            .and_then(|t| t.first())
            .map(|t| t.to_lowercase())
            .unwrap_or_else(|| "public-holiday".to_string());

        let description = self
            .local_name
            .filter(|local| local != &self.name && !local.is_empty());

        Some(Event {
            id: format!("{}-{}-{}", self.date, country, index),
            title: self.name,
            description,
            date,
            time: None,
            country: country.to_string(),
            color: HOLIDAY_COLORS[index % HOLIDAY_COLORS.len()].to_string(),
            category: EventCategory::Holiday,
            tags: vec!["holiday".to_string(), kind_tag],
            rich_content: vec![],
        })
    }
}
