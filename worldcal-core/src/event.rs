//! Calendar event types.
//!
//! Events are either user-created (UUID ids, built from a validated
//! [`EventDraft`]) or bulk-imported holidays (deterministic ids assigned by
//! the holiday source). The store only ever holds structurally valid
//! events: drafts are validated at the form boundary before an `Event`
//! exists.

use std::fmt::Display;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use url::Url;
use uuid::Uuid;

use crate::error::{WorldCalError, WorldCalResult};

/// Display color assigned to events created without an explicit color.
pub const DEFAULT_EVENT_COLOR: &str = "#3B82F6";

/// A calendar event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// Unique id, assigned at creation time, immutable.
    pub id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// The day this event is bucketed under. Day matching is always a
    /// calendar-date comparison, never an instant comparison.
    pub date: NaiveDate,
    /// Clock times. `None` means all-day; start and end always come as a
    /// pair (the wire format's "both present or both absent" rule is
    /// encoded in the type).
    #[serde(flatten)]
    pub time: Option<TimeRange>,
    /// ISO country code, required.
    pub country: String,
    /// Hex display color (`#RRGGBB`).
    pub color: String,
    pub category: EventCategory,
    /// Free-text labels, duplicates suppressed case-sensitively.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Attachments in insertion order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub rich_content: Vec<RichContent>,
}

impl Event {
    /// Events on the same calendar day regardless of clock times.
    pub fn is_on(&self, date: NaiveDate) -> bool {
        self.date == date
    }

    /// "3:00 PM - 4:00 PM", or "All Day" for events without clock times.
    pub fn time_label(&self) -> String {
        match &self.time {
            Some(range) => range.to_string(),
            None => "All Day".to_string(),
        }
    }
}

/// A start/end clock-time pair, 24h on the wire (`"HH:MM"`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeRange {
    #[serde(rename = "startTime", with = "clock_time")]
    pub start: NaiveTime,
    #[serde(rename = "endTime", with = "clock_time")]
    pub end: NaiveTime,
}

impl TimeRange {
    /// Parse a pair of 24h `"HH:MM"` strings.
    pub fn parse(start: &str, end: &str) -> WorldCalResult<Self> {
        Ok(TimeRange {
            start: parse_clock(start)?,
            end: parse_clock(end)?,
        })
    }
}

impl Display for TimeRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} - {}",
            self.start.format("%-I:%M %p"),
            self.end.format("%-I:%M %p")
        )
    }
}

fn parse_clock(s: &str) -> WorldCalResult<NaiveTime> {
    NaiveTime::parse_from_str(s, "%H:%M")
        .map_err(|_| WorldCalError::InvalidEvent(format!("Invalid clock time '{s}' (expected HH:MM)")))
}

/// Serde helper: clock times as `"HH:MM"` strings.
mod clock_time {
    use chrono::NaiveTime;
    use serde::{self, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&time.format("%H:%M").to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let s = String::deserialize(deserializer)?;
        NaiveTime::parse_from_str(&s, "%H:%M").map_err(serde::de::Error::custom)
    }
}

/// Event category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventCategory {
    Holiday,
    Cultural,
    Business,
    Personal,
    #[default]
    Other,
}

impl EventCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventCategory::Holiday => "holiday",
            EventCategory::Cultural => "cultural",
            EventCategory::Business => "business",
            EventCategory::Personal => "personal",
            EventCategory::Other => "other",
        }
    }
}

impl Display for EventCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for EventCategory {
    type Err = ();

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "holiday" => Ok(EventCategory::Holiday),
            "cultural" => Ok(EventCategory::Cultural),
            "business" => Ok(EventCategory::Business),
            "personal" => Ok(EventCategory::Personal),
            "other" => Ok(EventCategory::Other),
            _ => Err(()),
        }
    }
}

/// An attachment on an event: an image reference or a hyperlink.
///
/// Wire shape matches the upstream format:
/// `{"type": "image", "content": "<url>"}` /
/// `{"type": "link", "content": "<url>", "title": "..."}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum RichContent {
    Image {
        #[serde(rename = "content")]
        url: String,
    },
    Link {
        #[serde(rename = "content")]
        url: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        title: Option<String>,
    },
}

impl RichContent {
    pub fn url(&self) -> &str {
        match self {
            RichContent::Image { url } => url,
            RichContent::Link { url, .. } => url,
        }
    }

    /// Display text for a link: its title when present, the URL otherwise.
    pub fn label(&self) -> &str {
        match self {
            RichContent::Image { url } => url,
            RichContent::Link { url, title } => title.as_deref().unwrap_or(url),
        }
    }
}

/// Draft for a new event, as gathered from the user-facing form.
///
/// Not yet an [`Event`]: it has no id and has not been validated.
#[derive(Debug, Clone, Default)]
pub struct EventDraft {
    pub title: String,
    pub description: Option<String>,
    pub date: Option<NaiveDate>,
    pub time: Option<TimeRange>,
    pub country: String,
    pub color: Option<String>,
    pub category: EventCategory,
    pub tags: Vec<String>,
    pub rich_content: Vec<RichContent>,
}

impl EventDraft {
    /// Validate the draft and build an [`Event`] with a fresh UUID id.
    ///
    /// This is the form boundary: a draft that fails here never reaches
    /// the store.
    pub fn build(self) -> WorldCalResult<Event> {
        let title = self.title.trim().to_string();
        if title.is_empty() {
            return Err(WorldCalError::InvalidEvent("Title is required".into()));
        }
        if self.country.trim().is_empty() {
            return Err(WorldCalError::InvalidEvent("Country is required".into()));
        }
        let date = self
            .date
            .ok_or_else(|| WorldCalError::InvalidEvent("Date is required".into()))?;

        let color = match self.color {
            Some(c) => {
                validate_hex_color(&c)?;
                c
            }
            None => DEFAULT_EVENT_COLOR.to_string(),
        };

        for content in &self.rich_content {
            Url::parse(content.url()).map_err(|_| {
                WorldCalError::InvalidEvent(format!("Invalid URL '{}'", content.url()))
            })?;
        }

        Ok(Event {
            id: Uuid::new_v4().to_string(),
            title,
            description: self.description.filter(|d| !d.trim().is_empty()),
            date,
            time: self.time,
            country: self.country,
            color,
            category: self.category,
            tags: dedup_tags(self.tags),
            rich_content: self.rich_content,
        })
    }
}

fn validate_hex_color(color: &str) -> WorldCalResult<()> {
    let digits = color.strip_prefix('#').unwrap_or("");
    if digits.len() == 6 && digits.chars().all(|c| c.is_ascii_hexdigit()) {
        Ok(())
    } else {
        Err(WorldCalError::InvalidEvent(format!(
            "Invalid color '{color}' (expected #RRGGBB)"
        )))
    }
}

/// Drop duplicate tags, case-sensitively, keeping the first occurrence.
pub(crate) fn dedup_tags(tags: Vec<String>) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    tags.into_iter().filter(|t| seen.insert(t.clone())).collect()
}
