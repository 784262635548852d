//! Document export engine.
//!
//! `export` is a pure function: a selection of events plus a format in, a
//! named artifact out. The selection owns its events, so an export is a
//! frozen snapshot of the store at invocation time.

mod interactive;
mod paged;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{WorldCalError, WorldCalResult};
use crate::event::Event;

/// Output format for an export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// Paged PDF document.
    Paged,
    /// Self-contained interactive HTML slideshow.
    Interactive,
}

/// The generated document, ready to be written out.
#[derive(Debug, Clone)]
pub struct ExportArtifact {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// The resolved input of one export invocation.
///
/// Built fresh per export and discarded afterwards. `start`/`end` track
/// the actual event dates (min and max), not calendar-month boundaries.
#[derive(Debug, Clone)]
pub struct ExportSelection {
    /// The selected events, in store order.
    pub events: Vec<Event>,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl ExportSelection {
    /// Resolve a set of selected calendar months (1-12, any year) against
    /// an event collection.
    ///
    /// Fails with [`WorldCalError::NoEventsSelected`] when the months
    /// match no events; the caller surfaces that before any document
    /// generation happens.
    pub fn from_months(events: &[Event], months: &[u32]) -> WorldCalResult<Self> {
        if let Some(bad) = months.iter().find(|m| !(1..=12).contains(*m)) {
            return Err(WorldCalError::InvalidMonth(*bad));
        }

        let selected: Vec<Event> = events
            .iter()
            .filter(|e| months.contains(&e.date.month()))
            .cloned()
            .collect();

        let (Some(start), Some(end)) = (
            selected.iter().map(|e| e.date).min(),
            selected.iter().map(|e| e.date).max(),
        ) else {
            return Err(WorldCalError::NoEventsSelected);
        };

        Ok(ExportSelection {
            events: selected,
            start,
            end,
        })
    }
}

/// Generate the export document.
///
/// `generated_on` is the date the artifact is named after
/// (`calendar-events-<date>.pdf` / `calendar-presentation-<date>.html`);
/// callers pass today's local date.
pub fn export(
    selection: &ExportSelection,
    format: ExportFormat,
    generated_on: NaiveDate,
) -> WorldCalResult<ExportArtifact> {
    if selection.events.is_empty() {
        return Err(WorldCalError::NoEventsSelected);
    }

    let artifact = match format {
        ExportFormat::Paged => ExportArtifact {
            file_name: format!("calendar-events-{}.pdf", generated_on.format("%Y-%m-%d")),
            bytes: paged::render(selection)?,
        },
        ExportFormat::Interactive => ExportArtifact {
            file_name: format!(
                "calendar-presentation-{}.html",
                generated_on.format("%Y-%m-%d")
            ),
            bytes: interactive::render(selection).into_bytes(),
        },
    };
    Ok(artifact)
}
