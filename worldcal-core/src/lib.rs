//! Core types and logic for the worldcal ecosystem.
//!
//! This crate provides everything that is pure data-and-logic:
//! - [`event`] / [`store`]: the event model and the in-memory store
//! - [`grid`]: the month grid builder with per-day event buckets
//! - [`slides`]: month grouping and the presentation state machine
//! - [`export`]: the document export engine (paged PDF, interactive HTML)
//! - [`source`]: contracts for the external reference-data collaborators
//!
//! Network implementations of the collaborator contracts live in
//! `worldcal-sources`; the CLI surface lives in `worldcal-cli`.

pub mod country;
pub mod datetime;
pub mod error;
pub mod event;
pub mod export;
pub mod grid;
pub mod slides;
pub mod source;
pub mod store;

pub use country::Country;
pub use error::{WorldCalError, WorldCalResult};
pub use event::{Event, EventCategory, EventDraft, RichContent, TimeRange, DEFAULT_EVENT_COLOR};
pub use export::{export, ExportArtifact, ExportFormat, ExportSelection};
pub use grid::{DaySelection, GridDay, MonthGrid};
pub use slides::{build_slides, group_by_month, MonthGroup, Slide, SlideShow};
pub use source::{CountrySource, HolidaySource, TimezoneSource, TIME_UNAVAILABLE};
pub use store::{EventFilter, EventStore};
