//! Collaborator contracts consumed by the core.
//!
//! These are the seams to the external reference-data services (country
//! list, public holidays, timezone details). Implementations live in
//! `worldcal-sources`; the core only sees their completed results.
//!
//! All methods are infallible by contract: a failed fetch degrades to an
//! empty sequence or a placeholder value, never an error crossing this
//! boundary, so every downstream state stays renderable.

use async_trait::async_trait;

use crate::country::Country;
use crate::event::Event;

/// Placeholder clock shown when a timezone lookup fails.
pub const TIME_UNAVAILABLE: &str = "--:--";

/// Source of the country reference set.
#[async_trait]
pub trait CountrySource {
    /// Countries sorted by name; empty on failure.
    async fn fetch_countries(&self) -> Vec<Country>;
}

/// Source of public holidays, one year at a time.
#[async_trait]
pub trait HolidaySource {
    /// Holidays for every available country as ready-to-import events
    /// (`category = holiday`, tags including `"holiday"`). A country
    /// whose fetch fails is omitted; total failure yields an empty
    /// sequence.
    async fn fetch_holidays(&self, year: i32) -> Vec<Event>;
}

/// Timezone details for display.
pub trait TimezoneSource {
    /// Best-effort IANA zone name for a country; `"UTC"` when nothing
    /// matches.
    fn resolve_timezone(&self, country: &Country) -> String;

    /// Current wall-clock time in the zone, or [`TIME_UNAVAILABLE`].
    fn current_time(&self, zone: &str) -> String;

    /// UTC offset like `"+05:30"` (`"+0"` for UTC itself), or empty on
    /// error.
    fn utc_offset(&self, zone: &str) -> String;

    /// Whether the zone observes daylight saving time; `false` on error.
    fn observes_dst(&self, zone: &str) -> bool;
}
