pub mod countries;
pub mod export;
pub mod holidays;
pub mod info;
pub mod show;

use std::time::Duration;

use anyhow::Result;
use indicatif::ProgressBar;
use worldcal_core::source::HolidaySource;
use worldcal_core::{EventCategory, EventStore};
use worldcal_sources::NagerClient;

/// Fetch one year of public holidays into the store, with a spinner while
/// the fan-out runs. Returns how many events were imported.
pub(crate) async fn import_holidays(store: &mut EventStore, year: i32) -> usize {
    let spinner = ProgressBar::new_spinner();
    spinner.set_message(format!("Fetching public holidays for {year}..."));
    spinner.enable_steady_tick(Duration::from_millis(100));

    let events = NagerClient::new().fetch_holidays(year).await;
    spinner.finish_and_clear();

    let count = events.len();
    store.import(events);
    count
}

pub(crate) fn parse_category(arg: &str) -> Result<EventCategory> {
    arg.to_lowercase().parse().map_err(|_| {
        anyhow::anyhow!("Unknown category '{arg}' (holiday, cultural, business, personal, other)")
    })
}
