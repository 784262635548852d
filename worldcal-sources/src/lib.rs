//! Reference-data sources for worldcal.
//!
//! Implements the collaborator contracts from `worldcal-core::source`:
//! - [`RestCountriesClient`]: country list via the REST Countries API
//! - [`NagerClient`]: public holidays via the Nager.Date API
//! - [`IanaTimezones`]: timezone details from the bundled tz database
//!
//! All of them degrade to empty/placeholder results on failure (logged at
//! `warn`), matching the contracts' never-raise boundary.

mod countries;
mod holidays;
mod http;
mod timezone;

pub use countries::RestCountriesClient;
pub use holidays::NagerClient;
pub use timezone::IanaTimezones;
