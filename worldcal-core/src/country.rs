//! Country reference data.

use serde::{Deserialize, Serialize};

/// A country as returned by the country source.
///
/// `code` is the ISO 3166-1 alpha-2 code and is what `Event::country`
/// refers to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Country {
    pub code: String,
    pub name: String,
    /// Flag image URL.
    pub flag: String,
    pub capital: String,
}
