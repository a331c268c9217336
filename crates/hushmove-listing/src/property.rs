//! Property identifiers

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Numeric id of a listing, as it appears in a detail-page URL.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PropertyId(String);

impl PropertyId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PropertyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Extract the property id from a detail-page URL.
///
/// Detail pages carry the id as a numeric path segment, e.g.
/// `https://www.rightmove.co.uk/properties/134435768#/?channel=RES_LET`.
/// Returns `None` for anything else; callers treat that as "this tab is
/// not a property page".
pub fn property_id(url: &str) -> Option<PropertyId> {
    static PROPERTY_PATH: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"/properties/(\d+)").unwrap());

    PROPERTY_PATH
        .captures(url)
        .map(|caps| PropertyId(caps[1].to_string()))
}
