//! Rightmove URL knowledge
//!
//! Everything hushmove knows about the target site lives here: how a
//! property id appears in a detail-page URL, which URL patterns identify
//! search-results pages, and where the property status endpoint is.
//! Deliberately one site, three patterns, no abstraction.

mod property;
mod site;

pub use property::{property_id, PropertyId};
pub use site::{search_page_patterns, STATUS_ENDPOINT};
