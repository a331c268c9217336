//! Fixed site surface
//!
//! The status endpoint relies on the caller's session cookies for
//! authentication; there is no token exchange.

/// Endpoint that records per-account listing status changes.
pub const STATUS_ENDPOINT: &str = "https://my.rightmove.co.uk/property/status";

/// URL patterns matching open search-results tabs, one per channel
/// (rentals and sales use different page paths).
pub fn search_page_patterns() -> [&'static str; 2] {
    [
        "*://www.rightmove.co.uk/property-to-rent/find.html*",
        "*://www.rightmove.co.uk/property-for-sale/search.html*",
    ]
}
