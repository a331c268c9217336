//! Wire model for the status endpoint

use hushmove_listing::PropertyId;
use serde::{Deserialize, Serialize};

/// Per-account action applied to a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum StatusAction {
    Hide,
}

/// One element of the request body.
///
/// The endpoint accepts a list of these; hushmove always sends exactly one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusUpdate {
    pub id: PropertyId,
    pub action: StatusAction,
}

impl StatusUpdate {
    pub fn hide(id: PropertyId) -> Self {
        Self {
            id,
            action: StatusAction::Hide,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hushmove_listing::property_id;

    #[test]
    fn test_body_shape() {
        let id = property_id("https://www.rightmove.co.uk/properties/134435768").unwrap();
        let body = vec![StatusUpdate::hide(id)];

        assert_eq!(
            serde_json::to_string(&body).unwrap(),
            r#"[{"id":"134435768","action":"HIDE"}]"#
        );
    }

    #[test]
    fn test_body_shape_is_digit_count_independent() {
        let id = property_id("https://www.rightmove.co.uk/properties/7").unwrap();
        let body = vec![StatusUpdate::hide(id)];

        assert_eq!(
            serde_json::to_string(&body).unwrap(),
            r#"[{"id":"7","action":"HIDE"}]"#
        );
    }
}
