//! URL match patterns
//!
//! WebExtension-style match patterns: `<scheme>://<host><path>` where the
//! scheme may be `*` (http or https) and `*` elsewhere matches any run of
//! characters. Patterns are matched against the tab's full URL string,
//! query string included.

use std::fmt;
use std::str::FromStr;

use regex::Regex;

use crate::error::TabError;
use crate::Result;

#[derive(Debug, Clone)]
pub struct UrlPattern {
    raw: String,
    regex: Regex,
}

impl UrlPattern {
    /// Compile a match pattern.
    ///
    /// Fails on a missing `://` separator or an unsupported scheme.
    pub fn parse(pattern: &str) -> Result<Self> {
        let (scheme, rest) = pattern.split_once("://").ok_or_else(|| TabError::Pattern {
            pattern: pattern.to_string(),
            reason: "missing '://'".to_string(),
        })?;

        let scheme_re = match scheme {
            "*" => "https?",
            "http" => "http",
            "https" => "https",
            other => {
                return Err(TabError::Pattern {
                    pattern: pattern.to_string(),
                    reason: format!("unsupported scheme {other:?}"),
                })
            }
        };

        // Everything after the scheme is a glob: escape the literal runs,
        // splice `.*` where the wildcards were.
        let body = rest
            .split('*')
            .map(regex::escape)
            .collect::<Vec<_>>()
            .join(".*");

        let regex =
            Regex::new(&format!("^{scheme_re}://{body}$")).map_err(|e| TabError::Pattern {
                pattern: pattern.to_string(),
                reason: e.to_string(),
            })?;

        Ok(Self {
            raw: pattern.to_string(),
            regex,
        })
    }

    pub fn matches(&self, url: &str) -> bool {
        self.regex.is_match(url)
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

impl FromStr for UrlPattern {
    type Err = TabError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for UrlPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}
