//! # Fuzz Target Model
//!
//! Normalizes the user-supplied target once, up front. The scheme defaults
//! to `http://` when absent, and the base domain is the host with any port
//! stripped, so appended `Host:` values never carry a port.

use std::fmt;
use std::str::FromStr;

use url::Url;

use crate::error::FuzzError;

/// A validated fuzzing target. Immutable after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetSpec {
    url: String,
    domain: String,
}

impl TargetSpec {
    /// Full target URL, scheme included.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Host portion of the URL, port stripped.
    pub fn domain(&self) -> &str {
        &self.domain
    }
}

impl fmt::Display for TargetSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url)
    }
}

impl FromStr for TargetSpec {
    type Err = FuzzError;

    /// Parses a string into a `TargetSpec`.
    ///
    /// Accepted forms:
    /// * **Full URL**: `https://app.example.com:8443/login`
    /// * **Bare host**: `example.com` (becomes `http://example.com`)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(FuzzError::InvalidTarget(s.to_string()));
        }

        let url = if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
            trimmed.to_string()
        } else {
            format!("http://{trimmed}")
        };

        let parsed = Url::parse(&url).map_err(|_| FuzzError::InvalidTarget(s.to_string()))?;
        let domain = parsed
            .host_str()
            .filter(|host| !host.is_empty())
            .ok_or_else(|| FuzzError::InvalidTarget(s.to_string()))?
            .to_string();

        Ok(Self { url, domain })
    }
}
