//! Product codes as typed by the operator.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::LookupError;

/// Opaque product identifier used to query product details.
///
/// No format is enforced beyond non-emptiness. The text is kept exactly as
/// entered (it becomes one URL path segment), but input made only of
/// whitespace counts as empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductCode(String);

impl ProductCode {
    pub fn parse(raw: impl Into<String>) -> Result<Self, LookupError> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            return Err(LookupError::Input);
        }
        Ok(Self(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for ProductCode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for ProductCode {
    type Err = LookupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
