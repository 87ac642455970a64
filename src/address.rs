/// Canonical Ethereum account identifiers
///
/// Every address that enters the pipeline, whether from a request, an
/// upstream record or the known-entity tables, goes through [`Address`], so
/// comparisons and cache keys only ever see the lowercase `0x` form.
use crate::errors::AnalyzerError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

static ADDRESS_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^0x[0-9a-f]{40}$").expect("Invalid address pattern regex"));

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Address(String);

impl Address {
    /// Parse user input, rejecting anything that is not 0x + 40 hex digits
    ///
    /// Input is lowercased before matching, so an uppercase `0X` prefix is
    /// accepted as well.
    pub fn parse(input: &str) -> Result<Self, AnalyzerError> {
        let canonical = input.trim().to_lowercase();
        if !ADDRESS_PATTERN.is_match(&canonical) {
            return Err(AnalyzerError::InvalidAddress {
                input: input.trim().to_string(),
            });
        }
        Ok(Self(canonical))
    }

    /// Canonicalize without validating shape (upstream data, static tables)
    pub fn normalized(input: &str) -> Self {
        Self(input.trim().to_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(Address::normalized(&raw))
    }
}
