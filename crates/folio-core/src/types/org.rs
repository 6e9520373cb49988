//! Organization login type.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, InvalidInputError};

/// Maximum length of a GitHub login.
const MAX_LEN: usize = 39;

/// A validated organization login.
///
/// Logins are 1-39 characters of ASCII alphanumerics and hyphens, with no
/// leading, trailing or consecutive hyphens.
///
/// # Example
///
/// ```
/// use folio_core::OrgName;
///
/// let org = OrgName::new("softlayer").unwrap();
/// assert_eq!(org.as_str(), "softlayer");
/// assert!(OrgName::new("-nope-").is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct OrgName(String);

impl OrgName {
    /// Create a new organization login from a string, validating the format.
    ///
    /// # Errors
    ///
    /// Returns an error if the login is empty, too long, or contains
    /// characters GitHub does not allow in logins.
    pub fn new(s: impl AsRef<str>) -> Result<Self, Error> {
        let s = s.as_ref();
        Self::validate(s)?;
        Ok(Self(s.to_string()))
    }

    /// Returns the login as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn validate(s: &str) -> Result<(), Error> {
        let invalid = |reason: &str| {
            Error::InvalidInput(InvalidInputError::OrgName {
                value: s.to_string(),
                reason: reason.to_string(),
            })
        };

        if s.is_empty() {
            return Err(invalid("must not be empty"));
        }
        if s.len() > MAX_LEN {
            return Err(invalid("must be at most 39 characters"));
        }
        if !s.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
            return Err(invalid(
                "must contain only ASCII alphanumerics and hyphens",
            ));
        }
        if s.starts_with('-') || s.ends_with('-') {
            return Err(invalid("must not start or end with a hyphen"));
        }
        if s.contains("--") {
            return Err(invalid("must not contain consecutive hyphens"));
        }

        Ok(())
    }
}

impl fmt::Display for OrgName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for OrgName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for OrgName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Serialize for OrgName {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for OrgName {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        OrgName::new(&s).map_err(serde::de::Error::custom)
    }
}
