//! Per-repository display overrides.
//!
//! External configuration substituting a repository's displayed URL or
//! description. The maps are injected explicitly at the presentation
//! boundary rather than living in module-level state.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::InvalidInputError;
use crate::repo::Repo;
use crate::Result;

/// Name-keyed replacement URLs and descriptions.
///
/// # Example
///
/// ```
/// use folio_core::DisplayOverrides;
///
/// let overrides = DisplayOverrides::from_json(
///     r#"{"urls": {"jumpgate": "https://example.com/jumpgate"}}"#,
/// ).unwrap();
/// assert!(!overrides.is_empty());
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DisplayOverrides {
    /// Repository name to replacement URL.
    #[serde(default)]
    pub urls: HashMap<String, String>,

    /// Repository name to replacement description.
    #[serde(default)]
    pub descriptions: HashMap<String, String>,
}

impl DisplayOverrides {
    /// Parse overrides from a JSON document.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is not valid JSON or doesn't match
    /// the expected shape.
    pub fn from_json(s: &str) -> Result<Self> {
        serde_json::from_str(s).map_err(|e| {
            InvalidInputError::Overrides {
                reason: e.to_string(),
            }
            .into()
        })
    }

    /// Effective URL for a repository: the override if one is configured,
    /// otherwise the record's own URL.
    pub fn url<'a>(&'a self, repo: &'a Repo) -> &'a str {
        self.urls
            .get(&repo.name)
            .map(String::as_str)
            .unwrap_or(&repo.html_url)
    }

    /// Effective description for a repository, override first.
    pub fn description<'a>(&'a self, repo: &'a Repo) -> Option<&'a str> {
        self.descriptions
            .get(&repo.name)
            .map(String::as_str)
            .or(repo.description.as_deref())
    }

    /// Returns true if no overrides are configured.
    pub fn is_empty(&self) -> bool {
        self.urls.is_empty() && self.descriptions.is_empty()
    }
}
