//! Repository operation types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A repository as returned by the listing endpoint.
///
/// Every field needed for ranking (`pushed_at`, `created_at`, `watchers`)
/// is guaranteed present: payloads missing them are rejected at parse time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Repo {
    /// Repository name, unique within one organization's result set.
    pub name: String,

    /// Free-text description, if any.
    pub description: Option<String>,

    /// Primary language tag, used for display classification.
    pub language: Option<String>,

    /// Canonical web URL.
    pub html_url: String,

    /// Timestamp of the last code push.
    pub pushed_at: DateTime<Utc>,

    /// Timestamp of repository creation.
    pub created_at: DateTime<Utc>,

    /// Watcher count.
    pub watchers: u64,
}

/// One page of repositories from the listing endpoint.
#[derive(Debug, Clone)]
pub struct RepoPage {
    /// The records in this page, in arrival order. Malformed records may
    /// have been skipped, so this can be shorter than the wire payload.
    pub repos: Vec<Repo>,

    /// True if the wire payload itself contained no records — the API's
    /// end-of-data signal. A page whose records were all skipped as
    /// malformed is not end-of-data.
    pub end_of_data: bool,
}

/// An organization member or repository contributor.
///
/// Used only for display counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Account login.
    pub login: String,
}

/// A repository milestone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Milestone {
    /// Milestone title.
    pub title: String,

    /// When the milestone was last updated.
    pub updated_at: DateTime<Utc>,
}

/// A repository tag. The newest tag's name doubles as the released version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    /// Tag name.
    pub name: String,
}
