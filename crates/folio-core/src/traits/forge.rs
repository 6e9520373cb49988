//! Forge trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::repo::{Account, Milestone, RepoPage, Tag};
use crate::types::OrgName;
use crate::Result;

/// A source-hosting API.
///
/// The [`Collector`](crate::Collector) drives `repos_page` to assemble the
/// full repository set. The remaining operations are independent single
/// reads used for display: member and contributor counts, and the flagship
/// repository's latest milestone, commit and tag.
#[async_trait]
pub trait Forge: Send + Sync {
    /// Fetch one page of an organization's repositories.
    ///
    /// Page numbers start at 1. End-of-data is signaled by
    /// [`RepoPage::end_of_data`], which reflects the wire payload: a page
    /// whose records were all rejected as malformed is not end-of-data.
    async fn repos_page(&self, org: &OrgName, page: u32, per_page: u32) -> Result<RepoPage>;

    /// Fetch an organization's members.
    async fn members(&self, org: &OrgName) -> Result<Vec<Account>>;

    /// Fetch the contributors of one of the organization's repositories.
    async fn contributors(&self, org: &OrgName, repo: &str) -> Result<Vec<Account>>;

    /// Fetch a repository's most recently updated closed milestone.
    async fn latest_milestone(&self, org: &OrgName, repo: &str) -> Result<Option<Milestone>>;

    /// Fetch the date of a repository's most recent commit.
    async fn latest_commit(&self, org: &OrgName, repo: &str) -> Result<Option<DateTime<Utc>>>;

    /// Fetch a repository's newest tag.
    async fn latest_tag(&self, org: &OrgName, repo: &str) -> Result<Option<Tag>>;
}
