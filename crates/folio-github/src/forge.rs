//! GitHub-backed Forge implementation.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tracing::{debug, instrument, warn};

use folio_core::error::{Error, InvalidRecordError};
use folio_core::repo::{Account, Milestone, Repo, RepoPage, Tag};
use folio_core::traits::Forge;
use folio_core::types::OrgName;
use folio_core::Result;

use crate::client::GithubClient;

/// Query parameters for the repository listing endpoint.
#[derive(Debug, serde::Serialize)]
struct ReposPageQuery {
    per_page: u32,
    page: u32,
}

/// No query parameters.
const NO_PARAMS: &[(&str, &str)] = &[];

/// Only the newest record is wanted.
const FIRST_ONLY: &[(&str, &str)] = &[("per_page", "1")];

/// The milestones endpoint cannot sort by update time, so closed
/// milestones are fetched and the newest is picked locally.
const CLOSED_MILESTONES: &[(&str, &str)] = &[("state", "closed"), ("per_page", "100")];

/// A repository record as it arrives on the wire.
///
/// Ranking-critical fields are optional here; conversion to [`Repo`]
/// enforces their presence.
#[derive(Debug, serde::Deserialize)]
struct RawRepo {
    name: String,
    description: Option<String>,
    language: Option<String>,
    html_url: String,
    pushed_at: Option<DateTime<Utc>>,
    created_at: Option<DateTime<Utc>>,
    watchers: Option<u64>,
}

/// A member or contributor record on the wire.
#[derive(Debug, serde::Deserialize)]
struct RawAccount {
    login: String,
}

/// A commit record on the wire. Only the committer date is read.
#[derive(Debug, serde::Deserialize)]
struct RawCommit {
    commit: RawCommitDetail,
}

#[derive(Debug, serde::Deserialize)]
struct RawCommitDetail {
    committer: Option<RawCommitSignature>,
}

#[derive(Debug, serde::Deserialize)]
struct RawCommitSignature {
    date: Option<DateTime<Utc>>,
}

impl TryFrom<RawRepo> for Repo {
    type Error = InvalidRecordError;

    fn try_from(raw: RawRepo) -> std::result::Result<Self, Self::Error> {
        let missing = |field: &'static str| InvalidRecordError::MissingField {
            repo: raw.name.clone(),
            field,
        };

        let pushed_at = raw.pushed_at.ok_or_else(|| missing("pushed_at"))?;
        let created_at = raw.created_at.ok_or_else(|| missing("created_at"))?;
        let watchers = raw.watchers.ok_or_else(|| missing("watchers"))?;

        Ok(Repo {
            name: raw.name,
            description: raw.description,
            language: raw.language,
            html_url: raw.html_url,
            pushed_at,
            created_at,
            watchers,
        })
    }
}

/// A GitHub REST implementation of [`Forge`].
#[derive(Debug, Clone)]
pub struct GithubForge {
    client: GithubClient,
    strict: bool,
}

impl GithubForge {
    /// Create a new forge over the given client. Malformed records are
    /// skipped with a warning unless [`strict`](Self::strict) is set.
    pub fn new(client: GithubClient) -> Self {
        Self {
            client,
            strict: false,
        }
    }

    /// Set whether a malformed record fails the whole page.
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Returns the underlying HTTP client.
    pub fn client(&self) -> &GithubClient {
        &self.client
    }
}

#[async_trait]
impl Forge for GithubForge {
    #[instrument(skip(self))]
    async fn repos_page(&self, org: &OrgName, page: u32, per_page: u32) -> Result<RepoPage> {
        debug!(org = %org, page, "Listing repositories via GitHub");

        let url = self.client.api_url().org_repos(org);
        let raw: Vec<RawRepo> = self
            .client
            .get_json(&url, &ReposPageQuery { per_page, page })
            .await?;

        // End-of-data is a property of the wire payload. Records skipped
        // below must not turn a served page into a terminating one.
        let end_of_data = raw.is_empty();

        let mut repos = Vec::with_capacity(raw.len());
        for record in raw {
            match Repo::try_from(record) {
                Ok(repo) => repos.push(repo),
                Err(reason) if self.strict => return Err(Error::InvalidRecord(reason)),
                Err(reason) => warn!(%reason, "skipping malformed repository record"),
            }
        }

        Ok(RepoPage { repos, end_of_data })
    }

    #[instrument(skip(self))]
    async fn members(&self, org: &OrgName) -> Result<Vec<Account>> {
        debug!(org = %org, "Listing members via GitHub");

        let url = self.client.api_url().org_members(org);
        let raw: Vec<RawAccount> = self.client.get_json(&url, &NO_PARAMS).await?;

        Ok(raw.into_iter().map(|a| Account { login: a.login }).collect())
    }

    #[instrument(skip(self))]
    async fn contributors(&self, org: &OrgName, repo: &str) -> Result<Vec<Account>> {
        debug!(org = %org, repo, "Listing contributors via GitHub");

        let url = self.client.api_url().repo_contributors(org, repo);
        let raw: Vec<RawAccount> = self.client.get_json(&url, &NO_PARAMS).await?;

        Ok(raw.into_iter().map(|a| Account { login: a.login }).collect())
    }

    #[instrument(skip(self))]
    async fn latest_milestone(&self, org: &OrgName, repo: &str) -> Result<Option<Milestone>> {
        debug!(org = %org, repo, "Fetching latest closed milestone via GitHub");

        let url = self.client.api_url().repo_milestones(org, repo);
        let milestones: Vec<Milestone> = self.client.get_json(&url, &CLOSED_MILESTONES).await?;

        Ok(milestones.into_iter().max_by_key(|m| m.updated_at))
    }

    #[instrument(skip(self))]
    async fn latest_commit(&self, org: &OrgName, repo: &str) -> Result<Option<DateTime<Utc>>> {
        debug!(org = %org, repo, "Fetching latest commit via GitHub");

        let url = self.client.api_url().repo_commits(org, repo);
        let commits: Vec<RawCommit> = self.client.get_json(&url, &FIRST_ONLY).await?;

        Ok(commits
            .into_iter()
            .next()
            .and_then(|c| c.commit.committer)
            .and_then(|sig| sig.date))
    }

    #[instrument(skip(self))]
    async fn latest_tag(&self, org: &OrgName, repo: &str) -> Result<Option<Tag>> {
        debug!(org = %org, repo, "Fetching latest tag via GitHub");

        let url = self.client.api_url().repo_tags(org, repo);
        let tags: Vec<Tag> = self.client.get_json(&url, &FIRST_ONLY).await?;

        Ok(tags.into_iter().next())
    }
}
