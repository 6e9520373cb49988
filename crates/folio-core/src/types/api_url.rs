//! API base URL type.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use url::Url;

use crate::error::{Error, InvalidInputError};

use super::OrgName;

/// A validated base URL for the listing API.
///
/// Network URLs must use HTTPS (or HTTP for localhost, so tests can point
/// at a local mock server).
///
/// # Example
///
/// ```
/// use folio_core::{ApiUrl, OrgName};
///
/// let api = ApiUrl::github();
/// let org = OrgName::new("softlayer").unwrap();
/// assert_eq!(api.org_repos(&org), "https://api.github.com/orgs/softlayer/repos");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ApiUrl(Url);

impl ApiUrl {
    /// Create a new API URL from a string, validating the format.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is not valid or doesn't meet requirements.
    pub fn new(s: impl AsRef<str>) -> Result<Self, Error> {
        let s = s.as_ref();
        let url = Url::parse(s).map_err(|e| InvalidInputError::ApiUrl {
            value: s.to_string(),
            reason: e.to_string(),
        })?;

        Self::validate(&url, s)?;

        Ok(Self(url))
    }

    /// The public GitHub REST API.
    pub fn github() -> Self {
        Self(Url::parse("https://api.github.com").expect("static URL is valid"))
    }

    /// Returns the listing endpoint for an organization's repositories.
    ///
    /// Pagination parameters travel as query parameters, not in the path.
    pub fn org_repos(&self, org: &OrgName) -> String {
        format!("{}/orgs/{}/repos", self.base(), org)
    }

    /// Returns the endpoint listing an organization's members.
    pub fn org_members(&self, org: &OrgName) -> String {
        format!("{}/orgs/{}/members", self.base(), org)
    }

    /// Returns the endpoint listing a repository's contributors.
    pub fn repo_contributors(&self, org: &OrgName, repo: &str) -> String {
        format!("{}/repos/{}/{}/contributors", self.base(), org, repo)
    }

    /// Returns the endpoint listing a repository's milestones.
    pub fn repo_milestones(&self, org: &OrgName, repo: &str) -> String {
        format!("{}/repos/{}/{}/milestones", self.base(), org, repo)
    }

    /// Returns the endpoint listing a repository's commits.
    pub fn repo_commits(&self, org: &OrgName, repo: &str) -> String {
        format!("{}/repos/{}/{}/commits", self.base(), org, repo)
    }

    /// Returns the endpoint listing a repository's tags.
    pub fn repo_tags(&self, org: &OrgName, repo: &str) -> String {
        format!("{}/repos/{}/{}/tags", self.base(), org, repo)
    }

    /// Returns the base URL as a string.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Returns the host string.
    pub fn host(&self) -> Option<&str> {
        self.0.host_str()
    }

    // The url crate always adds a trailing slash to root paths, so strip
    // it before appending endpoint paths.
    fn base(&self) -> &str {
        self.0.as_str().trim_end_matches('/')
    }

    fn validate(url: &Url, original: &str) -> Result<(), Error> {
        let invalid = |reason: &str| {
            Error::InvalidInput(InvalidInputError::ApiUrl {
                value: original.to_string(),
                reason: reason.to_string(),
            })
        };

        if url.cannot_be_a_base() {
            return Err(invalid("must be an absolute URL"));
        }

        // Must be HTTPS (or HTTP for localhost)
        let is_localhost = url
            .host_str()
            .is_some_and(|h| h == "localhost" || h == "127.0.0.1" || h == "::1");

        let scheme = url.scheme();
        if scheme != "https" && !(scheme == "http" && is_localhost) {
            return Err(invalid("must use HTTPS (HTTP allowed only for localhost)"));
        }

        if url.host_str().is_none() {
            return Err(invalid("must have a host"));
        }

        Ok(())
    }
}

impl fmt::Display for ApiUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ApiUrl {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for ApiUrl {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl Serialize for ApiUrl {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.0.as_str())
    }
}

impl<'de> Deserialize<'de> for ApiUrl {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        ApiUrl::new(&s).map_err(serde::de::Error::custom)
    }
}
