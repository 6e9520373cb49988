//! Subcommand implementations.

pub mod repos;
pub mod stats;

use std::time::Duration;

use anyhow::{Context, Result};
use clap::Args;

use folio_core::{ApiUrl, CollectOptions, Collector, OrgName};
use folio_github::{GithubClient, GithubForge};

/// Flags shared by every command that talks to the API.
#[derive(Args, Debug)]
pub struct ApiArgs {
    /// API base URL
    #[arg(long, default_value = "https://api.github.com")]
    pub api_url: String,

    /// Records requested per page
    #[arg(long, default_value_t = 100)]
    pub per_page: u32,

    /// Give up after this many pages without an end-of-data signal
    #[arg(long, default_value_t = 50)]
    pub max_pages: u32,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = 30)]
    pub timeout_secs: u64,

    /// Fail on malformed or degenerate records instead of skipping them
    #[arg(long)]
    pub strict: bool,
}

impl ApiArgs {
    /// Build the forge and collector these flags describe.
    pub fn connect(&self) -> Result<(GithubForge, Collector)> {
        let api = ApiUrl::new(&self.api_url).context("Invalid API URL")?;
        let client = GithubClient::with_timeout(api, Duration::from_secs(self.timeout_secs));
        let forge = GithubForge::new(client).strict(self.strict);
        let collector = Collector::new(CollectOptions {
            per_page: self.per_page,
            max_pages: self.max_pages,
        });
        Ok((forge, collector))
    }
}

/// Parse and validate an organization login argument.
pub fn parse_org(org: &str) -> Result<OrgName> {
    OrgName::new(org).context("Invalid organization login")
}
