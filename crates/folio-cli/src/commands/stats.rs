//! Organization summary command.

use anyhow::{Context, Result};
use clap::Args;
use folio_core::Forge;

use crate::commands::{parse_org, ApiArgs};
use crate::output;

#[derive(Args, Debug)]
pub struct StatsArgs {
    /// Organization login
    pub org: String,

    /// Flagship repository to detail: contributor count, latest closed
    /// milestone, latest commit date and newest tag
    #[arg(long)]
    pub repo: Option<String>,

    #[command(flatten)]
    pub api: ApiArgs,
}

pub async fn run(args: StatsArgs) -> Result<()> {
    let org = parse_org(&args.org)?;
    let (forge, collector) = args.api.connect()?;

    // The member and flagship lookups don't feed the repository
    // pipeline, so all fetches run concurrently.
    let repos = collector.collect(&forge, &org);
    let members = forge.members(&org);

    match &args.repo {
        Some(flagship) => {
            let (repos, members, contributors, milestone, commit, tag) = tokio::join!(
                repos,
                members,
                forge.contributors(&org, flagship),
                forge.latest_milestone(&org, flagship),
                forge.latest_commit(&org, flagship),
                forge.latest_tag(&org, flagship),
            );

            let repos = repos.context("Failed to collect repositories")?;
            let members = members.context("Failed to fetch members")?;
            let contributors = contributors
                .with_context(|| format!("Failed to fetch contributors of '{flagship}'"))?;
            let milestone = milestone
                .with_context(|| format!("Failed to fetch milestones of '{flagship}'"))?;
            let commit =
                commit.with_context(|| format!("Failed to fetch commits of '{flagship}'"))?;
            let tag = tag.with_context(|| format!("Failed to fetch tags of '{flagship}'"))?;

            output::field("Repositories", &repos.len().to_string());
            output::field("Members", &members.len().to_string());
            output::field("Contributors", &contributors.len().to_string());

            if let Some(milestone) = milestone {
                output::field(
                    "Latest milestone",
                    &format!(
                        "{} (closed {})",
                        milestone.title,
                        milestone.updated_at.format("%b %-d, %Y")
                    ),
                );
            }
            if let Some(commit) = commit {
                output::field("Latest commit", &commit.format("%b %-d, %Y").to_string());
            }
            if let Some(tag) = tag {
                output::field("Version", &tag.name);
            }
        }
        None => {
            let (repos, members) = tokio::join!(repos, members);

            let repos = repos.context("Failed to collect repositories")?;
            let members = members.context("Failed to fetch members")?;

            output::field("Repositories", &repos.len().to_string());
            output::field("Members", &members.len().to_string());
        }
    }

    Ok(())
}
