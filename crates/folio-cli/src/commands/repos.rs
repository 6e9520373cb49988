//! Ranked repository listing command.

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::{Args, ValueEnum};
use colored::Colorize;
use serde::Serialize;

use folio_core::{DisplayOverrides, RankOptions, RankedRepo, Ranking};

use crate::commands::{parse_org, ApiArgs};
use crate::output;
use crate::overrides_file;

#[derive(Args, Debug)]
pub struct ReposArgs {
    /// Organization login
    pub org: String,

    #[command(flatten)]
    pub api: ApiArgs,

    /// Ordering of the listing
    #[arg(long, value_enum, default_value_t = SortOrder::Hotness)]
    pub sort: SortOrder,

    /// Show at most this many repositories
    #[arg(long)]
    pub limit: Option<usize>,

    /// Path to a JSON overrides file (repository name to URL/description)
    #[arg(long)]
    pub overrides: Option<PathBuf>,

    /// Emit the listing as JSON, one record per line
    #[arg(long)]
    pub json: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum SortOrder {
    /// Composite recency + popularity score, hottest first
    Hotness,
    /// Most recently pushed first
    Recency,
}

/// One listing entry after overrides are applied.
#[derive(Debug, Serialize)]
struct RepoView<'a> {
    name: &'a str,
    url: &'a str,
    description: Option<&'a str>,
    language: Option<&'a str>,
    hotness: f64,
    pushed_at: DateTime<Utc>,
}

impl<'a> RepoView<'a> {
    fn new(ranked: &'a RankedRepo, overrides: &'a DisplayOverrides) -> Self {
        Self {
            name: &ranked.repo.name,
            url: overrides.url(&ranked.repo),
            description: overrides.description(&ranked.repo),
            language: ranked.repo.language.as_deref(),
            hotness: ranked.hotness,
            pushed_at: ranked.repo.pushed_at,
        }
    }
}

pub async fn run(args: ReposArgs) -> Result<()> {
    let org = parse_org(&args.org)?;
    let overrides = overrides_file::load(args.overrides.as_deref())
        .await
        .context("Failed to load overrides")?;
    let (forge, collector) = args.api.connect()?;

    let repos = collector
        .collect(&forge, &org)
        .await
        .context("Failed to collect repositories")?;
    let total = repos.len();

    let options = RankOptions {
        strict: args.api.strict,
        ..Default::default()
    };
    let ranking = Ranking::now(repos, options).context("Failed to rank repositories")?;

    let ordered = match args.sort {
        SortOrder::Hotness => ranking.by_hotness(),
        SortOrder::Recency => ranking.by_recency(),
    };
    let shown = args.limit.unwrap_or(ordered.len()).min(ordered.len());

    if args.json {
        for ranked in &ordered[..shown] {
            output::json(&RepoView::new(ranked, &overrides))?;
        }
        return Ok(());
    }

    output::field("Repositories", &total.to_string());
    if !ranking.rejected().is_empty() {
        eprintln!(
            "{}",
            format!("{} excluded as invalid; rerun with -v for details.", ranking.rejected().len())
                .dimmed()
        );
    }

    if ordered.is_empty() {
        eprintln!("{}", "No repositories found.".dimmed());
        return Ok(());
    }

    println!();
    for (i, ranked) in ordered[..shown].iter().enumerate() {
        let view = RepoView::new(ranked, &overrides);
        output::repo_entry(i + 1, view.name, view.url, view.description, view.language, view.hotness);
    }

    if shown < ordered.len() {
        eprintln!();
        eprintln!(
            "{}",
            format!("... and {} more.", ordered.len() - shown).dimmed()
        );
    }

    Ok(())
}
