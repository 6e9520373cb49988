//! Sequential paginated collection of an organization's repositories.

use tracing::debug;

use crate::error::Error;
use crate::repo::Repo;
use crate::traits::Forge;
use crate::types::OrgName;
use crate::Result;

/// Options controlling a collection run.
#[derive(Debug, Clone, Copy)]
pub struct CollectOptions {
    /// Records requested per page.
    pub per_page: u32,

    /// Hard ceiling on the number of pages requested in one run.
    ///
    /// The API's only end-of-data signal is an empty page; the ceiling
    /// keeps a misbehaving endpoint from being polled forever.
    pub max_pages: u32,
}

impl Default for CollectOptions {
    fn default() -> Self {
        Self {
            per_page: 100,
            max_pages: 50,
        }
    }
}

/// Assembles the complete repository set of an organization despite the
/// API returning bounded pages.
#[derive(Debug, Clone, Default)]
pub struct Collector {
    options: CollectOptions,
}

impl Collector {
    /// Create a collector with the given options.
    pub fn new(options: CollectOptions) -> Self {
        Self { options }
    }

    /// Returns the options this collector runs with.
    pub fn options(&self) -> &CollectOptions {
        &self.options
    }

    /// Fetch every page of `org`'s repositories, in arrival order.
    ///
    /// Pages are requested strictly sequentially starting at page 1: the
    /// next request is issued only after the previous one resolves, since
    /// whether to continue depends on the previous page. The run terminates
    /// on [`RepoPage::end_of_data`](crate::repo::RepoPage::end_of_data),
    /// which tracks the wire payload: a page
    /// whose records were all skipped as malformed keeps the run going.
    ///
    /// # Errors
    ///
    /// Any page fetch failure aborts the run and propagates; a partial
    /// result is never returned silently. Exhausting `max_pages` without
    /// seeing the end-of-data signal yields [`Error::PageLimitExceeded`].
    pub async fn collect<F: Forge>(&self, forge: &F, org: &OrgName) -> Result<Vec<Repo>> {
        let mut repos = Vec::new();

        for page in 1..=self.options.max_pages {
            let batch = forge.repos_page(org, page, self.options.per_page).await?;
            repos.extend(batch.repos);
            if batch.end_of_data {
                debug!(org = %org, pages = page, total = repos.len(), "collection complete");
                return Ok(repos);
            }
        }

        Err(Error::PageLimitExceeded {
            limit: self.options.max_pages,
        })
    }
}
