//! Repository and account data types.
//!
//! These are the records fetched from the listing API. Collection is done
//! by [`Collector`](crate::Collector), ranking by [`Ranking`](crate::Ranking).

mod types;

pub use types::{Account, Milestone, Repo, RepoPage, Tag};
