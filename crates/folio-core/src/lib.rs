//! folio-core - Core types, repository collection and hotness ranking.

pub mod collect;
pub mod error;
pub mod overrides;
pub mod rank;
pub mod repo;
pub mod traits;
pub mod types;

pub use collect::{CollectOptions, Collector};
pub use error::Error;
pub use overrides::DisplayOverrides;
pub use rank::{HotnessWeights, RankOptions, RankedRepo, Ranking, Rejected};
pub use repo::{Account, Milestone, Repo, RepoPage, Tag};
pub use traits::Forge;
pub use types::{ApiUrl, OrgName};

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
