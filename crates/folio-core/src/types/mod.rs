//! Core folio types.
//!
//! These types enforce API invariants at construction time,
//! ensuring invalid states are unrepresentable.

mod api_url;
mod org;

pub use api_url::ApiUrl;
pub use org::OrgName;
