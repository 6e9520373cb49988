//! folio-github - GitHub REST implementation of the folio `Forge` trait.

pub mod client;
pub mod forge;

pub use client::GithubClient;
pub use forge::GithubForge;
