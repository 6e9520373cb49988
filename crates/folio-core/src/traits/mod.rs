//! Trait seam between the core pipeline and its data source.

mod forge;

pub use forge::Forge;
