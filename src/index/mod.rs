pub mod builder;
pub mod loader;
pub mod stats;
pub mod types;

pub use builder::IndexBuilder;
pub use types::{Entry, SearchIndex};
