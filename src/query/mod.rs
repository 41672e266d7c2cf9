pub mod searcher;

pub use searcher::{MatchField, SearchHit, SearchOptions, Searcher};
