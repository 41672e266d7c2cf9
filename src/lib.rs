//! # doxi - Documentation Search Index Toolchain
//!
//! doxi builds and queries the search index blob that ships with static
//! documentation sites: an ordered sequence of entries mapping page
//! locations to titles, text snippets, and category tags.
//!
//! ## Architecture
//!
//! The crate is organized into these main modules:
//!
//! - [`index`] - Index building, loading, and the entry data model
//! - [`query`] - Case-insensitive substring search with two-tier ranking
//! - [`output`] - Result formatting for the terminal
//! - [`error`] - Typed build/load errors
//!
//! ## Quick Start
//!
//! ```
//! use doxi::index::IndexBuilder;
//! use doxi::query::{SearchOptions, Searcher};
//!
//! let mut builder = IndexBuilder::new();
//! builder.add("guide/#setup", "Guide", "Setup", "install the tool", "section");
//! let index = builder.finish();
//!
//! let searcher = Searcher::new(&index);
//! let hits = searcher.search("setup", &SearchOptions::default());
//! assert_eq!(hits[0].entry.location, "guide/#setup");
//! ```
//!
//! ## Wire format
//!
//! The on-disk blob is byte-compatible with the `search_index.js` artifact
//! consumed by existing documentation search widgets:
//!
//! ```text
//! {"docs": [ {"location": "...", "page": "...", "title": "...",
//!             "text": "...", "category": "..."}, ... ]}
//! ```
//!
//! The loader also accepts the script-wrapped form
//! (`var documenterSearchIndex = {...}`) published by generated sites.

pub mod error;
pub mod index;
pub mod output;
pub mod query;
