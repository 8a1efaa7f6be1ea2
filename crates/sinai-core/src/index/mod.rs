//! Flat search index over the site's projects and achievements.
//!
//! This module provides:
//! - `SearchableEntry`, the uniform record every collection is mapped to
//! - Index construction from the merged data document

mod builder;
mod entry;

pub use builder::{build_index, IndexBuilder};
pub use entry::{EntryKind, SearchableEntry};
pub(crate) use entry::record_id;
