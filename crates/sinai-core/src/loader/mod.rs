//! Data access for the site's static JSON documents.
//!
//! This module provides:
//! - A `JsonFetcher` seam with an HTTP implementation backed by reqwest
//! - `DataLoader`, which memoizes parsed documents by URL
//!
//! Every remote read in the crate goes through `DataLoader::load_json`.

mod data_loader;
mod fetcher;

pub use data_loader::DataLoader;
pub use fetcher::{HttpFetcher, JsonFetcher, StaticFetcher};
