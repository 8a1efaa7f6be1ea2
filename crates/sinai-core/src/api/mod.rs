//! API implementation submodules.
//!
//! Each submodule contains `impl SiteApi` blocks that extend the public API
//! with domain-specific methods. The struct definition remains in `lib.rs`.

mod builder;
mod data;
mod navigation;
mod search;

pub use builder::SiteApiBuilder;
