//! Centralized configuration for the Sinai Showcase library.
//!
//! This module provides configuration constants for data access, search,
//! navigation timing, and toast notifications.

use std::time::Duration;

/// Application-level configuration.
pub struct AppConfig;

impl AppConfig {
    pub const APP_NAME: &'static str = "Sinai Showcase";
    pub const USER_AGENT: &'static str = "Sinai-Showcase/0.3";
    pub const DEFAULT_BASE_URL: &'static str = "http://127.0.0.1:8080";
}

/// Locations of the static data documents.
pub struct DataConfig;

impl DataConfig {
    /// Merged document holding both `projects` and `achievements`.
    pub const PROJECTS_URL: &'static str = "/data/projects.json";
    pub const DATA_DIR_NAME: &'static str = "data";
}

/// Search behaviour.
pub struct SearchConfig;

impl SearchConfig {
    /// Queries shorter than this (in characters, untrimmed) return nothing.
    pub const MIN_QUERY_LEN: usize = 2;
    pub const SNIPPET_MAX_LENGTH: usize = 150;
    pub const SNIPPET_CONTEXT_BEFORE: usize = 50;
    pub const SNIPPET_CONTEXT_AFTER: usize = 100;
    pub const ELLIPSIS: &'static str = "...";
    pub const DEBOUNCE: Duration = Duration::from_millis(300);
}

/// Scroll-then-select handshake timing and section ids.
pub struct NavigationConfig;

impl NavigationConfig {
    pub const SCROLL_SETTLE_DELAY: Duration = Duration::from_millis(800);
    pub const MAP_SECTION_ID: &'static str = "map-section";
    pub const TIMELINE_SECTION_ID: &'static str = "timeline";
}

/// Network-related configuration.
pub struct NetworkConfig;

impl NetworkConfig {
    pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);
}

/// Error toast timing.
pub struct ToastConfig;

impl ToastConfig {
    pub const SHOW_DELAY: Duration = Duration::from_millis(10);
    pub const VISIBLE_FOR: Duration = Duration::from_millis(5000);
    pub const FADE_OUT: Duration = Duration::from_millis(300);
}

/// Map widget view settings.
pub struct MapConfig;

impl MapConfig {
    pub const CENTER: (f64, f64) = (30.8, 33.9);
    pub const ZOOM: u8 = 8;
    pub const DEFAULT_MARKER_COLOR: &'static str = "#95a5a6";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timings_are_ordered() {
        assert!(SearchConfig::DEBOUNCE < NavigationConfig::SCROLL_SETTLE_DELAY);
        assert!(ToastConfig::SHOW_DELAY < ToastConfig::VISIBLE_FOR);
        assert!(NetworkConfig::REQUEST_TIMEOUT > Duration::ZERO);
    }

    #[test]
    fn test_snippet_window_fits_max_length() {
        assert!(
            SearchConfig::SNIPPET_CONTEXT_BEFORE + SearchConfig::SNIPPET_CONTEXT_AFTER
                <= SearchConfig::SNIPPET_MAX_LENGTH
        );
    }
}
