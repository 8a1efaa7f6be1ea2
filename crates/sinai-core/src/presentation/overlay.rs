//! Search overlay lifecycle state.

use super::render::RenderedResults;
use serde::Serialize;

/// State of the full-screen search overlay.
///
/// Mirrors what the page toggles: the open modifier class, `aria-hidden`,
/// input focus, the body scroll lock, the input value and the results
/// container.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SearchOverlay {
    open: bool,
    input_focused: bool,
    body_scroll_locked: bool,
    input: String,
    results_html: String,
}

impl SearchOverlay {
    pub const CLASS: &'static str = "search-overlay";
    pub const OPEN_CLASS: &'static str = "search-overlay--open";

    pub fn new() -> Self {
        Self::default()
    }

    /// Show the overlay, focus the input and lock page scrolling.
    pub fn open(&mut self) {
        self.open = true;
        self.input_focused = true;
        self.body_scroll_locked = true;
    }

    /// Hide the overlay, clear input and results, unlock page scrolling.
    pub fn close(&mut self) {
        self.open = false;
        self.input_focused = false;
        self.body_scroll_locked = false;
        self.input.clear();
        self.results_html.clear();
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn aria_hidden(&self) -> &'static str {
        if self.open {
            "false"
        } else {
            "true"
        }
    }

    pub fn class_list(&self) -> String {
        if self.open {
            format!("{} {}", Self::CLASS, Self::OPEN_CLASS)
        } else {
            Self::CLASS.to_string()
        }
    }

    pub fn is_input_focused(&self) -> bool {
        self.input_focused
    }

    pub fn is_body_scroll_locked(&self) -> bool {
        self.body_scroll_locked
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, value: &str) {
        self.input = value.to_string();
    }

    pub fn results_html(&self) -> &str {
        &self.results_html
    }

    pub fn show_results(&mut self, rendered: &RenderedResults) {
        self.results_html = rendered.html().to_string();
    }

    /// Keyboard handling. Escape closes an open overlay.
    ///
    /// Returns whether the key was consumed.
    pub fn handle_key(&mut self, key: &str) -> bool {
        if key == "Escape" && self.open {
            self.close();
            return true;
        }
        false
    }

    /// Clicks on the dimmed backdrop (the overlay element itself, not its
    /// content) close the overlay.
    pub fn handle_background_click(&mut self, target_is_overlay: bool) -> bool {
        if target_is_overlay && self.open {
            self.close();
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_close_lifecycle() {
        let mut overlay = SearchOverlay::new();
        assert_eq!(overlay.aria_hidden(), "true");
        assert_eq!(overlay.class_list(), "search-overlay");

        overlay.open();
        assert!(overlay.is_open());
        assert!(overlay.is_input_focused());
        assert!(overlay.is_body_scroll_locked());
        assert_eq!(overlay.aria_hidden(), "false");
        assert_eq!(overlay.class_list(), "search-overlay search-overlay--open");

        overlay.set_input("water");
        overlay.show_results(&RenderedResults::List("<ul></ul>".into()));
        overlay.close();

        assert!(!overlay.is_open());
        assert!(!overlay.is_body_scroll_locked());
        assert_eq!(overlay.input(), "");
        assert_eq!(overlay.results_html(), "");
    }

    #[test]
    fn test_escape_only_closes_when_open() {
        let mut overlay = SearchOverlay::new();
        assert!(!overlay.handle_key("Escape"));

        overlay.open();
        assert!(!overlay.handle_key("Enter"));
        assert!(overlay.is_open());
        assert!(overlay.handle_key("Escape"));
        assert!(!overlay.is_open());
    }

    #[test]
    fn test_background_click() {
        let mut overlay = SearchOverlay::new();
        overlay.open();

        assert!(!overlay.handle_background_click(false));
        assert!(overlay.is_open());
        assert!(overlay.handle_background_click(true));
        assert!(!overlay.is_open());
    }
}
