//! Navigation bar state.
//!
//! The header owns exactly two flags: whether the viewport has scrolled past
//! [`SITE.scroll_threshold_px`](crate::config::SITE) and whether the mobile
//! menu is open. Both are plain values here; the component wraps them in a
//! signal and calls the transition methods from event handlers.

use crate::config::SITE;

/// Ephemeral header state. Starts unscrolled with the menu closed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavState {
    scrolled: bool,
    menu_open: bool,
}

impl NavState {
    /// Whether the given scroll offset counts as past the threshold.
    pub fn is_past_threshold(offset: f64) -> bool {
        offset > SITE.scroll_threshold_px
    }

    /// Recompute the scroll flag from the current vertical offset.
    ///
    /// Returns `true` when the flag changed, so callers can skip
    /// notifying subscribers on every scroll tick.
    pub fn on_scroll(&mut self, offset: f64) -> bool {
        let scrolled = Self::is_past_threshold(offset);
        let changed = scrolled != self.scrolled;
        self.scrolled = scrolled;
        changed
    }

    /// Menu button pressed.
    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// A navigation link was followed; the menu never stays open after that.
    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    /// Class list for the `<header>` element.
    pub fn header_class(&self) -> &'static str {
        if self.scrolled {
            "site-header scrolled"
        } else {
            "site-header"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_unscrolled_and_closed() {
        let state = NavState::default();
        assert!(!state.is_scrolled());
        assert!(!state.is_menu_open());
    }

    #[test]
    fn threshold_is_exclusive_at_twenty() {
        for offset in [-5.0, 0.0, 10.0, 19.99, 20.0] {
            assert!(!NavState::is_past_threshold(offset), "offset {offset}");
        }
        for offset in [20.01, 21.0, 400.0] {
            assert!(NavState::is_past_threshold(offset), "offset {offset}");
        }
    }

    #[test]
    fn on_scroll_reports_only_transitions() {
        let mut state = NavState::default();
        assert!(!state.on_scroll(5.0));
        assert!(state.on_scroll(25.0));
        assert!(state.is_scrolled());
        assert!(!state.on_scroll(300.0));
        assert!(state.on_scroll(20.0));
        assert!(!state.is_scrolled());
    }

    #[test]
    fn on_scroll_leaves_menu_alone() {
        let mut state = NavState::default();
        state.toggle_menu();
        state.on_scroll(100.0);
        assert!(state.is_menu_open());
    }

    #[test]
    fn double_toggle_restores_menu() {
        let mut state = NavState::default();
        state.toggle_menu();
        assert!(state.is_menu_open());
        state.toggle_menu();
        assert!(!state.is_menu_open());
    }

    #[test]
    fn close_menu_after_navigation() {
        let mut state = NavState::default();
        state.toggle_menu();
        state.close_menu();
        assert!(!state.is_menu_open());

        // already closed stays closed
        state.close_menu();
        assert!(!state.is_menu_open());
    }

    #[test]
    fn header_class_follows_scroll() {
        let mut state = NavState::default();
        assert_eq!(state.header_class(), "site-header");
        state.on_scroll(64.0);
        assert_eq!(state.header_class(), "site-header scrolled");
    }
}
