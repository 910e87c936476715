//! Viewport scroll tracking with owner-scoped cleanup.
//!
//! [`track_scroll`] subscribes to a [`ScrollSource`] and registers the
//! matching release with the current reactive owner, so the listener lives
//! exactly as long as the component that asked for it.

use leptos::prelude::*;
use tracing::trace;

use crate::nav_state::NavState;

/// Callback receiving the current vertical scroll offset in pixels.
pub type ScrollCallback = Box<dyn Fn(f64) + Send + Sync>;

/// Something that reports vertical scroll offsets.
pub trait ScrollSource {
    /// Token needed to remove the listener again.
    type Subscription: Send + Sync + 'static;

    fn subscribe(&self, on_scroll: ScrollCallback) -> Self::Subscription;

    fn release(subscription: Self::Subscription);
}

/// Feed `source` into `nav` until the current owner is cleaned up.
///
/// The signal is only written when the scrolled flag flips.
pub fn track_scroll<S: ScrollSource>(source: &S, nav: RwSignal<NavState>) {
    let subscription = source.subscribe(Box::new(move |offset| {
        nav.maybe_update(|state| {
            let changed = state.on_scroll(offset);
            if changed {
                trace!(offset, scrolled = state.is_scrolled(), "header scroll state changed");
            }
            changed
        });
    }));
    on_cleanup(move || S::release(subscription));
}

/// The browser window's `scroll` event.
#[derive(Debug, Clone, Copy, Default)]
pub struct WindowScroll;

impl ScrollSource for WindowScroll {
    type Subscription = WindowListenerHandle;

    fn subscribe(&self, on_scroll: ScrollCallback) -> Self::Subscription {
        // Sync with the current position first: a reload can restore scroll.
        on_scroll(window().scroll_y().unwrap_or_default());
        window_event_listener(leptos::ev::scroll, move |_| {
            on_scroll(window().scroll_y().unwrap_or_default());
        })
    }

    fn release(subscription: Self::Subscription) {
        subscription.remove();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    /// In-memory scroll source that records live listeners.
    #[derive(Clone, Default)]
    struct FakeScroll {
        listeners: Arc<Mutex<HashMap<usize, ScrollCallback>>>,
        next_id: Arc<AtomicUsize>,
    }

    struct FakeSubscription {
        id: usize,
        listeners: Arc<Mutex<HashMap<usize, ScrollCallback>>>,
    }

    impl FakeScroll {
        fn emit(&self, offset: f64) {
            for listener in self.listeners.lock().unwrap().values() {
                listener(offset);
            }
        }

        fn listener_count(&self) -> usize {
            self.listeners.lock().unwrap().len()
        }
    }

    impl ScrollSource for FakeScroll {
        type Subscription = FakeSubscription;

        fn subscribe(&self, on_scroll: ScrollCallback) -> Self::Subscription {
            let id = self.next_id.fetch_add(1, Ordering::Relaxed);
            self.listeners.lock().unwrap().insert(id, on_scroll);
            FakeSubscription {
                id,
                listeners: Arc::clone(&self.listeners),
            }
        }

        fn release(subscription: Self::Subscription) {
            subscription.listeners.lock().unwrap().remove(&subscription.id);
        }
    }

    #[test]
    fn scroll_events_drive_nav_state() {
        let owner = Owner::new();
        let source = FakeScroll::default();
        owner.with(|| {
            let nav = RwSignal::new(NavState::default());
            track_scroll(&source, nav);

            source.emit(12.0);
            assert!(!nav.get_untracked().is_scrolled());
            source.emit(21.0);
            assert!(nav.get_untracked().is_scrolled());
            source.emit(0.0);
            assert!(!nav.get_untracked().is_scrolled());
        });
    }

    #[test]
    fn cleanup_removes_listener() {
        let source = FakeScroll::default();
        // The state outlives the header that tracks it.
        let page = Owner::new();
        let nav = page.with(|| RwSignal::new(NavState::default()));

        let header = Owner::new();
        header.with(|| track_scroll(&source, nav));
        assert_eq!(source.listener_count(), 1);

        source.emit(30.0);
        assert!(nav.get_untracked().is_scrolled());
        source.emit(0.0);
        assert!(!nav.get_untracked().is_scrolled());

        header.cleanup();
        assert_eq!(source.listener_count(), 0);

        source.emit(500.0);
        assert!(!nav.get_untracked().is_scrolled());
    }

    #[test]
    fn each_owner_releases_only_its_own_listener() {
        let source = FakeScroll::default();
        let first = Owner::new();
        let second = Owner::new();
        first.with(|| track_scroll(&source, RwSignal::new(NavState::default())));
        let nav = second.with(|| {
            let nav = RwSignal::new(NavState::default());
            track_scroll(&source, nav);
            nav
        });
        assert_eq!(source.listener_count(), 2);

        first.cleanup();
        assert_eq!(source.listener_count(), 1);

        second.with(|| {
            source.emit(40.0);
            assert!(nav.get_untracked().is_scrolled());
        });
    }
}
