//! Declarative entry animations.
//!
//! Elements get a `reveal reveal-<kind>` class (keyframes live in
//! `style.css`) and an inline style carrying duration and delay. Lists
//! stagger their items with [`Reveal::staggered`].
//!
//! Reveals marked [`Reveal::when_visible`] stay paused on their first frame
//! until [`play_reveals_in_view`] sees them enter the viewport. Without that
//! call (prerendered HTML, no JS) they play on load.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

/// Class for reveals gated on visibility.
pub const ON_VIEW_CLASS: &str = "reveal-on-view";
/// Added once a gated reveal has been seen.
pub const IN_VIEW_CLASS: &str = "in-view";
/// Added to `<html>` once the observer runs; the CSS pause rule keys on it.
pub const JS_CLASS: &str = "js";

/// Keyframe set an element enters with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealKind {
    /// Slide up while fading in
    Rise,
    /// Slide down from above while fading in
    Drop,
    /// Slide in from the left while fading in
    SlideIn,
    /// Grow from zero scale
    Scale,
    /// Opacity only
    Fade,
}

impl RevealKind {
    fn class(&self) -> &'static str {
        match self {
            RevealKind::Rise => "reveal reveal-rise",
            RevealKind::Drop => "reveal reveal-drop",
            RevealKind::SlideIn => "reveal reveal-slide",
            RevealKind::Scale => "reveal reveal-scale",
            RevealKind::Fade => "reveal reveal-fade",
        }
    }
}

/// Entry animation parameters, in seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reveal {
    pub kind: RevealKind,
    pub duration: f32,
    pub delay: f32,
    /// Wait until the element scrolls into view
    pub on_view: bool,
}

impl Reveal {
    pub const fn new(kind: RevealKind, duration: f32) -> Self {
        Self {
            kind,
            duration,
            delay: 0.0,
            on_view: false,
        }
    }

    pub const fn when_visible(self) -> Self {
        Self {
            on_view: true,
            ..self
        }
    }

    pub const fn delayed(self, delay: f32) -> Self {
        Self { delay, ..self }
    }

    /// Delay `base + step * index`, for the `index`-th item of a list.
    pub fn staggered(self, base: f32, step: f32, index: usize) -> Self {
        self.delayed(base + step * index as f32)
    }

    /// Class list, with `extra` classes appended.
    pub fn class(&self, extra: &str) -> String {
        let mut class = self.kind.class().to_string();
        if self.on_view {
            class.push(' ');
            class.push_str(ON_VIEW_CLASS);
        }
        if !extra.is_empty() {
            class.push(' ');
            class.push_str(extra);
        }
        class
    }

    /// Inline `style` attribute value.
    pub fn style(&self) -> String {
        format!(
            "animation-duration: {}s; animation-delay: {}s;",
            fmt_secs(self.duration),
            fmt_secs(self.delay)
        )
    }
}

/// Start gated reveals as they scroll into view. Browser only; call after
/// the page is mounted.
pub fn play_reveals_in_view() -> Result<(), JsValue> {
    let document = leptos::prelude::document();

    let on_intersect = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if entry.is_intersecting() {
                    let target = entry.target();
                    let _ = target.class_list().add_1(IN_VIEW_CLASS);
                    observer.unobserve(&target);
                }
            }
        },
    );
    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(0.15));
    let observer = IntersectionObserver::new_with_options(
        on_intersect.as_ref().unchecked_ref(),
        &options,
    )?;
    // Page-lifetime observer
    on_intersect.forget();

    let nodes = document.query_selector_all(&format!(".{ON_VIEW_CLASS}"))?;
    for index in 0..nodes.length() {
        if let Some(element) = nodes.item(index).and_then(|n| n.dyn_into::<web_sys::Element>().ok()) {
            observer.observe(&element);
        }
    }

    // Pause only once something will un-pause them.
    if let Some(root) = document.document_element() {
        root.class_list().add_1(JS_CLASS)?;
    }
    Ok(())
}

// 0.1 * 3 would otherwise print as 0.30000001
fn fmt_secs(secs: f32) -> String {
    let rounded = (secs * 100.0).round() / 100.0;
    format!("{rounded}")
}
