//! Site-wide constants.
//!
//! Everything the page prints about itself (brand, tagline, copyright year)
//! and the one tunable behaviour constant live here, so sections never
//! hard-code them.

/// Static configuration for the landing page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SiteConfig {
    /// Brand name shown in the header and footer
    pub brand: &'static str,
    /// Short line under the brand name
    pub tagline: &'static str,
    /// Year printed in the footer copyright
    pub copyright_year: u16,
    /// Vertical scroll offset (px) past which the header switches style.
    /// Exclusive: an offset equal to the threshold is not "scrolled".
    pub scroll_threshold_px: f64,
    /// Build version, shown in the prerendered document's meta tags
    pub version: &'static str,
}

/// Single source of truth for the page.
pub const SITE: SiteConfig = SiteConfig {
    brand: "MiniGames",
    tagline: "Play & Compete",
    copyright_year: 2025,
    scroll_threshold_px: 20.0,
    version: env!("CARGO_PKG_VERSION"),
};

impl SiteConfig {
    /// Footer copyright line, e.g. `© 2025 MiniGames.`
    pub fn copyright(&self) -> String {
        format!("\u{a9} {} {}.", self.copyright_year, self.brand)
    }
}
