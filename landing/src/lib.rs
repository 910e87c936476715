//! # minigames-landing
//!
//! Landing page for the MiniGames platform, built with Leptos 0.8.
//!
//! The same component tree serves two targets:
//!
//! - **Browser** (`csr` feature) - `main.rs` mounts [`App`] to `<body>` and
//!   wires the identity provider's status into it.
//! - **Static HTML** (`ssr` feature) - [`render_document`] prerenders the page
//!   for hosting without JavaScript; the `minigames-prerender` binary writes it
//!   to disk.
//!
//! ## Architecture
//!
//! - [`nav_state`] - the header's two flags and their transitions
//! - [`scroll`] - owner-scoped viewport scroll subscription
//! - [`auth`] - auth status from the external identity provider
//! - [`content`] - fixed navigation, feature and stat descriptors
//! - [`motion`] - declarative entry animations
//! - [`sections`] - the page sections, top to bottom
//!
//! ```rust
//! use minigames_landing::{AuthStatus, render_document};
//!
//! let html = render_document(AuthStatus::SignedOut);
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! ```

pub mod auth;
pub mod config;
pub mod content;
pub mod icons;
pub mod motion;
pub mod nav_state;
pub mod scroll;
pub mod sections;

use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;

pub use auth::{AuthStatus, AuthStatusParseError};
use config::SITE;
use sections::*;

/// The whole page. Sections render in fixed order and share nothing but the
/// auth status.
#[component]
pub fn App(
    /// Auth status reported by the identity provider
    #[prop(into)]
    auth: Signal<AuthStatus>,
) -> impl IntoView {
    auth::provide_auth(auth);

    view! {
        <div class="page">
            <Nav />
            <main>
                <Hero />
                <Features />
                <Stats />
                <CallToAction />
            </main>
            <Footer />
        </div>
    }
}

/// Render the page body for a fixed auth status.
pub fn render_page(auth: AuthStatus) -> String {
    let owner = Owner::new();
    let html = owner.with(|| view! { <App auth=Signal::stored(auth) /> }.to_html());
    owner.cleanup();
    html
}

/// Render a complete HTML document, including `<!DOCTYPE html>`, with the
/// same stylesheet and body attributes the trunk build uses.
pub fn render_document(auth: AuthStatus) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8" />
<meta name="viewport" content="width=device-width, initial-scale=1" />
<meta name="generator" content="minigames-landing {version}" />
<title>{brand} - {tagline}</title>
<link rel="stylesheet" href="style.css" />
</head>
<body data-auth-status="{status}">
{body}
</body>
</html>
"#,
        version = SITE.version,
        brand = SITE.brand,
        tagline = SITE.tagline.replace('&', "&amp;"),
        status = auth.as_str(),
        body = render_page(auth),
    )
}
