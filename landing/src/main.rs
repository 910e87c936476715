// MiniGames landing page - browser entry point

use leptos::prelude::*;
use minigames_landing::motion::play_reveals_in_view;
use minigames_landing::{App, AuthStatus};
use tracing::{info, warn};

/// `<body>` attribute the identity provider keeps up to date.
const AUTH_ATTRIBUTE: &str = "data-auth-status";
/// Window event the identity provider fires after the status changes.
const AUTH_CHANGE_EVENT: &str = "minigames:auth-change";

fn main() {
    console_error_panic_hook::set_once();
    // tracing's `log` feature forwards events here while no subscriber is set
    if console_log::init_with_level(log::Level::Debug).is_err() {
        web_sys::console::warn_1(&"logger already initialized".into());
    }

    let auth = RwSignal::new(read_auth_status());
    info!(status = %auth.get_untracked(), "mounting landing page");

    // Lives as long as the page; never released.
    let _listener = window_event_listener_untyped(AUTH_CHANGE_EVENT, move |_| {
        let status = read_auth_status();
        if auth.get_untracked() != status {
            info!(%status, "auth status changed");
            auth.set(status);
        }
    });

    leptos::mount::mount_to_body(move || view! { <App auth=auth /> });

    if let Err(err) = play_reveals_in_view() {
        warn!(?err, "in-view reveals unavailable, playing on load");
    }
}

/// Current status from `<body data-auth-status>`. Anything unreadable means
/// signed out.
fn read_auth_status() -> AuthStatus {
    let Some(raw) = document()
        .body()
        .and_then(|body| body.get_attribute(AUTH_ATTRIBUTE))
    else {
        return AuthStatus::SignedOut;
    };

    raw.parse().unwrap_or_else(|err| {
        warn!(%err, "falling back to signed-out");
        AuthStatus::SignedOut
    })
}
