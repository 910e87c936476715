//! Site header: brand, navigation links, identity actions, mobile menu.

use std::time::Duration;

use leptos::prelude::*;
use tracing::debug;

use crate::auth::{IdentityAffordance, use_auth_status};
use crate::config::SITE;
use crate::content::{NAV_ITEMS, PLAY_HREF};
use crate::icons::{ICON_CLOSE, ICON_GAMEPAD, ICON_MENU, ICON_STAR, ICON_ZAP, Icon};
use crate::motion::{Reveal, RevealKind};
use crate::nav_state::NavState;
use crate::scroll::{WindowScroll, track_scroll};

/// How long the mobile panel stays mounted while its `menu-close`
/// animation plays. Matches the keyframe duration in `style.css`.
pub const MENU_EXIT: Duration = Duration::from_millis(300);

/// Header with live scroll tracking.
#[component]
pub fn Nav() -> impl IntoView {
    let nav = RwSignal::new(NavState::default());

    // Effects only run in the browser; the listener is released with the
    // effect's owner when the header unmounts.
    Effect::new(move || track_scroll(&WindowScroll, nav));

    view! { <NavBar nav=nav /> }
}

/// Header rendering for a given state signal.
#[component]
pub fn NavBar(nav: RwSignal<NavState>) -> impl IntoView {
    let toggle_menu = move |_| {
        nav.update(NavState::toggle_menu);
        debug!(open = nav.with_untracked(NavState::is_menu_open), "mobile menu toggled");
    };
    let close_menu = move || nav.update(NavState::close_menu);

    let header = Reveal::new(RevealKind::Drop, 0.6);

    view! {
        <header
            class=move || header.class(nav.with(NavState::header_class))
            style=header.style()
        >
            <div class="container">
                <div class="nav-inner">
                    <Brand />

                    <nav class="nav-links" aria-label="Main navigation">
                        {NAV_ITEMS
                            .iter()
                            .enumerate()
                            .map(|(index, item)| {
                                let reveal = Reveal::new(RevealKind::Drop, 0.5)
                                    .staggered(0.3, 0.1, index);
                                view! {
                                    <a
                                        href=item.href
                                        class=reveal.class("nav-link")
                                        style=reveal.style()
                                        on:click=move |_| close_menu()
                                    >
                                        <Icon paths=item.icon class="icon icon-sm" />
                                        <span>{item.label}</span>
                                        <span class="nav-underline"></span>
                                    </a>
                                }
                            })
                            .collect_view()}
                    </nav>

                    <div class="nav-actions">
                        <a href=PLAY_HREF class="btn btn-gradient tappable">"Play Now"</a>
                        <IdentityActions mobile=false />
                    </div>

                    <button
                        class="nav-menu-btn tappable"
                        aria-controls="mobile-menu"
                        aria-expanded=move || nav.with(NavState::is_menu_open).to_string()
                        aria-label=move || {
                            if nav.with(NavState::is_menu_open) { "Close menu" } else { "Open menu" }
                        }
                        on:click=toggle_menu
                    >
                        <Show
                            when=move || nav.with(NavState::is_menu_open)
                            fallback=|| {
                                view! {
                                    <span class="menu-icon menu-icon-open">
                                        <Icon paths=ICON_MENU />
                                    </span>
                                }
                            }
                        >
                            <span class="menu-icon menu-icon-close">
                                <Icon paths=ICON_CLOSE />
                            </span>
                        </Show>
                    </button>
                </div>

                <AnimatedShow
                    when=Signal::derive(move || nav.with(NavState::is_menu_open))
                    show_class="menu-presence menu-enter"
                    hide_class="menu-presence menu-leave"
                    hide_delay=MENU_EXIT
                >
                    <MobileMenu on_navigate=close_menu />
                </AnimatedShow>
            </div>
        </header>
    }
}

#[component]
fn Brand() -> impl IntoView {
    view! {
        <a href="/" class="nav-brand reveal reveal-spin">
            <div class="nav-logo">
                <div class="nav-logo-tile">
                    <Icon paths=ICON_GAMEPAD />
                </div>
                <span class="sparkle sparkle-top">
                    <Icon paths=ICON_STAR class="icon icon-xs star" />
                </span>
                <span class="sparkle sparkle-bottom">
                    <Icon paths=ICON_ZAP class="icon icon-xs zap" />
                </span>
            </div>
            <div>
                <span class="nav-title">{SITE.brand}</span>
                <p class="nav-tagline">{SITE.tagline}</p>
            </div>
        </a>
    }
}

#[component]
fn MobileMenu(on_navigate: impl Fn() + Copy + Send + Sync + 'static) -> impl IntoView {
    let footer = Reveal::new(RevealKind::Fade, 0.3).delayed(0.4);

    view! {
        <div id="mobile-menu" class="mobile-menu">
            <div class="mobile-menu-panel">
                {NAV_ITEMS
                    .iter()
                    .enumerate()
                    .map(|(index, item)| {
                        let reveal = Reveal::new(RevealKind::SlideIn, 0.3).staggered(0.0, 0.1, index);
                        view! {
                            <a
                                href=item.href
                                class=reveal.class("mobile-link")
                                style=reveal.style()
                                on:click=move |_| on_navigate()
                            >
                                <Icon paths=item.icon />
                                <span>{item.label}</span>
                            </a>
                        }
                    })
                    .collect_view()}

                <div class=footer.class("mobile-menu-actions") style=footer.style()>
                    <a href=PLAY_HREF class="btn btn-gradient btn-block" on:click=move |_| on_navigate()>
                        "Play Now"
                    </a>
                    <IdentityActions mobile=true />
                </div>
            </div>
        </div>
    }
}

/// Sign-in/sign-up or account slots, depending on the auth status.
#[component]
fn IdentityActions(mobile: bool) -> impl IntoView {
    let status = use_auth_status();
    let wrapper = if mobile { "identity-actions stacked" } else { "identity-actions" };

    view! {
        <div class=wrapper>
            {move || {
                status
                    .get()
                    .affordances()
                    .iter()
                    .map(|affordance| view! { <IdentitySlot affordance=*affordance mobile=mobile /> })
                    .collect_view()
            }}
        </div>
    }
}

/// Mount point for one identity widget, with a plain link until it loads.
#[component]
fn IdentitySlot(affordance: IdentityAffordance, mobile: bool) -> impl IntoView {
    let class = match (affordance, mobile) {
        (IdentityAffordance::SignIn, false) => "btn btn-ghost tappable",
        (IdentityAffordance::SignIn, true) => "btn btn-ghost btn-block",
        (IdentityAffordance::SignUp, false) => "btn btn-solid tappable",
        (IdentityAffordance::SignUp, true) => "btn btn-solid btn-block",
        (IdentityAffordance::AccountMenu, _) => "account-avatar",
    };

    view! {
        <div class="identity-slot" data-identity-slot=affordance.slot()>
            <a href=affordance.href() class=class>
                {affordance.label()}
            </a>
        </div>
    }
}
