use leptos::prelude::*;

use crate::content::{LEADERBOARD_HREF, PLAY_HREF};
use crate::motion::{Reveal, RevealKind};

#[component]
pub fn Hero() -> impl IntoView {
    let rise = Reveal::new(RevealKind::Rise, 0.8);
    let title = rise.delayed(0.2);
    let lead = rise.delayed(0.4);
    let actions = rise.delayed(0.6);

    view! {
        <section class="hero">
            <div class="container">
                <h1 class=title.class("hero-title") style=title.style()>
                    <span class="text-gradient-wide">"Mini Games"</span>
                </h1>
                <p class=lead.class("hero-description") style=lead.style()>
                    "Challenge yourself with our collection of addictive mini games. "
                    "Compete with players worldwide and climb the leaderboards!"
                </p>
                <div class=actions.class("hero-actions") style=actions.style()>
                    <a href=PLAY_HREF class="btn btn-gradient btn-lg tappable">
                        "Start Playing"
                    </a>
                    <a href=LEADERBOARD_HREF class="btn btn-outline btn-lg tappable">
                        "View Leaderboard"
                    </a>
                </div>
            </div>
        </section>
    }
}
