use leptos::prelude::*;

use crate::content::PLAY_HREF;
use crate::motion::{Reveal, RevealKind};

#[component]
pub fn CallToAction() -> impl IntoView {
    let reveal = Reveal::new(RevealKind::Rise, 0.8).when_visible();

    view! {
        <section class="cta">
            <div class=reveal.class("cta-card") style=reveal.style()>
                <h2 class="cta-title">"Ready to Start Playing?"</h2>
                <p class="cta-description">
                    "Join thousands of players and start your gaming journey today!"
                </p>
                <a href=PLAY_HREF class="btn btn-gradient btn-xl tappable">
                    "Play Now - It's Free!"
                </a>
            </div>
        </section>
    }
}
