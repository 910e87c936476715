use leptos::prelude::*;

use crate::content::{FEATURES, Feature};
use crate::icons::Icon;
use crate::motion::{Reveal, RevealKind};

#[component]
pub fn Features() -> impl IntoView {
    let heading = Reveal::new(RevealKind::Rise, 0.8).when_visible();

    view! {
        <section id="features" class="features">
            <div class="container">
                <h2 class=heading.class("section-title") style=heading.style()>
                    "Why Choose Our Games?"
                </h2>
                <div class="features-grid">
                    {FEATURES
                        .iter()
                        .enumerate()
                        .map(|(index, feature)| view! { <FeatureCard feature=*feature index=index /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn FeatureCard(feature: Feature, index: usize) -> impl IntoView {
    let reveal = Reveal::new(RevealKind::Rise, 0.8)
        .when_visible()
        .staggered(0.0, 0.2, index);

    view! {
        <article class=reveal.class("feature-card") style=reveal.style()>
            <div class="feature-icon">
                <Icon paths=feature.icon class="icon icon-lg" />
            </div>
            <h3 class="feature-title">{feature.title}</h3>
            <p class="feature-description">{feature.description}</p>
        </article>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;

    #[test]
    fn renders_every_feature_in_order() {
        let html = view! { <Features /> }.to_html();
        assert_eq!(html.matches("<article").count(), FEATURES.len());

        let mut last = 0;
        for feature in FEATURES {
            let pos = html.find(feature.title).expect("feature title rendered");
            assert!(pos > last, "{} out of order", feature.title);
            last = pos;
        }
    }

    #[test]
    fn cards_wait_until_visible() {
        let html = view! { <Features /> }.to_html();
        // heading + three cards
        assert_eq!(html.matches("reveal-on-view").count(), 4);
    }

    #[test]
    fn cards_are_staggered() {
        let html = view! { <Features /> }.to_html();
        assert!(html.contains("animation-delay: 0s;"));
        assert!(html.contains("animation-delay: 0.2s;"));
        assert!(html.contains("animation-delay: 0.4s;"));
    }
}
