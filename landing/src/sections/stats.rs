use leptos::prelude::*;

use crate::content::STATS;
use crate::motion::{Reveal, RevealKind};

#[component]
pub fn Stats() -> impl IntoView {
    view! {
        <section class="stats">
            <div class="container">
                <div class="stats-grid">
                    {STATS
                        .iter()
                        .enumerate()
                        .map(|(index, stat)| {
                            let reveal = Reveal::new(RevealKind::Scale, 0.8)
                                .when_visible()
                                .staggered(0.0, 0.2, index);
                            view! {
                                <div class=reveal.class("stat") style=reveal.style()>
                                    <div class="stat-value text-gradient">{stat.value}</div>
                                    <div class="stat-label">{stat.label}</div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;

    #[test]
    fn renders_every_stat_in_order() {
        let html = view! { <Stats /> }.to_html();
        assert_eq!(html.matches("stat-value").count(), 3);

        let values: Vec<_> = STATS.iter().map(|s| html.find(s.label).unwrap()).collect();
        assert!(values.windows(2).all(|w| w[0] < w[1]));
        assert!(html.contains("10K+"));
        assert!(html.contains("1M+"));
    }
}
