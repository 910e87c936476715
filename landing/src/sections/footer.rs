use leptos::prelude::*;

use crate::config::SITE;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="container">
                <p class="footer-copyright">{SITE.copyright()}</p>
            </div>
        </footer>
    }
}
