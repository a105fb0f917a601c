//! Footer component

use leptos::*;
use papercheck::NAV_LINKS;

use crate::APP_NAME;

#[component]
pub fn Footer() -> impl IntoView {
    let year = chrono::Local::now().format("%Y").to_string();

    view! {
        <footer>
            <div>
                "Copyright © " {year} " " {APP_NAME}
                " • Powered by " <span class="rust-badge">"🦀 Rust + Leptos"</span>
            </div>
            <div class="footer-links">
                {NAV_LINKS
                    .iter()
                    .map(|link| view! { <a href=link.href class="footer-link">{link.label}</a> })
                    .collect_view()}
            </div>
        </footer>
    }
}
