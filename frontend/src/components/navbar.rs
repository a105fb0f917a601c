use leptos::*;
use leptos_router::*;
use papercheck::{is_active, MenuState, Theme, NAV_LINKS};
use papercheck::site::SIGNUP_PATH;

use crate::APP_NAME;

/// Apply the theme as the `dark` class on `<html>`.
fn apply_theme(theme: Theme) {
    let root = gloo_utils::document_element();
    if let Err(e) = root.class_list().toggle_with_force("dark", theme.is_dark()) {
        log::warn!("Could not apply theme: {:?}", e);
    }
}

#[component]
pub fn Navbar() -> impl IntoView {
    let pathname = use_location().pathname;
    let (menu, set_menu) = create_signal(MenuState::default());
    let (theme, set_theme) = create_signal(Theme::default());

    create_effect(move |_| apply_theme(theme.get()));

    let toggle_theme = move |_| set_theme.update(|t| *t = t.toggled());
    let toggle_menu = move |_| set_menu.update(|m| *m = m.toggled());
    let close_menu = move |_| set_menu.update(|m| *m = m.closed());

    let links = move || {
        NAV_LINKS
            .iter()
            .map(|link| {
                let href = link.href;
                view! {
                    <a
                        href=href
                        class="nav-link"
                        class:active=move || is_active(&pathname.get(), href)
                        on:click=close_menu
                    >
                        {link.label}
                    </a>
                }
            })
            .collect_view()
    };

    view! {
        <nav class="navbar">
            <div class="navbar-inner">
                <a href="/" class="logo">
                    <span class="logo-mark">"✓"</span>
                    {APP_NAME}
                </a>

                <div class="nav-links">{links}</div>

                <div class="nav-actions">
                    <button class="theme-toggle" on:click=toggle_theme aria-label="Toggle theme">
                        {move || if theme.get().is_dark() { "☀️" } else { "🌙" }}
                    </button>
                    <a href=SIGNUP_PATH class="btn btn-primary">"Get Started"</a>
                    <button
                        class="menu-toggle"
                        on:click=toggle_menu
                        aria-label="Toggle menu"
                        aria-expanded=move || menu.get().open.to_string()
                    >
                        {move || if menu.get().open { "✕" } else { "☰" }}
                    </button>
                </div>
            </div>

            <Show when=move || menu.get().open fallback=|| ()>
                <div class="mobile-menu">
                    {links}
                    <a href=SIGNUP_PATH class="btn btn-primary" on:click=close_menu>"Get Started"</a>
                </div>
            </Show>
        </nav>
    }
}
