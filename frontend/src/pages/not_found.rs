use leptos::*;
use leptos_meta::Title;
use leptos_router::*;
use papercheck::site::HOME_PATH;

use crate::APP_NAME;

#[component]
pub fn NotFound() -> impl IntoView {
    let location = use_location();

    create_effect(move |_| {
        log::error!(
            "404 Error: User attempted to access non-existent route: {}",
            location.pathname.get()
        );
    });

    let go_back = move |_| {
        if let Err(e) = gloo_utils::history().back() {
            log::warn!("History back failed: {:?}", e);
        }
    };

    view! {
        <Title text=format!("Not Found • {}", APP_NAME)/>
        <div class="container not-found">
            <h1 class="not-found-code">"404"</h1>
            <h2>"Page Not Found"</h2>
            <p>"Oops! The page you're looking for doesn't exist or has been moved."</p>
            <div class="not-found-actions">
                <A href=HOME_PATH class="btn btn-primary">"Go Home"</A>
                <button class="btn btn-outline" on:click=go_back>"Go Back"</button>
            </div>
        </div>
    }
}
