use leptos::*;

/// Inline width style of the progress fill.
pub fn fill_style(progress: u8) -> String {
    format!("width: {}%;", progress.min(100))
}

#[component]
pub fn ProgressPanel(
    #[prop(into)] progress: Signal<u8>,
    #[prop(into)] on_cancel: Callback<()>,
    /// Cancel is offered until processing completes.
    #[prop(into)]
    cancellable: Signal<bool>,
) -> impl IntoView {
    view! {
        <div class="progress-panel">
            <div class="progress-header">
                <span class="spinner"></span>
                <span class="progress-label">"Processing your papers..."</span>
            </div>
            <div class="progress-bar">
                <div class="progress-fill" style=move || fill_style(progress.get())></div>
            </div>
            <div class="progress-footer">
                <p class="progress-text">{move || progress.get()} "% complete"</p>
                <Show when=move || cancellable.get() fallback=|| ()>
                    <button class="btn btn-ghost" on:click=move |_| on_cancel.call(())>
                        "Cancel"
                    </button>
                </Show>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_style_clamps() {
        assert_eq!(fill_style(0), "width: 0%;");
        assert_eq!(fill_style(40), "width: 40%;");
        assert_eq!(fill_style(250), "width: 100%;");
    }
}
