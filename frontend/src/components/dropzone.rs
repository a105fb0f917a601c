//! Drop target with a hidden file picker.
//!
//! Hands every offered batch (drop or picker) to `on_files`; acceptance is
//! decided by the upload session, not here.

use leptos::html::Input;
use leptos::*;
use web_sys::{DragEvent, Event};

use crate::services::{files_from_list, BrowserFile};

#[component]
pub fn Dropzone(
    /// Called with each offered batch.
    #[prop(into)]
    on_files: Callback<Vec<BrowserFile>>,
    /// `accept` attribute for the picker.
    #[prop(into)]
    accept: String,
    /// Limit shown in the hint, e.g. "10MB".
    #[prop(into)]
    max_size: String,
    /// Ignore input while a submission runs.
    #[prop(into)]
    disabled: Signal<bool>,
) -> impl IntoView {
    let (drag_active, set_drag_active) = create_signal(false);
    let input_ref = create_node_ref::<Input>();

    let open_picker = move |_| {
        if disabled.get_untracked() {
            return;
        }
        if let Some(input) = input_ref.get() {
            input.click();
        }
    };

    let on_change = move |ev: Event| {
        let input: web_sys::HtmlInputElement = event_target(&ev);
        if let Some(list) = input.files() {
            on_files.call(files_from_list(&list));
        }
        // Allow picking the same file again.
        input.set_value("");
    };

    let on_drag_over = move |ev: DragEvent| {
        ev.prevent_default();
        if !disabled.get_untracked() {
            set_drag_active.set(true);
        }
    };

    let on_drop = move |ev: DragEvent| {
        ev.prevent_default();
        set_drag_active.set(false);
        if disabled.get_untracked() {
            return;
        }
        if let Some(list) = ev.data_transfer().and_then(|dt| dt.files()) {
            on_files.call(files_from_list(&list));
        }
    };

    view! {
        <div
            class="dropzone"
            class:drag-active=move || drag_active.get()
            class:disabled=move || disabled.get()
            on:click=open_picker
            on:dragover=on_drag_over
            on:dragleave=move |_| set_drag_active.set(false)
            on:drop=on_drop
        >
            <input
                type="file"
                multiple
                accept=accept
                style="display:none"
                node_ref=input_ref
                on:change=on_change
            />
            <div class="dropzone-icon">"📤"</div>
            <h3 class="dropzone-title">
                {move || if drag_active.get() {
                    "Drop your files here"
                } else {
                    "Drag & drop your papers"
                }}
            </h3>
            <p class="dropzone-hint">"or click to browse from your device"</p>
            <div class="dropzone-formats">
                <span class="format-chip">"PDF"</span>
                <span class="format-chip">"JPG"</span>
                <span class="format-chip">"PNG"</span>
                <span class="format-limit">"• Max " {max_size}</span>
            </div>
        </div>
    }
}
