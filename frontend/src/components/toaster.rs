//! Transient notices (toasts).
//!
//! [`Toaster`] is provided as context by `App`; any component pushes a
//! [`Notice`] and the [`ToastStack`] renders it until it times out or is
//! clicked away.

use gloo_timers::callback::Timeout;
use leptos::*;
use papercheck::Notice;

use crate::{MAX_NOTICES, NOTICE_TIMEOUT_MS};

/// A notice on screen.
#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub notice: Notice,
    pub timestamp: String,
}

/// Append `toast`, dropping the oldest entries beyond `max`.
pub fn push_capped(toasts: &mut Vec<Toast>, toast: Toast, max: usize) {
    toasts.push(toast);
    if toasts.len() > max {
        let excess = toasts.len() - max;
        toasts.drain(..excess);
    }
}

/// Handle to the notice stack.
#[derive(Clone, Copy)]
pub struct Toaster {
    toasts: RwSignal<Vec<Toast>>,
    next_id: StoredValue<u64>,
}

impl Toaster {
    pub fn new() -> Self {
        Self {
            toasts: create_rw_signal(Vec::new()),
            next_id: store_value(0),
        }
    }

    /// Show a notice; it dismisses itself after `NOTICE_TIMEOUT_MS`.
    pub fn push(&self, notice: Notice) {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);

        log::info!("🔔 {}: {}", notice.title, notice.description);

        let timestamp = js_sys::Date::new_0()
            .to_locale_time_string("en-GB")
            .as_string()
            .unwrap_or_else(|| "00:00:00".to_string());

        self.toasts.update(|toasts| {
            push_capped(
                toasts,
                Toast {
                    id,
                    notice,
                    timestamp,
                },
                MAX_NOTICES,
            )
        });

        let this = *self;
        Timeout::new(NOTICE_TIMEOUT_MS, move || this.dismiss(id)).forget();
    }

    /// Remove a notice. Unknown ids are ignored.
    pub fn dismiss(&self, id: u64) {
        self.toasts.try_update(|toasts| toasts.retain(|t| t.id != id));
    }

    pub fn toasts(&self) -> Signal<Vec<Toast>> {
        self.toasts.into()
    }
}

impl Default for Toaster {
    fn default() -> Self {
        Self::new()
    }
}

/// The toaster provided by `App`.
pub fn use_toaster() -> Toaster {
    expect_context::<Toaster>()
}

#[component]
pub fn ToastStack() -> impl IntoView {
    let toaster = use_toaster();

    view! {
        <div class="toast-stack" role="status" aria-live="polite">
            <For
                each=move || toaster.toasts().get()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    let class_name = format!("toast {}", toast.notice.level.css_class());
                    view! {
                        <div class=class_name on:click=move |_| toaster.dismiss(id)>
                            <div class="toast-title">{toast.notice.title}</div>
                            <div class="toast-description">{toast.notice.description}</div>
                            <div class="toast-time">{toast.timestamp}</div>
                        </div>
                    }
                }
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toast(id: u64) -> Toast {
        Toast {
            id,
            notice: Notice::info(format!("notice {}", id), ""),
            timestamp: "12:00:00".into(),
        }
    }

    #[test]
    fn test_push_below_cap() {
        let mut toasts = Vec::new();
        push_capped(&mut toasts, toast(0), 3);
        push_capped(&mut toasts, toast(1), 3);
        assert_eq!(toasts.iter().map(|t| t.id).collect::<Vec<_>>(), vec![0, 1]);
    }

    #[test]
    fn test_push_drops_oldest() {
        let mut toasts = Vec::new();
        for id in 0..7 {
            push_capped(&mut toasts, toast(id), MAX_NOTICES);
        }
        assert_eq!(toasts.len(), MAX_NOTICES);
        assert_eq!(toasts.first().map(|t| t.id), Some(2));
        assert_eq!(toasts.last().map(|t| t.id), Some(6));
    }
}
