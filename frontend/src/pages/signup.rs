//! Signup form. UI only: account creation belongs to a separate service.

use gloo_timers::callback::Timeout;
use leptos::*;
use leptos_meta::Title;
use papercheck::{Notice, SignupForm, UserRole, MIN_PASSWORD_LEN};

use crate::components::use_toaster;
use crate::{APP_NAME, SIGNUP_DELAY_MS};

#[component]
fn PasswordField(
    label: &'static str,
    id: &'static str,
    value: Signal<String>,
    #[prop(into)] on_input: Callback<String>,
) -> impl IntoView {
    let (visible, set_visible) = create_signal(false);

    view! {
        <div class="form-field">
            <label for=id>{label}</label>
            <div class="password-input">
                <input
                    id=id
                    type=move || if visible.get() { "text" } else { "password" }
                    placeholder="••••••••"
                    prop:value=move || value.get()
                    on:input=move |ev| on_input.call(event_target_value(&ev))
                />
                <button
                    type="button"
                    class="password-toggle"
                    aria-label="Toggle password visibility"
                    on:click=move |_| set_visible.update(|v| *v = !*v)
                >
                    {move || if visible.get() { "🙈" } else { "👁️" }}
                </button>
            </div>
        </div>
    }
}

#[component]
pub fn SignupPage() -> impl IntoView {
    let toaster = use_toaster();
    let form = create_rw_signal(SignupForm::default());
    let (submitting, set_submitting) = create_signal(false);
    let pending = store_value(None::<Timeout>);

    // Dropping a `Timeout` cancels it.
    on_cleanup(move || {
        pending.try_update_value(|t| t.take());
    });

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        if let Err(e) = form.with_untracked(SignupForm::validate) {
            toaster.push(Notice::from(&e));
            return;
        }

        set_submitting.set(true);
        log::info!("📝 Signup as {}", form.with_untracked(|f| f.role.label()));
        let timeout = Timeout::new(SIGNUP_DELAY_MS, move || {
            set_submitting.set(false);
            toaster.push(Notice::signup_demo());
        });
        pending.set_value(Some(timeout));
    };

    let role_button = move |role: UserRole| {
        view! {
            <button
                type="button"
                class="role-option"
                class:selected=move || form.with(|f| f.role == role)
                on:click=move |_| form.update(|f| f.role = role)
            >
                {role.label()}
            </button>
        }
    };

    view! {
        <Title text=format!("Sign up • {}", APP_NAME)/>
        <div class="container signup-page">
            <div class="auth-card">
                <div class="auth-header">
                    <h1>"Create Account"</h1>
                    <p>"Join thousands of students & tutors"</p>
                </div>

                <form on:submit=on_submit>
                    <div class="form-field">
                        <span class="field-label">"I am a"</span>
                        <div class="role-options">
                            {role_button(UserRole::Student)}
                            {role_button(UserRole::Tutor)}
                        </div>
                    </div>

                    <div class="form-field">
                        <label for="name">"Full Name"</label>
                        <input
                            id="name"
                            type="text"
                            placeholder="John Doe"
                            prop:value=move || form.with(|f| f.name.clone())
                            on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                        />
                    </div>

                    <div class="form-field">
                        <label for="email">"Email"</label>
                        <input
                            id="email"
                            type="email"
                            placeholder="you@example.com"
                            prop:value=move || form.with(|f| f.email.clone())
                            on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                        />
                    </div>

                    <PasswordField
                        label="Password"
                        id="password"
                        value=Signal::derive(move || form.with(|f| f.password.clone()))
                        on_input=move |v: String| form.update(|f| f.password = v)
                    />
                    <p class="field-hint">"At least " {MIN_PASSWORD_LEN} " characters"</p>

                    <PasswordField
                        label="Confirm Password"
                        id="confirm-password"
                        value=Signal::derive(move || form.with(|f| f.confirm_password.clone()))
                        on_input=move |v: String| form.update(|f| f.confirm_password = v)
                    />

                    <button type="submit" class="btn btn-hero" disabled=move || submitting.get()>
                        {move || if submitting.get() { "Creating account..." } else { "Create Account" }}
                    </button>
                </form>

                <p class="auth-terms">
                    "By signing up, you agree to our "
                    <a href="#">"Terms of Service"</a>
                    " and "
                    <a href="#">"Privacy Policy"</a>
                </p>
            </div>
        </div>
    }
}
