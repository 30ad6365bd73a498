//! Password Reset Request Page

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;

use crate::api;
use crate::components::{ErrorDisplay, FieldInput};
use crate::context::use_app_context;
use crate::monitor::FlowKind;
use crate::validate;

#[component]
pub fn ForgotPasswordPage() -> impl IntoView {
    let ctx = use_app_context();
    let (email, set_email) = signal(String::new());
    let (email_error, set_email_error) = signal::<Option<String>>(None);
    let (form_error, set_form_error) = signal::<Option<String>>(None);
    let (sent, set_sent) = signal(false);
    let (loading, set_loading) = signal(false);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if loading.get() {
            return;
        }
        let email_value = email.get();
        let issue = validate::validate_email(&email_value);
        set_email_error.set(issue.clone());
        if issue.is_some() {
            return;
        }
        set_loading.set(true);
        set_form_error.set(None);
        spawn_local(async move {
            let started = js_sys::Date::now();
            match api::request_password_reset(&email_value).await {
                Ok(()) => {
                    ctx.record_flow(FlowKind::PasswordReset, started, true, None);
                    set_sent.set(true);
                }
                Err(err) => {
                    let message = err.message();
                    ctx.record_flow(FlowKind::PasswordReset, started, false, Some(message.clone()));
                    set_form_error.set(Some(message));
                }
            }
            set_loading.set(false);
        });
    };

    view! {
        <main class="auth-page">
            <h1>"Reset your password"</h1>
            <ErrorDisplay error=form_error on_close=Callback::new(move |_| set_form_error.set(None))/>
            {move || if sent.get() {
                view! {
                    <p class="reset-sent">
                        "If an account exists for that address, a reset link is on its way."
                    </p>
                }.into_any()
            } else {
                view! {
                    <form on:submit=submit>
                        <FieldInput
                            label="Email"
                            input_type="email"
                            value=email
                            on_input=Callback::new(move |value: String| {
                                set_email_error.set(validate::validate_email(&value).filter(|_| !value.is_empty()));
                                set_email.set(value);
                            })
                            error=email_error
                        />
                        <button type="submit" disabled=move || loading.get()>
                            {move || if loading.get() { "Sending..." } else { "Send reset link" }}
                        </button>
                    </form>
                }.into_any()
            }}
            <p class="auth-links">
                <A href="/login">"Back to sign in"</A>
            </p>
        </main>
    }
}
