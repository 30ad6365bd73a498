//! Password Reset Confirm Page
//!
//! Landed from the email link; the reset token rides the query string.
//! Without a token the form is never shown.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_query_map;

use crate::api;
use crate::components::{ErrorDisplay, FieldInput};
use crate::context::use_app_context;
use crate::monitor::FlowKind;
use crate::validate;

#[component]
pub fn ResetPasswordPage() -> impl IntoView {
    let ctx = use_app_context();
    let query = use_query_map();
    let token = Memo::new(move |_| {
        query
            .with(|q| q.get("token"))
            .filter(|t| !t.is_empty())
    });

    let (password, set_password) = signal(String::new());
    let (confirm, set_confirm) = signal(String::new());
    let (password_error, set_password_error) = signal::<Option<String>>(None);
    let (confirm_error, set_confirm_error) = signal::<Option<String>>(None);
    let (form_error, set_form_error) = signal::<Option<String>>(None);
    let (done, set_done) = signal(false);
    let (loading, set_loading) = signal(false);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if loading.get() {
            return;
        }
        let Some(reset_token) = token.get() else {
            return;
        };
        let password_value = password.get();
        let password_issue = validate::validate_password(&password_value);
        let confirm_issue =
            validate::validate_password_confirmation(&password_value, &confirm.get());
        set_password_error.set(password_issue.clone());
        set_confirm_error.set(confirm_issue.clone());
        if password_issue.is_some() || confirm_issue.is_some() {
            return;
        }

        set_loading.set(true);
        set_form_error.set(None);
        spawn_local(async move {
            let started = js_sys::Date::now();
            match api::confirm_password_reset(&reset_token, &password_value).await {
                Ok(()) => {
                    ctx.record_flow(FlowKind::PasswordReset, started, true, None);
                    set_password.set(String::new());
                    set_confirm.set(String::new());
                    set_done.set(true);
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
            <h1>"Choose a new password"</h1>
            {move || if token.get().is_none() {
                view! {
                    <p class="reset-invalid">
                        "Missing reset token. Please request a new password reset."
                    </p>
                }.into_any()
            } else if done.get() {
                view! {
                    <p class="reset-done">
                        "Your password has been reset. You can now sign in with your new password."
                    </p>
                }.into_any()
            } else {
                view! {
                    <ErrorDisplay
                        error=form_error
                        on_close=Callback::new(move |_| set_form_error.set(None))
                    />
                    <form on:submit=submit>
                        <FieldInput
                            label="New password"
                            input_type="password"
                            value=password
                            on_input=Callback::new(move |value: String| {
                                set_password_error
                                    .set(validate::validate_password(&value).filter(|_| !value.is_empty()));
                                set_password.set(value);
                            })
                            error=password_error
                        />
                        <FieldInput
                            label="Confirm new password"
                            input_type="password"
                            value=confirm
                            on_input=Callback::new(move |value: String| {
                                set_confirm_error.set(None);
                                set_confirm.set(value);
                            })
                            error=confirm_error
                        />
                        <button type="submit" disabled=move || loading.get()>
                            {move || if loading.get() { "Resetting..." } else { "Reset password" }}
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
