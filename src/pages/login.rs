//! Login Page

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::api;
use crate::components::{ErrorDisplay, FieldInput};
use crate::context::use_app_context;
use crate::models::LoginCredentials;
use crate::monitor::FlowKind;
use crate::session;
use crate::validate;

#[component]
pub fn LoginPage() -> impl IntoView {
    let ctx = use_app_context();
    let navigate = use_navigate();

    // Already signed in: this page redirects to the dashboard.
    {
        let navigate = navigate.clone();
        Effect::new(move |_| {
            let _ = ctx.session_version.get();
            if session::is_authenticated() {
                navigate("/tasks", Default::default());
            }
        });
    }

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (email_error, set_email_error) = signal::<Option<String>>(None);
    let (password_error, set_password_error) = signal::<Option<String>>(None);
    let (form_error, set_form_error) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(false);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if loading.get() {
            return;
        }
        let email_value = email.get();
        let password_value = password.get();
        let email_issue = validate::validate_email(&email_value);
        // On login only presence matters; the strength rules are for signup.
        let password_issue = password_value
            .is_empty()
            .then(|| "Password is required".to_string());
        set_email_error.set(email_issue.clone());
        set_password_error.set(password_issue.clone());
        if email_issue.is_some() || password_issue.is_some() {
            return;
        }

        set_loading.set(true);
        set_form_error.set(None);
        let navigate = navigate.clone();
        spawn_local(async move {
            let started = js_sys::Date::now();
            let credentials = LoginCredentials {
                email: email_value,
                password: password_value,
            };
            match api::sign_in(&credentials).await {
                Ok(_) => {
                    ctx.record_flow(FlowKind::Login, started, true, None);
                    set_loading.set(false);
                    ctx.session_changed();
                    navigate("/tasks", Default::default());
                }
                Err(err) => {
                    let message = err.message();
                    ctx.record_flow(FlowKind::Login, started, false, Some(message.clone()));
                    set_form_error.set(Some(message));
                    set_loading.set(false);
                }
            }
        });
    };

    view! {
        <main class="auth-page">
            <h1>"Sign in"</h1>
            <ErrorDisplay error=form_error on_close=Callback::new(move |_| set_form_error.set(None))/>
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
                <FieldInput
                    label="Password"
                    input_type="password"
                    value=password
                    on_input=Callback::new(move |value: String| {
                        set_password_error.set(None);
                        set_password.set(value);
                    })
                    error=password_error
                />
                <button type="submit" disabled=move || loading.get()>
                    {move || if loading.get() { "Signing in..." } else { "Sign in" }}
                </button>
            </form>
            <p class="auth-links">
                <A href="/forgot-password">"Forgot password?"</A>
                <A href="/register">"Create an account"</A>
            </p>
        </main>
    }
}
