//! Registration Page

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::api;
use crate::components::{ErrorDisplay, FieldInput};
use crate::context::use_app_context;
use crate::models::RegistrationData;
use crate::monitor::FlowKind;
use crate::session;
use crate::validate;

#[component]
pub fn RegisterPage() -> impl IntoView {
    let ctx = use_app_context();
    let navigate = use_navigate();

    {
        let navigate = navigate.clone();
        Effect::new(move |_| {
            let _ = ctx.session_version.get();
            if session::is_authenticated() {
                navigate("/tasks", Default::default());
            }
        });
    }

    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (name_error, set_name_error) = signal::<Option<String>>(None);
    let (email_error, set_email_error) = signal::<Option<String>>(None);
    let (username_error, set_username_error) = signal::<Option<String>>(None);
    let (password_error, set_password_error) = signal::<Option<String>>(None);
    let (form_error, set_form_error) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(false);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if loading.get() {
            return;
        }
        let data = RegistrationData {
            name: name.get(),
            email: email.get(),
            username: username.get(),
            password: password.get(),
        };
        let name_issue = validate::validate_name(&data.name);
        let email_issue = validate::validate_email(&data.email);
        let username_issue = validate::validate_username(&data.username);
        let password_issue = validate::validate_password(&data.password);
        set_name_error.set(name_issue.clone());
        set_email_error.set(email_issue.clone());
        set_username_error.set(username_issue.clone());
        set_password_error.set(password_issue.clone());
        if name_issue.is_some()
            || email_issue.is_some()
            || username_issue.is_some()
            || password_issue.is_some()
        {
            return;
        }

        set_loading.set(true);
        set_form_error.set(None);
        let navigate = navigate.clone();
        spawn_local(async move {
            let started = js_sys::Date::now();
            match api::sign_up(&data).await {
                Ok(_) => {
                    ctx.record_flow(FlowKind::Registration, started, true, None);
                    set_loading.set(false);
                    ctx.session_changed();
                    navigate("/tasks", Default::default());
                }
                Err(err) => {
                    let message = err.message();
                    ctx.record_flow(FlowKind::Registration, started, false, Some(message.clone()));
                    if message.to_lowercase().contains("email") {
                        set_email_error.set(Some(message));
                    } else if message.to_lowercase().contains("username") {
                        set_username_error.set(Some(message));
                    } else {
                        set_form_error.set(Some(message));
                    }
                    set_loading.set(false);
                }
            }
        });
    };

    view! {
        <main class="auth-page">
            <h1>"Create an account"</h1>
            <ErrorDisplay error=form_error on_close=Callback::new(move |_| set_form_error.set(None))/>
            <form on:submit=submit>
                <FieldInput
                    label="Name"
                    input_type="text"
                    value=name
                    on_input=Callback::new(move |value: String| {
                        set_name_error.set(validate::validate_name(&value).filter(|_| !value.is_empty()));
                        set_name.set(value);
                    })
                    error=name_error
                />
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
                    label="Username"
                    input_type="text"
                    value=username
                    on_input=Callback::new(move |value: String| {
                        set_username_error.set(validate::validate_username(&value).filter(|_| !value.is_empty()));
                        set_username.set(value);
                    })
                    error=username_error
                />
                <FieldInput
                    label="Password"
                    input_type="password"
                    value=password
                    on_input=Callback::new(move |value: String| {
                        set_password_error.set(validate::validate_password(&value).filter(|_| !value.is_empty()));
                        set_password.set(value);
                    })
                    error=password_error
                />
                <button type="submit" disabled=move || loading.get()>
                    {move || if loading.get() { "Creating..." } else { "Create account" }}
                </button>
            </form>
            <p class="auth-links">
                <A href="/login">"Already have an account? Sign in"</A>
            </p>
        </main>
    }
}
