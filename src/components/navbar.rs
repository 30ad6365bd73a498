//! Task Navbar Component
//!
//! Brand header with the logout button.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::api;
use crate::context::use_app_context;
use crate::monitor::FlowKind;

#[component]
pub fn Navbar() -> impl IntoView {
    let ctx = use_app_context();
    let navigate = use_navigate();
    let (logging_out, set_logging_out) = signal(false);

    let logout = move |_| {
        if logging_out.get() {
            return;
        }
        set_logging_out.set(true);
        let navigate = navigate.clone();
        spawn_local(async move {
            let started = js_sys::Date::now();
            api::sign_out().await;
            ctx.record_flow(FlowKind::Logout, started, true, None);
            set_logging_out.set(false);
            ctx.session_changed();
            navigate("/login", Default::default());
        });
    };

    view! {
        <nav class="navbar">
            <span class="brand">"Taskdeck"</span>
            <button type="button" class="logout-btn" disabled=move || logging_out.get() on:click=logout>
                {move || if logging_out.get() { "Signing out..." } else { "Sign out" }}
            </button>
        </nav>
    }
}
