//! Home Page
//!
//! Public landing page; links depend on session state.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::context::use_app_context;
use crate::session;

#[component]
pub fn HomePage() -> impl IntoView {
    let ctx = use_app_context();
    let authenticated = move || {
        let _ = ctx.session_version.get();
        session::is_authenticated()
    };

    view! {
        <main class="home">
            <h1>"Taskdeck"</h1>
            <p>"Small tasks, kept in order."</p>
            {move || if authenticated() {
                view! {
                    <div class="home-links">
                        <A href="/tasks">"Go to your tasks"</A>
                    </div>
                }.into_any()
            } else {
                view! {
                    <div class="home-links">
                        <A href="/login">"Sign in"</A>
                        <A href="/register">"Create an account"</A>
                    </div>
                }.into_any()
            }}
        </main>
    }
}
