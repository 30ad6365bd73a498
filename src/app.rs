//! Taskdeck Frontend App
//!
//! Route table and app-wide context. The in-browser redirects here mirror
//! the decision table the relay server applies to inbound requests.

use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::context::AppContext;
use crate::pages::{
    ForgotPasswordPage, HomePage, LoginPage, RegisterPage, ResetPasswordPage, TasksPage,
};

#[component]
pub fn App() -> impl IntoView {
    provide_context(AppContext::new());

    view! {
        <ErrorBoundary fallback=|_| view! {
            <main class="error-page">
                <p>"Something went wrong. Reload the page to continue."</p>
            </main>
        }>
            <Router>
                <Routes fallback=|| view! { <main><p>"Not found."</p></main> }>
                    <Route path=path!("/") view=HomePage/>
                    <Route path=path!("/login") view=LoginPage/>
                    <Route path=path!("/register") view=RegisterPage/>
                    <Route path=path!("/forgot-password") view=ForgotPasswordPage/>
                    <Route path=path!("/reset-password") view=ResetPasswordPage/>
                    <Route path=path!("/tasks") view=TasksPage/>
                </Routes>
            </Router>
        </ErrorBoundary>
    }
}
