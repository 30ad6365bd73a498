//! Tasks Page
//!
//! Protected dashboard. Redirects to /login whenever the session is gone;
//! the relay server enforces the same rule before this code ever runs.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::api;
use crate::api::HttpTaskGateway;
use crate::components::{AddTaskForm, ErrorDisplay, Navbar, StatusCards, TaskList};
use crate::context::use_app_context;
use crate::session;
use crate::store::{TaskStateStoreFields, TaskStore};

#[component]
pub fn TasksPage() -> impl IntoView {
    let ctx = use_app_context();
    let navigate = use_navigate();
    Effect::new(move |_| {
        let _ = ctx.session_version.get();
        if !session::is_authenticated() {
            navigate("/login", Default::default());
        }
    });

    let store = TaskStore::new();

    // Probe the backend session on mount, then load tasks. A dead session
    // clears the token inside the probe; bumping the version re-runs the
    // gate effect above.
    Effect::new(move |_| {
        spawn_local(async move {
            if api::get_session().await.is_none() {
                ctx.session_changed();
                return;
            }
            let _ = store.fetch_tasks(&HttpTaskGateway::default()).await;
        });
    });

    let error = Signal::derive(move || store.state().error().get());

    view! {
        <div class="tasks-page">
            <Navbar/>
            <main>
                <StatusCards store=store/>
                <ErrorDisplay
                    error=error
                    on_close=Callback::new(move |_| store.state().error().set(None))
                />
                <AddTaskForm store=store/>
                {move || store.state().loading().get().then(|| view! {
                    <p class="loading">"Loading..."</p>
                })}
                <TaskList store=store/>
            </main>
        </div>
    }
}
