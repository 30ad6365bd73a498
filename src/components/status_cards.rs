//! Status Cards Component
//!
//! Pending/completed counters above the task list.

use leptos::prelude::*;

use crate::store::{TaskStateStoreFields, TaskStore};

#[component]
pub fn StatusCards(store: TaskStore) -> impl IntoView {
    let pending = move || {
        store
            .state()
            .tasks()
            .read()
            .iter()
            .filter(|task| !task.completed)
            .count()
    };
    let completed = move || {
        store
            .state()
            .tasks()
            .read()
            .iter()
            .filter(|task| task.completed)
            .count()
    };

    view! {
        <div class="status-cards">
            <div class="card">
                <h3>"Pending"</h3>
                <p class="count">{pending}</p>
            </div>
            <div class="card">
                <h3>"Completed"</h3>
                <p class="count">{completed}</p>
            </div>
        </div>
    }
}
