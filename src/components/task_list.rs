//! Task List Component

use leptos::prelude::*;

use crate::components::TaskItem;
use crate::store::{TaskStateStoreFields, TaskStore};

#[component]
pub fn TaskList(store: TaskStore) -> impl IntoView {
    view! {
        <ul class="task-list">
            <For
                each=move || store.state().tasks().get()
                key=|task| (task.id.clone(), task.updated_at.clone(), task.completed)
                children=move |task| view! { <TaskItem task=task store=store/> }
            />
        </ul>
        {move || {
            let empty = store.state().tasks().read().is_empty();
            let loading = store.state().loading().get();
            (empty && !loading).then(|| view! {
                <p class="empty-state">"No tasks yet. Add one above."</p>
            })
        }}
    }
}
