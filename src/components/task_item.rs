//! Task Item Component
//!
//! Single row: completion checkbox, inline title editing, delete. The
//! pending booleans here are per-item UI feedback only; the store remains
//! the source of truth for the task itself.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::HttpTaskGateway;
use crate::models::{Task, UpdateTaskData};
use crate::store::TaskStore;
use crate::validate;

#[component]
pub fn TaskItem(task: Task, store: TaskStore) -> impl IntoView {
    let id = StoredValue::new(task.id.clone());
    let (toggling, set_toggling) = signal(false);
    let (deleting, set_deleting) = signal(false);
    let (editing, set_editing) = signal(false);
    let (draft_title, set_draft_title) = signal(task.title.clone());

    let toggle = move |_| {
        if toggling.get() {
            return;
        }
        set_toggling.set(true);
        spawn_local(async move {
            let _ = store
                .toggle_completion(&HttpTaskGateway::default(), &id.get_value())
                .await;
            set_toggling.set(false);
        });
    };

    let delete = move |_| {
        if deleting.get() {
            return;
        }
        set_deleting.set(true);
        spawn_local(async move {
            let _ = store
                .delete_task(&HttpTaskGateway::default(), &id.get_value())
                .await;
            set_deleting.set(false);
        });
    };

    let save_title = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let title = draft_title.get();
        if validate::validate_task_title(&title).is_some() {
            return;
        }
        spawn_local(async move {
            let data = UpdateTaskData {
                title: Some(title.trim().to_string()),
                ..Default::default()
            };
            if store
                .update_task(&HttpTaskGateway::default(), &id.get_value(), &data)
                .await
                .is_ok()
            {
                set_editing.set(false);
            }
        });
    };

    let completed = task.completed;
    let title = task.title.clone();
    let description = task.description.clone();

    view! {
        <li class=move || if completed { "task-item completed" } else { "task-item" }>
            <input
                type="checkbox"
                checked=completed
                disabled=move || toggling.get()
                on:change=toggle
            />
            {move || if editing.get() {
                view! {
                    <form class="edit-title" on:submit=save_title>
                        <input
                            type="text"
                            prop:value=move || draft_title.get()
                            on:input=move |ev| set_draft_title.set(event_target_value(&ev))
                        />
                        <button type="submit">"Save"</button>
                        <button type="button" on:click=move |_| set_editing.set(false)>
                            "Cancel"
                        </button>
                    </form>
                }.into_any()
            } else {
                let title = title.clone();
                let description = description.clone();
                view! {
                    <div class="task-body" on:click=move |_| store.select_task(Some(id.get_value()))>
                        <span class="task-title" on:dblclick=move |_| set_editing.set(true)>
                            {title}
                        </span>
                        {description.map(|text| view! { <p class="task-description">{text}</p> })}
                    </div>
                }.into_any()
            }}
            <button
                type="button"
                class="delete-btn"
                disabled=move || deleting.get()
                on:click=delete
            >
                "Delete"
            </button>
        </li>
    }
}
