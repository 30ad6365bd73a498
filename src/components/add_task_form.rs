//! Add Task Form Component
//!
//! Title plus optional description; title is validated locally before
//! anything is sent.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::HttpTaskGateway;
use crate::models::CreateTaskData;
use crate::store::TaskStore;
use crate::validate;

#[component]
pub fn AddTaskForm(store: TaskStore) -> impl IntoView {
    let (title, set_title) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (title_error, set_title_error) = signal::<Option<String>>(None);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let current_title = title.get();
        if let Some(message) = validate::validate_task_title(&current_title) {
            set_title_error.set(Some(message));
            return;
        }
        set_title_error.set(None);

        let current_description = description.get();
        let data = CreateTaskData {
            title: current_title.trim().to_string(),
            description: if current_description.trim().is_empty() {
                None
            } else {
                Some(current_description.trim().to_string())
            },
        };
        spawn_local(async move {
            if store
                .create_task(&HttpTaskGateway::default(), &data)
                .await
                .is_ok()
            {
                set_title.set(String::new());
                set_description.set(String::new());
            }
        });
    };

    view! {
        <form class="add-task-form" on:submit=submit>
            <input
                type="text"
                placeholder="Add a new task..."
                prop:value=move || title.get()
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    set_title_error.set(validate::validate_task_title(&value).filter(|_| !value.is_empty()));
                    set_title.set(value);
                }
            />
            <textarea
                placeholder="Description (optional)"
                prop:value=move || description.get()
                on:input=move |ev| set_description.set(event_target_value(&ev))
            ></textarea>
            {move || title_error.get().map(|message| view! {
                <p class="field-error">{message}</p>
            })}
            <button type="submit">"Add task"</button>
        </form>
    }
}
