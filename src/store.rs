//! Task Store
//!
//! Reactive collection of task records. Uses Leptos reactive_stores for
//! fine-grained reactivity. Every operation round-trips through the
//! gateway before the collection is considered committed, with one
//! exception: completion toggling is applied optimistically and rolled
//! back if the backend rejects it.
//!
//! Concurrency discipline: one in-flight request per operation kind. The
//! flags are checked and set synchronously before the first await point,
//! so overlapping calls of the same kind are rejected without touching
//! state. Calls of different kinds may overlap; their merges are
//! last-write-wins on the shared task list.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::api::TaskGateway;
use crate::models::{CreateTaskData, Task, UpdateTaskData};

pub const REQUEST_IN_PROGRESS: &str = "Request in progress";

/// Store state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct TaskState {
    pub tasks: Vec<Task>,
    pub loading: bool,
    pub error: Option<String>,
    pub selected_task_id: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum OpKind {
    Fetch,
    Create,
    Update,
    Delete,
    Toggle,
}

#[derive(Clone, Copy, Debug, Default)]
struct InFlight {
    fetch: bool,
    create: bool,
    update: bool,
    delete: bool,
    toggle: bool,
}

impl InFlight {
    fn slot_mut(&mut self, kind: OpKind) -> &mut bool {
        match kind {
            OpKind::Fetch => &mut self.fetch,
            OpKind::Create => &mut self.create,
            OpKind::Update => &mut self.update,
            OpKind::Delete => &mut self.delete,
            OpKind::Toggle => &mut self.toggle,
        }
    }
}

/// Handle over the reactive state plus the per-kind dedupe flags. Copy, so
/// components and async blocks can capture it freely.
#[derive(Clone, Copy)]
pub struct TaskStore {
    state: Store<TaskState>,
    in_flight: StoredValue<InFlight>,
}

/// Clears an in-flight flag on every exit path of an operation.
struct FlightGuard {
    store: TaskStore,
    kind: OpKind,
}

impl Drop for FlightGuard {
    fn drop(&mut self) {
        self.store
            .in_flight
            .update_value(|flags| *flags.slot_mut(self.kind) = false);
    }
}

impl Default for TaskStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskStore {
    pub fn new() -> Self {
        Self {
            state: Store::new(TaskState::default()),
            in_flight: StoredValue::new(InFlight::default()),
        }
    }

    pub fn state(&self) -> Store<TaskState> {
        self.state
    }

    pub fn select_task(&self, id: Option<String>) {
        self.state.selected_task_id().set(id);
    }

    /// Synchronous check-and-set. Must happen before any await point.
    fn try_begin(&self, kind: OpKind) -> Option<FlightGuard> {
        let mut acquired = false;
        self.in_flight.update_value(|flags| {
            let slot = flags.slot_mut(kind);
            if !*slot {
                *slot = true;
                acquired = true;
            }
        });
        acquired.then_some(FlightGuard { store: *self, kind })
    }

    fn begin_loading(&self) {
        self.state.loading().set(true);
        self.state.error().set(None);
    }

    fn fail(&self, message: &str, fallback: &str) -> String {
        let message = if message.is_empty() { fallback } else { message };
        self.state.error().set(Some(message.to_string()));
        self.state.loading().set(false);
        message.to_string()
    }

    pub async fn fetch_tasks(&self, gateway: &impl TaskGateway) -> Result<(), String> {
        let Some(_guard) = self.try_begin(OpKind::Fetch) else {
            return Err(REQUEST_IN_PROGRESS.to_string());
        };
        self.begin_loading();
        match gateway.list_tasks().await {
            Ok(tasks) => {
                self.state.tasks().set(tasks);
                self.state.loading().set(false);
                Ok(())
            }
            Err(err) => Err(self.fail(&err.message(), "Failed to load tasks")),
        }
    }

    pub async fn create_task(
        &self,
        gateway: &impl TaskGateway,
        data: &CreateTaskData,
    ) -> Result<Task, String> {
        let Some(_guard) = self.try_begin(OpKind::Create) else {
            return Err(REQUEST_IN_PROGRESS.to_string());
        };
        self.begin_loading();
        match gateway.create_task(data).await {
            Ok(task) => {
                self.state.tasks().write().push(task.clone());
                self.state.loading().set(false);
                Ok(task)
            }
            Err(err) => Err(self.fail(&err.message(), "Failed to create task")),
        }
    }

    pub async fn update_task(
        &self,
        gateway: &impl TaskGateway,
        id: &str,
        data: &UpdateTaskData,
    ) -> Result<Task, String> {
        let Some(_guard) = self.try_begin(OpKind::Update) else {
            return Err(REQUEST_IN_PROGRESS.to_string());
        };
        self.begin_loading();
        match gateway.update_task(id, data).await {
            Ok(task) => {
                store_replace_task(&self.state, task.clone());
                self.state.loading().set(false);
                Ok(task)
            }
            Err(err) => Err(self.fail(&err.message(), "Failed to update task")),
        }
    }

    pub async fn delete_task(&self, gateway: &impl TaskGateway, id: &str) -> Result<(), String> {
        let Some(_guard) = self.try_begin(OpKind::Delete) else {
            return Err(REQUEST_IN_PROGRESS.to_string());
        };
        self.begin_loading();
        match gateway.delete_task(id).await {
            Ok(()) => {
                store_remove_task(&self.state, id);
                if self.state.selected_task_id().read().as_deref() == Some(id) {
                    self.state.selected_task_id().set(None);
                }
                self.state.loading().set(false);
                Ok(())
            }
            Err(err) => Err(self.fail(&err.message(), "Failed to delete task")),
        }
    }

    /// Flips `completed` locally before the call resolves. On success the
    /// server copy replaces the task; on failure the flag is restored to
    /// its exact prior value and the error recorded. The only speculative
    /// operation in the store.
    pub async fn toggle_completion(
        &self,
        gateway: &impl TaskGateway,
        id: &str,
    ) -> Result<Task, String> {
        let Some(_guard) = self.try_begin(OpKind::Toggle) else {
            return Err(REQUEST_IN_PROGRESS.to_string());
        };

        let prior = self
            .state
            .tasks()
            .read()
            .iter()
            .find(|task| task.id == id)
            .map(|task| task.completed);
        let Some(prior) = prior else {
            self.state.error().set(Some("Task not found".to_string()));
            return Err("Task not found".to_string());
        };

        store_set_completed(&self.state, id, !prior);

        match gateway.toggle_completion(id, !prior).await {
            Ok(task) => {
                store_replace_task(&self.state, task.clone());
                Ok(task)
            }
            Err(err) => {
                store_set_completed(&self.state, id, prior);
                let message = err.message();
                let message = if message.is_empty() {
                    "Failed to toggle completion".to_string()
                } else {
                    message
                };
                self.state.error().set(Some(message.clone()));
                Err(message)
            }
        }
    }
}

// ========================
// Store Helper Functions
// ========================

/// Replace a task in the store by ID
pub fn store_replace_task(state: &Store<TaskState>, updated: Task) {
    state
        .tasks()
        .write()
        .iter_mut()
        .find(|task| task.id == updated.id)
        .map(|task| *task = updated);
}

/// Remove a task from the store by ID
pub fn store_remove_task(state: &Store<TaskState>, id: &str) {
    state.tasks().write().retain(|task| task.id != id);
}

fn store_set_completed(state: &Store<TaskState>, id: &str, completed: bool) {
    state
        .tasks()
        .write()
        .iter_mut()
        .find(|task| task.id == id)
        .map(|task| task.completed = completed);
}
