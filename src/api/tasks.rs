//! Task Endpoints
//!
//! Gateway seam for task persistence. The trait exists so the store can be
//! exercised against a scripted gateway in tests; `HttpTaskGateway` is the
//! production implementation riding the relay client.

use serde_json::Value;

use super::{ApiClient, ApiError};
use crate::models::{CreateTaskData, Task, UpdateTaskData};

const TASKS_PATH: &str = "/api/v1/tasks";

pub trait TaskGateway {
    async fn list_tasks(&self) -> Result<Vec<Task>, ApiError>;
    async fn create_task(&self, data: &CreateTaskData) -> Result<Task, ApiError>;
    async fn update_task(&self, id: &str, data: &UpdateTaskData) -> Result<Task, ApiError>;
    async fn delete_task(&self, id: &str) -> Result<(), ApiError>;
    async fn toggle_completion(&self, id: &str, completed: bool) -> Result<Task, ApiError>;
}

#[derive(Clone, Copy, Default)]
pub struct HttpTaskGateway {
    client: ApiClient,
}

impl TaskGateway for HttpTaskGateway {
    async fn list_tasks(&self) -> Result<Vec<Task>, ApiError> {
        self.client.get(TASKS_PATH).await
    }

    async fn create_task(&self, data: &CreateTaskData) -> Result<Task, ApiError> {
        let body = serde_json::to_value(data)
            .map_err(|err| ApiError::Network(err.to_string()))?;
        self.client.post(TASKS_PATH, Some(body)).await
    }

    async fn update_task(&self, id: &str, data: &UpdateTaskData) -> Result<Task, ApiError> {
        let body = serde_json::to_value(data)
            .map_err(|err| ApiError::Network(err.to_string()))?;
        self.client.put(&format!("{TASKS_PATH}/{id}"), body).await
    }

    async fn delete_task(&self, id: &str) -> Result<(), ApiError> {
        self.client
            .delete::<Value>(&format!("{TASKS_PATH}/{id}"))
            .await
            .map(|_| ())
    }

    async fn toggle_completion(&self, id: &str, completed: bool) -> Result<Task, ApiError> {
        self.client
            .patch(
                &format!("{TASKS_PATH}/{id}/complete"),
                serde_json::json!({ "completed": completed }),
            )
            .await
    }
}
