use crate::api::{decode, to_body};
use crate::client::{ApiwongClient, RequestOptions};
use crate::error::Result;
use crate::types::{CreateTaskRequest, Page, SyncLog, SyncTask, UpdateTaskRequest};
use reqwest::Method;

impl ApiwongClient {
    pub async fn create_task(&self, req: &CreateTaskRequest) -> Result<SyncTask> {
        let value = self
            .request(
                "/api/sync/tasks",
                RequestOptions::default()
                    .method(Method::POST)
                    .body(to_body(req)?),
            )
            .await?;
        decode(value)
    }

    pub async fn list_tasks(&self, page: i64, page_size: i64) -> Result<Page<SyncTask>> {
        let value = self
            .request(
                "/api/sync/tasks",
                RequestOptions::default()
                    .param("page", page)
                    .param("page_size", page_size),
            )
            .await?;
        decode(value)
    }

    pub async fn get_task(&self, id: u64) -> Result<SyncTask> {
        let value = self
            .request(&format!("/api/sync/tasks/{id}"), RequestOptions::default())
            .await?;
        decode(value)
    }

    pub async fn update_task(&self, id: u64, req: &UpdateTaskRequest) -> Result<()> {
        self.request(
            &format!("/api/sync/tasks/{id}"),
            RequestOptions::default()
                .method(Method::PUT)
                .body(to_body(req)?),
        )
        .await?;
        Ok(())
    }

    pub async fn delete_task(&self, id: u64) -> Result<()> {
        self.request(
            &format!("/api/sync/tasks/{id}"),
            RequestOptions::default().method(Method::DELETE),
        )
        .await?;
        Ok(())
    }

    /// Trigger a task run. The server executes asynchronously; success only
    /// means the run was accepted.
    pub async fn execute_task(&self, id: u64) -> Result<()> {
        self.request(
            &format!("/api/sync/tasks/{id}/execute"),
            RequestOptions::default().method(Method::POST),
        )
        .await?;
        Ok(())
    }

    pub async fn task_logs(&self, id: u64, page: i64, page_size: i64) -> Result<Page<SyncLog>> {
        let value = self
            .request(
                &format!("/api/sync/tasks/{id}/logs"),
                RequestOptions::default()
                    .param("page", page)
                    .param("page_size", page_size),
            )
            .await?;
        decode(value)
    }
}
