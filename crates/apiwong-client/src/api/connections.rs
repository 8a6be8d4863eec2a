use crate::api::{decode, to_body};
use crate::client::{ApiwongClient, RequestOptions};
use crate::error::Result;
use crate::types::{CreateConnectionRequest, DatabaseConnection, Page, UpdateConnectionRequest};
use reqwest::Method;

impl ApiwongClient {
    /// Register a database connection. Enabled connections are test-connected
    /// by the server before being stored.
    pub async fn create_connection(
        &self,
        req: &CreateConnectionRequest,
    ) -> Result<DatabaseConnection> {
        let value = self
            .request(
                "/api/connections",
                RequestOptions::default()
                    .method(Method::POST)
                    .body(to_body(req)?),
            )
            .await?;
        decode(value)
    }

    pub async fn list_connections(
        &self,
        page: i64,
        page_size: i64,
    ) -> Result<Page<DatabaseConnection>> {
        let value = self
            .request(
                "/api/connections",
                RequestOptions::default()
                    .param("page", page)
                    .param("page_size", page_size),
            )
            .await?;
        decode(value)
    }

    pub async fn get_connection(&self, id: u64) -> Result<DatabaseConnection> {
        let value = self
            .request(&format!("/api/connections/{id}"), RequestOptions::default())
            .await?;
        decode(value)
    }

    pub async fn update_connection(&self, id: u64, req: &UpdateConnectionRequest) -> Result<()> {
        self.request(
            &format!("/api/connections/{id}"),
            RequestOptions::default()
                .method(Method::PUT)
                .body(to_body(req)?),
        )
        .await?;
        Ok(())
    }

    pub async fn delete_connection(&self, id: u64) -> Result<()> {
        self.request(
            &format!("/api/connections/{id}"),
            RequestOptions::default().method(Method::DELETE),
        )
        .await?;
        Ok(())
    }

    /// Probe connectivity of a stored connection.
    pub async fn test_connection(&self, id: u64) -> Result<()> {
        self.request(
            &format!("/api/connections/{id}/test"),
            RequestOptions::default().method(Method::POST),
        )
        .await?;
        Ok(())
    }
}
