use crate::api::{decode, to_body};
use crate::client::{ApiwongClient, RequestOptions};
use crate::error::Result;
use crate::types::{ExecResult, Page, QueryRequest, Row};
use reqwest::Method;
use serde_json::{json, Value};

impl ApiwongClient {
    /// Run a read query against a named connection, paginated server-side.
    pub async fn query(&self, db: &str, req: &QueryRequest) -> Result<Page<Row>> {
        let value = self
            .request(
                &format!("/api/db/{db}/query"),
                RequestOptions::default()
                    .method(Method::POST)
                    .body(to_body(req)?),
            )
            .await?;
        decode(value)
    }

    /// Run a write statement; returns the affected row count.
    pub async fn exec(&self, db: &str, sql: &str, params: Vec<Value>) -> Result<ExecResult> {
        let value = self
            .request(
                &format!("/api/db/{db}/exec"),
                RequestOptions::default()
                    .method(Method::POST)
                    .body(json!({ "sql": sql, "params": params })),
            )
            .await?;
        decode(value)
    }

    /// Insert one row into a table.
    pub async fn insert_data(&self, db: &str, table: &str, data: &Row) -> Result<()> {
        self.request(
            &format!("/api/db/{db}/tables/{table}/data"),
            RequestOptions::default()
                .method(Method::POST)
                .body(json!({ "data": data })),
        )
        .await?;
        Ok(())
    }

    /// Update the row whose `id` column matches `id`.
    pub async fn update_data(
        &self,
        db: &str,
        table: &str,
        id: impl std::fmt::Display,
        data: &Row,
    ) -> Result<()> {
        self.request(
            &format!("/api/db/{db}/tables/{table}/data/{id}"),
            RequestOptions::default()
                .method(Method::PUT)
                .body(json!({ "data": data })),
        )
        .await?;
        Ok(())
    }

    /// Delete the row whose `id` column matches `id`.
    pub async fn delete_data(
        &self,
        db: &str,
        table: &str,
        id: impl std::fmt::Display,
    ) -> Result<()> {
        self.request(
            &format!("/api/db/{db}/tables/{table}/data/{id}"),
            RequestOptions::default().method(Method::DELETE),
        )
        .await?;
        Ok(())
    }

    pub async fn list_tables(&self, db: &str) -> Result<Vec<String>> {
        let value = self
            .request(&format!("/api/db/{db}/tables"), RequestOptions::default())
            .await?;
        decode(value)
    }

    /// Column metadata for a table. The shape depends on the backing engine,
    /// so the raw value is returned.
    pub async fn table_schema(&self, db: &str, table: &str) -> Result<Value> {
        self.request(
            &format!("/api/db/{db}/tables/{table}/schema"),
            RequestOptions::default(),
        )
        .await
    }
}
