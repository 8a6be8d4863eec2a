use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// One page of a paginated listing.
#[derive(Debug, Clone, Deserialize)]
pub struct Page<T> {
    pub data: Vec<T>,
    pub total: i64,
    pub page: i64,
    pub page_size: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user_id: u64,
    pub username: String,
    pub role: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
    pub email: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RegisteredUser {
    pub user_id: u64,
    pub username: String,
}

/// A user account. Password hashes are never serialized by the server.
#[derive(Debug, Clone, Deserialize)]
pub struct User {
    pub id: u64,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    pub username: String,
    pub email: Option<String>,
    pub role: String,
    pub status: Option<i64>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateProfileRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

/// A stored database connection. The server omits the password field.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConnection {
    pub id: u64,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub host: String,
    pub port: i64,
    pub database: String,
    pub username: String,
    pub charset: Option<String>,
    pub max_idle: Option<i64>,
    pub max_open: Option<i64>,
    pub status: i64,
    pub user_id: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct CreateConnectionRequest {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub host: String,
    pub port: i64,
    pub database: String,
    pub username: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub charset: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_idle: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_open: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<i64>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateConnectionRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub charset: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_idle: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_open: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<i64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SyncType {
    Full,
    Incremental,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SyncTask {
    pub id: u64,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    pub name: String,
    pub source_db: String,
    pub source_table: String,
    pub target_db: String,
    pub target_table: String,
    pub field_mapping: Option<HashMap<String, String>>,
    pub sync_type: SyncType,
    pub incremental_key: Option<String>,
    pub cron_expression: Option<String>,
    pub status: i64,
    pub last_run_at: Option<String>,
    pub last_run_status: Option<String>,
    pub last_run_message: Option<String>,
    pub user_id: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct CreateTaskRequest {
    pub name: String,
    pub source_db: String,
    pub source_table: String,
    pub target_db: String,
    pub target_table: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field_mapping: Option<HashMap<String, String>>,
    pub sync_type: SyncType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub incremental_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cron_expression: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateTaskRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_db: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_table: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_db: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_table: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field_mapping: Option<HashMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sync_type: Option<SyncType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub incremental_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cron_expression: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<i64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SyncLog {
    pub id: u64,
    pub created_at: Option<String>,
    pub task_id: u64,
    pub status: String,
    pub message: Option<String>,
    pub rows_affected: i64,
    /// Execution time in milliseconds.
    pub duration: i64,
    pub error_detail: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct QueryRequest {
    pub sql: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub params: Vec<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<i64>,
}

impl QueryRequest {
    pub fn new(sql: impl Into<String>) -> Self {
        Self {
            sql: sql.into(),
            params: Vec::new(),
            page: None,
            page_size: None,
        }
    }

    pub fn param(mut self, value: impl Into<Value>) -> Self {
        self.params.push(value.into());
        self
    }

    pub fn page(mut self, page: i64, page_size: i64) -> Self {
        self.page = Some(page);
        self.page_size = Some(page_size);
        self
    }
}

/// One row of a query result, keyed by column name.
pub type Row = HashMap<String, Value>;

#[derive(Debug, Clone, Deserialize)]
pub struct ExecResult {
    pub rows_affected: i64,
}
