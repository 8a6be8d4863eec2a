//! Typed wrappers over the apiwong HTTP API, grouped by handler.

pub mod auth;
pub mod connections;
pub mod database;
pub mod sync;

use crate::error::{ApiwongError, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

pub(crate) fn decode<T: DeserializeOwned>(value: Value) -> Result<T> {
    serde_json::from_value(value).map_err(|e| ApiwongError::Parse(e.to_string()))
}

pub(crate) fn to_body<T: Serialize>(body: &T) -> Result<Value> {
    serde_json::to_value(body).map_err(|e| ApiwongError::Parse(e.to_string()))
}
