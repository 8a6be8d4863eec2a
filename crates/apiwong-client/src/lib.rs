pub mod api;
pub mod client;
pub mod config;
pub mod envelope;
pub mod error;
pub mod types;

pub use client::{ApiwongClient, RequestOptions};
pub use config::Config;
pub use envelope::Envelope;
pub use error::{ApiwongError, Result};
pub use types::*;
