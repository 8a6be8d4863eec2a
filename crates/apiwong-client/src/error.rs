use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiwongError {
    #[error("configuration error: {0}")]
    Config(String),
    #[error("http {status}: {message}")]
    Transport { status: u16, message: String },
    #[error("api error {code}: {message}")]
    Api { code: i64, message: String },
    #[error("http error: {0}")]
    Http(String),
    #[error("parse error: {0}")]
    Parse(String),
}

impl From<reqwest::Error> for ApiwongError {
    fn from(err: reqwest::Error) -> Self {
        ApiwongError::Http(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ApiwongError>;
