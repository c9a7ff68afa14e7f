use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("usage error: {0}")]
    UsageError(#[from] UsageError),
    #[error("fetch error: {0}")]
    FetchError(#[from] FetchError),
    #[error("schema error: {0}")]
    SchemaError(#[from] SchemaError),
    #[error("export error: {0}")]
    ExportError(#[from] ExportError),
}

#[derive(Error, Debug)]
pub enum UsageError {
    #[error("empty API key")]
    EmptyKey,
    #[error("{0}")]
    Clap(#[from] clap::Error),
}

/// Failure below HTTP: DNS, refused connection, reset, TLS.
#[derive(Error, Debug)]
#[error("{reason}")]
pub struct TransportError {
    pub reason: String,
}

impl TransportError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl From<reqwest::Error> for TransportError {
    fn from(error: reqwest::Error) -> Self {
        // reqwest's Display stops at the outermost layer; the useful part
        // ("Connection refused", "failed to lookup address") is in the chain.
        let mut reason = error.to_string();
        let mut source = std::error::Error::source(&error);
        while let Some(cause) = source {
            reason.push_str(": ");
            reason.push_str(&cause.to_string());
            source = cause.source();
        }
        Self { reason }
    }
}

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("connection error: {0}")]
    Transport(#[from] TransportError),
    #[error("http error: {} {}", .status.as_u16(), .reason)]
    Provider {
        status: http::StatusCode,
        reason: String,
        body: Option<String>,
    },
    #[error("io error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("serde json error: {0}")]
    SerdeJsonError(#[from] serde_json::Error),
}

#[derive(Error, Debug)]
pub enum SchemaError {
    #[error("'voices' key not in response")]
    MissingVoices { raw: serde_json::Value },
}

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("'voices' is not a sequence")]
    VoicesNotSequence,
    #[error("io error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("serde json error: {0}")]
    SerdeJsonError(#[from] serde_json::Error),
    #[error("csv error: {0}")]
    CsvError(#[from] csv::Error),
}
