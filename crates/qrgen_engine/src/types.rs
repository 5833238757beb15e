use std::fmt;
use std::path::PathBuf;

use crate::download::DownloadError;

pub type RequestId = u64;

/// Parsed payload of a successful generation response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationOutput {
    pub message: String,
    pub image_url: String,
}

/// Where a saved QR image landed on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadOutcome {
    pub path: PathBuf,
    pub byte_len: u64,
}

#[derive(Debug)]
pub enum EngineEvent {
    GenerationFinished {
        request_id: RequestId,
        result: Result<GenerationOutput, ServiceError>,
    },
    DownloadFinished {
        url: String,
        result: Result<DownloadOutcome, DownloadError>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceError {
    pub kind: FailureKind,
    pub message: String,
}

impl ServiceError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for ServiceError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    InvalidUrl,
    Transport,
    Timeout,
    HttpStatus(u16),
    MalformedResponse,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidUrl => write!(f, "invalid url"),
            FailureKind::Transport => write!(f, "transport error"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::MalformedResponse => write!(f, "malformed response"),
        }
    }
}
