//! Qrgen engine: HTTP effect execution for the generation workflow.
mod client;
mod download;
mod engine;
mod persist;
mod types;

pub use client::{GenerationClient, HttpGenerationClient, RequestSettings};
pub use download::{DownloadError, Downloader, HttpDownloader, DOWNLOAD_FILENAME};
pub use engine::{EngineConfig, EngineHandle};
pub use persist::{ensure_download_dir, AtomicFileWriter, PersistError};
pub use types::{
    DownloadOutcome, EngineEvent, FailureKind, GenerationOutput, RequestId, ServiceError,
};
