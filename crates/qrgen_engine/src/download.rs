use std::path::Path;

use thiserror::Error;

use crate::client::{build_client, map_reqwest_error, RequestSettings};
use crate::persist::{AtomicFileWriter, PersistError};
use crate::{DownloadOutcome, FailureKind, ServiceError};

/// Suggested filename for every saved QR image.
pub const DOWNLOAD_FILENAME: &str = "qr-code.png";

#[derive(Debug, Error)]
pub enum DownloadError {
    #[error("{0}")]
    Fetch(ServiceError),
    #[error("write failed: {0}")]
    Persist(#[from] PersistError),
}

#[async_trait::async_trait]
pub trait Downloader: Send + Sync {
    /// Fetches `url` and saves the body under [`DOWNLOAD_FILENAME`] in
    /// `dest_dir`, replacing any previous file.
    async fn download(&self, url: &str, dest_dir: &Path)
        -> Result<DownloadOutcome, DownloadError>;
}

#[derive(Debug, Clone)]
pub struct HttpDownloader {
    client: reqwest::Client,
}

impl HttpDownloader {
    pub fn new(settings: RequestSettings) -> Result<Self, ServiceError> {
        Ok(Self {
            client: build_client(&settings)?,
        })
    }
}

#[async_trait::async_trait]
impl Downloader for HttpDownloader {
    async fn download(
        &self,
        url: &str,
        dest_dir: &Path,
    ) -> Result<DownloadOutcome, DownloadError> {
        let parsed = reqwest::Url::parse(url).map_err(|err| {
            DownloadError::Fetch(ServiceError::new(FailureKind::InvalidUrl, err.to_string()))
        })?;

        let response = self
            .client
            .get(parsed)
            .send()
            .await
            .map_err(|err| DownloadError::Fetch(map_reqwest_error(err)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(DownloadError::Fetch(ServiceError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            )));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|err| DownloadError::Fetch(map_reqwest_error(err)))?;

        let writer = AtomicFileWriter::new(dest_dir.to_path_buf());
        let path = writer.write(DOWNLOAD_FILENAME, &bytes)?;

        Ok(DownloadOutcome {
            path,
            byte_len: bytes.len() as u64,
        })
    }
}
