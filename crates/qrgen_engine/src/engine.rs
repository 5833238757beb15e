use std::path::{Path, PathBuf};
use std::sync::{mpsc, Arc};
use std::thread;

use client_logging::client_info;

use crate::client::{GenerationClient, HttpGenerationClient, RequestSettings};
use crate::download::{Downloader, HttpDownloader};
use crate::{EngineEvent, RequestId, ServiceError};

/// Engine construction parameters, resolved once at startup.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    pub base_url: String,
    pub request: RequestSettings,
    pub download_dir: PathBuf,
}

enum EngineCommand {
    Generate { request_id: RequestId, url: String },
    Download { url: String },
}

/// Command handle to the engine worker thread. Commands never block; each
/// one runs as its own task, so several requests may be in flight at once
/// and their completions arrive in resolution order.
#[derive(Clone)]
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
}

impl EngineHandle {
    /// Spawns the worker thread and returns the handle plus the event
    /// stream. Fails if the configured base URL does not parse.
    pub fn new(config: EngineConfig) -> Result<(Self, mpsc::Receiver<EngineEvent>), ServiceError> {
        let client = Arc::new(HttpGenerationClient::new(
            &config.base_url,
            config.request.clone(),
        )?);
        let downloader = Arc::new(HttpDownloader::new(config.request)?);
        let download_dir = config.download_dir;

        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();

        thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
            while let Ok(command) = cmd_rx.recv() {
                let client = client.clone();
                let downloader = downloader.clone();
                let event_tx = event_tx.clone();
                let download_dir = download_dir.clone();
                runtime.spawn(async move {
                    handle_command(
                        client.as_ref(),
                        downloader.as_ref(),
                        &download_dir,
                        command,
                        event_tx,
                    )
                    .await;
                });
            }
        });

        Ok((Self { cmd_tx }, event_rx))
    }

    pub fn generate(&self, request_id: RequestId, url: impl Into<String>) {
        let _ = self.cmd_tx.send(EngineCommand::Generate {
            request_id,
            url: url.into(),
        });
    }

    pub fn download(&self, url: impl Into<String>) {
        let _ = self.cmd_tx.send(EngineCommand::Download { url: url.into() });
    }
}

async fn handle_command(
    client: &dyn GenerationClient,
    downloader: &dyn Downloader,
    download_dir: &Path,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::Generate { request_id, url } => {
            client_info!("generation request {} for {}", request_id, url);
            let result = client.generate(request_id, &url).await;
            let _ = event_tx.send(EngineEvent::GenerationFinished { request_id, result });
        }
        EngineCommand::Download { url } => {
            client_info!("downloading {}", url);
            let result = downloader.download(&url, download_dir).await;
            let _ = event_tx.send(EngineEvent::DownloadFinished { url, result });
        }
    }
}
