use std::sync::mpsc;
use std::thread;

use client_logging::{client_info, client_warn};
use qrgen_core::{Effect, Msg};
use qrgen_engine::{EngineConfig, EngineEvent, EngineHandle, ServiceError};

/// Executes core effects against the engine and feeds completions back into
/// the message loop.
pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(config: EngineConfig, msg_tx: mpsc::Sender<Msg>) -> Result<Self, ServiceError> {
        let (engine, events) = EngineHandle::new(config)?;
        spawn_event_bridge(events, msg_tx);
        Ok(Self { engine })
    }

    pub fn run(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::SubmitGeneration { request_id, url } => {
                    client_info!("SubmitGeneration request_id={} url={}", request_id, url);
                    self.engine.generate(request_id, url);
                }
                Effect::TriggerDownload { url } => {
                    client_info!("TriggerDownload url={}", url);
                    self.engine.download(url);
                }
            }
        }
    }
}

fn spawn_event_bridge(events: mpsc::Receiver<EngineEvent>, msg_tx: mpsc::Sender<Msg>) {
    thread::spawn(move || {
        while let Ok(event) = events.recv() {
            match event {
                EngineEvent::GenerationFinished { request_id, result } => {
                    let msg = match result {
                        Ok(output) => Msg::GenerationSucceeded {
                            request_id,
                            message: output.message,
                            image_url: output.image_url,
                        },
                        Err(err) => {
                            client_warn!("generation request {} failed: {}", request_id, err);
                            Msg::GenerationFailed { request_id }
                        }
                    };
                    if msg_tx.send(msg).is_err() {
                        break;
                    }
                }
                // Downloads never touch the workflow state; success and
                // failure both end at the log.
                EngineEvent::DownloadFinished { url, result } => match result {
                    Ok(outcome) => client_info!(
                        "saved {} ({} bytes) from {}",
                        outcome.path.display(),
                        outcome.byte_len,
                        url
                    ),
                    Err(err) => client_warn!("download of {} failed: {}", url, err),
                },
            }
        }
    });
}
