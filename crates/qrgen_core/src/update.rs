use crate::{derive_download_url, AppState, Effect, Msg, WorkflowState};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::InputChanged(input) => {
            state.set_input(input);
            Vec::new()
        }
        Msg::SubmitClicked => {
            // The input is forwarded verbatim; the engine encodes it as a
            // query parameter, so no trimming or validation happens here.
            let (request_id, url) = state.begin_submission();
            vec![Effect::SubmitGeneration { request_id, url }]
        }
        Msg::GenerationSucceeded {
            request_id: _,
            message,
            image_url,
        } => {
            // Completions are applied regardless of which request they
            // answer: with no cancellation in the engine, the last response
            // to resolve wins.
            state.apply_success(message, image_url);
            Vec::new()
        }
        Msg::GenerationFailed { request_id: _ } => {
            state.apply_failure();
            Vec::new()
        }
        Msg::DownloadClicked => match state.workflow() {
            WorkflowState::Succeeded { image_url, .. } => {
                vec![Effect::TriggerDownload {
                    url: derive_download_url(image_url),
                }]
            }
            _ => Vec::new(),
        },
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
