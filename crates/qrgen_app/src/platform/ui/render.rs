use qrgen_core::{AppViewModel, WorkflowState};
use qrgen_engine::DOWNLOAD_FILENAME;

/// Renders the current view as terminal lines, strictly as a function of
/// the view model.
pub fn render(view: &AppViewModel) -> Vec<String> {
    match &view.workflow {
        WorkflowState::Idle => vec!["Enter a URL to generate a QR code.".to_string()],
        WorkflowState::Submitting { input_url } => {
            vec![format!("Generating QR Code for {input_url}...")]
        }
        WorkflowState::Succeeded { message, image_url } => vec![
            message.clone(),
            format!("QR code: {image_url}"),
            format!("Type `download` to save it as {DOWNLOAD_FILENAME}."),
        ],
        // Failures are logged only; the page showed no error text either.
        WorkflowState::Failed => vec!["Enter a URL to generate a QR code.".to_string()],
    }
}

/// One-line prompt reflecting the bound input field.
pub fn prompt(view: &AppViewModel) -> String {
    if view.input_url.is_empty() {
        "> ".to_string()
    } else {
        format!("[{}] > ", view.input_url)
    }
}
