#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User edited the URL input box.
    InputChanged(String),
    /// User submitted the current input for generation.
    SubmitClicked,
    /// The generation service answered with a hosted image.
    GenerationSucceeded {
        request_id: crate::RequestId,
        message: String,
        image_url: String,
    },
    /// The generation request failed (transport, status, or body shape).
    GenerationFailed { request_id: crate::RequestId },
    /// User asked to save the current QR image to disk.
    DownloadClicked,
    /// Fallback for placeholder wiring.
    NoOp,
}
