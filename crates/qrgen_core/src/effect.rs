#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Issue one generation request for `url` to the remote service.
    SubmitGeneration {
        request_id: crate::RequestId,
        url: String,
    },
    /// Save the image behind `url` to disk as an attachment.
    TriggerDownload { url: String },
}
