use crate::WorkflowState;

/// Snapshot handed to the presentation layer. Rendering is a pure function
/// of this value.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub input_url: String,
    pub workflow: WorkflowState,
    pub dirty: bool,
}

impl AppViewModel {
    /// The submit control is disabled while a request is outstanding.
    pub fn submit_enabled(&self) -> bool {
        !matches!(self.workflow, WorkflowState::Submitting { .. })
    }
}
