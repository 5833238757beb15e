use crate::view_model::AppViewModel;

pub type RequestId = u64;

/// Lifecycle of the most recent generation request. This is the single
/// source of truth for what the front-end displays.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum WorkflowState {
    /// No request issued yet.
    #[default]
    Idle,
    /// A request is in flight; holds the value that was submitted.
    Submitting { input_url: String },
    /// The service answered with a status message and a hosted image URL.
    Succeeded { message: String, image_url: String },
    /// The last request failed. No payload; details go to the log only.
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    input_url: String,
    workflow: WorkflowState,
    next_request_id: RequestId,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel {
            input_url: self.input_url.clone(),
            workflow: self.workflow.clone(),
            dirty: self.dirty,
        }
    }

    pub fn workflow(&self) -> &WorkflowState {
        &self.workflow
    }

    /// The URL input box contents. Kept independently of the workflow state
    /// and never cleared by submission or completion.
    pub fn input_url(&self) -> &str {
        &self.input_url
    }

    /// Returns whether a re-render is due and resets the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn set_input(&mut self, input: String) {
        if self.input_url != input {
            self.input_url = input;
            self.dirty = true;
        }
    }

    /// Allocates a request id and moves the workflow to `Submitting`,
    /// replacing any previous result or failure wholesale.
    pub(crate) fn begin_submission(&mut self) -> (RequestId, String) {
        self.next_request_id += 1;
        self.workflow = WorkflowState::Submitting {
            input_url: self.input_url.clone(),
        };
        self.dirty = true;
        (self.next_request_id, self.input_url.clone())
    }

    pub(crate) fn apply_success(&mut self, message: String, image_url: String) {
        self.workflow = WorkflowState::Succeeded { message, image_url };
        self.dirty = true;
    }

    pub(crate) fn apply_failure(&mut self) {
        self.workflow = WorkflowState::Failed;
        self.dirty = true;
    }
}
