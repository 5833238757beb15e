//! Qrgen core: pure workflow state machine and view-model helpers.
mod effect;
mod link;
mod msg;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use link::derive_download_url;
pub use msg::Msg;
pub use state::{AppState, RequestId, WorkflowState};
pub use update::update;
pub use view_model::AppViewModel;
