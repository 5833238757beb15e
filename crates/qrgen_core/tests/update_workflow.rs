use std::sync::Once;

use qrgen_core::{update, AppState, Effect, Msg, WorkflowState};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(client_logging::initialize_for_tests);
}

fn submit(state: AppState, input: &str) -> (AppState, Vec<Effect>) {
    let (state, _) = update(state, Msg::InputChanged(input.to_string()));
    update(state, Msg::SubmitClicked)
}

fn resolve_ok(
    state: AppState,
    request_id: u64,
    message: &str,
    image_url: &str,
) -> (AppState, Vec<Effect>) {
    update(
        state,
        Msg::GenerationSucceeded {
            request_id,
            message: message.to_string(),
            image_url: image_url.to_string(),
        },
    )
}

#[test]
fn submit_issues_one_request_with_verbatim_input() {
    init_logging();
    // Leading/trailing whitespace must survive: the field value is passed
    // through untouched and the engine handles encoding.
    let input = "  https://example.com ";

    let (next, effects) = submit(AppState::new(), input);

    assert_eq!(
        effects,
        vec![Effect::SubmitGeneration {
            request_id: 1,
            url: input.to_string(),
        }]
    );
    let view = next.view();
    assert_eq!(
        view.workflow,
        WorkflowState::Submitting {
            input_url: input.to_string(),
        }
    );
    assert_eq!(view.input_url, input);
    assert!(view.dirty);
    assert!(!view.submit_enabled());
}

#[test]
fn empty_input_is_submitted_unchanged() {
    init_logging();
    let (next, effects) = update(AppState::new(), Msg::SubmitClicked);

    assert_eq!(
        effects,
        vec![Effect::SubmitGeneration {
            request_id: 1,
            url: String::new(),
        }]
    );
    assert_eq!(
        next.view().workflow,
        WorkflowState::Submitting {
            input_url: String::new(),
        }
    );
}

#[test]
fn success_carries_message_and_image_url() {
    init_logging();
    let (state, _) = submit(AppState::new(), "https://example.com");
    let (next, effects) = resolve_ok(state, 1, "ok", "https://cdn.example.com/upload/x.png");

    assert!(effects.is_empty());
    assert_eq!(
        next.view().workflow,
        WorkflowState::Succeeded {
            message: "ok".to_string(),
            image_url: "https://cdn.example.com/upload/x.png".to_string(),
        }
    );
    // The input box keeps its value after the request settles.
    assert_eq!(next.view().input_url, "https://example.com");
}

#[test]
fn failure_collapses_to_failed_without_payload() {
    init_logging();
    let (state, _) = submit(AppState::new(), "https://example.com");
    let (next, effects) = update(state, Msg::GenerationFailed { request_id: 1 });

    assert!(effects.is_empty());
    assert_eq!(next.view().workflow, WorkflowState::Failed);
    assert!(next.view().submit_enabled());
}

#[test]
fn resubmission_replaces_previous_result() {
    init_logging();
    let (state, _) = submit(AppState::new(), "https://a.example.com");
    let (state, _) = resolve_ok(state, 1, "ok", "https://cdn.example.com/upload/a.png");

    let (state, effects) = submit(state, "https://b.example.com");
    assert_eq!(
        effects,
        vec![Effect::SubmitGeneration {
            request_id: 2,
            url: "https://b.example.com".to_string(),
        }]
    );
    // Submitting clears the earlier success wholesale, so a later failure
    // can never surface a stale image.
    assert_eq!(
        state.view().workflow,
        WorkflowState::Submitting {
            input_url: "https://b.example.com".to_string(),
        }
    );

    let (state, _) = update(state, Msg::GenerationFailed { request_id: 2 });
    assert_eq!(state.view().workflow, WorkflowState::Failed);
}

#[test]
fn submit_while_submitting_issues_a_fresh_request() {
    init_logging();
    let (state, _) = submit(AppState::new(), "https://a.example.com");
    let (state, effects) = submit(state, "https://b.example.com");

    // No cancellation: the first request keeps running and a second one is
    // issued with the next id.
    assert_eq!(
        effects,
        vec![Effect::SubmitGeneration {
            request_id: 2,
            url: "https://b.example.com".to_string(),
        }]
    );
    assert_eq!(
        state.view().workflow,
        WorkflowState::Submitting {
            input_url: "https://b.example.com".to_string(),
        }
    );
}

#[test]
fn last_resolved_response_wins() {
    init_logging();
    // Submit A then B; B resolves first, then A. The displayed result is
    // A's: last-resolved wins, not last-issued. Undesirable but it matches
    // the engine's lack of request cancellation.
    let (state, _) = submit(AppState::new(), "https://a.example.com");
    let (state, _) = submit(state, "https://b.example.com");

    let (state, _) = resolve_ok(state, 2, "b done", "https://cdn.example.com/upload/b.png");
    let (state, _) = resolve_ok(state, 1, "a done", "https://cdn.example.com/upload/a.png");

    assert_eq!(
        state.view().workflow,
        WorkflowState::Succeeded {
            message: "a done".to_string(),
            image_url: "https://cdn.example.com/upload/a.png".to_string(),
        }
    );
}

#[test]
fn download_click_emits_derived_url_without_state_change() {
    init_logging();
    let (state, _) = submit(AppState::new(), "https://example.com");
    let (mut state, _) = resolve_ok(state, 1, "ok", "https://cdn.example.com/upload/x.png");
    assert!(state.consume_dirty());
    let before = state.view();

    let (mut next, effects) = update(state, Msg::DownloadClicked);

    assert_eq!(
        effects,
        vec![Effect::TriggerDownload {
            url: "https://cdn.example.com/upload/fl_attachment/x.png".to_string(),
        }]
    );
    assert_eq!(next.view(), before);
    assert!(!next.consume_dirty());
}

#[test]
fn download_click_is_ignored_unless_succeeded() {
    init_logging();
    let (idle, effects) = update(AppState::new(), Msg::DownloadClicked);
    assert!(effects.is_empty());
    assert_eq!(idle.view().workflow, WorkflowState::Idle);

    let (submitting, _) = submit(AppState::new(), "https://example.com");
    let (_, effects) = update(submitting, Msg::DownloadClicked);
    assert!(effects.is_empty());

    let (state, _) = submit(AppState::new(), "https://example.com");
    let (failed, _) = update(state, Msg::GenerationFailed { request_id: 1 });
    let (_, effects) = update(failed, Msg::DownloadClicked);
    assert!(effects.is_empty());
}

#[test]
fn input_changed_updates_view_and_marks_dirty() {
    init_logging();
    let (mut state, effects) = update(
        AppState::new(),
        Msg::InputChanged("https://example.com".to_string()),
    );

    assert!(effects.is_empty());
    assert_eq!(state.view().input_url, "https://example.com");
    assert!(state.consume_dirty());

    // Re-binding the same text is not a visible change.
    let (mut state, _) = update(state, Msg::InputChanged("https://example.com".to_string()));
    assert!(!state.consume_dirty());
}
