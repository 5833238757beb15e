use std::io::{self, BufRead, Write};
use std::process::ExitCode;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use client_logging::{client_error, client_info};
use qrgen_core::{update, AppState, Msg};

use super::config;
use super::effects::EffectRunner;
use super::logging::{self, LogDestination};
use super::ui::input::{interpret_line, LineAction};
use super::ui::render;

pub fn run_app() -> ExitCode {
    logging::initialize(LogDestination::File);

    let config = config::engine_config();
    client_info!("using generation service at {}", config.base_url);

    let (msg_tx, msg_rx) = mpsc::channel::<Msg>();
    let runner = match EffectRunner::new(config, msg_tx) {
        Ok(runner) => runner,
        Err(err) => {
            client_error!("engine startup failed: {}", err);
            eprintln!("qrgen: {err}");
            return ExitCode::FAILURE;
        }
    };

    let line_rx = spawn_stdin_reader();

    let mut state = AppState::new();
    draw(&state);

    loop {
        // Drain engine completions first so a resolved request is visible
        // before the next line of input is interpreted.
        while let Ok(msg) = msg_rx.try_recv() {
            state = dispatch(state, msg, &runner);
        }

        match line_rx.recv_timeout(Duration::from_millis(75)) {
            Ok(line) => match interpret_line(&line) {
                LineAction::Quit => break,
                LineAction::Redraw => draw(&state),
                LineAction::Dispatch(msgs) => {
                    for msg in msgs {
                        // The submit control is disabled while a request is
                        // in flight; the typed text is still bound.
                        if matches!(msg, Msg::SubmitClicked) && !state.view().submit_enabled() {
                            println!("A request is already in flight.");
                            continue;
                        }
                        state = dispatch(state, msg, &runner);
                    }
                }
            },
            Err(mpsc::RecvTimeoutError::Timeout) => {}
            Err(mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    ExitCode::SUCCESS
}

/// Applies one message, hands any effects to the runner, and redraws when
/// the state reports a visible change.
fn dispatch(state: AppState, msg: Msg, runner: &EffectRunner) -> AppState {
    let (mut state, effects) = update(state, msg);
    runner.run(effects);
    if state.consume_dirty() {
        draw(&state);
    }
    state
}

fn spawn_stdin_reader() -> mpsc::Receiver<String> {
    let (line_tx, line_rx) = mpsc::channel::<String>();
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            match line {
                Ok(line) => {
                    if line_tx.send(line).is_err() {
                        break;
                    }
                }
                Err(_) => break,
            }
        }
    });
    line_rx
}

fn draw(state: &AppState) {
    let view = state.view();
    for line in render::render(&view) {
        println!("{line}");
    }
    print!("{}", render::prompt(&view));
    let _ = io::stdout().flush();
}
