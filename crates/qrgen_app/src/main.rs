use std::process::ExitCode;

mod platform;

fn main() -> ExitCode {
    platform::run_app()
}
