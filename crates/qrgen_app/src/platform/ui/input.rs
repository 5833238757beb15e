use qrgen_core::Msg;

/// What the event loop should do with one line of terminal input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineAction {
    Dispatch(Vec<Msg>),
    Redraw,
    Quit,
}

/// Maps one line of input to messages.
///
/// Bare text is treated as the URL field contents followed by a submit, so
/// the line is forwarded verbatim, surrounding whitespace included.
pub fn interpret_line(line: &str) -> LineAction {
    match line {
        "quit" | "exit" | "q" => LineAction::Quit,
        "download" | "d" => LineAction::Dispatch(vec![Msg::DownloadClicked]),
        "" => LineAction::Redraw,
        _ => LineAction::Dispatch(vec![
            Msg::InputChanged(line.to_string()),
            Msg::SubmitClicked,
        ]),
    }
}
