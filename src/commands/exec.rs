//! `garden exec` - run one console command headlessly.

use anyhow::Result;

use garden::terminal::{Interpreter, LineKind, TerminalSession};
use garden::tui::current_theme;
use garden::Config;

/// Execute a single command and print the transcript.
///
/// Uses only the interpreter: no achievement state is touched, so this
/// stays safe for scripts and shell pipelines.
pub fn handle_exec(command: &str) -> Result<()> {
    let config = Config::load()?;
    let interpreter = Interpreter::new(config.profile);
    let mut session = TerminalSession::new();
    session.open();

    interpreter.execute(&mut session, command);

    let theme = current_theme();
    for line in session.lines() {
        match line.kind {
            LineKind::Command => println!("{}", theme.accent_text(&line.to_string())),
            LineKind::Response => println!("{}", theme.primary_text(&line.text)),
            LineKind::Notice => println!("{}", theme.success_text(&line.text)),
        }
    }
    Ok(())
}
