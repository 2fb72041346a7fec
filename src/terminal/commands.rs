//! Console command table and interpreter.
//!
//! Commands are an ordered table of name → handler entries; matching is a
//! case-insensitive exact match on the trimmed input. Adding a command is
//! one new table row.

use chrono::Local;

use super::TerminalSession;
use crate::config::Profile;

/// What a command handler asks the session to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandEffect {
    /// Append this response line
    Respond(String),
    /// Drop all accumulated lines, respond with nothing
    Clear,
    /// Close the console, respond with nothing
    Exit,
}

/// Handler inputs: the configured profile texts and the prebuilt help text.
struct CommandContext<'a> {
    profile: &'a Profile,
    help: &'a str,
}

struct Builtin {
    name: &'static str,
    summary: &'static str,
    run: fn(&CommandContext) -> CommandEffect,
}

fn cmd_help(ctx: &CommandContext) -> CommandEffect {
    CommandEffect::Respond(ctx.help.to_string())
}

fn cmd_about(ctx: &CommandContext) -> CommandEffect {
    CommandEffect::Respond(ctx.profile.about.clone())
}

fn cmd_skills(ctx: &CommandContext) -> CommandEffect {
    CommandEffect::Respond(ctx.profile.skills.clone())
}

fn cmd_projects(ctx: &CommandContext) -> CommandEffect {
    CommandEffect::Respond(ctx.profile.projects.clone())
}

fn cmd_clear(_ctx: &CommandContext) -> CommandEffect {
    CommandEffect::Clear
}

fn cmd_date(_ctx: &CommandContext) -> CommandEffect {
    CommandEffect::Respond(Local::now().format("%Y-%m-%d %H:%M:%S").to_string())
}

fn cmd_whoami(ctx: &CommandContext) -> CommandEffect {
    CommandEffect::Respond(ctx.profile.whoami.clone())
}

fn cmd_ls(ctx: &CommandContext) -> CommandEffect {
    CommandEffect::Respond(ctx.profile.listing.clone())
}

fn cmd_pwd(ctx: &CommandContext) -> CommandEffect {
    CommandEffect::Respond(ctx.profile.working_dir.clone())
}

fn cmd_exit(_ctx: &CommandContext) -> CommandEffect {
    CommandEffect::Exit
}

const BUILTINS: &[Builtin] = &[
    Builtin { name: "help", summary: "Show this help", run: cmd_help },
    Builtin { name: "about", summary: "About the developer", run: cmd_about },
    Builtin { name: "skills", summary: "Show skills", run: cmd_skills },
    Builtin { name: "projects", summary: "List projects", run: cmd_projects },
    Builtin { name: "clear", summary: "Clear terminal", run: cmd_clear },
    Builtin { name: "date", summary: "Current date", run: cmd_date },
    Builtin { name: "whoami", summary: "User info", run: cmd_whoami },
    Builtin { name: "ls", summary: "List files", run: cmd_ls },
    Builtin { name: "pwd", summary: "Print working directory", run: cmd_pwd },
    Builtin { name: "exit", summary: "Close terminal", run: cmd_exit },
];

/// Maps one line of input to its effect on a [`TerminalSession`].
pub struct Interpreter {
    profile: Profile,
    help_text: String,
}

impl Interpreter {
    pub fn new(profile: Profile) -> Self {
        Self {
            profile,
            help_text: render_help(),
        }
    }

    /// Number of commands in the table.
    pub fn command_count() -> usize {
        BUILTINS.len()
    }

    /// All command names in table order.
    pub fn command_names() -> impl Iterator<Item = &'static str> {
        BUILTINS.iter().map(|builtin| builtin.name)
    }

    /// Execute one line of input against the session.
    ///
    /// Appends the command echo and, for everything but `clear`/`exit`,
    /// a response line. Blank input appends nothing. Returns the matched
    /// command name, or `None` for blank and unrecognized input.
    pub fn execute(&self, session: &mut TerminalSession, input: &str) -> Option<&'static str> {
        let input = input.trim();
        if input.is_empty() {
            return None;
        }
        session.push_command(input);

        let lookup = input.to_lowercase();
        let Some(builtin) = BUILTINS.iter().find(|builtin| builtin.name == lookup) else {
            session.push_response(format!(
                "Command not found: {input}. Type 'help' for available commands."
            ));
            return None;
        };

        let ctx = CommandContext {
            profile: &self.profile,
            help: &self.help_text,
        };
        match (builtin.run)(&ctx) {
            CommandEffect::Respond(text) => session.push_response(text),
            CommandEffect::Clear => session.clear(),
            CommandEffect::Exit => session.close(),
        }
        Some(builtin.name)
    }
}

fn render_help() -> String {
    let mut help = String::from("Available commands:");
    for builtin in BUILTINS {
        help.push('\n');
        help.push_str(builtin.name);
        help.push_str(" - ");
        help.push_str(builtin.summary);
    }
    help
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::terminal::LineKind;

    fn interpreter() -> Interpreter {
        Interpreter::new(Profile::default())
    }

    fn last_response(session: &TerminalSession) -> &str {
        &session.lines().last().expect("no lines").text
    }

    #[test]
    fn matching_is_case_insensitive() {
        let interp = interpreter();
        let mut upper = TerminalSession::new();
        let mut lower = TerminalSession::new();
        interp.execute(&mut upper, "HELP");
        interp.execute(&mut lower, "help");
        assert_eq!(last_response(&upper), last_response(&lower));
    }

    #[test]
    fn every_command_appends_echo_then_response() {
        let interp = interpreter();
        let mut session = TerminalSession::new();
        interp.execute(&mut session, "about");
        assert_eq!(session.lines().len(), 2);
        assert_eq!(session.lines()[0].kind, LineKind::Command);
        assert_eq!(session.lines()[0].to_string(), "$ about");
        assert_eq!(session.lines()[1].kind, LineKind::Response);
    }

    #[test]
    fn unknown_command_reports_not_found() {
        let interp = interpreter();
        let mut session = TerminalSession::new();
        assert_eq!(interp.execute(&mut session, "foobar"), None);
        assert_eq!(
            last_response(&session),
            "Command not found: foobar. Type 'help' for available commands."
        );
    }

    #[test]
    fn clear_empties_session_and_appends_nothing() {
        let interp = interpreter();
        let mut session = TerminalSession::new();
        interp.execute(&mut session, "ls");
        interp.execute(&mut session, "pwd");
        assert_eq!(interp.execute(&mut session, "clear"), Some("clear"));
        assert!(session.lines().is_empty());
    }

    #[test]
    fn exit_closes_session_and_appends_no_response() {
        let interp = interpreter();
        let mut session = TerminalSession::new();
        session.open();
        interp.execute(&mut session, "exit");
        assert!(!session.is_open());
        // Only the echo remains
        assert_eq!(session.lines().len(), 1);
        assert_eq!(session.lines()[0].kind, LineKind::Command);
    }

    #[test]
    fn blank_input_appends_nothing() {
        let interp = interpreter();
        let mut session = TerminalSession::new();
        assert_eq!(interp.execute(&mut session, "   "), None);
        assert!(session.lines().is_empty());
    }

    #[test]
    fn date_returns_a_timestamp() {
        let interp = interpreter();
        let mut session = TerminalSession::new();
        interp.execute(&mut session, "date");
        let response = last_response(&session);
        // e.g. "2026-08-07 14:03:59"
        assert_eq!(response.len(), 19);
        assert_eq!(&response[4..5], "-");
    }

    #[test]
    fn help_lists_every_command() {
        let interp = interpreter();
        let mut session = TerminalSession::new();
        interp.execute(&mut session, "help");
        let help = last_response(&session).to_string();
        assert!(help.starts_with("Available commands:"));
        for name in Interpreter::command_names() {
            assert!(help.contains(name), "help is missing {name}");
        }
    }

    #[test]
    fn input_is_trimmed_before_matching() {
        let interp = interpreter();
        let mut session = TerminalSession::new();
        assert_eq!(interp.execute(&mut session, "  pwd  "), Some("pwd"));
        assert_eq!(session.lines()[0].to_string(), "$ pwd");
    }
}
