//! Tests for the console interpreter

use garden::config::Profile;
use garden::terminal::{Interpreter, TerminalSession};

fn transcript(session: &TerminalSession) -> String {
    session
        .lines()
        .iter()
        .map(|line| line.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn help_and_upper_case_help_are_identical() {
    let interpreter = Interpreter::new(Profile::default());
    let mut lower = TerminalSession::new();
    let mut upper = TerminalSession::new();
    interpreter.execute(&mut lower, "help");
    interpreter.execute(&mut upper, "HELP");
    assert_eq!(
        lower.lines().last().unwrap().text,
        upper.lines().last().unwrap().text
    );
}

#[test]
fn help_transcript_matches() {
    let interpreter = Interpreter::new(Profile::default());
    let mut session = TerminalSession::new();
    interpreter.execute(&mut session, "help");
    insta::assert_snapshot!(transcript(&session), @r"
    $ help
    Available commands:
    help - Show this help
    about - About the developer
    skills - Show skills
    projects - List projects
    clear - Clear terminal
    date - Current date
    whoami - User info
    ls - List files
    pwd - Print working directory
    exit - Close terminal
    ");
}

#[test]
fn unknown_command_response_is_exact() {
    let interpreter = Interpreter::new(Profile::default());
    let mut session = TerminalSession::new();
    interpreter.execute(&mut session, "foobar");
    assert_eq!(
        session.lines().last().unwrap().text,
        "Command not found: foobar. Type 'help' for available commands."
    );
}

#[test]
fn clear_wipes_a_busy_session() {
    let interpreter = Interpreter::new(Profile::default());
    let mut session = TerminalSession::new();
    for input in ["help", "about", "skills", "nonsense"] {
        interpreter.execute(&mut session, input);
    }
    assert!(!session.lines().is_empty());
    interpreter.execute(&mut session, "clear");
    assert!(session.lines().is_empty());
}

#[test]
fn session_flow_accumulates_until_exit() {
    let interpreter = Interpreter::new(Profile::default());
    let mut session = TerminalSession::new();
    session.open();

    interpreter.execute(&mut session, "whoami");
    interpreter.execute(&mut session, "pwd");
    assert_eq!(session.lines().len(), 4);
    assert!(session.is_open());

    interpreter.execute(&mut session, "exit");
    assert!(!session.is_open());
    // exit echoes but never responds
    assert_eq!(session.lines().len(), 5);
    assert_eq!(session.lines().last().unwrap().to_string(), "$ exit");
}

#[test]
fn custom_profile_texts_flow_through() {
    let profile = Profile {
        whoami: "visitor".to_string(),
        ..Profile::default()
    };
    let interpreter = Interpreter::new(profile);
    let mut session = TerminalSession::new();
    interpreter.execute(&mut session, "whoami");
    assert_eq!(session.lines().last().unwrap().text, "visitor");
}
