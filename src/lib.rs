//! Digital Garden — an interactive portfolio for the terminal.
//!
//! A full-screen tour of a developer portfolio with a few secrets growing
//! between the sections: a hidden command console behind the classic
//! ↑↑↓↓←→←→BA sequence, and a small set of persistent achievements for
//! finding them.
//!
//! The crate splits into a headless core and presentation on top:
//!
//! - [`achievements`] — one-way unlock flags, JSON snapshot, notifications
//! - [`konami`] — the hidden-sequence matcher
//! - [`terminal`] — the console session and command interpreter
//! - [`garden`] — the application context wiring the core together
//! - [`events`] — the channel core components use to talk to a frontend
//! - [`config`], [`logging`] — TOML settings and tracing setup
//! - [`tui`] — the ratatui frontend

pub mod achievements;
pub mod config;
pub mod events;
pub mod garden;
pub mod konami;
pub mod logging;
pub mod terminal;
pub mod tui;

pub use config::Config;
pub use garden::Garden;
