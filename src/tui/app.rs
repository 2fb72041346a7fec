//! Full-screen portfolio application
//!
//! Event loop and input handling. Keys in normal mode feed the hidden
//! sequence matcher before anything else, mouse clicks feed the click
//! counter, and timers (toast dismiss, welcome delay, contact-form label
//! restore) are checked on every tick.

use std::collections::VecDeque;
use std::io::{self, Stdout};
use std::sync::mpsc::Receiver;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
    KeyModifiers, MouseEvent, MouseEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use super::render;
use super::sections::SectionId;
use crate::events::UiEvent;
use crate::garden::{Garden, WELCOME_MESSAGE};
use crate::konami::InputCode;

/// Delay before the welcome toast appears.
const WELCOME_DELAY: Duration = Duration::from_secs(2);
/// How long the contact form pretends to send.
const SEND_DURATION: Duration = Duration::from_millis(1500);
/// How long "Sent!" stays on the button before it restores.
const SENT_LABEL_DURATION: Duration = Duration::from_secs(2);

/// UI mode for the portfolio application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Browsing the portfolio sections
    #[default]
    Normal,
    /// Typing into the hidden console
    Terminal,
    /// Contact form modal
    Contact,
    /// Help overlay
    Help,
    /// Confirm achievement reset
    ConfirmReset,
}

/// Focusable contact form fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContactField {
    #[default]
    Name,
    Email,
    Message,
    Send,
}

impl ContactField {
    pub fn next(self) -> Self {
        match self {
            ContactField::Name => ContactField::Email,
            ContactField::Email => ContactField::Message,
            ContactField::Message => ContactField::Send,
            ContactField::Send => ContactField::Name,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            ContactField::Name => ContactField::Send,
            ContactField::Email => ContactField::Name,
            ContactField::Message => ContactField::Email,
            ContactField::Send => ContactField::Message,
        }
    }
}

/// Send-button state, driven by tick timers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SendState {
    #[default]
    Idle,
    Sending(Instant),
    Sent(Instant),
}

/// Contact form contents and focus
#[derive(Debug, Default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
    pub focus: ContactField,
    pub send: SendState,
}

impl ContactForm {
    fn focused_field(&mut self) -> Option<&mut String> {
        match self.focus {
            ContactField::Name => Some(&mut self.name),
            ContactField::Email => Some(&mut self.email),
            ContactField::Message => Some(&mut self.message),
            ContactField::Send => None,
        }
    }

    fn clear_fields(&mut self) {
        self.name.clear();
        self.email.clear();
        self.message.clear();
        self.focus = ContactField::Name;
    }
}

/// The toast currently on screen
#[derive(Debug)]
pub struct ActiveToast {
    pub text: String,
    shown_at: Instant,
}

/// Portfolio application state
pub struct GardenApp {
    pub(crate) garden: Garden,
    events: Receiver<UiEvent>,
    pub(crate) mode: Mode,
    pub(crate) section_idx: usize,
    pub(crate) scroll: u16,
    pub(crate) input: String,
    pub(crate) contact: ContactForm,
    pub(crate) active_toast: Option<ActiveToast>,
    toasts: VecDeque<String>,
    welcome_at: Option<Instant>,
    tick: Duration,
    toast_ttl: Duration,
    should_quit: bool,
}

impl GardenApp {
    /// Create the application around a garden context and its event feed.
    pub fn new(garden: Garden, events: Receiver<UiEvent>) -> Self {
        let ui = &garden.config().ui;
        let tick = Duration::from_millis(ui.tick_ms.max(10));
        let toast_ttl = Duration::from_secs(ui.toast_secs.max(1));
        let welcome_at = ui
            .welcome_toast
            .then(|| Instant::now() + WELCOME_DELAY);
        Self {
            garden,
            events,
            mode: Mode::Normal,
            section_idx: 0,
            scroll: 0,
            input: String::new(),
            contact: ContactForm::default(),
            active_toast: None,
            toasts: VecDeque::new(),
            welcome_at,
            tick,
            toast_ttl,
            should_quit: false,
        }
    }

    /// Currently displayed section.
    pub fn section(&self) -> SectionId {
        SectionId::ALL[self.section_idx]
    }

    /// Run until the user quits, restoring the terminal on the way out.
    #[cfg(not(tarpaulin_include))]
    pub fn run(mut self) -> Result<()> {
        let mut terminal = setup_terminal()?;
        let result = self.event_loop(&mut terminal);
        restore_terminal(&mut terminal)?;
        result
    }

    #[cfg(not(tarpaulin_include))]
    fn event_loop(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        // The starting section counts as explored
        self.garden.section_viewed(self.section().slug());
        while !self.should_quit {
            self.drain_events();
            self.on_tick();
            terminal.draw(|frame| render::draw(frame, self))?;
            if event::poll(self.tick)? {
                match event::read()? {
                    Event::Key(key) if key.kind != KeyEventKind::Release => self.on_key(key),
                    Event::Mouse(mouse) => self.on_mouse(mouse),
                    _ => {}
                }
            }
        }
        Ok(())
    }

    /// Move unlock and toast events into the toast queue.
    pub(crate) fn drain_events(&mut self) {
        while let Ok(event) = self.events.try_recv() {
            match event {
                UiEvent::AchievementUnlocked { message, .. } => self.toasts.push_back(message),
                UiEvent::Toast(text) => self.toasts.push_back(text),
            }
        }
    }

    /// Advance every timer: welcome toast, toast expiry, send-button labels.
    pub(crate) fn on_tick(&mut self) {
        let now = Instant::now();

        if let Some(at) = self.welcome_at {
            if now >= at {
                self.welcome_at = None;
                self.toasts.push_back(WELCOME_MESSAGE.to_string());
            }
        }

        if let Some(toast) = &self.active_toast {
            if now.duration_since(toast.shown_at) >= self.toast_ttl {
                self.active_toast = None;
            }
        }
        if self.active_toast.is_none() {
            if let Some(text) = self.toasts.pop_front() {
                self.active_toast = Some(ActiveToast { text, shown_at: now });
            }
        }

        match self.contact.send {
            SendState::Sending(at) if now.duration_since(at) >= SEND_DURATION => {
                self.contact.send = SendState::Sent(now);
                self.garden.contact_submitted();
            }
            SendState::Sent(at) if now.duration_since(at) >= SENT_LABEL_DURATION => {
                self.contact.send = SendState::Idle;
                self.contact.clear_fields();
            }
            _ => {}
        }
    }

    pub(crate) fn on_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }
        match self.mode {
            Mode::Normal => self.on_key_normal(key),
            Mode::Terminal => self.on_key_terminal(key),
            Mode::Contact => self.on_key_contact(key),
            Mode::Help => self.mode = Mode::Normal,
            Mode::ConfirmReset => self.on_key_confirm_reset(key),
        }
    }

    fn on_key_normal(&mut self, key: KeyEvent) {
        // Every key feeds the hidden sequence before it does anything else
        if self.garden.key_input(input_code(key.code)) {
            self.mode = if self.garden.session().is_open() {
                Mode::Terminal
            } else {
                Mode::Normal
            };
            return;
        }
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('?') => self.mode = Mode::Help,
            KeyCode::Char('c') => {
                self.contact.focus = ContactField::Name;
                self.mode = Mode::Contact;
            }
            KeyCode::Char('R') => self.mode = Mode::ConfirmReset,
            KeyCode::Left | KeyCode::BackTab => self.switch_section(-1),
            KeyCode::Right | KeyCode::Tab => self.switch_section(1),
            KeyCode::Up => self.scroll = self.scroll.saturating_sub(1),
            KeyCode::Down => self.scroll = self.scroll.saturating_add(1),
            KeyCode::PageUp => self.scroll = self.scroll.saturating_sub(10),
            KeyCode::PageDown => self.scroll = self.scroll.saturating_add(10),
            _ => {}
        }
    }

    fn on_key_terminal(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.garden.close_terminal();
                self.mode = Mode::Normal;
            }
            KeyCode::Enter => {
                let line = std::mem::take(&mut self.input);
                self.garden.run_command(&line);
                if !self.garden.session().is_open() {
                    self.mode = Mode::Normal;
                }
            }
            KeyCode::Backspace => {
                self.input.pop();
            }
            KeyCode::Char(c) => self.input.push(c),
            _ => {}
        }
    }

    fn on_key_contact(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.mode = Mode::Normal,
            KeyCode::Tab => self.contact.focus = self.contact.focus.next(),
            KeyCode::BackTab => self.contact.focus = self.contact.focus.prev(),
            KeyCode::Enter => {
                if self.contact.focus == ContactField::Send {
                    if self.contact.send == SendState::Idle {
                        self.contact.send = SendState::Sending(Instant::now());
                    }
                } else {
                    self.contact.focus = self.contact.focus.next();
                }
            }
            KeyCode::Backspace => {
                if self.contact.send == SendState::Idle {
                    if let Some(field) = self.contact.focused_field() {
                        field.pop();
                    }
                }
            }
            KeyCode::Char(c) => {
                if self.contact.send == SendState::Idle {
                    if let Some(field) = self.contact.focused_field() {
                        field.push(c);
                    }
                }
            }
            _ => {}
        }
    }

    fn on_key_confirm_reset(&mut self, key: KeyEvent) {
        if matches!(key.code, KeyCode::Char('y') | KeyCode::Char('Y')) {
            self.garden.reset_achievements();
        }
        self.mode = Mode::Normal;
    }

    pub(crate) fn on_mouse(&mut self, mouse: MouseEvent) {
        if let MouseEventKind::Down(_) = mouse.kind {
            self.garden.pointer_clicked();
        }
    }

    fn switch_section(&mut self, delta: isize) {
        let len = SectionId::ALL.len() as isize;
        self.section_idx = ((self.section_idx as isize + delta + len) % len) as usize;
        self.scroll = 0;
        self.garden.section_viewed(self.section().slug());
    }
}

/// Normalize a key press for the hidden-sequence matcher.
fn input_code(code: KeyCode) -> InputCode {
    match code {
        KeyCode::Up => InputCode::Up,
        KeyCode::Down => InputCode::Down,
        KeyCode::Left => InputCode::Left,
        KeyCode::Right => InputCode::Right,
        KeyCode::Char(c) => InputCode::Char(c.to_ascii_lowercase()),
        _ => InputCode::Other,
    }
}

#[cfg(not(tarpaulin_include))]
fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

#[cfg(not(tarpaulin_include))]
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;
    Ok(())
}
