//! Full-screen portfolio interface
//!
//! ratatui/crossterm frontend over the headless core: section navigation,
//! the hidden console overlay, toasts, the contact form, and the
//! confirm-reset modal.

pub mod app;
pub mod render;
pub mod sections;
pub mod theme;

pub use app::GardenApp;
pub use theme::current_theme;
