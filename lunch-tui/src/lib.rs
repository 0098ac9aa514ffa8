//! Lunch Log - terminal forms for lunch orders and office tallies
//!
//! # Module structure
//!
//! ```text
//! lunch-tui/src/
//! ├── keymap.rs      # Key → Command
//! ├── form/          # Generic form session + the two form kinds
//! ├── menu.rs        # Home menu
//! ├── app.rs         # Navigation and hand-off to the record store
//! ├── ui.rs          # ratatui rendering
//! ├── event_loop.rs  # Draw / read / dispatch loop
//! ├── terminal.rs    # Raw mode + alternate screen guard
//! ├── config.rs      # Environment configuration
//! └── logger.rs      # tracing setup
//! ```

pub mod app;
pub mod config;
pub mod event_loop;
pub mod form;
pub mod keymap;
pub mod logger;
pub mod menu;
pub mod terminal;
pub mod ui;

#[cfg(test)]
mod testing;

pub use app::{App, View};
pub use config::Config;
pub use event_loop::run_app;
pub use keymap::Command;
pub use logger::init_logger;
pub use terminal::TerminalGuard;
