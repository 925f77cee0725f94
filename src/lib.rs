//! termfolio: an interactive résumé that runs as a terminal REPL.
//!
//! - kernel: headless state, commands, effect simulations and IO adapters
//! - app: the `Workbench` that renders the kernel with ratatui
//! - tui: crossterm terminal setup and the `View` trait

pub mod kernel;

#[cfg(feature = "tui")]
pub mod app;
#[cfg(feature = "tui")]
pub mod tui;
