//! Terminal integration (crossterm + ratatui).
//!
//! Kept apart from `kernel` so command handling and effects can be driven without a terminal.

pub mod event;
pub mod terminal_guard;
pub mod view;

pub use event::{InputEvent, Key};
pub use view::{EventResult, View};
