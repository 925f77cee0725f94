//! Headless application core (state/action/effect).

pub mod action;
pub mod calc;
pub mod command;
pub mod content;
pub mod effect;
pub mod fx;
pub mod layout;
pub mod rich_text;
pub mod services;
pub mod session;
pub mod state;
pub mod store;
pub mod theme;

pub use action::Action;
pub use effect::Effect;
pub use layout::{LayoutNode, LayoutTree, SplitDirection};
pub use rich_text::RichText;
pub use session::{EntryKind, OutputEntry, Session, SessionId, SessionRegistry};
pub use state::{AppState, Modal, PaneMenuItem};
pub use store::{DispatchResult, Store};
pub use theme::ThemeName;
