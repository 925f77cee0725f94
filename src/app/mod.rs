//! Application layer: binds the headless kernel to a terminal frontend.

pub mod theme;
mod workbench;

pub use workbench::Workbench;
