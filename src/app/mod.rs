//! Application module
//!
//! Contains the main application state and logic, split into:
//! - `state`: App struct and view management
//! - `input`: Key event handling
//! - `actions`: svn operations and dialog results
//! - `refresh`: status reload and background events
//! - `render`: UI rendering

mod actions;
mod input;
mod refresh;
mod render;
mod state;

pub use state::{App, View};
