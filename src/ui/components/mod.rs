//! Reusable UI components
//!
//! Common building blocks for views.

pub mod blocks;
pub mod dialog;
pub mod empty_state;
pub mod message;

pub use blocks::*;
pub use dialog::{Dialog, DialogCallback, DialogKind, DialogResult, SelectItem};
pub use empty_state::*;
pub use message::*;
