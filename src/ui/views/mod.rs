//! View components
//!
//! Each view represents a screen in the application.

mod changes;
mod output;
mod text;

pub use changes::{ChangesAction, ChangesView, Row};
pub use output::{OutputKind, OutputLine, OutputView};
pub use text::{TextKind, TextView};
