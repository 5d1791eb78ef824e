//! Reusable UI widgets

mod error_banner;
mod help_panel;
mod notification_banner;
mod status_bar;

pub use error_banner::render_error_banner;
pub use help_panel::{build_help_lines, render_help_panel};
pub use notification_banner::{build_notification_line, render_notification_banner};
pub use status_bar::{
    STATUS_BAR_HEIGHT, StatusSummary, build_status_bar, build_status_prefix, render_status_bar,
};
