//! Reusable UI widgets

mod error_banner;
mod help_panel;
mod markdown_panel;
mod notification_banner;
mod status_bar;

pub use error_banner::render_error_banner;
pub use help_panel::{build_help_lines, render_help_panel};
pub use markdown_panel::{build_markdown_report, render_markdown_panel};
pub use notification_banner::render_notification_banner;
pub use status_bar::{
    build_status_bar, build_status_bar_with_prefix, render_status_line, status_bar_area,
};
