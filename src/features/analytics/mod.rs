//! Analytics over the session log.
//!
//! Sums are computed by [`crate::features::focus::SessionLog::summarize`];
//! this module only renders them.

pub mod chart;

pub use chart::{
    render_bar_chart, render_summary_box, render_summary_chart, NO_LOG_MESSAGE,
    NO_SESSIONS_MESSAGE,
};
