//! Feature implementations for pomotimer.
//!
//! - Focus: the work/break timer, its clock and the session log
//! - Analytics: charts over the session log

pub mod analytics;
pub mod focus;
