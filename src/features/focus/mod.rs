//! Work/break sessions.
//!
//! - [`timer`]: the session state machine and MM:SS formatting
//! - [`ticker`]: the cancellable one-second clock that drives it
//! - [`session`]: session kinds and completed-session records
//! - [`storage`]: the append-only CSV session log
//! - [`report`]: totals per session kind

pub mod report;
pub mod session;
pub mod storage;
pub mod ticker;
pub mod timer;

pub use report::Summary;
pub use session::{CompletedSession, SessionKind, SessionRecord};
pub use storage::{SessionLog, SessionSink};
pub use ticker::{Tick, Ticker};
pub use timer::{format_duration, format_mmss, parse_minutes, SessionConfig, SessionTimer, TimerState};
