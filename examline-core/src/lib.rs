//! Core types for examline.
//!
//! This crate provides the pieces the CLI composes into a pipeline:
//! - `event` / `parse` for turning raw feed text into session events
//! - `session` for the "Ses. N" session-number notation
//! - `exams` for matching configured exam sessions against the feed
//! - `timeline` for the TimelineJS-shaped output records

pub mod error;
pub mod event;
pub mod exams;
pub mod parse;
pub mod session;
pub mod timeline;

// Re-export the main types at crate root for convenience
pub use error::{CoreError, CoreResult};
pub use event::{EventTime, SessionEvent};
pub use exams::{CourseSchedule, ExamDate, ExamKind, ExamTable, find_exam_dates};
pub use parse::parse_feed;
pub use session::Session;
pub use timeline::Timeline;
