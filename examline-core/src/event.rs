//! Session event types.
//!
//! A `SessionEvent` is one VEVENT from the university feed, projected down to
//! the fields the exam matcher cares about. Events are built once by
//! `parse::parse_feed` and never mutated afterwards.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use crate::session::Session;

/// Start/end of an event: either an all-day date or a concrete timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum EventTime {
    Date(NaiveDate),
    DateTime(DateTime<Utc>),
}

impl EventTime {
    /// The calendar date of this time (all-day dates as-is, timestamps in UTC).
    pub fn date_naive(&self) -> NaiveDate {
        match self {
            EventTime::Date(d) => *d,
            EventTime::DateTime(dt) => dt.date_naive(),
        }
    }

    /// A UTC instant usable for ordering. All-day dates sort at midnight.
    pub fn to_utc(&self) -> DateTime<Utc> {
        match self {
            EventTime::Date(d) => d.and_time(NaiveTime::MIN).and_utc(),
            EventTime::DateTime(dt) => *dt,
        }
    }
}

/// One class-session event from the feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionEvent {
    pub summary: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub start: EventTime,
    pub end: EventTime,
    /// Session number derived from the summary, absent when the summary
    /// carries no (parseable) "Ses. N" marker.
    pub session: Option<Session>,
}
