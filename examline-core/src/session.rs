//! Session-number notation.
//!
//! The feed encodes the session index of a class meeting in the free-text
//! summary, e.g. "PROBABILITY FOR COMPUTING SCIENCE Ses. 9" or, for double
//! sessions, "Ses. 14-15". Some summaries wrap the number in parentheses.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The literal marker that precedes a session number in a summary.
const SESSION_MARKER: &str = "Ses. ";

/// A session number parsed from an event summary.
///
/// Matching is exact: `Single(1)` matches target 1 only, never 11 or 21.
/// A `Range` matches any target it contains, so a double session counts as
/// both of its meetings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Session {
    Single(u32),
    Range(u32, u32),
}

impl Session {
    /// Extract the session number from an event summary.
    ///
    /// Returns `None` when the marker is absent, and also when the marker is
    /// present but the token after it does not parse as a number or a range.
    /// Neither case is an error: most feed events are not session meetings.
    pub fn from_summary(summary: &str) -> Option<Session> {
        // Token after the last marker occurrence, up to the next whitespace
        let (_, tail) = summary.rsplit_once(SESSION_MARKER)?;
        let token = tail.split_whitespace().next().unwrap_or("");

        let cleaned = token
            .replace(['(', ')'], "")
            .replace("Ses.", "")
            .replace("Ses", "");

        Session::parse(cleaned.trim())
    }

    fn parse(token: &str) -> Option<Session> {
        if let Some((lo, hi)) = token.split_once('-') {
            let lo: u32 = lo.trim().parse().ok()?;
            let hi: u32 = hi.trim().parse().ok()?;
            if lo <= hi {
                Some(Session::Range(lo, hi))
            } else {
                None
            }
        } else {
            token.parse().ok().map(Session::Single)
        }
    }

    /// Whether this session is (or contains) the given session number.
    pub fn matches(&self, target: u32) -> bool {
        match *self {
            Session::Single(n) => n == target,
            Session::Range(lo, hi) => lo <= target && target <= hi,
        }
    }
}

impl fmt::Display for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Session::Single(n) => write!(f, "{}", n),
            Session::Range(lo, hi) => write!(f, "{}-{}", lo, hi),
        }
    }
}
