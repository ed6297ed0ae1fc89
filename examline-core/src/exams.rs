//! Exam matching.
//!
//! The operator configures, per course, which session number is the final
//! exam and (optionally) which is the midterm. The matcher scans the feed
//! events for the class meeting that carries that session number.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::event::{EventTime, SessionEvent};
use crate::session::Session;

/// Which exam a matched session is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExamKind {
    Final,
    Midterm,
}

impl ExamKind {
    pub fn label(self) -> &'static str {
        match self {
            ExamKind::Final => "Final",
            ExamKind::Midterm => "Midterm",
        }
    }
}

/// Configured exam sessions for one course.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseSchedule {
    /// Session number of the final exam
    #[serde(rename = "final")]
    pub final_session: u32,
    /// Session number of the midterm, for courses that have one
    #[serde(rename = "midterm")]
    pub midterm_session: Option<u32>,
}

/// Course name (as it appears in event summaries) to its exam sessions.
/// BTreeMap keeps the output order deterministic.
pub type ExamTable = BTreeMap<String, CourseSchedule>;

/// One resolved exam date.
#[derive(Debug, Clone, PartialEq)]
pub struct ExamDate {
    pub course: String,
    pub kind: ExamKind,
    pub session: Session,
    pub start: EventTime,
    /// English weekday name of the start date, e.g. "Wednesday"
    pub weekday: String,
}

/// Find the exam dates for every configured course.
///
/// A course name matches an event when it appears in the summary as a
/// literal substring; names with characters like "&" carry no pattern
/// meaning. Session numbers match exactly (see [`Session::matches`]).
/// Courses or kinds with no matching event are skipped without error, and
/// when several events match the earliest start wins.
pub fn find_exam_dates(events: &[SessionEvent], table: &ExamTable) -> Vec<ExamDate> {
    let mut exams = Vec::new();

    for (course, schedule) in table {
        let mut targets = vec![(ExamKind::Final, schedule.final_session)];
        if let Some(midterm) = schedule.midterm_session {
            targets.push((ExamKind::Midterm, midterm));
        }

        for (kind, target) in targets {
            let matched = events
                .iter()
                .filter_map(|e| e.session.map(|s| (e, s)))
                .filter(|(e, s)| e.summary.contains(course.as_str()) && s.matches(target))
                .min_by_key(|(e, _)| e.start.to_utc());

            if let Some((event, session)) = matched {
                exams.push(ExamDate {
                    course: course.clone(),
                    kind,
                    session,
                    start: event.start,
                    weekday: event.start.date_naive().format("%A").to_string(),
                });
            }
        }
    }

    exams
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn session_event(summary: &str, y: i32, m: u32, d: u32) -> SessionEvent {
        let start = Utc.with_ymd_and_hms(y, m, d, 9, 0, 0).unwrap();
        SessionEvent {
            summary: summary.to_string(),
            description: None,
            location: None,
            start: EventTime::DateTime(start),
            end: EventTime::DateTime(start + chrono::Duration::minutes(105)),
            session: Session::from_summary(summary),
        }
    }

    fn table(entries: &[(&str, u32, Option<u32>)]) -> ExamTable {
        entries
            .iter()
            .map(|(course, fin, mid)| {
                (
                    course.to_string(),
                    CourseSchedule {
                        final_session: *fin,
                        midterm_session: *mid,
                    },
                )
            })
            .collect()
    }

    #[test]
    fn test_single_final_is_matched() {
        let events = vec![
            session_event("X Ses. 30", 2024, 5, 1),
            session_event("Unrelated talk", 2024, 5, 2),
        ];
        let exams = find_exam_dates(&events, &table(&[("X", 30, None)]));

        assert_eq!(exams.len(), 1);
        let exam = &exams[0];
        assert_eq!(exam.course, "X");
        assert_eq!(exam.kind, ExamKind::Final);
        assert_eq!(exam.session, Session::Single(30));
        assert_eq!(
            exam.start.date_naive(),
            chrono::NaiveDate::from_ymd_opt(2024, 5, 1).unwrap()
        );
        assert_eq!(exam.weekday, "Wednesday");
    }

    #[test]
    fn test_no_matching_session_yields_no_entry() {
        let events = vec![session_event("X Ses. 12", 2024, 3, 4)];
        let exams = find_exam_dates(&events, &table(&[("X", 30, None)]));
        assert!(exams.is_empty());
    }

    #[test]
    fn test_session_match_is_exact_not_substring() {
        // Under the old substring semantics target 1 would match "11"
        let events = vec![
            session_event("X Ses. 11", 2024, 2, 5),
            session_event("X Ses. 1", 2024, 1, 8),
        ];
        let exams = find_exam_dates(&events, &table(&[("X", 1, None)]));

        assert_eq!(exams.len(), 1);
        assert_eq!(exams[0].session, Session::Single(1));
        assert_eq!(
            exams[0].start.date_naive(),
            chrono::NaiveDate::from_ymd_opt(2024, 1, 8).unwrap()
        );
    }

    #[test]
    fn test_course_name_with_ampersand_is_literal() {
        let events = vec![session_event(
            "MATRICES & LINEAR TRANSFORMATIONS Ses. 14",
            2024,
            3,
            6,
        )];
        let exams = find_exam_dates(
            &events,
            &table(&[("MATRICES & LINEAR TRANSFORMATIONS", 14, None)]),
        );
        assert_eq!(exams.len(), 1);
    }

    #[test]
    fn test_earliest_start_wins_among_duplicates() {
        let events = vec![
            session_event("X Ses. 30", 2024, 5, 8),
            session_event("X Ses. 30", 2024, 5, 1),
        ];
        let exams = find_exam_dates(&events, &table(&[("X", 30, None)]));

        assert_eq!(exams.len(), 1);
        assert_eq!(
            exams[0].start.date_naive(),
            chrono::NaiveDate::from_ymd_opt(2024, 5, 1).unwrap()
        );
    }

    #[test]
    fn test_final_then_midterm_per_course() {
        let events = vec![
            session_event("X Ses. 14", 2024, 3, 6),
            session_event("X Ses. 30", 2024, 5, 1),
        ];
        let exams = find_exam_dates(&events, &table(&[("X", 30, Some(14))]));

        assert_eq!(exams.len(), 2);
        assert_eq!(exams[0].kind, ExamKind::Final);
        assert_eq!(exams[1].kind, ExamKind::Midterm);
    }

    #[test]
    fn test_double_session_matches_either_target() {
        let events = vec![session_event("X Ses. 14-15", 2024, 3, 6)];

        let exams = find_exam_dates(&events, &table(&[("X", 15, None)]));
        assert_eq!(exams.len(), 1);
        assert_eq!(exams[0].session, Session::Range(14, 15));

        let exams = find_exam_dates(&events, &table(&[("X", 16, None)]));
        assert!(exams.is_empty());
    }

    #[test]
    fn test_courses_iterate_in_name_order() {
        let events = vec![
            session_event("BETA COURSE Ses. 10", 2024, 4, 2),
            session_event("ALPHA COURSE Ses. 20", 2024, 4, 3),
        ];
        let exams = find_exam_dates(
            &events,
            &table(&[("BETA COURSE", 10, None), ("ALPHA COURSE", 20, None)]),
        );

        assert_eq!(exams.len(), 2);
        assert_eq!(exams[0].course, "ALPHA COURSE");
        assert_eq!(exams[1].course, "BETA COURSE");
    }
}
