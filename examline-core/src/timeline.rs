//! TimelineJS output records.
//!
//! The rendering widget consumes a JSON document of this exact shape; the
//! structs here serialize to it verbatim. Building a timeline from matched
//! exam dates is a pure 1:1 projection with no filtering.

use chrono::Datelike;
use serde::{Deserialize, Serialize};

use crate::exams::ExamDate;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineText {
    pub headline: String,
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineMedia {
    pub url: String,
    pub caption: String,
    pub credit: String,
}

/// One dated slide on the timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineSlide {
    pub media: TimelineMedia,
    pub start_date: TimelineDate,
    pub text: TimelineText,
}

/// The undated title slide.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineTitle {
    pub media: TimelineMedia,
    pub text: TimelineText,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timeline {
    pub title: TimelineTitle,
    pub events: Vec<TimelineSlide>,
}

impl Timeline {
    /// Project matched exam dates into a renderable timeline.
    pub fn build(headline: &str, text: &str, exams: &[ExamDate]) -> Timeline {
        Timeline {
            title: TimelineTitle {
                media: TimelineMedia::default(),
                text: TimelineText {
                    headline: headline.to_string(),
                    text: text.to_string(),
                },
            },
            events: exams.iter().map(TimelineSlide::from_exam).collect(),
        }
    }
}

impl TimelineSlide {
    fn from_exam(exam: &ExamDate) -> TimelineSlide {
        let date = exam.start.date_naive();
        TimelineSlide {
            media: TimelineMedia {
                url: String::new(),
                caption: format!("Session {}", exam.session),
                credit: String::new(),
            },
            start_date: TimelineDate {
                year: date.year(),
                month: date.month(),
                day: date.day(),
            },
            text: TimelineText {
                headline: format!("{} {}", exam.course, exam.kind.label()),
                text: exam.weekday.clone(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::EventTime;
    use crate::exams::ExamKind;
    use crate::session::Session;
    use chrono::{TimeZone, Utc};

    fn exam() -> ExamDate {
        ExamDate {
            course: "X".to_string(),
            kind: ExamKind::Final,
            session: Session::Single(30),
            start: EventTime::DateTime(Utc.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).unwrap()),
            weekday: "Wednesday".to_string(),
        }
    }

    #[test]
    fn test_build_projects_one_slide_per_exam() {
        let timeline = Timeline::build("Exam timeline", "All dates", &[exam()]);

        assert_eq!(timeline.title.text.headline, "Exam timeline");
        assert_eq!(timeline.events.len(), 1);

        let slide = &timeline.events[0];
        assert_eq!(
            slide.start_date,
            TimelineDate {
                year: 2024,
                month: 5,
                day: 1
            }
        );
        assert_eq!(slide.text.headline, "X Final");
        assert_eq!(slide.text.text, "Wednesday");
        assert_eq!(slide.media.caption, "Session 30");
    }

    #[test]
    fn test_serialized_shape_matches_widget_contract() {
        let timeline = Timeline::build("T", "B", &[exam()]);
        let json = serde_json::to_value(&timeline).expect("Should serialize");

        assert_eq!(json["title"]["text"]["headline"], "T");
        assert_eq!(json["events"][0]["start_date"]["year"], 2024);
        assert_eq!(json["events"][0]["start_date"]["month"], 5);
        assert_eq!(json["events"][0]["start_date"]["day"], 1);
        assert_eq!(json["events"][0]["text"]["headline"], "X Final");
        assert_eq!(json["events"][0]["media"]["caption"], "Session 30");
    }

    #[test]
    fn test_no_exams_builds_empty_timeline() {
        let timeline = Timeline::build("T", "B", &[]);
        assert!(timeline.events.is_empty());
    }
}
