//! Feed parsing using the icalendar crate's parser.

use icalendar::{
    CalendarDateTime, DatePerhapsTime,
    parser::{Component, read_calendar, unfold},
};

use crate::error::{CoreError, CoreResult};
use crate::event::{EventTime, SessionEvent};
use crate::session::Session;

/// Parse raw feed text into session events.
///
/// Keeps only VEVENT components. Anything that is not a valid calendar
/// document, or a VEVENT without DTSTART/DTEND, fails the whole parse; a
/// summary without a session marker is normal and simply yields an event
/// with no session.
pub fn parse_feed(content: &str) -> CoreResult<Vec<SessionEvent>> {
    let unfolded = unfold(content);
    let calendar =
        read_calendar(&unfolded).map_err(|e| CoreError::FeedParse(e.to_string()))?;

    calendar
        .components
        .iter()
        .filter(|c| c.name == "VEVENT")
        .map(parse_vevent)
        .collect()
}

fn parse_vevent(vevent: &Component) -> CoreResult<SessionEvent> {
    let summary = vevent
        .find_prop("SUMMARY")
        .map(|p| p.val.to_string())
        .unwrap_or_default();

    let start = parse_time(vevent, "DTSTART")?;
    let end = parse_time(vevent, "DTEND")?;

    let description = vevent.find_prop("DESCRIPTION").map(|p| p.val.to_string());
    let location = vevent.find_prop("LOCATION").map(|p| p.val.to_string());

    let session = Session::from_summary(&summary);

    Ok(SessionEvent {
        summary,
        description,
        location,
        start,
        end,
        session,
    })
}

fn parse_time(vevent: &Component, prop: &str) -> CoreResult<EventTime> {
    let value = vevent
        .find_prop(prop)
        .ok_or_else(|| CoreError::FeedParse(format!("VEVENT missing {}", prop)))?;

    let dpt = DatePerhapsTime::try_from(value)
        .ok()
        .ok_or_else(|| CoreError::FeedParse(format!("Invalid {} value", prop)))?;

    Ok(to_event_time(dpt))
}

/// Convert icalendar's DatePerhapsTime to our EventTime.
///
/// The Blackboard feed publishes UTC timestamps; floating and zoned times are
/// taken at their wall-clock value.
fn to_event_time(dpt: DatePerhapsTime) -> EventTime {
    match dpt {
        DatePerhapsTime::Date(d) => EventTime::Date(d),
        DatePerhapsTime::DateTime(cal_dt) => match cal_dt {
            CalendarDateTime::Utc(dt) => EventTime::DateTime(dt),
            CalendarDateTime::Floating(naive) => EventTime::DateTime(naive.and_utc()),
            CalendarDateTime::WithTimezone { date_time, .. } => {
                EventTime::DateTime(date_time.and_utc())
            }
        },
    }
}
