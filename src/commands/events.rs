use anyhow::Result;
use examline_core::{EventTime, parse_feed};
use owo_colors::OwoColorize;

use crate::config::Config;
use crate::feed;

pub async fn run(cfg: &Config) -> Result<()> {
    let contents = feed::load(cfg).await?;
    let mut events = parse_feed(&contents)?;

    // Sort by start time
    events.sort_by_key(|e| e.start.to_utc());

    if events.is_empty() {
        println!("{}", "No events found".dimmed());
        return Ok(());
    }

    // Group events by day and print
    let mut current_date: Option<String> = None;

    for event in &events {
        let date_label = format_date_label(&event.start);

        if current_date.as_ref() != Some(&date_label) {
            if current_date.is_some() {
                println!();
            }
            println!("{}", date_label.bold());
            current_date = Some(date_label);
        }

        let time = format_time(&event.start);
        match &event.session {
            Some(session) => {
                let tag = format!("[Ses. {}]", session);
                println!("  {} {} {}", time, event.summary, tag.dimmed());
            }
            None => println!("  {} {}", time, event.summary),
        }
    }

    Ok(())
}

/// Format a date as a label heading (e.g. "Wed May 1 2024")
fn format_date_label(time: &EventTime) -> String {
    time.date_naive().format("%a %b %-d %Y").to_string()
}

/// Format the time portion of an event (e.g. "  09:00" or "all-day")
fn format_time(time: &EventTime) -> String {
    match time {
        EventTime::Date(_) => "all-day".to_string(),
        // DelayedFormat ignores width specifiers; pad the rendered string
        EventTime::DateTime(dt) => format!("{:>7}", dt.format("%H:%M").to_string()),
    }
}
