use std::path::PathBuf;

use anyhow::{Context, Result};
use examline_core::{Timeline, find_exam_dates, parse_feed};
use owo_colors::OwoColorize;

use crate::config::Config;
use crate::feed;

/// Minimal page that feeds the JSON document to the TimelineJS widget.
const HTML_TEMPLATE: &str = r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>__TITLE__</title>
<link rel="stylesheet" href="https://cdn.knightlab.com/libs/timeline3/latest/css/timeline.css">
<script src="https://cdn.knightlab.com/libs/timeline3/latest/js/timeline.js"></script>
</head>
<body style="margin:0">
<div id="timeline" style="width:100%;height:100vh"></div>
<script>new TL.Timeline("timeline", __JSON__);</script>
</body>
</html>
"#;

pub async fn run(cfg: &Config, output: Option<PathBuf>, open_page: bool) -> Result<()> {
    if cfg.courses.is_empty() {
        anyhow::bail!(
            "No courses configured.\n\
            Add your exam sessions to config.toml:\n\n\
            [courses.\"MATRICES & LINEAR TRANSFORMATIONS\"]\n\
            final = 30\n\
            midterm = 14"
        );
    }

    let contents = feed::load(cfg).await?;
    let events = parse_feed(&contents)?;
    let exams = find_exam_dates(&events, &cfg.courses);

    if exams.is_empty() {
        println!(
            "{}",
            "No configured exam sessions matched any feed event".dimmed()
        );
    }

    for exam in &exams {
        println!(
            "  {} {:<9} {} {}",
            exam.start.date_naive().format("%Y-%m-%d"),
            exam.weekday,
            format!("{} {}", exam.course, exam.kind.label()).bold(),
            format!("(Ses. {})", exam.session).dimmed()
        );
    }

    let timeline = Timeline::build(&cfg.title.headline, &cfg.title.text, &exams);
    let json =
        serde_json::to_string_pretty(&timeline).context("Failed to serialize timeline")?;

    let json_path =
        output.unwrap_or_else(|| PathBuf::from(format!("{}.timeline.json", cfg.calendar_name)));
    std::fs::write(&json_path, &json)
        .with_context(|| format!("Failed to write timeline to {}", json_path.display()))?;
    println!("\nWrote {}", json_path.display());

    if open_page {
        let page = HTML_TEMPLATE
            .replace("__TITLE__", &cfg.calendar_name)
            .replace("__JSON__", &json);
        let page_path = json_path.with_extension("html");
        std::fs::write(&page_path, page)
            .with_context(|| format!("Failed to write timeline page to {}", page_path.display()))?;

        println!("Opening {}", page_path.display());
        open::that(&page_path)
            .with_context(|| format!("Failed to open {}", page_path.display()))?;
    }

    Ok(())
}
