use anyhow::Result;
use examline_core::parse_feed;
use owo_colors::OwoColorize;

use crate::config::Config;
use crate::feed;

pub async fn run(cfg: &Config) -> Result<()> {
    println!("Fetching {}...", cfg.feed_url);

    let contents = feed::refresh(cfg).await?;
    let events = parse_feed(&contents)?;

    let sessions = events.iter().filter(|e| e.session.is_some()).count();

    println!(
        "{}: cached {} events ({} with session numbers) to {}",
        cfg.calendar_name.bold(),
        events.len(),
        sessions,
        feed::cache_path(cfg).display()
    );

    Ok(())
}
