use anyhow::{Context, Result};
use examline_core::exams::ExamTable;
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Deserialize)]
pub struct Config {
    /// URL of the university's public iCalendar feed
    pub feed_url: String,

    /// Name the cache file and output files are keyed by
    pub calendar_name: String,

    /// Directory the raw feed is cached in
    #[serde(default = "default_cache_dir")]
    pub cache_dir: String,

    /// Title slide of the rendered timeline
    #[serde(default)]
    pub title: TitleConfig,

    /// Course name -> final/midterm session numbers
    #[serde(default)]
    pub courses: ExamTable,
}

#[derive(Debug, Deserialize)]
pub struct TitleConfig {
    #[serde(default = "default_title_headline")]
    pub headline: String,
    #[serde(default = "default_title_text")]
    pub text: String,
}

impl Default for TitleConfig {
    fn default() -> Self {
        TitleConfig {
            headline: default_title_headline(),
            text: default_title_text(),
        }
    }
}

fn default_cache_dir() -> String {
    "~/.cache/examline".to_string()
}

fn default_title_headline() -> String {
    "Exam timeline".to_string()
}

fn default_title_text() -> String {
    "Final and midterm dates matched from the calendar feed".to_string()
}

/// Get the config directory path (~/.config/examline)
pub fn config_dir() -> Result<PathBuf> {
    let config_dir = dirs::config_dir()
        .context("Could not determine config directory")?
        .join("examline");
    Ok(config_dir)
}

/// Get the config file path (~/.config/examline/config.toml)
pub fn config_path() -> Result<PathBuf> {
    Ok(config_dir()?.join("config.toml"))
}

/// Load config from ~/.config/examline/config.toml
pub fn load_config() -> Result<Config> {
    let path = config_path()?;

    if !path.exists() {
        anyhow::bail!(
            "Config file not found at {}\n\n\
            Create it with your feed URL and exam sessions:\n\n\
            feed_url = \"https://example.edu/calendarFeed/.../learn.ics\"\n\
            calendar_name = \"My University\"\n\n\
            [courses.\"MATRICES & LINEAR TRANSFORMATIONS\"]\n\
            final = 30\n\
            midterm = 14\n",
            path.display()
        );
    }

    let contents = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config file at {}", path.display()))?;

    let config: Config = toml::from_str(&contents)
        .with_context(|| format!("Failed to parse config file at {}", path.display()))?;

    Ok(config)
}

/// Expand ~ in paths to the home directory
pub fn expand_path(path: &str) -> PathBuf {
    if path.starts_with("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(&path[2..]);
        }
    }
    PathBuf::from(path)
}
