//! Quiz settings and on-disk configuration.
//!
//! Settings are an immutable value handed to the playback controller when a
//! quiz starts; the app never writes them back. They come from
//! `quizdeck.toml` (see [`load_config_from`]).

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Length of the pre-reveal "answering starts in Ns" phase.
pub const DEFAULT_THINK_TIME_SECS: u32 = 15;

/// Display and playback toggles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Disable reordering and shuffling.
    #[serde(default)]
    pub lock_order: bool,
    /// Show question text in listings.
    #[serde(default = "default_true")]
    pub show_questions: bool,
    /// Show answers in listings.
    #[serde(default = "default_true")]
    pub reveal_answers: bool,
    /// Reveal the answer automatically after the think time plus
    /// `auto_reveal_secs`.
    #[serde(default)]
    pub auto_reveal: bool,
    #[serde(default = "default_auto_reveal_secs")]
    pub auto_reveal_secs: u32,
    /// Advance to the next question `auto_next_secs` after the answer shows.
    #[serde(default)]
    pub auto_next: bool,
    #[serde(default = "default_auto_next_secs")]
    pub auto_next_secs: u32,
    /// Fixed delay before the reveal countdown starts. Kept separate from
    /// `auto_reveal_secs`.
    #[serde(default = "default_think_time")]
    pub think_time_secs: u32,
    /// Title printed at the top of the question report.
    #[serde(default = "default_report_title")]
    pub report_title: String,
}

fn default_true() -> bool {
    true
}
fn default_auto_reveal_secs() -> u32 {
    10
}
fn default_auto_next_secs() -> u32 {
    5
}
fn default_think_time() -> u32 {
    DEFAULT_THINK_TIME_SECS
}
fn default_report_title() -> String {
    "Quiz Questions".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            lock_order: false,
            show_questions: true,
            reveal_answers: true,
            auto_reveal: false,
            auto_reveal_secs: default_auto_reveal_secs(),
            auto_next: false,
            auto_next_secs: default_auto_next_secs(),
            think_time_secs: default_think_time(),
            report_title: default_report_title(),
        }
    }
}

impl Settings {
    /// Enable auto-reveal with the given reveal countdown.
    pub fn with_auto_reveal(mut self, secs: u32) -> Self {
        self.auto_reveal = true;
        self.auto_reveal_secs = secs;
        self
    }

    /// Enable auto-next with the given countdown.
    pub fn with_auto_next(mut self, secs: u32) -> Self {
        self.auto_next = true;
        self.auto_next_secs = secs;
        self
    }

    pub fn with_think_time(mut self, secs: u32) -> Self {
        self.think_time_secs = secs;
        self
    }
}

/// Top-level quizdeck configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizdeckConfig {
    /// File backing durable storage.
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,
    #[serde(default)]
    pub settings: Settings,
}

fn default_data_file() -> PathBuf {
    PathBuf::from("quizdeck-data.json")
}

impl Default for QuizdeckConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            settings: Settings::default(),
        }
    }
}

/// Load configuration from well-known paths.
///
/// Search order:
/// 1. `quizdeck.toml` in the current directory
/// 2. `~/.config/quizdeck/config.toml`
///
/// `QUIZDECK_DATA` overrides `data_file`.
pub fn load_config() -> Result<QuizdeckConfig> {
    load_config_from(None)
}

/// Load config from an explicit path, or search the default locations.
pub fn load_config_from(path: Option<&Path>) -> Result<QuizdeckConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("quizdeck.toml");
        if local.exists() {
            Some(local)
        } else {
            dirs_path()
                .map(|home| home.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    let mut config = match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            let config = parse_config(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?;
            tracing::debug!("loaded config from {}", path.display());
            config
        }
        None => QuizdeckConfig::default(),
    };

    if let Ok(data) = std::env::var("QUIZDECK_DATA") {
        if !data.is_empty() {
            config.data_file = PathBuf::from(data);
        }
    }

    Ok(config)
}

/// Parse a TOML config string.
pub fn parse_config(content: &str) -> Result<QuizdeckConfig> {
    Ok(toml::from_str(content)?)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("quizdeck"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_settings() {
        let s = Settings::default();
        assert!(!s.lock_order);
        assert!(s.show_questions);
        assert!(s.reveal_answers);
        assert!(!s.auto_reveal);
        assert!(!s.auto_next);
        assert_eq!(s.think_time_secs, 15);
    }

    #[test]
    fn parse_partial_config() {
        let toml_str = r#"
data_file = "quiz/data.json"

[settings]
lock_order = true
auto_reveal = true
auto_reveal_secs = 20
"#;
        let config = parse_config(toml_str).unwrap();
        assert_eq!(config.data_file, PathBuf::from("quiz/data.json"));
        assert!(config.settings.lock_order);
        assert!(config.settings.auto_reveal);
        assert_eq!(config.settings.auto_reveal_secs, 20);
        assert_eq!(config.settings.think_time_secs, 15);
        assert!(config.settings.show_questions);
    }

    #[test]
    fn parse_empty_config() {
        let config = parse_config("").unwrap();
        assert_eq!(config, QuizdeckConfig::default());
    }

    #[test]
    fn explicit_missing_config_is_an_error() {
        let err = load_config_from(Some(Path::new("/nonexistent/quizdeck.toml"))).unwrap_err();
        assert!(err.to_string().contains("config file not found"));
    }

    #[test]
    fn builder_helpers() {
        let s = Settings::default()
            .with_auto_reveal(3)
            .with_auto_next(2)
            .with_think_time(0);
        assert!(s.auto_reveal && s.auto_next);
        assert_eq!((s.auto_reveal_secs, s.auto_next_secs, s.think_time_secs), (3, 2, 0));
    }
}
