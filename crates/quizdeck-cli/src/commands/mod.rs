//! Subcommand implementations.

pub mod edit;
pub mod host;
pub mod init;
pub mod list;
pub mod play;
pub mod settings;
pub mod transfer;

use std::path::PathBuf;

use anyhow::{Context, Result};

use quizdeck_core::settings::{load_config_from, QuizdeckConfig};
use quizdeck_core::storage::FileStorage;
use quizdeck_core::QuizApp;

/// Flags shared by every subcommand.
pub struct GlobalOpts {
    pub config: Option<PathBuf>,
    pub data: Option<PathBuf>,
}

impl GlobalOpts {
    /// Load the config, applying `--data` over the file and environment.
    pub fn load_config(&self) -> Result<QuizdeckConfig> {
        let mut config = load_config_from(self.config.as_deref())?;
        if let Some(data) = &self.data {
            config.data_file = data.clone();
        }
        Ok(config)
    }

    /// Open the app against the configured data file.
    pub fn open_app(&self) -> Result<QuizApp<FileStorage>> {
        let config = self.load_config()?;
        let storage = FileStorage::open(&config.data_file)
            .with_context(|| format!("failed to open data file {}", config.data_file.display()))?;
        let app = QuizApp::open(storage, config.settings)
            .with_context(|| format!("failed to load questions from {}", config.data_file.display()))?;
        tracing::debug!(
            path = %config.data_file.display(),
            questions = app.questions().len(),
            host = app.is_host(),
            "opened data file"
        );
        Ok(app)
    }
}
