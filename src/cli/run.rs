//! Interactive wizard command.

use crate::app;
use crate::cli::catalog::load_catalog;
use crate::cli::common::{CliError, CliResult};
use crate::config::Config;
use clap::Args;
use std::path::PathBuf;

/// Start the booking wizard
#[derive(Args, Debug)]
pub struct RunArgs {
    /// Path to catalog JSON file
    #[arg(short, long, value_name = "FILE")]
    pub catalog: PathBuf,

    /// Write the confirmed booking here instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Base URL for model images (overrides config and environment)
    #[arg(long, value_name = "URL")]
    pub backend_url: Option<String>,
}

impl RunArgs {
    /// Resolves the effective configuration for this run.
    ///
    /// Precedence: `--backend-url`, then `VANPICK_BACKEND_URL`, then the
    /// config file.
    pub fn resolve_config(&self) -> CliResult<Config> {
        let mut config = Config::load()
            .map_err(|e| CliError::validation(format!("Failed to load configuration: {e:#}")))?;

        config
            .apply_env_overrides()
            .map_err(|e| CliError::validation(format!("{e:#}")))?;

        if let Some(url) = &self.backend_url {
            config
                .set_backend_url(url.as_str())
                .map_err(|e| CliError::validation(format!("{e:#}")))?;
        }

        Ok(config)
    }

    /// Execute the run command
    pub fn execute(&self) -> CliResult<()> {
        let config = self.resolve_config()?;
        let catalog = load_catalog(&self.catalog)?;

        tracing::info!(
            catalog = %self.catalog.display(),
            backend_url = ?config.assets.backend_url,
            "starting booking wizard"
        );

        app::run_booking_wizard_terminal(
            &config,
            catalog,
            &self.catalog,
            self.output.as_deref(),
        )
        .map_err(|e| CliError::io(format!("{e:#}")))
    }
}
