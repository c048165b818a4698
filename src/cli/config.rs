//! Configuration management CLI commands.

use crate::cli::common::{CliError, CliResult};
use crate::config::{Config, ThemeMode};
use clap::{Args, Subcommand};
use serde::Serialize;

/// Configuration management commands
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Display current configuration
    Show(ConfigShowArgs),
    /// Set configuration values
    Set(ConfigSetArgs),
}

/// Display current configuration
#[derive(Args, Debug)]
pub struct ConfigShowArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Set configuration values
#[derive(Args, Debug)]
pub struct ConfigSetArgs {
    /// Base URL for model images (http://, https:// or file://)
    #[arg(long, value_name = "URL")]
    backend_url: Option<String>,

    /// Image shown when a model has no image or it fails to load
    #[arg(long, value_name = "PATH")]
    placeholder: Option<String>,

    /// Theme mode (auto, light, or dark)
    #[arg(long, value_name = "MODE")]
    theme: Option<String>,
}

/// JSON-serializable configuration for output
#[derive(Serialize, Debug)]
struct ConfigOutput<'a> {
    config_file: String,
    assets: AssetsOutput<'a>,
    ui: UiOutput,
}

#[derive(Serialize, Debug)]
struct AssetsOutput<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    backend_url: Option<&'a str>,
    placeholder: &'a str,
}

#[derive(Serialize, Debug)]
struct UiOutput {
    theme: &'static str,
}

impl ConfigArgs {
    /// Execute config subcommand
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            ConfigCommand::Show(args) => args.execute(),
            ConfigCommand::Set(args) => args.execute(),
        }
    }
}

impl ConfigShowArgs {
    /// Execute show command
    pub fn execute(&self) -> CliResult<()> {
        let config = Config::load()
            .map_err(|e| CliError::validation(format!("Failed to load configuration: {e:#}")))?;
        let path = config_file_display()?;

        if self.json {
            output_json(&config, path)?;
        } else {
            output_human_readable(&config, &path);
        }

        Ok(())
    }
}

impl ConfigSetArgs {
    /// Execute set command
    pub fn execute(&self) -> CliResult<()> {
        // At least one argument must be provided
        if self.backend_url.is_none() && self.placeholder.is_none() && self.theme.is_none() {
            return Err(CliError::validation(
                "At least one configuration option must be specified: --backend-url, --placeholder, or --theme",
            ));
        }

        let mut config = Config::load().unwrap_or_else(|e| {
            tracing::warn!(error = %format!("{e:#}"), "existing config unreadable, starting from defaults");
            Config::default()
        });

        if let Some(url) = &self.backend_url {
            config
                .set_backend_url(url.as_str())
                .map_err(|e| CliError::validation(format!("{e:#}")))?;
        }

        if let Some(placeholder) = &self.placeholder {
            if placeholder.trim().is_empty() {
                return Err(CliError::validation("Placeholder image path cannot be empty"));
            }
            config.assets.placeholder.clone_from(placeholder);
        }

        if let Some(theme) = &self.theme {
            config.ui.theme_mode =
                ThemeMode::parse(theme).map_err(|e| CliError::validation(e.to_string()))?;
        }

        config
            .save()
            .map_err(|e| CliError::io(format!("Failed to save configuration: {e:#}")))?;

        println!("Configuration updated successfully.");

        Ok(())
    }
}

fn config_file_display() -> CliResult<String> {
    Config::config_file_path()
        .map(|path| path.display().to_string())
        .map_err(|e| CliError::io(format!("{e:#}")))
}

/// Output configuration in JSON format
fn output_json(config: &Config, config_file: String) -> CliResult<()> {
    let output = ConfigOutput {
        config_file,
        assets: AssetsOutput {
            backend_url: config.assets.backend_url.as_deref(),
            placeholder: &config.assets.placeholder,
        },
        ui: UiOutput {
            theme: config.ui.theme_mode.as_str(),
        },
    };

    let json = serde_json::to_string_pretty(&output)
        .map_err(|e| CliError::io(format!("Failed to serialize configuration to JSON: {e}")))?;

    println!("{json}");
    Ok(())
}

/// Output configuration in human-readable format
fn output_human_readable(config: &Config, config_file: &str) {
    println!("Config file: {config_file}");
    println!();
    println!("Assets:");
    println!(
        "  Backend URL: {}",
        config.assets.backend_url.as_deref().unwrap_or("(not set)")
    );
    println!("  Placeholder: {}", config.assets.placeholder);
    println!();
    println!("UI:");
    println!("  Theme: {}", config.ui.theme_mode.as_str());
}
