//! Command-line argument parsing for the replay binary
//!
//! Supports:
//! - Replaying a YAML or JSON session script
//! - Loading an explicit config file
//! - Simulating a failing persistence backend
//! - Writing the default config

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::config::DragConfig;

/// Replay drag sessions against the Harmoniq drag engine
#[derive(Parser, Debug)]
#[command(
    name = "harmoniq-drag",
    version,
    about = "Replay drag sessions against the Harmoniq drag engine"
)]
pub struct CliArgs {
    /// Session script to replay (.yaml, .yml or .json)
    #[arg(value_name = "SCRIPT")]
    pub script: Option<PathBuf>,

    /// Use this config file instead of ~/.config/harmoniq/drag.yaml
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Make every persistence call fail with a network error
    #[arg(long)]
    pub fail_persist: bool,

    /// Output format of the final snapshot
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Yaml)]
    pub format: OutputFormat,

    /// Write the default config to the config path and exit
    #[arg(long)]
    pub init_config: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Yaml,
    Json,
}

/// What the binary should do
#[derive(Debug, Clone, PartialEq)]
pub enum StartupMode {
    /// Write the default config file
    InitConfig,
    /// Replay a script and print the final state
    Replay(PathBuf),
}

/// Configuration derived from CLI arguments
#[derive(Debug, Clone)]
pub struct StartupConfig {
    pub mode: StartupMode,
    /// Explicit config file, if given
    pub config_path: Option<PathBuf>,
    pub fail_persist: bool,
    pub format: OutputFormat,
}

impl CliArgs {
    /// Convert parsed CLI args into startup configuration
    pub fn into_config(self) -> Result<StartupConfig, String> {
        let mode = match (self.init_config, self.script) {
            (true, None) => StartupMode::InitConfig,
            (true, Some(_)) => {
                return Err("--init-config cannot be combined with a script".to_string())
            }
            (false, Some(path)) => StartupMode::Replay(path),
            (false, None) => {
                return Err("Nothing to do: pass a script or --init-config".to_string())
            }
        };

        Ok(StartupConfig {
            mode,
            config_path: self.config,
            fail_persist: self.fail_persist,
            format: self.format,
        })
    }
}

impl StartupConfig {
    /// Load the drag config from the explicit path, or the default location
    pub fn load_drag_config(&self) -> Result<DragConfig, String> {
        match &self.config_path {
            Some(path) => DragConfig::load_from(path),
            None => Ok(DragConfig::load()),
        }
    }
}
