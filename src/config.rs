//! Configuration loaded from TOML and the command line
//!
//! Lookup order: `--config <file>`, `<working-copy>/.svn-panel.toml`,
//! `~/.svn-panel/config.toml`. Missing files fall back to defaults.

use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::Parser;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::model::ResourceOrder;
use crate::svn::SvnCliOptions;
use crate::svn::constants::SVN_COMMAND;

/// Per-working-copy config file name
pub const LOCAL_CONFIG_FILE: &str = ".svn-panel.toml";

/// Directory for user-level data (config, logs)
pub const USER_DIR: &str = ".svn-panel";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config TOML: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Which resources the change counter includes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CountBadge {
    #[default]
    All,
    Off,
}

/// Command-line arguments
#[derive(Debug, Parser)]
#[command(name = "svn-panel", version, about = "Subversion changes panel for the terminal")]
pub struct Cli {
    /// Working copy to open
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Config file (overrides the lookup order)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// svn binary
    #[arg(long, env = "SVN_PANEL_SVN", value_name = "PATH")]
    pub svn: Option<PathBuf>,

    /// Timeout for one svn command, in seconds
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Do not refresh on file changes
    #[arg(long)]
    pub no_watch: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub svn_command: PathBuf,
    pub username: Option<String>,
    pub password: Option<String>,
    pub non_interactive: bool,
    pub command_timeout_secs: u64,
    pub max_output_bytes: usize,
    pub resource_order: ResourceOrder,
    pub count_badge: CountBadge,
    pub auto_refresh_on_change: bool,
    /// Program and arguments; `{base}` and `{working}` are substituted
    pub diff_command: Vec<String>,
    /// Editor for opening files; the file is shown read-only when unset
    pub editor: Option<String>,
    pub log_dir: Option<PathBuf>,
    pub log_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            svn_command: PathBuf::from(SVN_COMMAND),
            username: None,
            password: None,
            non_interactive: true,
            command_timeout_secs: 120,
            max_output_bytes: 10 * 1024 * 1024,
            resource_order: ResourceOrder::default(),
            count_badge: CountBadge::default(),
            auto_refresh_on_change: true,
            diff_command: ["diff", "-u", "{base}", "{working}"]
                .into_iter()
                .map(String::from)
                .collect(),
            editor: None,
            log_dir: None,
            log_level: None,
        }
    }
}

impl Config {
    /// Command-line values win over file values
    pub fn apply_cli(&mut self, cli: &Cli) {
        if let Some(ref svn) = cli.svn {
            self.svn_command = svn.clone();
        }
        if let Some(secs) = cli.timeout {
            self.command_timeout_secs = secs;
        }
        if cli.no_watch {
            self.auto_refresh_on_change = false;
        }
    }

    /// Executor settings for a working copy
    pub fn svn_options(&self, working_dir: PathBuf) -> SvnCliOptions {
        SvnCliOptions {
            program: self.svn_command.clone(),
            working_dir,
            username: self.username.clone(),
            password: self.password.clone(),
            non_interactive: self.non_interactive,
            timeout: Duration::from_secs(self.command_timeout_secs),
            max_output_bytes: self.max_output_bytes,
        }
    }

    pub fn log_dir(&self) -> PathBuf {
        self.log_dir.clone().unwrap_or_else(|| {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(USER_DIR)
                .join("logs")
        })
    }

    /// Diff program and its arguments for two files, `None` if unset
    pub fn diff_argv(&self, base: &Path, working: &Path) -> Option<(String, Vec<String>)> {
        let (program, args) = self.diff_command.split_first()?;
        let base = base.to_string_lossy();
        let working = working.to_string_lossy();
        let args = args
            .iter()
            .map(|a| a.replace("{base}", &base).replace("{working}", &working))
            .collect();
        Some((program.clone(), args))
    }
}

/// `~/.svn-panel/config.toml`
pub fn user_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(USER_DIR).join("config.toml"))
}

/// Load the configuration for `working_copy`
///
/// An explicit file must exist; the implicit locations are optional.
pub fn load_config(explicit: Option<&Path>, working_copy: &Path) -> Result<Config, ConfigError> {
    if let Some(path) = explicit {
        return load_from(path);
    }

    let candidates =
        std::iter::once(working_copy.join(LOCAL_CONFIG_FILE)).chain(user_config_path());
    for candidate in candidates {
        if candidate.is_file() {
            return load_from(&candidate);
        }
    }

    debug!("no config file found; using defaults");
    Ok(Config::default())
}

pub fn load_from(path: &Path) -> Result<Config, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let config: Config = toml::from_str(&content)?;
    debug!("loaded config from {}", path.display());
    Ok(config)
}
