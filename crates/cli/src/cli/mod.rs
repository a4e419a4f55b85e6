pub mod check;
pub mod config;
pub mod expand;

use clap::{Parser, Subcommand};

/// cron-expand: show the concrete values each field of a cron line denotes.
#[derive(Debug, Parser)]
#[command(name = "cron-expand", version, about, args_conflicts_with_subcommands = true)]
pub struct Cli {
    /// Cron line to expand, quoted as one argument
    /// (e.g. "*/15 0 1,15 * 1-5 /usr/bin/find").
    pub line: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Expand a cron line and print one row per field (default when no
    /// subcommand is given).
    Expand {
        /// The cron line, quoted as one argument.
        line: Option<String>,
        /// Print a JSON object instead of the padded table.
        #[arg(long)]
        json: bool,
    },
    /// Report whether a cron line is valid and, if not, which part failed.
    Check {
        /// The cron line, quoted as one argument.
        line: Option<String>,
    },
    /// Configuration utilities.
    #[command(subcommand)]
    Config(ConfigCommand),
    /// Print version information.
    Version,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Parse the config file and report any errors.
    Validate,
    /// Dump the resolved configuration (with defaults) as TOML.
    Show,
}

/// Printed to stderr when no cron line was supplied.
pub const MISSING_LINE: &str = "No cron pattern supplied";

// ── Config loading helper ─────────────────────────────────────────────

/// Load the configuration from the path specified by `CE_CONFIG` (or
/// `cron-expand.toml` by default). Returns the parsed [`Config`] and the
/// path that was used.
///
/// [`Config`]: ce_domain::config::Config
pub fn load_config() -> anyhow::Result<(ce_domain::config::Config, String)> {
    let config_path =
        std::env::var("CE_CONFIG").unwrap_or_else(|_| "cron-expand.toml".into());
    let config = load_config_from(&config_path)?;
    Ok((config, config_path))
}

/// Read and parse `path`; a missing file yields the defaults.
pub fn load_config_from(path: &str) -> anyhow::Result<ce_domain::config::Config> {
    if !std::path::Path::new(path).exists() {
        return Ok(ce_domain::config::Config::default());
    }
    let raw = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("reading {path}: {e}"))?;
    toml::from_str(&raw).map_err(|e| anyhow::anyhow!("parsing {path}: {e}"))
}
