use clap::Parser;
use tracing_subscriber::EnvFilter;

use ce_cli::cli::{self, Cli, Command, ConfigCommand};
use ce_domain::config::LoggingConfig;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        // Default to expand when no subcommand is given.
        None => {
            let (config, _) = cli::load_config()?;
            init_cli_tracing(&config.logging);
            expand_or_complain(&config, cli.line.as_deref(), false)
        }
        Some(Command::Expand { line, json }) => {
            let (config, _) = cli::load_config()?;
            init_cli_tracing(&config.logging);
            expand_or_complain(&config, line.as_deref(), json)
        }
        Some(Command::Check { line }) => {
            let (config, _) = cli::load_config()?;
            init_cli_tracing(&config.logging);
            match line {
                Some(line) => cli::check::run(&line),
                None => eprintln!("{}", cli::MISSING_LINE),
            }
            Ok(())
        }
        Some(Command::Config(ConfigCommand::Validate)) => {
            let (config, config_path) = cli::load_config()?;
            let valid = cli::config::validate(&config, &config_path);
            if !valid {
                std::process::exit(1);
            }
            Ok(())
        }
        Some(Command::Config(ConfigCommand::Show)) => {
            let (config, _config_path) = cli::load_config()?;
            cli::config::show(&config)
        }
        Some(Command::Version) => {
            println!("cron-expand {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

fn expand_or_complain(
    config: &ce_domain::config::Config,
    line: Option<&str>,
    json: bool,
) -> anyhow::Result<()> {
    config.ensure_valid()?;
    match line {
        Some(line) => cli::expand::run(config, line, json),
        None => eprintln!("{}", cli::MISSING_LINE),
    }
    Ok(())
}

/// Initialize compact stderr-only tracing.
///
/// `RUST_LOG` wins; otherwise `logging.level` from the config applies, so
/// diagnostic output never pollutes the report on stdout.
fn init_cli_tracing(logging: &LoggingConfig) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&logging.level)),
        )
        .with_writer(std::io::stderr)
        .compact()
        .init();
}
