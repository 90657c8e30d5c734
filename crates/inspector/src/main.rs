pub mod config;
pub mod output;

use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;

/// Inspect NuclearCraft planner (`.ncpf`) files.
#[derive(Debug, Parser)]
#[command(name = "ncpf-inspect", version)]
struct Cli {
    /// Planner file to read
    file: PathBuf,

    /// Output format (defaults to the configured one)
    #[arg(short, long, value_enum)]
    format: Option<output::Format>,

    /// Print only this document (json format)
    #[arg(short, long)]
    document: Option<usize>,

    /// Single-line JSON
    #[arg(long)]
    compact: bool,

    /// Config file instead of `config.toml` next to the executable
    #[arg(long)]
    config: Option<PathBuf>,
}

fn init_logging(config: &config::Config) -> anyhow::Result<()> {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .or_else(|_| tracing_subscriber::EnvFilter::try_new(&config.logging.filter))
        .context("invalid logging filter")?;

    let file_layer = match config::get_log_file_path(config) {
        Some(path) => {
            if let Some(dir) = path.parent() {
                std::fs::create_dir_all(dir)?;
            }
            let log_file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
                .with_context(|| format!("cannot open log file {}", path.display()))?;
            Some(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::sync::Arc::new(log_file))
                    .with_ansi(false),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(file_layer)
        .init();
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let (config, origin) = config::load_config(cli.config.as_deref())?;
    init_logging(&config)?;
    tracing::info!("{}", origin);

    let data = std::fs::read(&cli.file)
        .with_context(|| format!("cannot read {}", cli.file.display()))?;
    tracing::info!("Read {} bytes from {}", data.len(), cli.file.display());

    let format = cli.format.unwrap_or(config.output.format);
    let pretty = config.output.pretty && !cli.compact;
    let text = output::render(&data, format, cli.document, pretty)?;
    println!("{}", text);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_arguments() {
        let cli = Cli::try_parse_from([
            "ncpf-inspect",
            "reactor.ncpf",
            "--format",
            "json",
            "-d",
            "1",
            "--compact",
        ])
        .unwrap();
        assert_eq!(cli.file, PathBuf::from("reactor.ncpf"));
        assert_eq!(cli.format, Some(output::Format::Json));
        assert_eq!(cli.document, Some(1));
        assert!(cli.compact);
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_cli_requires_file() {
        assert!(Cli::try_parse_from(["ncpf-inspect"]).is_err());
        assert!(Cli::try_parse_from(["ncpf-inspect", "f.ncpf", "--format", "xml"]).is_err());
    }
}
