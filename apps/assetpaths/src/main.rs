use anyhow::{Context, Result};
use assetpaths_config::{Config, Environment, build_from_config};
use clap::{Parser, Subcommand};
use colored::Colorize;
use log::{debug, info};
use std::io::{BufWriter, Write};
use std::time::Instant;

#[derive(Parser)]
#[command(name = "assetpaths")]
#[command(about = "Resolve build paths and app entry points for multi-app frontend builds", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Print the resolved paths config as JSON for the bundler configuration
    Paths(Config),
    /// List the app entry points discovered under the source path
    Entries(Config),
}

fn main() -> Result<()> {
    env_logger::init();

    // stdio is blocked by LineWriter, use a BufWriter to reduce syscalls.
    // See https://github.com/rust-lang/rust/issues/60673
    let mut stdout = BufWriter::new(std::io::stdout());

    let cli = Cli::parse();
    debug!("Parsed CLI arguments: {:?}", cli.command);

    let env = Environment::from_process();
    let cwd = std::env::current_dir().context("Failed to read the current directory")?;

    let start = Instant::now();

    match cli.command {
        Commands::Paths(cfg) => {
            let paths = build_from_config(&cfg, &env, &cwd)?;
            info!("Resolved paths for {}", paths.app_path.display());
            assetpaths_config::write_json(&mut stdout, &paths)?;
        }
        Commands::Entries(cfg) => {
            let paths = build_from_config(&cfg, &env, &cwd)?;
            assetpaths_config::print_entries(&mut stdout, &paths)?;

            writeln!(
                stdout,
                "{} Finished in {}ms.",
                "●".bright_blue(),
                start.elapsed().as_millis().to_string().cyan()
            )?;
        }
    }

    stdout.flush()?;
    Ok(())
}
