use anyhow::{Context, Result};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use pmdetect::{
    config::Config,
    output::{print_result, OutputFormat},
    platform::current_search_path,
    Reporter,
};
use std::path::PathBuf;
use std::process::ExitCode;
use std::str::FromStr;
use std::time::Duration;

/// Exit codes
mod exit_codes {
    pub const SUCCESS: u8 = 0;
    pub const ERROR: u8 = 1;
}

mod version {
    pub const SHORT_VERSION_NUM: &str = "0.0.1";
    pub const VERSION_NAME: &str = "November 18th, 2024";
    pub const DEV_MARKER: &str = "-alpha";

    pub fn full() -> String {
        format!("v{}{} ( {})", SHORT_VERSION_NUM, DEV_MARKER, VERSION_NAME)
    }
}

#[derive(Parser)]
#[command(name = "pmdetect")]
#[command(
    author,
    about = "Detect installed package managers by scanning PATH",
    disable_version_flag = true
)]
struct Cli {
    /// Print the version number of this tool
    #[arg(short = 'v', long = "version")]
    version: bool,

    /// Output format (table, json)
    #[arg(short, long)]
    format: Option<String>,

    /// Read configuration from this file instead of the default location
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log each directory as it is scanned
    #[arg(long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(exit_codes::ERROR)
        }
    }
}

async fn run() -> Result<u8> {
    let cli = Cli::parse();

    if cli.version {
        println!("{}", version::full());
        return Ok(exit_codes::SUCCESS);
    }

    init_logging(cli.debug);

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load().context("Failed to load configuration")?,
    };

    let format_str = cli.format.unwrap_or_else(|| config.default_format.clone());
    let format = OutputFormat::from_str(&format_str).map_err(|e| anyhow::anyhow!(e))?;
    let is_interactive = format == OutputFormat::Table;

    let directories = current_search_path();
    let reporter = Reporter::from_config(&config);

    let progress = if is_interactive {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .context("Invalid progress template")?,
        );
        pb.enable_steady_tick(Duration::from_millis(100));
        pb.set_message(format!(
            "Scanning {} search path directories...",
            directories.len()
        ));
        Some(pb)
    } else {
        None
    };

    let result = reporter.report_directories(&directories).await;

    if let Some(pb) = progress {
        pb.finish_and_clear();
    }

    print_result(&result, format)?;

    Ok(exit_codes::SUCCESS)
}

fn init_logging(debug: bool) {
    use tracing_subscriber::EnvFilter;

    let default = if debug { "pmdetect=debug" } else { "pmdetect=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}
