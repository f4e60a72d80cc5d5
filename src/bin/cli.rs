//! Book monitor CLI
//!
//! Runs exactly one monitoring pass. Meant to be re-invoked by an external
//! scheduler such as cron.

use std::path::{Path, PathBuf};

use book_monitor::{
    error::Result,
    models::Config,
    pipeline,
    services::{HttpFetcher, Notifier, SmtpNotifier},
};
use clap::Parser;

/// Checks product pages and emails a status report
#[derive(Parser, Debug)]
#[command(name = "book-monitor", version, about = "Product page stock and review monitor")]
struct Cli {
    /// Config file, .toml or .json [default: config.toml, else config.json]
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Print the report instead of emailing it
    #[arg(long)]
    dry_run: bool,
}

/// Prints the report to stdout in place of sending it.
struct StdoutNotifier;

impl Notifier for StdoutNotifier {
    fn send(&self, subject: &str, body: &str, recipients: &[String]) -> Result<()> {
        println!("To: {}", recipients.join(", "));
        println!("Subject: {subject}\n");
        print!("{body}");
        Ok(())
    }
}

/// Initialize logging based on verbosity flag.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    log::info!("Book monitor starting...");

    let config_path = cli
        .config
        .unwrap_or_else(|| Config::default_path(Path::new(".")));
    let config = Config::load(&config_path).inspect_err(|e| log::error!("{e}"))?;
    log::info!("Loaded configuration from {}", config_path.display());

    let fetcher = HttpFetcher::new(&config.monitor)?;

    let result = if cli.dry_run {
        pipeline::run_monitor(&config, &fetcher, &StdoutNotifier)
    } else {
        pipeline::run_monitor(&config, &fetcher, &SmtpNotifier::new(&config.smtp))
    };
    let summary = result.inspect_err(|e| log::error!("{e}"))?;

    log::info!(
        "Checked {} target(s): {} failed, {} issue(s), notification {}",
        summary.checks.len(),
        summary.failure_count(),
        summary.report.issues.len(),
        if summary.notified { "sent" } else { "skipped" }
    );

    Ok(())
}
