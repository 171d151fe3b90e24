use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::debug;

use appstore_version::config::Config;
use appstore_version::logging::{self, LogFormat};
use appstore_version::release::{ComparisonOutcome, ReleaseAvailable, ReleaseChecker, compare};

#[derive(Parser)]
#[command(name = "appstore-version")]
#[command(version, about = "Check the App Store for a newer release of an app")]
struct Cli {
    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Look up the published release and compare it with the running version
    Check {
        /// Bundle identifier of the app (e.g. com.example.app)
        bundle_id: String,
        /// Version currently installed
        current_version: String,
        /// Store country code; defaults to the configured country
        #[arg(long)]
        country: Option<String>,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
        /// Path to a JSON config file
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Compare two version strings without any lookup
    Compare { current: String, available: String },
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    let format = if cli.log_json {
        LogFormat::Json
    } else {
        LogFormat::Text
    };
    let _guard = logging::init(format);

    match cli.command {
        Command::Check {
            bundle_id,
            current_version,
            country,
            json,
            config,
        } => {
            let config = Config::load(config.as_deref())?;
            let country = country.unwrap_or(config.country);
            debug!("Checking {} {} in store {}", bundle_id, current_version, country);

            let checker = ReleaseChecker::itunes(&config.lookup)?;
            let result = tokio::runtime::Builder::new_multi_thread()
                .enable_all()
                .build()?
                .block_on(checker.check(&bundle_id, &current_version, &country));

            match result {
                Ok(release) => {
                    if json {
                        println!(
                            "{}",
                            serde_json::to_string_pretty(&release)
                                .context("Failed to serialize result")?
                        );
                    } else {
                        println!("{}", describe_release(&release));
                    }
                    Ok(ExitCode::SUCCESS)
                }
                Err(e) => {
                    eprintln!("{e}");
                    Ok(ExitCode::FAILURE)
                }
            }
        }
        Command::Compare { current, available } => {
            println!("{}", describe_outcome(compare(&current, &available)));
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn describe_outcome(outcome: ComparisonOutcome) -> String {
    match outcome {
        ComparisonOutcome::NoNewVersion => "Up to date".to_string(),
        ComparisonOutcome::NewVersion(kind) => format!("Update available ({kind})"),
    }
}

fn describe_release(release: &ReleaseAvailable) -> String {
    let mut line = describe_outcome(release.outcome);
    if release.is_new_version() {
        let name = release.metadata.app_name.as_deref().unwrap_or("app");
        let version = release.metadata.version.as_deref().unwrap_or_default();
        line.push_str(&format!(": {name} {version}"));
    }
    line
}
