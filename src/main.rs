use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Instant;

use anyhow::{Context, Result};
use bcpp_consent::{ConsentConfig, ConsentService, ValidationSummary, load_dataset};
use clap::{Parser, Subcommand};
use log::{info, warn};

/// Command-line arguments for consent-check
#[derive(Parser, Debug)]
#[command(name = "consent-check")]
#[command(about = "Cross-validate and enroll subject consents")]
#[command(version)]
struct Args {
    /// Settings file (TOML)
    #[arg(short, long, global = true, env = "CONSENT_CHECK_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Validate every candidate consent in a dataset
    Validate {
        /// Dataset file (JSON)
        dataset: PathBuf,
        /// Print outcomes as JSON
        #[arg(long)]
        json: bool,
    },
    /// Save every valid candidate consent and print the saved records
    Enroll {
        /// Dataset file (JSON)
        dataset: PathBuf,
    },
}

fn main() -> Result<ExitCode> {
    // Setup logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let config = match &args.config {
        Some(path) => ConsentConfig::from_file(path)
            .with_context(|| format!("Failed to load settings from {}", path.display()))?,
        None => ConsentConfig::default(),
    };

    match args.command {
        Command::Validate { dataset, json } => validate(config, &dataset, json),
        Command::Enroll { dataset } => enroll(config, &dataset),
    }
}

fn validate(config: ConsentConfig, path: &Path, json: bool) -> Result<ExitCode> {
    let dataset = load_dataset(path)?;
    let service = ConsentService::new(config, dataset.store)?;

    let start = Instant::now();
    let outcomes = service.review(&dataset.candidates);
    let summary = ValidationSummary::from_outcomes(&outcomes);
    info!(
        "Reviewed {} consents in {:?}",
        outcomes.len(),
        start.elapsed()
    );

    if json {
        let report = serde_json::json!({ "outcomes": outcomes, "summary": summary });
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        for outcome in &outcomes {
            println!("{outcome}");
        }
        print!("{summary}");
    }

    Ok(if summary.all_valid() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn enroll(config: ConsentConfig, path: &Path) -> Result<ExitCode> {
    let dataset = load_dataset(path)?;
    let mut service = ConsentService::new(config, dataset.store)?;

    let mut rejected = 0usize;
    for consent in dataset.candidates {
        let label = consent.to_string();
        if let Err(e) = service.save(consent) {
            warn!("Not enrolled {label}: {e}");
            rejected += 1;
        }
    }

    let snapshot = service.into_store().snapshot();
    println!("{}", serde_json::to_string_pretty(&snapshot)?);

    if rejected > 0 {
        warn!("{rejected} consents were not enrolled");
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}
