//! `pacfree` — count, rank and classify the licenses of installed packages.
//!
//! # Flow
//! 1. Parse CLI arguments ([`cli`]) and install logging ([`logger`]).
//! 2. Load config ([`config::load_config`]): classifier list and display limit.
//! 3. Read installed packages from a [`source::PackageSource`].
//! 4. Aggregate them into a [`census::LicenseTable`] and rank it.
//! 5. Build the requested view ([`census::views`]) and render it ([`report`]).

mod census;
mod cli;
mod config;
mod error;
mod license;
mod logger;
mod models;
mod report;
mod source;

use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

use census::{aggregate, rank};
use cli::{Cli, ReportFormat, View};
use config::load_config;
use models::PackageRecord;
use report::Report;
use source::json::JsonManifest;
use source::pacman::LocalDb;
use source::PackageSource;

fn main() -> Result<()> {
    let cli = Cli::parse();
    logger::init_cli_logger(cli.verbose);

    let config = load_config(cli.config.as_deref())?;
    let classifier = config.classifier();
    let view = cli.view(config.display.limit);

    let show_progress = !cli.quiet && matches!(cli.report, ReportFormat::Terminal);
    let (packages, source) = read_packages(&cli, show_progress)?;

    let table = aggregate(&packages);
    let ranking = rank(&table);
    info!(
        packages = table.package_count(),
        licenses = table.len(),
        "census complete"
    );

    let report = match view {
        View::Ranked { limit } => Report::Ranked(ranking.ranked_list(limit)),
        View::Summary => Report::Summary(ranking.category_summary(&classifier)),
        View::Unique => Report::Unique(ranking.unique_names()),
        View::Packages { license } => Report::Packages(ranking.packages_with(&license)),
    };

    match cli.report {
        ReportFormat::Terminal => report::terminal::render(&report, &source, cli.quiet),
        ReportFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }

    Ok(())
}

/// Read every installed package, returning them with a label for the source.
fn read_packages(cli: &Cli, show_progress: bool) -> Result<(Vec<PackageRecord>, String)> {
    let spinner = if show_progress {
        let pb = ProgressBar::new_spinner();
        pb.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);
        pb.set_message("Reading installed packages");
        pb.enable_steady_tick(Duration::from_millis(100));
        Some(pb)
    } else {
        None
    };

    let result = match &cli.from_json {
        Some(path) => {
            let manifest = JsonManifest::new(path);
            manifest
                .list_installed_packages()
                .map(|pkgs| (pkgs, manifest.path().display().to_string()))
                .context("Failed to load package manifest")
        }
        // the database handle is released when `db` goes out of scope
        None => LocalDb::open(&cli.dbpath)
            .context("Failed to open package database")
            .and_then(|db| {
                db.list_installed_packages()
                    .map(|pkgs| (pkgs, db.path().display().to_string()))
                    .context("Failed to read package database")
            }),
    };

    if let Some(pb) = spinner {
        pb.finish_and_clear();
    }

    result
}
