use std::path::PathBuf;

use clap::Parser;

use crate::source::pacman::DEFAULT_DBPATH;

#[derive(Parser, Debug)]
#[command(
    name = "pacfree",
    about = "Report license usage across installed packages",
    version
)]
pub struct Cli {
    /// Show every license instead of the top entries plus "other"
    #[arg(short, long, conflicts_with_all = ["license", "summary", "unique", "limit"])]
    pub all: bool,

    /// Number of licenses to show before folding the rest into "other" [default: 5, or display.limit from config]
    #[arg(short = 'n', long, value_name = "N", conflicts_with_all = ["license", "summary", "unique"])]
    pub limit: Option<usize>,

    /// List the packages that carry exactly this license
    #[arg(short, long, value_name = "LICENSE", conflicts_with_all = ["summary", "unique"])]
    pub license: Option<String>,

    /// Show the open-source / custom / other breakdown
    #[arg(short, long, conflicts_with = "unique")]
    pub summary: bool,

    /// List the distinct license names
    #[arg(short, long)]
    pub unique: bool,

    /// pacman database directory
    #[arg(long, value_name = "PATH", default_value = DEFAULT_DBPATH)]
    pub dbpath: PathBuf,

    /// Read packages from a JSON manifest instead of the pacman database
    #[arg(long = "from-json", value_name = "FILE", conflicts_with = "dbpath")]
    pub from_json: Option<PathBuf>,

    /// Config file [default: ~/.config/pacfree/config.toml]
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Report format
    #[arg(long, default_value = "terminal", value_name = "FORMAT")]
    pub report: ReportFormat,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Only print a one-line summary
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(Debug, Clone, clap::ValueEnum)]
pub enum ReportFormat {
    Terminal,
    Json,
}

/// The single view a run produces.
#[derive(Debug, Clone, PartialEq)]
pub enum View {
    Ranked { limit: Option<usize> },
    Summary,
    Unique,
    Packages { license: String },
}

impl Cli {
    /// Resolve the requested view; `default_limit` applies when no view flag is given.
    pub fn view(&self, default_limit: usize) -> View {
        if let Some(license) = &self.license {
            View::Packages {
                license: license.clone(),
            }
        } else if self.summary {
            View::Summary
        } else if self.unique {
            View::Unique
        } else if self.all {
            View::Ranked { limit: None }
        } else {
            View::Ranked {
                limit: Some(self.limit.unwrap_or(default_limit)),
            }
        }
    }
}
