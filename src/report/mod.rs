//! Renderers for census results.
//!
//! - [`terminal`] — colored tables and a summary box; respects `--quiet`.
//! - JSON output is the [`Report`] value serialized as-is.

use serde::Serialize;

use crate::models::{CategorySummary, LicenseLookup, RankedList, UniqueNames};

pub mod terminal;

/// The result of one run, in whichever view was requested.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum Report {
    Ranked(RankedList),
    Summary(CategorySummary),
    Unique(UniqueNames),
    Packages(LicenseLookup),
}
