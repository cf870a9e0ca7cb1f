//! Package sources: where the list of installed packages comes from.
//!
//! Each source returns every package with its license identifiers, in a
//! deterministic order. Failing to produce that list is fatal for the run.

use crate::error::SourceError;
use crate::models::PackageRecord;

pub mod json;
pub mod pacman;

pub trait PackageSource {
    fn list_installed_packages(&self) -> Result<Vec<PackageRecord>, SourceError>;
}
