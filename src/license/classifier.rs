use std::collections::HashSet;

use crate::license::defaults::DEFAULT_OPEN_SOURCE;

/// Reserved license name that package maintainers use for bespoke terms.
///
/// The category summary reports it as its own bucket; the classifier itself
/// never treats it specially.
pub const CUSTOM_LICENSE: &str = "custom";

/// Decides whether a license identifier counts as open source.
#[derive(Debug, Clone)]
pub struct Classifier {
    open_source: HashSet<String>,
}

impl Classifier {
    /// Build a classifier from an explicit reference list.
    pub fn new<I, S>(open_source: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            open_source: open_source.into_iter().map(Into::into).collect(),
        }
    }

    /// Add identifiers on top of the current reference list.
    pub fn extend<I, S>(&mut self, extra: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.open_source.extend(extra.into_iter().map(Into::into));
    }

    /// Exact, case-sensitive membership test. Unknown names are simply not open source.
    pub fn is_open_source(&self, name: &str) -> bool {
        self.open_source.contains(name)
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new(DEFAULT_OPEN_SOURCE.iter().copied())
    }
}
