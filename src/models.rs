use serde::{Deserialize, Serialize};

/// One installed package as reported by a [`PackageSource`](crate::source::PackageSource).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackageRecord {
    pub name: String,
    /// License identifiers in the order the package database lists them.
    #[serde(default)]
    pub licenses: Vec<String>,
}

impl PackageRecord {
    pub fn new<N, I, L>(name: N, licenses: I) -> Self
    where
        N: Into<String>,
        I: IntoIterator<Item = L>,
        L: Into<String>,
    {
        Self {
            name: name.into(),
            licenses: licenses.into_iter().map(Into::into).collect(),
        }
    }
}

/// Aggregated usage of a single license identifier.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LicenseEntry {
    pub name: String,
    pub count: usize,
    /// Package names carrying this license, in the order they were seen.
    pub packages: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedEntry {
    pub name: String,
    pub count: usize,
    pub percentage: f64,
}

/// Everything past the display limit, folded into one row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OtherBucket {
    pub count: usize,
    pub percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedList {
    /// Total number of (package, license) associations.
    pub total: usize,
    pub entries: Vec<RankedEntry>,
    /// Present only when the list was truncated to a limit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub other: Option<OtherBucket>,
}

/// Open-source / custom / other breakdown over the whole table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategorySummary {
    pub total: usize,
    pub packages: usize,
    pub unlicensed: usize,
    pub open_source_count: usize,
    pub custom_count: usize,
    pub other_count: usize,
    pub open_source_pct: f64,
    pub custom_pct: f64,
    pub other_pct: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UniqueNames {
    pub count: usize,
    pub names: Vec<String>,
}

/// Result of looking up the packages that carry one license.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum LicenseLookup {
    Found {
        license: String,
        count: usize,
        packages: Vec<String>,
    },
    NotFound {
        license: String,
    },
}
