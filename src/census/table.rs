use std::collections::HashMap;

use tracing::debug;

use crate::models::{LicenseEntry, PackageRecord};

/// License name → aggregated entry, remembering the order entries were created.
#[derive(Debug, Default)]
pub struct LicenseTable {
    index: HashMap<String, usize>,
    entries: Vec<LicenseEntry>,
    total: usize,
    packages: usize,
    unlicensed: usize,
}

impl LicenseTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record every license of one package.
    ///
    /// The package always counts toward [`package_count`](Self::package_count),
    /// even when it carries no license at all.
    pub fn add_package(&mut self, package: &PackageRecord) {
        self.packages += 1;
        if package.licenses.is_empty() {
            debug!(package = %package.name, "package has no license");
            self.unlicensed += 1;
            return;
        }

        for license in &package.licenses {
            self.record(license, &package.name);
        }
    }

    fn record(&mut self, license: &str, package: &str) {
        self.total += 1;

        if let Some(&idx) = self.index.get(license) {
            let entry = &mut self.entries[idx];
            entry.count += 1;
            entry.packages.push(package.to_string());
            return;
        }

        self.index.insert(license.to_string(), self.entries.len());
        self.entries.push(LicenseEntry {
            name: license.to_string(),
            count: 1,
            packages: vec![package.to_string()],
        });
    }

    /// Exact, case-sensitive lookup.
    pub fn get(&self, license: &str) -> Option<&LicenseEntry> {
        self.index.get(license).map(|&idx| &self.entries[idx])
    }

    /// Entries in creation order.
    pub fn entries(&self) -> &[LicenseEntry] {
        &self.entries
    }

    /// Number of `(package, license)` associations; the denominator of every percentage.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Number of packages processed, including those without a license.
    pub fn package_count(&self) -> usize {
        self.packages
    }

    pub fn unlicensed_count(&self) -> usize {
        self.unlicensed
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Build a [`LicenseTable`] from packages in source order.
pub fn aggregate<'a, I>(packages: I) -> LicenseTable
where
    I: IntoIterator<Item = &'a PackageRecord>,
{
    let mut table = LicenseTable::new();
    for package in packages {
        table.add_package(package);
    }

    debug!(
        licenses = table.len(),
        associations = table.total(),
        packages = table.package_count(),
        "license table built"
    );

    table
}
