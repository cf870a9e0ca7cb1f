use crate::census::table::LicenseTable;
use crate::models::LicenseEntry;

/// Table entries ordered by descending count.
///
/// Entries with the same count keep the order in which they were first
/// created, so truncating to the top N is reproducible for a given input.
#[derive(Debug)]
pub struct Ranking<'a> {
    table: &'a LicenseTable,
    order: Vec<&'a LicenseEntry>,
}

impl<'a> Ranking<'a> {
    /// Entries in rank order.
    pub fn entries(&self) -> &[&'a LicenseEntry] {
        &self.order
    }

    pub fn table(&self) -> &'a LicenseTable {
        self.table
    }

    /// Number of `(package, license)` associations in the underlying table.
    pub fn total(&self) -> usize {
        self.table.total()
    }
}

/// Rank the entries of `table`.
pub fn rank(table: &LicenseTable) -> Ranking<'_> {
    let mut order: Vec<&LicenseEntry> = table.entries().iter().collect();
    // sort_by is stable: ties stay in creation order
    order.sort_by(|a, b| b.count.cmp(&a.count));

    Ranking { table, order }
}
