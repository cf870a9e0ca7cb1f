//! Read-only views over a [`Ranking`].
//!
//! Every percentage is `count * 100 / total`, where `total` is the number of
//! `(package, license)` associations. An empty table yields zero percentages
//! rather than dividing by zero.

use crate::census::rank::Ranking;
use crate::license::classifier::{Classifier, CUSTOM_LICENSE};
use crate::models::{
    CategorySummary, LicenseLookup, OtherBucket, RankedEntry, RankedList, UniqueNames,
};

fn percentage(count: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 * 100.0 / total as f64
    }
}

impl Ranking<'_> {
    /// Ranked entries with their share of all associations.
    ///
    /// With `Some(k)` only the first `k` entries are returned and the rest
    /// are folded into an `other` bucket, so the listed counts plus
    /// `other.count` always add up to the total.
    pub fn ranked_list(&self, limit: Option<usize>) -> RankedList {
        let total = self.total();
        let shown = limit.unwrap_or(usize::MAX);

        let entries: Vec<RankedEntry> = self
            .entries()
            .iter()
            .take(shown)
            .map(|e| RankedEntry {
                name: e.name.clone(),
                count: e.count,
                percentage: percentage(e.count, total),
            })
            .collect();

        let other = limit.map(|_| {
            let listed: usize = entries.iter().map(|e| e.count).sum();
            let count = total - listed;
            OtherBucket {
                count,
                percentage: percentage(count, total),
            }
        });

        RankedList {
            total,
            entries,
            other,
        }
    }

    /// Split all associations into open-source, `custom` and everything else.
    ///
    /// The buckets never overlap: `custom` stays in its own bucket even if the
    /// classifier lists it. `other_pct` is derived as the remainder so the
    /// three shares add up to 100 whenever the table is non-empty.
    pub fn category_summary(&self, classifier: &Classifier) -> CategorySummary {
        let table = self.table();
        let total = table.total();

        let open_source_count: usize = self
            .entries()
            .iter()
            .filter(|e| e.name != CUSTOM_LICENSE && classifier.is_open_source(&e.name))
            .map(|e| e.count)
            .sum();
        let custom_count = table.get(CUSTOM_LICENSE).map_or(0, |e| e.count);
        let other_count = total - open_source_count - custom_count;

        let open_source_pct = percentage(open_source_count, total);
        let custom_pct = percentage(custom_count, total);
        let other_pct = if total == 0 {
            0.0
        } else {
            100.0 - open_source_pct - custom_pct
        };

        CategorySummary {
            total,
            packages: table.package_count(),
            unlicensed: table.unlicensed_count(),
            open_source_count,
            custom_count,
            other_count,
            open_source_pct,
            custom_pct,
            other_pct,
        }
    }

    /// Distinct license names in rank order.
    pub fn unique_names(&self) -> UniqueNames {
        let names: Vec<String> = self.entries().iter().map(|e| e.name.clone()).collect();
        UniqueNames {
            count: names.len(),
            names,
        }
    }

    /// Packages carrying exactly `license`. A miss is a normal result.
    pub fn packages_with(&self, license: &str) -> LicenseLookup {
        match self.table().get(license) {
            Some(entry) => LicenseLookup::Found {
                license: entry.name.clone(),
                count: entry.count,
                packages: entry.packages.clone(),
            },
            None => LicenseLookup::NotFound {
                license: license.to_string(),
            },
        }
    }
}
