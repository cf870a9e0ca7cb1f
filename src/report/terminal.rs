use colored::*;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::models::{CategorySummary, LicenseLookup, RankedList, UniqueNames};
use crate::report::Report;

/// Render a report to stdout. `source` names where the packages were read from.
pub fn render(report: &Report, source: &str, quiet: bool) {
    if quiet {
        println!("{}", quiet_line(report));
        return;
    }

    println!("\n {} v{}", "pacfree".bold(), env!("CARGO_PKG_VERSION"));
    println!(" Source: {}\n", source);

    match report {
        Report::Ranked(list) => render_ranked(list),
        Report::Summary(summary) => render_summary(summary),
        Report::Unique(unique) => render_unique(unique),
        Report::Packages(lookup) => render_lookup(lookup),
    }
}

fn quiet_line(report: &Report) -> String {
    match report {
        Report::Ranked(list) => {
            let top = list
                .entries
                .first()
                .map(|e| format!("{} ({})", e.name, format_pct(e.percentage)))
                .unwrap_or_else(|| "-".to_string());
            format!("Licenses: {}  Total: {}  Top: {}", list.entries.len(), list.total, top)
        }
        Report::Summary(s) => format!(
            "Open source: {}  Custom: {}  Other: {}",
            format_pct(s.open_source_pct).green(),
            format_pct(s.custom_pct).yellow(),
            format_pct(s.other_pct).red(),
        ),
        Report::Unique(u) => format!("Licenses: {}", u.count),
        Report::Packages(LicenseLookup::Found { license, count, .. }) => {
            format!("{}: {}", license, count)
        }
        Report::Packages(LicenseLookup::NotFound { license }) => format!("{}: 0", license),
    }
}

fn format_pct(pct: f64) -> String {
    format!("{:05.2}%", pct)
}

fn new_table(headers: &[&str]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(
            headers
                .iter()
                .map(|h| Cell::new(h).add_attribute(Attribute::Bold))
                .collect::<Vec<_>>(),
        );
    table
}

fn render_ranked(list: &RankedList) {
    if list.total == 0 {
        println!(" {} No licenses found.\n", "[INFO]".cyan().bold());
        return;
    }

    let mut table = new_table(&["#", "License", "Packages", "Share"]);

    for (rank, entry) in list.entries.iter().enumerate() {
        table.add_row(vec![
            Cell::new(rank + 1).set_alignment(CellAlignment::Right),
            Cell::new(&entry.name),
            Cell::new(format!("{}/{}", entry.count, list.total))
                .set_alignment(CellAlignment::Right),
            Cell::new(format_pct(entry.percentage)).set_alignment(CellAlignment::Right),
        ]);
    }

    if let Some(other) = &list.other {
        table.add_row(vec![
            Cell::new(""),
            Cell::new("other").fg(Color::DarkGrey),
            Cell::new(format!("{}/{}", other.count, list.total))
                .fg(Color::DarkGrey)
                .set_alignment(CellAlignment::Right),
            Cell::new(format_pct(other.percentage))
                .fg(Color::DarkGrey)
                .set_alignment(CellAlignment::Right),
        ]);
    }

    println!("{}\n", table);
}

fn render_summary(summary: &CategorySummary) {
    println!(" ┌────────────────────────────────────────────────────┐");
    println!(" │  {:<48} │", "SUMMARY".bold());
    println!(
        " │  {:<48} │",
        format!("Packages           : {}", summary.packages)
    );
    println!(
        " │  {:<48} │",
        format!("Without license    : {}", summary.unlicensed)
    );
    println!(
        " │  {:<48} │",
        format!("License entries    : {}", summary.total)
    );
    println!(
        " │  {:<48} │",
        format!(
            "{}  Open source    : {:>4}  {}",
            "✓".green(),
            summary.open_source_count,
            format_pct(summary.open_source_pct)
        )
    );
    println!(
        " │  {:<48} │",
        format!(
            "{}  Custom         : {:>4}  {}",
            "⚠".yellow(),
            summary.custom_count,
            format_pct(summary.custom_pct)
        )
    );
    println!(
        " │  {:<48} │",
        format!(
            "{}  Other          : {:>4}  {}",
            "✗".red(),
            summary.other_count,
            format_pct(summary.other_pct)
        )
    );
    println!(" └────────────────────────────────────────────────────┘\n");
}

fn render_unique(unique: &UniqueNames) {
    println!(" {} {} distinct licenses:\n", "[INFO]".cyan().bold(), unique.count);
    for name in &unique.names {
        println!("  {}", name);
    }
    println!();
}

fn render_lookup(lookup: &LicenseLookup) {
    match lookup {
        LicenseLookup::Found {
            license,
            count,
            packages,
        } => {
            println!(
                " {} Found {} package{} with license \"{}\":\n",
                "[FOUND]".green().bold(),
                count,
                if *count > 1 { "s" } else { "" },
                license
            );
            for package in packages {
                println!("  {}", package);
            }
            println!();
        }
        LicenseLookup::NotFound { license } => {
            println!(
                " {} No packages found with license \"{}\"\n",
                "[NONE]".yellow().bold(),
                license
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RankedEntry;

    #[test]
    fn test_format_pct() {
        assert_eq!(format_pct(50.0), "50.00%");
        assert_eq!(format_pct(2.5), "02.50%");
        assert_eq!(format_pct(100.0), "100.00%");
    }

    #[test]
    fn test_quiet_line_ranked() {
        let report = Report::Ranked(RankedList {
            total: 4,
            entries: vec![RankedEntry {
                name: "MIT".to_string(),
                count: 2,
                percentage: 50.0,
            }],
            other: None,
        });
        assert_eq!(quiet_line(&report), "Licenses: 1  Total: 4  Top: MIT (50.00%)");
    }

    #[test]
    fn test_quiet_line_lookup() {
        let miss = Report::Packages(LicenseLookup::NotFound {
            license: "BSD".to_string(),
        });
        assert_eq!(quiet_line(&miss), "BSD: 0");
    }
}
