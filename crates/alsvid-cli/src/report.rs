//! Rendering counts as a probability report.

use std::fmt::Write as _;

use console::style;

use alsvid_hal::Counts;

/// Render a counts histogram as a table.
///
/// Every entry is emitted exactly once: bitstring, raw count, percentage
/// of total, and a bar. Rows are sorted by descending count (ties broken
/// by bitstring) purely for stable display; the histogram itself has no
/// order. A zero-shot histogram renders without any probability math.
pub fn render_report(counts: &Counts, title: &str) -> String {
    let mut out = String::new();

    let total = counts.total_shots();
    let _ = writeln!(out, "{title}");

    if total == 0 {
        let _ = writeln!(out, "  (no shots recorded)");
        let _ = writeln!(out, "  Total shots: 0");
        return out;
    }

    #[allow(clippy::cast_precision_loss)]
    for (bitstring, &count) in counts.sorted() {
        let percent = count as f64 / total as f64 * 100.0;
        let bar_len = (percent / 2.0).round() as usize;
        let bar: String = "█".repeat(bar_len);

        let _ = writeln!(out, "  {bitstring}: {count:>6} ({percent:>5.2}%) {bar}");
    }

    let _ = writeln!(out, "  Total shots: {total}");
    out
}

/// Print a rendered report with a styled check mark.
pub fn print_report(counts: &Counts, title: &str) {
    let titled = format!("{} {}", style("✓").green().bold(), title);
    print!("\n{}", render_report(counts, &titled));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_entry_emitted_once() {
        let counts = Counts::from_pairs([("00", 480), ("11", 500), ("01", 20)]);
        let report = render_report(&counts, "results");

        assert_eq!(report.matches("00:").count(), 1);
        assert_eq!(report.matches("11:").count(), 1);
        assert_eq!(report.matches("01:").count(), 1);
        assert!(report.contains("Total shots: 1000"));
    }

    #[test]
    fn test_percentages() {
        let counts = Counts::from_pairs([("0", 250), ("1", 750)]);
        let report = render_report(&counts, "results");

        assert!(report.contains("(25.00%)"));
        assert!(report.contains("(75.00%)"));
    }

    #[test]
    fn test_sorted_by_count_descending() {
        let counts = Counts::from_pairs([("01", 100), ("10", 700), ("00", 200)]);
        let report = render_report(&counts, "results");

        let pos_10 = report.find("10:").unwrap();
        let pos_00 = report.find("00:").unwrap();
        let pos_01 = report.find("01:").unwrap();
        assert!(pos_10 < pos_00 && pos_00 < pos_01);
    }

    #[test]
    fn test_zero_shots_no_division() {
        let report = render_report(&Counts::new(), "empty run");

        assert!(report.contains("(no shots recorded)"));
        assert!(report.contains("Total shots: 0"));
        assert!(!report.contains('%'));
    }
}
