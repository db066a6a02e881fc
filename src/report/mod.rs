//! Final report rendering
//!
//! After all workers have joined, the frozen snapshot is rendered into a
//! flat text document: the error count with one `fragment : message` line
//! per failure, then the processed count with one `fragment : offsets`
//! line per success. Lines are sorted by fragment so reruns over the same
//! input produce identical reports.

use crate::store::Snapshot;
use std::fmt::Write as _;
use std::path::Path;

/// Renders the final flat-text report
pub fn render_report(snapshot: &Snapshot) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{} Urls Errored out.", snapshot.errors.len());
    for (fragment, message) in &snapshot.errors {
        let _ = writeln!(out, "{} : {}", fragment, message);
    }

    let _ = writeln!(out, "{} Urls Processed.", snapshot.results.len());
    for (fragment, offsets) in &snapshot.results {
        let _ = writeln!(out, "{} : {:?}", fragment, offsets);
    }

    out
}

/// Writes the rendered report, overwriting any previous run's report
pub fn write_report(path: &Path, report: &str) -> std::io::Result<()> {
    std::fs::write(path, report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn sample_snapshot() -> Snapshot {
        let mut snapshot = Snapshot::default();
        snapshot
            .results
            .insert("google.com".to_string(), vec![4, 19]);
        snapshot.results.insert("twitter.com".to_string(), vec![]);
        snapshot.errors.insert(
            "facebook.com".to_string(),
            "Fetch failed: HTTP 500".to_string(),
        );
        snapshot
    }

    #[test]
    fn test_report_format() {
        let report = render_report(&sample_snapshot());
        let lines: Vec<&str> = report.lines().collect();

        assert_eq!(lines[0], "1 Urls Errored out.");
        assert_eq!(lines[1], "facebook.com : Fetch failed: HTTP 500");
        assert_eq!(lines[2], "2 Urls Processed.");
        assert_eq!(lines[3], "google.com : [4, 19]");
        assert_eq!(lines[4], "twitter.com : []");
    }

    #[test]
    fn test_empty_snapshot() {
        let report = render_report(&Snapshot::default());
        assert_eq!(report, "0 Urls Errored out.\n0 Urls Processed.\n");
    }

    #[test]
    fn test_write_report() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("results.txt");

        write_report(&path, "first").unwrap();
        write_report(&path, "second").unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "second");
    }
}
