//! Machine-readable summary output.

use serde::Serialize;

use super::RunStatistics;

/// The JSON document printed by `--json` runs.
#[derive(Serialize)]
struct JsonReport {
    #[serde(flatten)]
    statistics: RunStatistics,
    dry_run: bool,
}

/// Renders the final summary as a pretty-printed JSON object.
pub fn render(stats: &RunStatistics, dry_run: bool) -> String {
    let report = JsonReport {
        statistics: *stats,
        dry_run,
    };
    // Serializing a struct of counters and a bool cannot fail.
    serde_json::to_string_pretty(&report).unwrap_or_else(|_| "{}".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_contains_all_counters() {
        let stats = RunStatistics {
            files_processed: 10,
            files_fixed: 3,
            parse_failures: 1,
            write_failures: 0,
        };

        let rendered = render(&stats, true);
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();

        assert_eq!(value["files_processed"], 10);
        assert_eq!(value["files_fixed"], 3);
        assert_eq!(value["parse_failures"], 1);
        assert_eq!(value["write_failures"], 0);
        assert_eq!(value["dry_run"], true);
    }
}
