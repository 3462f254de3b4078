//! Output formatting for the two output modes.

use serde_json::json;
use staff_roster::Record;

use crate::state::Output;

/// How results are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Aligned table and short sentences
    Human,
    /// One JSON value per command
    Json,
}

/// Format a successful command result.
pub fn format_output(output: &Output, mode: OutputMode) -> String {
    match mode {
        OutputMode::Human => format_human(output),
        OutputMode::Json => format_json(output),
    }
}

/// Format a failure message.
pub fn format_error(message: &str, mode: OutputMode) -> String {
    match mode {
        OutputMode::Human => format!("(error) {}", message),
        OutputMode::Json => json!({ "error": message }).to_string(),
    }
}

fn format_human(output: &Output) -> String {
    match output {
        Output::Records(records) => format_table(records),
        Output::Record(Some(record)) => format_table(std::slice::from_ref(record)),
        Output::Record(None) => "(nil)".to_string(),
        Output::Added(record) => format!("Added {}", record),
        Output::Renamed(record) => format!("Updated {}", record),
        Output::Deleted(id) => format!("Deleted {}", id),
        Output::Saved(path) => format!("Saved to {}", path.display()),
    }
}

fn format_table(records: &[Record]) -> String {
    if records.is_empty() {
        return "(empty list)".to_string();
    }
    let width = records
        .iter()
        .map(|r| r.id.to_string().len())
        .max()
        .unwrap_or(0);
    records
        .iter()
        .map(|r| format!("{:>width$}  {}", r.id, r.name, width = width))
        .collect::<Vec<_>>()
        .join("\n")
}

fn format_json(output: &Output) -> String {
    let value = match output {
        Output::Records(records) => json!(records),
        Output::Record(record) => json!(record),
        Output::Added(record) => json!({ "added": record }),
        Output::Renamed(record) => json!({ "updated": record }),
        Output::Deleted(id) => json!({ "deleted": id }),
        Output::Saved(path) => json!({ "saved": path.display().to_string() }),
    };
    value.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_human_table_aligns_ids() {
        let out = Output::Records(vec![Record::new(7, "A"), Record::new(700, "B")]);
        assert_eq!(format_output(&out, OutputMode::Human), "  7  A\n700  B");
    }

    #[test]
    fn test_human_empty_and_nil() {
        assert_eq!(
            format_output(&Output::Records(vec![]), OutputMode::Human),
            "(empty list)"
        );
        assert_eq!(
            format_output(&Output::Record(None), OutputMode::Human),
            "(nil)"
        );
        assert_eq!(
            format_output(&Output::Added(Record::new(6, "Frank")), OutputMode::Human),
            "Added 6: Frank"
        );
    }

    #[test]
    fn test_json_shapes() {
        let out = Output::Records(vec![Record::new(1, "Alice")]);
        assert_eq!(
            format_output(&out, OutputMode::Json),
            r#"[{"id":1,"name":"Alice"}]"#
        );
        assert_eq!(
            format_output(&Output::Deleted(3), OutputMode::Json),
            r#"{"deleted":3}"#
        );
        assert_eq!(
            format_output(&Output::Saved(PathBuf::from("a.csv")), OutputMode::Json),
            r#"{"saved":"a.csv"}"#
        );
    }

    #[test]
    fn test_errors() {
        assert_eq!(
            format_error("record 9 was not found", OutputMode::Human),
            "(error) record 9 was not found"
        );
        assert_eq!(
            format_error("bad", OutputMode::Json),
            r#"{"error":"bad"}"#
        );
    }
}
