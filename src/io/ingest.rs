//! Time-statistic file ingest.
//!
//! Each non-blank line has the shape `Category:Label<TAB>Value`, e.g.
//! `Hour:14\t37` or `Week Day: Mon\t120`. Parsing is strict: the first bad
//! line aborts the whole load and nothing is skipped except blank lines.

use std::fs;
use std::path::Path;

use tracing::{debug, info, warn};

use crate::domain::{Category, Record};
use crate::error::{AppError, EXIT_INPUT, ParseError};

/// Where the upstream job writes its output.
pub const DEFAULT_INPUT_PATH: &str = "output/TimeStatistic.txt";

/// Read the whole input file. The handle is closed before this returns.
pub fn read_input(path: &Path) -> Result<String, AppError> {
    fs::read_to_string(path).map_err(|e| {
        AppError::new(
            EXIT_INPUT,
            format!("Failed to read input '{}': {e}", path.display()),
        )
    })
}

/// Read and parse an input file.
pub fn load_records(path: &Path) -> Result<Vec<Record>, AppError> {
    let text = read_input(path)?;
    debug!(path = %path.display(), bytes = text.len(), "read input");

    let records = parse_records(&text)?;
    info!(path = %path.display(), records = records.len(), "parsed input");
    Ok(records)
}

/// Parse every non-blank line of `text` into a record, in order.
pub fn parse_records(text: &str) -> Result<Vec<Record>, ParseError> {
    let mut records = Vec::new();
    for (idx, raw) in text.split('\n').enumerate() {
        let line = raw.strip_suffix('\r').unwrap_or(raw);
        if line.trim().is_empty() {
            continue;
        }
        let record = parse_line(line, idx + 1)
            .inspect_err(|err| warn!(line = err.line(), "rejecting malformed input"))?;
        records.push(record);
    }
    Ok(records)
}

/// Parse one line. `line_no` is only used for error reporting.
pub fn parse_line(line: &str, line_no: usize) -> Result<Record, ParseError> {
    let tabs = line.matches('\t').count();
    let Some((key, value)) = line.split_once('\t').filter(|_| tabs == 1) else {
        return Err(ParseError::TabCount {
            line: line_no,
            found: tabs,
        });
    };

    let colons = key.matches(':').count();
    let Some((name, label)) = key.split_once(':').filter(|_| colons == 1) else {
        return Err(ParseError::ColonCount {
            line: line_no,
            key: key.to_string(),
            found: colons,
        });
    };

    // The category name must match exactly; only the label may carry padding.
    let category = Category::from_name(name).ok_or_else(|| ParseError::UnknownCategory {
        line: line_no,
        name: name.to_string(),
    })?;

    let value = value.trim();
    let value = value.parse::<i64>().map_err(|_| ParseError::InvalidValue {
        line: line_no,
        value: value.to_string(),
    })?;

    Ok(Record {
        category,
        label: label.trim().to_string(),
        value,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn parses_hour_line() {
        let record = parse_line("Hour:14\t37", 1).unwrap();
        assert_eq!(
            record,
            Record {
                category: Category::Hour,
                label: "14".to_string(),
                value: 37,
            }
        );
    }

    #[test]
    fn trims_label_after_colon() {
        let record = parse_line("Week Day: Mon\t120", 1).unwrap();
        assert_eq!(record.category, Category::WeekDay);
        assert_eq!(record.label, "Mon");
        assert_eq!(record.value, 120);
    }

    #[test]
    fn padded_category_name_is_unknown() {
        let err = parse_line(" Hour:1\t2", 3).unwrap_err();
        assert_eq!(
            err,
            ParseError::UnknownCategory {
                line: 3,
                name: " Hour".to_string(),
            }
        );

        let err = parse_line("Week Day :Mon\t2", 1).unwrap_err();
        assert!(matches!(err, ParseError::UnknownCategory { .. }));
    }

    #[test]
    fn missing_tab_is_fatal() {
        let err = parse_records("Day:01\t3\nDay:02 4\n").unwrap_err();
        assert_eq!(err, ParseError::TabCount { line: 2, found: 0 });
    }

    #[test]
    fn extra_tab_is_fatal() {
        let err = parse_line("Day:01\t3\t4", 9).unwrap_err();
        assert_eq!(err, ParseError::TabCount { line: 9, found: 2 });
    }

    #[test]
    fn key_needs_exactly_one_colon() {
        let err = parse_line("Hour\t3", 1).unwrap_err();
        assert!(matches!(err, ParseError::ColonCount { found: 0, .. }));

        let err = parse_line("Hour:12:30\t3", 1).unwrap_err();
        assert!(matches!(err, ParseError::ColonCount { found: 2, .. }));
    }

    #[test]
    fn non_integer_value_is_fatal() {
        let err = parse_line("Month:Jan\t3.5", 4).unwrap_err();
        assert_eq!(
            err,
            ParseError::InvalidValue {
                line: 4,
                value: "3.5".to_string(),
            }
        );
    }

    #[test]
    fn unknown_category_is_fatal() {
        let err = parse_line("Year:2015\t10", 2).unwrap_err();
        assert_eq!(
            err,
            ParseError::UnknownCategory {
                line: 2,
                name: "Year".to_string(),
            }
        );
    }

    #[test]
    fn skips_blank_lines_and_handles_crlf() {
        let text = "\n  \nDay:01\t3\r\n\r\nHour:00\t-2\r\n\n";
        let records = parse_records(text).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].label, "01");
        assert_eq!(records[1].category, Category::Hour);
        assert_eq!(records[1].value, -2);
    }

    #[test]
    fn error_line_numbers_count_blank_lines() {
        let err = parse_records("\nDay:01\t3\n\nDay:02\tx").unwrap_err();
        assert_eq!(err.line(), 4);
    }

    #[test]
    fn load_records_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "Hour:14\t37\nMonth:Jul\t8").unwrap();

        let records = load_records(file.path()).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].category, Category::Month);
    }

    #[test]
    fn missing_file_uses_input_exit_code() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_records(&dir.path().join("nope.txt")).unwrap_err();
        assert_eq!(err.exit_code(), EXIT_INPUT);
    }

    #[test]
    fn malformed_file_uses_parse_exit_code() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "Hour:14 37").unwrap();

        let err = load_records(file.path()).unwrap_err();
        assert_eq!(err.exit_code(), crate::error::EXIT_PARSE);
    }
}
