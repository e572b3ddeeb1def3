//! Row-to-entity parsing helpers.
//!
//! Every repo needs to convert `libsql::Row` (column-indexed) into typed entity
//! structs. These helpers isolate the parsing logic and the timestamp text
//! format shared by writes and range predicates.

use chrono::{DateTime, SecondsFormat, Utc};

use crate::error::DatabaseError;

/// Format a timestamp for storage or for binding as a query parameter.
///
/// Always `YYYY-MM-DDTHH:MM:SS.ffffffZ`. Every stored timestamp has the same
/// width and offset, so `<`, `>=` and `BETWEEN` on the TEXT columns compare
/// chronologically. Sub-microsecond precision is dropped.
#[must_use]
pub fn format_datetime(dt: DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// Parse a required TEXT column as `DateTime<Utc>`.
///
/// Handles both RFC 3339 (`"2026-02-09T14:30:00.000000Z"`) and `SQLite`'s default
/// format (`"2026-02-09 14:30:00"`).
///
/// # Errors
///
/// Returns `DatabaseError::Query` if the string cannot be parsed as either format.
pub fn parse_datetime(s: &str) -> Result<DateTime<Utc>, DatabaseError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    chrono::NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
        .map(|naive| naive.and_utc())
        .map_err(|e| DatabaseError::Query(format!("Failed to parse datetime '{s}': {e}")))
}

/// Parse a TEXT column into a serde-deserializable enum.
///
/// Works with `TaskStatus`, whose serde form is also its storage form.
///
/// # Errors
///
/// Returns `DatabaseError::Query` if the string does not match any enum variant.
pub fn parse_enum<T: serde::de::DeserializeOwned>(s: &str) -> Result<T, DatabaseError> {
    serde_json::from_value(serde_json::Value::String(s.to_string()))
        .map_err(|e| DatabaseError::Query(format!("Failed to parse enum from '{s}': {e}")))
}

/// Read a nullable TEXT column. Returns `None` for both SQL NULL and empty string.
///
/// `row.get::<String>(idx)` on a NULL column returns an error, not `""`.
/// You must use `get::<Option<String>>()` for nullable columns.
///
/// # Errors
///
/// Returns `DatabaseError` if the column read fails.
pub fn get_opt_string(row: &libsql::Row, idx: i32) -> Result<Option<String>, DatabaseError> {
    match row.get::<Option<String>>(idx)? {
        Some(s) if s.is_empty() => Ok(None),
        other => Ok(other),
    }
}

/// Decode the `tasks.links` JSON array column.
///
/// # Errors
///
/// Returns `DatabaseError::Query` if the text is not a JSON array of strings.
pub fn parse_links(s: &str) -> Result<Vec<String>, DatabaseError> {
    if s.is_empty() {
        return Ok(Vec::new());
    }
    serde_json::from_str(s)
        .map_err(|e| DatabaseError::Query(format!("Invalid links JSON in column: {e}")))
}

/// Read a `COUNT(*)` result from the first column of the first row.
///
/// # Errors
///
/// Returns `DatabaseError::NoResult` when the query yields no row, or
/// `DatabaseError::Query` if the count is negative.
pub async fn read_count(mut rows: libsql::Rows) -> Result<u64, DatabaseError> {
    let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
    let count = row.get::<i64>(0)?;
    u64::try_from(count).map_err(|e| DatabaseError::Query(format!("Invalid count {count}: {e}")))
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use faculty_core::enums::TaskStatus;

    use super::*;

    #[test]
    fn format_is_fixed_width() {
        let whole = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        let fractional = whole + chrono::Duration::microseconds(1);
        assert_eq!(format_datetime(whole), "2025-01-01T00:00:00.000000Z");
        assert_eq!(format_datetime(fractional), "2025-01-01T00:00:00.000001Z");
        assert!(format_datetime(whole) < format_datetime(fractional));
    }

    #[test]
    fn format_drops_nanoseconds() {
        let dt = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap()
            + chrono::Duration::nanoseconds(1_500);
        assert_eq!(format_datetime(dt), "2025-01-01T00:00:00.000001Z");
    }

    #[test]
    fn parse_roundtrips_format() {
        let dt = Utc.with_ymd_and_hms(2025, 2, 1, 12, 30, 0).unwrap();
        assert_eq!(parse_datetime(&format_datetime(dt)).unwrap(), dt);
    }

    #[test]
    fn parse_accepts_sqlite_default_format() {
        let dt = parse_datetime("2025-02-01 12:30:00").unwrap();
        assert_eq!(dt, Utc.with_ymd_and_hms(2025, 2, 1, 12, 30, 0).unwrap());
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(matches!(parse_datetime("yesterday"), Err(DatabaseError::Query(_))));
    }

    #[test]
    fn parse_enum_reads_storage_form() {
        let status: TaskStatus = parse_enum("IN_PROGRESS").unwrap();
        assert_eq!(status, TaskStatus::InProgress);
        assert!(parse_enum::<TaskStatus>("in_progress").is_err());
    }

    #[test]
    fn parse_links_handles_empty_and_array() {
        assert!(parse_links("").unwrap().is_empty());
        assert_eq!(
            parse_links(r#"["https://a.example.edu"]"#).unwrap(),
            vec!["https://a.example.edu".to_string()]
        );
        assert!(parse_links("{}").is_err());
    }
}
