//! Naive CSV parsing for published-sheet exports.
//!
//! Two variants exist on purpose: [`parse`] is the primary path and
//! [`parse_lenient`] the retry path taken when the primary yields nothing.
//! Neither implements RFC 4180 quoting; a comma inside a field shifts every
//! column after it. Rows shorter than the header default the missing
//! trailing fields to empty strings.

use std::collections::HashMap;

use crate::model::UserRecord;

/// Primary parser: first line is the header row, headers and values trimmed,
/// blank lines are *not* filtered (they become all-empty records).
#[must_use]
pub fn parse(text: &str) -> Vec<UserRecord> {
    let mut lines = text.trim().lines();
    let Some(header_line) = lines.next() else {
        return Vec::new();
    };
    let headers: Vec<String> = header_line
        .split(',')
        .map(|header| header.trim().to_string())
        .collect();

    lines
        .map(|line| {
            let values: Vec<&str> = line.split(',').map(str::trim).collect();
            record_from(&headers, &values)
        })
        .collect()
}

/// Alternate parser: blank lines filtered, headers lower-cased. Fewer than
/// two non-blank lines yields no records.
#[must_use]
pub fn parse_lenient(text: &str) -> Vec<UserRecord> {
    let lines: Vec<&str> = text
        .split('\n')
        .filter(|line| !line.trim().is_empty())
        .collect();
    if lines.len() < 2 {
        return Vec::new();
    }

    let headers: Vec<String> = lines[0]
        .split(',')
        .map(|header| header.trim().to_lowercase())
        .collect();

    lines[1..]
        .iter()
        .map(|line| {
            let values: Vec<&str> = line.split(',').map(str::trim).collect();
            record_from(&headers, &values)
        })
        .collect()
}

fn record_from(headers: &[String], values: &[&str]) -> UserRecord {
    let mut fields = HashMap::with_capacity(headers.len());
    for (index, header) in headers.iter().enumerate() {
        let value = values.get(index).copied().unwrap_or("");
        fields.insert(header.clone(), value.to_string());
    }
    UserRecord::from_fields(fields)
}
