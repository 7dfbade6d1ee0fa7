//! Seeding a county map from comma-separated records.
//!
//! Each non-blank line has the form `<code>,<population>,"<name>"`. The name
//! is quoted and may itself contain commas.

use std::io::BufRead;

use avlmap::MapError;
use avlmap::map::AvlTreeMap;
use thiserror::Error;
use tracing::{debug, info};

use crate::county::County;

/// Failure while reading seed records.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The underlying reader failed.
    #[error("failed to read records: {0}")]
    Io(#[from] std::io::Error),

    /// A line did not match the record format.
    #[error("line {line}: {reason}")]
    Malformed {
        /// One-based line number.
        line: usize,
        /// What was wrong with the line.
        reason: RecordError,
    },

    /// The map rejected a record.
    #[error("line {line}: {source}")]
    Map {
        /// One-based line number.
        line: usize,
        /// The map failure.
        source: MapError,
    },
}

/// Why a single record line could not be parsed.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RecordError {
    /// Fewer than three comma-separated fields.
    #[error("expected `code,population,\"name\"`")]
    MissingField,

    /// A numeric field did not parse.
    #[error("invalid {field} `{value}`")]
    InvalidNumber {
        /// Which field was invalid.
        field: &'static str,
        /// The offending text.
        value: String,
    },

    /// The name was not enclosed in double quotes.
    #[error("name must be enclosed in double quotes")]
    UnquotedName,
}

/// Parses one record line.
///
/// # Errors
///
/// Returns a [`RecordError`] describing the first problem found.
pub fn parse_record(line: &str) -> Result<County, RecordError> {
    let mut fields = line.splitn(3, ',');
    let (Some(code), Some(population), Some(name)) = (fields.next(), fields.next(), fields.next())
    else {
        return Err(RecordError::MissingField);
    };

    let code = parse_number(code, "code")?;
    let population = parse_number(population, "population")?;
    let name = name
        .trim()
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
        .ok_or(RecordError::UnquotedName)?;

    Ok(County::new(code, population, name))
}

fn parse_number<T: std::str::FromStr>(text: &str, field: &'static str) -> Result<T, RecordError> {
    let text = text.trim();
    text.parse().map_err(|_| RecordError::InvalidNumber {
        field,
        value: text.to_string(),
    })
}

/// Reads every record from `reader` into `map`, keyed by code.
///
/// Blank lines are skipped. A later record with a known code replaces the
/// earlier one. Returns the number of records read.
///
/// # Errors
///
/// Stops at the first unreadable or malformed line.
pub fn seed_map<R: BufRead>(reader: R, map: &mut AvlTreeMap<i32, County>) -> Result<usize, LoadError> {
    let mut count = 0;
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let number = index + 1;
        if line.trim().is_empty() {
            continue;
        }
        let county = parse_record(&line).map_err(|reason| LoadError::Malformed {
            line: number,
            reason,
        })?;
        debug!(code = county.code, line = number, "seeding record");
        map.put(county.code, county)
            .map_err(|source| LoadError::Map {
                line: number,
                source,
            })?;
        count += 1;
    }
    info!(records = count, entries = map.len(), "seeded county map");
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_parse_record_with_comma_in_name() {
        let county = parse_record(r#"1001,55869,"Autauga County, AL""#).unwrap();
        assert_eq!(county, County::new(1001, 55869, "Autauga County, AL"));
    }

    #[rstest]
    #[case("1001,55869", RecordError::MissingField)]
    #[case("abc,1,\"X\"", RecordError::InvalidNumber { field: "code", value: "abc".to_string() })]
    #[case("1, many ,\"X\"", RecordError::InvalidNumber { field: "population", value: "many".to_string() })]
    #[case("1,2,X", RecordError::UnquotedName)]
    fn test_parse_record_errors(#[case] line: &str, #[case] expected: RecordError) {
        assert_eq!(parse_record(line), Err(expected));
    }

    #[rstest]
    fn test_seed_map_skips_blank_lines_and_reports_line_numbers() {
        let input = "1,10,\"A\"\n\n2,20,\"B\"\n3,oops,\"C\"\n";
        let mut map = AvlTreeMap::new();

        let error = seed_map(input.as_bytes(), &mut map).unwrap_err();

        assert!(matches!(error, LoadError::Malformed { line: 4, .. }));
        assert_eq!(map.len(), 2);
    }

    #[rstest]
    fn test_seed_map_counts_records() {
        let input = "5,1,\"E\"\n1,1,\"A\"\n5,2,\"E2\"\n";
        let mut map = AvlTreeMap::new();

        assert_eq!(seed_map(input.as_bytes(), &mut map).unwrap(), 3);
        assert_eq!(map.len(), 2);
        assert_eq!(map.peek(&5).unwrap().map(|county| county.population), Some(2));
    }
}
