//! County record type.

use std::fmt;

/// A county (or state) record keyed by its numeric code.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct County {
    /// Numeric county/state code, unique per record.
    pub code: i32,
    /// Resident population.
    pub population: i64,
    /// Display name.
    pub name: String,
}

impl County {
    /// Creates a new record.
    pub fn new(code: i32, population: i64, name: impl Into<String>) -> Self {
        Self {
            code,
            population,
            name: name.into(),
        }
    }
}

impl fmt::Display for County {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "Code: {} - Population: {} - Name: {}",
            self.code, self.population, self.name
        )
    }
}
