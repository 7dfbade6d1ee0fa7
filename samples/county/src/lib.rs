//! County record browser.
//!
//! Seeds an [`AvlTreeMap`](avlmap::map::AvlTreeMap) keyed by county code from
//! a text file and serves an interactive menu to search, insert, delete and
//! list records, optionally reporting how many key comparisons each lookup
//! took.

pub mod config;
pub mod console;
pub mod county;
pub mod loader;

pub use config::ConsoleConfig;
pub use console::{Console, ConsoleError};
pub use county::County;
pub use loader::{LoadError, RecordError, parse_record, seed_map};
