//! Interactive menu over a county map.
//!
//! Input is read as whitespace-separated tokens, so a selection and its
//! arguments may share a line or be spread over several. When inserting, the
//! name is whatever remains on the line after the population (or the next
//! line, if nothing does).

use std::io::{self, BufRead, Write};

use avlmap::MapError;
use avlmap::map::AvlTreeMap;
use thiserror::Error;
use tracing::{debug, warn};

use crate::county::County;

const MENU: &str = "0. Show Tree\n\
                    1. Search for a record\n\
                    2. Insert a record\n\
                    3. Delete a record\n\
                    4. List all records\n\
                    5. Exit";

/// Failure of the interactive console.
#[derive(Debug, Error)]
pub enum ConsoleError {
    /// Reading input or writing output failed.
    #[error("console I/O failed: {0}")]
    Io(#[from] io::Error),

    /// The map reported a failure.
    #[error(transparent)]
    Map(#[from] MapError),
}

/// A menu selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Selection {
    ShowTree,
    Search,
    Insert,
    Delete,
    ListAll,
    Exit,
}

impl Selection {
    fn parse(token: &str) -> Option<Self> {
        match token.parse::<u8>().ok()? {
            0 => Some(Self::ShowTree),
            1 => Some(Self::Search),
            2 => Some(Self::Insert),
            3 => Some(Self::Delete),
            4 => Some(Self::ListAll),
            5 => Some(Self::Exit),
            _ => None,
        }
    }
}

/// The menu loop, generic over its input and output streams.
pub struct Console<R, W> {
    map: AvlTreeMap<i32, County>,
    input: R,
    output: W,
    show_steps: bool,
    line: String,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Creates a console over a seeded map.
    pub const fn new(map: AvlTreeMap<i32, County>, input: R, output: W, show_steps: bool) -> Self {
        Self {
            map,
            input,
            output,
            show_steps,
            line: String::new(),
        }
    }

    /// Returns the map in its current state.
    pub const fn map(&self) -> &AvlTreeMap<i32, County> {
        &self.map
    }

    /// Consumes the console, returning its output stream.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Runs the menu until the user exits or the input ends.
    ///
    /// # Errors
    ///
    /// Returns a [`ConsoleError`] if I/O fails or the map reports a
    /// structural failure.
    pub fn run(&mut self) -> Result<(), ConsoleError> {
        writeln!(self.output, "{MENU}")?;
        loop {
            writeln!(self.output, "\nPlease type 0-5 to make a selection")?;
            self.output.flush()?;
            let Some(token) = self.next_token()? else {
                debug!("input ended");
                return Ok(());
            };
            match Selection::parse(&token) {
                Some(Selection::ShowTree) => self.show_tree()?,
                Some(Selection::Search) => self.search()?,
                Some(Selection::Insert) => self.insert()?,
                Some(Selection::Delete) => self.delete()?,
                Some(Selection::ListAll) => self.list_all()?,
                Some(Selection::Exit) => {
                    writeln!(self.output, "Program will now exit")?;
                    return Ok(());
                }
                None => writeln!(self.output, "Please make a valid selection")?,
            }
        }
    }

    // =========================================================================
    // Commands
    // =========================================================================

    fn show_tree(&mut self) -> Result<(), ConsoleError> {
        let rendered = self.map.render_levels()?;
        write!(self.output, "{rendered}")?;
        Ok(())
    }

    fn search(&mut self) -> Result<(), ConsoleError> {
        writeln!(self.output, "Please type the county/state code you want to search")?;
        let Some(code) = self.next_number::<i32>("code")? else {
            return Ok(());
        };
        let traced = self.map.get_traced(&code)?;
        let steps = traced.steps;
        match traced.value {
            Some(county) => writeln!(self.output, "{county}")?,
            None => writeln!(self.output, "The code you entered cannot be found!")?,
        }
        self.report_steps(steps)
    }

    fn insert(&mut self) -> Result<(), ConsoleError> {
        writeln!(
            self.output,
            "Please type the county/state code, population, and county/state name"
        )?;
        let Some(code) = self.next_number::<i32>("code")? else {
            return Ok(());
        };
        let Some(population) = self.next_number::<i64>("population")? else {
            return Ok(());
        };
        let Some(name) = self.rest_of_line()? else {
            return Ok(());
        };
        let traced = self.map.put_traced(code, County::new(code, population, name))?;
        if traced.value.is_some() {
            writeln!(self.output, "Record has been replaced")?;
        } else {
            writeln!(self.output, "Record has been added")?;
        }
        self.report_steps(traced.steps)
    }

    fn delete(&mut self) -> Result<(), ConsoleError> {
        writeln!(self.output, "Please type the code of record to be deleted")?;
        let Some(code) = self.next_number::<i32>("code")? else {
            return Ok(());
        };
        let traced = self.map.remove_traced(&code)?;
        if traced.value.is_some() {
            writeln!(self.output, "Record has been deleted")?;
        } else {
            writeln!(self.output, "The code you entered cannot be found!")?;
        }
        self.report_steps(traced.steps)
    }

    fn list_all(&mut self) -> Result<(), ConsoleError> {
        for county in self.map.values() {
            writeln!(self.output, "{county}")?;
        }
        Ok(())
    }

    fn report_steps(&mut self, steps: usize) -> Result<(), ConsoleError> {
        if self.show_steps {
            writeln!(self.output, "It took: {steps} comparisons")?;
        }
        Ok(())
    }

    // =========================================================================
    // Input
    // =========================================================================

    /// Returns the next whitespace-separated token, reading lines as needed.
    fn next_token(&mut self) -> Result<Option<String>, ConsoleError> {
        loop {
            let trimmed = self.line.trim_start();
            if !trimmed.is_empty() {
                let end = trimmed.find(char::is_whitespace).unwrap_or(trimmed.len());
                let token = trimmed[..end].to_string();
                self.line = trimmed[end..].to_string();
                return Ok(Some(token));
            }
            self.line.clear();
            if self.input.read_line(&mut self.line)? == 0 {
                return Ok(None);
            }
        }
    }

    /// Parses the next token as a number, reporting a bad value to the user.
    fn next_number<T: std::str::FromStr>(
        &mut self,
        field: &str,
    ) -> Result<Option<T>, ConsoleError> {
        let Some(token) = self.next_token()? else {
            return Ok(None);
        };
        if let Ok(number) = token.parse() {
            Ok(Some(number))
        } else {
            warn!(field, token = %token, "rejected non-numeric input");
            writeln!(self.output, "Invalid {field}: {token}")?;
            Ok(None)
        }
    }

    /// Takes the unread remainder of the current line, or the next non-blank
    /// line if nothing remains.
    fn rest_of_line(&mut self) -> Result<Option<String>, ConsoleError> {
        loop {
            let rest = std::mem::take(&mut self.line);
            let rest = rest.trim();
            if !rest.is_empty() {
                return Ok(Some(rest.to_string()));
            }
            if self.input.read_line(&mut self.line)? == 0 {
                return Ok(None);
            }
        }
    }
}
