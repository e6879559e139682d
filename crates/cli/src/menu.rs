// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Interactive menu loop.
//!
//! Input and output are passed in explicitly, so the whole dialog can be
//! driven from an in-memory buffer. End of input at any prompt ends the
//! session.

use std::io::{self, BufRead, Write};

use quiniela_api::{ExportResponse, ImportResponse, Quiniela};
use quiniela_domain::MatchRecord;
use quiniela_persistence::LineStore;

use crate::view;

const MENU_TITLE: &str = "Quiniela 1-X-2";

/// Prompts for the three fields of a new record, in fill order.
const FIELD_PROMPTS: [&str; 3] = ["Home team", "Away team", "Outcome (1, X, 2)"];

/// A main menu entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOption {
    Add,
    Remove,
    List,
    Export,
    Import,
    Clear,
    Exit,
}

impl MenuOption {
    /// All options, in the order they are shown.
    pub const ALL: [Self; 7] = [
        Self::Add,
        Self::Remove,
        Self::List,
        Self::Export,
        Self::Import,
        Self::Clear,
        Self::Exit,
    ];

    pub const fn key(self) -> char {
        match self {
            Self::Add => '1',
            Self::Remove => '2',
            Self::List => '3',
            Self::Export => '4',
            Self::Import => '5',
            Self::Clear => '6',
            Self::Exit => '0',
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Add => "Add",
            Self::Remove => "Remove",
            Self::List => "List",
            Self::Export => "Export",
            Self::Import => "Import",
            Self::Clear => "Clear",
            Self::Exit => "Exit",
        }
    }

    /// Parses a menu answer. Surrounding whitespace is ignored.
    pub fn parse(answer: &str) -> Option<Self> {
        let mut chars = answer.trim().chars();
        let key: char = chars.next()?;
        if chars.next().is_some() {
            return None;
        }
        Self::ALL.into_iter().find(|option| option.key() == key)
    }
}

/// Whether the loop keeps going after an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// One interactive session over a controller and its backing store.
pub struct Menu<'a, R, W, S: ?Sized> {
    quiniela: &'a mut Quiniela,
    store: &'a mut S,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write, S: LineStore + ?Sized> Menu<'a, R, W, S> {
    pub const fn new(quiniela: &'a mut Quiniela, store: &'a mut S, input: R, output: W) -> Self {
        Self {
            quiniela,
            store,
            input,
            output,
        }
    }

    /// Runs the menu until `0` is chosen or input ends.
    ///
    /// # Errors
    ///
    /// Returns an error only if reading input or writing output fails.
    /// Rejected operations are reported on the output and the loop goes on.
    pub fn run(&mut self) -> io::Result<()> {
        let options: Vec<(char, &str)> = MenuOption::ALL
            .iter()
            .map(|option| (option.key(), option.label()))
            .collect();

        loop {
            view::write_title(&mut self.output, MENU_TITLE)?;
            view::write_options(&mut self.output, &options)?;
            let Some(answer) = self.prompt("Option")? else {
                break;
            };

            let flow: Flow = match MenuOption::parse(&answer) {
                Some(MenuOption::Add) => self.add()?,
                Some(MenuOption::Remove) => self.remove()?,
                Some(MenuOption::List) => self.list()?,
                Some(MenuOption::Export) => self.export()?,
                Some(MenuOption::Import) => self.import()?,
                Some(MenuOption::Clear) => self.clear()?,
                Some(MenuOption::Exit) => Flow::Exit,
                None => {
                    view::write_error(&mut self.output, &format!("Unknown option '{answer}'"))?;
                    Flow::Continue
                }
            };
            if flow == Flow::Exit {
                break;
            }
        }

        view::write_notice(&mut self.output, "END")
    }

    fn add(&mut self) -> io::Result<Flow> {
        view::write_title(&mut self.output, "New match")?;
        let mut record: MatchRecord = MatchRecord::new();

        for label in FIELD_PROMPTS {
            loop {
                writeln!(self.output, "{record}")?;
                let Some(answer) = self.prompt(label)? else {
                    return Ok(Flow::Exit);
                };
                match record.set_field(&answer) {
                    Ok(_) => break,
                    Err(err) => {
                        view::write_error(&mut self.output, &format!("Invalid field: {err}"))?;
                    }
                }
            }
        }

        writeln!(self.output, "{record}")?;
        match self.confirm("Add this match?")? {
            None => return Ok(Flow::Exit),
            Some(false) => view::write_notice(&mut self.output, "Match discarded")?,
            Some(true) => match self.quiniela.add_record(record) {
                Ok(index) => {
                    view::write_notice(&mut self.output, &format!("Added as #{}", index + 1))?;
                }
                Err(err) => view::write_error(&mut self.output, &err.to_string())?,
            },
        }
        self.list()
    }

    fn remove(&mut self) -> io::Result<Flow> {
        if self.quiniela.is_empty() {
            view::write_notice(&mut self.output, "No matches stored")?;
            return Ok(Flow::Continue);
        }

        view::write_title(&mut self.output, "Remove match")?;
        view::write_numbered(&mut self.output, &self.quiniela.list_display())?;
        let Some(answer) = self.prompt("Number to remove (blank to cancel)")? else {
            return Ok(Flow::Exit);
        };
        let answer: &str = answer.trim();
        if answer.is_empty() {
            view::write_notice(&mut self.output, "Cancelled")?;
            return Ok(Flow::Continue);
        }

        let index: usize = match answer.parse::<usize>() {
            Ok(number) if number >= 1 => number - 1,
            _ => {
                view::write_error(&mut self.output, &format!("'{answer}' is not a valid number"))?;
                return Ok(Flow::Continue);
            }
        };
        let line: String = match self.quiniela.get(index) {
            Ok(record) => record.to_display_string(),
            Err(err) => {
                view::write_error(&mut self.output, &err.to_string())?;
                return Ok(Flow::Continue);
            }
        };

        writeln!(self.output, "{line}")?;
        match self.confirm("Remove this match?")? {
            None => return Ok(Flow::Exit),
            Some(false) => view::write_notice(&mut self.output, "Cancelled")?,
            Some(true) => match self.quiniela.delete_at(index) {
                Ok(_) => view::write_notice(&mut self.output, "Match removed")?,
                Err(err) => view::write_error(&mut self.output, &err.to_string())?,
            },
        }
        self.list()
    }

    fn list(&mut self) -> io::Result<Flow> {
        view::write_title(&mut self.output, "Results")?;
        if self.quiniela.is_empty() {
            view::write_notice(&mut self.output, "No matches stored")?;
        } else {
            view::write_numbered(&mut self.output, &self.quiniela.list_display())?;
        }
        Ok(Flow::Continue)
    }

    fn export(&mut self) -> io::Result<Flow> {
        match self.quiniela.export_to(self.store) {
            Ok(ExportResponse::NothingToExport) => {
                view::write_notice(&mut self.output, "Nothing to export")?;
            }
            Ok(ExportResponse::Exported { count }) => {
                let message: String =
                    format!("{count} matches exported to {}", self.store.describe());
                view::write_notice(&mut self.output, &message)?;
            }
            Err(err) => view::write_error(&mut self.output, &err.to_string())?,
        }
        Ok(Flow::Continue)
    }

    fn import(&mut self) -> io::Result<Flow> {
        match self.quiniela.import_from(&*self.store) {
            Ok(ImportResponse::NothingToImport) => {
                view::write_notice(&mut self.output, "Nothing to import")?;
                Ok(Flow::Continue)
            }
            Ok(ImportResponse::Imported { count }) => {
                let message: String =
                    format!("{count} matches imported from {}", self.store.describe());
                view::write_notice(&mut self.output, &message)?;
                self.list()
            }
            Err(err) => {
                view::write_error(&mut self.output, &err.to_string())?;
                Ok(Flow::Continue)
            }
        }
    }

    fn clear(&mut self) -> io::Result<Flow> {
        if self.quiniela.is_empty() {
            view::write_notice(&mut self.output, "No matches stored")?;
            return Ok(Flow::Continue);
        }

        let question: String = format!("Remove all {} matches?", self.quiniela.len());
        match self.confirm(&question)? {
            None => return Ok(Flow::Exit),
            Some(false) => view::write_notice(&mut self.output, "Cancelled")?,
            Some(true) => {
                self.quiniela.reset();
                view::write_notice(&mut self.output, "All matches removed")?;
            }
        }
        Ok(Flow::Continue)
    }

    /// Prints `label` and reads one line without its terminator.
    ///
    /// Returns `None` at end of input.
    fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{label}: ")?;
        self.output.flush()?;

        let mut line: String = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        let trimmed_len: usize = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }

    /// Asks a yes/no question; anything but `y` or `yes` is a no.
    fn confirm(&mut self, question: &str) -> io::Result<Option<bool>> {
        let answer: Option<String> = self.prompt(&format!("{question} [y/N]"))?;
        Ok(answer.map(|answer| {
            matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
        }))
    }
}
