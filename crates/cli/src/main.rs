// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::unwrap_used,
    clippy::expect_used
)]

//! `quiniela`: keep a list of 1X2 match results in a pseudo-CSV file.
//!
//! Without a subcommand the interactive menu runs against stdin/stdout.

mod menu;
mod view;

#[cfg(test)]
mod tests;

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use color_eyre::{Result, eyre::eyre};
use quiniela_api::{ApiError, CreateRecordResponse, ExportResponse, ImportResponse, Quiniela};
use quiniela_persistence::FileStore;
use tracing::level_filters::LevelFilter;
use tracing_log::AsTrace;
use tracing_subscriber::EnvFilter;

use crate::menu::Menu;

/// Store used when `--store` is not given.
const DEFAULT_STORE: &str = "quiniela.txt";

fn main() -> Result<()> {
    color_eyre::install()?;
    let args: Args = Args::parse();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(args.log_level().into())
                .from_env_lossy(),
        )
        .with_writer(io::stderr)
        .without_time()
        .init();

    let stdin: io::Stdin = io::stdin();
    let stdout: io::Stdout = io::stdout();
    match args.run(&mut stdin.lock(), &mut stdout.lock()) {
        Ok(()) => (),
        Err(err) => {
            tracing::error!("{err}");
            std::process::exit(1);
        }
    }
    Ok(())
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the match store file
    #[arg(short, long, default_value = DEFAULT_STORE)]
    store: PathBuf,

    #[command(flatten)]
    verbosity: Verbosity<WarnLevel>,

    #[command(subcommand)]
    command: Option<Command>,
}

impl Args {
    fn run<R: BufRead, W: Write>(self, input: &mut R, output: &mut W) -> Result<()> {
        let mut store: FileStore = FileStore::new(self.store);
        self.command
            .unwrap_or_default()
            .run(&mut store, input, output)
    }

    fn log_level(&self) -> LevelFilter {
        self.verbosity.log_level_filter().as_trace()
    }
}

#[derive(Clone, Debug, Default, Subcommand)]
enum Command {
    /// Run the interactive menu (default)
    #[default]
    #[command(visible_alias = "m")]
    Menu,

    /// Print the stored matches
    #[command(visible_alias = "ls")]
    List {
        /// Print a JSON array instead of the table
        #[arg(long, conflicts_with = "points")]
        json: bool,

        /// Print the points each team earned
        #[arg(long)]
        points: bool,
    },

    /// Append one match to the store
    #[command(visible_alias = "a")]
    Add {
        /// Home team (5 to 20 characters)
        home: String,
        /// Away team (5 to 20 characters)
        away: String,
        /// Outcome: 1, X or 2
        outcome: String,
    },

    /// Verify that every line of the store decodes
    #[command(visible_alias = "c")]
    Check,
}

impl Command {
    fn run<R: BufRead, W: Write>(
        self,
        store: &mut FileStore,
        input: &mut R,
        output: &mut W,
    ) -> Result<()> {
        match self {
            Self::Menu => {
                let mut quiniela: Quiniela = Quiniela::new();
                Menu::new(&mut quiniela, store, input, output).run()?;
            }
            Self::List { json, points } => {
                let quiniela: Quiniela = load(store)?;
                if json {
                    writeln!(output, "{}", serde_json::to_string_pretty(&quiniela.records())?)?;
                } else if quiniela.is_empty() {
                    view::write_notice(output, "No matches stored")?;
                } else if points {
                    view::write_numbered(output, &quiniela.list_points())?;
                } else {
                    view::write_numbered(output, &quiniela.list_display())?;
                }
            }
            Self::Add {
                home,
                away,
                outcome,
            } => {
                let mut quiniela: Quiniela = load(store)?;
                let response: CreateRecordResponse =
                    quiniela.create_record(&home, &away, &outcome)?;
                if let ExportResponse::Exported { count } = quiniela.export_to(store)? {
                    tracing::info!(count, "Store updated");
                }
                writeln!(output, "{}. {}", response.index + 1, response.display)?;
            }
            Self::Check => {
                if !store.exists() {
                    return Err(eyre!("Store '{}' does not exist", store.path().display()));
                }
                let mut quiniela: Quiniela = Quiniela::new();
                match quiniela.import_from(&*store)? {
                    ImportResponse::NothingToImport => {
                        view::write_notice(output, "Store is empty")?;
                    }
                    ImportResponse::Imported { count } => {
                        view::write_notice(output, &format!("{count} matches OK"))?;
                    }
                }
            }
        }
        Ok(())
    }
}

/// Loads the store into a fresh controller. A missing store loads as empty.
fn load(store: &FileStore) -> Result<Quiniela, ApiError> {
    let mut quiniela: Quiniela = Quiniela::new();
    if store.exists() {
        quiniela.import_from(store)?;
    }
    Ok(quiniela)
}
