// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::outcome::Outcome;
use crate::validation::{validate_distinct_teams, validate_not_empty, validate_team_name};

/// Field separator of the pseudo-CSV format.
pub const SEPARATOR: char = '#';

/// Number of fields a closed record holds.
pub const FIELD_COUNT: usize = 3;

/// Width of the team names column in [`MatchRecord::to_display_string`].
pub const NAMES_COLUMN_WIDTH: usize = 43;

const NAMES_FILL: char = '.';
const UNSET_NAME: &str = "¿?";
const UNSET_POINTS: &str = "- - - -";
const WIN_POINTS: u8 = 3;
const DRAW_POINTS: u8 = 1;

/// How far a match record has been filled.
///
/// Fields are filled strictly in order and a record never moves backwards:
/// - Empty → `HomeSet`
/// - `HomeSet` → `AwaySet`
/// - `AwaySet` → Closed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RecordState {
    /// No field set yet.
    #[default]
    Empty,
    /// Home team set.
    HomeSet,
    /// Home and away teams set.
    AwaySet,
    /// All three fields set. The record is read-only.
    Closed,
}

impl RecordState {
    /// Returns how many fields have been filled in this state.
    #[must_use]
    pub const fn fields_filled(&self) -> u8 {
        match self {
            Self::Empty => 0,
            Self::HomeSet => 1,
            Self::AwaySet => 2,
            Self::Closed => 3,
        }
    }

    /// Returns whether the record is complete.
    #[must_use]
    pub const fn is_closed(&self) -> bool {
        matches!(self, Self::Closed)
    }
}

impl std::fmt::Display for RecordState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name: &str = match self {
            Self::Empty => "Empty",
            Self::HomeSet => "HomeSet",
            Self::AwaySet => "AwaySet",
            Self::Closed => "Closed",
        };
        write!(f, "{name}")
    }
}

/// Field storage for each state. Names are stored upper-cased.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
enum Fields {
    #[default]
    Empty,
    HomeSet {
        home: String,
    },
    AwaySet {
        home: String,
        away: String,
    },
    Closed {
        home: String,
        away: String,
        outcome: Outcome,
    },
}

impl Fields {
    /// Computes the fields after accepting `text` in the next open slot.
    ///
    /// `self` is left untouched, so a rejected value never changes the record.
    fn advance(&self, text: &str) -> Result<Self, DomainError> {
        match self {
            Self::Empty => Ok(Self::HomeSet {
                home: validate_team_name(text)?,
            }),
            Self::HomeSet { home } => {
                let away: String = validate_team_name(text)?;
                validate_distinct_teams(home, &away)?;
                Ok(Self::AwaySet {
                    home: home.clone(),
                    away,
                })
            }
            Self::AwaySet { home, away } => {
                validate_not_empty(text)?;
                Ok(Self::Closed {
                    home: home.clone(),
                    away: away.clone(),
                    outcome: Outcome::parse(text)?,
                })
            }
            Self::Closed { .. } => Err(DomainError::AlreadyComplete),
        }
    }

    const fn state(&self) -> RecordState {
        match self {
            Self::Empty => RecordState::Empty,
            Self::HomeSet { .. } => RecordState::HomeSet,
            Self::AwaySet { .. } => RecordState::AwaySet,
            Self::Closed { .. } => RecordState::Closed,
        }
    }

    fn home(&self) -> Option<&str> {
        match self {
            Self::Empty => None,
            Self::HomeSet { home } | Self::AwaySet { home, .. } | Self::Closed { home, .. } => {
                Some(home)
            }
        }
    }

    fn away(&self) -> Option<&str> {
        match self {
            Self::Empty | Self::HomeSet { .. } => None,
            Self::AwaySet { away, .. } | Self::Closed { away, .. } => Some(away),
        }
    }

    const fn outcome(&self) -> Option<Outcome> {
        match self {
            Self::Closed { outcome, .. } => Some(*outcome),
            _ => None,
        }
    }
}

/// A single match between two teams with its 1X2 result.
///
/// A record starts empty and is filled one field at a time through
/// [`MatchRecord::set_field`]: home team, away team, then outcome. Once all
/// three are set the record is closed and read-only, and only then are the
/// accessors and the pseudo-CSV serialization available.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct MatchRecord {
    fields: Fields,
}

impl MatchRecord {
    /// Creates a new empty record.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            fields: Fields::Empty,
        }
    }

    /// Builds a closed record from its three fields.
    ///
    /// Equivalent to three consecutive [`set_field`](Self::set_field) calls on
    /// a fresh record.
    ///
    /// # Arguments
    ///
    /// * `home` - The home team name
    /// * `away` - The away team name
    /// * `outcome` - The outcome token (`1`, `X` or `2`)
    ///
    /// # Errors
    ///
    /// Returns the first field error encountered.
    pub fn from_fields(home: &str, away: &str, outcome: &str) -> Result<Self, DomainError> {
        let mut record: Self = Self::new();
        record.set_field(home)?;
        record.set_field(away)?;
        record.set_field(outcome)?;
        Ok(record)
    }

    /// Builds a closed record from a pseudo-CSV line using [`SEPARATOR`].
    ///
    /// # Errors
    ///
    /// See [`from_csv_line_with`](Self::from_csv_line_with).
    pub fn from_csv_line(line: &str) -> Result<Self, DomainError> {
        Self::from_csv_line_with(line, SEPARATOR)
    }

    /// Builds a closed record from a line split on `separator`.
    ///
    /// Trailing empty fields are dropped before counting. Fields beyond the
    /// third are ignored.
    ///
    /// # Arguments
    ///
    /// * `line` - The line to parse, without its terminator
    /// * `separator` - The field separator
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The line has fewer than three fields (`MalformedLine`)
    /// - Any of the first three fields is rejected (`InvalidLine`, wrapping the
    ///   field error)
    pub fn from_csv_line_with(line: &str, separator: char) -> Result<Self, DomainError> {
        let mut parts: Vec<&str> = line.split(separator).collect();
        while parts.last().is_some_and(|part| part.is_empty()) {
            parts.pop();
        }

        if parts.len() < FIELD_COUNT {
            return Err(DomainError::MalformedLine {
                line: line.to_string(),
                fields: parts.len(),
            });
        }

        let mut record: Self = Self::new();
        for part in parts {
            if record.is_closed() {
                break;
            }
            record.set_field(part).map_err(|err| err.in_line(line))?;
        }
        Ok(record)
    }

    /// Sets the next open field.
    ///
    /// The home and away names must be 5 to 20 characters long and are stored
    /// upper-cased; the away name must differ from the home name ignoring
    /// case. The outcome must be a single `1`, `X` or `2`.
    ///
    /// # Arguments
    ///
    /// * `text` - The value for the next field
    ///
    /// # Returns
    ///
    /// * `Ok(RecordState)` with the state reached
    /// * `Err(DomainError)` if the value was rejected; the record is unchanged
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The record is already closed, whatever `text` is
    /// - `text` is empty
    /// - The value fails the rule for the field being filled
    pub fn set_field(&mut self, text: &str) -> Result<RecordState, DomainError> {
        self.fields = self.fields.advance(text)?;
        Ok(self.state())
    }

    /// Returns the current fill state.
    #[must_use]
    pub const fn state(&self) -> RecordState {
        self.fields.state()
    }

    /// Returns whether all three fields are set.
    #[must_use]
    pub const fn is_closed(&self) -> bool {
        self.state().is_closed()
    }

    /// Fails unless the record is closed.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::IncompleteRecord` if fields are still missing.
    pub const fn require_closed(&self) -> Result<(), DomainError> {
        if !self.is_closed() {
            return Err(DomainError::IncompleteRecord {
                fields_filled: self.state().fields_filled(),
            });
        }
        Ok(())
    }

    /// Returns the home team name.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::IncompleteRecord` if the record is not closed.
    pub fn home(&self) -> Result<&str, DomainError> {
        self.closed_fields().map(|(home, _, _)| home)
    }

    /// Returns the away team name.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::IncompleteRecord` if the record is not closed.
    pub fn away(&self) -> Result<&str, DomainError> {
        self.closed_fields().map(|(_, away, _)| away)
    }

    /// Returns the outcome.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::IncompleteRecord` if the record is not closed.
    pub fn outcome(&self) -> Result<Outcome, DomainError> {
        self.closed_fields().map(|(_, _, outcome)| outcome)
    }

    fn closed_fields(&self) -> Result<(&str, &str, Outcome), DomainError> {
        match &self.fields {
            Fields::Closed {
                home,
                away,
                outcome,
            } => Ok((home, away, *outcome)),
            _ => Err(DomainError::IncompleteRecord {
                fields_filled: self.state().fields_filled(),
            }),
        }
    }

    /// Renders the record as a fixed-width table row.
    ///
    /// The names column reads `HOME - AWAY` (with `¿?` for names not set yet),
    /// truncated or dot-padded to [`NAMES_COLUMN_WIDTH`], followed by a space
    /// and the outcome glyph.
    #[must_use]
    pub fn to_display_string(&self) -> String {
        let names: String = format!(
            "{} - {}",
            self.fields.home().unwrap_or(UNSET_NAME),
            self.fields.away().unwrap_or(UNSET_NAME)
        );
        format!(
            "{} {}",
            fit_to_width(&names, NAMES_COLUMN_WIDTH, NAMES_FILL),
            Outcome::glyph_of(self.fields.outcome())
        )
    }

    /// Serializes the record as `HOME#AWAY#CODE`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::IncompleteRecord` if the record is not closed.
    pub fn to_csv_line(&self) -> Result<String, DomainError> {
        let (home, away, outcome) = self.closed_fields()?;
        Ok(format!(
            "{home}{SEPARATOR}{away}{SEPARATOR}{}",
            outcome.code()
        ))
    }

    /// Describes the points each team earned: 3 for a win, 1 each on a draw.
    #[must_use]
    pub fn to_points_string(&self) -> String {
        match &self.fields {
            Fields::Closed {
                home,
                outcome: Outcome::Home,
                ..
            } => format!("↑ {home} ({WIN_POINTS})"),
            Fields::Closed {
                away,
                outcome: Outcome::Away,
                ..
            } => format!("↓ {away} ({WIN_POINTS})"),
            Fields::Closed {
                home,
                away,
                outcome: Outcome::Draw,
            } => format!("= {home} ({DRAW_POINTS}) - {away} ({DRAW_POINTS})"),
            _ => String::from(UNSET_POINTS),
        }
    }
}

impl std::fmt::Display for MatchRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_display_string())
    }
}

/// Truncates `text` to `width` characters, or pads it with a space and then
/// `fill` characters up to `width`.
pub(crate) fn fit_to_width(text: &str, width: usize, fill: char) -> String {
    let length: usize = text.chars().count();
    if length > width {
        return text.chars().take(width).collect();
    }

    let mut fitted: String = String::from(text);
    if length < width {
        fitted.push(' ');
        fitted.extend(std::iter::repeat_n(fill, width - length - 1));
    }
    fitted
}
