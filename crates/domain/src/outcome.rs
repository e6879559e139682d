// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Glyph shown in place of an outcome that has not been set yet.
pub const UNSET_GLYPH: &str = "[ ][ ][ ]";

/// The three possible results of a 1X2 match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Outcome {
    /// Home win, `1`.
    Home,
    /// Draw, `X`.
    Draw,
    /// Away win, `2`.
    Away,
}

impl Outcome {
    /// All outcomes in column order.
    pub const ALL: [Self; 3] = [Self::Home, Self::Draw, Self::Away];

    /// Returns the one-character code used in the pseudo-CSV format.
    #[must_use]
    pub const fn code(&self) -> char {
        match self {
            Self::Home => '1',
            Self::Draw => 'X',
            Self::Away => '2',
        }
    }

    /// Returns the three-column glyph, e.g. `[1][-][-]` for a home win.
    #[must_use]
    pub const fn glyph(&self) -> &'static str {
        match self {
            Self::Home => "[1][-][-]",
            Self::Draw => "[-][X][-]",
            Self::Away => "[-][-][2]",
        }
    }

    /// Returns the glyph for an optional outcome, falling back to [`UNSET_GLYPH`].
    #[must_use]
    pub const fn glyph_of(outcome: Option<Self>) -> &'static str {
        match outcome {
            Some(outcome) => outcome.glyph(),
            None => UNSET_GLYPH,
        }
    }

    /// Parses an outcome token.
    ///
    /// The token must be exactly one character, one of `1`, `X` or `2`,
    /// case-insensitive.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidOutcome` for any other token.
    pub fn parse(token: &str) -> Result<Self, DomainError> {
        let mut chars = token.chars();
        let (Some(code), None) = (chars.next(), chars.next()) else {
            return Err(DomainError::InvalidOutcome(token.to_string()));
        };

        match code.to_ascii_uppercase() {
            '1' => Ok(Self::Home),
            'X' => Ok(Self::Draw),
            '2' => Ok(Self::Away),
            _ => Err(DomainError::InvalidOutcome(token.to_string())),
        }
    }
}

impl FromStr for Outcome {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Outcome {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Outcome> for String {
    fn from(outcome: Outcome) -> Self {
        outcome.code().to_string()
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}
