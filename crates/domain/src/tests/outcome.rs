// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{DomainError, Outcome, UNSET_GLYPH};

#[test]
fn test_outcome_codes() {
    assert_eq!(Outcome::Home.code(), '1');
    assert_eq!(Outcome::Draw.code(), 'X');
    assert_eq!(Outcome::Away.code(), '2');
}

#[test]
fn test_outcome_glyphs() {
    assert_eq!(Outcome::Home.glyph(), "[1][-][-]");
    assert_eq!(Outcome::Draw.glyph(), "[-][X][-]");
    assert_eq!(Outcome::Away.glyph(), "[-][-][2]");
    assert_eq!(UNSET_GLYPH, "[ ][ ][ ]");
    assert_eq!(Outcome::glyph_of(None), UNSET_GLYPH);
    assert_eq!(Outcome::glyph_of(Some(Outcome::Draw)), "[-][X][-]");
}

#[test]
fn test_outcome_parse_accepts_codes_in_any_case() {
    assert_eq!(Outcome::parse("1"), Ok(Outcome::Home));
    assert_eq!(Outcome::parse("X"), Ok(Outcome::Draw));
    assert_eq!(Outcome::parse("x"), Ok(Outcome::Draw));
    assert_eq!(Outcome::parse("2"), Ok(Outcome::Away));
}

#[test]
fn test_outcome_parse_rejects_other_tokens() {
    for token in ["", "Y", "0", "3", "11", "X ", " 1", "1X2", "×"] {
        let result: Result<Outcome, DomainError> = Outcome::parse(token);
        assert_eq!(
            result,
            Err(DomainError::InvalidOutcome(token.to_string())),
            "token {token:?} should be rejected"
        );
    }
}

#[test]
fn test_outcome_from_str_and_display_agree() {
    for outcome in Outcome::ALL {
        let text: String = outcome.to_string();
        let parsed: Outcome = text.parse().unwrap();
        assert_eq!(parsed, outcome);
    }
}

#[test]
fn test_outcome_serializes_as_code() {
    let json: String = serde_json::to_string(&Outcome::Draw).unwrap();
    assert_eq!(json, "\"X\"");

    let parsed: Outcome = serde_json::from_str("\"2\"").unwrap();
    assert_eq!(parsed, Outcome::Away);

    assert!(serde_json::from_str::<Outcome>("\"Y\"").is_err());
}
