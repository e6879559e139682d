// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Controller tests organized by operation.

use quiniela::MatchCollection;
use quiniela_domain::{MatchRecord, Outcome};

use crate::{ApiError, CreateRecordResponse, Quiniela, RecordView};

use super::helpers::create_test_quiniela;

// ============================================================================
// Creation
// ============================================================================

#[test]
fn test_create_record_appends_and_returns_display() {
    let mut quiniela: Quiniela = Quiniela::new();
    let response: CreateRecordResponse = quiniela
        .create_record("Real Betis", "Sevilla FC", "1")
        .unwrap();

    assert_eq!(response.index, 0);
    assert_eq!(
        response.display,
        "REAL BETIS - SEVILLA FC ................... [1][-][-]"
    );
    assert_eq!(quiniela.len(), 1);
}

#[test]
fn test_create_record_returns_increasing_indexes() {
    let mut quiniela: Quiniela = create_test_quiniela();
    let response: CreateRecordResponse = quiniela
        .create_record("Equipo Uno", "Equipo Dos", "X")
        .unwrap();
    assert_eq!(response.index, 3);
}

#[test]
fn test_create_record_rejects_short_name() {
    let mut quiniela: Quiniela = Quiniela::new();
    let err: ApiError = quiniela.create_record("eq", "Sevilla FC", "1").unwrap_err();

    assert!(matches!(err, ApiError::InvalidInput { ref field, .. } if field == "team"));
    assert!(quiniela.is_empty());
}

#[test]
fn test_create_record_rejects_duplicate_team() {
    let mut quiniela: Quiniela = Quiniela::new();
    let err: ApiError = quiniela
        .create_record("Real Betis", "REAL BETIS", "1")
        .unwrap_err();

    assert!(matches!(
        err,
        ApiError::DomainRuleViolation { ref rule, .. } if rule == "distinct_teams"
    ));
    assert!(quiniela.is_empty());
}

#[test]
fn test_create_record_rejects_bad_outcome() {
    let mut quiniela: Quiniela = Quiniela::new();
    let err: ApiError = quiniela
        .create_record("Real Betis", "Sevilla FC", "Y")
        .unwrap_err();

    assert!(matches!(err, ApiError::InvalidInput { ref field, .. } if field == "outcome"));
}

#[test]
fn test_add_record_accepts_closed_record() {
    let mut quiniela: Quiniela = Quiniela::new();
    let mut record: MatchRecord = MatchRecord::new();
    record.set_field("Equipo Local").unwrap();
    record.set_field("Equipo Visita").unwrap();
    record.set_field("2").unwrap();

    assert_eq!(quiniela.add_record(record.clone()).unwrap(), 0);
    assert_eq!(quiniela.get(0).unwrap(), &record);
}

#[test]
fn test_add_record_rejects_open_record() {
    let mut quiniela: Quiniela = Quiniela::new();
    let mut record: MatchRecord = MatchRecord::new();
    record.set_field("Equipo Local").unwrap();

    let err: ApiError = quiniela.add_record(record).unwrap_err();
    assert!(matches!(err, ApiError::InvalidState { .. }));
    assert!(quiniela.is_empty());
}

// ============================================================================
// Listing
// ============================================================================

#[test]
fn test_list_display_keeps_insertion_order() {
    let quiniela: Quiniela = create_test_quiniela();
    let lines: Vec<String> = quiniela.list_display();

    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("REAL BETIS - SEVILLA FC"));
    assert!(lines[1].starts_with("VALENCIA CF - VILLARREAL CF"));
    assert!(lines[2].starts_with("GETAFE CF - RAYO VALLECANO"));
}

#[test]
fn test_list_display_empty() {
    assert!(Quiniela::new().list_display().is_empty());
}

#[test]
fn test_list_points() {
    let quiniela: Quiniela = create_test_quiniela();
    assert_eq!(
        quiniela.list_points(),
        vec![
            String::from("↑ REAL BETIS (3)"),
            String::from("= VALENCIA CF (1) - VILLARREAL CF (1)"),
            String::from("↓ RAYO VALLECANO (3)"),
        ]
    );
}

#[test]
fn test_records_views() {
    let quiniela: Quiniela = create_test_quiniela();
    let views: Vec<RecordView> = quiniela.records();

    assert_eq!(views.len(), 3);
    assert_eq!(views[1].index, 1);
    assert_eq!(views[1].home.as_deref(), Some("VALENCIA CF"));
    assert_eq!(views[1].away.as_deref(), Some("VILLARREAL CF"));
    assert_eq!(views[1].outcome, Some(Outcome::Draw));
    assert!(views[1].closed);
}

#[test]
fn test_record_view_of_open_record() {
    let mut record: MatchRecord = MatchRecord::new();
    record.set_field("Equipo Local").unwrap();
    let view: RecordView = RecordView::new(0, &record);

    assert_eq!(view.home, None);
    assert_eq!(view.outcome, None);
    assert!(!view.closed);
    assert!(view.display.starts_with("EQUIPO LOCAL - ¿?"));
}

#[test]
fn test_record_view_serializes_outcome_as_code() {
    let quiniela: Quiniela = create_test_quiniela();
    let json: serde_json::Value = serde_json::to_value(quiniela.records()).unwrap();

    assert_eq!(json[0]["outcome"], "1");
    assert_eq!(json[1]["outcome"], "X");
    assert_eq!(json[2]["home"], "GETAFE CF");
    assert_eq!(json[2]["closed"], true);
}

// ============================================================================
// Deletion and reset
// ============================================================================

#[test]
fn test_delete_at_removes_and_shifts() {
    let mut quiniela: Quiniela = create_test_quiniela();
    let removed: MatchRecord = quiniela.delete_at(0).unwrap();

    assert_eq!(removed.home().unwrap(), "REAL BETIS");
    assert_eq!(quiniela.len(), 2);
    assert_eq!(quiniela.get(0).unwrap().home().unwrap(), "VALENCIA CF");
}

#[test]
fn test_delete_at_out_of_range() {
    let mut quiniela: Quiniela = create_test_quiniela();
    let err: ApiError = quiniela.delete_at(3).unwrap_err();

    assert!(matches!(err, ApiError::ResourceNotFound { .. }));
    assert_eq!(quiniela.len(), 3);
}

#[test]
fn test_get_out_of_range() {
    let quiniela: Quiniela = Quiniela::new();
    assert!(matches!(
        quiniela.get(0),
        Err(ApiError::ResourceNotFound { .. })
    ));
}

#[test]
fn test_reset_clears_everything() {
    let mut quiniela: Quiniela = create_test_quiniela();
    quiniela.reset();
    assert!(quiniela.is_empty());
    assert!(quiniela.list_display().is_empty());
}

#[test]
fn test_with_collection_starts_from_given_records() {
    let collection: MatchCollection = [
        MatchRecord::from_fields("Equipo Uno", "Equipo Dos", "X").unwrap(),
        MatchRecord::from_fields("Equipo Tres", "Equipo Cuatro", "1").unwrap(),
    ]
    .into_iter()
    .collect();

    let mut quiniela: Quiniela = Quiniela::with_collection(collection.clone());
    assert_eq!(quiniela.collection(), &collection);
    assert_eq!(quiniela.len(), 2);

    quiniela.delete_at(0).unwrap();
    assert_eq!(quiniela.get(0).unwrap().home().unwrap(), "EQUIPO TRES");
}
