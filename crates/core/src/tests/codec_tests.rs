// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{create_open_record, create_test_collection};
use crate::{CoreError, ImportResult, MatchCollection, export, import};
use quiniela_domain::{DomainError, ErrorKind, Outcome};

#[test]
fn test_export_empty_collection_yields_no_lines() {
    let collection: MatchCollection = MatchCollection::new();
    assert_eq!(export(&collection), Ok(Vec::new()));
}

#[test]
fn test_export_fails_without_output_when_a_record_is_open() {
    let mut collection: MatchCollection = create_test_collection();
    collection.push(create_open_record());

    let result: Result<Vec<String>, CoreError> = export(&collection);
    assert!(matches!(
        result,
        Err(CoreError::ExportAborted { position: 3, .. })
    ));
}

#[test]
fn test_import_builds_collection_in_file_order() {
    let lines: Vec<&str> = vec!["EQUIPO UNO#EQUIPO DOS#X", "EQUIPO TRES#EQUIPO CUATRO#1"];

    let result: ImportResult = import(lines).unwrap();
    let collection: MatchCollection = result.new_collection;

    assert_eq!(collection.len(), 2);
    assert_eq!(collection.get(0).unwrap().home(), Ok("EQUIPO UNO"));
    assert_eq!(collection.get(0).unwrap().outcome(), Ok(Outcome::Draw));
    assert_eq!(collection.get(1).unwrap().home(), Ok("EQUIPO TRES"));
    assert_eq!(collection.get(1).unwrap().outcome(), Ok(Outcome::Home));
}

#[test]
fn test_import_reports_first_failing_line() {
    let lines: Vec<String> = vec![
        String::from("EQUIPO LOCAL#EQUIPO VISITA#1"),
        String::from("BADLINE"),
        String::from("ALSO#BAD"),
    ];

    let err: CoreError = import(&lines).unwrap_err();
    assert_eq!(
        err,
        CoreError::ImportFailed {
            line_number: 2,
            reason: DomainError::MalformedLine {
                line: String::from("BADLINE"),
                fields: 1,
            },
        }
    );
}

#[test]
fn test_import_failure_kinds() {
    let CoreError::ImportFailed { reason, .. } =
        import(["EQUIPO UNO#EQUIPO DOS#Y"]).unwrap_err()
    else {
        panic!("expected an import failure");
    };
    assert_eq!(reason.kind(), ErrorKind::Validation);
    assert_eq!(reason.line(), Some("EQUIPO UNO#EQUIPO DOS#Y"));

    let CoreError::ImportFailed { reason, .. } = import(["eq#EQUIPO DOS#1"]).unwrap_err() else {
        panic!("expected an import failure");
    };
    assert_eq!(reason.kind(), ErrorKind::Validation);

    let CoreError::ImportFailed { reason, .. } = import(["one field"]).unwrap_err() else {
        panic!("expected an import failure");
    };
    assert_eq!(reason.kind(), ErrorKind::Format);
}

#[test]
fn test_import_empty_input_yields_empty_collection() {
    let lines: Vec<String> = Vec::new();

    let result: ImportResult = import(lines).unwrap();
    assert!(result.is_empty());
    assert!(result.new_collection.is_empty());
}

#[test]
fn test_import_blank_line_is_an_error() {
    let err: CoreError = import(["EQUIPO UNO#EQUIPO DOS#X", ""]).unwrap_err();
    assert!(matches!(
        err,
        CoreError::ImportFailed { line_number: 2, .. }
    ));
}

#[test]
fn test_export_then_import_round_trip() {
    let original: MatchCollection = create_test_collection();

    let lines: Vec<String> = export(&original).unwrap();
    let restored: MatchCollection = import(&lines).unwrap().new_collection;

    assert_eq!(restored, original);
}

#[test]
fn test_import_accepts_lowercase_and_extra_fields() {
    let result: ImportResult = import(["equipo uno#Equipo Dos#x#2024-05-02"]).unwrap();
    let collection: MatchCollection = result.new_collection;

    assert_eq!(collection.get(0).unwrap().home(), Ok("EQUIPO UNO"));
    assert_eq!(collection.get(0).unwrap().away(), Ok("EQUIPO DOS"));
    assert_eq!(collection.get(0).unwrap().outcome(), Ok(Outcome::Draw));
}
