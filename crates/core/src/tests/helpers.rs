// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::MatchCollection;
use quiniela_domain::MatchRecord;

pub fn create_test_record(home: &str, away: &str, outcome: &str) -> MatchRecord {
    MatchRecord::from_fields(home, away, outcome).unwrap()
}

/// A record with only the home team set.
pub fn create_open_record() -> MatchRecord {
    let mut record: MatchRecord = MatchRecord::new();
    record.set_field("EQUIPO ABIERTO").unwrap();
    record
}

pub fn create_test_collection() -> MatchCollection {
    let mut collection: MatchCollection = MatchCollection::new();
    collection.push(create_test_record("Real Betis", "Sevilla FC", "1"));
    collection.push(create_test_record("Valencia CF", "Villarreal CF", "X"));
    collection.push(create_test_record("Getafe CF", "Rayo Vallecano", "2"));
    collection
}
