// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use std::io::Cursor;

use quiniela_api::Quiniela;
use quiniela_persistence::LineStore;

use crate::menu::Menu;

pub fn create_test_quiniela() -> Quiniela {
    let mut quiniela: Quiniela = Quiniela::new();
    quiniela
        .create_record("Real Betis", "Sevilla FC", "1")
        .unwrap();
    quiniela
        .create_record("Valencia CF", "Villarreal CF", "X")
        .unwrap();
    quiniela
}

/// Runs a menu session fed with `input` and returns everything it printed.
pub fn run_menu<S: LineStore>(quiniela: &mut Quiniela, store: &mut S, input: &str) -> String {
    let mut output: Vec<u8> = Vec::new();
    Menu::new(quiniela, store, Cursor::new(input), &mut output)
        .run()
        .unwrap();
    String::from_utf8(output).unwrap()
}
