// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Plain-text presentation helpers shared by the menu and the subcommands.

use std::io::{self, Write};

/// Writes `title` framed between two rules of `=` characters.
pub fn write_title<W: Write>(output: &mut W, title: &str) -> io::Result<()> {
    let rule: String = "=".repeat(title.chars().count() + 4);
    writeln!(output, "{rule}")?;
    writeln!(output, "  {title}")?;
    writeln!(output, "{rule}")
}

/// Writes one `key) label` line per option.
pub fn write_options<W: Write>(output: &mut W, options: &[(char, &str)]) -> io::Result<()> {
    for (key, label) in options {
        writeln!(output, "  {key}) {label}")?;
    }
    Ok(())
}

/// Writes `lines` numbered from 1.
pub fn write_numbered<W: Write>(output: &mut W, lines: &[String]) -> io::Result<()> {
    for (index, line) in lines.iter().enumerate() {
        writeln!(output, "{}. {line}", index + 1)?;
    }
    Ok(())
}

pub fn write_notice<W: Write>(output: &mut W, message: &str) -> io::Result<()> {
    writeln!(output, "*** {message}")
}

pub fn write_error<W: Write>(output: &mut W, message: &str) -> io::Result<()> {
    writeln!(output, "!!! {message}")
}
