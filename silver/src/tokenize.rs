// SILVER - a netlist front-end for probing-security verification.
// Copyright (C) 2025 The SILVER contributors.
//
// This program is free software: you can redistribute it and/or modify it under
// the terms of the GNU General Public License as published by the Free Software
// Foundation, either version 3 of the License, or (at your option) any later
// version.
//
// This program is distributed in the hope that it will be useful, but WITHOUT
// ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS
// FOR A PARTICULAR PURPOSE.  See the GNU General Public License for more
// details.
//
// You should have received a copy of the GNU General Public License along with
// this program.  If not, see <http://www.gnu.org/licenses/>.

//! Splitting normalized lines into fields.
//!
//! The netlist grammar is lenient: repeated delimiters, trailing delimiters
//! and white space around fields are all accepted.  [split] therefore never
//! fails; it drops the empty fragments such input produces and returns the
//! rest in order.

use std::{iter::FusedIterator, str::Split};

use crate::text::strip;

/// Field delimiter of SILVER netlists, which write one gate per line as
/// `<operation> <operand>...`.
pub const DEFAULT_DELIMITER: char = ' ';

/// Iterator over the fields of a line, as returned by [fields].
#[derive(Clone, Debug)]
pub struct Fields<'a> {
    inner: Split<'a, char>,
    delimiter: char,
}

impl Fields<'_> {
    fn keep(&self, field: &str) -> bool {
        let mut chars = field.chars();
        match (chars.next(), chars.next()) {
            (None, _) => false,
            (Some(c), None) => c != self.delimiter,
            _ => true,
        }
    }
}

impl<'a> Iterator for Fields<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let field = strip(self.inner.next()?);
            if self.keep(field) {
                return Some(field);
            }
        }
    }
}

impl FusedIterator for Fields<'_> {}

/// Returns an iterator over the fields of `line` separated by `delimiter`.
///
/// Each field is passed through [strip].  A field that is empty afterward,
/// or that consists of just `delimiter`, is skipped.
pub fn fields(line: &str, delimiter: char) -> Fields<'_> {
    Fields {
        inner: line.split(delimiter),
        delimiter,
    }
}

/// Splits `line` at each `delimiter` and returns the non-empty, stripped
/// fields in the order they appear.
///
/// A line without `delimiter` yields a single field, or none at all if the
/// line is blank.
pub fn split(line: &str, delimiter: char) -> Vec<&str> {
    fields(line, delimiter).collect()
}
