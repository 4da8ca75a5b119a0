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

//! Tokenizing whole netlists.
//!
//! [NetlistLines] runs every line of a netlist through
//! [normalize](crate::text::normalize) and [split](crate::tokenize::split),
//! skipping lines that are blank or hold only a comment.  Each
//! [TokenizedLine] remembers where it came from, so that a parser can report
//! a bad field with its line and column.

use std::{
    iter::{Enumerate, FusedIterator},
    str::Split,
    sync::Arc,
};

use log::trace;

use crate::{
    message::{Diagnostic, Location, Point, Severity},
    settings::Settings,
    substr_offset,
    text::normalize,
    tokenize::split,
    vocab::{Operation, ProbingModel},
};

/// One netlist line that contains at least one field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TokenizedLine<'a> {
    /// 1-based line number.
    pub number: i32,

    /// The line as it appears in the source, without its new-line.
    pub raw: &'a str,

    /// Fields of the line, in order.
    pub fields: Vec<&'a str>,

    file_name: Option<Arc<String>>,
}

impl<'a> TokenizedLine<'a> {
    pub fn field(&self, index: usize) -> Option<&'a str> {
        self.fields.get(index).copied()
    }

    /// Returns the location of field `index`, or of the whole line if there
    /// is no such field.
    pub fn location(&self, index: usize) -> Location {
        let line_start = Point {
            line: self.number,
            column: Some(1),
        };
        let span = match self
            .field(index)
            .and_then(|field| Some((field, substr_offset(self.raw, field)?)))
        {
            Some((field, offset)) => {
                let start = line_start.advance(&self.raw[..offset]);
                start..start.advance(field)
            }
            None => line_start.without_column()..line_start.without_column(),
        };
        Location {
            file_name: self.file_name.clone(),
            span: Some(span),
        }
    }

    /// Returns a diagnostic located at field `index` that quotes this line.
    pub fn diagnostic(
        &self,
        index: usize,
        severity: Severity,
        text: impl Into<String>,
    ) -> Diagnostic {
        Diagnostic::new(severity, text)
            .with_location(self.location(index))
            .with_source(self.number, self.raw.trim_end_matches('\r'))
    }

    /// Classifies field `index` as an [Operation].
    pub fn operation(&self, index: usize) -> Result<Operation, Diagnostic> {
        let field = self.expect_field(index, "operation")?;
        field
            .parse::<Operation>()
            .map_err(|error| self.diagnostic(index, Severity::Error, format!("{error}")))
    }

    /// Returns field `index` if it is a probe position under `model`.
    pub fn probe_position(
        &self,
        index: usize,
        model: ProbingModel,
    ) -> Result<&'a str, Diagnostic> {
        let field = self.expect_field(index, "probe position")?;
        model
            .probe_position(field)
            .map_err(|error| self.diagnostic(index, Severity::Error, format!("{error}")))
    }

    fn expect_field(&self, index: usize, what: &str) -> Result<&'a str, Diagnostic> {
        self.field(index).ok_or_else(|| {
            self.diagnostic(
                index,
                Severity::Error,
                format!(
                    "Expected {what} as field {}, but the line has only {}.",
                    index + 1,
                    self.fields.len()
                ),
            )
        })
    }
}

/// Converts a 0-based line index to a 1-based line number, saturating at
/// `i32::MAX`.
fn line_number(index: usize) -> i32 {
    i32::try_from(index.saturating_add(1)).unwrap_or(i32::MAX)
}

/// Iterator over the non-blank lines of a netlist.
#[derive(Clone, Debug)]
pub struct NetlistLines<'a> {
    lines: Enumerate<Split<'a, char>>,
    delimiter: char,
    file_name: Option<Arc<String>>,
}

impl<'a> NetlistLines<'a> {
    /// Tokenizes `source`, splitting each line at `delimiter`.
    pub fn new(source: &'a str, delimiter: char) -> Self {
        Self {
            lines: source.split('\n').enumerate(),
            delimiter,
            file_name: None,
        }
    }

    /// Tokenizes `source` with the delimiter from [Settings::global].
    pub fn with_global_settings(source: &'a str) -> Self {
        Self::new(source, Settings::global().delimiter)
    }

    /// Names the file that `source` came from, for diagnostics.
    pub fn with_file_name(self, file_name: impl Into<String>) -> Self {
        Self {
            file_name: Some(Arc::new(file_name.into())),
            ..self
        }
    }
}

impl<'a> Iterator for NetlistLines<'a> {
    type Item = TokenizedLine<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (index, raw) = self.lines.next()?;
            let number = line_number(index);
            let fields = split(normalize(raw), self.delimiter);
            if fields.is_empty() {
                trace!("line {number}: no fields");
                continue;
            }
            return Some(TokenizedLine {
                number,
                raw,
                fields,
                file_name: self.file_name.clone(),
            });
        }
    }
}

impl FusedIterator for NetlistLines<'_> {}

#[cfg(test)]
mod test {
    use super::{NetlistLines, line_number};
    use crate::vocab::{Operation, ProbingModel};

    const NETLIST: &str = "\
# 2-share masked AND
in 0 0
in 0 1

ref
and 0 1   # partial product
reg 3
\r
out 4 0
";

    #[test]
    fn skips_blank_and_comment_lines() {
        let lines: Vec<_> = NetlistLines::new(NETLIST, ' ')
            .map(|line| (line.number, line.fields))
            .collect();
        assert_eq!(
            lines,
            vec![
                (2, vec!["in", "0", "0"]),
                (3, vec!["in", "0", "1"]),
                (5, vec!["ref"]),
                (6, vec!["and", "0", "1"]),
                (7, vec!["reg", "3"]),
                (9, vec!["out", "4", "0"]),
            ]
        );
    }

    #[test]
    fn crlf_line_endings() {
        let lines: Vec<_> = NetlistLines::new("in 0 0\r\nnot 0\r\n", ' ')
            .map(|line| line.fields)
            .collect();
        assert_eq!(lines, vec![vec!["in", "0", "0"], vec!["not", "0"]]);
    }

    #[test]
    fn default_delimiter_is_space() {
        let line = NetlistLines::with_global_settings("  xor 1 2 ").next().unwrap();
        assert_eq!(line.fields, ["xor", "1", "2"]);
    }

    #[test]
    fn classify_fields() {
        let line = NetlistLines::new("and 0 1", ' ').next().unwrap();
        assert_eq!(line.operation(0), Ok(Operation::And));
        assert_eq!(line.probe_position(0, ProbingModel::Robust), Ok("and"));
        assert!(line.probe_position(0, ProbingModel::Standard).is_err());
    }

    #[test]
    fn located_errors() {
        let line = NetlistLines::new("in 0\n  nad 0 1", ' ')
            .with_file_name("masked.nl")
            .nth(1)
            .unwrap();
        let error = line.operation(0).unwrap_err();
        assert_eq!(
            error.to_string(),
            "masked.nl:2.3-5: error: Unknown operation \"nad\".\n    2 |   nad 0 1\n      |   ^~~"
        );
    }

    #[test]
    fn missing_field() {
        let line = NetlistLines::new("reg", ' ').next().unwrap();
        let error = line.probe_position(1, ProbingModel::Standard).unwrap_err();
        assert_eq!(
            error.to_string(),
            "1: error: Expected probe position as field 2, but the line has only 1."
        );
    }

    #[test]
    fn tab_separated_underline() {
        let line = NetlistLines::new("\tnad\t0", '\t').next().unwrap();
        assert_eq!(line.fields, ["nad", "0"]);
        assert_eq!(
            line.operation(0).unwrap_err().to_string(),
            "1.2-4: error: Unknown operation \"nad\".\n    1 |  nad 0\n      |  ^~~"
        );
    }

    #[test]
    fn line_numbers_saturate() {
        assert_eq!(line_number(0), 1);
        assert_eq!(line_number(i32::MAX as usize - 1), i32::MAX);
        assert_eq!(line_number(i32::MAX as usize), i32::MAX);
        assert_eq!(line_number(usize::MAX), i32::MAX);
    }

    #[test]
    fn field_columns() {
        let line = NetlistLines::new("xnor   12 7 # x", ' ').next().unwrap();
        assert_eq!(line.location(1).to_string(), "1.8-9");
        assert_eq!(line.location(2).to_string(), "1.11-11");
    }
}
