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

use std::{
    fmt::{Debug, Display, Formatter, Result as FmtResult},
    ops::Range,
    sync::Arc,
};

use enum_map::{Enum, EnumMap};
use unicode_width::UnicodeWidthStr;

use crate::settings::Settings;

/// A line number and optional column number within a netlist.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Point {
    /// 1-based line number.
    pub line: i32,

    /// 1-based column number.
    ///
    /// Columns are measured in display width as computed by the
    /// `unicode_width` crate, so that underlines line up with the source text
    /// in a fixed-width font.
    pub column: Option<i32>,
}

impl Point {
    /// Returns the point reached by starting at `self` and passing over
    /// `text`, counting a line for each new-line and a column for each
    /// column of display width.
    pub fn advance(&self, text: &str) -> Self {
        let mut result = *self;
        for line in text.split_inclusive('\n') {
            if line.ends_with('\n') {
                result.line += 1;
                result.column = Some(1);
            } else {
                result.column = result.column.map(|column| column + line.width() as i32);
            }
        }
        result
    }

    pub fn without_column(&self) -> Self {
        Self {
            line: self.line,
            column: None,
        }
    }
}

/// Location relevant to a diagnostic message.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Location {
    /// File name, if any.
    pub file_name: Option<Arc<String>>,

    /// Starting and ending point, if any.  The end is exclusive.
    pub span: Option<Range<Point>>,
}

impl Display for Location {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        if let Some(file_name) = &self.file_name {
            write!(f, "{}", file_name)?;
        }

        if let Some(span) = &self.span {
            if self.file_name.is_some() {
                write!(f, ":")?;
            }
            let l1 = span.start.line;
            let l2 = span.end.line;
            match (span.start.column.zip(span.end.column), l2 > l1) {
                (Some((c1, c2)), true) => write!(f, "{l1}.{c1}-{l2}.{}", c2 - 1)?,
                (Some((c1, c2)), false) => write!(f, "{l1}.{c1}-{}", c2 - 1)?,
                (None, true) => write!(f, "{l1}-{l2}")?,
                (None, false) => write!(f, "{l1}")?,
            }
        }
        Ok(())
    }
}

impl Location {
    pub fn is_empty(&self) -> bool {
        self.file_name.is_none() && self.span.is_none()
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Enum)]
pub enum Severity {
    Error,
    Warning,
    Note,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Note => "note",
        }
    }
}

impl Display for Severity {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.as_str())
    }
}

/// A message about a netlist, with the source lines it refers to.
#[derive(Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub severity: Severity,
    pub location: Location,

    /// Source lines quoted below the message, as `(line number, text)`.
    pub source: Vec<(i32, String)>,

    pub text: String,
}

impl Diagnostic {
    pub fn new(severity: Severity, text: impl Into<String>) -> Self {
        Self {
            severity,
            location: Location::default(),
            source: Vec::new(),
            text: text.into(),
        }
    }

    pub fn with_location(self, location: Location) -> Self {
        Self { location, ..self }
    }

    pub fn with_source(mut self, line_number: i32, line: impl Into<String>) -> Self {
        self.source.push((line_number, line.into()));
        self
    }
}

impl Display for Diagnostic {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        if !self.location.is_empty() {
            write!(f, "{}: ", self.location)?;
        }
        write!(f, "{}: {}", self.severity, self.text)?;

        let Some(Range {
            start: Point {
                line: l0,
                column: Some(c0),
            },
            end: Point {
                line: l1,
                column: Some(c1),
            },
        }) = self.location.span
        else {
            return Ok(());
        };

        let mut prev_line_number = None;
        for (line_number, line) in &self.source {
            if let Some(prev_line_number) = prev_line_number
                && *line_number != prev_line_number + 1
            {
                write!(f, "\n  ... |")?;
            }
            prev_line_number = Some(*line_number);

            // `Point::advance` counts a tab as one column.
            let line = line.replace('\t', " ");
            write!(f, "\n{line_number:5} | {line}")?;

            let start = if *line_number == l0 { c0 } else { 1 };
            let end = if *line_number == l1 {
                c1
            } else {
                line.width() as i32 + 1
            };
            write!(f, "\n      | ")?;
            for _ in 1..start {
                f.write_str(" ")?;
            }
            f.write_str(if *line_number == l0 { "^" } else { "~" })?;
            for _ in start + 1..end {
                f.write_str("~")?;
            }
        }
        Ok(())
    }
}

impl Debug for Diagnostic {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        Display::fmt(&self, f)
    }
}

/// Diagnostics collected while reading a netlist.
#[derive(Debug, Default)]
pub struct Diagnostics(pub Vec<Diagnostic>);

impl Diagnostics {
    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.0.push(diagnostic);
    }

    /// Number of diagnostics of each severity.
    pub fn counts(&self) -> EnumMap<Severity, usize> {
        let mut counts = EnumMap::default();
        for diagnostic in &self.0 {
            counts[diagnostic.severity] += 1;
        }
        counts
    }

    pub fn has_errors(&self) -> bool {
        self.counts()[Severity::Error] > 0
    }

    /// Returns true if there are more diagnostics of some severity than
    /// `settings.max_messages` allows.
    pub fn exceeds_limits(&self, settings: &Settings) -> bool {
        self.counts()
            .iter()
            .any(|(severity, count)| *count > settings.max_messages[severity])
    }
}

impl From<Diagnostic> for Diagnostics {
    fn from(value: Diagnostic) -> Self {
        Self(vec![value])
    }
}

impl Display for Diagnostics {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        for diagnostic in &self.0 {
            writeln!(f, "{diagnostic}")?;
        }
        Ok(())
    }
}
