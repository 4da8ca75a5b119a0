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

//! Line normalization.
//!
//! Netlist lines are normalized in two independent steps: the comment, if
//! any, is cut off with [strip_comments], and surrounding white space is
//! removed with [strip].  [normalize] does both.

/// Characters that [strip] removes from either end of a string.
pub const WHITESPACE: [char; 4] = [' ', '\t', '\n', '\r'];

/// Character that introduces a comment running to the end of the line.
pub const COMMENT_MARKER: char = '#';

/// Returns `s` without leading and trailing [WHITESPACE].
///
/// Internal white space is kept.  A string made only of white space yields
/// the empty string.
pub fn strip(s: &str) -> &str {
    s.trim_matches(WHITESPACE)
}

/// Returns the part of `line` before the first [COMMENT_MARKER], or all of
/// `line` if it has no comment.
///
/// White space left in front of the marker is not removed.
pub fn strip_comments(line: &str) -> &str {
    match line.find(COMMENT_MARKER) {
        Some(position) => &line[..position],
        None => line,
    }
}

/// Strips the comment from `line`, then the white space around what is left.
pub fn normalize(line: &str) -> &str {
    strip(strip_comments(line))
}
