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

//! Lexical front-end for SILVER netlists.
//!
//! A SILVER netlist describes a masked circuit one gate per line, for
//! probing-security verification.  This crate turns netlist text into clean
//! token sequences and classifies tokens against the netlist vocabulary:
//!
//! 1. [text] strips comments and surrounding white space from a line.
//!
//! 2. [tokenize] splits a normalized line into fields.
//!
//! 3. [vocab] holds the fixed sets of operation and probe-position names and
//!    classifies tokens against them.
//!
//! [lines] combines these steps over a whole netlist and reports bad fields
//! as [message::Diagnostic]s.  [yosys] prepares Verilog netlists written by
//! Yosys, and [settings] holds configuration shared with the analysis that
//! consumes the tokens.
//!
//! Nothing here checks the structure of a netlist, such as arity or wire
//! connectivity.  That is the parser's job.

pub mod lines;
pub mod message;
pub mod settings;
pub mod text;
pub mod tokenize;
pub mod vocab;
pub mod yosys;

/// Returns the byte offset of `substr` within `s`, if `substr` is a slice
/// of `s`.
pub(crate) fn substr_offset(s: &str, substr: &str) -> Option<usize> {
    let start = substr.as_ptr().addr().wrapping_sub(s.as_ptr().addr());
    let end = start.wrapping_add(substr.len());
    if start <= s.len() && end <= s.len() {
        Some(start)
    } else {
        None
    }
}
