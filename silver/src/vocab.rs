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

//! Netlist vocabulary.
//!
//! A netlist names gate operations and, for probing-security analysis, the
//! circuit positions that a probe may observe.  Both come from small fixed
//! sets of case-sensitive words.  New gate types are added by extending the
//! sets; existing words are never removed or renamed, so that old netlists
//! stay readable.

use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    iter::Copied,
    slice::Iter,
    str::FromStr,
};

use thiserror::Error as ThisError;

/// A fixed set of words.
///
/// Membership is exact string comparison.  Callers normalize tokens (see
/// [crate::text]) before testing them.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Vocabulary {
    name: &'static str,
    words: &'static [&'static str],
}

impl Vocabulary {
    const fn new(name: &'static str, words: &'static [&'static str]) -> Self {
        Self { name, words }
    }

    /// Short human-readable name of the set, for messages.
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn contains(&self, token: &str) -> bool {
        self.words.iter().any(|word| *word == token)
    }

    pub fn iter(&self) -> Copied<Iter<'static, &'static str>> {
        let words: &'static [&'static str] = self.words;
        words.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Display for Vocabulary {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{{{}}}", self.words.join(", "))
    }
}

/// Operations that take one operand.
pub static UNARY_OPS: Vocabulary = Vocabulary::new("unary operation", &["out", "reg", "not"]);

/// Operations that take two operands.
pub static BINARY_OPS: Vocabulary = Vocabulary::new(
    "binary operation",
    &["and", "nand", "or", "nor", "xor", "xnor"],
);

/// Positions observable under the standard probing model.
pub static STANDARD_PROBES: Vocabulary =
    Vocabulary::new("standard probe position", &["reg", "out"]);

/// Positions observable under the robust probing model.
///
/// Robust probes also see gate inputs and fresh randomness, so this set is
/// larger than [STANDARD_PROBES].
pub static ROBUST_PROBES: Vocabulary = Vocabulary::new(
    "robust probe position",
    &["in", "ref", "not", "and", "nand", "or", "nor", "xor", "xnor"],
);

#[derive(ThisError, Clone, Debug, PartialEq, Eq)]
pub enum VocabularyError {
    /// Token is neither a unary nor a binary operation.
    #[error("Unknown operation {0:?}.")]
    UnknownOperation(String),

    /// Token is not a probe position in the requested model.
    #[error("{token:?} is not a probe position under the {model} probing model.")]
    NotProbePosition { token: String, model: ProbingModel },
}

/// Number of operands of an [Operation].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Arity {
    Unary,
    Binary,
}

impl Arity {
    pub fn vocabulary(self) -> &'static Vocabulary {
        match self {
            Arity::Unary => &UNARY_OPS,
            Arity::Binary => &BINARY_OPS,
        }
    }

    pub fn operands(self) -> usize {
        match self {
            Arity::Unary => 1,
            Arity::Binary => 2,
        }
    }
}

/// A gate operation.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Operation {
    /// `out`: primary output.
    Out,

    /// `reg`: register.
    Reg,

    /// `not`.
    Not,

    /// `and`.
    And,

    /// `nand`.
    Nand,

    /// `or`.
    Or,

    /// `nor`.
    Nor,

    /// `xor`.
    Xor,

    /// `xnor`.
    Xnor,
}

impl Operation {
    pub const ALL: [Operation; 9] = [
        Self::Out,
        Self::Reg,
        Self::Not,
        Self::And,
        Self::Nand,
        Self::Or,
        Self::Nor,
        Self::Xor,
        Self::Xnor,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Out => "out",
            Self::Reg => "reg",
            Self::Not => "not",
            Self::And => "and",
            Self::Nand => "nand",
            Self::Or => "or",
            Self::Nor => "nor",
            Self::Xor => "xor",
            Self::Xnor => "xnor",
        }
    }

    pub fn arity(&self) -> Arity {
        match self {
            Self::Out | Self::Reg | Self::Not => Arity::Unary,
            Self::And | Self::Nand | Self::Or | Self::Nor | Self::Xor | Self::Xnor => {
                Arity::Binary
            }
        }
    }

    /// Returns true if this operation's output can be probed under `model`.
    pub fn is_probe_position(&self, model: ProbingModel) -> bool {
        model.is_probe_position(self.as_str())
    }
}

impl Display for Operation {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Operation {
    type Err = VocabularyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|operation| operation.as_str() == s)
            .ok_or_else(|| VocabularyError::UnknownOperation(s.into()))
    }
}

/// Threat model that decides which circuit positions a probe may observe.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ProbingModel {
    /// Probes observe register and output values.
    #[default]
    Standard,

    /// Probes additionally observe gate inputs, glitches included.
    Robust,
}

impl ProbingModel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Robust => "robust",
        }
    }

    pub fn positions(&self) -> &'static Vocabulary {
        match self {
            Self::Standard => &STANDARD_PROBES,
            Self::Robust => &ROBUST_PROBES,
        }
    }

    pub fn is_probe_position(&self, token: &str) -> bool {
        self.positions().contains(token)
    }

    /// Returns `token` if it is a probe position under this model.
    pub fn probe_position<'a>(&self, token: &'a str) -> Result<&'a str, VocabularyError> {
        if self.is_probe_position(token) {
            Ok(token)
        } else {
            Err(VocabularyError::NotProbePosition {
                token: token.into(),
                model: *self,
            })
        }
    }
}

impl Display for ProbingModel {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.as_str())
    }
}
