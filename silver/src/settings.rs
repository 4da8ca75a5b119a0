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

//! Settings shared by the netlist reader and the components that consume
//! its output.

use std::sync::OnceLock;

use enum_map::EnumMap;

use crate::{message::Severity, tokenize};

/// Default tolerance for deciding that two floating-point values are equal.
///
/// The tokenizer does not use it; it is part of the shared configuration for
/// the numeric evaluation downstream.
pub const DOUBLE_COMPARE_THRESHOLD: f64 = 0.000001;

#[derive(Clone, Debug, PartialEq)]
pub struct Settings {
    /// Tolerance for floating-point equality.
    pub double_compare_threshold: f64,

    /// Delimiter between the fields of a netlist line.
    pub delimiter: char,

    /// Diagnostics of each severity beyond which a reader should give up.
    pub max_messages: EnumMap<Severity, usize>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            double_compare_threshold: DOUBLE_COMPARE_THRESHOLD,
            delimiter: tokenize::DEFAULT_DELIMITER,
            max_messages: EnumMap::from_fn(|_| 100),
        }
    }
}

static GLOBAL: OnceLock<Settings> = OnceLock::new();

impl Settings {
    /// Returns the process-wide settings.
    ///
    /// These are the defaults unless [Settings::install] ran first.
    pub fn global() -> &'static Settings {
        GLOBAL.get_or_init(Settings::default)
    }

    /// Makes `self` the process-wide settings.
    ///
    /// This only works before the first call to [Settings::global]; afterward
    /// the settings are fixed and `self` is handed back as the error.
    pub fn install(self) -> Result<(), Settings> {
        GLOBAL.set(self)
    }
}
