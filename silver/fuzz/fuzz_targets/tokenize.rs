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

#![no_main]

use libfuzzer_sys::fuzz_target;
use silver::{
    lines::NetlistLines,
    text::{normalize, strip},
    tokenize::split,
};

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        for line in input.split('\n') {
            let normalized = normalize(line);
            assert_eq!(strip(normalized), normalized);
            assert!(!normalized.contains('#'));
            for field in split(normalized, ' ') {
                assert!(!field.is_empty());
                assert_eq!(strip(field), field);
            }
        }
        for line in NetlistLines::new(input, ',') {
            assert!(!line.fields.is_empty());
            for index in 0..line.fields.len() {
                let _ = line.location(index).to_string();
            }
        }
    }
});
