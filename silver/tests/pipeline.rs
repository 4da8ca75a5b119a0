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

use silver::{
    lines::NetlistLines,
    message::{Diagnostics, Severity},
    text::{strip, strip_comments},
    tokenize::split,
    vocab::{Arity, BINARY_OPS, Operation, UNARY_OPS},
    yosys::fix_yosys_netlist,
};

#[test]
fn gate_assignment() {
    let raw = "  g1 = and(a, b)  # AND gate\n";
    let uncommented = strip_comments(raw);
    assert_eq!(uncommented, "  g1 = and(a, b)  ");

    let fields = split(strip(uncommented), ' ');
    assert_eq!(fields, ["g1", "=", "and(a,", "b)"]);

    let call = split(fields[2], '(');
    assert_eq!(call, ["and", "a,"]);
    assert!(BINARY_OPS.contains(call[0]));
    assert!(!UNARY_OPS.contains(call[0]));
}

/// Reads a first-order masked AND gadget and checks every operation name.
#[test]
fn classify_netlist() {
    let netlist = "\
in 0 0   # a0
in 0 1   # a1
in 1 0   # b0
in 1 1   # b1
ref      # r
and 0 2
and 1 3
xor 4 5
xnr 6 4
reg 7
out 8 0
";
    let mut diagnostics = Diagnostics::default();
    let mut operations = Vec::new();
    for line in NetlistLines::new(netlist, ' ').with_file_name("dom_and.nl") {
        if matches!(line.fields[0], "in" | "ref") {
            continue;
        }
        match line.operation(0) {
            Ok(operation) => operations.push((line.number, operation)),
            Err(diagnostic) => diagnostics.push(diagnostic),
        }
    }

    assert_eq!(
        operations,
        [
            (6, Operation::And),
            (7, Operation::And),
            (8, Operation::Xor),
            (10, Operation::Reg),
            (11, Operation::Out),
        ]
    );
    assert_eq!(diagnostics.counts()[Severity::Error], 1);
    assert_eq!(
        diagnostics.to_string(),
        "dom_and.nl:9.1-3: error: Unknown operation \"xnr\".\n    9 | xnr 6 4\n      | ^~~\n"
    );
    assert_eq!(
        operations
            .iter()
            .filter(|(_, operation)| operation.arity() == Arity::Unary)
            .count(),
        2
    );
}

#[test]
fn yosys_output_then_tokenize() {
    let verilog = "input [1:0] x;\nwire [1:0] x;  // redundant\noutput y;";
    let fixed = fix_yosys_netlist(verilog);
    let lines: Vec<_> = NetlistLines::new(&fixed, ' ')
        .map(|line| line.fields)
        .collect();
    assert_eq!(
        lines,
        vec![vec!["input", "[1:0]", "x;"], vec!["output", "y;"]]
    );
}
