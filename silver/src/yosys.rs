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

//! Cleanup of Verilog netlists written by Yosys.
//!
//! Yosys may follow a port declaration such as `input [3:0] a;` with a
//! redundant `wire [3:0] a;` for the same signal, which some readers reject
//! as a duplicate declaration.  [fix_yosys_netlist] drops those lines.

use std::sync::LazyLock;

use log::debug;
use regex::{Captures, Regex};

static PORT_DECLARATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(input|output|inout)\s+((wire|reg)\s+)?(\[\s*\d+\s*:\s*\d+\s*\]\s*)?(\S+)\s*;")
        .unwrap()
});

static NET_DECLARATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(wire|reg)\s*(\[\s*\d+\s*:\s*\d+\s*\]\s*)?(\S+)\s*;").unwrap()
});

fn range<'a>(captures: &Captures<'a>, group: usize) -> Option<&'a str> {
    captures.get(group).map(|m| m.as_str().trim())
}

/// Returns true if `line` declares the net `name` with bit range `range`
/// (for example `[3:0]`, or `None` for a scalar).
fn redeclares(line: &str, port_range: Option<&str>, name: &str) -> bool {
    let Some(captures) = NET_DECLARATION.captures(line) else {
        return false;
    };
    range(&captures, 2) == port_range && &captures[3] == name
}

/// Removes each `wire` or `reg` declaration that immediately follows a port
/// declaration of the same net with the same range.
///
/// All other lines are kept as they are.  Lines are separated by `\n` on
/// input and output.
pub fn fix_yosys_netlist(content: &str) -> String {
    let lines: Vec<&str> = content.split('\n').collect();
    let mut output = Vec::with_capacity(lines.len());
    let mut i = 0;
    while i < lines.len() {
        let line = lines[i];
        output.push(line);
        i += 1;

        let Some(port) = PORT_DECLARATION.captures(line) else {
            continue;
        };
        let name = &port[5];
        debug!("found {} {name}", &port[1]);

        if let Some(&next) = lines.get(i)
            && redeclares(next, range(&port, 4), name)
        {
            debug!("dropping redundant declaration {next:?}");
            i += 1;
        }
    }
    output.join("\n")
}

#[cfg(test)]
mod test {
    use super::fix_yosys_netlist;

    fn init() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    #[test]
    fn drops_redundant_wire() {
        init();
        let input = "\
module top(a, y);
  input [3:0] a;
  wire [3:0] a;
  output y;
  wire y;
endmodule";
        assert_eq!(
            fix_yosys_netlist(input),
            "\
module top(a, y);
  input [3:0] a;
  output y;
endmodule"
        );
    }

    #[test]
    fn keeps_unrelated_declarations() {
        init();
        let input = "\
  input a;
  wire b;
  input [3:0] c;
  wire c;
  output [1:0] d;
  wire [2:0] d;
  inout e;

  wire e;";
        assert_eq!(fix_yosys_netlist(input), input);
    }

    #[test]
    fn port_with_net_type() {
        init();
        let input = "output reg [7:0] q;\nreg [7:0] q;\nassign x = q;";
        assert_eq!(fix_yosys_netlist(input), "output reg [7:0] q;\nassign x = q;");
    }

    #[test]
    fn range_spacing_must_match() {
        init();
        let input = "input [3 : 0] a;\nwire [3 : 0] a;\ninput [3:0] b;\nwire [3 : 0] b;";
        assert_eq!(
            fix_yosys_netlist(input),
            "input [3 : 0] a;\ninput [3:0] b;\nwire [3 : 0] b;"
        );
    }

    #[test]
    fn last_line_is_a_port() {
        init();
        assert_eq!(fix_yosys_netlist("input a;"), "input a;");
        assert_eq!(fix_yosys_netlist(""), "");
    }
}
