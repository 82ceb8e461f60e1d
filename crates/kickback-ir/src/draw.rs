//! Plain-text circuit diagrams.
//!
//! Each qubit and classical bit gets one row. Instructions are packed into
//! columns left to right; an instruction goes into the first column after
//! everything already drawn on the rows it spans.
//!
//! ```text
//! q0: ─H──■──M─────
//! q1: ────⊕──╫──M──
//! c0: ═══════╩══╬══
//! c1: ══════════╩══
//! ```

use crate::circuit::Circuit;
use crate::gate::StandardGate;
use crate::instruction::{Instruction, InstructionKind};

const QUANTUM_WIRE: char = '─';
const CLASSICAL_WIRE: char = '═';

impl Circuit {
    /// Render the circuit as a text diagram.
    ///
    /// Returns an empty string for a circuit without wires.
    pub fn draw(&self) -> String {
        let nq = self.num_qubits();
        let rows = nq + self.num_clbits();
        if rows == 0 {
            return String::new();
        }

        let mut columns: Vec<Vec<Option<String>>> = vec![];
        let mut front = vec![0usize; rows];

        for inst in self.instructions() {
            let cells = cells(inst, nq);
            let (Some(lo), Some(hi)) = (
                cells.iter().map(|(r, _)| *r).min(),
                cells.iter().map(|(r, _)| *r).max(),
            ) else {
                continue;
            };
            let col = front[lo..=hi].iter().copied().max().unwrap_or(0);
            if col == columns.len() {
                columns.push(vec![None; rows]);
            }
            for (row, symbol) in cells {
                columns[col][row] = Some(symbol);
            }
            for f in &mut front[lo..=hi] {
                *f = col + 1;
            }
        }

        let labels: Vec<String> = (0..rows)
            .map(|r| {
                if r < nq {
                    format!("q{r}: ")
                } else {
                    format!("c{}: ", r - nq)
                }
            })
            .collect();
        let label_width = labels.iter().map(|l| l.chars().count()).max().unwrap_or(0);

        let widths: Vec<usize> = columns
            .iter()
            .map(|col| {
                col.iter()
                    .flatten()
                    .map(|s| s.chars().count())
                    .max()
                    .unwrap_or(1)
            })
            .collect();

        let mut lines = Vec::with_capacity(rows);
        for (row, label) in labels.iter().enumerate() {
            let wire = if row < nq {
                QUANTUM_WIRE
            } else {
                CLASSICAL_WIRE
            };
            let mut line = format!("{label:>label_width$}");
            for (col, width) in columns.iter().zip(&widths) {
                line.push(wire);
                match &col[row] {
                    Some(symbol) => line.push_str(&center(symbol, *width, wire)),
                    None => line.extend(std::iter::repeat_n(wire, *width)),
                }
                line.push(wire);
            }
            line.push(wire);
            lines.push(line);
        }
        lines.join("\n")
    }
}

/// Symbols an instruction places on each row it spans, including the rows
/// its vertical connector crosses.
fn cells(inst: &Instruction, nq: usize) -> Vec<(usize, String)> {
    let mut cells: Vec<(usize, String)> = match inst.kind {
        InstructionKind::Gate(gate) => gate_cells(gate, inst),
        InstructionKind::Measure => inst
            .qubits
            .iter()
            .map(|q| (q.index(), "M".to_string()))
            .chain(inst.clbits.iter().map(|c| (nq + c.index(), "╩".to_string())))
            .collect(),
        InstructionKind::Barrier => inst
            .qubits
            .iter()
            .map(|q| (q.index(), "░".to_string()))
            .collect(),
    };

    if inst.is_barrier() || cells.len() < 2 {
        return cells;
    }

    let lo = cells.iter().map(|(r, _)| *r).min().unwrap_or(0);
    let hi = cells.iter().map(|(r, _)| *r).max().unwrap_or(0);
    for row in lo..=hi {
        if cells.iter().any(|(r, _)| *r == row) {
            continue;
        }
        let crossing = match (inst.is_measure(), row < nq) {
            (true, true) => "╫",
            (true, false) => "╬",
            (false, true) => "┼",
            (false, false) => "╪",
        };
        cells.push((row, crossing.to_string()));
    }
    cells
}

fn gate_cells(gate: StandardGate, inst: &Instruction) -> Vec<(usize, String)> {
    let controls = gate.x_controls() as usize;
    match gate {
        StandardGate::CX | StandardGate::CCX | StandardGate::Mcx { .. } => inst
            .qubits
            .iter()
            .enumerate()
            .map(|(i, q)| {
                let symbol = if i < controls { "■" } else { "⊕" };
                (q.index(), symbol.to_string())
            })
            .collect(),
        StandardGate::CZ => inst
            .qubits
            .iter()
            .map(|q| (q.index(), "■".to_string()))
            .collect(),
        StandardGate::Swap => inst
            .qubits
            .iter()
            .map(|q| (q.index(), "×".to_string()))
            .collect(),
        _ => {
            let label = match gate {
                StandardGate::Sdg => "S†".to_string(),
                StandardGate::Tdg => "T†".to_string(),
                other => other.name().to_uppercase(),
            };
            inst.qubits.iter().map(|q| (q.index(), label.clone())).collect()
        }
    }
}

fn center(symbol: &str, width: usize, fill: char) -> String {
    let len = symbol.chars().count();
    let left = width.saturating_sub(len) / 2;
    let right = width.saturating_sub(len) - left;
    let mut out = String::with_capacity(width * 3);
    out.extend(std::iter::repeat_n(fill, left));
    out.push_str(symbol);
    out.extend(std::iter::repeat_n(fill, right));
    out
}
