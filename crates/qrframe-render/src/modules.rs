//! Module geometry engine
//!
//! One vector primitive per dark cell, in the cell's shape of choice.
//! Coordinates are in the shared virtual cell grid (see [`CELL`]); the
//! skip predicate carves out finder regions and excavated cells so this
//! loop never has to know why a cell is off-limits.

use qrframe_core::{Fill, ModuleStyle, Node, CELL};

use crate::matrix::SymbolMatrix;

/// Dots are deliberately undersized relative to the half-cell so
/// adjacent dots don't merge into solid blocks.
const DOT_RADIUS: f64 = CELL / 2.2;
const ROUNDED_INSET: f64 = 0.5;
const ROUNDED_RADIUS: f64 = CELL / 3.0;

/// Emit one shape per dark cell not excluded by `skip`.
///
/// Pure function of its inputs; malformed matrices are a caller-side
/// precondition, not checked here.
pub fn module_nodes(
    matrix: &SymbolMatrix,
    style: ModuleStyle,
    fill: &Fill,
    skip: impl Fn(usize, usize) -> bool,
) -> Vec<Node> {
    let size = matrix.size();
    let mut nodes = Vec::new();

    for row in 0..size {
        for col in 0..size {
            if !matrix.dark(row, col) || skip(row, col) {
                continue;
            }
            let x = col as f64 * CELL;
            let y = row as f64 * CELL;
            nodes.push(match style {
                ModuleStyle::Square => Node::rect(x, y, CELL, CELL, fill.clone()),
                ModuleStyle::Dots => {
                    Node::circle(x + CELL / 2.0, y + CELL / 2.0, DOT_RADIUS, fill.clone())
                }
                ModuleStyle::Rounded => Node::rounded_rect(
                    x + ROUNDED_INSET,
                    y + ROUNDED_INSET,
                    CELL - 2.0 * ROUNDED_INSET,
                    CELL - 2.0 * ROUNDED_INSET,
                    ROUNDED_RADIUS,
                    fill.clone(),
                ),
            });
        }
    }

    nodes
}
