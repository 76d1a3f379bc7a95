//! Finder-pattern (eye) rendering
//!
//! The three 7x7 finder patterns are drawn as concentric triples —
//! outer 7-cell shape in the eye color, inner 5-cell shape punched in
//! the background color, center 3-cell shape in the eye color — and
//! never via the generic module path. The fourth corner has no finder
//! pattern; that asymmetry is what lets scanners orient the symbol.

use qrframe_core::{Color, EyeStyle, Fill, Node, CELL};

/// Finder patterns span 7 cells per side.
pub const FINDER_SPAN: usize = 7;

/// Top-left cell of each finder pattern, as (row, col).
pub fn finder_positions(size: usize) -> [(usize, usize); 3] {
    [(0, 0), (0, size - FINDER_SPAN), (size - FINDER_SPAN, 0)]
}

/// Whether (row, col) falls inside any of the three finder regions.
pub fn in_finder(size: usize, row: usize, col: usize) -> bool {
    finder_positions(size)
        .iter()
        .any(|&(r0, c0)| row >= r0 && row < r0 + FINDER_SPAN && col >= c0 && col < c0 + FINDER_SPAN)
}

/// Render one eye at the finder pattern whose top-left cell is
/// (row, col). Always exactly three shapes, fg/bg/fg from the outside
/// in; `background` must be the symbol's actual background color so the
/// punched ring reads correctly on non-white symbols.
pub fn eye_nodes(
    row: usize,
    col: usize,
    style: EyeStyle,
    eye_color: Color,
    background: Color,
) -> Vec<Node> {
    let x0 = col as f64 * CELL;
    let y0 = row as f64 * CELL;

    // (cell inset, cells per side, fill) for the outer/inner/center rings.
    let rings: [(f64, f64, Color); 3] = [
        (0.0, 7.0, eye_color),
        (1.0, 5.0, background),
        (2.0, 3.0, eye_color),
    ];

    match style {
        EyeStyle::Square => rings
            .iter()
            .map(|&(inset, span, fill)| ring_rect(x0, y0, inset, span, 0.0, fill))
            .collect(),
        EyeStyle::Rounded => {
            let radii = [1.2 * CELL, 1.2 * CELL, 0.8 * CELL];
            rings
                .iter()
                .zip(radii)
                .map(|(&(inset, span, fill), rx)| ring_rect(x0, y0, inset, span, rx, fill))
                .collect()
        }
        EyeStyle::Leaf => {
            let radii = [2.0 * CELL, 2.0 * CELL, 1.2 * CELL];
            rings
                .iter()
                .zip(radii)
                .map(|(&(inset, span, fill), rx)| ring_rect(x0, y0, inset, span, rx, fill))
                .collect()
        }
        EyeStyle::Circle => {
            let cx = x0 + 3.5 * CELL;
            let cy = y0 + 3.5 * CELL;
            rings
                .iter()
                .map(|&(_, span, fill)| Node::circle(cx, cy, span / 2.0 * CELL, fill))
                .collect()
        }
        EyeStyle::Diamond => {
            let cx = x0 + 3.5 * CELL;
            let cy = y0 + 3.5 * CELL;
            rings
                .iter()
                .map(|&(_, span, fill)| diamond(cx, cy, span / 2.0 * CELL, fill))
                .collect()
        }
    }
}

fn ring_rect(x0: f64, y0: f64, inset: f64, span: f64, rx: f64, fill: Color) -> Node {
    Node::rounded_rect(
        x0 + inset * CELL,
        y0 + inset * CELL,
        span * CELL,
        span * CELL,
        rx,
        fill,
    )
}

/// A 45-degree rotated square as a 4-point polygon.
fn diamond(cx: f64, cy: f64, half: f64, fill: Color) -> Node {
    Node::Polygon {
        points: vec![
            (cx, cy - half),
            (cx + half, cy),
            (cx, cy + half),
            (cx - half, cy),
        ],
        fill: Fill::Solid(fill),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_finder_positions_skip_bottom_right() {
        let pos = finder_positions(21);
        assert_eq!(pos, [(0, 0), (0, 14), (14, 0)]);
        assert!(!in_finder(21, 14, 14)); // bottom-right corner cell
        assert!(in_finder(21, 0, 0));
        assert!(in_finder(21, 6, 20)); // last column of top-right finder
        assert!(in_finder(21, 20, 6));
        assert!(!in_finder(21, 7, 7));
    }

    #[test]
    fn every_style_emits_exactly_three_shapes() {
        for style in [
            EyeStyle::Square,
            EyeStyle::Circle,
            EyeStyle::Rounded,
            EyeStyle::Leaf,
            EyeStyle::Diamond,
        ] {
            let nodes = eye_nodes(0, 0, style, Color::black(), Color::white());
            assert_eq!(nodes.len(), 3, "style {style:?}");
        }
    }

    #[test]
    fn inner_ring_uses_background_color() {
        let bg = Color::new(10, 20, 30);
        let nodes = eye_nodes(0, 0, EyeStyle::Square, Color::black(), bg);
        match &nodes[1] {
            Node::Rect { fill: Fill::Solid(c), width, .. } => {
                assert_eq!(*c, bg);
                assert_eq!(*width, 5.0 * CELL);
            }
            other => panic!("expected inner rect, got {other:?}"),
        }
    }

    #[test]
    fn circle_eye_radii() {
        let nodes = eye_nodes(0, 0, EyeStyle::Circle, Color::black(), Color::white());
        let radii: Vec<f64> = nodes
            .iter()
            .map(|n| match n {
                Node::Circle { r, .. } => *r,
                other => panic!("expected circle, got {other:?}"),
            })
            .collect();
        assert_eq!(radii, vec![3.5 * CELL, 2.5 * CELL, 1.5 * CELL]);
    }

    #[test]
    fn diamond_eye_is_polygons() {
        let nodes = eye_nodes(0, 0, EyeStyle::Diamond, Color::black(), Color::white());
        assert!(nodes
            .iter()
            .all(|n| matches!(n, Node::Polygon { points, .. } if points.len() == 4)));
    }
}
