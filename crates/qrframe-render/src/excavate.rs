//! Logo excavation
//!
//! Clears a centered square of data modules so a logo can sit on top
//! without occlusion. The cleared region is 22% of the symbol's width
//! (half-extent `floor(size * 0.11)` cells each side of center); the
//! logo overlay itself is drawn at 20% of the pixel extent, so the
//! excavation leaves a thin quiet margin around the image.

use qrframe_core::{Node, CELL};

const HALF_EXTENT_FRACTION: f64 = 0.11;
const LOGO_FRACTION: f64 = 0.2;

/// The keep-out predicate for a logo overlay.
///
/// With no logo configured the predicate is constant-false and renders
/// cost nothing extra.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Excavation {
    /// Inclusive (low, high) cell bounds on both axes, if active.
    bounds: Option<(usize, usize)>,
}

impl Excavation {
    pub fn for_symbol(size: usize, has_logo: bool) -> Self {
        if !has_logo {
            return Self { bounds: None };
        }
        let center = size / 2;
        let half = (size as f64 * HALF_EXTENT_FRACTION).floor() as usize;
        Self {
            bounds: Some((center.saturating_sub(half), center + half)),
        }
    }

    /// Whether the cell at (row, col) is excavated.
    #[inline]
    pub fn contains(&self, row: usize, col: usize) -> bool {
        match self.bounds {
            Some((lo, hi)) => row >= lo && row <= hi && col >= lo && col <= hi,
            None => false,
        }
    }

    pub fn is_active(&self) -> bool {
        self.bounds.is_some()
    }
}

/// The raster overlay for the logo itself: 20% of the pixel extent,
/// centered, drawn after all module and eye shapes.
pub fn logo_overlay(symbol_extent: f64, href: &str) -> Node {
    let side = symbol_extent * LOGO_FRACTION;
    let origin = (symbol_extent - side) / 2.0;
    Node::Image {
        x: origin,
        y: origin,
        width: side,
        height: side,
        href: href.to_owned(),
    }
}
