//! The contract every decorative frame implements
//!
//! Frames are the pluggable end of the pipeline: each one knows how
//! large a canvas it needs around a symbol of a given extent, and how
//! to compose the rendered symbol into its chrome. The composed
//! renderer never knows which frame it is talking to.

use crate::color::Color;
use crate::vector::Node;

/// A decorative frame strategy.
///
/// Implementations are stateless statics registered in the frame
/// registry. Both operations are pure; `compose` receives the fully
/// rendered symbol as a single group node and must place it inside the
/// canvas reported by `size_for` without clipping it (device mockups
/// may rescale it smaller, never crop it).
pub trait FrameRenderer: Send + Sync {
    /// Registry name, also used in logs.
    fn name(&self) -> &'static str;

    /// Total canvas (width, height) for a symbol of the given square
    /// pixel extent, including chrome and any caption allowance.
    fn size_for(&self, symbol_extent: f64) -> (f64, f64);

    /// Place the symbol inside the frame chrome.
    ///
    /// `caption` is the caller's text; frames designed around a caption
    /// substitute their own placeholder when it is `None`, the rest
    /// simply omit the text run.
    fn compose(
        &self,
        symbol: Node,
        symbol_extent: f64,
        foreground: Color,
        background: Color,
        caption: Option<&str>,
    ) -> Vec<Node>;
}
