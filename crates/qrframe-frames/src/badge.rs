//! Scan-me badge: card with a pill-shaped call-to-action caption.
//!
//! This frame is built around its caption; when the caller supplies
//! none the pill still renders with the stock "Scan Me" text.

use qrframe_core::{Color, FrameRenderer, Node};

use crate::{backdrop, place, CAPTION_SIZE, PAD};

const PILL_HEIGHT: f64 = 44.0;
const PILL_GAP: f64 = 12.0;
const DEFAULT_CAPTION: &str = "Scan Me";

pub(crate) static BADGE: BadgeFrame = BadgeFrame;

pub(crate) struct BadgeFrame;

impl FrameRenderer for BadgeFrame {
    fn name(&self) -> &'static str {
        "badge"
    }

    fn size_for(&self, symbol_extent: f64) -> (f64, f64) {
        (
            symbol_extent + 2.0 * PAD,
            symbol_extent + 2.0 * PAD + PILL_GAP + PILL_HEIGHT + PAD,
        )
    }

    fn compose(
        &self,
        symbol: Node,
        symbol_extent: f64,
        foreground: Color,
        background: Color,
        caption: Option<&str>,
    ) -> Vec<Node> {
        let (width, height) = self.size_for(symbol_extent);
        let text = caption.unwrap_or(DEFAULT_CAPTION);

        let pill_width = (symbol_extent * 0.7).max(120.0);
        let pill_x = (width - pill_width) / 2.0;
        let pill_y = PAD + symbol_extent + PAD + PILL_GAP;

        vec![
            backdrop(width, height, 16.0, foreground, background),
            place(symbol, PAD, PAD),
            Node::rounded_rect(
                pill_x,
                pill_y,
                pill_width,
                PILL_HEIGHT,
                PILL_HEIGHT / 2.0,
                foreground,
            ),
            Node::caption(
                width / 2.0,
                pill_y + PILL_HEIGHT / 2.0 + CAPTION_SIZE / 3.0,
                text,
                CAPTION_SIZE,
                background,
            ),
        ]
    }
}
