//! Name-badge frame: conference-badge header band over the symbol.
//!
//! The header always carries text; "Visitor" stands in when the caller
//! supplies no caption.

use qrframe_core::{Color, FrameRenderer, Node, Stroke};

use crate::{place, BORDER_WIDTH, CAPTION_SIZE, PAD};

const HEADER_HEIGHT: f64 = 60.0;
const DEFAULT_CAPTION: &str = "Visitor";

pub(crate) static NAME_BADGE: NameBadgeFrame = NameBadgeFrame;

pub(crate) struct NameBadgeFrame;

impl FrameRenderer for NameBadgeFrame {
    fn name(&self) -> &'static str {
        "name-badge"
    }

    fn size_for(&self, symbol_extent: f64) -> (f64, f64) {
        (
            symbol_extent + 2.0 * PAD,
            HEADER_HEIGHT + symbol_extent + 2.0 * PAD,
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

        vec![
            Node::rounded_rect(
                BORDER_WIDTH / 2.0,
                BORDER_WIDTH / 2.0,
                width - BORDER_WIDTH,
                height - BORDER_WIDTH,
                10.0,
                background,
            )
            .with_stroke(Stroke::new(foreground, BORDER_WIDTH)),
            // Header band, squared off against the body below.
            Node::rounded_rect(0.0, 0.0, width, HEADER_HEIGHT, 10.0, foreground),
            Node::rect(0.0, HEADER_HEIGHT - 10.0, width, 10.0, foreground),
            Node::caption(
                width / 2.0,
                HEADER_HEIGHT / 2.0 + CAPTION_SIZE / 3.0,
                text,
                CAPTION_SIZE,
                background,
            ),
            place(symbol, PAD, HEADER_HEIGHT + PAD),
        ]
    }
}
