//! Polaroid frame: instant-photo card with the classic wide bottom
//! border and a soft drop shadow.

use qrframe_core::{Color, FrameRenderer, Node, Stroke};

use crate::CAPTION_SIZE;

const MARGIN: f64 = 25.0;
const BOTTOM: f64 = 70.0;
const SHADOW_OFFSET: f64 = 8.0;
const SHADOW_COLOR: Color = Color::new(160, 160, 160);

pub(crate) static POLAROID: PolaroidFrame = PolaroidFrame;

pub(crate) struct PolaroidFrame;

impl PolaroidFrame {
    fn card_size(symbol_extent: f64) -> (f64, f64) {
        (
            symbol_extent + 2.0 * MARGIN,
            symbol_extent + MARGIN + BOTTOM,
        )
    }
}

impl FrameRenderer for PolaroidFrame {
    fn name(&self) -> &'static str {
        "polaroid"
    }

    fn size_for(&self, symbol_extent: f64) -> (f64, f64) {
        let (w, h) = Self::card_size(symbol_extent);
        (w + SHADOW_OFFSET, h + SHADOW_OFFSET)
    }

    fn compose(
        &self,
        symbol: Node,
        symbol_extent: f64,
        foreground: Color,
        background: Color,
        caption: Option<&str>,
    ) -> Vec<Node> {
        let (card_w, card_h) = Self::card_size(symbol_extent);
        let mut nodes = vec![
            Node::rect(SHADOW_OFFSET, SHADOW_OFFSET, card_w, card_h, SHADOW_COLOR),
            Node::rect(0.0, 0.0, card_w, card_h, background)
                .with_stroke(Stroke::new(SHADOW_COLOR, 1.0)),
            crate::place(symbol, MARGIN, MARGIN),
        ];
        if let Some(text) = caption {
            nodes.push(Node::caption(
                card_w / 2.0,
                symbol_extent + MARGIN + (BOTTOM + CAPTION_SIZE) / 2.0,
                text,
                CAPTION_SIZE,
                foreground,
            ));
        }
        nodes
    }
}
