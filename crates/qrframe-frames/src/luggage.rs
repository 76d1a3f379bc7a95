//! Luggage-tag frame: tag card with a punch hole above the symbol.

use qrframe_core::{Color, FrameRenderer, Node, Stroke};

use crate::{backdrop, place, CAPTION_SIZE, PAD};

const HOLE_BAND: f64 = 50.0;
const HOLE_RADIUS: f64 = 10.0;
const LABEL_BAND: f64 = 50.0;

pub(crate) static LUGGAGE: LuggageFrame = LuggageFrame;

pub(crate) struct LuggageFrame;

impl FrameRenderer for LuggageFrame {
    fn name(&self) -> &'static str {
        "luggage"
    }

    fn size_for(&self, symbol_extent: f64) -> (f64, f64) {
        (
            symbol_extent + 2.0 * PAD,
            HOLE_BAND + symbol_extent + LABEL_BAND,
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
        let mut nodes = vec![
            backdrop(width, height, 20.0, foreground, background),
            Node::circle(width / 2.0, HOLE_BAND / 2.0, HOLE_RADIUS, background)
                .with_stroke(Stroke::new(foreground, 3.0)),
            place(symbol, PAD, HOLE_BAND),
        ];
        if let Some(text) = caption {
            nodes.push(Node::caption(
                width / 2.0,
                HOLE_BAND + symbol_extent + (LABEL_BAND + CAPTION_SIZE) / 2.0 - 4.0,
                text,
                CAPTION_SIZE,
                foreground,
            ));
        }
        nodes
    }
}
