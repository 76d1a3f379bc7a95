//! Simple border frame: a stroked card with an optional caption line
//! under the symbol.

use qrframe_core::{Color, FrameRenderer, Node};

use crate::{backdrop, place, CAPTION_ALLOWANCE, CAPTION_SIZE, PAD};

pub(crate) static SIMPLE: SimpleFrame = SimpleFrame;

pub(crate) struct SimpleFrame;

impl FrameRenderer for SimpleFrame {
    fn name(&self) -> &'static str {
        "simple"
    }

    fn size_for(&self, symbol_extent: f64) -> (f64, f64) {
        (
            symbol_extent + 2.0 * PAD,
            symbol_extent + 2.0 * PAD + CAPTION_ALLOWANCE,
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
            backdrop(width, height, 12.0, foreground, background),
            place(symbol, PAD, PAD),
        ];
        if let Some(text) = caption {
            nodes.push(Node::caption(
                width / 2.0,
                height - (CAPTION_ALLOWANCE - CAPTION_SIZE) / 2.0 - 6.0,
                text,
                CAPTION_SIZE,
                foreground,
            ));
        }
        nodes
    }
}
