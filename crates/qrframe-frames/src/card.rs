//! Plain card frame: padding and a rounded backdrop, nothing else.

use qrframe_core::{Color, FrameRenderer, Node};

use crate::{backdrop, place};

const MARGIN: f64 = 25.0;

pub(crate) static CARD: CardFrame = CardFrame;

pub(crate) struct CardFrame;

impl FrameRenderer for CardFrame {
    fn name(&self) -> &'static str {
        "card"
    }

    fn size_for(&self, symbol_extent: f64) -> (f64, f64) {
        (symbol_extent + 2.0 * MARGIN, symbol_extent + 2.0 * MARGIN)
    }

    fn compose(
        &self,
        symbol: Node,
        symbol_extent: f64,
        foreground: Color,
        background: Color,
        _caption: Option<&str>,
    ) -> Vec<Node> {
        let (width, height) = self.size_for(symbol_extent);
        vec![
            backdrop(width, height, 18.0, foreground, background),
            place(symbol, MARGIN, MARGIN),
        ]
    }
}
