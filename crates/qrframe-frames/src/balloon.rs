//! Speech-balloon frame: rounded bubble with a tail pointing at
//! whatever the balloon is attached to.

use qrframe_core::{Color, Fill, FrameRenderer, Node, Stroke};

use crate::{place, BORDER_WIDTH, CAPTION_ALLOWANCE, CAPTION_SIZE, PAD};

const TAIL_HEIGHT: f64 = 34.0;
const TAIL_HALF_WIDTH: f64 = 20.0;
const BUBBLE_RADIUS: f64 = 26.0;

pub(crate) static BALLOON: BalloonFrame = BalloonFrame;

pub(crate) struct BalloonFrame;

impl BalloonFrame {
    fn bubble_height(symbol_extent: f64) -> f64 {
        symbol_extent + 2.0 * PAD + CAPTION_ALLOWANCE
    }
}

impl FrameRenderer for BalloonFrame {
    fn name(&self) -> &'static str {
        "balloon"
    }

    fn size_for(&self, symbol_extent: f64) -> (f64, f64) {
        (
            symbol_extent + 2.0 * PAD,
            Self::bubble_height(symbol_extent) + TAIL_HEIGHT,
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
        let (width, _) = self.size_for(symbol_extent);
        let bubble_height = Self::bubble_height(symbol_extent);
        let cx = width / 2.0;

        let mut nodes = vec![
            Node::rounded_rect(
                BORDER_WIDTH / 2.0,
                BORDER_WIDTH / 2.0,
                width - BORDER_WIDTH,
                bubble_height - BORDER_WIDTH,
                BUBBLE_RADIUS,
                background,
            )
            .with_stroke(Stroke::new(foreground, BORDER_WIDTH)),
            Node::Polygon {
                points: vec![
                    (cx - TAIL_HALF_WIDTH, bubble_height - BORDER_WIDTH),
                    (cx + TAIL_HALF_WIDTH, bubble_height - BORDER_WIDTH),
                    (cx, bubble_height + TAIL_HEIGHT - BORDER_WIDTH),
                ],
                fill: Fill::Solid(foreground),
            },
            place(symbol, PAD, PAD),
        ];
        if let Some(text) = caption {
            nodes.push(Node::caption(
                cx,
                PAD + symbol_extent + (CAPTION_ALLOWANCE + CAPTION_SIZE) / 2.0,
                text,
                CAPTION_SIZE,
                foreground,
            ));
        }
        nodes
    }
}
