//! Ticket frame: admission-ticket body with a perforated stub.

use qrframe_core::{Color, FrameRenderer, Node, Stroke};

use crate::{place, BORDER_WIDTH, CAPTION_SIZE, PAD};

const STUB_WIDTH: f64 = 80.0;
const PERF_RADIUS: f64 = 4.0;
const PERF_SPACING: f64 = 18.0;

pub(crate) static TICKET: TicketFrame = TicketFrame;

pub(crate) struct TicketFrame;

impl FrameRenderer for TicketFrame {
    fn name(&self) -> &'static str {
        "ticket"
    }

    fn size_for(&self, symbol_extent: f64) -> (f64, f64) {
        (
            symbol_extent + 2.0 * PAD + STUB_WIDTH,
            symbol_extent + 2.0 * PAD,
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
        let perf_x = width - STUB_WIDTH;

        let mut nodes = vec![
            Node::rounded_rect(
                BORDER_WIDTH / 2.0,
                BORDER_WIDTH / 2.0,
                width - BORDER_WIDTH,
                height - BORDER_WIDTH,
                14.0,
                background,
            )
            .with_stroke(Stroke::new(foreground, BORDER_WIDTH)),
            place(symbol, PAD, PAD),
        ];

        // Perforation dots along the tear line.
        let mut y = PERF_SPACING;
        while y < height - PERF_SPACING / 2.0 {
            nodes.push(Node::circle(perf_x, y, PERF_RADIUS, foreground));
            y += PERF_SPACING;
        }

        if let Some(text) = caption {
            // Stub label; the stub is narrow, so scale the text to fit.
            let size = CAPTION_SIZE.min(STUB_WIDTH / text.len().max(1) as f64 * 1.6);
            nodes.push(Node::caption(
                perf_x + STUB_WIDTH / 2.0,
                height / 2.0 + size / 3.0,
                text,
                size,
                foreground,
            ));
        }
        nodes
    }
}
