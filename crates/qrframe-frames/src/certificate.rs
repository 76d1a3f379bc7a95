//! Certificate frame: formal double border with a caption line.

use qrframe_core::{Color, Fill, FrameRenderer, Node, Stroke};

use crate::{place, CAPTION_ALLOWANCE, CAPTION_SIZE};

const MARGIN: f64 = 40.0;
const OUTER_INSET: f64 = 6.0;
const INNER_INSET: f64 = 14.0;

pub(crate) static CERTIFICATE: CertificateFrame = CertificateFrame;

pub(crate) struct CertificateFrame;

impl FrameRenderer for CertificateFrame {
    fn name(&self) -> &'static str {
        "certificate"
    }

    fn size_for(&self, symbol_extent: f64) -> (f64, f64) {
        (
            symbol_extent + 2.0 * MARGIN,
            symbol_extent + 2.0 * MARGIN + CAPTION_ALLOWANCE,
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
        let border = |inset: f64, stroke_width: f64| {
            Node::Rect {
                x: inset,
                y: inset,
                width: width - 2.0 * inset,
                height: height - 2.0 * inset,
                rx: 0.0,
                fill: Fill::None,
                stroke: Some(Stroke::new(foreground, stroke_width)),
            }
        };

        let mut nodes = vec![
            Node::rect(0.0, 0.0, width, height, background),
            border(OUTER_INSET, 3.0),
            border(INNER_INSET, 1.5),
            place(symbol, MARGIN, MARGIN),
        ];
        if let Some(text) = caption {
            nodes.push(Node::caption(
                width / 2.0,
                height - (CAPTION_ALLOWANCE - CAPTION_SIZE) / 2.0 - INNER_INSET,
                text,
                CAPTION_SIZE,
                foreground,
            ));
        }
        nodes
    }
}
