//! Device mockup frames: phone and laptop.
//!
//! Unlike the flat frames these clip the symbol to a rounded screen
//! region and rescale it slightly smaller inside it, so the screen
//! bezel reads as part of the device rather than as symbol padding.

use qrframe_core::{ClipShape, Color, Fill, FrameRenderer, Group, Node, Stroke};

use crate::place_scaled;

/// Fraction of the natural symbol extent used inside screen regions.
const SCREEN_SCALE: f64 = 0.9;

fn screen_group(
    symbol: Node,
    symbol_extent: f64,
    screen: ClipShape,
) -> Node {
    let ClipShape::RoundedRect { x, y, width, height, .. } = screen;
    let drawn = symbol_extent * SCREEN_SCALE;
    let ox = x + (width - drawn) / 2.0;
    let oy = y + (height - drawn) / 2.0;
    Node::Group(
        Group::new(vec![place_scaled(symbol, ox, oy, SCREEN_SCALE)]).with_clip(screen),
    )
}

// --- Phone ---------------------------------------------------------------

const PHONE_BEZEL: f64 = 20.0;
const PHONE_TOP: f64 = 70.0;
const PHONE_BOTTOM: f64 = 90.0;

pub(crate) static PHONE: PhoneFrame = PhoneFrame;

pub(crate) struct PhoneFrame;

impl PhoneFrame {
    fn screen(symbol_extent: f64) -> ClipShape {
        ClipShape::RoundedRect {
            x: PHONE_BEZEL,
            y: PHONE_TOP,
            width: symbol_extent + 16.0,
            height: symbol_extent + 36.0,
            rx: 12.0,
        }
    }
}

impl FrameRenderer for PhoneFrame {
    fn name(&self) -> &'static str {
        "phone"
    }

    fn size_for(&self, symbol_extent: f64) -> (f64, f64) {
        (
            symbol_extent + 16.0 + 2.0 * PHONE_BEZEL,
            PHONE_TOP + symbol_extent + 36.0 + PHONE_BOTTOM,
        )
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
        let screen = Self::screen(symbol_extent);
        let ClipShape::RoundedRect {
            x: sx,
            y: sy,
            width: sw,
            height: sh,
            rx,
        } = screen;

        vec![
            // Body
            Node::rounded_rect(0.0, 0.0, width, height, 40.0, foreground),
            // Speaker slot
            Node::rounded_rect((width - 60.0) / 2.0, 31.0, 60.0, 8.0, 4.0, background),
            // Screen
            Node::rounded_rect(sx, sy, sw, sh, rx, background),
            screen_group(symbol, symbol_extent, screen),
            // Home button
            Node::circle(width / 2.0, height - PHONE_BOTTOM / 2.0, 18.0, foreground)
                .with_stroke(Stroke::new(background, 3.0)),
        ]
    }
}

// --- Laptop --------------------------------------------------------------

const LAPTOP_SIDE: f64 = 60.0;
const LAPTOP_BEZEL: f64 = 10.0;
const LAPTOP_BASE: f64 = 30.0;

pub(crate) static LAPTOP: LaptopFrame = LaptopFrame;

pub(crate) struct LaptopFrame;

impl LaptopFrame {
    fn screen(symbol_extent: f64) -> ClipShape {
        ClipShape::RoundedRect {
            x: LAPTOP_SIDE + LAPTOP_BEZEL,
            y: LAPTOP_BEZEL,
            width: symbol_extent + 20.0,
            height: symbol_extent + 20.0,
            rx: 6.0,
        }
    }
}

impl FrameRenderer for LaptopFrame {
    fn name(&self) -> &'static str {
        "laptop"
    }

    fn size_for(&self, symbol_extent: f64) -> (f64, f64) {
        (
            symbol_extent + 40.0 + 2.0 * LAPTOP_SIDE,
            symbol_extent + 40.0 + LAPTOP_BASE,
        )
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
        let lid_height = symbol_extent + 40.0;
        let screen = Self::screen(symbol_extent);
        let ClipShape::RoundedRect {
            x: sx,
            y: sy,
            width: sw,
            height: sh,
            rx,
        } = screen;

        vec![
            // Lid
            Node::rounded_rect(
                LAPTOP_SIDE,
                0.0,
                width - 2.0 * LAPTOP_SIDE,
                lid_height,
                10.0,
                foreground,
            ),
            // Screen
            Node::rounded_rect(sx, sy, sw, sh, rx, background),
            screen_group(symbol, symbol_extent, screen),
            // Base wedge
            Node::Polygon {
                points: vec![
                    (LAPTOP_SIDE - 20.0, lid_height),
                    (width - LAPTOP_SIDE + 20.0, lid_height),
                    (width, height),
                    (0.0, height),
                ],
                fill: Fill::Solid(foreground),
            },
            // Trackpad notch
            Node::rounded_rect((width - 120.0) / 2.0, lid_height, 120.0, 8.0, 4.0, background),
        ]
    }
}
