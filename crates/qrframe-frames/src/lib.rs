//! Qrframe Frames: decorative chrome around the bare symbol
//!
//! Each frame is a [`FrameRenderer`] implementation: it declares the
//! canvas it needs for a symbol of a given extent and composes the
//! rendered symbol into its chrome. The registry is a closed static
//! mapping from [`FrameKind`] to renderer — adding a frame means adding
//! a module here and a variant there, nothing else changes.
//!
//! All frames obey the containment rule: the symbol is placed fully
//! inside the declared canvas at a fixed inset, never clipped. Device
//! mockups rescale the symbol into their screen region; everything else
//! places it at 1:1.

use qrframe_core::{Color, FrameKind, FrameRenderer, Group, Node, Stroke, Transform};

mod badge;
mod balloon;
mod card;
mod certificate;
mod device;
mod luggage;
mod name_badge;
mod polaroid;
mod simple;
mod ticket;

/// Resolve a frame kind to its renderer. `FrameKind::None` is the
/// canonical no-frame value and resolves to `None` here.
pub fn lookup(kind: FrameKind) -> Option<&'static dyn FrameRenderer> {
    match kind {
        FrameKind::None => None,
        FrameKind::Simple => Some(&simple::SIMPLE),
        FrameKind::Badge => Some(&badge::BADGE),
        FrameKind::Balloon => Some(&balloon::BALLOON),
        FrameKind::NameBadge => Some(&name_badge::NAME_BADGE),
        FrameKind::Phone => Some(&device::PHONE),
        FrameKind::Laptop => Some(&device::LAPTOP),
        FrameKind::Polaroid => Some(&polaroid::POLAROID),
        FrameKind::Ticket => Some(&ticket::TICKET),
        FrameKind::Card => Some(&card::CARD),
        FrameKind::Luggage => Some(&luggage::LUGGAGE),
        FrameKind::Certificate => Some(&certificate::CERTIFICATE),
    }
}

/// Names of every registered frame, for CLI listings.
pub fn registered_names() -> Vec<&'static str> {
    FrameKind::ALL
        .into_iter()
        .filter_map(|kind| lookup(kind).map(|r| r.name()))
        .collect()
}

// Padding/caption constants shared by the plainer frames. Device and
// novelty frames define their own chrome-specific constants locally.
pub(crate) const PAD: f64 = 20.0;
pub(crate) const CAPTION_ALLOWANCE: f64 = 50.0;
pub(crate) const CAPTION_SIZE: f64 = 28.0;
pub(crate) const BORDER_WIDTH: f64 = 4.0;

/// Wrap the symbol group at a fixed translation offset.
pub(crate) fn place(symbol: Node, ox: f64, oy: f64) -> Node {
    Node::Group(Group::new(vec![symbol]).with_transform(Transform::Translate(ox, oy)))
}

/// Wrap the symbol group translated then uniformly scaled down, for
/// screen regions smaller than the symbol's natural extent.
pub(crate) fn place_scaled(symbol: Node, ox: f64, oy: f64, scale: f64) -> Node {
    Node::Group(
        Group::new(vec![symbol]).with_transform(Transform::TranslateScale {
            tx: ox,
            ty: oy,
            scale,
        }),
    )
}

/// A full-canvas rounded backdrop with the frame's border stroke.
pub(crate) fn backdrop(width: f64, height: f64, rx: f64, fg: Color, bg: Color) -> Node {
    Node::rounded_rect(
        BORDER_WIDTH / 2.0,
        BORDER_WIDTH / 2.0,
        width - BORDER_WIDTH,
        height - BORDER_WIDTH,
        rx,
        bg,
    )
    .with_stroke(Stroke::new(fg, BORDER_WIDTH))
}
