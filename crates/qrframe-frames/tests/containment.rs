//! Frame containment and caption tests
//!
//! Every registered frame must place the symbol fully inside its
//! declared canvas with no negative coordinates, and honor the caption
//! contract (placeholder text for caption-centric frames, omission for
//! the rest).

use qrframe_core::{Color, FrameKind, FrameRenderer, Group, Node, Transform};

const SYMBOL_ID: &str = "qr-symbol";
const EPS: f64 = 1e-6;

/// A stand-in for the rendered symbol: one group holding a full-extent
/// rectangle.
fn stub_symbol(extent: f64) -> Node {
    Node::Group(
        Group::new(vec![Node::rect(0.0, 0.0, extent, extent, Color::black())]).with_id(SYMBOL_ID),
    )
}

/// Locate the symbol group and return its accumulated (tx, ty, scale).
fn locate_symbol(nodes: &[Node], tx: f64, ty: f64, scale: f64) -> Option<(f64, f64, f64)> {
    for node in nodes {
        if let Node::Group(g) = node {
            let (tx, ty, scale) = match g.transform {
                None => (tx, ty, scale),
                Some(Transform::Translate(dx, dy)) => (tx + scale * dx, ty + scale * dy, scale),
                Some(Transform::Scale(s)) => (tx, ty, scale * s),
                Some(Transform::TranslateScale { tx: dx, ty: dy, scale: s }) => {
                    (tx + scale * dx, ty + scale * dy, scale * s)
                }
            };
            if g.id.as_deref() == Some(SYMBOL_ID) {
                return Some((tx, ty, scale));
            }
            if let Some(found) = locate_symbol(&g.children, tx, ty, scale) {
                return Some(found);
            }
        }
    }
    None
}

fn collect_text(nodes: &[Node], out: &mut Vec<String>) {
    for node in nodes {
        match node {
            Node::Text { content, .. } => out.push(content.clone()),
            Node::Group(g) => collect_text(&g.children, out),
            _ => {}
        }
    }
}

#[test]
fn every_frame_contains_the_symbol() {
    let extent = 250.0;
    for kind in FrameKind::ALL {
        let Some(renderer) = qrframe_frames::lookup(kind) else {
            continue;
        };
        let (width, height) = renderer.size_for(extent);
        assert!(width >= extent, "{}: canvas narrower than symbol", renderer.name());
        assert!(height >= extent, "{}: canvas shorter than symbol", renderer.name());

        let nodes = renderer.compose(
            stub_symbol(extent),
            extent,
            Color::black(),
            Color::white(),
            Some("Scan Me"),
        );
        let (tx, ty, scale) =
            locate_symbol(&nodes, 0.0, 0.0, 1.0).unwrap_or_else(|| {
                panic!("{}: symbol group missing from composition", renderer.name())
            });

        assert!(tx >= -EPS && ty >= -EPS, "{}: negative symbol offset", renderer.name());
        assert!(scale > 0.0 && scale <= 1.0, "{}: symbol scaled up or inverted", renderer.name());
        assert!(
            tx + extent * scale <= width + EPS,
            "{}: symbol overflows canvas width",
            renderer.name()
        );
        assert!(
            ty + extent * scale <= height + EPS,
            "{}: symbol overflows canvas height",
            renderer.name()
        );
    }
}

#[test]
fn device_frames_rescale_the_symbol() {
    let extent = 250.0;
    for kind in [FrameKind::Phone, FrameKind::Laptop] {
        let renderer = qrframe_frames::lookup(kind).unwrap();
        let nodes = renderer.compose(
            stub_symbol(extent),
            extent,
            Color::black(),
            Color::white(),
            None,
        );
        let (_, _, scale) = locate_symbol(&nodes, 0.0, 0.0, 1.0).unwrap();
        assert!(scale < 1.0, "{}: expected a rescaled symbol", renderer.name());
    }
}

#[test]
fn flat_frames_place_at_unit_scale() {
    let extent = 250.0;
    for kind in [
        FrameKind::Simple,
        FrameKind::Badge,
        FrameKind::Balloon,
        FrameKind::NameBadge,
        FrameKind::Polaroid,
        FrameKind::Ticket,
        FrameKind::Card,
        FrameKind::Luggage,
        FrameKind::Certificate,
    ] {
        let renderer = qrframe_frames::lookup(kind).unwrap();
        let nodes = renderer.compose(
            stub_symbol(extent),
            extent,
            Color::black(),
            Color::white(),
            None,
        );
        let (_, _, scale) = locate_symbol(&nodes, 0.0, 0.0, 1.0).unwrap();
        assert!((scale - 1.0).abs() < EPS, "{}: unexpected rescale", renderer.name());
    }
}

#[test]
fn caption_frames_fall_back_to_placeholders() {
    let extent = 250.0;
    let cases = [(FrameKind::Badge, "Scan Me"), (FrameKind::NameBadge, "Visitor")];
    for (kind, expected) in cases {
        let renderer = qrframe_frames::lookup(kind).unwrap();
        let nodes = renderer.compose(
            stub_symbol(extent),
            extent,
            Color::black(),
            Color::white(),
            None,
        );
        let mut texts = Vec::new();
        collect_text(&nodes, &mut texts);
        assert_eq!(texts, vec![expected.to_owned()], "{}", renderer.name());
    }
}

#[test]
fn optional_caption_frames_omit_text_when_unset() {
    let extent = 250.0;
    for kind in [
        FrameKind::Simple,
        FrameKind::Balloon,
        FrameKind::Polaroid,
        FrameKind::Ticket,
        FrameKind::Card,
        FrameKind::Luggage,
        FrameKind::Certificate,
    ] {
        let renderer = qrframe_frames::lookup(kind).unwrap();
        let nodes = renderer.compose(
            stub_symbol(extent),
            extent,
            Color::black(),
            Color::white(),
            None,
        );
        let mut texts = Vec::new();
        collect_text(&nodes, &mut texts);
        assert!(texts.is_empty(), "{}: unexpected caption {texts:?}", renderer.name());
    }
}

#[test]
fn simple_frame_reserves_caption_allowance() {
    let extent = 210.0;
    let renderer = qrframe_frames::lookup(FrameKind::Simple).unwrap();
    let (_, height) = renderer.size_for(extent);
    assert!(height >= extent + 50.0);

    let nodes = renderer.compose(
        stub_symbol(extent),
        extent,
        Color::black(),
        Color::white(),
        Some("Scan Me"),
    );
    let mut texts = Vec::new();
    collect_text(&nodes, &mut texts);
    assert_eq!(texts, vec!["Scan Me".to_owned()]);
}
