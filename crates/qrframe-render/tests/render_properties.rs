//! End-to-end properties of the composed renderer
//!
//! These use dots modules with square eyes where shape kinds need to be
//! told apart: modules come out as circles, eyes and the background as
//! rectangles.

use qrframe_core::{
    Color, EcLevel, EyeStyle, Fill, FrameKind, FrameSpec, GradientDirection, GradientSpec,
    LogoRef, ModuleStyle, Node, RenderedVector, StyleConfig, CELL,
};
use qrframe_render::{render, RenderOptions, SymbolMatrix, SYMBOL_GROUP_ID};

const PAYLOAD: &str = "https://example.com";

fn dots_style() -> StyleConfig {
    StyleConfig {
        module_style: ModuleStyle::Dots,
        eye_style: EyeStyle::Square,
        ..StyleConfig::default()
    }
}

fn render_ok(style: &StyleConfig, frame: &FrameSpec) -> RenderedVector {
    render(PAYLOAD, style, frame, &RenderOptions::default())
        .unwrap()
        .unwrap()
}

fn module_count(v: &RenderedVector) -> usize {
    v.count_nodes(|n| matches!(n, Node::Circle { .. }))
}

#[test]
fn exactly_three_eye_triples_at_fixed_positions() {
    let out = render_ok(&dots_style(), &FrameSpec::none());
    let extent = out.view_box.0;
    let size = (extent / CELL) as usize;

    // Outer eye rings are the only 7-cell-wide rects in a dots render.
    let mut outer_origins = Vec::new();
    out.visit(&mut |n| {
        if let Node::Rect { x, y, width, .. } = n {
            if (*width - 7.0 * CELL).abs() < 1e-9 {
                outer_origins.push((*x, *y));
            }
        }
    });
    let far = (size - 7) as f64 * CELL;
    outer_origins.sort_by(|a, b| a.partial_cmp(b).unwrap());
    assert_eq!(outer_origins, vec![(0.0, 0.0), (0.0, far), (far, 0.0)]);

    // Three shapes per eye plus the background rect.
    let rects = out.count_nodes(|n| matches!(n, Node::Rect { .. }));
    assert_eq!(rects, 1 + 9);
}

#[test]
fn no_module_inside_finder_regions() {
    let out = render_ok(&dots_style(), &FrameSpec::none());
    let size = (out.view_box.0 / CELL) as usize;
    out.visit(&mut |n| {
        if let Node::Circle { cx, cy, .. } = n {
            let col = ((cx - CELL / 2.0) / CELL).round() as usize;
            let row = ((cy - CELL / 2.0) / CELL).round() as usize;
            assert!(
                !qrframe_render::in_finder(size, row, col),
                "module at cell ({row}, {col}) inside a finder region"
            );
        }
    });
}

#[test]
fn logo_strictly_reduces_module_count() {
    let mut with_logo = dots_style();
    with_logo.logo = Some(LogoRef { href: "logo.png".into() });
    let excavated = render_ok(&with_logo, &FrameSpec::none());

    // Different effective EC levels mean different matrices; compare
    // against a logo-free render at the same forced level.
    let mut high = dots_style();
    high.ec_level = EcLevel::High;
    let high_plain = render_ok(&high, &FrameSpec::none());

    assert!(module_count(&excavated) < module_count(&high_plain));
    assert_eq!(excavated.count_nodes(|n| matches!(n, Node::Image { .. })), 1);
}

#[test]
fn rendering_twice_is_deterministic() {
    let style = StyleConfig {
        module_style: ModuleStyle::Rounded,
        eye_style: EyeStyle::Leaf,
        gradient: Some(GradientSpec {
            start: Color::new(255, 0, 128),
            end: Color::new(0, 64, 255),
            direction: GradientDirection::Diagonal,
        }),
        ..StyleConfig::default()
    };
    let frame = FrameSpec::new(FrameKind::Badge, Some("Scan Me".into()));
    let a = render_ok(&style, &frame);
    let b = render_ok(&style, &frame);
    assert_eq!(a, b);
}

#[test]
fn gradient_direction_changes_only_the_def() {
    let mut style = dots_style();
    style.gradient = Some(GradientSpec {
        start: Color::black(),
        end: Color::new(0, 0, 255),
        direction: GradientDirection::Vertical,
    });
    let vertical = render_ok(&style, &FrameSpec::none());

    style.gradient = Some(GradientSpec {
        start: Color::black(),
        end: Color::new(0, 0, 255),
        direction: GradientDirection::Radial,
    });
    let radial = render_ok(&style, &FrameSpec::none());

    assert_eq!(vertical.nodes, radial.nodes);
    assert_ne!(vertical.defs, radial.defs);
    assert!(module_count(&vertical) > 0);
}

#[test]
fn bare_square_render_end_to_end() {
    let out = render_ok(&StyleConfig::default(), &FrameSpec::none());
    let size = SymbolMatrix::encode(PAYLOAD, EcLevel::Medium).unwrap().size();
    let extent = size as f64 * CELL;

    assert_eq!(out.view_box, (extent, extent));
    assert_eq!(out.width, extent);
    assert_eq!(out.height, extent);

    let symbol = out.find_group(SYMBOL_GROUP_ID).unwrap();
    match &symbol.children[0] {
        Node::Rect { x, y, width, height, fill, .. } => {
            assert_eq!((*x, *y), (0.0, 0.0));
            assert_eq!((*width, *height), (extent, extent));
            assert_eq!(*fill, Fill::Solid(Color::white()));
        }
        other => panic!("expected background rect first, got {other:?}"),
    }
    // Square style means every module is a sharp-cornered cell rect.
    out.visit(&mut |n| {
        if let Node::Rect { width, rx, .. } = n {
            if (*width - CELL).abs() < 1e-9 {
                assert_eq!(*rx, 0.0);
            }
        }
    });
}

#[test]
fn simple_frame_adds_caption_allowance() {
    let bare = render_ok(&StyleConfig::default(), &FrameSpec::none());
    let framed = render_ok(
        &StyleConfig::default(),
        &FrameSpec::new(FrameKind::Simple, Some("Scan Me".into())),
    );

    assert!(framed.view_box.1 >= bare.view_box.1 + 50.0);
    let captions = framed.count_nodes(
        |n| matches!(n, Node::Text { content, .. } if content == "Scan Me"),
    );
    assert_eq!(captions, 1);
}

#[test]
fn logo_forces_high_error_correction() {
    let mut style = StyleConfig::default();
    style.ec_level = EcLevel::Low;
    style.logo = Some(LogoRef { href: "logo.png".into() });

    let out = render_ok(&style, &FrameSpec::none());
    let high_size = SymbolMatrix::encode(PAYLOAD, EcLevel::High).unwrap().size();
    assert_eq!(out.view_box.0, high_size as f64 * CELL);
}

#[test]
fn unknown_frame_is_equivalent_to_none() {
    let spec = FrameSpec::new(FrameKind::from_name("nonexistent"), None);
    let fallback = render_ok(&StyleConfig::default(), &spec);
    let none = render_ok(&StyleConfig::default(), &FrameSpec::none());
    assert_eq!(fallback, none);
}

#[test]
fn display_size_scales_the_longer_dimension() {
    let opts = RenderOptions {
        display_size: Some(512.0),
        id: Some("qr-preview".into()),
    };
    let out = render(
        PAYLOAD,
        &StyleConfig::default(),
        &FrameSpec::new(FrameKind::Simple, None),
        &opts,
    )
    .unwrap()
    .unwrap();

    assert!((out.width.max(out.height) - 512.0).abs() < 1e-9);
    let ratio = out.width / out.height;
    let view_ratio = out.view_box.0 / out.view_box.1;
    assert!((ratio - view_ratio).abs() < 1e-9);
    assert_eq!(out.id.as_deref(), Some("qr-preview"));
}
