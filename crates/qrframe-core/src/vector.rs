//! The vector primitive tree
//!
//! Rendering produces a tree of drawing primitives rather than bytes.
//! The tree is the single output type of the pipeline: frames compose
//! it, exporters serialize it, tests inspect it. It is deliberately a
//! small closed set of shapes — everything the module geometry, eye
//! renderer, and frame chrome need, and nothing more.

use crate::color::Color;

/// How a shape is filled.
#[derive(Debug, Clone, PartialEq)]
pub enum Fill {
    Solid(Color),
    /// Reference to a [`GradientDef`] by id.
    Ref(String),
    None,
}

impl From<Color> for Fill {
    fn from(c: Color) -> Self {
        Fill::Solid(c)
    }
}

/// Outline stroke applied on top of (or instead of) a fill.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub color: Color,
    pub width: f64,
}

impl Stroke {
    pub fn new(color: Color, width: f64) -> Self {
        Self { color, width }
    }
}

/// Where caption text anchors horizontally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAnchor {
    Start,
    #[default]
    Middle,
    End,
}

/// Affine transform applied to a group.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Transform {
    Translate(f64, f64),
    Scale(f64),
    /// Translate then uniform scale, as one attribute.
    TranslateScale { tx: f64, ty: f64, scale: f64 },
}

/// Shape a group's contents are clipped to.
///
/// Serialized as a `clipPath` def by the exporter; kept inline here so
/// frame renderers don't have to thread a def collection through
/// composition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ClipShape {
    RoundedRect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        rx: f64,
    },
}

/// A nested group of primitives.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Group {
    pub id: Option<String>,
    pub transform: Option<Transform>,
    pub clip: Option<ClipShape>,
    pub children: Vec<Node>,
}

impl Group {
    pub fn new(children: Vec<Node>) -> Self {
        Self {
            children,
            ..Self::default()
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_transform(mut self, transform: Transform) -> Self {
        self.transform = Some(transform);
        self
    }

    pub fn with_clip(mut self, clip: ClipShape) -> Self {
        self.clip = Some(clip);
        self
    }
}

/// One vector drawing primitive.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Rect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        /// Corner radius; 0.0 means sharp corners.
        rx: f64,
        fill: Fill,
        stroke: Option<Stroke>,
    },
    Circle {
        cx: f64,
        cy: f64,
        r: f64,
        fill: Fill,
        stroke: Option<Stroke>,
    },
    Polygon {
        points: Vec<(f64, f64)>,
        fill: Fill,
    },
    /// Free-form path for frame chrome (speech-bubble tails, laptop
    /// bases). The d-string uses absolute commands only.
    Path {
        d: String,
        fill: Fill,
        stroke: Option<Stroke>,
    },
    Text {
        x: f64,
        y: f64,
        content: String,
        size: f64,
        fill: Color,
        anchor: TextAnchor,
        bold: bool,
    },
    /// Embedded raster reference (the logo overlay).
    Image {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        href: String,
    },
    Group(Group),
}

impl Node {
    /// Plain filled rectangle with sharp corners.
    pub fn rect(x: f64, y: f64, width: f64, height: f64, fill: impl Into<Fill>) -> Self {
        Node::Rect {
            x,
            y,
            width,
            height,
            rx: 0.0,
            fill: fill.into(),
            stroke: None,
        }
    }

    /// Filled rectangle with rounded corners.
    pub fn rounded_rect(
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        rx: f64,
        fill: impl Into<Fill>,
    ) -> Self {
        Node::Rect {
            x,
            y,
            width,
            height,
            rx,
            fill: fill.into(),
            stroke: None,
        }
    }

    pub fn circle(cx: f64, cy: f64, r: f64, fill: impl Into<Fill>) -> Self {
        Node::Circle {
            cx,
            cy,
            r,
            fill: fill.into(),
            stroke: None,
        }
    }

    pub fn with_stroke(mut self, s: Stroke) -> Self {
        match &mut self {
            Node::Rect { stroke, .. }
            | Node::Circle { stroke, .. }
            | Node::Path { stroke, .. } => *stroke = Some(s),
            _ => {}
        }
        self
    }

    /// Caption text in the default UI face.
    pub fn caption(x: f64, y: f64, content: impl Into<String>, size: f64, fill: Color) -> Self {
        Node::Text {
            x,
            y,
            content: content.into(),
            size,
            fill,
            anchor: TextAnchor::Middle,
            bold: true,
        }
    }
}

/// The kind and geometry of a gradient definition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GradientKind {
    Linear { x1: f64, y1: f64, x2: f64, y2: f64 },
    Radial { cx: f64, cy: f64, r: f64 },
}

/// A reusable two-stop gradient fill, referenced by [`Fill::Ref`].
#[derive(Debug, Clone, PartialEq)]
pub struct GradientDef {
    pub id: String,
    pub start: Color,
    pub end: Color,
    pub kind: GradientKind,
}

/// The finished artifact: a sized, self-contained drawing.
///
/// `width`/`height` are the display size handed to the host document;
/// `view_box` is the untransformed internal coordinate extent. The two
/// differ only by the final proportional scaling step.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedVector {
    pub width: f64,
    pub height: f64,
    pub view_box: (f64, f64),
    /// Optional root element identifier; uniqueness is the caller's
    /// responsibility.
    pub id: Option<String>,
    pub defs: Vec<GradientDef>,
    pub nodes: Vec<Node>,
}

impl RenderedVector {
    /// Depth-first visit of every node in the tree.
    pub fn visit<'a>(&'a self, f: &mut dyn FnMut(&'a Node)) {
        fn walk<'a>(nodes: &'a [Node], f: &mut dyn FnMut(&'a Node)) {
            for node in nodes {
                f(node);
                if let Node::Group(g) = node {
                    walk(&g.children, f);
                }
            }
        }
        walk(&self.nodes, f);
    }

    /// Count nodes matching a predicate anywhere in the tree.
    pub fn count_nodes(&self, pred: impl Fn(&Node) -> bool) -> usize {
        let mut n = 0;
        self.visit(&mut |node| {
            if pred(node) {
                n += 1;
            }
        });
        n
    }

    /// Find the first group with the given id.
    pub fn find_group(&self, id: &str) -> Option<&Group> {
        let mut found: Option<&Group> = None;
        self.visit(&mut |node| {
            if found.is_none() {
                if let Node::Group(g) = node {
                    if g.id.as_deref() == Some(id) {
                        found = Some(g);
                    }
                }
            }
        });
        found
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> RenderedVector {
        RenderedVector {
            width: 100.0,
            height: 100.0,
            view_box: (50.0, 50.0),
            id: None,
            defs: vec![],
            nodes: vec![
                Node::rect(0.0, 0.0, 50.0, 50.0, Color::white()),
                Node::Group(
                    Group::new(vec![
                        Node::circle(10.0, 10.0, 4.0, Color::black()),
                        Node::circle(20.0, 10.0, 4.0, Color::black()),
                    ])
                    .with_id("inner"),
                ),
            ],
        }
    }

    #[test]
    fn visit_reaches_nested_nodes() {
        let v = sample();
        let mut seen = 0;
        v.visit(&mut |_| seen += 1);
        // rect + group + two circles
        assert_eq!(seen, 4);
    }

    #[test]
    fn count_and_find() {
        let v = sample();
        assert_eq!(v.count_nodes(|n| matches!(n, Node::Circle { .. })), 2);
        assert!(v.find_group("inner").is_some());
        assert!(v.find_group("missing").is_none());
    }
}
