//! SVG serialization
//!
//! Turns a [`RenderedVector`] into a standalone SVG document string.
//! Inline clip shapes on groups are hoisted into `<defs>` as
//! `clipPath` elements; the two traversal passes assign and reference
//! their ids in the same order, so output is deterministic.

use std::fmt::Write as FmtWrite;
use std::path::Path;

use base64::Engine as _;
use qrframe_core::{
    ClipShape, ExportError, Fill, GradientDef, GradientKind, Group, Node, RenderedVector, Result,
    Stroke, TextAnchor, Transform,
};

use crate::Exporter;

const FONT_STACK: &str = "Helvetica, Arial, sans-serif";

/// SVG exporter for rendered vector artifacts.
#[derive(Debug, Default)]
pub struct SvgExporter {
    /// Inline local image hrefs as `data:` URIs so the document is
    /// fully self-contained.
    embed_local_images: bool,
}

impl SvgExporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_embedded_images() -> Self {
        Self {
            embed_local_images: true,
        }
    }

    /// Serialize to a complete SVG document.
    pub fn to_svg(&self, vector: &RenderedVector) -> Result<String> {
        let mut svg = String::new();
        let mut w = Writer {
            out: &mut svg,
            embed_local_images: self.embed_local_images,
            next_clip: 0,
        };
        w.document(vector).map_err(|e| ExportError::WriteFailed(e.to_string()))?;
        Ok(svg)
    }
}

impl Exporter for SvgExporter {
    fn name(&self) -> &'static str {
        "svg"
    }

    fn export(&self, vector: &RenderedVector) -> Result<Vec<u8>> {
        Ok(self.to_svg(vector)?.into_bytes())
    }

    fn extension(&self) -> &'static str {
        "svg"
    }

    fn mime_type(&self) -> &'static str {
        "image/svg+xml"
    }
}

/// Serialize with default settings.
pub fn to_svg(vector: &RenderedVector) -> Result<String> {
    SvgExporter::new().to_svg(vector)
}

struct Writer<'a> {
    out: &'a mut String,
    embed_local_images: bool,
    next_clip: usize,
}

impl Writer<'_> {
    fn document(&mut self, vector: &RenderedVector) -> std::fmt::Result {
        writeln!(self.out, r#"<?xml version="1.0" encoding="UTF-8"?>"#)?;
        write!(
            self.out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}""#,
            vector.width, vector.height, vector.view_box.0, vector.view_box.1
        )?;
        if let Some(id) = &vector.id {
            write!(self.out, r#" id="{}""#, escape(id))?;
        }
        writeln!(self.out, ">")?;

        let clips = collect_clips(&vector.nodes);
        if !vector.defs.is_empty() || !clips.is_empty() {
            writeln!(self.out, "  <defs>")?;
            for def in &vector.defs {
                self.gradient(def)?;
            }
            for (i, clip) in clips.iter().enumerate() {
                self.clip_path(i, clip)?;
            }
            writeln!(self.out, "  </defs>")?;
        }

        for node in &vector.nodes {
            self.node(node, 1)?;
        }
        writeln!(self.out, "</svg>")
    }

    fn gradient(&mut self, def: &GradientDef) -> std::fmt::Result {
        match def.kind {
            GradientKind::Linear { x1, y1, x2, y2 } => {
                writeln!(
                    self.out,
                    r#"    <linearGradient id="{}" x1="{x1}" y1="{y1}" x2="{x2}" y2="{y2}" gradientUnits="userSpaceOnUse">"#,
                    escape(&def.id)
                )?;
            }
            GradientKind::Radial { cx, cy, r } => {
                writeln!(
                    self.out,
                    r#"    <radialGradient id="{}" cx="{cx}" cy="{cy}" r="{r}" gradientUnits="userSpaceOnUse">"#,
                    escape(&def.id)
                )?;
            }
        }
        writeln!(self.out, r#"      <stop offset="0" stop-color="{}"/>"#, def.start)?;
        writeln!(self.out, r#"      <stop offset="1" stop-color="{}"/>"#, def.end)?;
        match def.kind {
            GradientKind::Linear { .. } => writeln!(self.out, "    </linearGradient>"),
            GradientKind::Radial { .. } => writeln!(self.out, "    </radialGradient>"),
        }
    }

    fn clip_path(&mut self, index: usize, clip: &ClipShape) -> std::fmt::Result {
        writeln!(self.out, r#"    <clipPath id="qr-clip-{index}">"#)?;
        let ClipShape::RoundedRect { x, y, width, height, rx } = clip;
        writeln!(
            self.out,
            r#"      <rect x="{x}" y="{y}" width="{width}" height="{height}" rx="{rx}"/>"#
        )?;
        writeln!(self.out, "    </clipPath>")
    }

    fn node(&mut self, node: &Node, depth: usize) -> std::fmt::Result {
        let pad = "  ".repeat(depth);
        match node {
            Node::Rect { x, y, width, height, rx, fill, stroke } => {
                write!(self.out, r#"{pad}<rect x="{x}" y="{y}" width="{width}" height="{height}""#)?;
                if *rx > 0.0 {
                    write!(self.out, r#" rx="{rx}""#)?;
                }
                self.paint(fill, stroke)?;
                writeln!(self.out, "/>")
            }
            Node::Circle { cx, cy, r, fill, stroke } => {
                write!(self.out, r#"{pad}<circle cx="{cx}" cy="{cy}" r="{r}""#)?;
                self.paint(fill, stroke)?;
                writeln!(self.out, "/>")
            }
            Node::Polygon { points, fill } => {
                write!(self.out, r#"{pad}<polygon points=""#)?;
                for (i, (x, y)) in points.iter().enumerate() {
                    if i > 0 {
                        write!(self.out, " ")?;
                    }
                    write!(self.out, "{x},{y}")?;
                }
                write!(self.out, r#"""#)?;
                self.paint(fill, &None)?;
                writeln!(self.out, "/>")
            }
            Node::Path { d, fill, stroke } => {
                write!(self.out, r#"{pad}<path d="{}""#, escape(d))?;
                self.paint(fill, stroke)?;
                writeln!(self.out, "/>")
            }
            Node::Text { x, y, content, size, fill, anchor, bold } => {
                let anchor = match anchor {
                    TextAnchor::Start => "start",
                    TextAnchor::Middle => "middle",
                    TextAnchor::End => "end",
                };
                write!(
                    self.out,
                    r#"{pad}<text x="{x}" y="{y}" font-family="{FONT_STACK}" font-size="{size}" text-anchor="{anchor}" fill="{fill}""#
                )?;
                if *bold {
                    write!(self.out, r#" font-weight="bold""#)?;
                }
                writeln!(self.out, ">{}</text>", escape(content))
            }
            Node::Image { x, y, width, height, href } => {
                let href = self.resolve_href(href);
                writeln!(
                    self.out,
                    r#"{pad}<image x="{x}" y="{y}" width="{width}" height="{height}" href="{}"/>"#,
                    escape(&href)
                )
            }
            Node::Group(group) => self.group(group, depth),
        }
    }

    fn group(&mut self, group: &Group, depth: usize) -> std::fmt::Result {
        let pad = "  ".repeat(depth);
        write!(self.out, "{pad}<g")?;
        if let Some(id) = &group.id {
            write!(self.out, r#" id="{}""#, escape(id))?;
        }
        if let Some(transform) = &group.transform {
            match transform {
                Transform::Translate(tx, ty) => {
                    write!(self.out, r#" transform="translate({tx} {ty})""#)?;
                }
                Transform::Scale(s) => {
                    write!(self.out, r#" transform="scale({s})""#)?;
                }
                Transform::TranslateScale { tx, ty, scale } => {
                    write!(self.out, r#" transform="translate({tx} {ty}) scale({scale})""#)?;
                }
            }
        }
        if group.clip.is_some() {
            write!(self.out, r#" clip-path="url(#qr-clip-{})""#, self.next_clip)?;
            self.next_clip += 1;
        }
        writeln!(self.out, ">")?;
        for child in &group.children {
            self.node(child, depth + 1)?;
        }
        writeln!(self.out, "{pad}</g>")
    }

    fn paint(&mut self, fill: &Fill, stroke: &Option<Stroke>) -> std::fmt::Result {
        match fill {
            Fill::Solid(c) => write!(self.out, r#" fill="{c}""#)?,
            Fill::Ref(id) => write!(self.out, r#" fill="url(#{})""#, escape(id))?,
            Fill::None => write!(self.out, r#" fill="none""#)?,
        }
        if let Some(s) = stroke {
            write!(self.out, r#" stroke="{}" stroke-width="{}""#, s.color, s.width)?;
        }
        Ok(())
    }

    /// Inline a local image file as a data URI when embedding is on.
    /// Unreadable files keep their original href; a broken reference
    /// degrades to a gap rather than failing the export.
    fn resolve_href(&self, href: &str) -> String {
        if !self.embed_local_images
            || href.starts_with("data:")
            || href.contains("://")
        {
            return href.to_owned();
        }
        match std::fs::read(href) {
            Ok(bytes) => {
                let mime = match Path::new(href)
                    .extension()
                    .and_then(|e| e.to_str())
                    .map(|e| e.to_ascii_lowercase())
                    .as_deref()
                {
                    Some("jpg") | Some("jpeg") => "image/jpeg",
                    Some("svg") => "image/svg+xml",
                    Some("gif") => "image/gif",
                    _ => "image/png",
                };
                let encoded = base64::engine::general_purpose::STANDARD.encode(bytes);
                format!("data:{mime};base64,{encoded}")
            }
            Err(err) => {
                log::warn!("could not embed image {href:?}: {err}");
                href.to_owned()
            }
        }
    }
}

/// Walk the tree and collect inline clip shapes in serialization order.
fn collect_clips(nodes: &[Node]) -> Vec<ClipShape> {
    fn walk(nodes: &[Node], out: &mut Vec<ClipShape>) {
        for node in nodes {
            if let Node::Group(g) = node {
                if let Some(clip) = g.clip {
                    out.push(clip);
                }
                walk(&g.children, out);
            }
        }
    }
    let mut clips = Vec::new();
    walk(nodes, &mut clips);
    clips
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use qrframe_core::Color;

    fn tiny_vector() -> RenderedVector {
        RenderedVector {
            width: 40.0,
            height: 40.0,
            view_box: (20.0, 20.0),
            id: Some("qr".into()),
            defs: vec![GradientDef {
                id: "qr-gradient".into(),
                start: Color::black(),
                end: Color::new(0, 0, 255),
                kind: GradientKind::Linear { x1: 0.0, y1: 0.0, x2: 0.0, y2: 20.0 },
            }],
            nodes: vec![
                Node::rect(0.0, 0.0, 20.0, 20.0, Color::white()),
                Node::rect(5.0, 5.0, 10.0, 10.0, Fill::Ref("qr-gradient".into())),
                Node::caption(10.0, 18.0, "a < b", 6.0, Color::black()),
            ],
        }
    }

    #[test]
    fn document_structure() {
        let svg = to_svg(&tiny_vector()).unwrap();
        assert!(svg.starts_with(r#"<?xml version="1.0""#));
        assert!(svg.contains(r#"viewBox="0 0 20 20""#));
        assert!(svg.contains(r#"width="40""#));
        assert!(svg.contains(r#"id="qr""#));
        assert!(svg.contains("<linearGradient"));
        assert!(svg.contains(r#"fill="url(#qr-gradient)""#));
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn text_is_escaped() {
        let svg = to_svg(&tiny_vector()).unwrap();
        assert!(svg.contains("a &lt; b"));
        assert!(!svg.contains("a < b"));
    }

    #[test]
    fn clips_are_hoisted_into_defs() {
        let vector = RenderedVector {
            width: 10.0,
            height: 10.0,
            view_box: (10.0, 10.0),
            id: None,
            defs: vec![],
            nodes: vec![Node::Group(
                Group::new(vec![Node::rect(0.0, 0.0, 10.0, 10.0, Color::black())]).with_clip(
                    ClipShape::RoundedRect {
                        x: 1.0,
                        y: 1.0,
                        width: 8.0,
                        height: 8.0,
                        rx: 2.0,
                    },
                ),
            )],
        };
        let svg = to_svg(&vector).unwrap();
        assert!(svg.contains(r#"<clipPath id="qr-clip-0">"#));
        assert!(svg.contains(r#"clip-path="url(#qr-clip-0)""#));
    }

    #[test]
    fn no_defs_block_when_nothing_needs_one() {
        let vector = RenderedVector {
            width: 10.0,
            height: 10.0,
            view_box: (10.0, 10.0),
            id: None,
            defs: vec![],
            nodes: vec![Node::rect(0.0, 0.0, 10.0, 10.0, Color::black())],
        };
        let svg = to_svg(&vector).unwrap();
        assert!(!svg.contains("<defs>"));
    }
}
