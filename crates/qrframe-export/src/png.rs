//! PNG rasterization
//!
//! Serializes the vector artifact to SVG, renders it offscreen with
//! `resvg`, and encodes the pixels with the `image` crate. Failure here
//! never invalidates the vector document — the SVG path is unaffected
//! and callers are expected to surface the error as a recoverable
//! notification.

use image::ImageEncoder;
use qrframe_core::{ExportError, RenderedVector, Result};
use resvg::{tiny_skia, usvg};

use crate::svg::SvgExporter;
use crate::Exporter;

/// PNG exporter for rendered vector artifacts.
#[derive(Debug, Default)]
pub struct PngExporter {
    svg: SvgExporter,
}

impl PngExporter {
    pub fn new() -> Self {
        Self {
            // Embed local images so the rasterizer can resolve them
            // without a filesystem href resolver.
            svg: SvgExporter::with_embedded_images(),
        }
    }

    /// Rasterize at the artifact's display size.
    pub fn rasterize(&self, vector: &RenderedVector) -> Result<Vec<u8>> {
        let svg = self.svg.to_svg(vector)?;

        let mut options = usvg::Options::default();
        options.fontdb_mut().load_system_fonts();
        let tree = usvg::Tree::from_str(&svg, &options)
            .map_err(|e| ExportError::RasterizationFailed(e.to_string()))?;

        let width = vector.width.round().max(1.0) as u32;
        let height = vector.height.round().max(1.0) as u32;
        let mut pixmap = tiny_skia::Pixmap::new(width, height).ok_or_else(|| {
            ExportError::RasterizationFailed(format!("invalid pixmap size {width}x{height}"))
        })?;

        // The SVG width/height already carry the display scaling; the
        // usvg tree size matches the pixmap, so no extra transform.
        resvg::render(&tree, tiny_skia::Transform::default(), &mut pixmap.as_mut());

        encode_rgba(&pixmap, width, height)
    }
}

impl Exporter for PngExporter {
    fn name(&self) -> &'static str {
        "png"
    }

    fn export(&self, vector: &RenderedVector) -> Result<Vec<u8>> {
        self.rasterize(vector)
    }

    fn extension(&self) -> &'static str {
        "png"
    }

    fn mime_type(&self) -> &'static str {
        "image/png"
    }
}

fn encode_rgba(pixmap: &tiny_skia::Pixmap, width: u32, height: u32) -> Result<Vec<u8>> {
    // tiny-skia pixels are premultiplied; PNG wants straight alpha.
    let mut rgba = Vec::with_capacity((width * height * 4) as usize);
    for px in pixmap.pixels() {
        let c = px.demultiply();
        rgba.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
    }

    let mut png = Vec::new();
    let encoder = image::codecs::png::PngEncoder::new_with_quality(
        &mut png,
        image::codecs::png::CompressionType::Default,
        image::codecs::png::FilterType::Sub,
    );
    encoder
        .write_image(&rgba, width, height, image::ExtendedColorType::Rgba8)
        .map_err(|e| ExportError::EncodingFailed(e.to_string()))?;
    Ok(png)
}
