//! Qrframe Export: vector artifacts become files
//!
//! Two formats: native SVG serialization ([`svg`]) and offscreen PNG
//! rasterization ([`png`]). Both implement the [`Exporter`] trait so
//! callers can pick a format by name without caring which is which.

use std::path::Path;

use qrframe_core::{RenderedVector, Result};

pub mod png;
pub mod svg;

pub use png::PngExporter;
pub use svg::{to_svg, SvgExporter};

/// An output format: artifact in, encoded bytes out.
pub trait Exporter {
    /// Format name as used on the command line.
    fn name(&self) -> &'static str;

    /// Encode the artifact as bytes in this format.
    fn export(&self, vector: &RenderedVector) -> Result<Vec<u8>>;

    /// Default file extension for this format.
    fn extension(&self) -> &'static str;

    /// MIME type identifying this format.
    fn mime_type(&self) -> &'static str;
}

/// Resolve an exporter by format name.
pub fn exporter_for(format: &str) -> Option<Box<dyn Exporter>> {
    match format.to_ascii_lowercase().as_str() {
        "svg" => Some(Box::new(SvgExporter::with_embedded_images())),
        "png" => Some(Box::new(PngExporter::new())),
        _ => None,
    }
}

/// Write exported bytes to `path`, appending the format's default
/// extension when the path has none.
pub fn write_artifact(path: &Path, bytes: &[u8], extension: &str) -> Result<std::path::PathBuf> {
    let path = if path.extension().is_some() {
        path.to_path_buf()
    } else {
        path.with_extension(extension)
    };
    std::fs::write(&path, bytes)?;
    Ok(path)
}
