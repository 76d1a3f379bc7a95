//! QRFRAME - styled QR symbols with decorative frames
//!
//! A payload and a style go in; a self-contained vector artifact comes
//! out, optionally wrapped in decorative chrome (badges, balloons,
//! device mockups) and exportable as SVG or PNG.
//!
//! # Example
//!
//! ```no_run
//! use qrframe::{render_to_svg, FrameKind, FrameSpec, StyleConfig};
//!
//! let style = StyleConfig::default();
//! let frame = FrameSpec::new(FrameKind::Badge, None);
//! let svg = render_to_svg("https://example.com", &style, &frame, Some(512.0))?
//!     .ok_or("empty payload")?;
//! std::fs::write("code.svg", svg)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Feature Flags
//!
//! - `export` (default): SVG/PNG export via `qrframe-export`
//! - `serde`: serializable style configuration

pub use qrframe_core::{
    error, Color, EcLevel, EyeStyle, FrameKind, FrameRenderer, FrameSpec, GradientDirection,
    GradientSpec, LogoRef, ModuleStyle, Node, QrError, RenderedVector, Result, StyleConfig, CELL,
};
pub use qrframe_frames as frames;
pub use qrframe_render::{render, QrRenderer, RenderOptions, SymbolMatrix};

#[cfg(feature = "export")]
pub use qrframe_export as export;

/// Render straight to an SVG document string.
///
/// Returns `Ok(None)` for an empty payload.
#[cfg(feature = "export")]
pub fn render_to_svg(
    payload: &str,
    style: &StyleConfig,
    frame: &FrameSpec,
    display_size: Option<f64>,
) -> Result<Option<String>> {
    let opts = RenderOptions {
        display_size,
        id: None,
    };
    match render(payload, style, frame, &opts)? {
        Some(vector) => Ok(Some(qrframe_export::to_svg(&vector)?)),
        None => Ok(None),
    }
}
