//! Qrframe Core: shared types for the QR rendering pipeline
//!
//! A payload enters as text, exits as a framed vector drawing. This
//! crate holds the vocabulary every stage speaks:
//!
//! 1. **Style** — module/eye shapes, colors, gradient, logo, frame
//!    selection ([`style`])
//! 2. **Vector tree** — the drawing primitives each stage produces and
//!    consumes ([`vector`])
//! 3. **Frame contract** — the trait decorative frames implement
//!    ([`traits`])
//! 4. **Errors** — one `thiserror` taxonomy for the whole workspace
//!    ([`error`])
//!
//! The actual rendering lives in `qrframe-render`, the concrete frames
//! in `qrframe-frames`, and serialization in `qrframe-export`.

pub mod color;
pub mod error;
pub mod style;
pub mod traits;
pub mod vector;

pub use color::Color;
pub use error::{EncodeError, ExportError, QrError, Result};
pub use style::{
    EcLevel, EyeStyle, FrameKind, FrameSpec, GradientDirection, GradientSpec, LogoRef,
    ModuleStyle, StyleConfig,
};
pub use traits::FrameRenderer;
pub use vector::{
    ClipShape, Fill, GradientDef, GradientKind, Group, Node, RenderedVector, Stroke, TextAnchor,
    Transform,
};

/// Virtual size of one matrix cell, shared by every component so
/// coordinates compose without rescaling.
pub const CELL: f64 = 10.0;
