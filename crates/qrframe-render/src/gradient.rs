//! Gradient definition builder
//!
//! One reusable fill definition sized to the symbol's own pixel extent.
//! Coordinates are symbol-local: the frame offset applied later never
//! shifts or stretches the gradient, so frame chrome is never colored
//! by it.

use qrframe_core::{GradientDef, GradientDirection, GradientKind, GradientSpec};

/// Id the module fills reference.
pub const GRADIENT_ID: &str = "qr-gradient";

pub fn gradient_def(spec: &GradientSpec, extent: f64) -> GradientDef {
    let kind = match spec.direction {
        GradientDirection::Vertical => GradientKind::Linear {
            x1: 0.0,
            y1: 0.0,
            x2: 0.0,
            y2: extent,
        },
        GradientDirection::Horizontal => GradientKind::Linear {
            x1: 0.0,
            y1: 0.0,
            x2: extent,
            y2: 0.0,
        },
        GradientDirection::Diagonal => GradientKind::Linear {
            x1: 0.0,
            y1: 0.0,
            x2: extent,
            y2: extent,
        },
        GradientDirection::Radial => GradientKind::Radial {
            cx: extent / 2.0,
            cy: extent / 2.0,
            r: extent / 2.0,
        },
    };

    GradientDef {
        id: GRADIENT_ID.to_owned(),
        start: spec.start,
        end: spec.end,
        kind,
    }
}
