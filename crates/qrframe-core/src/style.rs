//! Style configuration for symbol rendering
//!
//! Everything the composed renderer needs to know about how a symbol
//! should look: module and eye shapes, colors, gradient, logo, error
//! correction, and the decorative frame selection.

use crate::color::Color;

/// Shape used for ordinary dark modules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ModuleStyle {
    #[default]
    Square,
    Dots,
    Rounded,
}

/// Shape used for the three finder patterns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum EyeStyle {
    #[default]
    Square,
    Circle,
    Rounded,
    Leaf,
    Diamond,
}

/// Error-correction tier of the QR standard.
///
/// Higher tiers tolerate more missing or damaged modules at the cost of
/// data capacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum EcLevel {
    Low,
    #[default]
    Medium,
    Quartile,
    High,
}

/// Direction of a two-stop gradient fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum GradientDirection {
    #[default]
    Vertical,
    Horizontal,
    Diagonal,
    Radial,
}

/// Gradient fill applied to dark modules.
///
/// The gradient spans the symbol's own pixel extent, never the frame's.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GradientSpec {
    pub start: Color,
    pub end: Color,
    #[cfg_attr(feature = "serde", serde(default))]
    pub direction: GradientDirection,
}

/// Opaque reference to a logo image overlaid on the symbol center.
///
/// The href is passed through to the output document untouched; whether
/// it resolves is the consumer's problem. Configuring a logo forces the
/// error-correction level to [`EcLevel::High`] because excavating
/// modules destroys redundancy.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LogoRef {
    pub href: String,
}

/// Complete visual configuration for one render.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct StyleConfig {
    pub module_style: ModuleStyle,
    pub eye_style: EyeStyle,
    pub foreground: Color,
    pub background: Color,
    /// Eye color override; falls back to `foreground`.
    pub eye_color: Option<Color>,
    pub gradient: Option<GradientSpec>,
    pub logo: Option<LogoRef>,
    /// Requested tier; upgraded to High when a logo is present.
    pub ec_level: EcLevel,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            module_style: ModuleStyle::default(),
            eye_style: EyeStyle::default(),
            foreground: Color::black(),
            background: Color::white(),
            eye_color: None,
            gradient: None,
            logo: None,
            ec_level: EcLevel::default(),
        }
    }
}

impl StyleConfig {
    /// The color eyes are drawn in.
    pub fn effective_eye_color(&self) -> Color {
        self.eye_color.unwrap_or(self.foreground)
    }

    /// The tier actually used for matrix construction.
    pub fn effective_ec_level(&self) -> EcLevel {
        if self.logo.is_some() {
            EcLevel::High
        } else {
            self.ec_level
        }
    }
}

/// Identifier of a decorative frame.
///
/// A closed set; unrecognized names degrade to `None` rather than
/// failing, so a stale style record still produces the primary artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum FrameKind {
    #[default]
    None,
    Simple,
    Badge,
    Balloon,
    NameBadge,
    Phone,
    Laptop,
    Polaroid,
    Ticket,
    Card,
    Luggage,
    Certificate,
}

impl FrameKind {
    /// Every frame kind, in registry listing order.
    pub const ALL: [FrameKind; 12] = [
        FrameKind::None,
        FrameKind::Simple,
        FrameKind::Badge,
        FrameKind::Balloon,
        FrameKind::NameBadge,
        FrameKind::Phone,
        FrameKind::Laptop,
        FrameKind::Polaroid,
        FrameKind::Ticket,
        FrameKind::Card,
        FrameKind::Luggage,
        FrameKind::Certificate,
    ];

    pub fn name(self) -> &'static str {
        match self {
            FrameKind::None => "none",
            FrameKind::Simple => "simple",
            FrameKind::Badge => "badge",
            FrameKind::Balloon => "balloon",
            FrameKind::NameBadge => "name-badge",
            FrameKind::Phone => "phone",
            FrameKind::Laptop => "laptop",
            FrameKind::Polaroid => "polaroid",
            FrameKind::Ticket => "ticket",
            FrameKind::Card => "card",
            FrameKind::Luggage => "luggage",
            FrameKind::Certificate => "certificate",
        }
    }

    /// Resolve a frame name, falling back to `None` for anything
    /// unrecognized.
    pub fn from_name(name: &str) -> Self {
        let wanted = name.trim();
        for kind in Self::ALL {
            if kind.name().eq_ignore_ascii_case(wanted) {
                return kind;
            }
        }
        log::warn!("unknown frame {wanted:?}, rendering without a frame");
        FrameKind::None
    }
}

/// Frame selection plus optional caption text.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FrameSpec {
    pub kind: FrameKind,
    pub caption: Option<String>,
}

impl FrameSpec {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn new(kind: FrameKind, caption: Option<String>) -> Self {
        Self { kind, caption }
    }
}
