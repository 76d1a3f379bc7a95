//! Symbol matrix acquisition
//!
//! The matrix itself comes from the `qrcode` crate; this module owns
//! the conversion into our flat row-major bit form and the mapping of
//! error-correction tiers. Construction is a local, deterministic
//! computation — there is nothing to cancel, retry, or time out.

use qrframe_core::{EcLevel, EncodeError};

/// The square grid of dark/light cells encoding one payload.
///
/// Immutable once built; `cells` is row-major, `true` = dark.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolMatrix {
    size: usize,
    cells: Vec<bool>,
}

impl SymbolMatrix {
    /// Encode a payload at the given error-correction tier.
    pub fn encode(payload: &str, level: EcLevel) -> Result<Self, EncodeError> {
        let code = qrcode::QrCode::with_error_correction_level(payload, to_qrcode_level(level))
            .map_err(|err| match err {
                qrcode::types::QrError::DataTooLong => {
                    EncodeError::DataTooLong(format!("{} bytes", payload.len()))
                }
                other => EncodeError::Backend(format!("{other:?}")),
            })?;

        let size = code.width();
        let cells = code
            .to_colors()
            .into_iter()
            .map(|c| c == qrcode::Color::Dark)
            .collect::<Vec<_>>();
        debug_assert_eq!(cells.len(), size * size);

        log::debug!("encoded {} bytes into {size}x{size} symbol", payload.len());
        Ok(Self { size, cells })
    }

    /// Build directly from cells. Intended for tests; `cells` must be
    /// `size * size` long.
    pub fn from_cells(size: usize, cells: Vec<bool>) -> Self {
        assert_eq!(cells.len(), size * size);
        Self { size, cells }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Whether the cell at (row, col) is dark.
    ///
    /// Out-of-range coordinates are a precondition violation; this is
    /// called from the render hot loop and does not re-check bounds
    /// beyond the slice index itself.
    #[inline]
    pub fn dark(&self, row: usize, col: usize) -> bool {
        self.cells[row * self.size + col]
    }
}

fn to_qrcode_level(level: EcLevel) -> qrcode::EcLevel {
    match level {
        EcLevel::Low => qrcode::EcLevel::L,
        EcLevel::Medium => qrcode::EcLevel::M,
        EcLevel::Quartile => qrcode::EcLevel::Q,
        EcLevel::High => qrcode::EcLevel::H,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_produces_square_matrix() {
        let m = SymbolMatrix::encode("https://example.com", EcLevel::Medium).unwrap();
        // QR versions are 21 + 4k cells per side
        assert!(m.size() >= 21);
        assert_eq!((m.size() - 21) % 4, 0);
    }

    #[test]
    fn higher_ec_never_shrinks_the_symbol() {
        let low = SymbolMatrix::encode("https://example.com/some/path", EcLevel::Low).unwrap();
        let high = SymbolMatrix::encode("https://example.com/some/path", EcLevel::High).unwrap();
        assert!(high.size() >= low.size());
    }

    #[test]
    fn finder_corner_is_dark() {
        // The finder pattern's outer ring guarantees a dark (0,0) cell.
        let m = SymbolMatrix::encode("x", EcLevel::Medium).unwrap();
        assert!(m.dark(0, 0));
    }

    #[test]
    fn oversized_payload_is_rejected() {
        let payload = "a".repeat(8000);
        let err = SymbolMatrix::encode(&payload, EcLevel::High).unwrap_err();
        assert!(matches!(err, EncodeError::DataTooLong(_)));
    }
}
