//! Error types for qrframe

use thiserror::Error;

pub type Result<T> = std::result::Result<T, QrError>;

/// Main error type for qrframe
#[derive(Debug, Error)]
pub enum QrError {
    #[error("Encoding failed: {0}")]
    EncodeFailed(#[from] EncodeError),

    #[error("Export failed: {0}")]
    ExportFailed(#[from] ExportError),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Symbol matrix construction errors
#[derive(Debug, Error)]
pub enum EncodeError {
    #[error("Payload does not fit any QR version: {0}")]
    DataTooLong(String),

    #[error("Encoder error: {0}")]
    Backend(String),
}

/// Export errors
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Format not supported: {0}")]
    FormatNotSupported(String),

    #[error("Encoding failed: {0}")]
    EncodingFailed(String),

    #[error("Rasterization failed: {0}")]
    RasterizationFailed(String),

    #[error("Write failed: {0}")]
    WriteFailed(String),
}
