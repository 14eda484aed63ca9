//! Unified error type for usbkeylog.
//!
//! Only conditions that abort a run are errors. Truncated reports and
//! unmapped key codes are expected in real captures and are handled
//! locally by the pipeline instead.

use std::io;

use thiserror::Error;

/// Top-level error type used across the library.
#[derive(Debug, Error)]
pub enum Error {
    // Capture lines
    /// A capture line did not hold a valid hex byte string.
    #[error("capture line {line}: malformed report hex: {reason}")]
    InvalidHex { line: usize, reason: HexError },

    // Extractor
    /// The external extractor could not be started at all.
    #[error("failed to run extractor `{program}`")]
    ExtractorSpawn {
        program: String,
        #[source]
        source: io::Error,
    },

    // Generic
    /// Reading the capture or the extractor output failed.
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Why a hex field could not be decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HexError {
    /// Hex strings encode whole bytes, so an odd digit count is corrupt.
    #[error("odd number of hex digits")]
    OddLength,
    /// Non-hex character at the given offset (after colon removal).
    #[error("invalid hex digit at offset {index}")]
    InvalidDigit { index: usize },
}

impl HexError {
    /// Attach the 1-based capture line number.
    pub fn at_line(self, line: usize) -> Error {
        Error::InvalidHex { line, reason: self }
    }
}

pub type Result<T> = core::result::Result<T, Error>;
