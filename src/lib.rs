//! Reconstruct typed text from captured USB HID boot-keyboard reports.
//!
//! The pipeline is batch and strictly ordered:
//!
//! ```text
//! capture file → tshark fields → capture::parse_line → hid::KeyboardReport
//!              → reconstruct::Reconstructor → text
//! ```
//!
//! Everything except [`capture::tshark`] is pure and host-testable.
//!
//! ```
//! let out = usbkeylog::transcribe_output(
//!     "00:00:0b:00:00:00:00:00\n00:00:00:00:00:00:00:00\n02:00:0c:00:00:00:00:00\n",
//!     usbkeylog::config::DEFAULT_REPEAT_LIMIT,
//! )
//! .unwrap();
//! assert_eq!(out.text, "hI");
//! ```

pub mod capture;
pub mod config;
pub mod error;
pub mod hid;
pub mod reconstruct;
pub mod render;
pub mod transcript;

pub use error::{Error, HexError, Result};
pub use hid::{decode_report, DecodedKeys, Glyph, KeyboardReport, ModifierState};
pub use reconstruct::Reconstructor;
pub use transcript::{transcribe, transcribe_output, Transcript};
