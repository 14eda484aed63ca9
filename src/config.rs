//! Application-wide constants.
//!
//! Report layout, suppression tuning and the extractor invocation live
//! here so they can be adjusted in one place.

// Report layout

/// Size of a boot-protocol keyboard report in bytes.
pub const KEYBOARD_REPORT_SIZE: usize = 8;

/// Number of simultaneous key-code slots in a boot report (6KRO).
pub const MAX_KEYCODES: usize = 6;

// Reconstruction

/// Number of consecutive re-appearances of a held glyph that are
/// swallowed before auto-repeat kicks in.
///
/// With the default of 2, a glyph seen in three or more consecutive
/// reports is emitted on the first report and again from the third
/// report onwards.
pub const DEFAULT_REPEAT_LIMIT: u32 = 2;

// External extractor

/// Program used to pull HID payloads out of a capture file.
pub const DEFAULT_EXTRACTOR: &str = "tshark";

/// Capture fields requested from the extractor, in output column order.
///
/// `usbhid.data` carries payloads dissected as HID boot reports,
/// `usb.capdata` carries raw interrupt-transfer data for devices the
/// dissector did not recognise.
pub const EXTRACTOR_FIELDS: [&str; 2] = ["usbhid.data", "usb.capdata"];
