//! HID boot-keyboard report types and the US keymap.

pub mod keyboard;
pub mod keymap;


pub use keyboard::{DecodedKeys, KeyboardReport, ModifierState};
pub use keymap::{lookup, Glyph};

/// Decode raw report bytes into modifiers and key glyphs.
///
/// Returns `None` when fewer than 8 bytes are supplied, so a truncated
/// report never reaches the reconstructor.
pub fn decode_report(data: &[u8]) -> Option<(ModifierState, DecodedKeys)> {
    let report = KeyboardReport::from_bytes(data)?;
    Some((report.modifiers(), report.decode()))
}
