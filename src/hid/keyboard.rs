//! USB HID keyboard report (boot protocol).
//!
//! Layout (8 bytes):
//! ```text
//! Byte 0: Modifier keys (bitfield)
//!         Bit 0 = Left Ctrl,  Bit 1 = Left Shift,
//!         Bit 2 = Left Alt,   Bit 3 = Left GUI,
//!         Bit 4 = Right Ctrl, Bit 5 = Right Shift,
//!         Bit 6 = Right Alt,  Bit 7 = Right GUI
//! Byte 1: Reserved (0x00)
//! Byte 2-7: Up to 6 simultaneous key codes (USB HID usage codes)
//! ```

use heapless::Vec;

use super::keymap::{self, Glyph};
use crate::config::{KEYBOARD_REPORT_SIZE, MAX_KEYCODES};

/// Glyphs of the keys held in one report, in slot order.
pub type DecodedKeys = Vec<Glyph, MAX_KEYCODES>;

const CTRL_BITS: u8 = 0x11;
const SHIFT_BITS: u8 = 0x22;
const ALT_BITS: u8 = 0x44;
const GUI_BITS: u8 = 0x88;

/// Active modifiers, with left and right variants folded together.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ModifierState {
    pub ctrl: bool,
    pub shift: bool,
    pub alt: bool,
    pub gui: bool,
}

impl ModifierState {
    /// Decode the report's modifier byte.
    pub const fn from_bits(bits: u8) -> Self {
        Self {
            ctrl: bits & CTRL_BITS != 0,
            shift: bits & SHIFT_BITS != 0,
            alt: bits & ALT_BITS != 0,
            gui: bits & GUI_BITS != 0,
        }
    }

    pub const fn is_empty(&self) -> bool {
        !(self.ctrl || self.shift || self.alt || self.gui)
    }
}

/// Standard USB HID boot-protocol keyboard report.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct KeyboardReport {
    /// Modifier key bitfield.
    pub modifier: u8,
    /// Reserved byte (always 0x00 per HID spec).
    pub reserved: u8,
    /// Up to 6 simultaneously pressed key codes.
    pub keycodes: [u8; MAX_KEYCODES],
}

impl KeyboardReport {
    /// Create an empty (all-keys-released) report.
    #[cfg(test)]
    pub const fn empty() -> Self {
        Self {
            modifier: 0,
            reserved: 0,
            keycodes: [0; MAX_KEYCODES],
        }
    }

    /// Parse from captured report bytes.
    ///
    /// Returns `None` for truncated payloads. Bytes beyond the eighth are
    /// ignored.
    pub fn from_bytes(data: &[u8]) -> Option<Self> {
        if data.len() < KEYBOARD_REPORT_SIZE {
            return None;
        }
        Some(Self {
            modifier: data[0],
            reserved: data[1],
            keycodes: [data[2], data[3], data[4], data[5], data[6], data[7]],
        })
    }

    pub const fn modifiers(&self) -> ModifierState {
        ModifierState::from_bits(self.modifier)
    }

    /// Map every occupied key slot to its glyph under the report's shift
    /// state. Empty slots (code 0) are skipped; duplicates are kept.
    pub fn decode(&self) -> DecodedKeys {
        let shift = self.modifiers().shift;
        self.keycodes
            .iter()
            .filter(|&&code| code != 0)
            .map(|&code| keymap::lookup(code, shift))
            .collect()
    }

    /// Returns `true` if no key slot is occupied. Modifiers are ignored.
    pub fn is_key_up(&self) -> bool {
        self.keycodes.iter().all(|&k| k == 0)
    }
}
