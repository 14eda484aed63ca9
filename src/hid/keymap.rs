//! US keymap for USB HID boot-keyboard usage codes (usage page 0x07).
//!
//! Every code in `0x00..=0xFF` resolves to a [`Glyph`]. Codes up to
//! `0xE7` are defined by the HID usage tables; `0xE8..=0xFF` are
//! reserved and map to [`Glyph::Unmapped`].

/// What a key contributes to the reconstructed text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Glyph {
    /// A single character, including `\n`, `\t` and `\b`.
    Char(char),
    /// Non-printing key rendered as a visible token, e.g. `[F1]`.
    Placeholder(&'static str),
    /// Known key with no textual form (modifiers, media keys, ...).
    Blank,
    /// Code with no keymap entry.
    Unmapped,
}

impl Glyph {
    /// Returns `true` if the glyph produces output text.
    pub const fn is_text(&self) -> bool {
        matches!(self, Glyph::Char(_) | Glyph::Placeholder(_))
    }

    /// Append the glyph's text to `out`. Non-text glyphs append nothing.
    pub fn push_to(&self, out: &mut String) {
        match self {
            Glyph::Char(c) => out.push(*c),
            Glyph::Placeholder(token) => out.push_str(token),
            Glyph::Blank | Glyph::Unmapped => {}
        }
    }
}

/// Look up the glyph for `code` under the given shift state.
pub fn lookup(code: u8, shift: bool) -> Glyph {
    let (plain, shifted) = entry(code);
    if shift {
        shifted
    } else {
        plain
    }
}

/// The (unshifted, shifted) pair for a usage code.
pub const fn entry(code: u8) -> (Glyph, Glyph) {
    use Glyph::{Blank, Char, Placeholder, Unmapped};

    match code {
        // Reserved (no event indicated)
        0x00 => (Unmapped, Unmapped),
        // ErrorRollOver, POSTFail, ErrorUndefined
        0x01..=0x03 => (Blank, Blank),

        // Letters
        0x04..=0x1D => {
            let offset = code - 0x04;
            (
                Char((b'a' + offset) as char),
                Char((b'A' + offset) as char),
            )
        }

        // Digit row
        0x1E => (Char('1'), Char('!')),
        0x1F => (Char('2'), Char('@')),
        0x20 => (Char('3'), Char('#')),
        0x21 => (Char('4'), Char('$')),
        0x22 => (Char('5'), Char('%')),
        0x23 => (Char('6'), Char('^')),
        0x24 => (Char('7'), Char('&')),
        0x25 => (Char('8'), Char('*')),
        0x26 => (Char('9'), Char('(')),
        0x27 => (Char('0'), Char(')')),

        // Editing and punctuation
        0x28 => (Char('\n'), Char('\n')),     // Return
        0x29 => (Placeholder("[ESC]"), Placeholder("[ESC]")),
        0x2A => (Char('\u{8}'), Char('\u{8}')), // Backspace
        0x2B => (Char('\t'), Char('\t')),
        0x2C => (Char(' '), Char(' ')),
        0x2D => (Char('-'), Char('_')),
        0x2E => (Char('='), Char('+')),
        0x2F => (Char('['), Char('{')),
        0x30 => (Char(']'), Char('}')),
        0x31 => (Char('\\'), Char('|')),
        0x32 => (Blank, Blank), // Non-US # and ~
        0x33 => (Char(';'), Char(':')),
        0x34 => (Char('\''), Char('"')),
        0x35 => (Char('`'), Char('~')),
        0x36 => (Char(','), Char('<')),
        0x37 => (Char('.'), Char('>')),
        0x38 => (Char('/'), Char('?')),
        0x39 => same(Placeholder("[CAPSLOCK]")),

        // F1-F12
        0x3A => same(Placeholder("[F1]")),
        0x3B => same(Placeholder("[F2]")),
        0x3C => same(Placeholder("[F3]")),
        0x3D => same(Placeholder("[F4]")),
        0x3E => same(Placeholder("[F5]")),
        0x3F => same(Placeholder("[F6]")),
        0x40 => same(Placeholder("[F7]")),
        0x41 => same(Placeholder("[F8]")),
        0x42 => same(Placeholder("[F9]")),
        0x43 => same(Placeholder("[F10]")),
        0x44 => same(Placeholder("[F11]")),
        0x45 => same(Placeholder("[F12]")),

        // Navigation cluster
        0x46 => same(Placeholder("[PRINTSCREEN]")),
        0x47 => same(Placeholder("[SCROLLLOCK]")),
        0x48 => same(Placeholder("[PAUSE]")),
        0x49 => same(Placeholder("[INSERT]")),
        0x4A => same(Placeholder("[HOME]")),
        0x4B => same(Placeholder("[PAGEUP]")),
        0x4C => same(Placeholder("[DELETE]")),
        0x4D => same(Placeholder("[END]")),
        0x4E => same(Placeholder("[PAGEDOWN]")),
        0x4F => same(Placeholder("[RIGHTARROW]")),
        0x50 => same(Placeholder("[LEFTARROW]")),
        0x51 => same(Placeholder("[DOWNARROW]")),
        0x52 => same(Placeholder("[UPARROW]")),

        // Keypad: shift yields the printed symbol
        0x53 => same(Placeholder("[NUMLOCK]")),
        0x54 => (Placeholder("[KEYPADSLASH]"), Char('/')),
        0x55 => (Placeholder("[KEYPADASTERISK]"), Char('*')),
        0x56 => (Placeholder("[KEYPADMINUS]"), Char('-')),
        0x57 => (Placeholder("[KEYPADPLUS]"), Char('+')),
        0x58 => same(Placeholder("[KEYPADENTER]")),
        0x59 => (Placeholder("[KEYPAD1]"), Char('1')),
        0x5A => (Placeholder("[KEYPAD2]"), Char('2')),
        0x5B => (Placeholder("[KEYPAD3]"), Char('3')),
        0x5C => (Placeholder("[KEYPAD4]"), Char('4')),
        0x5D => (Placeholder("[KEYPAD5]"), Char('5')),
        0x5E => (Placeholder("[KEYPAD6]"), Char('6')),
        0x5F => (Placeholder("[KEYPAD7]"), Char('7')),
        0x60 => (Placeholder("[KEYPAD8]"), Char('8')),
        0x61 => (Placeholder("[KEYPAD9]"), Char('9')),
        0x62 => (Placeholder("[KEYPAD0]"), Char('0')),
        0x63 => (Placeholder("[KEYPADPERIOD]"), Char('.')),
        // Non-US \ and |, Application, Power
        0x64..=0x66 => (Blank, Blank),
        0x67 => (Placeholder("[KEYPADEQUALS]"), Char('=')),

        // F13-F24
        0x68 => same(Placeholder("[F13]")),
        0x69 => same(Placeholder("[F14]")),
        0x6A => same(Placeholder("[F15]")),
        0x6B => same(Placeholder("[F16]")),
        0x6C => same(Placeholder("[F17]")),
        0x6D => same(Placeholder("[F18]")),
        0x6E => same(Placeholder("[F19]")),
        0x6F => same(Placeholder("[F20]")),
        0x70 => same(Placeholder("[F21]")),
        0x71 => same(Placeholder("[F22]")),
        0x72 => same(Placeholder("[F23]")),
        0x73 => same(Placeholder("[F24]")),

        // Execute..Keypad Hexadecimal, reserved gaps, and the
        // modifier usages 0xE0-0xE7 (reported via byte 0 instead)
        0x74..=0xE7 => (Blank, Blank),

        _ => (Unmapped, Unmapped),
    }
}

const fn same(glyph: Glyph) -> (Glyph, Glyph) {
    (glyph, glyph)
}
