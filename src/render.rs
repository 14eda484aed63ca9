//! Presentation of the reconstructed text.
//!
//! The escaped form makes control characters such as backspace visible,
//! which matters when reading transcripts with corrections in them.

use std::fmt;

/// Quote `text` the way Python's `repr()` does for a `str`.
///
/// Single quotes are used unless the text contains a `'` and no `"`.
pub fn escape(text: &str) -> String {
    let quote = if text.contains('\'') && !text.contains('"') {
        '"'
    } else {
        '\''
    };

    let mut out = String::with_capacity(text.len() + 2);
    out.push(quote);
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c if (c as u32) < 0x20 || c == '\u{7f}' => {
                out.push_str(&format!("\\x{:02x}", c as u32));
            }
            c => out.push(c),
        }
    }
    out.push(quote);
    out
}

/// Both renderings of a transcript, as printed by the CLI.
pub struct Report<'a>(pub &'a str);

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Raw output:")?;
        writeln!(f, "{}", escape(self.0))?;
        writeln!(f, "Text output:")?;
        write!(f, "{}", self.0)
    }
}
