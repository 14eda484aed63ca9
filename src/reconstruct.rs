//! Repeat-suppressing text reconstruction.
//!
//! A keyboard re-sends its full state on every polling interval while a
//! key is held, so the same glyph shows up in many consecutive reports
//! for a single keystroke. The reconstructor tracks, per glyph, how many
//! consecutive reports it has appeared in:
//!
//! ```text
//! report   1  2  3  4  5  (key-up)  6
//! count    1  2  3  4  5   cleared  1
//! emitted  a  -  a  a  a            a     (repeat_limit = 2)
//! ```
//!
//! The first sighting is emitted, the next `repeat_limit - 1` are
//! swallowed, and every report after that emits again (auto-repeat).
//! A report with no keys at all clears the counters.

use std::collections::HashMap;

use crate::config::DEFAULT_REPEAT_LIMIT;
use crate::hid::Glyph;

/// Turns a sequence of per-report glyph lists into typed text.
#[derive(Clone, Debug)]
pub struct Reconstructor {
    repeat_limit: u32,
    /// Consecutive-report count per held glyph. Only holds glyphs present
    /// in the most recent report.
    held: HashMap<Glyph, u32>,
    text: String,
}

impl Default for Reconstructor {
    fn default() -> Self {
        Self::new(DEFAULT_REPEAT_LIMIT)
    }
}

impl Reconstructor {
    pub fn new(repeat_limit: u32) -> Self {
        Self {
            repeat_limit,
            held: HashMap::new(),
            text: String::new(),
        }
    }

    pub fn repeat_limit(&self) -> u32 {
        self.repeat_limit
    }

    /// Process the glyphs of one report, in slot order.
    pub fn feed(&mut self, keys: &[Glyph]) {
        if keys.is_empty() {
            self.reset();
            return;
        }

        for glyph in keys.iter().filter(|g| g.is_text()) {
            self.held.retain(|tracked, _| keys.contains(tracked));

            match self.held.get_mut(glyph) {
                Some(count) => {
                    *count = count.saturating_add(1);
                    if *count <= self.repeat_limit {
                        continue;
                    }
                }
                None => {
                    self.held.insert(*glyph, 1);
                }
            }
            glyph.push_to(&mut self.text);
        }
    }

    /// Forget all held glyphs, as if every key had been released.
    pub fn reset(&mut self) {
        self.held.clear();
    }

    /// Consecutive-report count for `glyph`, if it is currently held.
    pub fn held_count(&self, glyph: &Glyph) -> Option<u32> {
        self.held.get(glyph).copied()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn into_text(self) -> String {
        self.text
    }
}
