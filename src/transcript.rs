//! Batch pipeline: extractor lines → reports → glyphs → text.

use log::{debug, info, warn};

use crate::capture;
use crate::config::KEYBOARD_REPORT_SIZE;
use crate::error::Result;
use crate::hid::KeyboardReport;
use crate::reconstruct::Reconstructor;

/// Reconstructed text plus counters describing the run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Transcript {
    pub text: String,
    /// Input lines seen, including blank ones.
    pub lines: usize,
    /// Reports that reached the reconstructor.
    pub reports: usize,
    /// Reports with every key slot empty.
    pub key_ups: usize,
    /// Payloads shorter than a boot report, dropped before decoding.
    pub truncated: usize,
}

/// Decode every line of extractor output in order.
///
/// Malformed hex aborts the whole run and no partial text is returned.
pub fn transcribe<'a, I>(lines: I, repeat_limit: u32) -> Result<Transcript>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut reconstructor = Reconstructor::new(repeat_limit);
    let mut transcript = Transcript::default();

    for (idx, line) in lines.into_iter().enumerate() {
        transcript.lines += 1;
        let lineno = idx + 1;

        let Some(bytes) = capture::parse_line(line).map_err(|e| e.at_line(lineno))? else {
            continue;
        };

        let Some(report) = KeyboardReport::from_bytes(&bytes) else {
            warn!(
                "line {}: {}-byte payload is shorter than a {}-byte boot report, skipped",
                lineno,
                bytes.len(),
                KEYBOARD_REPORT_SIZE
            );
            transcript.truncated += 1;
            continue;
        };

        let keys = report.decode();
        debug!("line {}: {:?} {:?}", lineno, report.modifiers(), keys);
        if report.is_key_up() {
            transcript.key_ups += 1;
        }
        reconstructor.feed(&keys);
        transcript.reports += 1;
    }

    let repeat_limit = reconstructor.repeat_limit();
    transcript.text = reconstructor.into_text();
    info!(
        "Decoded {} reports from {} lines ({} key-up, {} truncated, repeat limit {}), {} chars of text",
        transcript.reports,
        transcript.lines,
        transcript.key_ups,
        transcript.truncated,
        repeat_limit,
        transcript.text.chars().count()
    );
    Ok(transcript)
}

/// Convenience wrapper over [`transcribe`] for a whole extractor output.
pub fn transcribe_output(output: &str, repeat_limit: u32) -> Result<Transcript> {
    transcribe(output.lines(), repeat_limit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_REPEAT_LIMIT;
    use crate::error::{Error, HexError};
    use pretty_assertions::assert_eq;

    fn text_of(lines: &[&str]) -> String {
        transcribe(lines.iter().copied(), DEFAULT_REPEAT_LIMIT)
            .unwrap()
            .text
    }

    #[test]
    fn press_then_shifted_press() {
        let mut lines = vec!["00:00:04:00:00:00:00:00"];
        assert_eq!(text_of(&lines), "a");

        lines.push("02:00:05:00:00:00:00:00");
        assert_eq!(text_of(&lines), "aB");
    }

    #[test]
    fn counts_are_tracked() {
        let t = transcribe_output(
            "00:00:04:00:00:00:00:00\n\
             \n\
             00:00:00:00:00:00:00:00\n\
             00:00:04:00\n\
             00:00:05:00:00:00:00:00\n",
            DEFAULT_REPEAT_LIMIT,
        )
        .unwrap();

        assert_eq!(t.text, "ab");
        assert_eq!(t.lines, 5);
        assert_eq!(t.reports, 3);
        assert_eq!(t.key_ups, 1);
        assert_eq!(t.truncated, 1);
    }

    #[test]
    fn truncated_report_leaves_state_alone() {
        // The short payload neither resets nor advances the held count.
        let text = text_of(&[
            "00:00:04:00:00:00:00:00",
            "00:00:00:00",
            "00:00:04:00:00:00:00:00",
        ]);
        assert_eq!(text, "a");
    }

    #[test]
    fn malformed_hex_is_fatal() {
        let err = transcribe(
            ["00:00:04:00:00:00:00:00", "00:00:04:00:00:00:00:0"],
            DEFAULT_REPEAT_LIMIT,
        )
        .unwrap_err();

        match err {
            Error::InvalidHex { line, reason } => {
                assert_eq!(line, 2);
                assert_eq!(reason, HexError::OddLength);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn empty_output_yields_empty_text() {
        let t = transcribe_output("", DEFAULT_REPEAT_LIMIT).unwrap();
        assert_eq!(t, Transcript::default());
    }

    #[test]
    fn modifier_only_reports_are_key_ups() {
        let text = text_of(&[
            "00:00:04:00:00:00:00:00",
            "02:00:00:00:00:00:00:00",
            "02:00:04:00:00:00:00:00",
        ]);
        assert_eq!(text, "aA");
    }
}
