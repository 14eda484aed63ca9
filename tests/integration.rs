//! Integration tests for the capture-to-text pipeline.

use std::io::Write;

use pretty_assertions::assert_eq;
use tempfile::NamedTempFile;
use usbkeylog::capture::tshark;
use usbkeylog::config::DEFAULT_REPEAT_LIMIT;
use usbkeylog::render::escape;
use usbkeylog::{transcribe_output, Error};

const KEY_UP: &str = "00:00:00:00:00:00:00:00";

/// Build extractor-style output for a sequence of (modifier, key) taps,
/// each held for `polls` reports and followed by a key-up.
fn taps(keys: &[(u8, u8)], polls: usize) -> String {
    let mut out = String::new();
    for &(modifier, key) in keys {
        for _ in 0..polls {
            out.push_str(&format!("{modifier:02x}:00:{key:02x}:00:00:00:00:00\n"));
        }
        out.push_str(KEY_UP);
        out.push('\n');
    }
    out
}

#[test]
fn typed_command_line() {
    // "ls -la" + Enter, each key held for two polls
    let output = taps(
        &[
            (0, 0x0F),
            (0, 0x16),
            (0, 0x2C),
            (0, 0x2D),
            (0, 0x0F),
            (0, 0x04),
            (0, 0x28),
        ],
        2,
    );
    let t = transcribe_output(&output, DEFAULT_REPEAT_LIMIT).unwrap();
    assert_eq!(t.text, "ls -la\n");
    assert_eq!(escape(&t.text), "'ls -la\\n'");
    assert_eq!(t.key_ups, 7);
}

#[test]
fn shifted_symbols_and_placeholders() {
    let output = taps(&[(0x02, 0x1F), (0x20, 0x04), (0, 0x29), (0, 0x3A)], 1);
    let t = transcribe_output(&output, DEFAULT_REPEAT_LIMIT).unwrap();
    assert_eq!(t.text, "@A[ESC][F1]");
}

#[test]
fn backspace_survives_in_escaped_form() {
    let output = taps(&[(0, 0x04), (0, 0x2A), (0, 0x05)], 1);
    let t = transcribe_output(&output, DEFAULT_REPEAT_LIMIT).unwrap();
    assert_eq!(escape(&t.text), "'a\\x08b'");
}

#[test]
fn long_hold_auto_repeats() {
    let output = taps(&[(0, 0x04)], 6);
    let t = transcribe_output(&output, DEFAULT_REPEAT_LIMIT).unwrap();
    assert_eq!(t.text, "aaaaa");
}

#[test]
fn capdata_column_and_bare_hex() {
    let output = "\t00:00:04:00:00:00:00:00\n\
                  0000000000000000\n\
                  0000050000000000\t\n";
    let t = transcribe_output(output, DEFAULT_REPEAT_LIMIT).unwrap();
    assert_eq!(t.text, "ab");
}

#[test]
fn seven_byte_payloads_are_dropped() {
    let t = transcribe_output("04000000000000\n02000500000000\n", DEFAULT_REPEAT_LIMIT).unwrap();
    assert_eq!(t.text, "");
    assert_eq!(t.truncated, 2);
}

#[test]
fn corrupt_line_aborts_without_text() {
    let output = format!("{}zz:00:04:00:00:00:00:00\n", taps(&[(0, 0x04)], 1));
    let err = transcribe_output(&output, DEFAULT_REPEAT_LIMIT).unwrap_err();
    assert!(matches!(err, Error::InvalidHex { line: 3, .. }));
    assert!(err.to_string().contains("line 3"));
}

#[test]
fn pre_extracted_fields_file() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(taps(&[(0, 0x0B), (0x02, 0x0C)], 3).as_bytes())
        .unwrap();

    let output = tshark::read_fields(file.path()).unwrap();
    let t = transcribe_output(&output, DEFAULT_REPEAT_LIMIT).unwrap();
    // Each key held for three polls: emitted on polls 1 and 3.
    assert_eq!(t.text, "hhII");
}
