//! Capture line reader.
//!
//! The extractor prints one line per packet with the requested fields
//! separated by tabs. Each field is a hex byte string, either
//! colon-separated (`02:00:05:00:00:00:00:00`) or bare, depending on the
//! extractor version. Empty fields are left blank.

pub mod tshark;

use hex::FromHexError;
use log::debug;

use crate::error::HexError;

/// Extract the report bytes carried by one extractor output line.
///
/// Returns `Ok(None)` for lines with no payload. The first non-empty
/// field wins; a second populated column is ignored.
pub fn parse_line(line: &str) -> Result<Option<Vec<u8>>, HexError> {
    let mut fields = line
        .split_whitespace()
        .map(strip_colons)
        .filter(|field| !field.is_empty());

    let Some(field) = fields.next() else {
        return Ok(None);
    };
    if fields.next().is_some() {
        debug!("Multiple populated fields on capture line, using the first");
    }

    decode_hex(&field).map(Some)
}

fn strip_colons(field: &str) -> String {
    field.chars().filter(|&c| c != ':').collect()
}

/// Decode a contiguous hex string into bytes.
pub fn decode_hex(digits: &str) -> Result<Vec<u8>, HexError> {
    hex::decode(digits).map_err(|e| match e {
        FromHexError::InvalidHexCharacter { index, .. } => HexError::InvalidDigit { index },
        FromHexError::OddLength | FromHexError::InvalidStringLength => HexError::OddLength,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn colon_separated_field() {
        let bytes = parse_line("02:00:05:00:00:00:00:00\n").unwrap().unwrap();
        assert_eq!(bytes, [0x02, 0x00, 0x05, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn bare_hex_field() {
        let bytes = parse_line("0000040000000000").unwrap().unwrap();
        assert_eq!(bytes, [0x00, 0x00, 0x04, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn second_column_only() {
        // usbhid.data empty, usb.capdata populated
        let bytes = parse_line("\t00:00:2c:00:00:00:00:00").unwrap().unwrap();
        assert_eq!(bytes[2], 0x2C);
    }

    #[test]
    fn first_populated_column_wins() {
        let bytes = parse_line("00:00:04:00:00:00:00:00\t00:00:05:00:00:00:00:00")
            .unwrap()
            .unwrap();
        assert_eq!(bytes[2], 0x04);
    }

    #[test]
    fn blank_lines_carry_no_report() {
        assert_eq!(parse_line(""), Ok(None));
        assert_eq!(parse_line("   \t \r\n"), Ok(None));
        assert_eq!(parse_line(":::"), Ok(None));
    }

    #[test]
    fn short_payload_still_decodes() {
        // Length checks belong to the report decoder.
        assert_eq!(parse_line("0102").unwrap(), Some(vec![0x01, 0x02]));
    }

    #[test]
    fn odd_length_is_rejected() {
        assert_eq!(parse_line("04000000000000000"), Err(HexError::OddLength));
        assert_eq!(parse_line("0:00"), Err(HexError::OddLength));
    }

    #[test]
    fn non_hex_digit_is_rejected() {
        assert_eq!(
            parse_line("00:0g:04:00"),
            Err(HexError::InvalidDigit { index: 3 })
        );
        assert_eq!(decode_hex("zz"), Err(HexError::InvalidDigit { index: 0 }));
    }

    #[test]
    fn invalid_digit_offset_ignores_colons() {
        // Offsets count digits after the separators are removed.
        assert_eq!(
            parse_line("01:02:0X"),
            Err(HexError::InvalidDigit { index: 5 })
        );
        assert_eq!(parse_line("DE:AD:BE:EF").unwrap(), Some(vec![0xDE, 0xAD, 0xBE, 0xEF]));
    }

    #[test]
    fn mixed_case_digits() {
        assert_eq!(decode_hex("aBcD").unwrap(), [0xAB, 0xCD]);
    }
}
