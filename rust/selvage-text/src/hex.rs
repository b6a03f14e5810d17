use selvage_common::{Result, error::ErrorKind, verify_data};

const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

/// Encodes `src` as lowercase hex into `dst`, two characters per byte,
/// high nibble first. No separators, no terminator.
///
/// # Panics
///
/// Panics if `dst` cannot hold `2 * src.len()` bytes; the destination size
/// is a caller guarantee.
pub fn encode_into(src: &[u8], dst: &mut [u8]) {
    assert!(
        dst.len() >= src.len() * 2,
        "hex output needs two characters per input byte"
    );
    for (i, &b) in src.iter().enumerate() {
        dst[i * 2] = HEX_DIGITS[(b >> 4) as usize];
        dst[i * 2 + 1] = HEX_DIGITS[(b & 0xf) as usize];
    }
}

/// Encodes `src` as a lowercase hex string.
pub fn encode(src: &[u8]) -> String {
    let mut out = String::with_capacity(src.len() * 2);
    for &b in src {
        out.push(HEX_DIGITS[(b >> 4) as usize] as char);
        out.push(HEX_DIGITS[(b & 0xf) as usize] as char);
    }
    out
}

/// Decodes exactly `2 * dst.len()` hex characters from the front of `src`
/// into `dst`. Upper and lower case digits are accepted; bytes past the
/// consumed prefix are ignored.
///
/// # Errors
///
/// - `InvalidFormat` if `src` holds fewer than `2 * dst.len()` bytes.
/// - `InvalidHexDigit` at the first non-hex-digit character, carrying its
///   offset within `src`. Whole bytes decoded before that point are already
///   stored in `dst`; a half-decoded byte never is.
pub fn decode_into(src: &[u8], dst: &mut [u8]) -> Result<()> {
    verify_data!(src, src.len() >= dst.len() * 2);
    for i in 0..dst.len() {
        let hi = decode_digit(src, i * 2)?;
        let lo = decode_digit(src, i * 2 + 1)?;
        dst[i] = (hi << 4) | lo;
    }
    Ok(())
}

fn decode_digit(src: &[u8], offset: usize) -> Result<u8> {
    match hex_value(src[offset]) {
        Some(value) => Ok(value),
        None => Err(ErrorKind::InvalidHexDigit {
            offset,
            byte: src[offset],
        }
        .into()),
    }
}

fn hex_value(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'a'..=b'f' => Some(byte - b'a' + 10),
        b'A'..=b'F' => Some(byte - b'A' + 10),
        _ => None,
    }
}
