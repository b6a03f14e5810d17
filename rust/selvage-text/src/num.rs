use selvage_common::{Result, error::ErrorKind};

/// Parses an unsigned 32-bit integer from a string of ASCII decimal digits.
///
/// The whole string must consist of digits `0`-`9`: the empty string, a
/// sign, whitespace, or any trailing character fails the parse as a whole
/// rather than truncating it. Accumulation wraps on overflow; values beyond
/// `u32::MAX` come back reduced modulo 2^32, which callers relying on the
/// storage format treat as acceptable.
pub fn parse_u32(text: &str) -> Result<u32> {
    if text.is_empty() {
        return Err(reject(text));
    }
    let mut value: u32 = 0;
    for b in text.bytes() {
        if !b.is_ascii_digit() {
            return Err(reject(text));
        }
        value = value.wrapping_mul(10).wrapping_add((b - b'0') as u32);
    }
    Ok(value)
}

/// Parses an unsigned 64-bit integer from a string of ASCII decimal digits.
///
/// Same contract as [`parse_u32`], with wraparound modulo 2^64.
pub fn parse_u64(text: &str) -> Result<u64> {
    if text.is_empty() {
        return Err(reject(text));
    }
    let mut value: u64 = 0;
    for b in text.bytes() {
        if !b.is_ascii_digit() {
            return Err(reject(text));
        }
        value = value.wrapping_mul(10).wrapping_add((b - b'0') as u64);
    }
    Ok(value)
}

#[cold]
fn reject(text: &str) -> selvage_common::error::Error {
    ErrorKind::InvalidDecimal {
        text: text.to_string(),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use selvage_common::error::ErrorKind;

    #[test]
    fn test_parses_plain_digits() {
        assert_eq!(parse_u32("0").unwrap(), 0);
        assert_eq!(parse_u32("42").unwrap(), 42);
        assert_eq!(parse_u32("4294967295").unwrap(), u32::MAX);
        assert_eq!(parse_u64("18446744073709551615").unwrap(), u64::MAX);
        assert_eq!(parse_u64("007").unwrap(), 7);
    }

    #[test]
    fn test_rejects_anything_but_digits() {
        for text in ["", "+1", "-1", " 1", "1 ", "12a", "a12", "1_000", "1.5"] {
            let err = parse_u32(text).unwrap_err();
            assert!(
                matches!(err.kind(), ErrorKind::InvalidDecimal { .. }),
                "expected rejection of {text:?}"
            );
            assert!(parse_u64(text).is_err());
        }
    }

    #[test]
    fn test_rejects_non_ascii_digits() {
        assert!(parse_u32("١٢").is_err());
        assert!(parse_u64("42٣").is_err());
    }

    #[test]
    fn test_overflow_wraps() {
        assert_eq!(parse_u32("4294967296").unwrap(), 0);
        assert_eq!(parse_u32("9999999999").unwrap(), 1410065407);
        assert_eq!(parse_u64("18446744073709551616").unwrap(), 0);
    }

    #[test]
    fn test_display_round_trip() {
        for v in [0u32, 1, 9, 10, 65535, 123456789, u32::MAX] {
            assert_eq!(parse_u32(&v.to_string()).unwrap(), v);
        }
        for v in [0u64, 1 << 33, u64::MAX / 7, u64::MAX] {
            assert_eq!(parse_u64(&v.to_string()).unwrap(), v);
        }
    }
}
