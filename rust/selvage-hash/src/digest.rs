use std::fmt;
use std::str::FromStr;

use selvage_common::{Result, error::Error, verify_data};
use selvage_text::hex;

/// Number of bytes in a content digest, common to every [`HashKind`].
///
/// [`HashKind`]: crate::HashKind
pub const DIGEST_SIZE: usize = 16;

/// A 128-bit content digest.
///
/// The payload is opaque: nothing in the value records which algorithm
/// produced it, so persisted digests must carry their
/// [`HashKind`](crate::HashKind) out of band.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Digest([u8; DIGEST_SIZE]);

impl Digest {
    pub const fn from_bytes(bytes: [u8; DIGEST_SIZE]) -> Digest {
        Digest(bytes)
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8; DIGEST_SIZE] {
        &self.0
    }

    /// Renders the digest in its persisted form: 32 lowercase hex
    /// characters, no separators.
    pub fn to_hex(&self) -> String {
        hex::encode(&self.0)
    }

    /// Parses the fixed-width hex form. The text must be exactly
    /// `2 * DIGEST_SIZE` characters; case is ignored.
    pub fn from_hex(text: &str) -> Result<Digest> {
        verify_data!(text, text.len() == DIGEST_SIZE * 2);
        let mut bytes = [0u8; DIGEST_SIZE];
        hex::decode_into(text.as_bytes(), &mut bytes)?;
        Ok(Digest(bytes))
    }
}

impl From<[u8; DIGEST_SIZE]> for Digest {
    fn from(bytes: [u8; DIGEST_SIZE]) -> Digest {
        Digest(bytes)
    }
}

impl AsRef<[u8]> for Digest {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for b in self.0 {
            write!(f, "{b:02x}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Digest({self})")
    }
}

impl FromStr for Digest {
    type Err = Error;

    fn from_str(s: &str) -> Result<Digest> {
        Digest::from_hex(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use selvage_common::error::ErrorKind;

    const SAMPLE: [u8; DIGEST_SIZE] = [
        0xde, 0xad, 0xbe, 0xef, 0x00, 0x11, 0x22, 0x33, 0x44, 0x55, 0x66, 0x77, 0x88, 0x99, 0xaa,
        0xff,
    ];

    #[test]
    fn test_hex_round_trip() {
        let digest = Digest::from_bytes(SAMPLE);
        let text = digest.to_hex();
        assert_eq!(text, "deadbeef00112233445566778899aaff");
        assert_eq!(Digest::from_hex(&text).unwrap(), digest);
    }

    #[test]
    fn test_from_hex_accepts_mixed_case() {
        let digest = Digest::from_hex("DEADBEEF00112233445566778899AAff").unwrap();
        assert_eq!(digest.as_bytes(), &SAMPLE);
    }

    #[test]
    fn test_from_hex_rejects_wrong_length() {
        assert!(matches!(
            Digest::from_hex("deadbeef").unwrap_err().kind(),
            ErrorKind::InvalidFormat { .. }
        ));
        let long = "deadbeef00112233445566778899aaff00";
        assert!(Digest::from_hex(long).is_err());
    }

    #[test]
    fn test_from_hex_reports_bad_digit_position() {
        let err = Digest::from_hex("deadbeef0011223344556677x899aaff").unwrap_err();
        assert!(matches!(
            err.kind(),
            ErrorKind::InvalidHexDigit { offset: 24, .. }
        ));
    }

    #[test]
    fn test_display_matches_to_hex() {
        let digest = Digest::from_bytes(SAMPLE);
        assert_eq!(digest.to_string(), digest.to_hex());
        assert_eq!(
            format!("{digest:?}"),
            "Digest(deadbeef00112233445566778899aaff)"
        );
    }

    #[test]
    fn test_from_str() {
        let digest: Digest = "deadbeef00112233445566778899aaff".parse().unwrap();
        assert_eq!(digest.as_bytes(), &SAMPLE);
    }
}
