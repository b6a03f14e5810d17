//! Content hashing for file-integrity checks: two interchangeable 128-bit
//! algorithms behind a single dispatch point.
//!
//! `Murmur3` is the fast default fingerprint; `Md5` exists for
//! interoperability with tools that expect MD5-format checksums. Both
//! produce 16-byte digests, and a digest value alone does not reveal which
//! algorithm produced it.

use std::fmt;
use std::str::FromStr;

use selvage_common::{Result, error::ErrorKind};

pub mod digest;
pub mod murmur3;

pub use digest::{DIGEST_SIZE, Digest};

/// Selector for the digest algorithm.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HashKind {
    Murmur3,
    Md5,
}

impl HashKind {
    /// Every supported kind, in preference order.
    pub const ALL: [HashKind; 2] = [HashKind::Murmur3, HashKind::Md5];

    /// The identifier this kind is recorded under in metadata files.
    pub fn name(&self) -> &'static str {
        match self {
            HashKind::Murmur3 => "murmur3",
            HashKind::Md5 => "md5",
        }
    }

    /// Resolves a kind from its recorded identifier.
    ///
    /// An unrecognized name is an explicit error; a digest must never be
    /// computed or checked with a silently substituted algorithm.
    pub fn from_name(name: &str) -> Result<HashKind> {
        HashKind::ALL
            .into_iter()
            .find(|kind| kind.name() == name)
            .ok_or_else(|| {
                ErrorKind::UnknownHashKind {
                    name: name.to_string(),
                }
                .into()
            })
    }
}

impl fmt::Display for HashKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HashKind {
    type Err = selvage_common::error::Error;

    fn from_str(s: &str) -> Result<HashKind> {
        HashKind::from_name(s)
    }
}

/// Computes the digest of `data` with the selected algorithm.
///
/// A pure function of the input bytes: identical data yields an identical
/// digest across calls and platforms. `Murmur3` runs the x86 128-bit
/// variant with a fixed seed of zero; `Md5` is the standard MD5 digest.
pub fn compute(kind: HashKind, data: &[u8]) -> Digest {
    match kind {
        HashKind::Murmur3 => Digest::from_bytes(murmur3::hash128(data, 0)),
        HashKind::Md5 => {
            use md5::Digest as _;
            let mut bytes = [0u8; DIGEST_SIZE];
            bytes.copy_from_slice(md5::Md5::digest(data).as_slice());
            Digest::from_bytes(bytes)
        }
    }
}

/// Computes the digest of `data` into a caller-provided buffer.
pub fn compute_into(kind: HashKind, digest: &mut [u8; DIGEST_SIZE], data: &[u8]) {
    *digest = *compute(kind, data).as_bytes();
}

/// Recomputes the digest of `data` and compares it with `expected`.
///
/// # Errors
///
/// Returns `DigestMismatch` naming `element` if the digests differ.
pub fn verify(
    kind: HashKind,
    data: &[u8],
    expected: &Digest,
    element: Option<&str>,
) -> Result<()> {
    let actual = compute(kind, data);
    if actual == *expected {
        Ok(())
    } else {
        Err(ErrorKind::DigestMismatch {
            element: element.unwrap_or_default().to_string(),
        }
        .into())
    }
}
