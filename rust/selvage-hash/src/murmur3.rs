//! MurmurHash3, x86 128-bit variant.
//!
//! A fast, non-cryptographic fingerprint used for content integrity
//! checks, never for security. The output matches the reference
//! implementation byte for byte on every platform: the four 32-bit state
//! lanes are serialized little-endian regardless of host endianness.

const C1: u32 = 0x239b_961b;
const C2: u32 = 0xab0e_9789;
const C3: u32 = 0x38b3_4ae5;
const C4: u32 = 0xa1e3_8b93;

/// Computes the 128-bit x86-variant MurmurHash3 of `data` under `seed`.
pub fn hash128(data: &[u8], seed: u32) -> [u8; 16] {
    let mut h1 = seed;
    let mut h2 = seed;
    let mut h3 = seed;
    let mut h4 = seed;

    let mut blocks = data.chunks_exact(16);
    for block in blocks.by_ref() {
        let k1 = u32::from_le_bytes(block[0..4].try_into().expect("lane"));
        let k2 = u32::from_le_bytes(block[4..8].try_into().expect("lane"));
        let k3 = u32::from_le_bytes(block[8..12].try_into().expect("lane"));
        let k4 = u32::from_le_bytes(block[12..16].try_into().expect("lane"));

        h1 ^= mix_lane(k1, C1, 15, C2);
        h1 = h1
            .rotate_left(19)
            .wrapping_add(h2)
            .wrapping_mul(5)
            .wrapping_add(0x561c_cd1b);

        h2 ^= mix_lane(k2, C2, 16, C3);
        h2 = h2
            .rotate_left(17)
            .wrapping_add(h3)
            .wrapping_mul(5)
            .wrapping_add(0x0bca_a747);

        h3 ^= mix_lane(k3, C3, 17, C4);
        h3 = h3
            .rotate_left(15)
            .wrapping_add(h4)
            .wrapping_mul(5)
            .wrapping_add(0x96cd_1c35);

        h4 ^= mix_lane(k4, C4, 18, C1);
        h4 = h4
            .rotate_left(13)
            .wrapping_add(h1)
            .wrapping_mul(5)
            .wrapping_add(0x32ac_3b17);
    }

    let tail = blocks.remainder();
    if !tail.is_empty() {
        let mut k = [0u32; 4];
        for (i, &b) in tail.iter().enumerate() {
            k[i / 4] ^= u32::from(b) << ((i % 4) * 8);
        }
        // A lane with no tail bytes mixes from zero to zero, so every lane
        // can be mixed unconditionally.
        h1 ^= mix_lane(k[0], C1, 15, C2);
        h2 ^= mix_lane(k[1], C2, 16, C3);
        h3 ^= mix_lane(k[2], C3, 17, C4);
        h4 ^= mix_lane(k[3], C4, 18, C1);
    }

    let len = data.len() as u32;
    h1 ^= len;
    h2 ^= len;
    h3 ^= len;
    h4 ^= len;

    h1 = h1.wrapping_add(h2).wrapping_add(h3).wrapping_add(h4);
    h2 = h2.wrapping_add(h1);
    h3 = h3.wrapping_add(h1);
    h4 = h4.wrapping_add(h1);

    h1 = fmix32(h1);
    h2 = fmix32(h2);
    h3 = fmix32(h3);
    h4 = fmix32(h4);

    h1 = h1.wrapping_add(h2).wrapping_add(h3).wrapping_add(h4);
    h2 = h2.wrapping_add(h1);
    h3 = h3.wrapping_add(h1);
    h4 = h4.wrapping_add(h1);

    let mut out = [0u8; 16];
    out[0..4].copy_from_slice(&h1.to_le_bytes());
    out[4..8].copy_from_slice(&h2.to_le_bytes());
    out[8..12].copy_from_slice(&h3.to_le_bytes());
    out[12..16].copy_from_slice(&h4.to_le_bytes());
    out
}

#[inline]
fn mix_lane(k: u32, mul_in: u32, rot: u32, mul_out: u32) -> u32 {
    k.wrapping_mul(mul_in).rotate_left(rot).wrapping_mul(mul_out)
}

#[inline]
fn fmix32(mut h: u32) -> u32 {
    h ^= h >> 16;
    h = h.wrapping_mul(0x85eb_ca6b);
    h ^= h >> 13;
    h = h.wrapping_mul(0xc2b2_ae35);
    h ^= h >> 16;
    h
}

#[cfg(test)]
mod tests {
    use super::*;
    use selvage_text::hex;

    fn hex128(data: &[u8], seed: u32) -> String {
        hex::encode(&hash128(data, seed))
    }

    #[test]
    fn test_reference_vectors_seed_zero() {
        assert_eq!(hex128(b"", 0), "00000000000000000000000000000000");
        assert_eq!(hex128(b"a", 0), "3c9394a71bb056551bb056551bb05655");
        assert_eq!(hex128(b"abc", 0), "d1c6cd75a506b0a2a506b0a2a506b0a2");
        assert_eq!(hex128(b"hello world", 0), "881ab2c0e1c1f3141a150d1c2c9e0c9b");
        assert_eq!(
            hex128(b"The quick brown fox jumps over the lazy dog", 0),
            "c383152f672ceeec6cf67b5d2c1de9e5"
        );
    }

    #[test]
    fn test_block_boundaries() {
        // Exactly one block, then one block plus a single tail byte.
        assert_eq!(
            hex128(b"0123456789abcdef", 0),
            "09447dfb0ad3ae369b1dad48fd3b2b57"
        );
        assert_eq!(
            hex128(b"0123456789abcdef0", 0),
            "55388a1f060c92601c2f18b59c0b8c71"
        );
    }

    #[test]
    fn test_long_inputs() {
        assert_eq!(
            hex128(&[0u8; 256], 0),
            "85db5e08023acbb7083f0b4836ad935f"
        );
        let ramp: Vec<u8> = (0..=255).collect();
        assert_eq!(hex128(&ramp, 0), "8fc8562cdf0345db1ab252d3c0a24c49");
    }

    #[test]
    fn test_seed_changes_output() {
        assert_eq!(hex128(b"", 1), "ecadc488b901d254b901d254b901d254");
        assert_eq!(
            hex128(b"hello world", 0x9747b28c),
            "11c07260fe6598fcfa4efb7a61c559b0"
        );
        assert_ne!(hex128(b"hello world", 0), hex128(b"hello world", 1));
    }

    #[test]
    fn test_verification_value() {
        // The SMHasher verification procedure: hash the keys {}, {0},
        // {0,1}, ... {0..254} with seeds 256-i, then hash the
        // concatenated digests with seed 0. The first four output bytes,
        // read little-endian, identify the algorithm variant.
        let mut hashes = Vec::with_capacity(256 * 16);
        for i in 0..256u32 {
            let key: Vec<u8> = (0..i).map(|b| b as u8).collect();
            hashes.extend_from_slice(&hash128(&key, 256 - i));
        }
        let fin = hash128(&hashes, 0);
        let verification = u32::from_le_bytes(fin[0..4].try_into().unwrap());
        assert_eq!(verification, 0xB3ECE62A);
    }

    #[test]
    fn test_every_tail_length() {
        // Each of the 16 possible tail lengths produces a distinct digest
        // over a constant byte stream.
        let data = [0x5au8; 48];
        let mut seen: Vec<[u8; 16]> = Vec::new();
        for n in 32..48 {
            let digest = hash128(&data[..n], 0);
            assert!(!seen.contains(&digest));
            seen.push(digest);
        }
    }
}
