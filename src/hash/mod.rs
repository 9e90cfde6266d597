//! MurmurHash3, x64 variant, with 32/64/128-bit outputs over bytes or 64-bit words.
//!
//! Not a cryptographic hash. Every output width is taken from the 128-bit
//! result: 64 bits is `h1`, 32 bits is the high half of `h1`.

pub mod bytes;
pub mod hasher;
pub mod mix;
pub mod words;

use crate::{
    error::Result,
    util::{
        config::HashConfig,
        types::{Digest128, Seed, Variant},
    },
};

pub use hasher::{hash_key, hash_key_to_index, hash_to_index, MurmurBuildHasher, MurmurHasher};

///A seed plus bit-handling variant. Cheap to copy, holds no buffers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Murmur3 {
    seed: Seed,
    variant: Variant,
}

impl Murmur3 {
    pub fn new(seed: Seed) -> Self {
        Self {
            seed,
            variant: Variant::Legacy,
        }
    }
    pub fn with_variant(self, variant: Variant) -> Self {
        Self { variant, ..self }
    }
    pub fn from_config(config: &HashConfig) -> Result<Self> {
        let seed = config.validate()?;
        tracing::debug!(seed, variant = ?config.variant, "murmur3 engine configured");
        Ok(Self::new(seed).with_variant(config.variant))
    }

    pub fn seed(&self) -> Seed {
        self.seed
    }
    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn hash128(&self, key: &[u8]) -> Digest128 {
        bytes::murmur3_x64_128(key, self.seed, self.variant)
    }
    pub fn hash64(&self, key: &[u8]) -> u64 {
        self.hash128(key).as_u64()
    }
    pub fn hash32(&self, key: &[u8]) -> u32 {
        self.hash128(key).as_u32()
    }

    ///Fails with `HashError::EmptyWords` on an empty slice
    pub fn hash128_words(&self, words: &[u64]) -> Result<Digest128> {
        words::murmur3_x64_128_words(words, self.seed, self.variant)
    }
    pub fn hash64_words(&self, words: &[u64]) -> Result<u64> {
        Ok(self.hash128_words(words)?.as_u64())
    }
    pub fn hash32_words(&self, words: &[u64]) -> Result<u32> {
        Ok(self.hash128_words(words)?.as_u32())
    }
}

///128-bit digest of `key` (legacy-compatible)
pub fn hash128(key: &[u8], seed: Seed) -> Digest128 {
    Murmur3::new(seed).hash128(key)
}

///64-bit digest of `key` (legacy-compatible)
pub fn hash64(key: &[u8], seed: Seed) -> u64 {
    Murmur3::new(seed).hash64(key)
}

///32-bit digest of `key` (legacy-compatible)
pub fn hash32(key: &[u8], seed: Seed) -> u32 {
    Murmur3::new(seed).hash32(key)
}

pub fn hash128_words(words: &[u64], seed: Seed) -> Result<Digest128> {
    Murmur3::new(seed).hash128_words(words)
}

pub fn hash64_words(words: &[u64], seed: Seed) -> Result<u64> {
    Murmur3::new(seed).hash64_words(words)
}

pub fn hash32_words(words: &[u64], seed: Seed) -> Result<u32> {
    Murmur3::new(seed).hash32_words(words)
}

#[cfg(test)]
mod tests {
    use rand::{thread_rng, Rng};

    use super::*;
    use crate::error::HashError;

    const FOX: &[u8] = b"The quick brown fox jumps over the lazy dog";

    fn seq(len: u8) -> Vec<u8> {
        (0..len).collect()
    }

    fn random_bytes(len: usize) -> Vec<u8> {
        let mut rng = thread_rng();
        (0..len).map(|_| rng.gen()).collect()
    }

    #[test]
    fn test_legacy_byte_vectors() {
        //pinned from the reference lineage
        let cases: [(&[u8], Seed, (u64, u64)); 8] = [
            (b"", 0, (0xa63cc05bb42d4300, 0x19f4d256e376f27f)),
            (&[0x01], 0, (0x9a9ea2f3ebd70552, 0xbcd7638a7370e2e7)),
            (&[0; 16], 0, (0x7eb76c0d7b2df825, 0xe6ff7e6e63a91810)),
            (&[0; 32], 0, (0x94d36cf9a4d61a9a, 0xe45ec20f8fdb250f)),
            (b"hello", 0, (0x4a41fce54778162b, 0x7f4885087beea78e)),
            (b"hello", 42, (0xa78174f01b9c50da, 0xe16a9e5f5610831d)),
            (b"hello", -1, (0x478d478e61557425, 0x7c8c9b5176ece975)),
            (&[0x80, 0xff, 0x7f], 0, (0x82b0aca563c4c61e, 0xddfe987633b81259)),
        ];
        for (key, seed, expected) in cases {
            let digest: (u64, u64) = hash128(key, seed).into();
            assert_eq!(digest, expected, "{key:?} seed {seed}");
        }
    }

    #[test]
    fn test_legacy_byte_vectors_past_one_block() {
        assert_eq!(
            hash128(&seq(17), 0),
            Digest128::new(0x73de1afbe466d719, 0x7e97afad34b672e2)
        );
        assert_eq!(
            hash128(&seq(31), 0),
            Digest128::new(0x83842bf22366cafb, 0xd5a475dc21c4e5a2)
        );
        assert_eq!(
            hash128(&seq(32), 0),
            Digest128::new(0xe3ce7a2c06623714, 0x6339da3570f2ee1a)
        );
        assert_eq!(
            hash128(FOX, 7),
            Digest128::new(0xa25dece393808bd8, 0x00e6f27fdac31fae)
        );
    }

    #[test]
    fn test_corrected_byte_vectors() {
        let engine = Murmur3::new(0).with_variant(Variant::Corrected);
        assert_eq!(
            engine.hash128(b""),
            Digest128::new(0x94031e01d8b84f36, 0x07bb2ffd0801feb5)
        );
        assert_eq!(
            engine.hash128(&[0x01]),
            Digest128::new(0xe0bfb111aa51e335, 0x3f8b9edfa7f29a6d)
        );
        assert_eq!(
            engine.hash128(&[0; 16]),
            Digest128::new(0xa8cde8517edb202b, 0x26a542cbf44c7eea)
        );
        assert_eq!(
            engine.hash128(&seq(17)),
            Digest128::new(0xe6d01e7062a3acb6, 0x06088dbb837e9693)
        );
        assert_eq!(
            engine.hash128(b"hello"),
            Digest128::new(0xe5d6920b285c4270, 0xfabf189416d0b5c8)
        );
        assert_eq!(
            engine.hash128(FOX),
            Digest128::new(0x0c949060c736374a, 0x2fb48cc7276c227b)
        );
    }

    #[test]
    fn test_legacy_word_vectors() {
        assert_eq!(
            hash128_words(&[1], 0).unwrap(),
            Digest128::new(0x314a105b5d2761b6, 0x3537be936c78d86a)
        );
        assert_eq!(
            hash128_words(&[0], 0).unwrap(),
            Digest128::new(0xcbc93862c890a61b, 0x2358821be6cb8516)
        );
        assert_eq!(
            hash128_words(&[1, 2], 0).unwrap(),
            Digest128::new(0x70980fe2b09cec0e, 0x9d7baf3dac4cb566)
        );
        assert_eq!(
            hash128_words(&[u64::MAX, 0x0123_4567_89ab_cdef], 7).unwrap(),
            Digest128::new(0x88edcd3d86d60318, 0xff920293f554893f)
        );
        assert_eq!(
            hash128_words(&[1, 2, 3], 0).unwrap(),
            Digest128::new(0x6421e7295ba8b689, 0x8c7917c28c9c49c9)
        );
        assert_eq!(
            hash128_words(&[1, 2, 3], -5).unwrap(),
            Digest128::new(0x7e119f7ece51b31b, 0x8624b78bf8eacbf7)
        );
    }

    #[test]
    fn test_corrected_word_vectors() {
        let engine = Murmur3::new(0).with_variant(Variant::Corrected);
        assert_eq!(
            engine.hash128_words(&[1]).unwrap(),
            Digest128::new(0x57e457b037cf9869, 0x8f38bd012146c78c)
        );
        assert_eq!(
            engine.hash128_words(&[1, 2, 3]).unwrap(),
            Digest128::new(0xb66f1f24ffb99b70, 0xf1edf4469c057c75)
        );
        let engine = Murmur3::new(7).with_variant(Variant::Corrected);
        assert_eq!(
            engine.hash128_words(&[u64::MAX, 0x0123_4567_89ab_cdef]).unwrap(),
            Digest128::new(0x832da8fbf0eb91f1, 0xd2aedfe998403c73)
        );
    }

    #[test]
    fn test_width_consistency() {
        for len in [0, 1, 5, 15, 16, 17, 31, 32, 100] {
            let key = random_bytes(len);
            let seed: Seed = thread_rng().gen();
            let full = hash128(&key, seed);
            assert_eq!(hash64(&key, seed), full.h1);
            assert_eq!(hash32(&key, seed), (full.h1 >> 32) as u32);
        }

        let words = [3u64, 1, 4, 1, 5];
        let full = hash128_words(&words, 9).unwrap();
        assert_eq!(hash64_words(&words, 9).unwrap(), full.h1);
        assert_eq!(hash32_words(&words, 9).unwrap(), (full.h1 >> 32) as u32);
    }

    #[test]
    fn test_determinism() {
        let key = random_bytes(57);
        let seed: Seed = thread_rng().gen();
        for variant in [Variant::Legacy, Variant::Corrected] {
            let engine = Murmur3::new(seed).with_variant(variant);
            assert_eq!(engine.hash128(&key), engine.hash128(&key));
        }
    }

    #[test]
    fn test_seed_sensitivity() {
        let key = b"bloom";
        for (s1, s2) in [(0, 1), (1, 2), (-1, 1), (12345, 54321), (Seed::MIN, Seed::MAX)] {
            assert_ne!(hash128(key, s1), hash128(key, s2), "seeds {s1} and {s2}");
            assert_ne!(
                hash128_words(&[42], s1).unwrap(),
                hash128_words(&[42], s2).unwrap()
            );
        }
    }

    #[test]
    fn test_length_sensitivity() {
        let mut rng = thread_rng();
        for len in [0, 7, 15, 16, 40] {
            let mut key = random_bytes(len);
            let before = hash128(&key, 0);
            key.push(rng.gen());
            assert_ne!(before, hash128(&key, 0), "appending to {len} bytes");
        }
    }

    #[test]
    fn test_variants_disagree() {
        let legacy = Murmur3::new(0);
        let corrected = legacy.with_variant(Variant::Corrected);
        assert_ne!(legacy.hash128(FOX), corrected.hash128(FOX));
    }

    #[test]
    fn test_empty_words_is_invalid() {
        assert_eq!(hash128_words(&[], 0), Err(HashError::EmptyWords));
        assert_eq!(hash64_words(&[], 0), Err(HashError::EmptyWords));
        assert_eq!(hash32_words(&[], 0), Err(HashError::EmptyWords));
    }

    #[test]
    fn test_from_config() {
        let config = HashConfig::new(42, Variant::Legacy);
        let engine = Murmur3::from_config(&config).unwrap();
        assert_eq!(engine.seed(), 42);
        assert_eq!(engine.variant(), Variant::Legacy);
        assert_eq!(
            engine.hash128(b"hello"),
            Digest128::new(0xa78174f01b9c50da, 0xe16a9e5f5610831d)
        );

        let config = HashConfig {
            seed: i64::MIN,
            variant: Variant::Legacy,
        };
        assert!(matches!(
            Murmur3::from_config(&config),
            Err(HashError::InvalidArgument(_))
        ));
    }
}
