//! MurmurHash3 x64: seedable, non-cryptographic 32/64/128-bit digests over
//! byte slices or 64-bit word slices.

pub mod error;
pub mod hash;
pub mod util;

pub use error::{HashError, Result};
pub use hash::{
    hash128, hash128_words, hash32, hash32_words, hash64, hash64_words, Murmur3,
    MurmurBuildHasher, MurmurHasher,
};
pub use util::{
    config::HashConfig,
    types::{Digest128, Seed, Variant},
};
