use serde::{Deserialize, Serialize};

pub type Seed = i32;
pub type Key = i64;
pub type Size = usize; //for lengths and bucket counts

pub const BLOCK_SIZE: Size = 16; //bytes consumed by one mix round
pub const WORD_SIZE: Size = std::mem::size_of::<u64>();

///Which bit handling the engine uses. Both share the same round structure.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Variant {
    ///Bit-exact with the reference lineage, quirks included
    #[default]
    Legacy,
    ///Little-endian 64-bit block reads, true 64-bit rotates, logical shifts.
    /// Produces different digests from `Legacy`.
    Corrected,
}

///128-bit digest, kept as the two accumulators the engine finishes with.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Digest128 {
    pub h1: u64,
    pub h2: u64,
}

impl Digest128 {
    pub const fn new(h1: u64, h2: u64) -> Self {
        Self { h1, h2 }
    }
    ///The 64-bit digest is the first accumulator
    pub const fn as_u64(&self) -> u64 {
        self.h1
    }
    ///The 32-bit digest is the high half of the first accumulator
    pub const fn as_u32(&self) -> u32 {
        (self.h1 >> 32) as u32
    }
}

impl From<Digest128> for (u64, u64) {
    fn from(digest: Digest128) -> Self {
        (digest.h1, digest.h2)
    }
}

impl From<Digest128> for [u64; 2] {
    fn from(digest: Digest128) -> Self {
        [digest.h1, digest.h2]
    }
}
