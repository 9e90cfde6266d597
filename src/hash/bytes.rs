use crate::util::types::{Digest128, Seed, Variant, BLOCK_SIZE, WORD_SIZE};

use super::mix::{read_block, tail_byte, State};

///MurmurHash3 x64 128 over a byte sequence
pub fn murmur3_x64_128(key: &[u8], seed: Seed, variant: Variant) -> Digest128 {
    let mut state = State::new(seed, variant);

    let mut blocks = key.chunks_exact(BLOCK_SIZE);
    for block in blocks.by_ref() {
        state.k1 = read_block(&block[..WORD_SIZE], variant);
        state.k2 = read_block(&block[WORD_SIZE..], variant);
        state.bmix64();
    }

    let tail = blocks.remainder();
    state.k1 = 0;
    state.k2 = 0;
    //highest tail byte first, each one landing at its byte offset within k1 or k2
    for (i, &byte) in tail.iter().enumerate().rev() {
        let bits = tail_byte(byte, variant) << (8 * (i % WORD_SIZE));
        if i < WORD_SIZE {
            state.k1 ^= bits;
        } else {
            state.k2 ^= bits;
        }
    }
    if !tail.is_empty() {
        state.bmix64();
    }

    let (h1, h2) = state.finalize(key.len() as u64);
    Digest128::new(h1, h2)
}
