use crate::{
    error::{HashError, Result},
    util::types::{Digest128, Seed, Variant, WORD_SIZE},
};

use super::mix::State;

///MurmurHash3 x64 128 over pre-packed 64-bit words. The length term counts
/// bytes (`8 * words.len()`) to line up with the byte front end.
pub fn murmur3_x64_128_words(words: &[u64], seed: Seed, variant: Variant) -> Result<Digest128> {
    let Some(&last) = words.last() else {
        tracing::debug!(seed, ?variant, "rejecting empty word sequence");
        return Err(HashError::EmptyWords);
    };

    let mut state = State::new(seed, variant);

    let mut pairs = words.chunks_exact(2);
    for pair in pairs.by_ref() {
        state.k1 = pair[0];
        state.k2 = pair[1];
        state.bmix64();
    }

    if !pairs.remainder().is_empty() {
        state.k1 = last;
        state.k2 = 0;
        state.bmix64();
    }

    let length = (words.len() as u64).wrapping_mul(WORD_SIZE as u64);
    let (h1, h2) = state.finalize(length);
    Ok(Digest128::new(h1, h2))
}
