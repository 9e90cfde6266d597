use crate::util::types::{Seed, Variant};

const H1_INIT: u64 = 0x9368_e53c_2f6a_f274;
const H2_INIT: u64 = 0x586d_cd20_8f7c_d3fd;
const C1_INIT: u64 = 0x87c3_7b91_1142_53d5;
const C2_INIT: u64 = 0x4cf5_ad43_2745_937f;

const FMIX_C1: u64 = 0xff51_afd7_ed55_8ccd;
const FMIX_C2: u64 = 0xc4ce_b9fe_1a85_ec53;

///Scratch record for a single hash computation. Never outlives the call that made it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct State {
    pub h1: u64,
    pub h2: u64,
    pub k1: u64,
    pub k2: u64,
    c1: u64,
    c2: u64,
    variant: Variant,
}

impl State {
    pub fn new(seed: Seed, variant: Variant) -> Self {
        let seed = seed as i64 as u64; //sign extend, as the reference does
        Self {
            h1: H1_INIT ^ seed,
            h2: H2_INIT ^ seed,
            k1: 0,
            k2: 0,
            c1: C1_INIT,
            c2: C2_INIT,
            variant,
        }
    }

    ///One mix round over the block currently loaded in `k1`/`k2`
    pub fn bmix64(&mut self) {
        let variant = self.variant;

        self.k1 = self.k1.wrapping_mul(self.c1);
        self.k1 = rotl(self.k1, 23, variant);
        self.k1 = self.k1.wrapping_mul(self.c2);
        self.h1 ^= self.k1;
        self.h1 = self.h1.wrapping_add(self.h2);

        self.h2 = rotl(self.h2, 41, variant);

        self.k2 = self.k2.wrapping_mul(self.c2);
        self.k2 = rotl(self.k2, 23, variant);
        self.k2 = self.k2.wrapping_mul(self.c1);
        self.h2 ^= self.k2;
        self.h2 = self.h2.wrapping_add(self.h1);

        self.h1 = self.h1.wrapping_mul(3).wrapping_add(0x52dc_e729);
        self.h2 = self.h2.wrapping_mul(3).wrapping_add(0x3849_5ab5);

        self.c1 = self.c1.wrapping_mul(5).wrapping_add(0x7b7d_159c);
        self.c2 = self.c2.wrapping_mul(5).wrapping_add(0x6bce_6396);
    }

    ///Fold the length term in and avalanche both accumulators
    pub fn finalize(mut self, length: u64) -> (u64, u64) {
        self.h2 ^= length;

        self.h1 = self.h1.wrapping_add(self.h2);
        self.h2 = self.h2.wrapping_add(self.h1);

        self.h1 = fmix64(self.h1, self.variant);
        self.h2 = fmix64(self.h2, self.variant);

        self.h1 = self.h1.wrapping_add(self.h2);
        self.h2 = self.h2.wrapping_add(self.h1);

        (self.h1, self.h2)
    }
}

///Rotate left by `r`. The legacy lineage computes the right shift as `32 - r`,
/// which the 64-bit shift then masks to six bits: `r = 23` shifts right by 9
/// and `r = 41` by 55.
#[inline(always)]
fn rotl(x: u64, r: u32, variant: Variant) -> u64 {
    match variant {
        Variant::Legacy => (x << r) | (x >> (32u32.wrapping_sub(r) & 63)),
        Variant::Corrected => x.rotate_left(r),
    }
}

///Finalization avalanche. Legacy shifts are arithmetic (the reference shifts a signed value).
#[inline(always)]
pub fn fmix64(mut k: u64, variant: Variant) -> u64 {
    let shr33 = |k: u64| match variant {
        Variant::Legacy => ((k as i64) >> 33) as u64,
        Variant::Corrected => k >> 33,
    };
    k ^= shr33(k);
    k = k.wrapping_mul(FMIX_C1);
    k ^= shr33(k);
    k = k.wrapping_mul(FMIX_C2);
    k ^= shr33(k);
    k
}

///Pack one 8-byte window of a block into a word.
/// Legacy reads it big-endian and keeps only the low 32 bits, so the first
/// four bytes of every window never reach the state.
#[inline(always)]
pub fn read_block(window: &[u8], variant: Variant) -> u64 {
    let mut buf = [0u8; 8];
    buf.copy_from_slice(&window[..8]);
    match variant {
        Variant::Legacy => u64::from_be_bytes(buf) & 0xFFFF_FFFF,
        Variant::Corrected => u64::from_le_bytes(buf),
    }
}

///Widen one tail byte. Legacy sign-extends it first.
#[inline(always)]
pub fn tail_byte(byte: u8, variant: Variant) -> u64 {
    match variant {
        Variant::Legacy => byte as i8 as i64 as u64,
        Variant::Corrected => u64::from(byte),
    }
}
