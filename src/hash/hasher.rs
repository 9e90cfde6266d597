use std::hash::{BuildHasher, Hasher};

use crate::util::types::{Key, Seed, Size};

use super::Murmur3;

pub fn hash_to_index<T: AsRef<[u8]>>(item: T, seed: Seed, arr_len: Size) -> usize {
    (Murmur3::new(seed).hash64(item.as_ref()) % arr_len as u64) as usize
}
pub fn hash_key(key: Key, seed: Seed) -> u64 {
    Murmur3::new(seed).hash64(&key.to_le_bytes())
}
pub fn hash_key_to_index(key: Key, seed: Seed, arr_len: Size) -> usize {
    (hash_key(key, seed) % arr_len as u64) as usize
}

///`Hasher` over a Murmur3 engine. Written bytes are collected and hashed in
/// one pass by `finish`, so the digest matches `Murmur3::hash64` of their concatenation.
#[derive(Debug, Default, Clone)]
pub struct MurmurHasher {
    buffer: Vec<u8>,
    engine: Murmur3,
}

impl MurmurHasher {
    pub fn new(engine: Murmur3) -> Self {
        Self {
            buffer: Vec::new(),
            engine,
        }
    }
}

impl Hasher for MurmurHasher {
    fn write(&mut self, bytes: &[u8]) {
        self.buffer.extend_from_slice(bytes);
    }
    fn finish(&self) -> u64 {
        self.engine.hash64(&self.buffer)
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct MurmurBuildHasher {
    engine: Murmur3,
}

impl MurmurBuildHasher {
    pub fn new(engine: Murmur3) -> Self {
        Self { engine }
    }
}

impl BuildHasher for MurmurBuildHasher {
    type Hasher = MurmurHasher;

    fn build_hasher(&self) -> MurmurHasher {
        MurmurHasher::new(self.engine)
    }
}
