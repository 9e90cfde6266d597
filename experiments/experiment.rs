use murmur3_x64::{
    ceil_div,
    hash::hash_key_to_index,
    util::types::{Key, Size, WORD_SIZE},
    Murmur3, Variant,
};
use rand::{thread_rng, Rng};
use std::hash::Hasher;
use tracing::info;
use twox_hash::XxHash64;
use xxhash_rust::xxh3::xxh3_64_with_seed;

use crate::benchmarker::Benchmarker;

const SEED: i32 = 0x5eed;

///Throughput of each hasher over inputs from 8 bytes to 64 KiB
pub fn run_throughput() -> Vec<(&'static str, Vec<f64>)> {
    let window_duration_sec: u128 = 1;
    let num_trials = 3;

    let input_byte_sizes: Vec<Size> = (3..17).step_by(2).map(|power: u32| 2_usize.pow(power)).collect();
    info!(num_trials, %window_duration_sec, ?input_byte_sizes, "throughput experiment, results in hashes per second");

    let bm = Benchmarker::new(input_byte_sizes, window_duration_sec, num_trials);

    let legacy = Murmur3::new(SEED);
    let corrected = legacy.with_variant(Variant::Corrected);

    let mut results = Vec::new();

    let legacy_results = bm.run_experiment(&mut |bytes: &[u8]| legacy.hash64(bytes));
    info!(?legacy_results, "murmur3 legacy");
    results.push(("murmur3 legacy", legacy_results));

    let corrected_results = bm.run_experiment(&mut |bytes: &[u8]| corrected.hash64(bytes));
    info!(?corrected_results, "murmur3 corrected");
    results.push(("murmur3 corrected", corrected_results));

    //word front end over the same bytes, packed little-endian and zero padded
    let word_results = bm.run_experiment(&mut |bytes: &[u8]| {
        let mut words = vec![0u64; ceil_div!(bytes.len(), WORD_SIZE)];
        for (word, chunk) in words.iter_mut().zip(bytes.chunks(WORD_SIZE)) {
            let mut buf = [0u8; WORD_SIZE];
            buf[..chunk.len()].copy_from_slice(chunk);
            *word = u64::from_le_bytes(buf);
        }
        legacy.hash64_words(&words).unwrap_or_default()
    });
    info!(?word_results, "murmur3 legacy words");
    results.push(("murmur3 legacy words", word_results));

    let xxh3_results = bm.run_experiment(&mut |bytes: &[u8]| xxh3_64_with_seed(bytes, SEED as u64));
    info!(?xxh3_results, "xxh3");
    results.push(("xxh3", xxh3_results));

    let xxh64_results = bm.run_experiment(&mut |bytes: &[u8]| {
        let mut hasher = XxHash64::with_seed(SEED as u64);
        hasher.write(bytes);
        hasher.finish()
    });
    info!(?xxh64_results, "twox xxh64");
    results.push(("twox xxh64", xxh64_results));

    results
}

///Bucket load spread of `hash_key_to_index` over random keys. Returns max/min bucket load.
pub fn run_distribution(num_keys: Size, num_buckets: Size) -> f64 {
    let mut rng = thread_rng();
    let mut buckets = vec![0usize; num_buckets];
    for _ in 0..num_keys {
        let key: Key = rng.gen();
        buckets[hash_key_to_index(key, SEED, num_buckets)] += 1;
    }
    let max = buckets.iter().copied().max().unwrap_or(0);
    let min = buckets.iter().copied().min().unwrap_or(0);
    let ratio = max as f64 / min.max(1) as f64;
    info!(num_keys, num_buckets, max, min, ratio, "distribution experiment");
    ratio
}
