use murmur3_x64::util::types::Size;
use rand::{thread_rng, Rng};
use std::{hint::black_box, time::Instant};

const NS_PER_SEC: u128 = 1_000_000_000; //For conversions from sec to nanosec
const NUM_INPUTS: usize = 64; //distinct random inputs cycled through per trial

///Random inputs of a fixed byte length
fn random_inputs(input_len: Size) -> Vec<Vec<u8>> {
    let mut rng = thread_rng();
    (0..NUM_INPUTS)
        .map(|_| (0..input_len).map(|_| rng.gen()).collect())
        .collect()
}

///Runs num_trials number of iterations, each iteration we count how many hashes (of a random input) can be done within the window_duration.
/// Returns Average number of operations per second
fn bench_throughput(
    hasher: &mut dyn FnMut(&[u8]) -> u64,
    inputs: &[Vec<u8>],
    window_duration_sec: u128,
    num_trials: usize,
) -> f64 {
    let window_nano_sec = window_duration_sec * NS_PER_SEC;
    let mut opcount_each_trial = vec![0u128; num_trials];

    for op_count in opcount_each_trial.iter_mut() {
        let mut total_duration = 0;
        let mut rng = thread_rng();
        while total_duration < window_nano_sec {
            let input = &inputs[rng.gen_range(0..inputs.len())];

            let start = Instant::now();
            black_box(hasher(black_box(input.as_slice()))); //black box prevents the hash from being optimized away
            let duration = start.elapsed().as_nanos();

            *op_count += 1;
            total_duration += duration;
        }
    }
    let total_opcount: u128 = opcount_each_trial.iter().sum();
    let avg_opcount = total_opcount as f64 / num_trials as f64;
    avg_opcount / window_duration_sec as f64
}

pub struct Benchmarker {
    pub input_byte_sizes: Vec<Size>,
    pub window_duration_sec: u128,
    pub num_trials: usize,
}

impl Benchmarker {
    pub fn new(input_byte_sizes: Vec<Size>, window_duration_sec: u128, num_trials: usize) -> Self {
        Self {
            input_byte_sizes,
            window_duration_sec,
            num_trials,
        }
    }
    ///Runs experiment for every input size, returns a vector of avg ops/sec
    pub fn run_experiment(&self, hasher: &mut dyn FnMut(&[u8]) -> u64) -> Vec<f64> {
        let mut results = Vec::<f64>::new();
        for input_len in &self.input_byte_sizes {
            let inputs = random_inputs(*input_len);
            let data = bench_throughput(hasher, &inputs, self.window_duration_sec, self.num_trials);
            results.push(data);
        }
        results
    }
}
