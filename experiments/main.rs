use tracing::info;
use tracing_subscriber::EnvFilter;

mod benchmarker;
mod experiment;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("Murmur3 x64 experiments");

    let throughput = experiment::run_throughput();
    for (name, ops_per_sec) in &throughput {
        println!("{name}: {:?}", ops_per_sec);
    }

    const NUM_KEYS: usize = 1 << 20;
    const NUM_BUCKETS: usize = 1 << 10;
    let ratio = experiment::run_distribution(NUM_KEYS, NUM_BUCKETS);
    println!("max/min bucket load over {NUM_BUCKETS} buckets: {ratio:.3}");
}
