//! Reference experiment: 128 Chebyshev Voronoi cells over 2^26 points in 8D.

use anyhow::Result;
use fastVoronoi::prelude::*;
use tracing_subscriber::EnvFilter;

const DIM: usize = 8;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let engine = PartitionBuilder::<f32, DIM>::new()
        .seeds(DEFAULT_SEED_COUNT)
        .samples(DEFAULT_SAMPLE_COUNT)
        .master_seed(DEFAULT_MASTER_SEED)
        .build()?;

    let report = Experiment::new(engine).run()?;

    println!("Stddevs from center:\n{}\n", report.stddevs);
    println!("Medians from center:\n{}\n", report.medians);
    Ok(())
}
