//! Watch a chain settle at its bottleneck rate.
//!
//! Builds the descending and ascending profiles plus a seeded ranged
//! chain, runs each for a few thousand rounds, and prints throughput.
//! Set `RUST_LOG=matchsticks_engine=trace` to see every round.

use matchsticks_bench::{ascending_profile, descending_profile, long_chain_profile};
use matchsticks_engine::{Pipeline, PipelineConfig};
use tracing_subscriber::EnvFilter;

fn report(name: &str, config: PipelineConfig, rounds: u64) {
    let mut pipeline = match Pipeline::from_config(config) {
        Ok(pipeline) => pipeline,
        Err(err) => {
            tracing::error!(%err, "invalid profile {name}");
            return;
        }
    };

    println!("{name}: {pipeline}");
    pipeline.tick(rounds);
    let bottleneck = pipeline
        .bottleneck()
        .and_then(|id| pipeline.stage(id))
        .map_or(0, |stage| stage.rate().get());
    println!(
        "  after {} rounds: output={} throughput={:.3} bottleneck_rate={} wip={}",
        pipeline.tick_count(),
        pipeline.output(),
        pipeline.throughput(),
        bottleneck,
        pipeline.work_in_progress(),
    );
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    println!("=== Matchsticks Bottleneck Example ===\n");
    report("descending", descending_profile(), 2000);
    report("ascending", ascending_profile(), 2000);
    report("ranged x8", long_chain_profile(8, 42), 2000);

    match PipelineConfig::parse("5,3-4,oops") {
        Ok(_) => println!("\nunexpected: malformed chain parsed"),
        Err(err) => println!("\nmalformed chain rejected: {err}"),
    }
}
