//! Fills a table with random pairs, reports how the keys 1..=20 spread over the buckets
//! and renders the chain length of every bucket as a bar chart.
//!
//! Usage: `bucket_occupancy [SEED]`. Without a seed the wall clock is used. Log output is
//! controlled through `RUST_LOG`.

use std::time::{SystemTime, UNIX_EPOCH};

use chained_table::ChainedHashTable;
use env_logger::Builder;
use log::{LevelFilter, info};
use plotters::prelude::*;
use rand::{SeedableRng, rngs::StdRng};

/// Number of random insertions performed
const RANDOM_INSERTIONS: usize = 50;
/// Keys whose bucket occupancy is reported
const QUERIED_KEYS: std::ops::RangeInclusive<i32> = 1..=20;
/// Where the occupancy chart is written
const OUTPUT_PATH: &str = "bucket_occupancy.png";

/// Installs the process-wide logger, defaulting to `Info`
fn initialize_logger() {
    let mut builder = Builder::new();
    builder
        .filter_level(LevelFilter::Info)
        .format_timestamp_millis()
        .parse_default_env();

    if let Err(err) = builder.try_init() {
        eprintln!("logger already initialized: {err}");
    }
}

/// Reads the seed from the first argument, falling back to the current time
fn seed() -> Result<u64, Box<dyn std::error::Error>> {
    match std::env::args().nth(1) {
        Some(arg) => Ok(arg.parse()?),
        None => Ok(SystemTime::now().duration_since(UNIX_EPOCH)?.as_secs()),
    }
}

/// Draws one bar per bucket with its chain length
fn render_occupancy(lengths: &[usize]) -> Result<(), Box<dyn std::error::Error>> {
    let root = BitMapBackend::new(OUTPUT_PATH, (1000, 600)).into_drawing_area();
    root.fill(&WHITE)?;

    let highest = lengths.iter().copied().max().unwrap_or(0).saturating_add(1);

    let mut chart = ChartBuilder::on(&root)
        .caption("Chain Length per Bucket", ("sans-serif", 30))
        .margin(15)
        .x_label_area_size(50)
        .y_label_area_size(50)
        .build_cartesian_2d((0..lengths.len()).into_segmented(), 0..highest)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_desc("Bucket")
        .y_desc("Entries")
        .axis_desc_style(("sans-serif", 16))
        .draw()?;

    chart.draw_series(
        Histogram::vertical(&chart)
            .style(RGBColor(50, 90, 220).filled())
            .margin(8)
            .data(lengths.iter().copied().enumerate()),
    )?;

    root.present()?;
    Ok(())
}

/// Builds the random table, prints its occupancy and writes the chart
fn main() -> Result<(), Box<dyn std::error::Error>> {
    initialize_logger();

    let seed = seed()?;
    info!("seeding random source with {seed}");
    let mut rng = StdRng::seed_from_u64(seed);

    let table: ChainedHashTable<i32, i32> =
        ChainedHashTable::with_random_entries(RANDOM_INSERTIONS, &mut rng);
    info!("{} of {RANDOM_INSERTIONS} insertions kept", table.len());

    for key in QUERIED_KEYS {
        println!("Bucket with key {key} has {} elements.", table.count(&key));
    }

    print!("{table}");

    render_occupancy(&table.bucket_lengths())?;
    info!("wrote {OUTPUT_PATH}");

    Ok(())
}
