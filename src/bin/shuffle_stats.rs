//! Deal many seeded grids and report how evenly faces spread over the slots.
//!
//! Usage: shuffle_stats [rows] [columns] [trials]

use anyhow::{Context, Result, bail};
use memory_match::{Layout, TileGrid};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rayon::prelude::*;
use std::time::Instant;

/// Face counts per slot: `counts[slot][face - 1]`
type SlotCounts = Vec<Vec<u64>>;

fn parse_arg(args: &[String], index: usize, default: usize) -> Result<usize> {
    match args.get(index) {
        Some(raw) => raw
            .parse()
            .with_context(|| format!("argument {index} ({raw:?}) is not a number")),
        None => Ok(default),
    }
}

/// Tally one trial's deck into fresh counts
fn deal_counts(rows: usize, columns: usize, pairs: usize, seed: u64) -> Result<SlotCounts> {
    let mut rng = StdRng::seed_from_u64(seed);
    let grid = TileGrid::build(rows, columns, pairs, &Layout::default(), &mut rng)?;

    let mut counts = vec![vec![0u64; pairs]; rows * columns];
    for (id, tile) in grid.tiles() {
        counts[id.0][tile.face().index() - 1] += 1;
    }
    Ok(counts)
}

fn merge(mut a: SlotCounts, b: SlotCounts) -> SlotCounts {
    for (slot_a, slot_b) in a.iter_mut().zip(b) {
        for (x, y) in slot_a.iter_mut().zip(slot_b) {
            *x += y;
        }
    }
    a
}

/// Slot totals and face totals are both fixed by construction
fn degrees_of_freedom(slots: usize, pairs: usize) -> usize {
    slots.saturating_sub(1) * pairs.saturating_sub(1)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .init();

    let args: Vec<String> = std::env::args().collect();
    let rows = parse_arg(&args, 1, 4)?;
    let columns = parse_arg(&args, 2, 4)?;
    let trials = parse_arg(&args, 3, 100_000)? as u64;
    if trials == 0 {
        bail!("trials must be positive");
    }
    let pairs = rows * columns / 2;

    println!("Shuffle uniformity: {rows}x{columns} grid, {pairs} faces, {trials} deals");
    println!("{}", "=".repeat(60));

    let start = Instant::now();
    let empty = vec![vec![0u64; pairs]; rows * columns];
    let counts = (0..trials)
        .into_par_iter()
        .map(|seed| deal_counts(rows, columns, pairs, seed))
        .try_reduce(|| empty.clone(), |a, b| Ok(merge(a, b)))
        .context("dealing grids")?;
    let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;

    let expected = trials as f64 / pairs as f64;
    let mut chi_square = 0.0;
    let mut worst = 0.0f64;
    for slot in &counts {
        for &observed in slot {
            let diff = observed as f64 - expected;
            chi_square += diff * diff / expected;
            worst = worst.max(diff.abs() / expected);
        }
    }
    let degrees = degrees_of_freedom(rows * columns, pairs);

    println!("expected per slot/face:  {expected:>12.1}");
    println!("worst relative deviation: {:>11.3}%", worst * 100.0);
    println!("chi-square:              {chi_square:>12.1} ({degrees} dof)");
    println!("time:                    {elapsed_ms:>10.1}ms");
    Ok(())
}
