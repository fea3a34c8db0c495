use quadchess::perft::{perft, perft_divide};
use quadchess::GameState;
use rayon::prelude::*;
use std::time::Instant;

#[derive(clap::Parser, Debug)]
#[command(name = "perft", about = "Perft driver for quadchess")]
struct Args {
    /// Search depth
    #[arg(value_name = "DEPTH")]
    depth: u32,
    /// Space-separated moves from the start position
    #[arg(long, default_value = "")]
    moves: String,
    /// Number of threads for root-split
    #[arg(long, default_value_t = 1)]
    threads: usize,
    /// Print per-move counts
    #[arg(long, default_value_t = false)]
    divide: bool,
}

fn main() -> anyhow::Result<()> {
    use clap::Parser;
    env_logger::init();
    let args = Args::parse();
    let moves: Vec<&str> = args.moves.split_whitespace().collect();
    let state = GameState::from_moves(&moves)?;

    let pool = rayon::ThreadPoolBuilder::new().num_threads(args.threads.max(1)).build()?;
    let t0 = Instant::now();
    let nodes = if args.divide {
        let rows = perft_divide(&state, args.depth);
        for (m, n) in &rows { println!("{}: {}", m, n); }
        rows.iter().map(|(_, n)| n).sum()
    } else if args.threads <= 1 || args.depth < 2 {
        perft(&state, args.depth)
    } else {
        pool.install(|| state.legal_moves().par_iter().map(|&m| perft(&state.child(m), args.depth - 1)).sum())
    };
    let dt = t0.elapsed().as_secs_f64();
    let nps = if dt > 0.0 { nodes as f64 / dt } else { f64::INFINITY };
    println!("nodes: {} elapsed: {:.3}s nps: {:.1}", nodes, dt, nps);
    Ok(())
}
