use anyhow::Context;
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use quadchess::selfplay::{generate_games, write_records, SelfPlayParams};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "quadchess-selfplay", about = "Let the engine play all four seats")]
struct Args {
    #[arg(long, default_value_t = 1)]
    games: usize,
    #[arg(long, default_value_t = 200)]
    max_plies: usize,
    #[arg(long, default_value_t = 0)]
    random_plies: usize,
    #[arg(long, default_value_t = 42)]
    seed: u64,
    #[arg(long, default_value_t = 2)]
    depth: u32,
    #[arg(long, default_value_t = 4)]
    capture_depth: u32,
    /// Evaluation budget per move (0 = unbounded)
    #[arg(long, default_value_t = 0)]
    eval_limit: u64,
    #[arg(long, default_value_t = 0)]
    threads: usize,
    /// JSON file with SearchParams; depth flags override it
    #[arg(long)]
    config: Option<PathBuf>,
    /// Write one JSON record per game to this file
    #[arg(long)]
    out: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let a = Args::parse();
    let mut search: quadchess::SearchParams = match &a.config {
        Some(p) => serde_json::from_reader(std::fs::File::open(p).with_context(|| format!("opening {}", p.display()))?)?,
        None => Default::default(),
    };
    search.depth = a.depth;
    search.capture_depth = a.capture_depth;
    search.eval_limit = (a.eval_limit > 0).then_some(a.eval_limit);
    search.threads = a.threads;
    let params = SelfPlayParams { games: a.games, max_plies: a.max_plies, random_plies: a.random_plies, seed: a.seed, search };

    let bar = ProgressBar::new(a.games as u64);
    bar.set_style(ProgressStyle::with_template("{bar:40} {pos}/{len} games {msg}")?);
    let games = generate_games(&params, |_, g| {
        bar.set_message(format!("last: {} plies", g.plies()));
        bar.inc(1);
    })?;
    bar.finish();

    for (i, g) in games.iter().enumerate() {
        let winner = g.winner.map_or_else(|| "none".to_string(), |t| t.to_string());
        println!("game {}: {} plies, winner: {}", i, g.plies(), winner);
    }
    if let Some(out) = a.out {
        write_records(&games, &out).with_context(|| format!("writing {}", out.display()))?;
        eprintln!("Wrote {} games to {}", games.len(), out.display());
    }
    Ok(())
}
