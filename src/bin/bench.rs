use anyhow::Context;
use clap::Parser;
use quadchess::{GameState, SearchParams, Searcher};
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "quadchess-bench", version, about = "Time a single search from a position")]
struct Args {
    /// Space-separated moves from the start position, e.g. "H2-H3 B9-C9"
    #[arg(long, default_value = "")]
    moves: String,

    /// JSON file with SearchParams; flags below override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// Nominal search depth
    #[arg(long)]
    depth: Option<u32>,

    /// Ply limit for the capture extension
    #[arg(long)]
    capture_depth: Option<u32>,

    /// Evaluation budget (0 = unbounded)
    #[arg(long)]
    eval_limit: Option<u64>,

    /// Worker threads (0 = all cores)
    #[arg(long)]
    threads: Option<usize>,

    /// Search every candidate at every ply
    #[arg(long, default_value_t = false)]
    full_width: bool,

    /// Print the board before searching
    #[arg(long, default_value_t = false)]
    show: bool,
}

fn load_params(args: &Args) -> anyhow::Result<SearchParams> {
    let mut p = match &args.config {
        Some(path) => {
            let f = std::fs::File::open(path).with_context(|| format!("opening {}", path.display()))?;
            serde_json::from_reader(f).with_context(|| format!("parsing {}", path.display()))?
        }
        None => SearchParams::default(),
    };
    if let Some(d) = args.depth { p.depth = d; }
    if let Some(c) = args.capture_depth { p.capture_depth = c; }
    if let Some(l) = args.eval_limit { p.eval_limit = (l > 0).then_some(l); }
    if let Some(t) = args.threads { p.threads = t; }
    if args.full_width { p.narrowing = quadchess::search::alphabeta::Narrowing::Full; }
    Ok(p)
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();
    let params = load_params(&args)?;
    let moves: Vec<&str> = args.moves.split_whitespace().collect();
    let state = GameState::from_moves(&moves)?;
    if args.show { println!("{}", state.board()); }

    let mut s = Searcher::new(params)?;
    let t0 = Instant::now();
    let res = s.best_move(&state)?;
    let dt = t0.elapsed();
    let eps = if dt.as_secs_f64() > 0.0 { res.evaluations as f64 / dt.as_secs_f64() } else { 0.0 };
    println!(
        "bestmove={} score={:.3} evals={} nodes={} threads={} elapsed={:.3}s evals_per_sec={:.1}",
        res.best_move, res.score, res.evaluations, res.stats.total_nodes(), s.threads(), dt.as_secs_f64(), eps
    );
    print!("{}", res.stats);
    Ok(())
}
