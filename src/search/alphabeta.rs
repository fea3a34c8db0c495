use crate::board::Move;
use crate::game::GameState;
use crate::search::eval::{evaluate, EvalParams};
use crate::search::stats::SearchStats;
use log::{debug, trace};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use thiserror::Error;

// Losing at ply d scores -(LOSS_SCORE - d): earlier losses are worse, earlier wins better.
pub const LOSS_SCORE: f64 = 1001.0;
// Root window half-width. Strictly wider than any terminal score, so the
// root value is never clipped.
pub const MATE_WINDOW: f64 = 1002.0;

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("the game has ended")]
    GameEnded,
    #[error("no move can be made in this position")]
    NoLegalMove,
    #[error("failed to build search thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

/// How many of the sorted candidates a node recurses into. Anything but
/// `Full` can miss the best move; it buys depth.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Narrowing {
    Full,
    Tapered {
        /// Keep half of the candidates from this ply on.
        half_from: u32,
        /// Keep a quarter from this ply on.
        quarter_from: u32,
        /// Captures kept per node past the nominal depth...
        extension_keep: usize,
        /// ...unless at least this many extension plies remain.
        extension_full_margin: u32,
    },
}

impl Default for Narrowing {
    fn default() -> Self {
        Narrowing::Tapered { half_from: 2, quarter_from: 3, extension_keep: 3, extension_full_margin: 4 }
    }
}

impl Narrowing {
    /// Number of candidates (out of `n`) to examine at `ply`. Never 0 when `n > 0`.
    pub fn keep(&self, n: usize, ply: u32, depth: u32, capture_depth: u32) -> usize {
        let k = match *self {
            Narrowing::Full => n,
            Narrowing::Tapered { half_from, quarter_from, extension_keep, extension_full_margin } => {
                if ply >= depth {
                    if capture_depth.saturating_sub(ply) >= extension_full_margin { n } else { extension_keep }
                } else if ply >= quarter_from {
                    n / 4
                } else if ply >= half_from {
                    n / 2
                } else {
                    n
                }
            }
        };
        k.max(1).min(n)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchParams {
    /// Nominal depth in plies; from here on only captures are searched.
    /// At least 1: the root always considers every legal move.
    pub depth: u32,
    /// Absolute ply limit for the capture extension (raised to `depth` if lower).
    pub capture_depth: u32,
    /// Evaluator calls after which no further recursion starts. `None` and
    /// `Some(0)` are both unbounded.
    pub eval_limit: Option<u64>,
    /// Worker threads for candidate scoring; 0 uses rayon's global pool.
    pub threads: usize,
    pub narrowing: Narrowing,
    /// false: full-width minimax with an infinite window, no cutoffs.
    pub pruning: bool,
    pub eval: EvalParams,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            depth: 3,
            capture_depth: 6,
            eval_limit: None,
            threads: 0,
            narrowing: Narrowing::default(),
            pruning: true,
            eval: EvalParams::default(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SearchResult {
    pub best_move: Move,
    /// From the point of view of the side to move.
    pub score: f64,
    pub evaluations: u64,
    pub stats: SearchStats,
}

struct Candidate {
    mv: Move,
    // Value for the mover after one ply: the negated evaluation of `state`.
    estimate: f64,
    state: GameState,
}

pub struct Searcher {
    params: SearchParams,
    pool: Option<rayon::ThreadPool>,
    evals: AtomicU64,
    stats: SearchStats,
}

impl Default for Searcher {
    fn default() -> Self {
        Self { params: SearchParams::default(), pool: None, evals: AtomicU64::new(0), stats: SearchStats::default() }
    }
}

impl Searcher {
    pub fn new(mut params: SearchParams) -> Result<Self, SearchError> {
        params.depth = params.depth.max(1);
        params.capture_depth = params.capture_depth.max(params.depth);
        params.eval_limit = params.eval_limit.filter(|&l| l > 0);
        let pool = if params.threads > 0 {
            Some(rayon::ThreadPoolBuilder::new().num_threads(params.threads).build()?)
        } else {
            None
        };
        Ok(Self { params, pool, evals: AtomicU64::new(0), stats: SearchStats::default() })
    }

    pub fn params(&self) -> &SearchParams { &self.params }

    pub fn threads(&self) -> usize {
        self.pool.as_ref().map_or_else(rayon::current_num_threads, |p| p.current_num_threads())
    }

    /// Evaluator calls made by the last (or current) search.
    pub fn evaluations(&self) -> u64 { self.evals.load(Ordering::Relaxed) }

    pub fn stats(&self) -> &SearchStats { &self.stats }

    /// Static score for the side to move. Counts against the evaluation budget.
    pub fn evaluate_current(&self, state: &GameState) -> f64 {
        self.evals.fetch_add(1, Ordering::Relaxed);
        evaluate(state, &self.params.eval)
    }

    pub fn best_move(&mut self, state: &GameState) -> Result<SearchResult, SearchError> {
        self.evals.store(0, Ordering::Relaxed);
        self.stats.clear();
        if state.has_ended() { return Err(SearchError::GameEnded); }

        let root_eval = self.evaluate_current(state);
        let (best, score) = self.negamax(state, 0, root_eval, -MATE_WINDOW, MATE_WINDOW);
        let best_move = best.ok_or(SearchError::NoLegalMove)?;

        let evaluations = self.evaluations();
        debug!(
            "{} to move: best {} score {:.3} (depth {}/{}, {} evals, {} nodes)",
            state.active_player(), best_move, score, self.params.depth, self.params.capture_depth, evaluations, self.stats.total_nodes()
        );
        debug!("move ordering:\n{}", self.stats);
        Ok(SearchResult { best_move, score, evaluations, stats: self.stats.clone() })
    }

    fn budget_left(&self) -> bool {
        self.params.eval_limit.map_or(true, |limit| self.evaluations() < limit)
    }

    // One task per move: copy, play, evaluate, negate. Results keep move order.
    fn score_candidates(&self, state: &GameState, moves: Vec<Move>) -> Vec<Candidate> {
        let run = || {
            moves.into_par_iter().map(|mv| {
                let child = state.child(mv);
                let estimate = -self.evaluate_current(&child);
                Candidate { mv, estimate, state: child }
            }).collect::<Vec<_>>()
        };
        match &self.pool {
            Some(pool) => pool.install(run),
            None => run(),
        }
    }

    /// Returns the best move at this node and its score for the side to move.
    /// `eval` is the static estimate handed down by the parent and is the
    /// leaf score when nothing is left to search.
    fn negamax(&mut self, state: &GameState, ply: u32, eval: f64, mut alpha: f64, beta: f64) -> (Option<Move>, f64) {
        // The previous mover took a king, so the side to move has lost.
        if state.has_ended() {
            self.stats.record(ply as usize, 0, 1);
            return (None, -(LOSS_SCORE - ply as f64));
        }

        let mut moves = state.legal_moves();
        if ply >= self.params.depth { moves.retain(|&m| state.is_capture(m)); }
        if moves.is_empty() { return (None, eval); }

        let mut candidates = self.score_candidates(state, moves);
        // Stable: equal estimates keep generation order.
        candidates.sort_by(|a, b| b.estimate.total_cmp(&a.estimate));
        let keep = self.params.narrowing.keep(candidates.len(), ply, self.params.depth, self.params.capture_depth);
        candidates.truncate(keep);

        if ply == 0 {
            for c in &candidates { trace!("root candidate {} estimate {:.3}", c.mv, c.estimate); }
        }

        let pruning = self.params.pruning;
        let mut best = 0;
        for (i, c) in candidates.iter().enumerate() {
            let mut score = c.estimate;
            if ply < self.params.capture_depth && self.budget_left() {
                let (child_alpha, child_beta) = if pruning { (-beta, -alpha) } else { (f64::NEG_INFINITY, f64::INFINITY) };
                let (_, opp) = self.negamax(&c.state, ply + 1, -c.estimate, child_alpha, child_beta);
                score = -opp;
            }
            // The opponent already has a better option elsewhere; they will never allow this line.
            if pruning && score >= beta {
                self.stats.record(ply as usize, i, candidates.len());
                return (Some(c.mv), beta);
            }
            if score > alpha {
                alpha = score;
                best = i;
            }
        }
        self.stats.record(ply as usize, best, candidates.len());
        (Some(candidates[best].mv), alpha)
    }
}
