use crate::board::{Move, Team};
use crate::game::GameState;
use crate::search::alphabeta::{SearchError, SearchParams, Searcher};
use log::{debug, info};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SelfPlayParams {
    pub games: usize,
    pub max_plies: usize,
    /// Uniformly random opening plies before the engine takes over.
    pub random_plies: usize,
    pub seed: u64,
    pub search: SearchParams,
}

impl Default for SelfPlayParams {
    fn default() -> Self {
        Self { games: 1, max_plies: 200, random_plies: 0, seed: 42, search: SearchParams::default() }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameRecord {
    pub moves: Vec<String>,
    pub winner: Option<Team>,
    /// Engine scores (side-to-move view) for the engine-chosen plies.
    pub scores: Vec<f64>,
}

impl GameRecord {
    pub fn plies(&self) -> usize { self.moves.len() }

    /// Rebuilds the final position.
    pub fn replay(&self) -> Result<GameState, crate::game::GameError> { GameState::from_moves(&self.moves) }
}

pub fn generate_games<F: FnMut(usize, &GameRecord)>(params: &SelfPlayParams, mut on_game: F) -> Result<Vec<GameRecord>, SearchError> {
    let mut searcher = Searcher::new(params.search)?;
    let mut games = Vec::with_capacity(params.games);
    for gi in 0..params.games {
        let mut rng = SmallRng::seed_from_u64(params.seed ^ (gi as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15));
        let record = play_game(&mut searcher, params, &mut rng)?;
        info!("game {}: {} plies, winner {}", gi, record.plies(), record.winner.map_or_else(|| "none".to_string(), |t| t.to_string()));
        on_game(gi, &record);
        games.push(record);
    }
    Ok(games)
}

pub fn play_game(searcher: &mut Searcher, params: &SelfPlayParams, rng: &mut SmallRng) -> Result<GameRecord, SearchError> {
    let mut state = GameState::startpos();
    let mut record = GameRecord { moves: Vec::new(), winner: None, scores: Vec::new() };
    while record.plies() < params.max_plies && !state.has_ended() {
        let mv = if record.plies() < params.random_plies {
            match select_random_move(&state, rng) { Some(m) => m, None => break }
        } else {
            match searcher.best_move(&state) {
                Ok(res) => {
                    record.scores.push(res.score);
                    res.best_move
                }
                Err(SearchError::NoLegalMove) => break,
                Err(e) => return Err(e),
            }
        };
        debug!("ply {}: {} plays {}", record.plies(), state.active_player(), mv);
        record.moves.push(mv.to_string());
        state.play(mv);
    }
    record.winner = state.result();
    Ok(record)
}

fn select_random_move(state: &GameState, rng: &mut SmallRng) -> Option<Move> {
    let moves = state.legal_moves();
    if moves.is_empty() { None } else { Some(moves[rng.gen_range(0..moves.len())]) }
}

/// One JSON object per line.
pub fn write_records<P: AsRef<Path>>(games: &[GameRecord], path: P) -> std::io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    for g in games {
        serde_json::to_writer(&mut w, g)?;
        w.write_all(b"\n")?;
    }
    w.flush()
}

pub fn read_records<P: AsRef<Path>>(path: P) -> std::io::Result<Vec<GameRecord>> {
    let rdr = BufReader::new(File::open(path)?);
    let mut out = Vec::new();
    for line in rdr.lines() {
        let line = line?;
        if line.trim().is_empty() { continue; }
        out.push(serde_json::from_str(&line)?);
    }
    Ok(out)
}
