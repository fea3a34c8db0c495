use crate::board::{movegen, Board, PieceKind, Player, Square, NUM_PLAYERS, PIECES_AT_START};
use crate::game::GameState;
use serde::{Deserialize, Serialize};

// Geometric centre of the 14x14 grid.
const CENTER: f64 = 6.5;

/// Base value and mobility range (destination counts mapped to 0..1) for one kind.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KindParams {
    pub base: f64,
    pub moves_min: u32,
    pub moves_max: u32,
}

/// Evaluator tunables. The defaults are starting points, not fixed rules.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvalParams {
    pub pawn: KindParams,
    pub knight: KindParams,
    pub bishop: KindParams,
    pub rook: KindParams,
    pub queen: KindParams,
    pub king: KindParams,
    /// Applied to each player's positive strength sum.
    pub spread_exponent: f64,
    pub pieces_at_start: usize,
}

impl Default for EvalParams {
    fn default() -> Self {
        Self {
            pawn: KindParams { base: 1.0, moves_min: 0, moves_max: 0 },
            knight: KindParams { base: 2.2, moves_min: 2, moves_max: 6 },
            bishop: KindParams { base: 5.0, moves_min: 2, moves_max: 12 },
            rook: KindParams { base: 4.5, moves_min: 2, moves_max: 20 },
            queen: KindParams { base: 14.0, moves_min: 2, moves_max: 30 },
            king: KindParams { base: 7.0, moves_min: 2, moves_max: 30 },
            spread_exponent: 0.8,
            pieces_at_start: PIECES_AT_START,
        }
    }
}

impl EvalParams {
    pub fn kind(&self, kind: PieceKind) -> &KindParams {
        match kind {
            PieceKind::Pawn => &self.pawn,
            PieceKind::Knight => &self.knight,
            PieceKind::Bishop => &self.bishop,
            PieceKind::Rook => &self.rook,
            PieceKind::Queen => &self.queen,
            PieceKind::King => &self.king,
        }
    }
}

/// 1 on the outermost playable squares, 0 on the four central ones.
pub fn edge_bonus(sq: Square) -> f64 {
    let d = (sq.rank as f64 - CENTER).abs() + (sq.file as f64 - CENTER).abs();
    ((d - 1.0) / 9.0).clamp(0.0, 1.0)
}

pub fn center_bonus(sq: Square) -> f64 { 1.0 - edge_bonus(sq) }

/// Peaks on squares halfway between the centre and the edge.
pub fn balance_bonus(sq: Square) -> f64 {
    let (c, e) = (center_bonus(sq), edge_bonus(sq));
    ((c * c + e * e - 1.01) / -0.5).clamp(0.0, 1.0)
}

/// 0 at the start of the game, approaching 1 as pieces come off.
pub fn progression(pieces_left: usize, pieces_at_start: usize) -> f64 {
    if pieces_at_start == 0 { return 0.0; }
    (1.0 - pieces_left as f64 / pieces_at_start as f64).clamp(0.0, 1.0)
}

/// Positional coefficient in [0.5, 1.5] from mobility and a 0..1 placement term.
pub fn bonus_coef(moves: usize, kp: &KindParams, positional: f64) -> f64 {
    let span = kp.moves_max.saturating_sub(kp.moves_min).max(1) as f64;
    let mobility = ((moves as f64 - kp.moves_min as f64) / span).clamp(0.0, 1.0);
    0.5 + (mobility + positional.clamp(0.0, 1.0)) / 2.0
}

// Pawns are valued by structure: +0.5 for each own pawn diagonally behind.
const PAWN_SUPPORT: [[(i8, i8); 2]; 4] = [
    [(-1, -1), (-1, 1)],
    [(-1, -1), (1, -1)],
    [(1, -1), (1, 1)],
    [(-1, 1), (1, 1)],
];

fn pawn_coef(board: &Board, sq: Square, owner: Player) -> f64 {
    let me = board.get(sq);
    let support = PAWN_SUPPORT[owner.index()].iter().filter(|&&(dr, df)| board.get(sq.offset(dr, df)) == me).count();
    0.5 + 0.5 * support as f64
}

/// Strength of the piece on `sq` given its destination count.
pub fn piece_strength(board: &Board, sq: Square, moves: usize, pieces_left: usize, params: &EvalParams) -> f64 {
    let piece = board.get(sq);
    let (owner, kind) = match (piece.owner(), piece.kind()) {
        (Some(o), Some(k)) => (o, k),
        _ => return 0.0,
    };
    let kp = params.kind(kind);
    let p = progression(pieces_left, params.pieces_at_start);
    let coef = match kind {
        PieceKind::Pawn => pawn_coef(board, sq, owner),
        PieceKind::Knight | PieceKind::Bishop => bonus_coef(moves, kp, balance_bonus(sq)),
        PieceKind::Rook => bonus_coef(moves, kp, edge_bonus(sq) * (1.0 - p) + p),
        PieceKind::Queen => bonus_coef(moves, kp, center_bonus(sq) * (1.0 - p) + balance_bonus(sq) * p),
        PieceKind::King => bonus_coef(moves, kp, edge_bonus(sq) * (1.0 - p) + balance_bonus(sq) * p),
    };
    kp.base * coef
}

/// Summed piece strengths per seat, before the spread transform.
///
/// Only the side to move has a memoized move map; the other three seats are
/// regenerated with `count_destinations` on every call, which roughly
/// quadruples the move generation an evaluation does. Scoring those pieces
/// with zero mobility instead would make the result depend on which teammate
/// is to move.
pub fn player_strengths(state: &GameState, params: &EvalParams) -> [f64; NUM_PLAYERS] {
    let board = state.board();
    let pieces_left = board.piece_count();
    // The side to move already has its move map; everyone else is counted directly.
    let active_moves = state.moves();
    let mut out = [0.0; NUM_PLAYERS];
    for player in Player::ALL {
        for &sq in board.occupied(player) {
            let moves = if player == state.active_player() {
                active_moves.get(&sq).map_or(0, |v| v.len())
            } else {
                movegen::count_destinations(board, sq)
            };
            out[player.index()] += piece_strength(board, sq, moves, pieces_left, params);
        }
    }
    out
}

/// Static score from the point of view of the team about to move.
pub fn evaluate(state: &GameState, params: &EvalParams) -> f64 {
    let mut s = player_strengths(state, params);
    // Sub-linear per seat: material spread over both teammates beats concentration.
    for v in &mut s { if *v > 0.0 { *v = v.powf(params.spread_exponent); } }
    let red_yellow = s[0] + s[2];
    let blue_green = s[1] + s[3];
    state.active_player().team().sign() * (red_yellow - blue_green)
}
