use crate::board::movegen;
use crate::board::{Board, Move, ParseMoveError, Piece, Player, Square, Team};
use std::collections::BTreeMap;
use std::sync::OnceLock;
use thiserror::Error;

/// Origin -> destinations for the side to move.
pub type MoveMap = BTreeMap<Square, Vec<Square>>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("the game has ended")]
    GameEnded,
    #[error("move {0} leaves the board")]
    InvalidSquare(Move),
    #[error("move {0} is not available to {1}")]
    IllegalMove(Move, Player),
    #[error(transparent)]
    Parse(#[from] ParseMoveError),
}

#[derive(Clone, Debug)]
pub struct GameState {
    active: Player,
    board: Board,
    result: Option<Team>,
    // Filled on first `moves()` call, dropped by every mutation.
    moves: OnceLock<MoveMap>,
}

impl Default for GameState {
    fn default() -> Self { Self::startpos() }
}

impl GameState {
    pub fn startpos() -> Self { Self::from_board(Board::starting_position(), Player::new(0)) }

    pub fn from_board(board: Board, active: Player) -> Self {
        Self { active, board, result: None, moves: OnceLock::new() }
    }

    /// Replays text moves (`H2-H4 ...`) from the starting position.
    pub fn from_moves<S: AsRef<str>>(moves: &[S]) -> Result<Self, GameError> {
        let mut g = Self::startpos();
        for m in moves { g.play_notation(m.as_ref())?; }
        Ok(g)
    }

    pub fn active_player(&self) -> Player { self.active }

    pub fn board(&self) -> &Board { &self.board }

    /// Winning team once a king has been captured.
    pub fn result(&self) -> Option<Team> { self.result }

    pub fn has_ended(&self) -> bool { self.result.is_some() }

    /// Hands out the board for setup; drops the cached move map.
    pub fn board_mut(&mut self) -> &mut Board {
        self.moves = OnceLock::new();
        &mut self.board
    }

    pub fn set_active_player(&mut self, player: Player) {
        self.moves = OnceLock::new();
        self.active = player;
    }

    /// Destinations for every piece of the active player, memoized until the
    /// next mutation. Only the active player's occupancy index is scanned.
    pub fn moves(&self) -> &MoveMap {
        self.moves.get_or_init(|| {
            self.board.occupied(self.active).iter().map(|&sq| (sq, movegen::destinations(&self.board, sq))).collect()
        })
    }

    pub fn legal_moves(&self) -> Vec<Move> {
        self.moves().iter().flat_map(|(&from, tos)| tos.iter().map(move |&to| Move::new(from, to))).collect()
    }

    pub fn legal_moves_count(&self) -> usize { self.moves().values().map(|v| v.len()).sum() }

    pub fn is_capture(&self, mv: Move) -> bool { self.board.get(mv.to).is_piece() }

    /// Applies `mv` without validation, passes the turn and records a win
    /// when a king is taken. Returns the captured piece.
    pub fn play(&mut self, mv: Move) -> Piece {
        self.moves = OnceLock::new();
        let captured = self.board.apply_move(mv);
        if captured.is_king() { self.result = Some(self.active.team()); }
        self.active = self.active.next();
        captured
    }

    /// Independent copy with `mv` applied. The parent's move map is not carried over.
    pub fn child(&self, mv: Move) -> GameState {
        let mut g = GameState { active: self.active, board: self.board.clone(), result: self.result, moves: OnceLock::new() };
        g.play(mv);
        g
    }

    pub fn validate_move(&self, mv: &Move) -> Result<(), GameError> {
        if self.has_ended() { return Err(GameError::GameEnded); }
        if !mv.from.is_valid() || !mv.to.is_valid() { return Err(GameError::InvalidSquare(*mv)); }
        let ok = self.moves().get(&mv.from).map_or(false, |tos| tos.contains(&mv.to));
        if ok { Ok(()) } else { Err(GameError::IllegalMove(*mv, self.active)) }
    }

    pub fn try_play(&mut self, mv: Move) -> Result<Piece, GameError> {
        self.validate_move(&mv)?;
        Ok(self.play(mv))
    }

    pub fn play_notation(&mut self, text: &str) -> Result<Piece, GameError> {
        let mv: Move = text.parse()?;
        self.try_play(mv)
    }
}
