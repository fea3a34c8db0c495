pub mod grid;
pub mod movegen;
pub mod notation;
pub mod piece;
pub mod square;

pub use grid::{Board, PIECES_AT_START};
pub use notation::{Move, ParseMoveError};
pub use piece::{Piece, PieceKind};
pub use square::{Player, Square, Team, BOARD_SIZE, CORNER_SIZE, NUM_PLAYERS};
