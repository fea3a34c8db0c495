#![allow(dead_code)]
use quadchess::board::{Board, Piece, PieceKind, Player, Square};
use quadchess::GameState;

// Three full rounds; every queen is out and pieces are in contact.
pub const MIDGAME: [&str; 12] = [
    "H2-H3", "B9-C9", "I13-I12", "M8-L8",
    "G1-J4", "A8-D11", "E13-E12", "M5-L5",
    "E2-E3", "D11-G8", "H14-K11", "N7-L9",
];

pub fn midgame() -> GameState {
    GameState::from_moves(&MIDGAME).expect("midgame line is legal")
}

pub fn piece(player: u8, kind: PieceKind) -> Piece { Piece::new(Player::new(player), kind) }

/// Red rook on F6 can take the Blue king on J6; nothing else captures a king.
pub fn rook_takes_king() -> GameState {
    let mut b = Board::new();
    b.place(piece(0, PieceKind::Rook), Square::new(5, 5));
    b.place(piece(0, PieceKind::King), Square::new(0, 7));
    b.place(piece(1, PieceKind::King), Square::new(5, 9));
    b.place(piece(2, PieceKind::King), Square::new(13, 6));
    b.place(piece(3, PieceKind::King), Square::new(8, 13));
    GameState::from_board(b, Player::new(0))
}

/// Red queen on F6 can take the Blue rook on I6, but the Green rook on I11
/// guards it. Green only gets there after Blue (bishop takes the Yellow pawn
/// on D10) and Yellow (knight takes back) have each made a capture, so it
/// shows up in the capture extension and not before.
pub fn guarded_rook() -> GameState {
    let mut b = Board::new();
    b.place(piece(0, PieceKind::Queen), Square::new(5, 5));
    b.place(piece(0, PieceKind::King), Square::new(0, 7));
    b.place(piece(1, PieceKind::Rook), Square::new(5, 8));
    b.place(piece(1, PieceKind::Bishop), Square::new(7, 1));
    b.place(piece(1, PieceKind::King), Square::new(6, 0));
    b.place(piece(2, PieceKind::Pawn), Square::new(9, 3));
    b.place(piece(2, PieceKind::Knight), Square::new(11, 4));
    b.place(piece(2, PieceKind::King), Square::new(13, 6));
    b.place(piece(3, PieceKind::Rook), Square::new(10, 8));
    b.place(piece(3, PieceKind::King), Square::new(7, 13));
    GameState::from_board(b, Player::new(0))
}

/// `rook_takes_king` plus a Blue queen on F4 for the Red rook to take instead,
/// after which Yellow's rook on D9 takes the Green king two plies later.
pub fn fast_and_slow_win() -> GameState {
    let mut g = rook_takes_king();
    g.board_mut().place(piece(1, PieceKind::Queen), Square::new(3, 5));
    g.board_mut().place(piece(2, PieceKind::Rook), Square::new(8, 3));
    g
}
