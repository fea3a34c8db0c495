use super::square::Player;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    Pawn = 2,
    Knight = 3,
    Bishop = 4,
    Rook = 5,
    Queen = 6,
    King = 7,
}

impl PieceKind {
    pub const ALL: [PieceKind; 6] = [PieceKind::Pawn, PieceKind::Knight, PieceKind::Bishop, PieceKind::Rook, PieceKind::Queen, PieceKind::King];

    fn from_bits(bits: u8) -> Option<Self> {
        match bits {
            2 => Some(PieceKind::Pawn),
            3 => Some(PieceKind::Knight),
            4 => Some(PieceKind::Bishop),
            5 => Some(PieceKind::Rook),
            6 => Some(PieceKind::Queen),
            7 => Some(PieceKind::King),
            _ => None,
        }
    }

    pub fn letter(self) -> char {
        match self {
            PieceKind::Pawn => 'P',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Rook => 'R',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
        }
    }
}

const KIND_BITS: u8 = 3;
const KIND_MASK: u8 = 0b111;

/// Grid cell: `ppkkk` (owner in the two high bits, kind in the low three).
/// Kind bits 0 and 1 are the empty and off-board sentinels.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Piece(u8);

impl Piece {
    pub const EMPTY: Piece = Piece(0);
    pub const OFF_BOARD: Piece = Piece(1);

    pub fn new(owner: Player, kind: PieceKind) -> Self {
        Piece(((owner.index() as u8) << KIND_BITS) | kind as u8)
    }

    pub fn kind(self) -> Option<PieceKind> { PieceKind::from_bits(self.0 & KIND_MASK) }

    pub fn owner(self) -> Option<Player> {
        self.kind().map(|_| Player::new(self.0 >> KIND_BITS))
    }

    pub fn is_empty(self) -> bool { self == Piece::EMPTY }

    pub fn is_off_board(self) -> bool { self == Piece::OFF_BOARD }

    pub fn is_piece(self) -> bool { self.kind().is_some() }

    pub fn is_king(self) -> bool { self.kind() == Some(PieceKind::King) }
}

impl fmt::Debug for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.owner(), self.kind()) {
            (Some(p), Some(k)) => write!(f, "{:?}({})", k, p.index()),
            _ if self.is_off_board() => f.write_str("OffBoard"),
            _ => f.write_str("Empty"),
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.owner(), self.kind()) {
            (Some(p), Some(k)) => write!(f, "{}{}", p.index(), k.letter()),
            _ if self.is_off_board() => f.write_str("##"),
            _ => f.write_str(" ."),
        }
    }
}
