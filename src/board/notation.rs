use super::square::{Square, BOARD_SIZE};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A piece transfer. Captures are implied by the destination's contents.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Move {
    pub from: Square,
    pub to: Square,
}

impl Move {
    pub const fn new(from: Square, to: Square) -> Self { Self { from, to } }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "{}-{}", self.from, self.to) }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseMoveError {
    #[error("malformed square '{0}'")]
    BadSquare(String),
    #[error("square '{0}' is not on the board")]
    OffBoard(String),
    #[error("malformed move '{0}'")]
    BadMove(String),
}

impl FromStr for Square {
    type Err = ParseMoveError;

    /// `<file letter A..N><rank 1..14>`, case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let mut chars = s.chars();
        let file_ch = chars.next().ok_or_else(|| ParseMoveError::BadSquare(s.to_string()))?.to_ascii_uppercase();
        let rank_str = chars.as_str();
        if !file_ch.is_ascii_uppercase() || rank_str.is_empty() || rank_str.len() > 2 || !rank_str.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ParseMoveError::BadSquare(s.to_string()));
        }
        let file = file_ch as i32 - 'A' as i32;
        let rank = rank_str.parse::<i32>().map_err(|_| ParseMoveError::BadSquare(s.to_string()))? - 1;
        if !(0..BOARD_SIZE as i32).contains(&file) || !(0..BOARD_SIZE as i32).contains(&rank) {
            return Err(ParseMoveError::OffBoard(s.to_string()));
        }
        let sq = Square::new(rank as i8, file as i8);
        if !sq.is_valid() { return Err(ParseMoveError::OffBoard(s.to_string())); }
        Ok(sq)
    }
}

impl FromStr for Move {
    type Err = ParseMoveError;

    /// Accepts `A1-B2` as well as `a1b2`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (from, to) = match s.split_once('-') {
            Some(parts) => parts,
            None => {
                // Second square starts at the second letter.
                let split = s.char_indices().skip(1).find(|(_, c)| c.is_ascii_alphabetic()).map(|(i, _)| i);
                match split { Some(i) => s.split_at(i), None => return Err(ParseMoveError::BadMove(s.to_string())) }
            }
        };
        Ok(Move::new(from.parse()?, to.parse()?))
    }
}
