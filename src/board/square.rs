use serde::{Deserialize, Serialize};
use std::fmt;

pub const BOARD_SIZE: i8 = 14;
// 3x3 blocks cut out of every corner.
pub const CORNER_SIZE: i8 = 3;
pub const NUM_PLAYERS: usize = 4;

/// A coordinate on the board. `rank` and `file` are 0-based.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Square {
    pub rank: i8,
    pub file: i8,
}

impl Square {
    pub const fn new(rank: i8, file: i8) -> Self { Self { rank, file } }

    pub fn offset(self, d_rank: i8, d_file: i8) -> Self {
        Self { rank: self.rank + d_rank, file: self.file + d_file }
    }

    pub fn is_valid(self) -> bool { is_square_valid(self.rank, self.file) }

    /// Iterates every playable square, rank-major.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..BOARD_SIZE).flat_map(|r| (0..BOARD_SIZE).map(move |f| Square::new(r, f))).filter(|s| s.is_valid())
    }
}

pub fn is_square_valid(rank: i8, file: i8) -> bool {
    if !(0..BOARD_SIZE).contains(&rank) || !(0..BOARD_SIZE).contains(&file) { return false; }
    let edge_file = file < CORNER_SIZE || file >= BOARD_SIZE - CORNER_SIZE;
    let edge_rank = rank < CORNER_SIZE || rank >= BOARD_SIZE - CORNER_SIZE;
    !(edge_file && edge_rank)
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (b'A' + self.file as u8) as char, self.rank as i32 + 1)
    }
}

/// Seat index 0..=3. Turn order is 0 -> 1 -> 2 -> 3 -> 0.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Player(u8);

impl Player {
    pub const ALL: [Player; NUM_PLAYERS] = [Player(0), Player(1), Player(2), Player(3)];

    pub fn new(index: u8) -> Self {
        debug_assert!((index as usize) < NUM_PLAYERS, "player index out of range: {index}");
        Player(index & 3)
    }

    pub fn index(self) -> usize { self.0 as usize }

    pub fn next(self) -> Self { Player((self.0 + 1) % NUM_PLAYERS as u8) }

    // Teammates share the low bit of their index.
    pub fn is_teammate(self, other: Player) -> bool { (self.0 ^ other.0) & 1 == 0 }

    pub fn team(self) -> Team { if self.0 & 1 == 0 { Team::RedYellow } else { Team::BlueGreen } }

    pub fn teammate(self) -> Player { Player((self.0 + 2) % NUM_PLAYERS as u8) }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self.0 { 0 => "Red", 1 => "Blue", 2 => "Yellow", _ => "Green" };
        f.write_str(name)
    }
}

/// Alliance of two seats sharing index parity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Team {
    RedYellow,
    BlueGreen,
}

impl Team {
    /// +1 for Red/Yellow, -1 for Blue/Green. Scores multiplied by this are
    /// relative to the team about to move.
    pub fn sign(self) -> f64 { match self { Team::RedYellow => 1.0, Team::BlueGreen => -1.0 } }

    pub fn opposite(self) -> Team { match self { Team::RedYellow => Team::BlueGreen, Team::BlueGreen => Team::RedYellow } }

    pub fn players(self) -> [Player; 2] {
        match self { Team::RedYellow => [Player(0), Player(2)], Team::BlueGreen => [Player(1), Player(3)] }
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self { Team::RedYellow => "Red/Yellow", Team::BlueGreen => "Blue/Green" })
    }
}
