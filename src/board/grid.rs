use super::notation::Move;
use super::piece::{Piece, PieceKind};
use super::square::{is_square_valid, Player, Square, BOARD_SIZE, NUM_PLAYERS};
use std::collections::BTreeSet;
use std::fmt;

const N: usize = BOARD_SIZE as usize;

pub const PIECES_AT_START: usize = 64;

/// Piece grid plus a per-player index of occupied squares.
///
/// The index of player P always equals the set of grid squares holding P's
/// pieces; every mutating method keeps the two in sync.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    grid: [[Piece; N]; N],
    occupancy: [BTreeSet<Square>; NUM_PLAYERS],
}

impl Default for Board {
    fn default() -> Self { Self::new() }
}

impl Board {
    /// An empty board with the corner cells marked off-board.
    pub fn new() -> Self {
        let mut grid = [[Piece::EMPTY; N]; N];
        for (r, row) in grid.iter_mut().enumerate() {
            for (f, cell) in row.iter_mut().enumerate() {
                if !is_square_valid(r as i8, f as i8) { *cell = Piece::OFF_BOARD; }
            }
        }
        Self { grid, occupancy: Default::default() }
    }

    pub fn starting_position() -> Self {
        let mut b = Self::new();
        b.set_starting_position();
        b
    }

    pub fn set_starting_position(&mut self) {
        use PieceKind::*;
        let lines: [[PieceKind; 8]; 2] = [
            [Pawn; 8],
            [Rook, Knight, Bishop, Queen, King, Bishop, Knight, Rook],
        ];
        for (row, line) in lines.iter().enumerate() {
            let row = row as i8;
            for (col, &kind) in line.iter().enumerate() {
                let col = col as i8;
                let seats = [
                    Square::new(1 - row, 3 + col),
                    Square::new(10 - col, 1 - row),
                    Square::new(12 + row, 10 - col),
                    Square::new(3 + col, 12 + row),
                ];
                for (i, sq) in seats.into_iter().enumerate() {
                    self.place(Piece::new(Player::new(i as u8), kind), sq);
                }
            }
        }
    }

    /// Cell contents; off-board for coordinates outside the playable area.
    pub fn get(&self, sq: Square) -> Piece {
        if !sq.is_valid() { return Piece::OFF_BOARD; }
        self.grid[sq.rank as usize][sq.file as usize]
    }

    pub fn is_empty(&self, sq: Square) -> bool { self.get(sq).is_empty() }

    pub fn occupied(&self, player: Player) -> &BTreeSet<Square> { &self.occupancy[player.index()] }

    pub fn piece_count(&self) -> usize { self.occupancy.iter().map(|s| s.len()).sum() }

    pub fn has_king(&self, player: Player) -> bool {
        self.occupied(player).iter().any(|&sq| self.get(sq).is_king())
    }

    /// Puts `piece` on `sq`, replacing whatever stood there.
    pub fn place(&mut self, piece: Piece, sq: Square) {
        if !sq.is_valid() { return; }
        self.remove(sq);
        self.grid[sq.rank as usize][sq.file as usize] = piece;
        if let Some(owner) = piece.owner() { self.occupancy[owner.index()].insert(sq); }
    }

    /// Empties `sq` and returns the piece that was there.
    pub fn remove(&mut self, sq: Square) -> Piece {
        if !sq.is_valid() { return Piece::OFF_BOARD; }
        let cell = &mut self.grid[sq.rank as usize][sq.file as usize];
        let old = std::mem::replace(cell, Piece::EMPTY);
        if let Some(owner) = old.owner() { self.occupancy[owner.index()].remove(&sq); }
        old
    }

    pub fn clear(&mut self) { *self = Self::new(); }

    /// Moves the piece on `mv.from` to `mv.to`; returns the captured piece
    /// (or `Piece::EMPTY`).
    pub fn apply_move(&mut self, mv: Move) -> Piece {
        let moving = self.remove(mv.from);
        let captured = self.remove(mv.to);
        self.place(moving, mv.to);
        captured
    }

    /// Recomputes the occupancy index from the grid.
    pub fn rebuild_occupancy(&mut self) {
        self.occupancy = Default::default();
        for sq in Square::all() {
            if let Some(owner) = self.get(sq).owner() { self.occupancy[owner.index()].insert(sq); }
        }
    }

    /// True when the occupancy index matches the grid exactly.
    pub fn check_occupancy(&self) -> bool {
        let mut expected: [BTreeSet<Square>; NUM_PLAYERS] = Default::default();
        for sq in Square::all() {
            if let Some(owner) = self.get(sq).owner() { expected[owner.index()].insert(sq); }
        }
        expected == self.occupancy
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let files: String = (0..BOARD_SIZE).map(|c| format!("  {} ", (b'A' + c as u8) as char)).collect();
        writeln!(f, "   {}", files)?;
        for rank in (0..BOARD_SIZE).rev() {
            write!(f, "{:>2} ", rank + 1)?;
            for file in 0..BOARD_SIZE { write!(f, " {} ", self.get(Square::new(rank, file)))?; }
            writeln!(f, " {}", rank + 1)?;
        }
        write!(f, "   {}", files)
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "\n{}", self) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starting_position_has_sixteen_pieces_per_player() {
        let b = Board::starting_position();
        for p in Player::ALL {
            assert_eq!(b.occupied(p).len(), 16);
            assert!(b.has_king(p));
        }
        assert_eq!(b.piece_count(), PIECES_AT_START);
        assert_eq!(b.get(Square::new(0, 7)), Piece::new(Player::new(0), PieceKind::King));
        assert_eq!(b.get(Square::new(6, 0)), Piece::new(Player::new(1), PieceKind::King));
        assert_eq!(b.get(Square::new(13, 6)), Piece::new(Player::new(2), PieceKind::King));
        assert_eq!(b.get(Square::new(7, 13)), Piece::new(Player::new(3), PieceKind::King));
        assert!(b.check_occupancy());
    }

    #[test]
    fn occupancy_follows_moves_and_captures() {
        let mut b = Board::starting_position();
        let red = Player::new(0);
        let blue = Player::new(1);
        // Red pawn walks into a Blue pawn.
        b.apply_move(Move::new(Square::new(1, 3), Square::new(3, 3)));
        let captured = b.apply_move(Move::new(Square::new(3, 3), Square::new(4, 1)));
        assert_eq!(captured, Piece::new(blue, PieceKind::Pawn));
        assert!(b.occupied(red).contains(&Square::new(4, 1)));
        assert!(!b.occupied(blue).contains(&Square::new(4, 1)));
        assert_eq!(b.occupied(blue).len(), 15);
        assert!(b.check_occupancy());

        b.place(Piece::new(blue, PieceKind::Queen), Square::new(4, 1));
        assert!(!b.occupied(red).contains(&Square::new(4, 1)));
        assert!(b.check_occupancy());

        b.clear();
        assert_eq!(b.piece_count(), 0);
        assert!(b.get(Square::new(0, 0)).is_off_board());
    }

    #[test]
    fn rebuild_matches_incremental_index() {
        let mut b = Board::starting_position();
        b.apply_move(Move::new(Square::new(0, 4), Square::new(2, 5)));
        let mut rebuilt = b.clone();
        rebuilt.rebuild_occupancy();
        assert_eq!(rebuilt, b);
    }
}
