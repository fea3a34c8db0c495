// Per-kind destination rules. Check is never computed: a king may be captured.
use super::grid::Board;
use super::piece::PieceKind;
use super::square::{Player, Square, BOARD_SIZE};

pub const ORTHOGONAL: [(i8, i8); 4] = [(-1, 0), (0, -1), (0, 1), (1, 0)];
pub const DIAGONAL: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];
pub const ROYAL: [(i8, i8); 8] = [(-1, 0), (0, -1), (0, 1), (1, 0), (-1, -1), (-1, 1), (1, -1), (1, 1)];
pub const KNIGHT: [(i8, i8); 8] = [(-2, -1), (-2, 1), (-1, -2), (-1, 2), (1, -2), (1, 2), (2, -1), (2, 1)];

// Forward, forward-left and forward-right for each seat.
const PAWN_DIRS: [[(i8, i8); 3]; 4] = [
    [(1, 0), (1, -1), (1, 1)],
    [(0, 1), (-1, 1), (1, 1)],
    [(-1, 0), (-1, -1), (-1, 1)],
    [(0, -1), (-1, -1), (1, -1)],
];

/// Destinations for the piece on `from`; empty for an empty or off-board cell.
pub fn destinations(board: &Board, from: Square) -> Vec<Square> {
    let mut out = Vec::with_capacity(16);
    for_each_destination(board, from, |to| out.push(to));
    out
}

/// Same as `destinations(..).len()` without allocating.
pub fn count_destinations(board: &Board, from: Square) -> usize {
    let mut n = 0;
    for_each_destination(board, from, |_| n += 1);
    n
}

pub fn for_each_destination<F: FnMut(Square)>(board: &Board, from: Square, mut emit: F) {
    let piece = board.get(from);
    let (owner, kind) = match (piece.owner(), piece.kind()) {
        (Some(o), Some(k)) => (o, k),
        _ => return,
    };
    match kind {
        PieceKind::Pawn => pawn(board, from, owner, &mut emit),
        PieceKind::Knight => stepping(board, from, owner, &KNIGHT, &mut emit),
        PieceKind::Bishop => sliding(board, from, owner, &DIAGONAL, &mut emit),
        PieceKind::Rook => sliding(board, from, owner, &ORTHOGONAL, &mut emit),
        PieceKind::Queen => sliding(board, from, owner, &ROYAL, &mut emit),
        PieceKind::King => stepping(board, from, owner, &ROYAL, &mut emit),
    }
}

// Free or held by a non-teammate.
fn can_land(board: &Board, to: Square, owner: Player) -> bool {
    let target = board.get(to);
    if target.is_empty() { return true; }
    target.owner().map_or(false, |o| !o.is_teammate(owner))
}

fn sliding<F: FnMut(Square)>(board: &Board, from: Square, owner: Player, dirs: &[(i8, i8)], emit: &mut F) {
    for &(dr, df) in dirs {
        let mut to = from.offset(dr, df);
        while to.is_valid() {
            if board.is_empty(to) { emit(to); to = to.offset(dr, df); continue; }
            if can_land(board, to, owner) { emit(to); }
            break;
        }
    }
}

fn stepping<F: FnMut(Square)>(board: &Board, from: Square, owner: Player, offsets: &[(i8, i8)], emit: &mut F) {
    for &(dr, df) in offsets {
        let to = from.offset(dr, df);
        if to.is_valid() && can_land(board, to, owner) { emit(to); }
    }
}

/// The line a seat's pawns start on. Pawns can capture onto another seat's
/// home line, so eligibility is keyed by the mover.
pub fn on_pawn_home_line(owner: Player, sq: Square) -> bool {
    match owner.index() {
        0 => sq.rank == 1,
        1 => sq.file == 1,
        2 => sq.rank == BOARD_SIZE - 2,
        _ => sq.file == BOARD_SIZE - 2,
    }
}

fn pawn<F: FnMut(Square)>(board: &Board, from: Square, owner: Player, emit: &mut F) {
    let [fwd, left, right] = PAWN_DIRS[owner.index()];
    let one = from.offset(fwd.0, fwd.1);
    if one.is_valid() && board.is_empty(one) {
        emit(one);
        let two = from.offset(2 * fwd.0, 2 * fwd.1);
        if on_pawn_home_line(owner, from) && two.is_valid() && board.is_empty(two) { emit(two); }
    }
    for (dr, df) in [left, right] {
        let to = from.offset(dr, df);
        if !to.is_valid() || board.is_empty(to) { continue; }
        if can_land(board, to, owner) { emit(to); }
    }
    // No en passant or promotion.
}
