use crate::game::GameState;

// Clone-and-play path count. Terminal states are leaves.
pub fn perft(state: &GameState, depth: u32) -> u64 {
    if depth == 0 || state.has_ended() { return 1; }
    if depth == 1 { return state.legal_moves_count() as u64; }
    state.legal_moves().into_iter().map(|m| perft(&state.child(m), depth - 1)).sum()
}

/// Per-root-move counts, in move generation order.
pub fn perft_divide(state: &GameState, depth: u32) -> Vec<(crate::board::Move, u64)> {
    if depth == 0 || state.has_ended() { return Vec::new(); }
    state.legal_moves().into_iter().map(|m| (m, perft(&state.child(m), depth - 1))).collect()
}
