use quadchess::search::alphabeta::SearchParams;
use quadchess::selfplay::{generate_games, SelfPlayParams};

fn params(seed: u64) -> SelfPlayParams {
    SelfPlayParams {
        games: 2,
        max_plies: 10,
        random_plies: 4,
        seed,
        search: SearchParams { depth: 1, capture_depth: 2, threads: 1, ..SearchParams::default() },
    }
}

#[test]
fn selfplay_generates_games_deterministically() {
    let p = params(42);
    let mut seen = Vec::new();
    let g1 = generate_games(&p, |i, _| seen.push(i)).unwrap();
    let g2 = generate_games(&p, |_, _| {}).unwrap();
    assert_eq!(g1.len(), 2);
    assert_eq!(seen, vec![0, 1]);
    // Deterministic by seed
    assert_eq!(g1, g2);
    for g in &g1 {
        assert!(g.plies() <= 10);
        // Engine plies carry a score; random ones don't.
        assert_eq!(g.scores.len(), g.plies().saturating_sub(4));
        let end = g.replay().expect("recorded moves replay");
        assert_eq!(end.result(), g.winner);
    }
}

#[test]
fn selfplay_seed_changes_openings() {
    let g1 = generate_games(&params(1), |_, _| {}).unwrap();
    let g2 = generate_games(&params(2), |_, _| {}).unwrap();
    assert_ne!(g1[0].moves[..4], g2[0].moves[..4], "random plies ignored the seed");
}
