mod common;

use common::piece;
use quadchess::board::{Board, PieceKind, Player, Square};
use quadchess::search::alphabeta::{Narrowing, LOSS_SCORE};
use quadchess::{GameState, SearchError, SearchParams, Searcher};

fn searcher(depth: u32, capture_depth: u32) -> Searcher {
    Searcher::new(SearchParams { depth, capture_depth, threads: 2, ..SearchParams::default() }).expect("searcher")
}

#[test]
fn search_returns_legal_move_startpos() {
    let g = GameState::startpos();
    let mut s = searcher(1, 1);
    let res = s.best_move(&g).expect("a move at depth 1");
    assert!(g.validate_move(&res.best_move).is_ok(), "{} is not legal", res.best_move);
    assert!(res.evaluations > 20);
}

#[test]
fn search_takes_the_only_king_capture() {
    let g = common::rook_takes_king();
    for (d, c) in [(1, 1), (2, 2), (2, 3)] {
        let mut s = searcher(d, c);
        let res = s.best_move(&g).expect("a move");
        assert_eq!(res.best_move.to_string(), "F6-J6", "depth {d}/{c}");
        assert_eq!(res.score, LOSS_SCORE - 1.0);
    }
}

#[test]
fn search_grabs_a_free_queen() {
    // Red bishop on F4 sees the Blue queen on I7; the queen is defended by nothing.
    let mut b = Board::new();
    b.place(piece(0, PieceKind::Bishop), Square::new(3, 5));
    b.place(piece(0, PieceKind::King), Square::new(0, 7));
    b.place(piece(1, PieceKind::Queen), Square::new(6, 8));
    b.place(piece(1, PieceKind::King), Square::new(6, 0));
    b.place(piece(2, PieceKind::King), Square::new(13, 6));
    b.place(piece(3, PieceKind::King), Square::new(7, 13));
    let g = GameState::from_board(b, Player::new(0));
    let mut s = searcher(2, 3);
    let res = s.best_move(&g).expect("a move");
    assert_eq!(res.best_move.to_string(), "F4-I7");
    assert!(res.score > 0.0);
}

#[test]
fn no_moves_is_an_error_not_a_score() {
    let mut b = Board::new();
    b.place(piece(0, PieceKind::Pawn), Square::new(5, 5));
    b.place(piece(2, PieceKind::Pawn), Square::new(6, 5));
    let g = GameState::from_board(b, Player::new(0));
    let mut s = Searcher::default();
    assert!(matches!(s.best_move(&g), Err(SearchError::NoLegalMove)));
}

#[test]
fn eval_budget_stops_recursion_but_still_answers() {
    let g = GameState::startpos();
    let mut s = Searcher::new(SearchParams { depth: 4, capture_depth: 6, eval_limit: Some(1), threads: 1, ..SearchParams::default() }).unwrap();
    let res = s.best_move(&g).expect("budget exhaustion is not an error");
    // One call for the root, one per root candidate, nothing deeper.
    assert_eq!(res.evaluations, 21);
    assert_eq!(res.stats.depth_reached(), 1);
    assert!(g.validate_move(&res.best_move).is_ok());

    let mut roomy = Searcher::new(SearchParams { depth: 2, capture_depth: 2, eval_limit: Some(200), threads: 1, ..SearchParams::default() }).unwrap();
    let r2 = roomy.best_move(&g).unwrap();
    assert!(r2.evaluations >= 200);
    assert!(r2.evaluations < 200 + 40, "overshoot bounded by one fan-out per started node: {}", r2.evaluations);
}

#[test]
fn narrowed_search_costs_no_more_than_full_width() {
    let g = common::midgame();
    let full = Searcher::new(SearchParams { depth: 2, capture_depth: 2, narrowing: Narrowing::Full, threads: 2, ..SearchParams::default() })
        .unwrap().best_move(&g).unwrap();
    let narrow = Searcher::new(SearchParams { depth: 2, capture_depth: 2, threads: 2, ..SearchParams::default() })
        .unwrap().best_move(&g).unwrap();
    assert!(g.validate_move(&narrow.best_move).is_ok());
    assert!(full.evaluations >= narrow.evaluations);
}

#[test]
fn zero_depth_still_searches_every_root_move() {
    let g = GameState::startpos();
    let mut s = Searcher::new(SearchParams { depth: 0, capture_depth: 0, threads: 1, ..SearchParams::default() }).unwrap();
    let res = s.best_move(&g).expect("startpos has 20 moves");
    assert!(g.validate_move(&res.best_move).is_ok());
    assert_eq!(res.evaluations, 21);
}

#[test]
fn zero_eval_limit_is_unbounded() {
    let g = common::midgame();
    let run = |eval_limit| {
        let mut s = Searcher::new(SearchParams { depth: 2, capture_depth: 2, eval_limit, threads: 1, ..SearchParams::default() }).unwrap();
        s.best_move(&g).unwrap()
    };
    let zero = run(Some(0));
    let none = run(None);
    assert_eq!(zero.best_move, none.best_move);
    assert_eq!(zero.evaluations, none.evaluations);
    assert!(zero.stats.depth_reached() > 1);
}

#[test]
fn capture_extension_sees_the_recapture() {
    let g = common::guarded_rook();
    let run = |capture_depth| {
        let mut s = Searcher::new(SearchParams { depth: 1, capture_depth, narrowing: Narrowing::Full, threads: 1, ..SearchParams::default() }).unwrap();
        s.best_move(&g).unwrap()
    };
    let shallow = run(1);
    assert_eq!(shallow.best_move.to_string(), "F6-I6");
    let extended = run(3);
    assert_ne!(extended.best_move.to_string(), "F6-I6", "queen walks into the Green rook");
    assert!(extended.stats.depth_reached() > shallow.stats.depth_reached());
}

#[test]
fn faster_win_scores_higher() {
    let g = common::fast_and_slow_win();
    let mut s = Searcher::new(SearchParams { depth: 3, capture_depth: 3, narrowing: Narrowing::Full, threads: 2, ..SearchParams::default() }).unwrap();
    let res = s.best_move(&g).unwrap();
    assert_eq!(res.best_move.to_string(), "F6-J6");
    assert_eq!(res.score, LOSS_SCORE - 1.0);

    // Taking the queen instead wins only when Yellow takes a king two plies later.
    let mut slow = g.child("F6-F4".parse().unwrap());
    assert!(!slow.has_ended());
    slow.play("J6-J5".parse().unwrap());
    let mut s = Searcher::new(SearchParams { depth: 1, capture_depth: 1, threads: 1, ..SearchParams::default() }).unwrap();
    let yellow = s.best_move(&slow).unwrap();
    assert_eq!(yellow.best_move.to_string(), "D9-N9");
    assert_eq!(yellow.score, LOSS_SCORE - 1.0);
}
