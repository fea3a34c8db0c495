mod common;

use quadchess::{SearchParams, Searcher};

#[test]
fn threads_param_propagates() {
    let s = Searcher::new(SearchParams { threads: 3, ..SearchParams::default() }).unwrap();
    assert_eq!(s.threads(), 3);
}

#[test]
fn thread_count_does_not_change_the_answer() {
    let g = common::midgame();
    let run = |threads: usize| {
        let mut s = Searcher::new(SearchParams { depth: 2, capture_depth: 3, threads, ..SearchParams::default() }).unwrap();
        s.best_move(&g).unwrap()
    };
    let r1 = run(1);
    let r4 = run(4);
    assert_eq!(r1.best_move, r4.best_move);
    assert_eq!(r1.score, r4.score);
    assert_eq!(r1.evaluations, r4.evaluations);
}

#[test]
fn repeated_searches_reset_counters() {
    let g = common::midgame();
    let mut s = Searcher::new(SearchParams { depth: 1, capture_depth: 2, threads: 2, ..SearchParams::default() }).unwrap();
    let a = s.best_move(&g).unwrap();
    let b = s.best_move(&g).unwrap();
    assert_eq!(a.evaluations, b.evaluations);
    assert_eq!(a.stats, b.stats);
}
