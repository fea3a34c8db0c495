// Four-player (2v2) chess: board model, evaluator and alpha-beta search
pub mod board;
pub mod game;
pub mod perft;
pub mod search;
pub mod selfplay;

pub use game::{GameError, GameState};
pub use search::alphabeta::{SearchError, SearchParams, SearchResult, Searcher};
