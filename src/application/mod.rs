mod game;
mod session;

pub use game::Game;
pub use session::{
    DEFAULT_PENALTY, MatchSession, SelectOutcome, Selection, SessionState, TileView,
};
