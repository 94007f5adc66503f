// Domain layer - tiles, deck, layout
pub mod domain;

// Application layer - match session and game orchestration
pub mod application;

pub mod config;

// Infrastructure layer - assets, UI, rendering, input
pub mod assets;
pub mod ui;
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use domain::{FaceId, GridError, Layout, Tile, TileGrid, TileId};
pub use application::{Game, MatchSession, SelectOutcome, SessionState};
pub use config::GameConfig;
