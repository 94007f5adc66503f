mod error;
mod geometry;
mod grid;
mod tile;

pub use error::GridError;
pub use geometry::Layout;
pub use grid::{TileGrid, TileId};
pub use tile::{FaceId, Tile};
