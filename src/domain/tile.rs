use macroquad::math::{Rect, Vec2};
use std::fmt;

/// Identifier of the image shown on a tile's front.
/// Faces are numbered from 1; the tile back has no `FaceId`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FaceId(pub u16);

impl FaceId {
    /// Number reserved for the tile back image
    pub const BACK: FaceId = FaceId(0);

    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for FaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "face{}", self.0)
    }
}

/// Tile is one cell of the memory grid.
/// Only `revealed` changes after construction.
#[derive(Clone, Debug, PartialEq)]
pub struct Tile {
    position: Rect,
    face: FaceId,
    revealed: bool,
}

impl Tile {
    /// Create a face-down tile
    pub const fn new(position: Rect, face: FaceId) -> Self {
        Self {
            position,
            face,
            revealed: false,
        }
    }

    pub const fn position(&self) -> Rect {
        self.position
    }

    pub const fn face(&self) -> FaceId {
        self.face
    }

    pub const fn is_revealed(&self) -> bool {
        self.revealed
    }

    pub fn reveal(&mut self) {
        self.revealed = true;
    }

    pub fn unreveal(&mut self) {
        self.revealed = false;
    }

    /// Hit test; left/top edges are inside, right/bottom edges are not
    pub fn contains(&self, point: Vec2) -> bool {
        self.position.contains(point)
    }

    /// Face to draw this frame, `None` for the back
    pub const fn visible_face(&self) -> Option<FaceId> {
        if self.revealed { Some(self.face) } else { None }
    }
}
