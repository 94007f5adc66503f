use super::{FaceId, GridError, Layout, Tile};
use macroquad::math::Vec2;
use rand::Rng;
use rand::seq::SliceRandom;

/// Index of a tile inside its grid, row-major.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TileId(pub usize);

/// TileGrid owns the deck: every tile, its rectangle, and its face.
pub struct TileGrid {
    rows: usize,
    columns: usize,
    tiles: Vec<Tile>,
}

impl TileGrid {
    /// Build a randomly paired deck of `rows * columns` tiles.
    ///
    /// Each of the `face_count` faces lands on exactly two tiles. The face
    /// multiset is shuffled with Fisher-Yates, so every arrangement is
    /// equally likely for a uniform `rng`.
    pub fn build<R: Rng + ?Sized>(
        rows: usize,
        columns: usize,
        face_count: usize,
        layout: &Layout,
        rng: &mut R,
    ) -> Result<Self, GridError> {
        Self::check_size(rows, columns, face_count)?;

        let mut faces: Vec<FaceId> = (1..=face_count as u16)
            .flat_map(|n| [FaceId(n), FaceId(n)])
            .collect();
        faces.shuffle(rng);

        Ok(Self::place(rows, columns, faces, layout))
    }

    /// Build a deck from an explicit row-major face list
    pub fn from_faces(
        rows: usize,
        columns: usize,
        faces: Vec<FaceId>,
        layout: &Layout,
    ) -> Result<Self, GridError> {
        let face_count = faces.len() / 2;
        if rows.checked_mul(columns) != Some(faces.len()) {
            return Err(GridError::InvalidGridSize {
                rows,
                columns,
                face_count,
            });
        }
        Self::check_size(rows, columns, face_count)?;

        if faces.contains(&FaceId::BACK) {
            return Err(GridError::ReservedFace);
        }

        let mut sorted = faces.clone();
        sorted.sort_unstable();
        for run in sorted.chunk_by(|a, b| a == b) {
            if run.len() != 2 {
                return Err(GridError::UnpairedFace {
                    face: run[0],
                    count: run.len(),
                });
            }
        }

        Ok(Self::place(rows, columns, faces, layout))
    }

    fn check_size(rows: usize, columns: usize, face_count: usize) -> Result<(), GridError> {
        let invalid = GridError::InvalidGridSize {
            rows,
            columns,
            face_count,
        };
        let (Some(total), Some(needed)) = (rows.checked_mul(columns), face_count.checked_mul(2))
        else {
            return Err(invalid);
        };
        if total == 0 || total % 2 != 0 || total != needed || face_count > u16::MAX as usize {
            return Err(invalid);
        }
        Ok(())
    }

    fn place(rows: usize, columns: usize, faces: Vec<FaceId>, layout: &Layout) -> Self {
        let tiles = faces
            .into_iter()
            .enumerate()
            .map(|(i, face)| Tile::new(layout.cell_rect(i / columns, i % columns), face))
            .collect();

        Self {
            rows,
            columns,
            tiles,
        }
    }

    /// Grid dimensions as `(rows, columns)`
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.columns)
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn face_count(&self) -> usize {
        self.tiles.len() / 2
    }

    /// Tile whose rectangle contains `point`, if any
    pub fn tile_at(&self, point: Vec2) -> Option<TileId> {
        self.tiles
            .iter()
            .position(|tile| tile.contains(point))
            .map(TileId)
    }

    pub fn tile(&self, id: TileId) -> Option<&Tile> {
        self.tiles.get(id.0)
    }

    pub fn face(&self, id: TileId) -> Option<FaceId> {
        self.tile(id).map(Tile::face)
    }

    /// Unknown ids read as face-down
    pub fn is_revealed(&self, id: TileId) -> bool {
        self.tile(id).is_some_and(Tile::is_revealed)
    }

    pub fn reveal(&mut self, id: TileId) {
        if let Some(tile) = self.tiles.get_mut(id.0) {
            tile.reveal();
        }
    }

    pub fn unreveal(&mut self, id: TileId) {
        if let Some(tile) = self.tiles.get_mut(id.0) {
            tile.unreveal();
        }
    }

    pub fn all_revealed(&self) -> bool {
        self.tiles.iter().all(Tile::is_revealed)
    }

    pub fn revealed_count(&self) -> usize {
        self.tiles.iter().filter(|t| t.is_revealed()).count()
    }

    /// Iterate over all tiles with their ids
    pub fn tiles(&self) -> impl Iterator<Item = (TileId, &Tile)> + '_ {
        self.tiles.iter().enumerate().map(|(i, t)| (TileId(i), t))
    }
}
