use macroquad::math::Rect;

/// Layout computes tile rectangles for a grid that fits inside a display area.
/// One extra column on the right is kept free for the clock.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Layout {
    cell_width: f32,
    cell_height: f32,
    spacing: f32,
}

impl Layout {
    /// Fit `columns` x `rows` cells into an area of `width` x `height` pixels.
    /// Cell sizes are whole pixels so tile edges land on pixel boundaries.
    pub fn fit(columns: usize, rows: usize, spacing: f32, width: f32, height: f32) -> Self {
        let cell_width = (width / (columns as f32 + 1.0)).floor();
        let cell_height = ((height - spacing) / rows.max(1) as f32).floor();
        Self {
            cell_width,
            cell_height,
            spacing,
        }
    }

    /// Layout with explicit cell size, mostly for headless callers
    pub const fn with_cell(cell_width: f32, cell_height: f32, spacing: f32) -> Self {
        Self {
            cell_width,
            cell_height,
            spacing,
        }
    }

    /// Size of a single tile (cell minus spacing)
    pub fn tile_size(&self) -> (f32, f32) {
        (
            (self.cell_width - self.spacing).max(0.0),
            (self.cell_height - self.spacing).max(0.0),
        )
    }

    /// Rectangle of the tile at `(row, column)`
    pub fn cell_rect(&self, row: usize, column: usize) -> Rect {
        let (w, h) = self.tile_size();
        Rect::new(
            self.spacing + self.cell_width * column as f32,
            self.spacing + self.cell_height * row as f32,
            w,
            h,
        )
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self::with_cell(100.0, 100.0, 10.0)
    }
}
