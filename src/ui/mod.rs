mod button;

pub use button::Button;

use crate::config::{GameConfig, WINDOW_HEIGHT, WINDOW_WIDTH};
use crate::domain::Layout;
use macroquad::prelude::{BLACK, Color, screen_width};

pub const BUTTON_HEIGHT: f32 = 40.0;
pub const CLOCK_FONT_SIZE: f32 = 60.0;
pub const BACKGROUND: Color = BLACK;

/// Tile layout for the fixed-size window
pub fn grid_layout(config: &GameConfig) -> Layout {
    Layout::fit(
        config.columns,
        config.rows,
        config.spacing,
        WINDOW_WIDTH as f32,
        WINDOW_HEIGHT as f32,
    )
}

/// Width of the column reserved on the right for the clock and controls
pub fn panel_width(config: &GameConfig) -> f32 {
    (WINDOW_WIDTH as f32 / (config.columns as f32 + 1.0)).floor()
}

/// X position where the reserved column starts
pub fn panel_x(config: &GameConfig) -> f32 {
    screen_width() - panel_width(config)
}

/// Create the control buttons inside the reserved column
pub fn create_buttons(config: &GameConfig) -> Vec<Button> {
    let width = panel_width(config) - 2.0 * config.spacing;
    let x = panel_x(config) + config.spacing;
    vec![Button::new(x, 100.0, width, BUTTON_HEIGHT, "New game")]
}
