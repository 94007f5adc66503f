use macroquad::prelude::*;

/// Clickable panel button with a hover highlight
#[derive(Clone)]
pub struct Button {
    bounds: Rect,
    label: String,
    color: Color,
    hover_color: Color,
}

impl Button {
    pub fn new(x: f32, y: f32, width: f32, height: f32, label: impl Into<String>) -> Self {
        Self {
            bounds: Rect::new(x, y, width, height),
            label: label.into(),
            color: Color::from_rgba(70, 70, 90, 255),
            hover_color: Color::from_rgba(110, 110, 140, 255),
        }
    }

    pub fn is_hovered(&self, mouse_pos: Vec2) -> bool {
        self.bounds.contains(mouse_pos)
    }

    /// Draw, highlighted when `hovered`
    pub fn draw(&self, hovered: bool) {
        let color = if hovered {
            self.hover_color
        } else {
            self.color
        };
        let Rect { x, y, w, h } = self.bounds;

        draw_rectangle(x, y, w, h, color);
        draw_rectangle_lines(x, y, w, h, 2.0, WHITE);

        let text_size = measure_text(&self.label, None, 20, 1.0);
        draw_text(
            &self.label,
            x + (w - text_size.width) / 2.0,
            y + (h + text_size.height) / 2.0,
            20.0,
            WHITE,
        );
    }

    /// Whether the button was clicked this frame
    pub fn is_clicked(&self, mouse_pos: Vec2) -> bool {
        self.is_hovered(mouse_pos) && is_mouse_button_pressed(MouseButton::Left)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hover_bounds() {
        let button = Button::new(800.0, 100.0, 180.0, 40.0, "New game");
        assert!(button.is_hovered(vec2(800.0, 100.0)));
        assert!(button.is_hovered(vec2(900.0, 120.0)));
        assert!(!button.is_hovered(vec2(980.0, 120.0)));
        assert!(!button.is_hovered(vec2(900.0, 99.0)));
    }
}
