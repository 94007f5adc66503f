use macroquad::prelude::*;
use crate::application::{Game, SessionState, TileView};
use crate::assets::{FaceTextures, fallback_color};
use crate::ui::{self, Button, CLOCK_FONT_SIZE};

const BACK_COLOR: Color = Color::new(0.20, 0.24, 0.36, 1.0);
const PENDING_OUTLINE: Color = Color::new(1.0, 0.35, 0.35, 1.0);

/// Draw every tile, front or back
pub fn draw_tiles(game: &Game, textures: &FaceTextures) {
    let session = game.session();
    let face_count = session.grid().face_count();
    let resolving = session.state() == SessionState::Resolving;

    for view in session.tile_views() {
        draw_tile(&view, textures, face_count);

        // Outline the pair that is about to flip back
        if resolving && session.selection().contains(view.id) {
            let r = view.position;
            draw_rectangle_lines(r.x, r.y, r.w, r.h, 4.0, PENDING_OUTLINE);
        }
    }
}

fn draw_tile(view: &TileView, textures: &FaceTextures, face_count: usize) {
    let r = view.position;
    let texture = match view.face {
        Some(face) => textures.face(face),
        None => textures.back(),
    };

    if let Some(texture) = texture {
        draw_texture_ex(
            texture,
            r.x,
            r.y,
            WHITE,
            DrawTextureParams {
                dest_size: Some(vec2(r.w, r.h)),
                ..Default::default()
            },
        );
        return;
    }

    match view.face {
        Some(face) => {
            draw_rectangle(r.x, r.y, r.w, r.h, fallback_color(face, face_count));
            let label = face.0.to_string();
            let size = measure_text(&label, None, 48, 1.0);
            draw_text(
                &label,
                r.x + (r.w - size.width) / 2.0,
                r.y + (r.h + size.height) / 2.0,
                48.0,
                WHITE,
            );
        }
        None => {
            draw_rectangle(r.x, r.y, r.w, r.h, BACK_COLOR);
            draw_rectangle_lines(r.x, r.y, r.w, r.h, 2.0, GRAY);
        }
    }
}

/// Draw the clock and buttons in the reserved right-hand column
pub fn draw_panel(game: &Game, buttons: &[Button], mouse_pos: Vec2) {
    let text = game.elapsed_secs().to_string();
    let size = measure_text(&text, None, CLOCK_FONT_SIZE as u16, 1.0);
    draw_text(
        &text,
        screen_width() - size.width - game.config().spacing,
        size.offset_y,
        CLOCK_FONT_SIZE,
        WHITE,
    );

    // No hover feedback while a mismatch is on display
    let active = game.accepts_input();
    buttons
        .iter()
        .for_each(|btn| btn.draw(active && btn.is_hovered(mouse_pos)));

    let x = ui::panel_x(game.config()) + game.config().spacing;
    let session = game.session();
    let progress = format!(
        "{}/{} pairs",
        session.matched_pairs(),
        session.grid().face_count()
    );
    draw_text(&progress, x, 170.0, 20.0, GRAY);
    draw_text("R: new game", x, 195.0, 16.0, DARKGRAY);
    draw_text("Esc: quit", x, 212.0, 16.0, DARKGRAY);
}

/// Banner shown once every pair is found
pub fn draw_complete_banner(game: &Game) {
    if !game.is_complete() {
        return;
    }

    let text = format!("All pairs found in {}s", game.elapsed_secs());
    let size = measure_text(&text, None, 48, 1.0);
    let x = (screen_width() - size.width) / 2.0;
    let y = (screen_height() + size.height) / 2.0;

    draw_rectangle(
        x - 20.0,
        y - size.height - 20.0,
        size.width + 40.0,
        size.height + 40.0,
        Color::from_rgba(0, 0, 0, 200),
    );
    draw_text(&text, x, y, 48.0, Color::from_rgba(0, 255, 150, 255));
}
