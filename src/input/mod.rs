use macroquad::prelude::*;
use crate::application::{Game, SelectOutcome};
use crate::domain::GridError;
use crate::ui::Button;

/// What the frame loop should do after input is processed
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Control {
    Continue,
    Quit,
}

/// Forward a left click on the board to the game
pub fn handle_board_click(game: &mut Game, mouse_pos: Vec2) -> Option<SelectOutcome> {
    is_mouse_button_pressed(MouseButton::Left).then(|| game.click(mouse_pos))
}

/// Process keyboard shortcuts
pub fn process_keyboard_input(game: &mut Game) -> Result<Control, GridError> {
    if is_key_pressed(KeyCode::Escape) {
        return Ok(Control::Quit);
    }
    if is_key_pressed(KeyCode::R) && game.accepts_input() {
        game.restart()?;
    }
    Ok(Control::Continue)
}

/// Process panel button clicks
pub fn process_button_clicks(
    game: &mut Game,
    buttons: &[Button],
    mouse_pos: Vec2,
) -> Result<(), GridError> {
    if !game.accepts_input() {
        return Ok(());
    }
    for (idx, btn) in buttons.iter().enumerate() {
        if !btn.is_clicked(mouse_pos) {
            continue;
        }
        match idx {
            0 => game.restart()?,
            _ => {}
        }
    }
    Ok(())
}
