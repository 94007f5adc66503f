use anyhow::{Context, Result};
use macroquad::prelude::*;
use memory_match::{
    Game, GameConfig,
    assets::FaceTextures,
    config::{WINDOW_HEIGHT, WINDOW_WIDTH},
    input::{self, Control},
    rendering, ui,
};

fn window_conf() -> Conf {
    Conf {
        window_title: "Memory".to_owned(),
        window_width: WINDOW_WIDTH,
        window_height: WINDOW_HEIGHT,
        window_resizable: false,
        ..Default::default()
    }
}

fn setup() -> Result<Game> {
    let config = GameConfig::from_env().context("reading MEMORY_* configuration")?;
    let layout = ui::grid_layout(&config);
    log::info!(
        "starting {}x{} game, seed {:?}, penalty {:?}",
        config.rows,
        config.columns,
        config.seed,
        config.penalty
    );
    Game::from_config(config, layout).context("dealing the first grid")
}

async fn run(mut game: Game) -> Result<()> {
    let config = game.config().clone();
    let textures = FaceTextures::load(&config.asset_dir, config.face_count()).await;
    let buttons = ui::create_buttons(&config);

    loop {
        let mouse_pos = Vec2::from(mouse_position());

        // Input; quit is honoured even while a mismatch penalty is pending
        if input::process_keyboard_input(&mut game).context("restarting")? == Control::Quit {
            log::info!("quit requested");
            return Ok(());
        }
        input::process_button_clicks(&mut game, &buttons, mouse_pos).context("restarting")?;
        input::handle_board_click(&mut game, mouse_pos);

        // Update
        game.tick(get_frame_time());

        // Render
        clear_background(ui::BACKGROUND);
        rendering::draw_tiles(&game, &textures);
        rendering::draw_panel(&game, &buttons, mouse_pos);
        rendering::draw_complete_banner(&game);

        next_frame().await;
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .init();

    let result = match setup() {
        Ok(game) => run(game).await,
        Err(err) => Err(err),
    };
    if let Err(err) = result {
        log::error!("{err:#}");
    }
}
