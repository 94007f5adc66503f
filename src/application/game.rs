use crate::application::{MatchSession, SelectOutcome, SessionState};
use crate::config::GameConfig;
use crate::domain::{GridError, Layout, TileGrid};
use macroquad::math::Vec2;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Game orchestrates one play-through: the match session plus the clock.
/// This is the application layer the frame loop talks to.
pub struct Game {
    session: MatchSession,
    config: GameConfig,
    layout: Layout,
    rng: StdRng,
    elapsed: f32,
}

impl Game {
    /// Create a game with a freshly shuffled deck
    pub fn new(config: GameConfig, layout: Layout, mut rng: StdRng) -> Result<Self, GridError> {
        let session = Self::deal(&config, &layout, &mut rng)?;
        Ok(Self {
            session,
            config,
            layout,
            rng,
            elapsed: 0.0,
        })
    }

    /// Create a game seeded from `config.seed`, or from the OS when unset
    pub fn from_config(config: GameConfig, layout: Layout) -> Result<Self, GridError> {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self::new(config, layout, rng)
    }

    fn deal(config: &GameConfig, layout: &Layout, rng: &mut StdRng) -> Result<MatchSession, GridError> {
        let grid = TileGrid::build(config.rows, config.columns, config.face_count(), layout, rng)?;
        let (rows, columns) = grid.dimensions();
        log::info!("dealt {rows}x{columns} grid with {} pairs", grid.face_count());
        Ok(MatchSession::new(grid, config.penalty))
    }

    pub const fn session(&self) -> &MatchSession {
        &self.session
    }

    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    pub const fn is_complete(&self) -> bool {
        self.session.is_complete()
    }

    /// Whether controls other than quit respond; false while a mismatch is on display
    pub fn accepts_input(&self) -> bool {
        self.session.state() != SessionState::Resolving
    }

    /// Forward a click to the session
    pub fn click(&mut self, point: Vec2) -> SelectOutcome {
        let outcome = self.session.select_tile(point);
        if let SelectOutcome::Matched { complete: true, .. } = outcome {
            log::info!("all pairs found in {}s", self.elapsed_secs());
        }
        outcome
    }

    /// Update by one frame
    pub fn tick(&mut self, delta_time: f32) {
        if self.session.is_complete() {
            return;
        }
        self.elapsed += delta_time;
        self.session.tick(delta_time);
    }

    /// Whole seconds since the deal, frozen once the game is complete
    pub fn elapsed_secs(&self) -> u64 {
        self.elapsed.max(0.0).round() as u64
    }

    /// Throw away the current deck and deal a new one
    pub fn restart(&mut self) -> Result<(), GridError> {
        self.session = Self::deal(&self.config, &self.layout, &mut self.rng)?;
        self.elapsed = 0.0;
        log::info!("game restarted");
        Ok(())
    }
}
