//! Match resolution state machine.
//!
//! A session reveals at most two tiles at a time. A matching pair stays
//! face-up; a mismatched pair stays visible for the penalty interval and is
//! then hidden again. The penalty is a countdown advanced by [`MatchSession::tick`],
//! so the frame loop keeps running (and can still quit) while it is pending.

use crate::domain::{FaceId, TileGrid, TileId};
use macroquad::math::{Rect, Vec2};
use std::time::Duration;

/// Penalty applied after a mismatch unless configured otherwise
pub const DEFAULT_PENALTY: Duration = Duration::from_millis(1000);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionState {
    /// No tile awaiting judgment
    Idle,
    /// One tile face-up, waiting for its partner
    OneSelected,
    /// Two mismatched tiles on display until the penalty runs out
    Resolving,
    /// Every tile matched; nothing more is accepted
    Complete,
}

/// Tiles currently face-up and awaiting judgment. Never holds more than two.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Selection {
    slots: [Option<TileId>; 2],
}

impl Selection {
    pub fn len(&self) -> usize {
        self.slots.iter().flatten().count()
    }

    pub fn is_empty(&self) -> bool {
        self.slots[0].is_none()
    }

    pub fn contains(&self, id: TileId) -> bool {
        self.slots.contains(&Some(id))
    }

    pub fn iter(&self) -> impl Iterator<Item = TileId> + '_ {
        self.slots.iter().flatten().copied()
    }

    /// Both tiles, once two are selected
    pub fn pair(&self) -> Option<[TileId; 2]> {
        match self.slots {
            [Some(a), Some(b)] => Some([a, b]),
            _ => None,
        }
    }

    /// Append a tile; returns false when already full
    fn push(&mut self, id: TileId) -> bool {
        match self.slots.iter_mut().find(|slot| slot.is_none()) {
            Some(slot) => {
                *slot = Some(id);
                true
            }
            None => false,
        }
    }

    fn clear(&mut self) {
        self.slots = [None, None];
    }
}

/// What a click did, for logging and feedback
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectOutcome {
    /// Missed every tile, hit a face-up tile, or arrived mid-penalty / after the end
    Ignored,
    /// First tile of a pair turned over
    Revealed(TileId),
    Matched { pair: [TileId; 2], complete: bool },
    /// Pair stays visible until the penalty expires
    Mismatched { pair: [TileId; 2] },
}

/// What the shell needs to draw one tile
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TileView {
    pub id: TileId,
    pub position: Rect,
    /// `None` means the back is showing
    pub face: Option<FaceId>,
}

/// MatchSession drives one game over a [`TileGrid`].
pub struct MatchSession {
    grid: TileGrid,
    selection: Selection,
    state: SessionState,
    penalty: Duration,
    penalty_remaining: f32,
    matched_pairs: usize,
}

impl MatchSession {
    pub fn new(grid: TileGrid, penalty: Duration) -> Self {
        Self {
            grid,
            selection: Selection::default(),
            state: SessionState::Idle,
            penalty,
            penalty_remaining: 0.0,
            matched_pairs: 0,
        }
    }

    pub const fn state(&self) -> SessionState {
        self.state
    }

    pub const fn is_complete(&self) -> bool {
        matches!(self.state, SessionState::Complete)
    }

    pub const fn selection(&self) -> &Selection {
        &self.selection
    }

    pub const fn grid(&self) -> &TileGrid {
        &self.grid
    }

    pub const fn matched_pairs(&self) -> usize {
        self.matched_pairs
    }

    /// Time left before a mismatched pair is hidden; zero outside `Resolving`
    pub fn penalty_remaining(&self) -> Duration {
        Duration::from_secs_f32(self.penalty_remaining.max(0.0))
    }

    /// Handle a click at `point`
    pub fn select_tile(&mut self, point: Vec2) -> SelectOutcome {
        if matches!(self.state, SessionState::Resolving | SessionState::Complete) {
            log::trace!("click at {point} ignored while {:?}", self.state);
            return SelectOutcome::Ignored;
        }

        let Some(id) = self.grid.tile_at(point) else {
            log::trace!("click at {point} hit no tile");
            return SelectOutcome::Ignored;
        };
        if self.grid.is_revealed(id) {
            log::trace!("tile {} is already face-up", id.0);
            return SelectOutcome::Ignored;
        }

        if !self.selection.push(id) {
            return SelectOutcome::Ignored;
        }
        self.grid.reveal(id);
        log::debug!("revealed tile {} ({:?})", id.0, self.grid.face(id));

        match self.selection.pair() {
            None => {
                self.state = SessionState::OneSelected;
                SelectOutcome::Revealed(id)
            }
            Some(pair) => {
                self.state = SessionState::Resolving;
                self.resolve(pair)
            }
        }
    }

    /// Advance the mismatch penalty by `delta_time` seconds
    pub fn tick(&mut self, delta_time: f32) {
        if self.state != SessionState::Resolving {
            return;
        }

        self.penalty_remaining -= delta_time;
        if self.penalty_remaining <= 0.0 {
            self.hide_mismatch();
        }
    }

    /// Judge a freshly completed pair
    fn resolve(&mut self, [a, b]: [TileId; 2]) -> SelectOutcome {
        if self.grid.face(a) == self.grid.face(b) {
            self.selection.clear();
            self.matched_pairs += 1;

            let complete = self.grid.all_revealed();
            self.state = if complete {
                SessionState::Complete
            } else {
                SessionState::Idle
            };
            log::info!(
                "matched tiles {} and {} ({}/{} pairs)",
                a.0,
                b.0,
                self.matched_pairs,
                self.grid.face_count()
            );
            return SelectOutcome::Matched {
                pair: [a, b],
                complete,
            };
        }

        self.penalty_remaining = self.penalty.as_secs_f32();
        log::debug!(
            "tiles {} and {} differ, hiding in {:?}",
            a.0,
            b.0,
            self.penalty
        );
        if self.penalty_remaining <= 0.0 {
            self.hide_mismatch();
        }
        SelectOutcome::Mismatched { pair: [a, b] }
    }

    fn hide_mismatch(&mut self) {
        for id in self.selection.iter() {
            self.grid.unreveal(id);
        }
        self.selection.clear();
        self.penalty_remaining = 0.0;
        self.state = SessionState::Idle;
        log::debug!("penalty over, pair hidden");
    }

    /// Per-tile draw data for this frame
    pub fn tile_views(&self) -> impl Iterator<Item = TileView> + '_ {
        self.grid.tiles().map(|(id, tile)| TileView {
            id,
            position: tile.position(),
            face: tile.visible_face(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Layout;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    const A: FaceId = FaceId(1);
    const B: FaceId = FaceId(2);

    /// 2x2 deck laid out as
    ///   [0: A] [1: B]
    ///   [2: A] [3: B]
    fn two_by_two(penalty_ms: u64) -> MatchSession {
        let grid = TileGrid::from_faces(2, 2, vec![A, B, A, B], &Layout::default()).unwrap();
        MatchSession::new(grid, Duration::from_millis(penalty_ms))
    }

    fn click(session: &mut MatchSession, id: usize) -> SelectOutcome {
        let point = session.grid().tile(TileId(id)).unwrap().position().center();
        session.select_tile(point)
    }

    fn revealed(session: &MatchSession) -> Vec<bool> {
        session
            .grid()
            .tiles()
            .map(|(_, tile)| tile.is_revealed())
            .collect()
    }

    #[test]
    fn test_full_game_scenario() {
        let mut s = two_by_two(1000);
        assert_eq!(s.state(), SessionState::Idle);

        assert_eq!(click(&mut s, 0), SelectOutcome::Revealed(TileId(0)));
        assert_eq!(s.state(), SessionState::OneSelected);
        assert_eq!(revealed(&s), [true, false, false, false]);

        assert_eq!(
            click(&mut s, 1),
            SelectOutcome::Mismatched {
                pair: [TileId(0), TileId(1)]
            }
        );
        assert_eq!(s.state(), SessionState::Resolving);
        assert_eq!(revealed(&s), [true, true, false, false]);

        s.tick(0.5);
        assert_eq!(s.state(), SessionState::Resolving);
        assert_eq!(revealed(&s), [true, true, false, false]);

        s.tick(0.5);
        assert_eq!(s.state(), SessionState::Idle);
        assert_eq!(revealed(&s), [false; 4]);
        assert!(s.selection().is_empty());

        click(&mut s, 0);
        assert_eq!(
            click(&mut s, 2),
            SelectOutcome::Matched {
                pair: [TileId(0), TileId(2)],
                complete: false
            }
        );
        assert_eq!(s.state(), SessionState::Idle);
        assert_eq!(revealed(&s), [true, false, true, false]);

        click(&mut s, 1);
        assert_eq!(
            click(&mut s, 3),
            SelectOutcome::Matched {
                pair: [TileId(1), TileId(3)],
                complete: true
            }
        );
        assert_eq!(s.state(), SessionState::Complete);
        assert!(s.is_complete());
        assert!(s.grid().all_revealed());
        assert_eq!(s.matched_pairs(), 2);
    }

    #[test]
    fn test_clicks_during_penalty_have_no_effect() {
        let mut s = two_by_two(1000);
        click(&mut s, 0);
        click(&mut s, 1);

        for id in 0..4 {
            assert_eq!(click(&mut s, id), SelectOutcome::Ignored);
        }
        assert_eq!(s.state(), SessionState::Resolving);
        assert_eq!(s.selection().pair(), Some([TileId(0), TileId(1)]));
        assert_eq!(revealed(&s), [true, true, false, false]);

        s.tick(1.0);
        assert_eq!(revealed(&s), [false; 4]);

        // The previously pending tiles are addressable again
        assert_eq!(click(&mut s, 1), SelectOutcome::Revealed(TileId(1)));
    }

    #[test]
    fn test_revealed_tile_cannot_be_reselected() {
        let mut s = two_by_two(1000);
        click(&mut s, 0);
        assert_eq!(click(&mut s, 0), SelectOutcome::Ignored);
        assert_eq!(s.state(), SessionState::OneSelected);
        assert_eq!(s.selection().len(), 1);

        click(&mut s, 2);
        assert_eq!(click(&mut s, 2), SelectOutcome::Ignored);
        assert_eq!(click(&mut s, 0), SelectOutcome::Ignored);
        assert_eq!(s.state(), SessionState::Idle);
    }

    #[test]
    fn test_click_off_grid_is_ignored() {
        let mut s = two_by_two(1000);
        assert_eq!(s.select_tile(Vec2::new(0.0, 0.0)), SelectOutcome::Ignored);
        assert_eq!(s.select_tile(Vec2::new(-50.0, 900.0)), SelectOutcome::Ignored);
        assert_eq!(s.state(), SessionState::Idle);
        assert_eq!(s.grid().revealed_count(), 0);
    }

    #[test]
    fn test_zero_penalty_hides_immediately() {
        let mut s = two_by_two(0);
        click(&mut s, 0);
        click(&mut s, 3);
        assert_eq!(s.state(), SessionState::Idle);
        assert_eq!(revealed(&s), [false; 4]);
    }

    #[test]
    fn test_tick_outside_penalty_is_noop() {
        let mut s = two_by_two(1000);
        s.tick(5.0);
        click(&mut s, 0);
        s.tick(5.0);
        assert_eq!(s.state(), SessionState::OneSelected);
        assert_eq!(revealed(&s), [true, false, false, false]);
    }

    #[test]
    fn test_complete_is_terminal() {
        let mut s = two_by_two(1000);
        for id in [0, 2, 1, 3] {
            click(&mut s, id);
        }
        assert!(s.is_complete());

        for id in 0..4 {
            assert_eq!(click(&mut s, id), SelectOutcome::Ignored);
        }
        s.tick(10.0);
        assert!(s.is_complete());
        assert!(s.grid().all_revealed());
    }

    #[test]
    fn test_selection_never_exceeds_two() {
        let mut s = two_by_two(1000);
        for id in [0, 1, 2, 3] {
            click(&mut s, id);
            assert!(s.selection().len() <= 2);
        }
    }

    #[test]
    fn test_penalty_remaining_counts_down() {
        let mut s = two_by_two(1000);
        assert_eq!(s.penalty_remaining(), Duration::ZERO);
        click(&mut s, 0);
        click(&mut s, 1);
        s.tick(0.25);
        let left = s.penalty_remaining().as_secs_f32();
        assert!((left - 0.75).abs() < 1e-3);
    }

    #[test]
    fn test_views_show_back_for_hidden_tiles() {
        let mut s = two_by_two(1000);
        click(&mut s, 1);
        let faces: Vec<_> = s.tile_views().map(|v| v.face).collect();
        assert_eq!(faces, [None, Some(B), None, None]);
    }

    #[test]
    fn test_perfect_play_completes_in_face_count_matches() {
        let mut rng = StdRng::seed_from_u64(99);
        let grid = TileGrid::build(4, 6, 12, &Layout::default(), &mut rng).unwrap();
        let mut s = MatchSession::new(grid, DEFAULT_PENALTY);

        for face in 1..=12u16 {
            let ids: Vec<usize> = s
                .grid()
                .tiles()
                .filter(|(_, t)| t.face() == FaceId(face))
                .map(|(id, _)| id.0)
                .collect();
            assert!(!s.is_complete());
            click(&mut s, ids[0]);
            click(&mut s, ids[1]);
            assert_eq!(s.grid().all_revealed(), s.is_complete());
        }

        assert!(s.is_complete());
        assert_eq!(s.matched_pairs(), 12);
    }
}
