//! Game state and core simulation types
//!
//! The stick's tip is never stored: it is derived from the anchor peg, the
//! stick length, and the angle every time it is needed. The angle is the only
//! persisted kinematic quantity, so anchor and tip can never drift apart
//! after a re-anchor.

use std::time::Instant;

use glam::Vec2;

use super::grid::PegGrid;
use super::level::{LevelDescriptor, Rect};
use crate::polar_to_cartesian;
use crate::tuning::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Anchored on the goal peg (terminal until reset)
    Won,
    /// Enemy tip collision (terminal until reset)
    Lost,
}

/// A rotating stick pivoting around a peg
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stick {
    /// Peg index the stick pivots around; always valid for the live grid
    pub anchor: usize,
    /// Current angle in radians
    pub angle: f32,
    /// Spin direction, +1.0 or -1.0
    pub spin_dir: f32,
}

impl Stick {
    pub fn new(anchor: usize) -> Self {
        Self {
            anchor,
            angle: 0.0,
            spin_dir: 1.0,
        }
    }

    /// Free-tip position, derived from the anchor peg and the angle
    #[inline]
    pub fn tip(&self, grid: &PegGrid, len: f32) -> Vec2 {
        grid.pos(self.anchor) + polar_to_cartesian(len, self.angle)
    }
}

/// Side effects requested by the simulation, consumed by the session
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    /// Player re-anchored onto `peg`
    Snapped { peg: usize },
    /// Session ended on the goal peg
    Won { elapsed: f32 },
    /// Enemy tip collision
    Lost,
}

/// Complete session state, guarded by the session mutex
#[derive(Debug, Clone)]
pub struct GameState {
    /// Cleared by the cancel input; the session loop exits when false
    pub running: bool,
    pub phase: GamePhase,
    pub frame_count: u64,
    /// Wall-clock start of the current attempt
    pub started_at: Instant,
    /// Completion time in seconds, set exactly once at the win transition
    pub final_elapsed: Option<f32>,
    pub player: Stick,
    pub enemy: Stick,
    pub goal_idx: usize,
    pub wall: Rect,
    pub tuning: Tuning,
    /// Pending side effects, drained by the session after each mutation
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Build a fresh state from a resolved level descriptor
    pub fn new(level: &LevelDescriptor, tuning: Tuning) -> Self {
        let mut enemy = Stick::new(level.enemy_idx);
        // enemy rotates counter to the player
        enemy.spin_dir = -1.0;
        Self {
            running: true,
            phase: GamePhase::Playing,
            frame_count: 0,
            started_at: Instant::now(),
            final_elapsed: None,
            player: Stick::new(0),
            enemy,
            goal_idx: level.goal_idx,
            wall: level.wall,
            tuning,
            events: Vec::new(),
        }
    }

    /// Full reset for a replay: every field goes back to its starting value
    /// and the freshly resolved level descriptor is installed.
    pub fn reset(&mut self, level: &LevelDescriptor) {
        let running = self.running;
        let tuning = self.tuning;
        *self = Self::new(level, tuning);
        self.running = running;
    }

    #[inline]
    pub fn won(&self) -> bool {
        self.phase == GamePhase::Won
    }

    #[inline]
    pub fn lost(&self) -> bool {
        self.phase == GamePhase::Lost
    }

    /// True once the session has ended in a win or a loss
    #[inline]
    pub fn is_terminal(&self) -> bool {
        self.phase != GamePhase::Playing
    }

    /// Take the pending side effects, leaving the queue empty
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::grid::PegGrid;

    fn playing_state() -> (PegGrid, GameState) {
        let grid = PegGrid::standard();
        let level = LevelDescriptor::default_for(&grid);
        let state = GameState::new(&level, Tuning::default());
        (grid, state)
    }

    #[test]
    fn new_state_starts_playing_at_origin_peg() {
        let (_, state) = playing_state();
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.frame_count, 0);
        assert_eq!(state.player.anchor, 0);
        assert_eq!(state.player.angle, 0.0);
        assert_eq!(state.player.spin_dir, 1.0);
        assert_eq!(state.enemy.anchor, 25);
        assert_eq!(state.goal_idx, 49);
        assert!(state.final_elapsed.is_none());
    }

    #[test]
    fn tip_is_derived_from_anchor_and_angle() {
        let (grid, state) = playing_state();
        let tip = state.player.tip(&grid, 10.0);
        // Anchor 0 sits at (4, 4); angle 0 points along +x
        assert!((tip.x - 14.0).abs() < 1e-5);
        assert!((tip.y - 4.0).abs() < 1e-5);
    }

    #[test]
    fn reset_restores_starting_values() {
        let (grid, mut state) = playing_state();
        state.phase = GamePhase::Lost;
        state.frame_count = 120;
        state.player.anchor = 7;
        state.final_elapsed = Some(3.5);

        let level = LevelDescriptor::default_for(&grid);
        state.reset(&level);

        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.frame_count, 0);
        assert_eq!(state.player.anchor, 0);
        assert!(state.final_elapsed.is_none());
        assert!(state.running);
    }

    #[test]
    fn reset_installs_the_new_descriptor() {
        let (grid, mut state) = playing_state();
        let level = LevelDescriptor {
            goal_idx: 7,
            enemy_idx: 30,
            wall: Rect::new(10, 10, 5, 5),
        };
        state.reset(&level);
        assert_eq!(state.goal_idx, 7);
        assert_eq!(state.enemy.anchor, 30);
        assert_eq!(state.wall, Rect::new(10, 10, 5, 5));
        let _ = grid;
    }
}
