//! Game session controller
//!
//! Owns the shared game state behind a single coarse mutex. The fixed-delay
//! loop thread calls [`Session::tick`]; the host's input dispatch calls
//! [`Session::handle_input`] from its own thread. Each holds the lock for the
//! full tick or input handler, and the presenter reads its frame under the
//! same lock, so a redraw never observes a half-updated state.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::haptics::Haptics;
use crate::render::{DrawOp, Presenter, compose_frame};
use crate::sim::{self, GameEvent, GameState, LevelResolver, PegGrid};
use crate::tuning::Tuning;

/// Discrete press events from the input surface. Repeats and releases are
/// filtered out by the producer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerInput {
    /// Reverse the spin direction
    SpinLeft,
    /// Reverse the spin direction (left and right act identically)
    SpinRight,
    /// Snap the tip to the nearest in-range peg
    Snap,
    /// End the session
    Quit,
}

/// One game session: grid, resolver, shared state, effect sink
pub struct Session {
    grid: PegGrid,
    resolver: LevelResolver,
    state: Mutex<GameState>,
    haptics: Arc<dyn Haptics>,
}

impl Session {
    pub fn new(
        grid: PegGrid,
        resolver: LevelResolver,
        tuning: Tuning,
        haptics: Arc<dyn Haptics>,
    ) -> Self {
        let level = resolver.resolve(&grid);
        let state = GameState::new(&level, tuning);
        Self {
            grid,
            resolver,
            state: Mutex::new(state),
            haptics,
        }
    }

    pub fn grid(&self) -> &PegGrid {
        &self.grid
    }

    /// Read a consistent snapshot of the state under the lock
    pub fn with_state<R>(&self, f: impl FnOnce(&GameState) -> R) -> R {
        let state = self.state.lock().expect("state lock poisoned");
        f(&state)
    }

    /// Handle one press event. While the session is terminal any input
    /// triggers a full replay reset instead of its normal effect; Quit always
    /// ends the session on top of that.
    pub fn handle_input(&self, input: PlayerInput) {
        let mut state = self.state.lock().expect("state lock poisoned");
        if state.is_terminal() {
            self.reset_locked(&mut state);
        } else {
            match input {
                PlayerInput::SpinLeft | PlayerInput::SpinRight => {
                    state.player.spin_dir *= -1.0;
                }
                PlayerInput::Snap => {
                    sim::try_snap(&self.grid, &mut state);
                }
                PlayerInput::Quit => {}
            }
        }
        if input == PlayerInput::Quit {
            state.running = false;
        }
        self.dispatch_events(&mut state);
    }

    /// Advance one fixed timestep
    pub fn tick(&self) {
        let mut state = self.state.lock().expect("state lock poisoned");
        sim::tick(&self.grid, &mut state);
        self.dispatch_events(&mut state);
    }

    /// Rebuild the state for a replay, re-reading the level descriptor
    pub fn reset(&self) {
        let mut state = self.state.lock().expect("state lock poisoned");
        self.reset_locked(&mut state);
    }

    fn reset_locked(&self, state: &mut GameState) {
        let level = self.resolver.resolve(&self.grid);
        state.reset(&level);
        log::info!(
            "session reset (goal {}, enemy {})",
            level.goal_idx,
            level.enemy_idx
        );
    }

    /// Forward drained simulation events to the effect sink. Winning is
    /// silent; the original defines a richer win sequence but never plays it.
    fn dispatch_events(&self, state: &mut GameState) {
        for event in state.drain_events() {
            match event {
                GameEvent::Snapped { peg } => {
                    log::debug!("snapped onto peg {peg}");
                    self.haptics.snap();
                }
                GameEvent::Lost => {
                    log::info!("session lost");
                    self.haptics.error();
                }
                GameEvent::Won { elapsed } => {
                    log::info!("session won in {elapsed:.2}s");
                }
            }
        }
    }

    /// Compose the current frame under the lock
    pub fn frame(&self) -> Vec<DrawOp> {
        let state = self.state.lock().expect("state lock poisoned");
        compose_frame(&self.grid, &state)
    }

    /// True until the cancel input is observed
    pub fn is_running(&self) -> bool {
        self.state.lock().expect("state lock poisoned").running
    }

    /// Fixed-delay session loop: tick, present, sleep. The termination flag
    /// is checked at the top of each iteration, never mid-tick.
    pub fn run(&self, presenter: &mut dyn Presenter) {
        let tick_delay = {
            let state = self.state.lock().expect("state lock poisoned");
            Duration::from_millis(state.tuning.tick_ms)
        };
        loop {
            if !self.is_running() {
                break;
            }
            self.tick();
            let frame = self.frame();
            presenter.present(&frame);
            std::thread::sleep(tick_delay);
        }
        log::info!("session loop exited");
    }
}
