//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Stable peg iteration order (row-major, by index)
//! - No rendering, input, or platform dependencies

pub mod grid;
pub mod level;
pub mod state;
pub mod tick;

pub use grid::PegGrid;
pub use level::{LevelDescriptor, LevelResolver, Rect};
pub use state::{GameEvent, GamePhase, GameState, Stick};
pub use tick::{tick, try_snap};
