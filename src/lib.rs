//! Peg Snap - a peg-lattice stick-snapping arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (peg grid, level descriptor, physics, snap)
//! - `session`: Fixed-timestep game loop and input handling around a shared state lock
//! - `render`: Presentation adapter contract (frame composition into draw primitives)
//! - `haptics`: Snap/error notification side effects
//! - `levelgen`: Random level construction and binary record encoding
//! - `tuning`: Data-driven gameplay balance

pub mod haptics;
pub mod levelgen;
pub mod render;
pub mod session;
pub mod sim;
pub mod tuning;

pub use session::{PlayerInput, Session};
pub use tuning::Tuning;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Playfield width in pixels
    pub const SCREEN_W: i32 = 128;
    /// Playfield height in pixels
    pub const SCREEN_H: i32 = 64;

    /// Horizontal and vertical peg pitch
    pub const PEG_SPACING: i32 = 13;
    /// Lattice inset from the screen edges
    pub const PEG_MARGIN: i32 = 4;
    /// Fixed lattice row count
    pub const PEG_ROWS: usize = 5;

    /// Stick length from anchor to tip, pixels
    pub const STICK_LEN: f32 = 10.0;
    /// Angular speed per tick, radians
    pub const ANG_SPEED: f32 = 0.06;
    /// Enemy spin speed as a fraction of the player's
    pub const ENEMY_SPIN_SCALE: f32 = 0.7;
    /// Snap search radius, pixels
    pub const SNAP_DIST: f32 = 5.0;
    /// Squared tip-to-tip distance that counts as an enemy hit
    pub const ENEMY_HIT_DIST_SQ: f32 = 12.0;
    /// Post-bounce angle nudge, in multiples of the angular speed
    pub const WALL_BOUNCE_KICK: f32 = 2.1;
    /// Fixed simulation timestep in milliseconds
    pub const TICK_MS: u64 = 30;

    /// Sentinel at the head of every level override record
    pub const LEVEL_MAGIC: u32 = 0xDEAD_C0DE;
    /// Default level file path, relative to the working directory
    pub const LEVEL_FILE: &str = "level.bin";
}

/// Normalize angle to [-π, π)
#[inline]
pub fn normalize_angle(mut angle: f32) -> f32 {
    use std::f32::consts::PI;
    while angle >= PI {
        angle -= 2.0 * PI;
    }
    while angle < -PI {
        angle += 2.0 * PI;
    }
    angle
}

/// Convert polar (r, theta) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f32, theta: f32) -> Vec2 {
    Vec2::new(r * theta.cos(), r * theta.sin())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn normalize_angle_stays_in_range(angle in -100.0f32..100.0) {
            let n = normalize_angle(angle);
            prop_assert!(n >= -std::f32::consts::PI);
            prop_assert!(n < std::f32::consts::PI);
        }

        #[test]
        fn polar_preserves_radius(r in 0.1f32..500.0, theta in -3.0f32..3.0) {
            let v = polar_to_cartesian(r, theta);
            prop_assert!((v.length() - r).abs() < r * 1e-4 + 1e-3);
        }
    }
}
