//! Data-driven gameplay balance
//!
//! Defaults match the shipped game exactly; a JSON file can override them
//! without a rebuild. Loaded once at startup, copied into the game state so
//! the simulation never touches the filesystem.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Gameplay constants for one session
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Stick length from anchor to tip, pixels
    pub stick_len: f32,
    /// Player angular speed per tick, radians
    pub angular_speed: f32,
    /// Enemy spin speed as a fraction of the player's
    pub enemy_spin_scale: f32,
    /// Snap search radius, pixels
    pub snap_dist: f32,
    /// Squared tip-to-tip distance that counts as an enemy hit
    pub enemy_hit_dist_sq: f32,
    /// Post-bounce angle nudge, in multiples of the angular speed
    pub wall_bounce_kick: f32,
    /// Fixed timestep of the session loop, milliseconds
    pub tick_ms: u64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            stick_len: STICK_LEN,
            angular_speed: ANG_SPEED,
            enemy_spin_scale: ENEMY_SPIN_SCALE,
            snap_dist: SNAP_DIST,
            enemy_hit_dist_sq: ENEMY_HIT_DIST_SQ,
            wall_bounce_kick: WALL_BOUNCE_KICK,
            tick_ms: TICK_MS,
        }
    }
}

impl Tuning {
    /// Squared snap radius used by the nearest-peg search
    #[inline]
    pub fn snap_dist_sq(&self) -> f32 {
        self.snap_dist * self.snap_dist
    }

    /// Load tuning from a JSON file, falling back to defaults on any failure
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(tuning) => {
                    log::info!("loaded tuning from {}", path.display());
                    tuning
                }
                Err(err) => {
                    log::error!("bad tuning file {}: {err}", path.display());
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("no tuning file at {}, using defaults", path.display());
                Self::default()
            }
        }
    }
}
