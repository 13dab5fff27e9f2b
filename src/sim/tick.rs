//! Fixed timestep physics update and the snap operation
//!
//! The per-tick order is fixed: advance angles, derive both tips, test the
//! enemy collision on this tick's positions, then apply the wall bounce. The
//! bounce nudge is a next-frame clearance correction, not a response to this
//! frame's collision, so it must come last.

use super::grid::PegGrid;
use super::state::{GameEvent, GamePhase, GameState};

/// Advance the simulation by one fixed timestep. No-op unless Playing.
pub fn tick(grid: &PegGrid, state: &mut GameState) {
    if state.phase != GamePhase::Playing {
        return;
    }
    state.frame_count += 1;

    let t = state.tuning;
    state.player.angle += t.angular_speed * state.player.spin_dir;
    state.enemy.angle += t.angular_speed * t.enemy_spin_scale * state.enemy.spin_dir;

    let player_tip = state.player.tip(grid, t.stick_len);
    let enemy_tip = state.enemy.tip(grid, t.stick_len);

    // Enemy collision, tip to tip
    if player_tip.distance_squared(enemy_tip) < t.enemy_hit_dist_sq {
        state.phase = GamePhase::Lost;
        state.events.push(GameEvent::Lost);
    }

    // Wall bounce: reverse spin, then nudge the angle in the new direction so
    // the tip clears the box next frame instead of oscillating at the edge
    if state.wall.contains_strict(player_tip) {
        state.player.spin_dir *= -1.0;
        state.player.angle += t.angular_speed * t.wall_bounce_kick * state.player.spin_dir;
    }
}

/// Snap the player tip to the nearest in-range peg.
///
/// Scans every peg except the current anchor with a strict less-than against
/// the squared snap radius, so equidistant candidates resolve to the lowest
/// index. On a match the stick re-anchors and points back toward the old
/// anchor, keeping the tip geometrically continuous. Out of range is a no-op.
///
/// Returns true when a re-anchor happened.
pub fn try_snap(grid: &PegGrid, state: &mut GameState) -> bool {
    if state.phase != GamePhase::Playing {
        return false;
    }

    let t = state.tuning;
    let tip = state.player.tip(grid, t.stick_len);

    let mut best: Option<usize> = None;
    let mut best_d2 = t.snap_dist_sq();
    for (i, peg) in grid.iter() {
        if i == state.player.anchor {
            continue;
        }
        let d2 = tip.distance_squared(peg.as_vec2());
        if d2 < best_d2 {
            best_d2 = d2;
            best = Some(i);
        }
    }

    let Some(best) = best else {
        return false;
    };

    let old_anchor = grid.pos(state.player.anchor);
    state.player.anchor = best;
    let to_old = old_anchor - grid.pos(best);
    state.player.angle = to_old.y.atan2(to_old.x);
    state.events.push(GameEvent::Snapped { peg: best });

    if best == state.goal_idx {
        state.phase = GamePhase::Won;
        let elapsed = state.started_at.elapsed().as_secs_f32();
        state.final_elapsed = Some(elapsed);
        state.events.push(GameEvent::Won { elapsed });
    }
    true
}
