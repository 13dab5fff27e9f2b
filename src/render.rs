//! Presentation adapter contract
//!
//! The simulation never draws; it exposes state, and `compose_frame` turns a
//! consistent snapshot into backend-neutral draw primitives. Screen-space
//! clamping of stick tips happens here and only here - the simulation's
//! collision and snap math always uses unclamped positions.

use glam::{IVec2, Vec2};

use crate::consts::{SCREEN_H, SCREEN_W};
use crate::sim::{GameState, PegGrid, Rect};

/// Backend-neutral draw primitives, in paint order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawOp {
    /// Single peg dot
    Dot { pos: IVec2 },
    /// Outline circle (anchors, goal ring)
    Circle { center: IVec2, radius: i32 },
    /// Filled circle (enemy anchor)
    Disc { center: IVec2, radius: i32 },
    /// Stick line; weight 2 renders the player stick thicker
    Line { from: IVec2, to: IVec2, weight: u32 },
    /// Filled wall rectangle
    FillRect { rect: Rect },
    /// Goal peg decoration
    GoalMarker { center: IVec2 },
    /// Centered end-of-session text
    Banner {
        title: String,
        subtitle: Option<String>,
    },
}

/// Consumes composed frames. Implementations never touch the game state.
pub trait Presenter {
    fn present(&mut self, frame: &[DrawOp]);
}

/// Swallows every frame; for tests and headless runs
#[derive(Debug, Default)]
pub struct NullPresenter;

impl Presenter for NullPresenter {
    fn present(&mut self, _frame: &[DrawOp]) {}
}

/// Clamp a derived tip position to the visible screen
fn clamp_to_screen(p: Vec2) -> IVec2 {
    IVec2::new(
        (p.x as i32).clamp(0, SCREEN_W - 1),
        (p.y as i32).clamp(0, SCREEN_H - 1),
    )
}

/// Compose one frame from a state snapshot.
///
/// Terminal phases yield only a centered banner (frozen frame); otherwise the
/// peg dots, goal marker, wall, and both sticks are emitted in paint order.
pub fn compose_frame(grid: &PegGrid, state: &GameState) -> Vec<DrawOp> {
    let mut ops = Vec::new();

    if state.won() {
        let elapsed = state.final_elapsed.unwrap_or(0.0);
        ops.push(DrawOp::Banner {
            title: "LEVEL COMPLETE".into(),
            subtitle: Some(format!("TIME: {elapsed:.2}s")),
        });
        return ops;
    }
    if state.lost() {
        ops.push(DrawOp::Banner {
            title: "FAIL - TRY AGAIN".into(),
            subtitle: None,
        });
        return ops;
    }

    for (_, peg) in grid.iter() {
        ops.push(DrawOp::Dot { pos: peg });
    }

    ops.push(DrawOp::GoalMarker {
        center: grid.peg(state.goal_idx),
    });

    ops.push(DrawOp::FillRect { rect: state.wall });

    let len = state.tuning.stick_len;

    // Enemy: thin line from anchor to clamped tip, filled anchor disc
    let enemy_anchor = grid.peg(state.enemy.anchor);
    ops.push(DrawOp::Line {
        from: enemy_anchor,
        to: clamp_to_screen(state.enemy.tip(grid, len)),
        weight: 1,
    });
    ops.push(DrawOp::Disc {
        center: enemy_anchor,
        radius: 2,
    });

    // Player: thicker line, open anchor circle
    let player_anchor = grid.peg(state.player.anchor);
    ops.push(DrawOp::Line {
        from: player_anchor,
        to: clamp_to_screen(state.player.tip(grid, len)),
        weight: 2,
    });
    ops.push(DrawOp::Circle {
        center: player_anchor,
        radius: 4,
    });

    ops
}
