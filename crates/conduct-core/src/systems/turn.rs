//! Turn Boundary System
//!
//! Runs once at the start of every player turn, before any attack of that
//! turn is resolved.

use bevy_ecs::prelude::*;

use crate::components::AttackConductTracker;
use crate::engine::GodConduct;

/// System: advance the turn counter and forget last turn's first hits
pub fn begin_player_turn(
    mut engine: ResMut<GodConduct>,
    mut tracker: ResMut<AttackConductTracker>,
) {
    engine.player.num_turns += 1;
    tracker.turn_start();
    tracing::trace!(turn = engine.player.num_turns, "player turn begins");
}

/// Schedule run at every turn boundary.
pub fn turn_schedule() -> Schedule {
    let mut schedule = Schedule::default();
    schedule.add_systems(begin_player_turn);
    schedule
}
