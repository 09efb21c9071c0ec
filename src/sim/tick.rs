//! Fixed timestep simulation tick
//!
//! One call advances the game by exactly one step. Sub-step order is
//! observable (it decides whether a hit or a pass lands first) and must not
//! be rearranged.

use super::collision::collides_with_field;
use super::obstacles::update_obstacles;
use super::score::{credit_passed, resolve_collision};
use super::state::{GameState, PlayerBody};
use crate::platform::{InputSource, Key, RandomSource};
use crate::settings::SimConfig;

/// Advance the game state by one fixed timestep
pub fn tick(
    mut state: GameState,
    config: &SimConfig,
    input: &impl InputSource,
    rng: &mut impl RandomSource,
) -> GameState {
    state.events.clear();

    // 1-2: fall, then stop on the floor
    apply_gravity(&mut state.player);
    clamp_to_floor(&mut state.player, config.screen_height);

    // 3: test against the field as it stood before this tick's scroll
    state.is_colliding = collides_with_field(
        &state.player.bounds,
        &state.top_obstacles,
        &state.bottom_obstacles,
    );

    // 4: the ceiling counts as a hit
    if clamp_to_ceiling(&mut state.player) {
        state.is_colliding = true;
    }

    // 5
    resolve_collision(&mut state);

    // 6-8: jump overrides velocity, gravity applies again, then move
    apply_jump(&mut state.player, input.is_pressed(Key::Jump));
    apply_gravity(&mut state.player);
    integrate(&mut state.player);

    // 9
    let update = update_obstacles(&mut state, config, rng);
    credit_passed(&mut state, update.passed);

    state.tick_count += 1;
    state
}

#[inline]
fn apply_gravity(player: &mut PlayerBody) {
    player.vertical_velocity += player.gravity_per_tick;
}

/// Snap onto the floor and kill velocity if below it
fn clamp_to_floor(player: &mut PlayerBody, screen_height: f32) {
    let floor = screen_height - player.bounds.height();
    if player.y() > floor {
        player.set_y(floor);
        player.vertical_velocity = 0.0;
    }
}

/// Snap to the top edge; returns true if the player was above it
fn clamp_to_ceiling(player: &mut PlayerBody) -> bool {
    if player.y() < 0.0 {
        player.set_y(0.0);
        true
    } else {
        false
    }
}

/// Jump replaces velocity outright; no grounded check, no cooldown
#[inline]
fn apply_jump(player: &mut PlayerBody, pressed: bool) {
    if pressed {
        player.vertical_velocity = player.jump_impulse;
    }
}

#[inline]
fn integrate(player: &mut PlayerBody) {
    let dy = player.vertical_velocity;
    player.bounds.pos.y += dy;
}
