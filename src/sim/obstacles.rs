//! Obstacle lifecycle: spawn on a timer, scroll left, cull off-screen pairs
//!
//! Pairs are appended at the tail and scrolled in lock-step, so both
//! sequences stay ordered oldest (leftmost) first and culling only ever
//! removes from the head.

use super::geometry::Aabb;
use super::state::{GameEvent, GameState, Obstacle};
use crate::platform::RandomSource;
use crate::settings::SimConfig;

/// Outcome of one obstacle pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ObstacleUpdate {
    /// A new pair entered this tick
    pub spawned: bool,
    /// Pairs culled this tick (bottom sequence count delta)
    pub passed: u32,
}

/// Spawn, scroll and cull for one tick
pub fn update_obstacles(
    state: &mut GameState,
    config: &SimConfig,
    rng: &mut impl RandomSource,
) -> ObstacleUpdate {
    let spawned = tick_spawn_timer(state, config, rng);
    scroll(state);
    let passed = cull(state, config.cull_margin);

    if spawned {
        state.events.push(GameEvent::PairSpawned);
    }
    if passed > 0 {
        state.events.push(GameEvent::ObstaclesPassed { count: passed });
    }

    ObstacleUpdate { spawned, passed }
}

/// Advance the spawn timer by one tick and spawn at most one pair.
/// Overshoot past the interval is discarded, not carried.
fn tick_spawn_timer(
    state: &mut GameState,
    config: &SimConfig,
    rng: &mut impl RandomSource,
) -> bool {
    state.spawn_timer_ms = state
        .spawn_timer_ms
        .saturating_add(config.tick_size_ms() as u32);
    if state.spawn_timer_ms < state.spawn_interval_ms {
        return false;
    }

    spawn_pair(state, config, rng);
    state.spawn_timer_ms = 0;
    true
}

/// Append one top/bottom pair at the right screen edge
pub fn spawn_pair(state: &mut GameState, config: &SimConfig, rng: &mut impl RandomSource) {
    let (offset_lo, offset_hi) = config.gap_offset_range;
    let (gap_lo, gap_hi) = config.gap_height_range;
    let gap_offset = rng.next_int(offset_lo, offset_hi) as f32;
    let gap_height = rng.next_int(gap_lo, gap_hi) as f32;

    let h = config.screen_height;
    let x = config.screen_width;
    let w = config.obstacle_width;

    state
        .bottom_obstacles
        .push_back(Obstacle::bottom(Aabb::new(x, h - gap_offset, w, gap_offset)));
    state
        .top_obstacles
        .push_back(Obstacle::top(Aabb::new(x, 0.0, w, h - (gap_offset + gap_height))));

    log::debug!(
        "Spawned pair at x={x}: gap {gap_height} px, {gap_offset} px off the floor ({} live)",
        state.pair_count()
    );
}

/// Move every obstacle left by the scroll speed
pub fn scroll(state: &mut GameState) {
    let dx = state.scroll_speed;
    for obstacle in state
        .top_obstacles
        .iter_mut()
        .chain(state.bottom_obstacles.iter_mut())
    {
        obstacle.bounds.pos.x -= dx;
    }
}

/// Drop pairs whose right edge is at or past `-margin`. Returns how many bottom
/// obstacles were removed; each passed gap is credited once.
pub fn cull(state: &mut GameState, margin: f32) -> u32 {
    let before = state.bottom_obstacles.len();

    while state
        .bottom_obstacles
        .front()
        .is_some_and(|bottom| bottom.is_offscreen(margin))
    {
        state.bottom_obstacles.pop_front();
        state.top_obstacles.pop_front();
    }

    (before - state.bottom_obstacles.len()) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::SequenceRandom;
    use crate::sim::ObstacleKind;

    fn state_with_pairs(xs: &[f32]) -> GameState {
        let mut state = GameState::new(&SimConfig::default(), 0);
        for &x in xs {
            state.top_obstacles.push_back(Obstacle::top(Aabb::new(x, 0.0, 100.0, 200.0)));
            state.bottom_obstacles.push_back(Obstacle::bottom(Aabb::new(x, 500.0, 100.0, 220.0)));
        }
        state
    }

    #[test]
    fn test_spawn_geometry() {
        let config = SimConfig::default();
        let mut state = GameState::new(&config, 0);
        let mut rng = SequenceRandom::new(vec![150, 250]);

        spawn_pair(&mut state, &config, &mut rng);

        let top = state.top_obstacles[0];
        let bottom = state.bottom_obstacles[0];
        assert_eq!(top.kind, ObstacleKind::Top);
        assert_eq!(bottom.kind, ObstacleKind::Bottom);

        assert_eq!(bottom.bounds, Aabb::new(1280.0, 720.0 - 150.0, 100.0, 150.0));
        assert_eq!(top.bounds, Aabb::new(1280.0, 0.0, 100.0, 720.0 - 400.0));
        // Gap between them is exactly the drawn height
        assert_eq!(bottom.bounds.y() - top.bounds.bottom(), 250.0);
    }

    #[test]
    fn test_spawn_timer_triggers_at_interval() {
        let config = SimConfig::default();
        let mut state = GameState::new(&config, 0);
        let mut rng = SequenceRandom::new(vec![200, 220]);
        state.spawn_timer_ms = config.spawn_interval_ms - 16;

        let update = update_obstacles(&mut state, &config, &mut rng);
        assert!(update.spawned);
        assert_eq!(state.spawn_timer_ms, 0);
        assert_eq!(state.pair_count(), 1);
        assert_eq!(state.events, vec![GameEvent::PairSpawned]);
    }

    #[test]
    fn test_overshoot_spawns_once() {
        let config = SimConfig::default();
        let mut state = GameState::new(&config, 0);
        let mut rng = SequenceRandom::new(vec![200, 220]);
        state.spawn_timer_ms = config.spawn_interval_ms * 5;

        update_obstacles(&mut state, &config, &mut rng);
        assert_eq!(state.pair_count(), 1);
        assert_eq!(state.spawn_timer_ms, 0);

        // Overshoot was discarded, nothing carried into the next tick
        let update = update_obstacles(&mut state, &config, &mut rng);
        assert!(!update.spawned);
        assert_eq!(state.pair_count(), 1);
        assert_eq!(state.spawn_timer_ms, 16);
    }

    #[test]
    fn test_spawned_pair_scrolls_same_tick() {
        let config = SimConfig::default();
        let mut state = GameState::new(&config, 0);
        let mut rng = SequenceRandom::new(vec![200, 220]);
        state.spawn_timer_ms = config.spawn_interval_ms;

        update_obstacles(&mut state, &config, &mut rng);
        assert_eq!(state.top_obstacles[0].bounds.x(), config.screen_width - config.scroll_speed);
        assert_eq!(state.bottom_obstacles[0].bounds.x(), config.screen_width - config.scroll_speed);
    }

    #[test]
    fn test_scroll_moves_all() {
        let mut state = state_with_pairs(&[10.0, 400.0]);
        state.scroll_speed = 3.0;
        scroll(&mut state);
        let xs: Vec<f32> = state.obstacles().map(|o| o.bounds.x()).collect();
        assert_eq!(xs, vec![7.0, 397.0, 7.0, 397.0]);
    }

    #[test]
    fn test_cull_boundary() {
        // Right edges: -100 (culled), -99 (kept), 300 (kept)
        let mut state = state_with_pairs(&[-200.0, -199.0, 200.0]);
        let passed = cull(&mut state, 100.0);
        assert_eq!(passed, 1);
        assert_eq!(state.top_obstacles.len(), 2);
        assert_eq!(state.bottom_obstacles.len(), 2);
        assert_eq!(state.bottom_obstacles[0].bounds.x(), -199.0);
        assert_eq!(state.top_obstacles[0].bounds.x(), -199.0);
    }

    #[test]
    fn test_cull_multiple_pairs_counts_bottoms_only() {
        let mut state = state_with_pairs(&[-500.0, -300.0, 0.0]);
        let passed = cull(&mut state, 100.0);
        assert_eq!(passed, 2);
        assert_eq!(state.pair_count(), 1);
        assert_eq!(state.top_obstacles.len(), state.bottom_obstacles.len());
    }

    #[test]
    fn test_update_reports_passed_event() {
        let config = SimConfig::default();
        let mut state = state_with_pairs(&[-198.0]);
        let mut rng = SequenceRandom::new(vec![]);
        let update = update_obstacles(&mut state, &config, &mut rng);
        assert_eq!(update.passed, 1);
        assert_eq!(state.events, vec![GameEvent::ObstaclesPassed { count: 1 }]);
    }
}
