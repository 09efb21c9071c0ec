//! Player vs obstacle field collision

use std::collections::VecDeque;

use super::geometry::{Aabb, intersects};
use super::state::Obstacle;

/// True if `player` touches any obstacle in either sequence.
/// Stops at the first hit.
pub fn collides_with_field(
    player: &Aabb,
    top: &VecDeque<Obstacle>,
    bottom: &VecDeque<Obstacle>,
) -> bool {
    top.iter()
        .chain(bottom.iter())
        .any(|obstacle| intersects(player, &obstacle.bounds))
}
