//! Collision helpers for grid movement
//!
//! Movers are points in cell units. A move is legal when the destination lies
//! in a path cell; blocked diagonal moves degrade to a single axis.

use glam::Vec2;

use super::maze::Maze;

/// Outcome of a sliding move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideResult {
    /// Full move committed
    Moved,
    /// Only the X component committed
    SlidX,
    /// Only the Y component committed
    SlidY,
    /// Every option blocked; position unchanged
    Blocked,
}

/// Move `pos` by `delta`, sliding along walls.
///
/// Tries the full move, then X only, then Y only, committing the first that
/// lands outside a wall.
pub fn slide_move(maze: &Maze, pos: Vec2, delta: Vec2) -> (Vec2, SlideResult) {
    let target = pos + delta;
    if !maze.is_wall(target.x, target.y) {
        return (target, SlideResult::Moved);
    }
    if !maze.is_wall(target.x, pos.y) {
        return (Vec2::new(target.x, pos.y), SlideResult::SlidX);
    }
    if !maze.is_wall(pos.x, target.y) {
        return (Vec2::new(pos.x, target.y), SlideResult::SlidY);
    }
    (pos, SlideResult::Blocked)
}

/// True if two points are strictly closer than `radius`
#[inline]
pub fn within(a: Vec2, b: Vec2, radius: f32) -> bool {
    a.distance_squared(b) < radius * radius
}
