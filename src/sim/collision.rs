//! Player movement against the arena walls
//!
//! Movement is resolved one axis at a time, X before Y, so each pass knows
//! which wall face was crossed.

use super::input::Axis;
use super::rect::Rect;
use super::state::Player;

/// Move the player by its velocity and push it out of any wall it entered
pub fn apply_velocity_and_resolve<'a, I>(player: &mut Player, walls: I)
where
    I: IntoIterator<Item = &'a Rect> + Clone,
{
    resolve_axis(player, walls.clone(), Axis::X);
    resolve_axis(player, walls, Axis::Y);
    player.finish_step();
}

/// Move along one axis, then clamp against every wall hit.
///
/// Hits are gathered from the moved position before any correction; with
/// several hits the last one wins.
fn resolve_axis<'a, I>(player: &mut Player, walls: I, axis: Axis) -> bool
where
    I: IntoIterator<Item = &'a Rect>,
{
    let delta = axis.of(player.velocity());
    if delta == 0.0 {
        return false;
    }

    player.rect.translate(axis.unit() * delta);
    player.record_travel(delta);

    let moved = player.rect;
    let clearance = player.wall_clearance();
    let mut hit = false;
    for wall in walls.into_iter().filter(|w| moved.intersects(w)) {
        match (axis, delta > 0.0) {
            (Axis::X, true) => player.rect.set_right(wall.left() - clearance),
            (Axis::X, false) => player.rect.set_left(wall.right() + clearance),
            (Axis::Y, true) => player.rect.set_bottom(wall.top() - clearance),
            (Axis::Y, false) => player.rect.set_top(wall.bottom() + clearance),
        }
        hit = true;
    }

    if hit {
        player.on_wall_hit(axis);
    }
    hit
}
