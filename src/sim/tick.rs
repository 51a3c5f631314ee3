//! Fixed timestep simulation tick
//!
//! One call to [`tick`] is one frame: queued commands first, then movement,
//! then pickups, then enemy hits.

use super::collision::apply_velocity_and_resolve;
use super::spawn::cull_bounds;
use super::state::{Command, GameEvent, GameState};
use super::world::EntityClass;

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Applied in order before the simulation step
    pub commands: Vec<Command>,
}

impl TickInput {
    pub fn new(commands: Vec<Command>) -> Self {
        Self { commands }
    }

    pub fn push(&mut self, command: Command) {
        self.commands.push(command);
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

/// Advance the game state by one frame
pub fn tick(state: &mut GameState, input: &TickInput) {
    for &command in &input.commands {
        state.apply(command);
    }

    // Nothing moves once the session has stopped
    if state.game_over {
        return;
    }

    state.time_ticks += 1;
    step(state);
}

/// The simulation step proper: advance, cull, coin test, enemy test
pub fn step(state: &mut GameState) {
    apply_velocity_and_resolve(&mut state.player, state.world.walls());
    state.world.advance();

    if let Some(margin) = state.tuning.enemy_cull_margin {
        let bounds = cull_bounds(margin);
        let count = state
            .world
            .retain(|e| e.class() != EntityClass::Enemy || e.rect.intersects(&bounds));
        if count > 0 {
            log::debug!("Culled {} enemies off screen", count);
            state.events.push(GameEvent::EnemiesCulled { count });
        }
    }

    collect_coins(state);
    check_enemy_hits(state);
}

/// Coin test runs before the enemy test every frame
fn collect_coins(state: &mut GameState) {
    let taken = state
        .world
        .take_overlapping(&state.player.rect, EntityClass::Coin);
    if taken.is_empty() {
        return;
    }

    state.score += 1;
    state.events.push(GameEvent::CoinCollected { score: state.score });
    state.spawn_coin();
}

fn check_enemy_hits(state: &mut GameState) {
    let hits = state
        .world
        .take_overlapping(&state.player.rect, EntityClass::Enemy);
    if hits.is_empty() {
        return;
    }

    let lost = state.score;
    state.best = state.best.max(lost);
    state.score = 0;
    log::info!(
        "Hit by {} enemy(s): score {} lost, best {}",
        hits.len(),
        lost,
        state.best
    );
    state.events.push(GameEvent::PlayerHit {
        lost,
        best: state.best,
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::sim::input::Direction;
    use crate::sim::rect::Rect;
    use crate::sim::state::GamePhase;
    use crate::sim::world::EntityKind;
    use crate::tuning::Tuning;
    use glam::Vec2;

    fn input(commands: &[Command]) -> TickInput {
        TickInput::new(commands.to_vec())
    }

    /// Replace the live coin with one `offset` px right of the player
    fn coin_ahead(state: &mut GameState, offset: f32) -> Rect {
        state.world.retain(|e| e.class() != EntityClass::Coin);
        let rect = Rect::square(
            Vec2::new(state.player.rect.right() + offset, state.player.rect.top() + 10.0),
            COIN_SIZE,
        );
        state.world.spawn(EntityKind::Coin, rect);
        rect
    }

    fn enemy_on_player(state: &mut GameState) {
        let rect = Rect::square(state.player.rect.center(), ENEMY_SIZE);
        state.world.spawn(
            EntityKind::Enemy {
                vel: Vec2::new(0.0, -ENEMY_SPEED),
            },
            rect,
        );
    }

    #[test]
    fn test_idle_tick_changes_nothing() {
        let mut state = GameState::new(12345, Tuning::default());
        let before = state.player.rect;
        tick(&mut state, &TickInput::default());
        assert_eq!(state.player.rect, before);
        assert_eq!(state.time_ticks, 1);
        assert_eq!(state.phase(), GamePhase::NotStarted);
    }

    #[test]
    fn test_coin_pickup_scores_once_and_respawns() {
        let mut state = GameState::new(12345, Tuning::default());
        let old = coin_ahead(&mut state, 1.0);
        tick(&mut state, &input(&[Command::Press(Direction::Right)]));

        assert_eq!(state.score, 1);
        let coins: Vec<_> = state.world.coins().collect();
        assert_eq!(coins.len(), 1);
        assert_ne!(coins[0].rect, old);
        assert!(!coins[0].rect.intersects(&state.player.rect));
        assert!(state.events.contains(&GameEvent::CoinCollected { score: 1 }));

        // the old coin is gone; standing still must not score again
        tick(&mut state, &input(&[Command::Release(Direction::Right)]));
        assert_eq!(state.score, 1);
    }

    #[test]
    fn test_two_overlapping_coins_score_one() {
        let mut state = GameState::new(12345, Tuning::default());
        let rect = coin_ahead(&mut state, 1.0);
        state.world.spawn(EntityKind::Coin, rect);
        tick(&mut state, &input(&[Command::Press(Direction::Right)]));
        assert_eq!(state.score, 1);
        assert_eq!(state.world.coins().count(), 1);
    }

    #[test]
    fn test_enemy_hit_resets_score_and_keeps_best() {
        let mut state = GameState::new(12345, Tuning::default());
        state.apply(Command::Press(Direction::Up));
        state.apply(Command::Release(Direction::Up));
        state.score = 4;
        state.best = 2;

        enemy_on_player(&mut state);
        enemy_on_player(&mut state);
        enemy_on_player(&mut state);
        tick(&mut state, &TickInput::default());

        assert_eq!(state.score, 0);
        assert_eq!(state.best, 4);
        assert_eq!(state.world.enemies().count(), 0);
        let hits = state
            .events
            .iter()
            .filter(|e| matches!(e, GameEvent::PlayerHit { .. }))
            .count();
        assert_eq!(hits, 1);
    }

    #[test]
    fn test_enemy_hit_never_lowers_best() {
        let mut state = GameState::new(12345, Tuning::default());
        state.score = 1;
        state.best = 9;
        enemy_on_player(&mut state);
        tick(&mut state, &TickInput::default());
        assert_eq!((state.score, state.best), (0, 9));
    }

    #[test]
    fn test_coin_then_enemy_same_frame() {
        let mut state = GameState::new(12345, Tuning::default());
        state.score = 2;
        coin_ahead(&mut state, 1.0);
        enemy_on_player(&mut state);
        tick(&mut state, &input(&[Command::Press(Direction::Right)]));
        // coin counted first, then lost with the rest
        assert_eq!(state.best, 3);
        assert_eq!(state.score, 0);
    }

    #[test]
    fn test_spawn_timer_before_start_does_nothing() {
        let mut state = GameState::new(12345, Tuning::default());
        tick(&mut state, &input(&[Command::SpawnEnemy, Command::SpawnEnemy]));
        assert_eq!(state.world.enemies().count(), 0);
    }

    #[test]
    fn test_spawned_enemy_is_live() {
        let mut state = GameState::new(12345, Tuning::default());
        tick(&mut state, &input(&[Command::Press(Direction::Up), Command::SpawnEnemy]));
        assert_eq!(state.world.enemies().count(), 1);
        assert!(
            state
                .events
                .iter()
                .any(|e| matches!(e, GameEvent::EnemySpawned { .. }))
        );
    }

    #[test]
    fn test_enemies_move_and_get_culled() {
        let mut state = GameState::new(12345, Tuning::default());
        // top-right corner, heading off screen, nowhere near the arena
        let id = state.world.spawn(
            EntityKind::Enemy {
                vel: Vec2::new(ENEMY_SPEED, 0.0),
            },
            Rect::square(Vec2::new(600.0, 20.0), ENEMY_SIZE),
        );

        tick(&mut state, &TickInput::default());
        let left = state.world.enemies().find(|e| e.id == id).map(|e| e.rect.left());
        assert_eq!(left, Some(605.0));

        let mut culled = false;
        for _ in 0..100 {
            tick(&mut state, &TickInput::default());
            culled |= state
                .drain_events()
                .any(|e| matches!(e, GameEvent::EnemiesCulled { count: 1 }));
        }
        assert!(culled);
        assert_eq!(state.world.enemies().count(), 0);
    }

    #[test]
    fn test_culling_disabled_keeps_enemies() {
        let tuning = Tuning {
            enemy_cull_margin: None,
            ..Tuning::default()
        };
        let mut state = GameState::new(12345, tuning);
        state.apply(Command::Press(Direction::Up));
        state.apply(Command::Release(Direction::Up));
        // far away from the player, heading further away
        state.world.spawn(
            EntityKind::Enemy {
                vel: Vec2::new(-ENEMY_SPEED, 0.0),
            },
            Rect::square(Vec2::new(5.0, 5.0), ENEMY_SIZE),
        );
        for _ in 0..500 {
            tick(&mut state, &TickInput::default());
        }
        assert_eq!(state.world.enemies().count(), 1);
    }

    #[test]
    fn test_quit_stops_simulation() {
        let mut state = GameState::new(12345, Tuning::default());
        tick(&mut state, &input(&[Command::Press(Direction::Right)]));
        let pos = state.player.rect.pos;
        tick(&mut state, &input(&[Command::Quit, Command::Press(Direction::Down)]));
        assert_eq!(state.phase(), GamePhase::Stopped);
        assert_eq!(state.player.rect.pos, pos);
        assert_eq!(state.time_ticks, 1);
    }

    #[test]
    fn test_determinism() {
        // Two states with same seed should produce identical results
        let mut state1 = GameState::new(99999, Tuning::default());
        let mut state2 = GameState::new(99999, Tuning::default());

        let inputs = [
            input(&[Command::Press(Direction::Right)]),
            input(&[Command::SpawnEnemy]),
            input(&[Command::Press(Direction::Up), Command::SpawnEnemy]),
            TickInput::default(),
            input(&[Command::Release(Direction::Right), Command::SpawnEnemy]),
        ];

        for _ in 0..20 {
            for input in &inputs {
                tick(&mut state1, input);
                tick(&mut state2, input);
            }
        }

        assert_eq!(state1.time_ticks, state2.time_ticks);
        assert_eq!(state1.player.rect, state2.player.rect);
        assert_eq!((state1.score, state1.best), (state2.score, state2.best));
        let rects1: Vec<_> = state1.world.iter().map(|e| e.rect).collect();
        let rects2: Vec<_> = state2.world.iter().map(|e| e.rect).collect();
        assert_eq!(rects1, rects2);
    }
}
