//! Difficulty-tiered enemy spawner
//!
//! A tier index advances every `DIFFICULTY_PERIOD` frames and selects a spawn
//! policy: one or two enemy-type generators checked against `time % interval`
//! with phase offsets so interleaved generators alternate. Frame 0 never
//! spawns. Spawn parameters are drawn from the state-owned RNG.

use glam::Vec2;
use rand::Rng;

use crate::consts::*;

use super::state::{Enemy, GameEvent, GameState};

/// Enemy type a generator produces
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpawnKind {
    Simple,
    Aiming,
    AimingShotgun,
}

/// Generators due on this frame for the given tier.
///
/// Pure schedule lookup; the randomized parameters are applied by
/// `run_spawner`. Tiers past the table saturate at the last row.
pub fn due_spawns(tier: u32, time: u64) -> Vec<SpawnKind> {
    let mut due = Vec::new();
    // The very first frame of a match never spawns
    if time == 0 {
        return due;
    }
    let at = |interval: u64, phase: u64| (time + phase) % interval == 0;
    match tier {
        0 => {
            if at(SPAWN_INTERVAL, 0) {
                due.push(SpawnKind::Simple);
            }
        }
        1 => {
            if at(FAST_SPAWN_INTERVAL, 0) {
                due.push(SpawnKind::Simple);
            }
        }
        2 => {
            if at(SPAWN_INTERVAL, 0) {
                due.push(SpawnKind::Aiming);
            }
        }
        3 => {
            if at(SPAWN_INTERVAL, 0) {
                due.push(SpawnKind::Aiming);
            }
            if at(SPAWN_INTERVAL, SPAWN_PHASE_OFFSET) {
                due.push(SpawnKind::Simple);
            }
        }
        4 => {
            if at(SPAWN_INTERVAL, 0) {
                due.push(SpawnKind::AimingShotgun);
            }
        }
        _ => {
            if at(SPAWN_INTERVAL, 0) {
                due.push(SpawnKind::AimingShotgun);
            }
            if at(SPAWN_INTERVAL, SPAWN_PHASE_OFFSET) {
                due.push(SpawnKind::Simple);
            }
        }
    }
    due
}

/// Evaluate this frame's spawn policy and materialize the due enemies
pub fn run_spawner(state: &mut GameState) {
    for kind in due_spawns(state.difficulty, state.time) {
        spawn(state, kind);
    }
}

fn spawn(state: &mut GameState, kind: SpawnKind) {
    let (w, h) = (state.arena.width, state.arena.height);
    // Off the right edge, somewhere in the middle 80% of the height
    let y = state.rng.random_range(0.1 * h..0.9 * h);
    let pos = Vec2::new(w + SPAWN_X_OVERHANG, y);
    let id = state.next_entity_id();

    let enemy = match kind {
        SpawnKind::Simple => {
            // Narrow cone around due left
            let angle = std::f32::consts::PI
                + state
                    .rng
                    .random_range(-SPAWN_CONE_HALF_ANGLE..SPAWN_CONE_HALF_ANGLE);
            let speed = state.rng.random_range(SPAWN_SPEED_MIN..SPAWN_SPEED_MAX);
            Enemy::simple(id, pos, Vec2::from_angle(angle) * speed)
        }
        SpawnKind::Aiming => {
            let target = aim_target(state, w, y);
            Enemy::aiming(id, pos, target)
        }
        SpawnKind::AimingShotgun => {
            let target = aim_target(state, w, y);
            Enemy::aiming_shotgun(id, pos, target)
        }
    };

    log::debug!(
        "spawn {:?} #{id} at ({:.0}, {:.0}), tier {}",
        kind,
        pos.x,
        pos.y,
        state.difficulty
    );
    state.enemies.push(enemy);
}

/// Horizontal-only approach: the target keeps the spawn row
fn aim_target(state: &mut GameState, w: f32, y: f32) -> Vec2 {
    let x = w * state.rng.random_range(TARGET_X_MIN_FRAC..TARGET_X_MAX_FRAC);
    Vec2::new(x, y)
}

/// Advance the difficulty countdown; the tier only ever goes up.
pub fn advance_difficulty(state: &mut GameState) {
    state.difficulty_timer -= 1;
    if state.difficulty_timer == 0 {
        state.difficulty += 1;
        state.difficulty_timer = DIFFICULTY_PERIOD;
        state.events.push(GameEvent::DifficultyRaised {
            tier: state.difficulty,
        });
        log::info!("difficulty tier {}", state.difficulty);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::Arena;

    #[test]
    fn test_frame_zero_never_spawns() {
        for tier in 0..8 {
            assert!(due_spawns(tier, 0).is_empty());
        }
    }

    #[test]
    fn test_tier0_simple_every_90() {
        assert_eq!(due_spawns(0, 90), vec![SpawnKind::Simple]);
        assert_eq!(due_spawns(0, 180), vec![SpawnKind::Simple]);
        assert!(due_spawns(0, 45).is_empty());
        assert!(due_spawns(0, 91).is_empty());
    }

    #[test]
    fn test_tier1_doubles_the_rate() {
        assert_eq!(due_spawns(1, 45), vec![SpawnKind::Simple]);
        assert_eq!(due_spawns(1, 90), vec![SpawnKind::Simple]);
    }

    #[test]
    fn test_tier3_interleaves_generators() {
        assert_eq!(due_spawns(3, 90), vec![SpawnKind::Aiming]);
        assert_eq!(due_spawns(3, 45), vec![SpawnKind::Simple]);
        assert_eq!(due_spawns(3, 135), vec![SpawnKind::Simple]);
    }

    #[test]
    fn test_high_tiers_saturate() {
        assert_eq!(due_spawns(5, 90), vec![SpawnKind::AimingShotgun]);
        assert_eq!(due_spawns(9, 90), vec![SpawnKind::AimingShotgun]);
        assert_eq!(due_spawns(9, 45), vec![SpawnKind::Simple]);
    }

    #[test]
    fn test_spawn_parameters_in_bounds() {
        let mut state = GameState::new(42, Arena::default());
        state.time = 90;
        run_spawner(&mut state);
        assert_eq!(state.enemies.len(), 1);
        let enemy = &state.enemies[0];
        assert_eq!(enemy.pos.x, state.arena.width + SPAWN_X_OVERHANG);
        assert!(enemy.pos.y >= 0.1 * state.arena.height);
        assert!(enemy.pos.y <= 0.9 * state.arena.height);
        let crate::sim::state::Motion::Straight { vel } = enemy.motion else {
            panic!("tier 0 spawns straight movers");
        };
        // Leftward within the cone, speed within [3, 5]
        assert!(vel.x < 0.0);
        let speed = vel.length();
        assert!(speed >= SPAWN_SPEED_MIN - 1e-3);
        assert!(speed <= SPAWN_SPEED_MAX + 1e-3);
        assert!(vel.y.abs() / speed <= SPAWN_CONE_HALF_ANGLE.sin() + 1e-4);
    }

    #[test]
    fn test_aiming_target_is_horizontal_approach() {
        let mut state = GameState::new(42, Arena::default());
        state.difficulty = 2;
        state.time = 90;
        run_spawner(&mut state);
        assert_eq!(state.enemies.len(), 1);
        let enemy = &state.enemies[0];
        let crate::sim::state::Motion::Eased { source, target, .. } = enemy.motion else {
            panic!("tier 2 spawns eased movers");
        };
        assert_eq!(source.y, target.y);
        assert!(target.x >= TARGET_X_MIN_FRAC * state.arena.width);
        assert!(target.x <= TARGET_X_MAX_FRAC * state.arena.width);
    }

    #[test]
    fn test_difficulty_strictly_increases() {
        let mut state = GameState::new(1, Arena::default());
        let mut last = state.difficulty;
        for frame in 1..=(3 * DIFFICULTY_PERIOD as u64) {
            advance_difficulty(&mut state);
            assert!(state.difficulty >= last);
            last = state.difficulty;
            assert_eq!(state.difficulty as u64, frame / DIFFICULTY_PERIOD as u64);
        }
        assert_eq!(state.difficulty, 3);
    }

    #[test]
    fn test_same_seed_same_spawns() {
        let mut a = GameState::new(99, Arena::default());
        let mut b = GameState::new(99, Arena::default());
        a.time = 90;
        b.time = 90;
        run_spawner(&mut a);
        run_spawner(&mut b);
        assert_eq!(a.enemies[0].pos, b.enemies[0].pos);
    }
}
