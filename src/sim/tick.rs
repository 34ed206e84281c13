//! Per-frame simulation update
//!
//! `tick` advances one fixed frame, synchronously, in a load-bearing order:
//! entity motion and timers first, then all pairwise collision checks against
//! pre-pruning state, then the spawner, then pruning. A bullet and the enemy
//! it kills both exist for every check on the frame they collide; neither
//! survives into the next frame.

use glam::Vec2;

use crate::consts::*;
use crate::diagonal_factor;

use super::collision::collided;
use super::spawn::{advance_difficulty, run_spawner};
use super::state::{
    EnemyBullet, EnemyKind, GameEvent, GameState, HitOutcome, Motion, PlayerBullet,
};

/// Input snapshot for a single frame
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    /// Slow-movement modifier
    pub slow: bool,
    pub fire: bool,
    /// One-shot debug overlay toggle (already edge-filtered by the sampler)
    pub toggle_debug: bool,
    /// Demo mode: the sim synthesizes its own movement and fire input
    pub autopilot: bool,
}

/// Advance the game state by one frame
pub fn tick(state: &mut GameState, input: &TickInput) {
    if !state.is_playing() {
        return;
    }

    let input = resolve_input(state, input);

    if input.toggle_debug {
        state.debug = !state.debug;
        log::debug!("debug overlay {}", if state.debug { "on" } else { "off" });
    }

    // 1. Motion and timers
    update_player(state, &input);
    update_player_bullets(state);
    update_enemies(state);
    update_enemy_bullets(state);

    // 2. Pairwise collisions against pre-pruning state
    resolve_collisions(state);
    if !state.is_playing() {
        // Fatal hit ended the match this frame
        return;
    }

    // 3. Spawn scheduler
    run_spawner(state);

    // 4. Prune everything flagged this frame
    prune(state);

    state.score += 1;
    state.time += 1;
    advance_difficulty(state);
}

/// Replace the host input with synthesized input in autopilot mode
fn resolve_input(state: &GameState, input: &TickInput) -> TickInput {
    let mut input = input.clone();
    if !input.autopilot {
        return input;
    }

    input.fire = true;

    let player = &state.player;
    // Nearest vertical threat in the lane ahead of the ship
    let threat_y = state
        .enemy_bullets
        .iter()
        .map(|b| b.pos)
        .chain(state.enemies.iter().map(|e| e.pos))
        .filter(|p| p.x > player.pos.x - 20.0 && p.x < player.pos.x + 220.0)
        .filter(|p| (p.y - player.pos.y).abs() < 70.0)
        .min_by(|a, b| {
            let da = (a.y - player.pos.y).abs() + (a.x - player.pos.x).abs() * 0.25;
            let db = (b.y - player.pos.y).abs() + (b.x - player.pos.x).abs() * 0.25;
            da.partial_cmp(&db).unwrap_or(std::cmp::Ordering::Equal)
        })
        .map(|p| p.y);

    if let Some(ty) = threat_y {
        // Dodge away from the threat, carefully
        input.slow = (ty - player.pos.y).abs() > 40.0;
        if ty >= player.pos.y {
            input.up = true;
        } else {
            input.down = true;
        }
    } else {
        // Drift back toward the vertical center
        let center = state.arena.height / 2.0;
        if player.pos.y < center - 8.0 {
            input.down = true;
        } else if player.pos.y > center + 8.0 {
            input.up = true;
        }
    }
    input
}

fn update_player(state: &mut GameState, input: &TickInput) {
    let arena = state.arena;

    // 8-way digital movement; diagonals are normalized so speed is uniform
    let dx = (input.right as i32 - input.left as i32) as f32;
    let dy = (input.down as i32 - input.up as i32) as f32;
    let base = if input.slow { PLAYER_SLOW_SPEED } else { PLAYER_SPEED };
    let vel = if dx != 0.0 && dy != 0.0 {
        Vec2::new(dx, dy) * base * diagonal_factor()
    } else {
        Vec2::new(dx, dy) * base
    };

    let player = &mut state.player;
    player.pos = (player.pos + vel).clamp(
        Vec2::splat(PLAYER_BOUNDS_INSET),
        Vec2::new(
            arena.width - PLAYER_BOUNDS_INSET,
            arena.height - PLAYER_BOUNDS_INSET,
        ),
    );

    if player.shot_cooldown > 0 {
        player.shot_cooldown -= 1;
    }
    let mut fired = false;
    if player.shot_cooldown == 0 && input.fire {
        player.shot_cooldown = PLAYER_SHOT_COOLDOWN;
        fired = true;
    }
    if player.invulnerable_cooldown > 0 {
        player.invulnerable_cooldown -= 1;
    }

    let muzzle = state.player.pos;
    if fired {
        let id = state.next_entity_id();
        state.player_bullets.push(PlayerBullet::new(
            id,
            muzzle,
            Vec2::new(PLAYER_BULLET_SPEED, 0.0),
        ));
        state.events.push(GameEvent::ShotFired);
    }
}

fn update_player_bullets(state: &mut GameState) {
    let arena = state.arena;
    for bullet in &mut state.player_bullets {
        bullet.pos += bullet.vel;
        if arena.outside(bullet.pos, OFFSCREEN_MARGIN) {
            bullet.destroying = true;
        }
    }
}

fn update_enemies(state: &mut GameState) {
    let arena = state.arena;
    let player_pos = state.player.pos;
    // Shots are deferred so the bullet list isn't grown mid-iteration
    let mut shots: Vec<(Vec2, Vec2)> = Vec::new();

    for enemy in &mut state.enemies {
        enemy.advance_motion();

        // Aiming variants track the player continuously
        if enemy.kind != EnemyKind::Simple {
            let aim = player_pos - enemy.pos;
            enemy.rotation = aim.y.atan2(aim.x);
        }

        if enemy.shot_timer > 0 {
            enemy.shot_timer -= 1;
        }
        if enemy.shot_timer == 0 {
            fire(enemy, player_pos, &mut shots);
            enemy.shot_timer = enemy.kind.fire_interval();
        }

        if arena.outside(enemy.pos, OFFSCREEN_MARGIN) {
            enemy.destroying = true;
        }
    }

    for (pos, vel) in shots {
        let id = state.next_entity_id();
        state.enemy_bullets.push(EnemyBullet::new(id, pos, vel));
    }
}

fn fire(enemy: &super::state::Enemy, player_pos: Vec2, shots: &mut Vec<(Vec2, Vec2)>) {
    match enemy.kind {
        EnemyKind::Simple => {
            // Straight shot along the travel direction
            let dir = match enemy.motion {
                Motion::Straight { vel } => vel.normalize_or_zero(),
                Motion::Eased { .. } => Vec2::NEG_X,
            };
            if dir != Vec2::ZERO {
                shots.push((enemy.pos, dir * ENEMY_BULLET_SPEED));
            }
        }
        EnemyKind::Aiming => {
            let aim = (player_pos - enemy.pos).normalize_or_zero();
            if aim != Vec2::ZERO {
                shots.push((enemy.pos, aim * ENEMY_BULLET_SPEED));
            }
        }
        EnemyKind::AimingShotgun => {
            // Center bullet along the aim vector, siblings fanned out
            let aim = player_pos - enemy.pos;
            let base = aim.y.atan2(aim.x);
            for offset in [-SHOTGUN_SPREAD, 0.0, SHOTGUN_SPREAD] {
                shots.push((
                    enemy.pos,
                    Vec2::from_angle(base + offset) * ENEMY_BULLET_SPEED,
                ));
            }
        }
    }
}

fn update_enemy_bullets(state: &mut GameState) {
    let arena = state.arena;
    for bullet in &mut state.enemy_bullets {
        bullet.pos += bullet.vel;
        if arena.outside(bullet.pos, OFFSCREEN_MARGIN) {
            bullet.destroying = true;
        }
    }
}

/// Run every pairwise check. Marking is in place and never removes, so
/// simultaneous multi-way collisions are all observed this frame.
fn resolve_collisions(state: &mut GameState) {
    // Enemy vs player bullet. A bullet that already hit something this frame
    // still damages other overlapping enemies; the kill award is guarded by
    // the enemy's own destroying flag.
    for ei in 0..state.enemies.len() {
        for bi in 0..state.player_bullets.len() {
            if !collided(&state.enemies[ei], &state.player_bullets[bi]) {
                continue;
            }
            state.player_bullets[bi].on_collide_with_enemy();
            let killed = state.enemies[ei].on_collide_with_player_bullet();
            if killed {
                state.score += ENEMY_KILL_SCORE;
                state.events.push(GameEvent::EnemyDestroyed {
                    kind: state.enemies[ei].kind,
                });
            }
        }
    }

    // Enemy vs player, skipping enemies already going down
    for ei in 0..state.enemies.len() {
        if state.enemies[ei].destroying {
            continue;
        }
        if collided(&state.enemies[ei], &state.player) {
            if apply_player_hit(state) {
                return;
            }
        }
    }

    // Enemy bullet vs player. The bullet is consumed even when the player
    // is invulnerable.
    for bi in 0..state.enemy_bullets.len() {
        if collided(&state.enemy_bullets[bi], &state.player) {
            state.enemy_bullets[bi].on_collide_with_player();
            if apply_player_hit(state) {
                return;
            }
        }
    }
}

/// Route one contact into the player; returns true if the match ended.
fn apply_player_hit(state: &mut GameState) -> bool {
    match state.player.take_hit() {
        HitOutcome::Shielded => false,
        HitOutcome::Damaged => {
            state.events.push(GameEvent::PlayerDamaged {
                hp_left: state.player.hp,
            });
            false
        }
        HitOutcome::Fatal => {
            state.end();
            true
        }
    }
}

fn prune(state: &mut GameState) {
    state.player_bullets.retain(|b| !b.destroying);
    state.enemies.retain(|e| !e.destroying);
    state.enemy_bullets.retain(|b| !b.destroying);
}
