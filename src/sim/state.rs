//! Game state and core simulation types
//!
//! All entity state lives here; cross-entity effects (spawning bullets,
//! awarding score, ending the match) are routed through `GameState`.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::consts::*;
use crate::ease_out_cubic;

use super::collision::Hitbox;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Match ended
    GameOver,
}

/// Events emitted by the simulation, drained by the host once per frame.
///
/// Audio and UI observe the match through these; the sim never calls out.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    /// Player fired a bullet
    ShotFired,
    /// Player took damage (and survived)
    PlayerDamaged { hp_left: u8 },
    /// An enemy was destroyed by player fire
    EnemyDestroyed { kind: EnemyKind },
    /// Difficulty tier advanced
    DifficultyRaised { tier: u32 },
    /// Match ended (player hp reached 0 or the host called `end`)
    MatchEnded { score: u64 },
}

/// Host-supplied playfield rectangle
#[derive(Debug, Clone, Copy)]
pub struct Arena {
    pub width: f32,
    pub height: f32,
}

impl Arena {
    /// Validate a host rectangle, falling back to the default playfield
    /// for non-positive or non-finite dimensions.
    pub fn new(width: f32, height: f32) -> Self {
        if width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0 {
            Self { width, height }
        } else {
            log::warn!("bad screen rect {width}x{height}, using defaults");
            Self {
                width: DEFAULT_SCREEN_WIDTH,
                height: DEFAULT_SCREEN_HEIGHT,
            }
        }
    }

    /// True if `pos` is more than `margin` outside the playfield on any side
    pub fn outside(&self, pos: Vec2, margin: f32) -> bool {
        pos.x < -margin || pos.y < -margin || pos.x > self.width + margin || pos.y > self.height + margin
    }
}

impl Default for Arena {
    fn default() -> Self {
        Self {
            width: DEFAULT_SCREEN_WIDTH,
            height: DEFAULT_SCREEN_HEIGHT,
        }
    }
}

/// Outcome of a player damage event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitOutcome {
    /// Still inside the invulnerability window, no effect
    Shielded,
    /// Lost one hp, invulnerability window restarted
    Damaged,
    /// Hp reached 0; the caller must end the match
    Fatal,
}

/// The player ship
#[derive(Debug, Clone)]
pub struct Player {
    pub pos: Vec2,
    pub hitbox_radius: f32,
    /// Frames until the next shot is allowed
    pub shot_cooldown: u32,
    /// Frames of damage immunity remaining
    pub invulnerable_cooldown: u32,
    pub hp: u8,
    pub max_hp: u8,
}

impl Player {
    pub fn new(arena: &Arena) -> Self {
        Self {
            pos: Vec2::new(arena.width / 8.0, arena.height / 2.0),
            hitbox_radius: PLAYER_HITBOX_RADIUS,
            shot_cooldown: 0,
            invulnerable_cooldown: 0,
            hp: PLAYER_MAX_HP,
            max_hp: PLAYER_MAX_HP,
        }
    }

    /// Apply one enemy/enemy-bullet contact.
    ///
    /// No-op while invulnerable. On `Fatal` the invulnerability window is
    /// left untouched; the caller ends the match instead.
    pub fn take_hit(&mut self) -> HitOutcome {
        if self.invulnerable_cooldown > 0 {
            return HitOutcome::Shielded;
        }
        if self.hp > 0 {
            self.hp -= 1;
        }
        if self.hp == 0 {
            return HitOutcome::Fatal;
        }
        self.invulnerable_cooldown = INVULNERABILITY_FRAMES;
        HitOutcome::Damaged
    }

    /// Invulnerability blink: 4 frames on, 4 frames off
    pub fn visible(&self) -> bool {
        (self.invulnerable_cooldown / 4) % 2 == 0
    }
}

impl Hitbox for Player {
    fn pos(&self) -> Vec2 {
        self.pos
    }
    fn hitbox_radius(&self) -> f32 {
        self.hitbox_radius
    }
}

/// A bullet fired by the player
#[derive(Debug, Clone)]
pub struct PlayerBullet {
    pub id: u32,
    pub pos: Vec2,
    pub vel: Vec2,
    pub hitbox_radius: f32,
    pub destroying: bool,
}

impl PlayerBullet {
    pub fn new(id: u32, pos: Vec2, vel: Vec2) -> Self {
        Self {
            id,
            pos,
            vel,
            hitbox_radius: PLAYER_BULLET_RADIUS,
            destroying: false,
        }
    }

    pub fn on_collide_with_enemy(&mut self) {
        self.destroying = true;
    }
}

impl Hitbox for PlayerBullet {
    fn pos(&self) -> Vec2 {
        self.pos
    }
    fn hitbox_radius(&self) -> f32 {
        self.hitbox_radius
    }
}

/// A bullet fired by an enemy
#[derive(Debug, Clone)]
pub struct EnemyBullet {
    pub id: u32,
    pub pos: Vec2,
    pub vel: Vec2,
    pub hitbox_radius: f32,
    pub destroying: bool,
}

impl EnemyBullet {
    pub fn new(id: u32, pos: Vec2, vel: Vec2) -> Self {
        Self {
            id,
            pos,
            vel,
            hitbox_radius: ENEMY_BULLET_RADIUS,
            destroying: false,
        }
    }

    pub fn on_collide_with_player(&mut self) {
        self.destroying = true;
    }
}

impl Hitbox for EnemyBullet {
    fn pos(&self) -> Vec2 {
        self.pos
    }
    fn hitbox_radius(&self) -> f32 {
        self.hitbox_radius
    }
}

/// Enemy variants
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnemyKind {
    /// Straight flight, fires along its travel direction
    Simple,
    /// Eased approach, fires single aimed bullets
    Aiming,
    /// Eased approach, fires a three-bullet fan
    AimingShotgun,
}

impl EnemyKind {
    /// Frames between shots for this variant
    pub fn fire_interval(&self) -> u32 {
        match self {
            EnemyKind::Simple => SIMPLE_FIRE_INTERVAL,
            EnemyKind::Aiming => AIMING_FIRE_INTERVAL,
            EnemyKind::AimingShotgun => SHOTGUN_FIRE_INTERVAL,
        }
    }

    pub fn max_hp(&self) -> u8 {
        match self {
            EnemyKind::AimingShotgun => SHOTGUN_ENEMY_HP,
            _ => ENEMY_HP,
        }
    }
}

/// Per-variant motion state
#[derive(Debug, Clone, Copy)]
pub enum Motion {
    /// Constant velocity assigned at spawn
    Straight { vel: Vec2 },
    /// Ease-out cubic from `source` to `target`; holds at target once there
    Eased { source: Vec2, target: Vec2, age: u32 },
}

/// An enemy ship
#[derive(Debug, Clone)]
pub struct Enemy {
    pub id: u32,
    pub kind: EnemyKind,
    pub pos: Vec2,
    pub motion: Motion,
    /// Facing angle, consumed by the renderer
    pub rotation: f32,
    pub hitbox_radius: f32,
    pub hp: u8,
    pub max_hp: u8,
    /// Frames until the next shot
    pub shot_timer: u32,
    pub destroying: bool,
}

impl Enemy {
    pub fn simple(id: u32, pos: Vec2, vel: Vec2) -> Self {
        Self {
            id,
            kind: EnemyKind::Simple,
            pos,
            motion: Motion::Straight { vel },
            rotation: vel.y.atan2(vel.x),
            hitbox_radius: ENEMY_HITBOX_RADIUS,
            hp: EnemyKind::Simple.max_hp(),
            max_hp: EnemyKind::Simple.max_hp(),
            shot_timer: EnemyKind::Simple.fire_interval(),
            destroying: false,
        }
    }

    pub fn aiming(id: u32, source: Vec2, target: Vec2) -> Self {
        Self::eased(id, EnemyKind::Aiming, source, target)
    }

    pub fn aiming_shotgun(id: u32, source: Vec2, target: Vec2) -> Self {
        Self::eased(id, EnemyKind::AimingShotgun, source, target)
    }

    fn eased(id: u32, kind: EnemyKind, source: Vec2, target: Vec2) -> Self {
        Self {
            id,
            kind,
            pos: source,
            motion: Motion::Eased { source, target, age: 0 },
            rotation: std::f32::consts::PI,
            hitbox_radius: ENEMY_HITBOX_RADIUS,
            hp: kind.max_hp(),
            max_hp: kind.max_hp(),
            shot_timer: kind.fire_interval(),
            destroying: false,
        }
    }

    /// Advance one frame of motion. Eased enemies clamp at their target.
    pub fn advance_motion(&mut self) {
        match &mut self.motion {
            Motion::Straight { vel } => {
                self.pos += *vel;
                self.rotation = vel.y.atan2(vel.x);
            }
            Motion::Eased { source, target, age } => {
                *age += 1;
                let t = (*age as f32 / EASE_DURATION as f32).min(1.0);
                self.pos = source.lerp(*target, ease_out_cubic(t));
            }
        }
    }

    /// Take one player-bullet hit. Awards nothing by itself; the kill score
    /// and event are the caller's job so the bonus fires at most once.
    ///
    /// Returns true if this hit destroyed the enemy.
    pub fn on_collide_with_player_bullet(&mut self) -> bool {
        if self.destroying {
            return false;
        }
        if self.hp > 0 {
            self.hp -= 1;
        }
        if self.hp == 0 {
            self.destroying = true;
            return true;
        }
        false
    }

    /// Hp-derived tint factor in [0, 1], consumed by the renderer
    pub fn tint_factor(&self) -> f32 {
        self.hp as f32 / self.max_hp as f32
    }
}

impl Hitbox for Enemy {
    fn pos(&self) -> Vec2 {
        self.pos
    }
    fn hitbox_radius(&self) -> f32 {
        self.hitbox_radius
    }
}

/// Complete simulation state for one match
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Frames elapsed since match start
    pub time: u64,
    pub score: u64,
    /// Difficulty tier; never decreases
    pub difficulty: u32,
    /// Frames until the next tier
    pub difficulty_timer: u32,
    pub phase: GamePhase,
    /// Debug overlay flag, toggled by a one-shot key edge
    pub debug: bool,
    pub arena: Arena,
    pub player: Player,
    pub player_bullets: Vec<PlayerBullet>,
    pub enemies: Vec<Enemy>,
    pub enemy_bullets: Vec<EnemyBullet>,
    /// Frame events, drained by the host
    pub events: Vec<GameEvent>,
    pub(crate) rng: Pcg32,
    next_id: u32,
}

impl GameState {
    /// Create a fresh match with the given seed and host playfield
    pub fn new(seed: u64, arena: Arena) -> Self {
        log::info!(
            "match start: seed {seed}, arena {}x{}",
            arena.width,
            arena.height
        );
        Self {
            seed,
            time: 0,
            score: 0,
            difficulty: 0,
            difficulty_timer: DIFFICULTY_PERIOD,
            phase: GamePhase::Playing,
            debug: false,
            arena,
            player: Player::new(&arena),
            player_bullets: Vec::new(),
            enemies: Vec::new(),
            enemy_bullets: Vec::new(),
            events: Vec::new(),
            rng: Pcg32::seed_from_u64(seed),
            next_id: 1,
        }
    }

    pub fn is_playing(&self) -> bool {
        self.phase == GamePhase::Playing
    }

    /// Allocate a renderer-stable entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// End the match synchronously: destroy all live entities and stop
    /// the simulation. Further `tick` calls are no-ops.
    pub fn end(&mut self) {
        if self.phase == GamePhase::GameOver {
            return;
        }
        self.player_bullets.clear();
        self.enemies.clear();
        self.enemy_bullets.clear();
        self.phase = GamePhase::GameOver;
        self.events.push(GameEvent::MatchEnded { score: self.score });
        log::info!("match end: score {}, {} frames", self.score, self.time);
    }

    /// Hand the frame's events to the host
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
