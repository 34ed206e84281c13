//! Skystrafe - a side-scrolling arcade shoot-em-up simulation core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, collisions, spawner, game state)
//! - `input`: Pressed-key snapshot sampled once per frame
//! - `audio`: Fire-and-forget audio capability driven by game events
//! - `highscores`: Last/high score pair and match-end recording rules
//! - `persistence`: Key-value score store (file-backed or in-memory)
//! - `settings`: Volumes and preferences, JSON persisted

pub mod audio;
pub mod highscores;
pub mod input;
pub mod persistence;
pub mod settings;
pub mod sim;

pub use highscores::ScoreBoard;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Default playfield size when the host supplies no (or a bad) rectangle
    pub const DEFAULT_SCREEN_WIDTH: f32 = 640.0;
    pub const DEFAULT_SCREEN_HEIGHT: f32 = 480.0;

    /// Entities further than this outside the playfield are removed
    pub const OFFSCREEN_MARGIN: f32 = 100.0;

    /// Player defaults
    pub const PLAYER_HITBOX_RADIUS: f32 = 10.0;
    pub const PLAYER_SPEED: f32 = 6.0;
    /// Speed while the slow modifier is held
    pub const PLAYER_SLOW_SPEED: f32 = 3.0;
    /// The player ship stays this far inside the screen edges
    pub const PLAYER_BOUNDS_INSET: f32 = 10.0;
    pub const PLAYER_MAX_HP: u8 = 3;
    /// Frames between player shots
    pub const PLAYER_SHOT_COOLDOWN: u32 = 10;
    /// Damage immunity window after a hit, in frames
    pub const INVULNERABILITY_FRAMES: u32 = 100;

    /// Bullet defaults
    pub const PLAYER_BULLET_RADIUS: f32 = 10.0;
    pub const PLAYER_BULLET_SPEED: f32 = 10.0;
    pub const ENEMY_BULLET_RADIUS: f32 = 10.0;
    pub const ENEMY_BULLET_SPEED: f32 = 4.0;

    /// Enemy defaults
    pub const ENEMY_HITBOX_RADIUS: f32 = 25.0;
    pub const ENEMY_HP: u8 = 3;
    pub const SHOTGUN_ENEMY_HP: u8 = 5;
    /// Score awarded once per enemy kill
    pub const ENEMY_KILL_SCORE: u64 = 1000;

    /// Fire intervals in frames
    pub const SIMPLE_FIRE_INTERVAL: u32 = 100;
    pub const AIMING_FIRE_INTERVAL: u32 = 50;
    pub const SHOTGUN_FIRE_INTERVAL: u32 = 100;
    /// Angular offset of the shotgun fan's outer bullets, radians
    pub const SHOTGUN_SPREAD: f32 = 0.4;
    /// Frames an eased enemy takes to reach its target point
    pub const EASE_DURATION: u32 = 120;

    /// Spawner
    pub const DIFFICULTY_PERIOD: u32 = 600;
    pub const SPAWN_INTERVAL: u64 = 90;
    pub const SPAWN_PHASE_OFFSET: u64 = 45;
    pub const FAST_SPAWN_INTERVAL: u64 = 45;
    /// Enemies appear this far past the right screen edge
    pub const SPAWN_X_OVERHANG: f32 = 50.0;
    /// Half-angle of the velocity cone around due left, radians (~11 degrees)
    pub const SPAWN_CONE_HALF_ANGLE: f32 = 0.19;
    pub const SPAWN_SPEED_MIN: f32 = 3.0;
    pub const SPAWN_SPEED_MAX: f32 = 5.0;
    /// Eased enemies stop at width * uniform[MIN, MAX]
    pub const TARGET_X_MIN_FRAC: f32 = 0.6;
    pub const TARGET_X_MAX_FRAC: f32 = 0.9;
}

/// Ease-out cubic: starts fast, decelerates into the target
#[inline]
pub fn ease_out_cubic(t: f32) -> f32 {
    1.0 - (1.0 - t).powi(3)
}

/// Diagonal movement factor so 8-way speed is uniform
#[inline]
pub fn diagonal_factor() -> f32 {
    1.0 / std::f32::consts::SQRT_2
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ease_out_cubic_endpoints() {
        assert!((ease_out_cubic(0.0)).abs() < 1e-6);
        assert!((ease_out_cubic(1.0) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_ease_out_cubic_decelerates() {
        // First half covers more ground than the second half
        let first = ease_out_cubic(0.5) - ease_out_cubic(0.0);
        let second = ease_out_cubic(1.0) - ease_out_cubic(0.5);
        assert!(first > second);
    }
}
