//! Audio capability
//!
//! The simulation never talks to an audio backend; it emits `GameEvent`s and
//! an `AudioDirector` routes them to whatever `AudioSink` the host provides.
//! Playback is fire-and-forget: the game has no knowledge of completion.

use crate::settings::Settings;
use crate::sim::GameEvent;

/// Sound effect identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Player shot
    Laser,
    /// Player took damage
    Explosion,
    /// Enemy destroyed
    EnemyDown,
    /// Difficulty tier raised
    TierUp,
}

/// Music track identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MusicTrack {
    Battle,
    GameOver,
}

/// Host-provided playback capability
pub trait AudioSink {
    fn play_sound(&mut self, effect: SoundEffect, volume: f32);
    fn play_music(&mut self, track: MusicTrack, volume: f32, looping: bool);
    fn stop_music(&mut self);
}

/// Sink that discards everything; for tests and silent runs
pub struct NullAudio;

impl AudioSink for NullAudio {
    fn play_sound(&mut self, _effect: SoundEffect, _volume: f32) {}
    fn play_music(&mut self, _track: MusicTrack, _volume: f32, _looping: bool) {}
    fn stop_music(&mut self) {}
}

/// Sink that logs playback; the headless runner's "speaker"
pub struct LogAudio;

impl AudioSink for LogAudio {
    fn play_sound(&mut self, effect: SoundEffect, volume: f32) {
        log::debug!("sfx {effect:?} at {volume:.2}");
    }

    fn play_music(&mut self, track: MusicTrack, volume: f32, looping: bool) {
        log::debug!("music {track:?} at {volume:.2}, looping: {looping}");
    }

    fn stop_music(&mut self) {
        log::debug!("music stopped");
    }
}

/// Per-effect base volume before settings scaling
fn base_volume(effect: SoundEffect) -> f32 {
    match effect {
        SoundEffect::Laser => 0.25,
        SoundEffect::Explosion => 0.25,
        SoundEffect::EnemyDown => 0.3,
        SoundEffect::TierUp => 0.2,
    }
}

/// Routes game events to a sink with settings-scaled volumes
pub struct AudioDirector<S: AudioSink> {
    sink: S,
    master_volume: f32,
    sfx_volume: f32,
    music_volume: f32,
    muted: bool,
}

impl<S: AudioSink> AudioDirector<S> {
    pub fn new(sink: S, settings: &Settings) -> Self {
        Self {
            sink,
            master_volume: settings.master_volume,
            sfx_volume: settings.sfx_volume,
            music_volume: settings.music_volume,
            muted: settings.muted,
        }
    }

    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    fn sfx_gain(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.sfx_volume
        }
    }

    fn music_gain(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.music_volume
        }
    }

    fn play(&mut self, effect: SoundEffect) {
        let volume = base_volume(effect) * self.sfx_gain();
        if volume > 0.0 {
            self.sink.play_sound(effect, volume);
        }
    }

    /// Start the battle music for a new match
    pub fn on_match_start(&mut self) {
        let gain = self.music_gain();
        if gain > 0.0 {
            self.sink.play_music(MusicTrack::Battle, gain, true);
        }
    }

    /// Route one frame's worth of events
    pub fn handle(&mut self, events: &[GameEvent]) {
        for event in events {
            match event {
                GameEvent::ShotFired => self.play(SoundEffect::Laser),
                GameEvent::PlayerDamaged { .. } => self.play(SoundEffect::Explosion),
                GameEvent::EnemyDestroyed { .. } => self.play(SoundEffect::EnemyDown),
                GameEvent::DifficultyRaised { .. } => self.play(SoundEffect::TierUp),
                GameEvent::MatchEnded { .. } => {
                    self.sink.stop_music();
                    let gain = self.music_gain();
                    if gain > 0.0 {
                        self.sink.play_music(MusicTrack::GameOver, gain, false);
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::EnemyKind;

    /// Sink that records what it was asked to play
    #[derive(Default)]
    struct RecordingSink {
        sounds: Vec<(SoundEffect, f32)>,
        music: Vec<MusicTrack>,
        stops: usize,
    }

    impl AudioSink for RecordingSink {
        fn play_sound(&mut self, effect: SoundEffect, volume: f32) {
            self.sounds.push((effect, volume));
        }
        fn play_music(&mut self, track: MusicTrack, _volume: f32, _looping: bool) {
            self.music.push(track);
        }
        fn stop_music(&mut self) {
            self.stops += 1;
        }
    }

    #[test]
    fn test_events_route_to_sounds() {
        let mut director = AudioDirector::new(RecordingSink::default(), &Settings::default());
        director.handle(&[
            GameEvent::ShotFired,
            GameEvent::EnemyDestroyed {
                kind: EnemyKind::Simple,
            },
        ]);
        assert_eq!(director.sink.sounds.len(), 2);
        assert_eq!(director.sink.sounds[0].0, SoundEffect::Laser);
        assert_eq!(director.sink.sounds[1].0, SoundEffect::EnemyDown);
    }

    #[test]
    fn test_match_end_swaps_music() {
        let mut director = AudioDirector::new(RecordingSink::default(), &Settings::default());
        director.on_match_start();
        director.handle(&[GameEvent::MatchEnded { score: 1234 }]);
        assert_eq!(director.sink.stops, 1);
        assert_eq!(
            director.sink.music,
            vec![MusicTrack::Battle, MusicTrack::GameOver]
        );
    }

    #[test]
    fn test_muted_plays_nothing() {
        let mut director = AudioDirector::new(RecordingSink::default(), &Settings::default());
        director.set_muted(true);
        director.on_match_start();
        director.handle(&[GameEvent::ShotFired]);
        assert!(director.sink.sounds.is_empty());
        assert!(director.sink.music.is_empty());
    }
}
