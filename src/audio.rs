//! Sound effect routing
//!
//! The simulation reports events; this module turns them into named effects
//! and hands them to whatever backend the host provides. Without a backend
//! every call is a no-op.

use crate::settings::Settings;
use crate::sim::GameEvent;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundEffect {
    /// Player left the ground
    Jump,
    /// Coin picked up
    Coin,
    /// Enemy stomped
    Stomp,
    /// Player lost a life
    Hurt,
}

/// Oscillator shape for a generated tone
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Waveform {
    Sine,
    Square,
    Triangle,
    Sawtooth,
}

/// Parameters a synthesizer needs to voice an effect. Backends that generate
/// sound instead of playing samples read these from [`SoundEffect::tone`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tone {
    pub frequency_hz: f32,
    pub duration_s: f32,
    pub waveform: Waveform,
}

impl SoundEffect {
    /// Token used by hosts that look sounds up by name
    pub fn name(&self) -> &'static str {
        match self {
            SoundEffect::Jump => "jump",
            SoundEffect::Coin => "coin",
            SoundEffect::Stomp => "stomp",
            SoundEffect::Hurt => "hurt",
        }
    }

    pub fn tone(&self) -> Tone {
        let (frequency_hz, duration_s, waveform) = match self {
            SoundEffect::Jump => (440.0, 0.1, Waveform::Square),
            SoundEffect::Coin => (660.0, 0.15, Waveform::Sine),
            SoundEffect::Stomp => (220.0, 0.1, Waveform::Triangle),
            SoundEffect::Hurt => (150.0, 0.3, Waveform::Sawtooth),
        };
        Tone {
            frequency_hz,
            duration_s,
            waveform,
        }
    }

    /// Effect that accompanies a simulation event, if any
    pub fn for_event(event: &GameEvent) -> Option<Self> {
        match event {
            GameEvent::Jumped => Some(SoundEffect::Jump),
            GameEvent::CoinCollected => Some(SoundEffect::Coin),
            GameEvent::EnemyStomped => Some(SoundEffect::Stomp),
            GameEvent::PlayerHit { .. } => Some(SoundEffect::Hurt),
            GameEvent::LevelCleared { .. } | GameEvent::GameOver { .. } => None,
        }
    }
}

/// Audio backend. Fire-and-forget: failures stay inside the sink.
pub trait AudioSink {
    fn play(&mut self, effect: SoundEffect, volume: f32);
}

/// Sink that only logs, for headless runs
#[derive(Debug, Default)]
pub struct LogSink;

impl AudioSink for LogSink {
    fn play(&mut self, effect: SoundEffect, volume: f32) {
        let tone = effect.tone();
        log::debug!(
            "♪ {} {:?} {:.0} Hz {:.2}s (vol {:.2})",
            effect.name(),
            tone.waveform,
            tone.frequency_hz,
            tone.duration_s,
            volume
        );
    }
}

/// Audio manager for the game
pub struct AudioManager {
    sink: Option<Box<dyn AudioSink>>,
    master_volume: f32,
    sfx_volume: f32,
    muted: bool,
}

impl Default for AudioManager {
    fn default() -> Self {
        Self::disabled()
    }
}

impl AudioManager {
    pub fn new(sink: Option<Box<dyn AudioSink>>) -> Self {
        if sink.is_none() {
            log::warn!("No audio backend - audio disabled");
        }
        Self {
            sink,
            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
        }
    }

    /// Manager with no backend; every call is a no-op
    pub fn disabled() -> Self {
        Self::new(None)
    }

    pub fn is_enabled(&self) -> bool {
        self.sink.is_some()
    }

    /// Set master volume (0.0 - 1.0)
    pub fn set_master_volume(&mut self, vol: f32) {
        self.master_volume = vol.clamp(0.0, 1.0);
    }

    /// Set SFX volume (0.0 - 1.0)
    pub fn set_sfx_volume(&mut self, vol: f32) {
        self.sfx_volume = vol.clamp(0.0, 1.0);
    }

    /// Mute/unmute all audio
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    pub fn apply_settings(&mut self, settings: &Settings) {
        self.set_master_volume(settings.master_volume);
        self.set_sfx_volume(settings.sfx_volume);
        self.set_muted(settings.muted);
    }

    /// Get effective volume
    fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.sfx_volume
        }
    }

    /// Play a sound effect
    pub fn play(&mut self, effect: SoundEffect) {
        let vol = self.effective_volume();
        if vol <= 0.0 {
            return;
        }
        let Some(sink) = self.sink.as_mut() else {
            return;
        };
        sink.play(effect, vol);
    }

    /// Voice every event of a tick that has a sound
    pub fn handle_events(&mut self, events: &[GameEvent]) {
        for effect in events.iter().filter_map(SoundEffect::for_event) {
            self.play(effect);
        }
    }
}
