//! Sound cues
//!
//! The game only ever asks for two cues. Playback is fire-and-forget; the
//! sink decides how (or whether) to make noise.

use std::path::{Path, PathBuf};

use crate::consts::COIN_PICKUP_VOLUME;
use crate::error::StartupError;
use crate::settings::Settings;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cue {
    /// Coin collected (played quieter)
    CoinPickup,
    /// Enemy touched the player
    Lose,
}

impl Cue {
    pub const ALL: [Cue; 2] = [Cue::CoinPickup, Cue::Lose];

    pub fn name(self) -> &'static str {
        match self {
            Cue::CoinPickup => "coin pickup",
            Cue::Lose => "lose",
        }
    }

    pub fn asset_file(self) -> &'static str {
        match self {
            Cue::CoinPickup => "coin_pickup.wav",
            Cue::Lose => "lose.wav",
        }
    }

    /// Per-cue attenuation before master volume
    pub fn base_volume(self) -> f32 {
        match self {
            Cue::CoinPickup => COIN_PICKUP_VOLUME,
            Cue::Lose => 1.0,
        }
    }
}

/// Where cues end up
pub trait AudioSink {
    /// Acquire whatever the cue needs. Called once per cue at startup.
    fn load(&mut self, _cue: Cue) -> Result<(), StartupError> {
        Ok(())
    }

    fn play(&mut self, cue: Cue, volume: f32);
}

/// Audio manager for the game
pub struct AudioManager<S: AudioSink> {
    sink: S,
    master_volume: f32,
    muted: bool,
}

impl<S: AudioSink> AudioManager<S> {
    pub fn new(sink: S, settings: &Settings) -> Self {
        Self {
            sink,
            master_volume: settings.master_volume.clamp(0.0, 1.0),
            muted: settings.muted,
        }
    }

    /// Load every cue; a missing asset aborts startup
    pub fn prepare(&mut self) -> Result<(), StartupError> {
        for cue in Cue::ALL {
            self.sink.load(cue)?;
        }
        Ok(())
    }

    /// Set master volume (0.0 - 1.0)
    pub fn set_master_volume(&mut self, vol: f32) {
        self.master_volume = vol.clamp(0.0, 1.0);
    }

    /// Mute/unmute all audio
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    fn effective_volume(&self, cue: Cue) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * cue.base_volume()
        }
    }

    /// Play a cue
    pub fn play(&mut self, cue: Cue) {
        let vol = self.effective_volume(cue);
        if vol <= 0.0 {
            return;
        }
        self.sink.play(cue, vol);
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }
}

/// Sink for headless runs: checks assets exist, logs playback
#[derive(Debug, Clone, Default)]
pub struct LogAudio {
    asset_dir: Option<PathBuf>,
    played: u64,
}

impl LogAudio {
    pub fn new(asset_dir: Option<&Path>) -> Self {
        Self {
            asset_dir: asset_dir.map(Path::to_path_buf),
            played: 0,
        }
    }

    pub fn played(&self) -> u64 {
        self.played
    }
}

impl AudioSink for LogAudio {
    fn load(&mut self, cue: Cue) -> Result<(), StartupError> {
        let Some(dir) = &self.asset_dir else {
            return Ok(());
        };
        let path = dir.join(cue.asset_file());
        if !path.is_file() {
            return Err(StartupError::MissingAsset {
                cue: cue.name(),
                path,
            });
        }
        log::debug!("Audio cue \"{}\" -> {}", cue.name(), path.display());
        Ok(())
    }

    fn play(&mut self, cue: Cue, volume: f32) {
        self.played += 1;
        log::debug!("Play cue \"{}\" (volume {:.2})", cue.name(), volume);
    }
}
