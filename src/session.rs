//! Game session
//!
//! Owns the simulation state plus the collaborators around it and runs the
//! per-frame pipeline: poll input and timers, tick, play cues, render.

use std::time::Duration;

use rand::Rng;

use crate::audio::{AudioManager, AudioSink, Cue};
use crate::error::StartupError;
use crate::platform::{EventSource, FrameClock, InputEvent, RepeatingTimer, TimerId};
use crate::renderer::{RenderSink, build_frame};
use crate::settings::Settings;
use crate::sim::{Command, GameEvent, GamePhase, GameState, TickInput, tick};

/// Session lifecycle, as seen from outside the simulation
pub type SessionPhase = GamePhase;

pub struct Session<A: AudioSink, R: RenderSink> {
    state: GameState,
    audio: AudioManager<A>,
    renderer: R,
    spawn_timer: RepeatingTimer,
    /// Logical time per frame, fed to the timer
    frame_dt: Duration,
    // Per-frame scratch buffers
    events: Vec<InputEvent>,
    input: TickInput,
}

impl<A: AudioSink, R: RenderSink> Session<A, R> {
    /// Validate settings, load audio, build the arena and arm the spawn timer
    pub fn new(settings: &Settings, audio: A, renderer: R) -> Result<Self, StartupError> {
        settings.validate()?;

        let mut audio = AudioManager::new(audio, settings);
        audio.prepare()?;

        let seed = settings.seed.unwrap_or_else(|| rand::rng().random());
        let state = GameState::new(seed, settings.tuning);

        let mut spawn_timer = RepeatingTimer::new(settings.spawn_interval());
        spawn_timer.arm();

        log::info!(
            "Session ready: seed {}, {:?} movement, {} fps",
            seed,
            settings.tuning.movement,
            settings.frame_rate
        );

        Ok(Self {
            state,
            audio,
            renderer,
            spawn_timer,
            frame_dt: settings.frame_duration(),
            events: Vec::new(),
            input: TickInput::default(),
        })
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn phase(&self) -> SessionPhase {
        self.state.phase()
    }

    pub fn audio(&self) -> &AudioManager<A> {
        &self.audio
    }

    pub fn audio_mut(&mut self) -> &mut AudioManager<A> {
        &mut self.audio
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    /// Run one frame. Returns false once the session has stopped.
    pub fn frame(&mut self, source: &mut impl EventSource) -> bool {
        if self.state.game_over {
            return false;
        }

        self.events.clear();
        source.poll(&self.state, &mut self.events);
        for _ in 0..self.spawn_timer.advance(self.frame_dt) {
            self.events.push(InputEvent::TimerFired(TimerId::EnemySpawn));
        }

        self.input.clear();
        for event in &self.events {
            let command = match *event {
                InputEvent::Quit => Some(Command::Quit),
                InputEvent::KeyDown(key) => key.direction().map(Command::Press),
                InputEvent::KeyUp(key) => key.direction().map(Command::Release),
                InputEvent::TimerFired(TimerId::EnemySpawn) => Some(Command::SpawnEnemy),
            };
            if let Some(command) = command {
                self.input.push(command);
            }
        }

        tick(&mut self.state, &self.input);
        self.dispatch_events();

        if self.state.game_over {
            self.spawn_timer.disarm();
            return false;
        }

        self.renderer.present(&build_frame(&self.state));
        true
    }

    /// Run frames until the source quits. Returns the number of frames rendered.
    pub fn run(&mut self, source: &mut impl EventSource, clock: &mut FrameClock) -> u64 {
        let mut frames = 0;
        while self.frame(source) {
            frames += 1;
            clock.tick();
        }
        log::info!(
            "Session over after {} frames: score {}, best {}",
            frames,
            self.state.score,
            self.state.best
        );
        frames
    }

    fn dispatch_events(&mut self) {
        for event in self.state.drain_events() {
            match event {
                GameEvent::Started => log::info!("Game started"),
                GameEvent::CoinCollected { score } => {
                    log::debug!("Coin collected, score {}", score);
                    self.audio.play(Cue::CoinPickup);
                }
                GameEvent::PlayerHit { .. } => self.audio.play(Cue::Lose),
                GameEvent::Quit => log::info!("Quit requested"),
                GameEvent::EnemySpawned { .. } | GameEvent::EnemiesCulled { .. } => {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::platform::{Key, ScriptedInput};
    use crate::renderer::Frame;
    use crate::sim::{Direction, EntityClass, EntityKind, Rect};
    use glam::Vec2;

    #[derive(Default)]
    struct AudioLog(Vec<Cue>);

    impl AudioSink for AudioLog {
        fn play(&mut self, cue: Cue, _volume: f32) {
            self.0.push(cue);
        }
    }

    #[derive(Default)]
    struct FrameLog(Vec<Frame>);

    impl RenderSink for FrameLog {
        fn present(&mut self, frame: &Frame) {
            self.0.push(frame.clone());
        }
    }

    fn settings() -> Settings {
        Settings {
            seed: Some(11),
            ..Settings::default()
        }
    }

    fn session(settings: &Settings) -> Session<AudioLog, FrameLog> {
        Session::new(settings, AudioLog::default(), FrameLog::default()).unwrap()
    }

    fn hud(frame: &Frame) -> Vec<&str> {
        frame.texts.iter().map(|t| t.text.as_str()).collect()
    }

    const RIGHT: Key = Key::Arrow(Direction::Right);

    #[test]
    fn test_end_to_end_coin_then_enemy() {
        let mut session = session(&settings());
        assert_eq!(session.phase(), SessionPhase::NotStarted);
        assert_eq!((session.state().score, session.state().best), (0, 0));

        // coin just out of reach to the right
        let state = session.state_mut();
        state.world.retain(|e| e.class() != EntityClass::Coin);
        let coin = Rect::square(
            Vec2::new(state.player.rect.right() + 10.0, state.player.rect.top() + 10.0),
            COIN_SIZE,
        );
        state.world.spawn(EntityKind::Coin, coin);

        let mut input = ScriptedInput::new()
            .frame([InputEvent::KeyDown(RIGHT)])
            .idle(1)
            .frame([InputEvent::KeyUp(RIGHT)]);

        assert!(session.frame(&mut input));
        assert_eq!(session.phase(), SessionPhase::Running);
        assert_eq!(session.state().player.velocity(), Vec2::new(PLAYER_SPEED, 0.0));
        assert_eq!(session.state().score, 0);

        assert!(session.frame(&mut input));
        assert_eq!(session.state().score, 1);
        let coins: Vec<_> = session.state().world.coins().map(|c| c.rect).collect();
        assert_eq!(coins.len(), 1);
        assert_ne!(coins[0], coin);
        assert!(!coins[0].intersects(&session.state().player.rect));

        let center = session.state().player.rect.center();
        session
            .state_mut()
            .world
            .spawn(EntityKind::Enemy { vel: Vec2::ZERO }, Rect::square(center, ENEMY_SIZE));
        assert!(session.frame(&mut input));
        assert_eq!((session.state().score, session.state().best), (0, 1));
        assert_eq!(session.state().world.count(EntityClass::Enemy), 0);

        assert_eq!(session.audio().sink().0, vec![Cue::CoinPickup, Cue::Lose]);
        assert!(session.state().events.is_empty());
        let frames = &session.renderer().0;
        assert_eq!(frames.len(), 3);
        assert_eq!(hud(&frames[0]), vec!["score: 0", "best: 0"]);
        assert_eq!(hud(&frames[1]), vec!["score: 1", "best: 0"]);
        assert_eq!(hud(&frames[2]), vec!["score: 0", "best: 1"]);

        // script exhausted: quit, nothing more drawn
        assert!(!session.frame(&mut input));
        assert_eq!(session.phase(), SessionPhase::Stopped);
        assert_eq!(session.renderer().0.len(), 3);
    }

    #[test]
    fn test_timer_spawns_only_after_start() {
        let mut settings = settings();
        settings.tuning.enemy_spawn_interval_ms = 20;
        let mut session = session(&settings);

        let mut input = ScriptedInput::new().idle(30).endless();
        for _ in 0..30 {
            assert!(session.frame(&mut input));
        }
        assert_eq!(session.state().world.count(EntityClass::Enemy), 0);
        assert!(!session.state().started);

        let mut input = ScriptedInput::new()
            .frame([InputEvent::KeyDown(Key::Arrow(Direction::Up))])
            .idle(4);
        for _ in 0..5 {
            assert!(session.frame(&mut input));
        }
        assert!(session.state().world.count(EntityClass::Enemy) >= 3);
    }

    #[test]
    fn test_other_keys_do_not_start() {
        let mut session = session(&settings());
        let mut input = ScriptedInput::new().frame([InputEvent::KeyDown(Key::Other(32))]);
        assert!(session.frame(&mut input));
        assert!(!session.state().started);
        // caption still shown
        assert_eq!(hud(&session.renderer().0[0]).len(), 3);
    }

    #[test]
    fn test_quit_drops_rest_of_frame() {
        let mut session = session(&settings());
        let mut input = ScriptedInput::new().frame([
            InputEvent::Quit,
            InputEvent::KeyDown(RIGHT),
        ]);
        assert!(!session.frame(&mut input));
        assert!(!session.state().started);
        assert!(session.renderer().0.is_empty());
        assert_eq!(session.state().time_ticks, 0);
        // stays stopped
        assert!(!session.frame(&mut input));
    }

    #[test]
    fn test_run_until_script_ends() {
        let mut session = session(&settings());
        let mut input = ScriptedInput::new().idle(5);
        let mut clock = FrameClock::unthrottled(Duration::from_secs(1) / 60);
        assert_eq!(session.run(&mut input, &mut clock), 5);
        assert_eq!(clock.frames(), 5);
        assert_eq!(session.renderer().0.len(), 5);
    }

    #[test]
    fn test_invalid_settings_rejected() {
        let mut settings = settings();
        settings.frame_rate = 0;
        let result = Session::new(&settings, AudioLog::default(), FrameLog::default());
        assert!(matches!(result, Err(StartupError::InvalidSetting { field: "frame_rate", .. })));
    }

    #[test]
    fn test_same_seed_same_session() {
        let run = || {
            let mut settings = settings();
            settings.tuning.enemy_spawn_interval_ms = 100;
            let mut session = session(&settings);
            let mut input = ScriptedInput::new()
                .frame([InputEvent::KeyDown(Key::Arrow(Direction::Up))])
                .idle(120);
            let mut clock = FrameClock::unthrottled(settings.frame_duration());
            session.run(&mut input, &mut clock);
            session.renderer().0.clone()
        };
        assert_eq!(run(), run());
    }
}
