use color_eyre::Result;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::time::{Duration, Instant};

use crate::audio::AudioManager;
use crate::config::Settings;
use crate::game::{Game, GameEvent};
use crate::input::{InputAction, InputManager};
use crate::renderer::{GameRenderer, RenderView};

/// The main application which holds the state and logic of the application.
pub struct App {
    running: bool,
    game: Game,
    /// Longest step handed to the simulation, in seconds
    max_frame_dt: f32,
    frame_sleep: Duration,
    /// Frames info
    last_frame_time: Instant,
    fps: u32,
    /// internal components
    input_manager: InputManager,
    renderer: GameRenderer,
    audio_manager: AudioManager,
}

impl App {
    /// Construct a new instance of [`App`].
    pub fn new(settings: &Settings, audio_manager: AudioManager) -> Self {
        Self {
            running: true,
            game: Game::new(settings),
            max_frame_dt: settings.max_frame_dt,
            frame_sleep: Duration::from_millis(settings.frame_sleep_ms),
            last_frame_time: Instant::now(),
            fps: 0,
            input_manager: InputManager::new(),
            renderer: GameRenderer::new(),
            audio_manager,
        }
    }

    /// Run the application's main loop.
    pub fn run(mut self, terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>) -> Result<()> {
        while self.running {
            let now = Instant::now();
            let frame_time = now.duration_since(self.last_frame_time);
            self.last_frame_time = now;
            if frame_time.as_micros() > 0 {
                self.fps = (1_000_000 / frame_time.as_micros()) as u32;
            }

            terminal.draw(|frame| {
                let view = RenderView {
                    game_state: self.game.state(),
                    player: self.game.player(),
                    enemies: self.game.enemies(),
                    lives: self.game.lives(),
                    round: self.game.round(),
                    speed_multiplier: self.game.speed_multiplier(),
                    area: frame.area(),
                    fps: self.fps,
                };
                self.renderer.render(frame, &view);
            })?;

            self.input_manager.poll_events(self.game.state())?;
            let actions = self.input_manager.take_actions();
            self.process_actions(&actions);

            let dt = frame_time.as_secs_f32().min(self.max_frame_dt);
            let events = self.game.update(dt);
            self.handle_events(&events);

            // Small sleep to prevent CPU spinning
            std::thread::sleep(self.frame_sleep);
        }
        Ok(())
    }

    /// Process input actions and update game state accordingly
    fn process_actions(&mut self, actions: &[InputAction]) {
        for action in actions {
            match action {
                InputAction::Quit => {
                    log::info!("Quit requested");
                    self.running = false;
                }
                InputAction::Restart => {
                    self.game.restart();
                }
                InputAction::NextRound => {
                    self.game.next_round();
                }
                InputAction::Move(direction) => {
                    if let Some(event) = self.game.handle_input(*direction) {
                        self.handle_events(&[event]);
                    }
                }
            }
        }
    }

    fn handle_events(&self, events: &[GameEvent]) {
        for event in events {
            match event {
                GameEvent::Collision { .. } | GameEvent::Lost => {
                    self.audio_manager.play_hit_sound();
                }
                GameEvent::Won => {
                    self.audio_manager.play_win_sound();
                }
            }
        }
    }
}
