use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Duration;

use crate::entities::{Direction, GameState};

/// Represents semantic game actions that can be triggered by input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    Move(Direction),
    Restart,
    NextRound,
    Quit,
}

/// Manages input polling and translates raw key events into game actions.
/// Every press is one step; holding a key does not repeat moves.
#[derive(Default)]
pub struct InputManager {
    actions: Vec<InputAction>,
}

impl InputManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Polls for all pending input events and collects this frame's actions.
    /// Should be called once per frame before `take_actions`.
    pub fn poll_events(&mut self, game_state: GameState) -> color_eyre::Result<()> {
        while event::poll(Duration::from_millis(0))? {
            if let Event::Key(key_event) = event::read()? {
                if let Some(action) = map_key(key_event, game_state) {
                    self.actions.push(action);
                }
            }
        }

        Ok(())
    }

    /// Returns the actions collected since the last call
    pub fn take_actions(&mut self) -> Vec<InputAction> {
        std::mem::take(&mut self.actions)
    }
}

/// Maps one key event to an action for the given state
pub fn map_key(key_event: KeyEvent, game_state: GameState) -> Option<InputAction> {
    // Only presses count
    if key_event.kind != KeyEventKind::Press {
        return None;
    }

    // Quit works in any state
    if matches!(
        key_event.code,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc
    ) || (key_event.code == KeyCode::Char('c')
        && key_event.modifiers.contains(KeyModifiers::CONTROL))
    {
        return Some(InputAction::Quit);
    }

    if matches!(key_event.code, KeyCode::Char('r') | KeyCode::Char('R')) {
        return Some(InputAction::Restart);
    }

    match game_state {
        GameState::Playing => {
            let direction = match key_event.code {
                KeyCode::Char('w') | KeyCode::Char('W') | KeyCode::Up => Direction::Up,
                KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Down => Direction::Down,
                KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Left => Direction::Left,
                KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Right => Direction::Right,
                _ => return None,
            };
            Some(InputAction::Move(direction))
        }
        GameState::Won => match key_event.code {
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Enter => {
                Some(InputAction::NextRound)
            }
            _ => None,
        },
        GameState::Lost => None,
    }
}
