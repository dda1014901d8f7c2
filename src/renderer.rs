use crate::board::{BOARD_WIDTH, LANE_COUNT, ROW_COUNT, row_of};
use crate::entities::{Enemy, EnemyKind, GameState, Player};
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Board pixels per terminal column
const PIXELS_PER_COLUMN: f32 = 10.0;
/// Terminal lines per board row
const ROW_LINES: u16 = 3;
/// Sprites are drawn this many columns into their cell
const SPRITE_INSET: i32 = 2;

const CONTROLS_HINT: &str = "[WASD/Arrows: Move] [N: Next round] [R: Restart] [Q: Quit]";

/// View struct that holds all game state needed for rendering
pub struct RenderView<'a> {
    pub game_state: GameState,
    pub player: &'a Player,
    pub enemies: &'a [Enemy],
    pub lives: u8,
    pub round: u32,
    pub speed_multiplier: f32,
    pub area: Rect,
    pub fps: u32,
}

/// Handles all rendering responsibilities for the game
#[derive(Default)]
pub struct GameRenderer;

impl GameRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Main render method that dispatches to state-specific renderers
    pub fn render(&self, frame: &mut Frame, view: &RenderView) {
        self.render_game(frame, view);
        match view.game_state {
            GameState::Playing => {}
            GameState::Won => self.render_won(frame, view),
            GameState::Lost => self.render_lost(frame, view),
        }
    }

    /// Terminal column of a board x coordinate, relative to the board's left edge
    pub fn column_of(x: f32) -> i32 {
        (x / PIXELS_PER_COLUMN).floor() as i32 + SPRITE_INSET
    }

    /// Top terminal line of a board row, relative to the board's top edge
    pub fn line_of(y: i32) -> u16 {
        row_of(y).max(0) as u16 * ROW_LINES
    }

    fn board_size() -> (u16, u16) {
        let width = (BOARD_WIDTH / PIXELS_PER_COLUMN).ceil() as u16;
        let height = ROW_COUNT as u16 * ROW_LINES;
        (width, height)
    }

    /// Renders the board, the sprites and the HUD
    fn render_game(&self, frame: &mut Frame, view: &RenderView) {
        let area = view.area;
        let (board_width, board_height) = Self::board_size();

        // Board with a border, centered below the HUD line
        let outer = Rect {
            x: area.x + area.width.saturating_sub(board_width + 2) / 2,
            y: area.y + 1,
            width: (board_width + 2).min(area.width),
            height: (board_height + 2).min(area.height.saturating_sub(2)),
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray));
        let board = block.inner(outer);
        frame.render_widget(block, outer);

        // Background rows: water, stone lanes, grass
        for row in 0..ROW_COUNT {
            let row_area = Rect {
                x: board.x,
                y: board.y + row as u16 * ROW_LINES,
                width: board.width,
                height: ROW_LINES,
            };
            if row_area.y + row_area.height > board.y + board.height {
                break;
            }
            let color = match row {
                0 => Color::Blue,
                r if r <= LANE_COUNT => Color::DarkGray,
                _ => Color::Green,
            };
            frame.render_widget(Block::default().style(Style::default().bg(color)), row_area);
        }

        // Render enemies - batched multi-line rendering, skipped while partly off the board
        for enemy in view.enemies {
            let color = match enemy.kind {
                EnemyKind::Bug => Color::Red,
                EnemyKind::Fast => Color::Magenta,
                EnemyKind::VeryFast => Color::Yellow,
            };
            self.render_sprite(
                frame,
                board,
                Self::column_of(enemy.x),
                Self::line_of(enemy.y),
                (enemy.get_width(), enemy.get_height()),
                &enemy.get_sprite_lines(),
                color,
            );
        }

        self.render_sprite(
            frame,
            board,
            Self::column_of(view.player.x as f32),
            Self::line_of(view.player.y),
            (view.player.get_width(), view.player.get_height()),
            &view.player.get_sprite_lines(),
            Color::White,
        );

        // Stats overlay at the top
        let stats = Line::from(vec![
            Span::styled("Lives: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                "♥ ".repeat(view.lives as usize),
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  Hits: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{}", view.player.collision_count),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("  Round: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{}", view.round),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("  Speed: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("x{:.2}", view.speed_multiplier),
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("  FPS: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{}", view.fps),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]);

        let stats_area = Rect {
            x: area.x + 1,
            y: area.y,
            width: area.width.saturating_sub(2),
            height: 1,
        };
        frame.render_widget(Paragraph::new(stats).centered(), stats_area);

        // Controls hint at bottom
        let controls = Line::from(vec![Span::styled(
            CONTROLS_HINT,
            Style::default().fg(Color::DarkGray),
        )]);

        let controls_area = Rect {
            x: area.x + 1,
            y: area.y + area.height.saturating_sub(1),
            width: area.width.saturating_sub(2),
            height: 1,
        };
        frame.render_widget(Paragraph::new(controls).centered(), controls_area);
    }

    #[allow(clippy::too_many_arguments)]
    fn render_sprite(
        &self,
        frame: &mut Frame,
        board: Rect,
        column: i32,
        line: u16,
        (width, height): (u16, u16),
        sprite_lines: &[&'static str],
        color: Color,
    ) {
        if column < 0 || column as u16 + width > board.width || line + height > board.height {
            return;
        }

        let text: Vec<Line> = sprite_lines
            .iter()
            .map(|line| {
                Line::from(*line).style(Style::default().fg(color).add_modifier(Modifier::BOLD))
            })
            .collect();

        let sprite_area = Rect {
            x: board.x + column as u16,
            y: board.y + line,
            width,
            height,
        };
        frame.render_widget(Paragraph::new(text), sprite_area);
    }

    /// Renders the win overlay on top of the board
    fn render_won(&self, frame: &mut Frame, view: &RenderView) {
        let text = vec![
            Line::from(""),
            Line::from("YOU MADE IT ACROSS!").centered().bold().green(),
            Line::from(""),
            Line::from(format!("Round {} cleared", view.round))
                .centered()
                .cyan(),
            Line::from(format!("Hits taken: {}", view.player.collision_count))
                .centered()
                .yellow(),
            Line::from(""),
            Line::from("Press N for the next round").centered().white(),
            Line::from("Press R to restart").centered().white(),
        ];
        self.render_overlay(frame, view.area, text, Color::Green);
    }

    /// Renders the game over overlay
    fn render_lost(&self, frame: &mut Frame, view: &RenderView) {
        let text = vec![
            Line::from(""),
            Line::from("╔═══════════════════════════╗").centered().red(),
            Line::from("║      GAME OVER!           ║")
                .centered()
                .red()
                .bold(),
            Line::from("╚═══════════════════════════╝").centered().red(),
            Line::from(format!("Reached round {}", view.round))
                .centered()
                .yellow()
                .bold(),
            Line::from(""),
            Line::from("Press R to restart").centered().white(),
            Line::from("Press Q to quit").centered().white(),
        ];
        self.render_overlay(frame, view.area, text, Color::Red);
    }

    fn render_overlay(&self, frame: &mut Frame, area: Rect, text: Vec<Line>, border: Color) {
        let width = 40.min(area.width);
        let height = (text.len() as u16 + 2).min(area.height);
        let overlay_area = Rect {
            x: area.x + (area.width - width) / 2,
            y: area.y + (area.height - height) / 2,
            width,
            height,
        };

        frame.render_widget(
            Paragraph::new(text)
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(border)),
                )
                .alignment(Alignment::Center),
            overlay_area,
        );
    }
}
