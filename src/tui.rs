//! TUI (Terminal User Interface) module for Hangman
//!
//! This module provides a full-screen terminal interface using Ratatui.
//!
//! # State Machine
//! - `Guessing` → `RoundOver` (after the outcome is shown) → `AskingPlayAgain` → back to `Guessing`

use crate::art::{GALLOWS_HEIGHT, gallows};
use crate::game_state::{GameInterface, RoundOutcome, UserAction};
use crate::round::{MAX_MISSES, Round, find_ignore_case};
use crate::{debug_log, info_log};
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use std::io;
use std::time::Duration;

const EVENT_POLL_TIMEOUT_MS: u64 = 100;
const GALLOWS_PANEL_WIDTH: u16 = 14;
#[allow(clippy::cast_possible_truncation)]
const BOARD_HEIGHT: u16 = GALLOWS_HEIGHT as u16 + 2;

const HEADER_STYLE: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);
const ERROR_STYLE: Style = Style::new().fg(Color::Red);
const SUCCESS_STYLE: Style = Style::new().fg(Color::Green).add_modifier(Modifier::BOLD);
const MESSAGE_STYLE: Style = Style::new().fg(Color::Cyan);
const HIT_STYLE: Style = Style::new().fg(Color::Green);
const MISS_STYLE: Style = Style::new().fg(Color::Red);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TuiState {
    Guessing,
    RoundOver,
    AskingPlayAgain,
}

/// Context for rendering the UI.
struct RenderContext<'a> {
    round: Option<&'a Round>,
    state: TuiState,
    message: &'a str,
    error_message: &'a str,
    status: &'a str,
}

/// Main TUI interface component.
pub struct TuiInterface {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    round: Option<Round>,
    state: TuiState,
    message: String,
    error_message: String,
    status: String,
}

impl TuiInterface {
    pub fn new() -> Result<Self, io::Error> {
        info_log!("TuiInterface::new() - Initializing TUI");
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, cursor::Hide)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        info_log!("Terminal setup complete: raw mode, alternate screen, cursor hidden");

        Ok(Self {
            terminal,
            round: None,
            state: TuiState::Guessing,
            message: String::new(),
            error_message: String::new(),
            status: "Ready".to_string(),
        })
    }

    pub fn cleanup(&mut self) -> Result<(), io::Error> {
        disable_raw_mode()?;
        execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            cursor::Show
        )?;
        Ok(())
    }

    fn draw(&mut self) -> Result<(), io::Error> {
        let ctx = RenderContext {
            round: self.round.as_ref(),
            state: self.state,
            message: &self.message,
            error_message: &self.error_message,
            status: &self.status,
        };

        self.terminal.draw(|f| {
            Self::render_static(f, &ctx);
        })?;
        Ok(())
    }

    fn draw_or_log(&mut self) {
        if let Err(e) = self.draw() {
            debug_log!("Draw error: {}", e);
        }
    }

    fn render_static(f: &mut Frame, ctx: &RenderContext) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),            // Title
                Constraint::Length(BOARD_HEIGHT), // Gallows and word
                Constraint::Min(3),               // Messages
                Constraint::Length(3),            // Status line
                Constraint::Length(3),            // Instructions
            ])
            .split(f.area());

        Self::render_title(f, chunks[0]);
        Self::render_board(f, chunks[1], ctx.round);
        Self::render_messages(f, chunks[2], ctx.message, ctx.error_message);
        Self::render_status(f, chunks[3], ctx.status);
        Self::render_instructions(f, chunks[4], ctx.state);
    }

    fn render_title(f: &mut Frame, area: Rect) {
        let title = Paragraph::new("HANGMAN")
            .style(HEADER_STYLE)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(title, area);
    }

    fn render_board(f: &mut Frame, area: Rect, round: Option<&Round>) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(GALLOWS_PANEL_WIDTH), Constraint::Min(20)])
            .split(area);

        let misses = round.map_or(0, Round::misses);
        let drawing = Paragraph::new(gallows(misses))
            .block(Block::default().title("Gallows").borders(Borders::ALL));
        f.render_widget(drawing, columns[0]);

        let lines = round.map(Self::word_lines).unwrap_or_default();
        let word = Paragraph::new(lines)
            .block(Block::default().title("Word").borders(Borders::ALL))
            .wrap(Wrap { trim: false });
        f.render_widget(word, columns[1]);
    }

    fn word_lines(round: &Round) -> Vec<Line<'static>> {
        let spaced: Vec<String> = round.visible().chars().map(String::from).collect();
        let mut guessed = vec![Span::raw("Guessed: ")];
        for &letter in round.guessed() {
            let style = if find_ignore_case(round.word(), letter).is_some() {
                HIT_STYLE
            } else {
                MISS_STYLE
            };
            guessed.push(Span::styled(format!("{letter} "), style));
        }

        vec![
            Line::from(""),
            Line::from(Span::styled(format!("  {}", spaced.join(" ")), SUCCESS_STYLE)),
            Line::from(""),
            Line::from(format!("Misses: {} / {MAX_MISSES}", round.misses())),
            Line::from(guessed),
        ]
    }

    fn render_messages(f: &mut Frame, area: Rect, message: &str, error_message: &str) {
        let mut lines = Vec::new();
        if !message.is_empty() {
            lines.push(Line::from(Span::styled(message.to_string(), MESSAGE_STYLE)));
        }
        if !error_message.is_empty() {
            lines.push(Line::from(Span::styled(error_message.to_string(), ERROR_STYLE)));
        }

        let paragraph = Paragraph::new(lines)
            .block(Block::default().title("Information").borders(Borders::ALL))
            .wrap(Wrap { trim: true });
        f.render_widget(paragraph, area);
    }

    fn render_status(f: &mut Frame, area: Rect, status: &str) {
        let status_text = if status.is_empty() { "Ready" } else { status };
        let paragraph = Paragraph::new(status_text)
            .style(HEADER_STYLE)
            .block(Block::default().borders(Borders::ALL).title("Status"));
        f.render_widget(paragraph, area);
    }

    fn render_instructions(f: &mut Frame, area: Rect, state: TuiState) {
        let text = match state {
            TuiState::Guessing => "Type a letter to guess | ESC: Quit",
            TuiState::RoundOver => "Press any key to continue",
            TuiState::AskingPlayAgain => "Play another round? Y: Yes | N / ESC: No",
        };

        let paragraph = Paragraph::new(text)
            .style(Style::default().fg(Color::Gray))
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(paragraph, area);
    }

    /// Wait for the next key press, ignoring every other event.
    fn next_key(&mut self) -> Result<KeyEvent, io::Error> {
        loop {
            if !event::poll(Duration::from_millis(EVENT_POLL_TIMEOUT_MS))? {
                continue;
            }

            match event::read()? {
                // Only process Press events, ignore Release and Repeat to avoid double input
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    debug_log!(
                        "next_key() - code={:?}, modifiers={:?}",
                        key.code,
                        key.modifiers
                    );
                    return Ok(key);
                }
                Event::Resize(_, _) => self.draw_or_log(),
                other => {
                    debug_log!("next_key() - Ignoring event: {:?}", other);
                }
            }
        }
    }

    fn has_modifier_keys(key: &KeyEvent) -> bool {
        key.modifiers.contains(KeyModifiers::ALT) || key.modifiers.contains(KeyModifiers::CONTROL)
    }

    /// Map a key to a guess. `Err` carries a message for rejected keys.
    fn guess_from_key(key: &KeyEvent) -> Result<Option<UserAction>, String> {
        if Self::has_modifier_keys(key) {
            return Ok(None);
        }
        match key.code {
            KeyCode::Esc => Ok(Some(UserAction::Exit)),
            KeyCode::Char(c) if c.is_ascii_alphabetic() => Ok(Some(UserAction::Guess(c))),
            KeyCode::Char(c) => Err(format!("Only letters can be guessed! ('{c}' is not a letter)")),
            _ => Ok(None),
        }
    }

    fn answer_from_key(key: &KeyEvent) -> Option<bool> {
        match key.code {
            KeyCode::Char('y' | 'Y') => Some(true),
            KeyCode::Char('n' | 'N') | KeyCode::Esc => Some(false),
            _ => None,
        }
    }
}

impl GameInterface for TuiInterface {
    fn display_round(&mut self, round: &Round) {
        if self.state != TuiState::Guessing {
            self.message.clear();
        }
        self.state = TuiState::Guessing;
        self.round = Some(round.clone());
        self.status = format!("Misses left: {}", round.misses_left());
        self.draw_or_log();
    }

    fn read_guess(&mut self) -> Option<UserAction> {
        loop {
            if self.draw().is_err() {
                info_log!("read_guess() - Draw failed, returning Exit");
                return Some(UserAction::Exit);
            }

            let key = match self.next_key() {
                Ok(key) => key,
                Err(e) => {
                    info_log!("read_guess() - Input error {}, returning Exit", e);
                    return Some(UserAction::Exit);
                }
            };

            match Self::guess_from_key(&key) {
                Ok(Some(action)) => {
                    self.error_message.clear();
                    info_log!("read_guess() - Action received: {:?}", action);
                    return Some(action);
                }
                Ok(None) => {}
                Err(message) => {
                    debug_log!("read_guess() - {}", message);
                    self.error_message = message;
                }
            }
        }
    }

    fn display_outcome(&mut self, round: &Round, outcome: RoundOutcome) {
        self.round = Some(round.clone());
        self.state = TuiState::RoundOver;
        self.message = match outcome {
            RoundOutcome::Won => format!("You found the word \"{}\"!", round.word()),
            RoundOutcome::Lost => format!("Out of guesses. The word was \"{}\".", round.word()),
            RoundOutcome::Abandoned => format!("Round abandoned. The word was \"{}\".", round.word()),
        };
        self.status = "Round over".to_string();
        self.draw_or_log();

        // Abandoning already took a key press, so the result needs no confirmation
        if outcome != RoundOutcome::Abandoned
            && let Err(e) = self.next_key()
        {
            debug_log!("display_outcome() - Input error: {}", e);
        }
    }

    fn ask_play_again(&mut self) -> bool {
        self.state = TuiState::AskingPlayAgain;
        self.status = "Play another round?".to_string();
        loop {
            self.draw_or_log();
            match self.next_key() {
                Ok(key) => {
                    if let Some(answer) = Self::answer_from_key(&key) {
                        info_log!("ask_play_again() - answer: {}", answer);
                        return answer;
                    }
                }
                Err(e) => {
                    debug_log!("ask_play_again() - Input error: {}", e);
                    return false;
                }
            }
        }
    }

    fn display_message(&mut self, message: &str) {
        self.message = message.to_string();
        self.draw_or_log();
    }
}

impl Drop for TuiInterface {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}
