//! TUI application state and logic

use crate::core::Difficulty;
use crate::session::{GameSession, GuessOutcome, MachineState, SessionError, SessionSnapshot};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::Rng;
use rand::rngs::ThreadRng;
use super::rendering::{ClickTarget, click_target};
use ratatui::{Terminal, backend::CrosstermBackend, layout::Rect};
use std::cell::RefCell;
use std::io;
use std::rc::Rc;

/// Application state
pub struct App<'a, R: Rng = ThreadRng> {
    pub session: GameSession<'a, R>,
    /// Latest snapshot published by the session
    pub snapshot: Rc<RefCell<SessionSnapshot>>,
    /// Highlighted row of the start screen
    pub menu_index: usize,
    pub messages: Vec<Message>,
    pub should_quit: bool,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<'a, R: Rng> App<'a, R> {
    #[must_use]
    pub fn new(mut session: GameSession<'a, R>) -> Self {
        let snapshot = Rc::new(RefCell::new(session.snapshot()));
        let sink = Rc::clone(&snapshot);
        session.subscribe(move |latest| *sink.borrow_mut() = latest.clone());

        Self {
            session,
            snapshot,
            menu_index: 0,
            messages: vec![Message {
                text: "Welcome! Choose a difficulty to start.".to_string(),
                style: MessageStyle::Info,
            }],
            should_quit: false,
        }
    }

    #[must_use]
    pub fn machine_state(&self) -> MachineState {
        self.snapshot.borrow().machine_state
    }

    pub fn start_game(&mut self, difficulty: Difficulty) {
        match self.session.start_game(difficulty) {
            Ok(snapshot) => {
                let letters = snapshot.target_word.as_ref().map_or(0, crate::core::Word::len);
                self.messages.clear();
                self.add_message(
                    &format!("{difficulty} game started: {letters} letters to find"),
                    MessageStyle::Info,
                );
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    pub fn guess(&mut self, letter: char) {
        match self.session.guess(letter) {
            GuessOutcome::Correct {
                letter,
                occurrences,
            } => {
                self.add_message(
                    &format!("{letter} is in the word ({occurrences}x)"),
                    MessageStyle::Success,
                );
            }
            GuessOutcome::Incorrect { letter, remaining } => {
                self.add_message(
                    &format!("No {letter}! {remaining} misses left"),
                    MessageStyle::Error,
                );
            }
            GuessOutcome::AlreadyGuessed(letter) => {
                self.add_message(&format!("Already guessed {letter}"), MessageStyle::Info);
            }
            GuessOutcome::NotALetter(_)
            | GuessOutcome::RoundOver
            | GuessOutcome::NoActiveRound => {}
        }

        match self.machine_state() {
            MachineState::Won => self.add_message(
                "🎉 You Got It! Press Enter to play again",
                MessageStyle::Success,
            ),
            MachineState::Lost => self.add_message(
                "💀 Nice Try! Press Enter to try again",
                MessageStyle::Error,
            ),
            MachineState::Start | MachineState::Playing => {}
        }
    }

    pub fn restart(&mut self) {
        match self.session.restart() {
            Ok(_) => {
                self.messages.clear();
                self.add_message("New round started!", MessageStyle::Info);
            }
            Err(SessionError::RoundInProgress) => {
                self.add_message("Finish this round first (Esc for menu)", MessageStyle::Info);
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    pub fn return_to_start(&mut self) {
        self.session.return_to_start();
        self.messages.clear();
        self.add_message("Choose a difficulty to start.", MessageStyle::Info);
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.machine_state() {
            MachineState::Start => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                KeyCode::Up | KeyCode::Char('k') => {
                    self.menu_index = self.menu_index.saturating_sub(1);
                }
                KeyCode::Down | KeyCode::Char('j') => {
                    self.menu_index = (self.menu_index + 1).min(Difficulty::ALL.len() - 1);
                }
                KeyCode::Char(c @ '1'..='3') => {
                    self.menu_index = (c as usize) - ('1' as usize);
                    self.start_game(Difficulty::ALL[self.menu_index]);
                }
                KeyCode::Enter => self.start_game(Difficulty::ALL[self.menu_index]),
                _ => {}
            },
            MachineState::Playing => match key.code {
                KeyCode::Esc => self.return_to_start(),
                KeyCode::Enter => self.restart(),
                KeyCode::Char(c) if c.is_ascii_alphabetic() => self.guess(c),
                _ => {}
            },
            MachineState::Won | MachineState::Lost => match key.code {
                KeyCode::Enter => self.restart(),
                KeyCode::Esc => self.return_to_start(),
                KeyCode::Char('q') => self.should_quit = true,
                _ => {}
            },
        }
    }

    /// Apply one mouse event; `area` is the frame the last draw used
    pub fn handle_mouse(&mut self, mouse: MouseEvent, area: Rect) {
        if !matches!(mouse.kind, MouseEventKind::Down(_)) {
            return;
        }

        match click_target(area, self.machine_state(), mouse.column, mouse.row) {
            Some(ClickTarget::Tier(difficulty)) => {
                self.menu_index = Difficulty::ALL
                    .iter()
                    .position(|&d| d == difficulty)
                    .unwrap_or_default();
                self.start_game(difficulty);
            }
            Some(ClickTarget::Key(letter)) => self.guess(letter),
            None => {}
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<R: Rng>(app: App<'_, R>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend, R: Rng>(
    terminal: &mut Terminal<B>,
    mut app: App<'_, R>,
) -> Result<()> {
    loop {
        let area = terminal.draw(|f| super::rendering::ui(f, &app))?.area;

        match event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key),
            Event::Mouse(mouse) => app.handle_mouse(mouse, area),
            _ => {}
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
