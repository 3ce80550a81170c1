//! TUI rendering with ratatui
//!
//! Start screen and game board for the Hangman interface.

use super::app::{App, MessageStyle};
use crate::core::{Difficulty, KeyState, MAX_INCORRECT_GUESSES, RevealedLetter};
use crate::output::formatters::{KEYBOARD_ROWS, gallows_lines};
use crate::session::{MachineState, SessionSnapshot};
use rand::Rng;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph},
};
use std::rc::Rc;

/// Where a mouse click lands on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// Row of the start-screen difficulty list
    Tier(Difficulty),
    /// Key of the on-screen keyboard
    Key(char),
}

/// Width of one drawn keyboard key, e.g. ` Q `
const KEY_WIDTH: u16 = 3;

fn screen_chunks(area: Rect) -> Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(12),   // Main content
            Constraint::Length(7), // Messages
            Constraint::Length(3), // Status bar
        ])
        .split(area)
}

fn main_chunks(area: Rect) -> Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(35), // Figure
            Constraint::Percentage(65), // Word and keyboard
        ])
        .split(area)
}

fn board_chunks(area: Rect) -> Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Word
            Constraint::Min(5),    // Keyboard
            Constraint::Length(3), // Misses gauge
        ])
        .split(area)
}

fn bordered(title: &str) -> Block<'_> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
}

/// Main UI rendering function
pub fn ui<R: Rng>(f: &mut Frame, app: &App<'_, R>) {
    let snapshot = app.snapshot.borrow();
    let chunks = screen_chunks(f.area());

    render_header(f, &snapshot, chunks[0]);

    if snapshot.machine_state == MachineState::Start {
        render_start_screen(f, app, chunks[1]);
    } else {
        let panes = main_chunks(chunks[1]);
        render_figure(f, &snapshot, panes[0]);
        render_board(f, &snapshot, panes[1]);
    }

    render_messages(f, app, chunks[2]);
    render_status(f, app, &snapshot, chunks[3]);
}

/// Map a click at (`column`, `row`) to what `ui` drew there
///
/// `area` is the full frame area.
#[must_use]
pub fn click_target(
    area: Rect,
    machine_state: MachineState,
    column: u16,
    row: u16,
) -> Option<ClickTarget> {
    let chunks = screen_chunks(area);

    match machine_state {
        MachineState::Start => {
            let list = bordered(" Select Difficulty ").inner(chunks[1]);
            if column < list.x || column >= list.right() || row >= list.bottom() {
                return None;
            }
            let index = usize::from(row.checked_sub(list.y)?);
            Difficulty::ALL.get(index).copied().map(ClickTarget::Tier)
        }
        MachineState::Playing => {
            let board = board_chunks(main_chunks(chunks[1])[1]);
            let keys = bordered(" Keyboard ").inner(board[1]);
            if row >= keys.bottom() {
                return None;
            }
            let keyboard_row = KEYBOARD_ROWS.get(usize::from(row.checked_sub(keys.y)?))?;

            // Paragraph centres each line at half the width minus half the line
            let line_width = keyboard_row.len() as u16 * KEY_WIDTH;
            let start = keys.x + (keys.width / 2).saturating_sub(line_width / 2);
            let offset = column.checked_sub(start)?;
            if offset >= line_width || column >= keys.right() {
                return None;
            }
            let letter = keyboard_row.as_bytes()[usize::from(offset / KEY_WIDTH)];
            Some(ClickTarget::Key(letter as char))
        }
        MachineState::Won | MachineState::Lost => None,
    }
}

fn render_header(f: &mut Frame, snapshot: &SessionSnapshot, area: Rect) {
    let title = match snapshot.difficulty {
        Some(difficulty) => format!("🎯 HANGMAN - {difficulty} ({})", difficulty.description()),
        None => "🎯 HANGMAN".to_string(),
    };
    let header = Paragraph::new(title)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn tier_color(difficulty: Difficulty) -> Color {
    match difficulty {
        Difficulty::Easy => Color::Green,
        Difficulty::Medium => Color::Yellow,
        Difficulty::Hard => Color::Red,
    }
}

fn render_start_screen<R: Rng>(f: &mut Frame, app: &App<'_, R>, area: Rect) {
    let items: Vec<ListItem> = app
        .session
        .corpus()
        .tier_sizes()
        .iter()
        .enumerate()
        .map(|(i, &(difficulty, size))| {
            let selected = i == app.menu_index;
            let marker = if selected { "▶ " } else { "  " };
            let mut name_style = Style::default().fg(tier_color(difficulty));
            if selected {
                name_style = name_style.add_modifier(Modifier::BOLD | Modifier::REVERSED);
            }
            ListItem::new(Line::from(vec![
                Span::raw(marker),
                Span::raw(format!("{}. ", i + 1)),
                Span::styled(format!("{:<8}", difficulty.name()), name_style),
                Span::raw(format!("  {:<12}", difficulty.description())),
                Span::styled(
                    format!("({size} words)"),
                    Style::default().fg(Color::DarkGray),
                ),
            ]))
        })
        .collect();

    let menu = List::new(items).block(bordered(" Select Difficulty "));
    f.render_widget(menu, area);
}

fn render_figure(f: &mut Frame, snapshot: &SessionSnapshot, area: Rect) {
    let color = match snapshot.machine_state {
        MachineState::Lost => Color::Red,
        MachineState::Won => Color::Green,
        MachineState::Start | MachineState::Playing => Color::White,
    };

    let lines: Vec<Line> = gallows_lines(snapshot.visible_parts())
        .into_iter()
        .map(|line| Line::styled(line, Style::default().fg(color)))
        .collect();

    let figure = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(bordered(" Gallows "));
    f.render_widget(figure, area);
}

fn render_board(f: &mut Frame, snapshot: &SessionSnapshot, area: Rect) {
    let chunks = board_chunks(area);

    render_word(f, snapshot, chunks[0]);
    render_keyboard(f, snapshot, chunks[1]);
    render_misses(f, snapshot, chunks[2]);
}

fn render_word(f: &mut Frame, snapshot: &SessionSnapshot, area: Rect) {
    let spans: Vec<Span> = snapshot
        .reveal()
        .into_iter()
        .map(|slot| match slot {
            RevealedLetter::Guessed(c) => Span::styled(
                format!(" {c} "),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            RevealedLetter::Missed(c) => Span::styled(
                format!(" {c} "),
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
            RevealedLetter::Hidden => Span::styled(" _ ", Style::default().fg(Color::White)),
        })
        .collect();

    let word = Paragraph::new(vec![Line::from(""), Line::from(spans)])
        .alignment(Alignment::Center)
        .block(bordered(" Word "));
    f.render_widget(word, area);
}

fn render_keyboard(f: &mut Frame, snapshot: &SessionSnapshot, area: Rect) {
    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .bytes()
                .map(|letter| {
                    let style = match snapshot.key_state(letter) {
                        KeyState::Available => Style::default().fg(Color::White),
                        KeyState::Correct => Style::default()
                            .fg(Color::Black)
                            .bg(Color::Green)
                            .add_modifier(Modifier::BOLD),
                        KeyState::Incorrect => Style::default()
                            .fg(Color::DarkGray)
                            .add_modifier(Modifier::CROSSED_OUT),
                        KeyState::Locked => Style::default().fg(Color::DarkGray),
                    };
                    Span::styled(format!(" {} ", letter as char), style)
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let keyboard = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(bordered(" Keyboard "));
    f.render_widget(keyboard, area);
}

fn render_misses(f: &mut Frame, snapshot: &SessionSnapshot, area: Rect) {
    let misses = snapshot.incorrect_count().min(MAX_INCORRECT_GUESSES);
    let wrong: String = snapshot
        .derived
        .incorrect_letters
        .iter()
        .map(|&letter| letter as char)
        .collect();

    let gauge = Gauge::default()
        .block(bordered(" Misses "))
        .gauge_style(Style::default().fg(Color::Red))
        .percent((misses * 100 / MAX_INCORRECT_GUESSES) as u16)
        .label(format!("{misses}/{MAX_INCORRECT_GUESSES} {wrong}"));

    f.render_widget(gauge, area);
}

fn render_messages<R: Rng>(f: &mut Frame, app: &App<'_, R>, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_status<R: Rng>(f: &mut Frame, app: &App<'_, R>, snapshot: &SessionSnapshot, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(35),
            Constraint::Percentage(40),
        ])
        .split(area);

    let mode = Paragraph::new(format!("State: {}", snapshot.machine_state))
        .alignment(Alignment::Center);
    f.render_widget(mode, chunks[0]);

    let stats = app.session.statistics();
    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        stats.played,
        stats.win_rate()
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let help_text = match snapshot.machine_state {
        MachineState::Start => "↑/↓: Select | Enter/1-3: Start | q: Quit",
        MachineState::Playing => "A-Z: Guess | Esc: Menu | Ctrl-C: Quit",
        MachineState::Won | MachineState::Lost => "Enter: Play Again | Esc: Menu | q: Quit",
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::GameSession;
    use crate::wordlists::Corpus;
    use crate::wordlists::loader::words_from_slice;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use ratatui::{Terminal, backend::TestBackend};

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    #[test]
    fn start_screen_lists_tiers() {
        let corpus = Corpus::new(words_from_slice(&["cat", "garden"])).unwrap();
        let app = App::new(GameSession::with_rng(&corpus, StdRng::seed_from_u64(1)));
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();

        terminal.draw(|f| ui(f, &app)).unwrap();
        let text = buffer_text(&terminal);
        assert!(text.contains("Select Difficulty"));
        assert!(text.contains("Easy"));
        assert!(text.contains("Medium"));
        assert!(text.contains("Hard"));
    }

    #[test]
    fn clicks_land_on_drawn_keys() {
        let corpus = Corpus::new(words_from_slice(&["cat"])).unwrap();
        let mut app = App::new(GameSession::with_rng(&corpus, StdRng::seed_from_u64(1)));
        app.start_game(Difficulty::Hard);
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| ui(f, &app)).unwrap();

        let area = Rect::new(0, 0, 100, 30);
        let buffer = terminal.backend().buffer();
        let mut hit = Vec::new();
        for y in 0..30 {
            for x in 0..100 {
                if let Some(ClickTarget::Key(letter)) =
                    click_target(area, MachineState::Playing, x, y)
                {
                    let symbol = buffer.content()[usize::from(y) * 100 + usize::from(x)].symbol();
                    assert!(symbol == " " || symbol == letter.to_string(), "{letter} at {x},{y}");
                    if symbol == letter.to_string() {
                        hit.push(letter);
                    }
                }
            }
        }
        hit.sort_unstable();
        assert_eq!(hit, ('A'..='Z').collect::<Vec<_>>());
    }

    #[test]
    fn clicks_outside_keyboard_miss() {
        let area = Rect::new(0, 0, 100, 30);
        assert_eq!(click_target(area, MachineState::Playing, 0, 0), None);
        assert_eq!(click_target(area, MachineState::Playing, 99, 29), None);
        assert_eq!(click_target(area, MachineState::Won, 60, 10), None);
    }

    #[test]
    fn start_screen_rows_map_to_tiers() {
        let area = Rect::new(0, 0, 100, 30);
        // Header takes three rows, the list border one more
        assert_eq!(
            click_target(area, MachineState::Start, 10, 4),
            Some(ClickTarget::Tier(Difficulty::Easy))
        );
        assert_eq!(
            click_target(area, MachineState::Start, 10, 6),
            Some(ClickTarget::Tier(Difficulty::Hard))
        );
        assert_eq!(click_target(area, MachineState::Start, 10, 7), None);
        assert_eq!(click_target(area, MachineState::Start, 0, 4), None);
    }

    #[test]
    fn game_board_shows_keyboard_and_misses() {
        let corpus = Corpus::new(words_from_slice(&["cat"])).unwrap();
        let mut app = App::new(GameSession::with_rng(&corpus, StdRng::seed_from_u64(1)));
        app.start_game(Difficulty::Hard);
        app.guess('x');
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();

        terminal.draw(|f| ui(f, &app)).unwrap();
        let text = buffer_text(&terminal);
        assert!(text.contains("Keyboard"));
        assert!(text.contains("1/6 X"));
        assert!(text.contains("Gallows"));
    }
}
