use crate::core::{Cell, Direction, GameUpdate, Grid};
use crate::models::GameRenderState;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction as LayoutDirection, Layout},
    style::{Color, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph},
};
use std::io;

pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>, Box<dyn std::error::Error>>
{
    crossterm::terminal::enable_raw_mode()?;
    crossterm::execute!(io::stdout(), crossterm::terminal::EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(io::stdout());
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

pub fn cleanup_terminal() -> Result<(), Box<dyn std::error::Error>> {
    crossterm::terminal::disable_raw_mode()?;
    crossterm::execute!(io::stdout(), crossterm::terminal::LeaveAlternateScreen)?;
    Ok(())
}

pub fn render_game(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    state: &GameRenderState,
) -> Result<(), Box<dyn std::error::Error>> {
    terminal.draw(|f| {
        let chunks = Layout::default()
            .direction(LayoutDirection::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(3)])
            .split(f.area());

        // Game area
        let game_text = state.grid.map(render_grid_to_text).unwrap_or_default();
        let game_paragraph = Paragraph::new(game_text)
            .block(Block::default().borders(Borders::ALL).title(state.title()))
            .style(Style::default().fg(Color::Black).bg(BACKGROUND))
            .alignment(Alignment::Center);
        f.render_widget(game_paragraph, chunks[0]);

        let instruction_paragraph = Paragraph::new(status_line(state))
            .block(Block::default().borders(Borders::ALL).title("Instructions"))
            .style(Style::default().fg(Color::Cyan))
            .alignment(Alignment::Center);
        f.render_widget(instruction_paragraph, chunks[1]);
    })?;
    Ok(())
}

const CONTROLS: &str = "WASD/Arrows move, R restart, P/N level, Q quit";

fn status_line(state: &GameRenderState) -> String {
    if let Some(solved) = state.solved_level {
        return format!("Level {} solved! | {}", solved + 1, CONTROLS);
    }
    match state.last_update {
        Some(GameUpdate::Blocked(reason)) => format!("{} | {}", CONTROLS, reason),
        Some(GameUpdate::Moved(change_type)) => format!("{} | Last: {:?}", CONTROLS, change_type),
        None => CONTROLS.to_string(),
    }
}

const BACKGROUND: Color = Color::Rgb(0xFF, 0xFF, 0xBE);

fn cell_color(cell: Cell) -> Option<Color> {
    match cell {
        Cell::Player => Some(Color::Rgb(0xA7, 0x87, 0xFF)),
        Cell::PlayerOnStorage => Some(Color::Rgb(0x9E, 0x77, 0xFF)),
        Cell::Box => Some(Color::Rgb(0xFF, 0xC9, 0x7E)),
        Cell::BoxOnStorage => Some(Color::Rgb(0x96, 0xFF, 0x7F)),
        Cell::Storage => Some(Color::Rgb(0x9C, 0xE5, 0xFF)),
        Cell::Wall => Some(Color::Rgb(0xFF, 0x93, 0xD1)),
        Cell::Empty => None,
    }
}

pub fn render_grid_to_text(grid: &Grid) -> Text<'static> {
    let lines: Vec<Line> = grid
        .rows()
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .iter()
                .map(|&c| {
                    let style = match cell_color(c) {
                        Some(color) => Style::default().fg(Color::Black).bg(color),
                        None => Style::default(),
                    };
                    Span::styled(c.glyph().to_string(), style)
                })
                .collect();
            Line::from(spans)
        })
        .collect();
    Text::from(lines)
}

#[derive(Debug, PartialEq, Eq)]
pub enum ConsoleInput {
    Move(Direction),
    Restart,
    PreviousLevel,
    NextLevel,
    Quit,
    Timeout,
    Unknown,
}

pub fn handle_input() -> Result<ConsoleInput, Box<dyn std::error::Error>> {
    if event::poll(std::time::Duration::from_millis(50))? {
        if let Event::Key(KeyEvent {
            code,
            kind: KeyEventKind::Press,
            ..
        }) = event::read()?
        {
            return Ok(input_from_key(code));
        }
    }
    Ok(ConsoleInput::Timeout)
}

pub fn input_from_key(code: KeyCode) -> ConsoleInput {
    match code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => ConsoleInput::Quit,
        KeyCode::Char('w') | KeyCode::Char('W') | KeyCode::Up => ConsoleInput::Move(Direction::Up),
        KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Down => {
            ConsoleInput::Move(Direction::Down)
        }
        KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Left => {
            ConsoleInput::Move(Direction::Left)
        }
        KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Right => {
            ConsoleInput::Move(Direction::Right)
        }
        KeyCode::Char('r') | KeyCode::Char('R') => ConsoleInput::Restart,
        KeyCode::Char('p') | KeyCode::Char('P') | KeyCode::Char('[') => {
            ConsoleInput::PreviousLevel
        }
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Char(']') => ConsoleInput::NextLevel,
        _ => ConsoleInput::Unknown,
    }
}
