use crate::core::{Cell, Direction, MazeGrid, PlayerState, Vec2, GRID_SIZE};
use crate::models::GameRenderState;
use crate::session::{EventSource, GameMode, InputEvent, Prompter, Renderer};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction as LayoutDirection, Layout},
    style::{Color, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph},
};
use std::io::{self, BufRead, Write};

// Tiles: '#' wall, '.' hall, 'S' start, 'E' exit, '*' visited, '@' player.
fn cell_symbol(cell: Cell) -> char {
    match cell {
        Cell::Hall => '.',
        Cell::Wall => '#',
        Cell::Start => 'S',
        Cell::Exit => 'E',
        Cell::Visited => '*',
    }
}

fn cell_color(cell: Cell) -> Color {
    match cell {
        Cell::Hall => Color::DarkGray,
        Cell::Wall => Color::White,
        Cell::Start => Color::Green,
        Cell::Exit => Color::Red,
        Cell::Visited => Color::Blue,
    }
}

/// Builds a grid from symbol art. Anything outside the drawn area is wall.
pub fn parse_level(s: &str) -> MazeGrid {
    let mut cells = [[Cell::Wall; GRID_SIZE]; GRID_SIZE];
    let lines = s.lines().map(str::trim_end).filter(|line| !line.is_empty());
    for (i, line) in lines.take(GRID_SIZE).enumerate() {
        for (j, ch) in line.chars().take(GRID_SIZE).enumerate() {
            let c = match ch {
                '.' | ' ' => Cell::Hall,
                'S' => Cell::Start,
                'E' => Cell::Exit,
                '*' => Cell::Visited,
                _ => Cell::Wall,
            };
            cells[i][j] = c;
        }
    }
    MazeGrid::from_cells(cells)
}

pub fn render_grid_to_string(grid: &MazeGrid, player: Option<&PlayerState>) -> String {
    let mut result = String::new();
    for (i, row) in grid.rows().enumerate() {
        for (j, &c) in row.iter().enumerate() {
            let pos = Vec2::new(i as i32, j as i32);
            if player.is_some_and(|p| p.position() == pos) {
                result.push('@');
            } else {
                result.push(cell_symbol(c));
            }
        }
        result.push('\n');
    }
    result
}

fn render_grid_to_text(grid: &MazeGrid, player: &PlayerState) -> Text<'static> {
    let lines: Vec<Line> = grid
        .rows()
        .enumerate()
        .map(|(i, row)| {
            let spans: Vec<Span> = row
                .iter()
                .enumerate()
                .map(|(j, &c)| {
                    if player.position() == Vec2::new(i as i32, j as i32) {
                        Span::styled("@", Style::default().fg(Color::Yellow))
                    } else {
                        Span::styled(cell_symbol(c).to_string(), Style::default().fg(cell_color(c)))
                    }
                })
                .collect();
            Line::from(spans)
        })
        .collect();
    Text::from(lines)
}

pub fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    crossterm::terminal::enable_raw_mode()?;
    crossterm::execute!(io::stdout(), crossterm::terminal::EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(io::stdout());
    Terminal::new(backend)
}

pub fn cleanup_terminal() -> io::Result<()> {
    crossterm::terminal::disable_raw_mode()?;
    crossterm::execute!(io::stdout(), crossterm::terminal::LeaveAlternateScreen)?;
    Ok(())
}

pub struct TerminalRenderer {
    terminal: Option<Terminal<CrosstermBackend<io::Stdout>>>,
    title: String,
}

impl TerminalRenderer {
    pub fn new(title: impl Into<String>) -> Self {
        TerminalRenderer {
            terminal: None,
            title: title.into(),
        }
    }

    pub fn is_open(&self) -> bool {
        self.terminal.is_some()
    }
}

impl Drop for TerminalRenderer {
    // Restores the terminal when play unwinds before `close`.
    fn drop(&mut self) {
        if self.terminal.take().is_some() {
            cleanup_terminal().ok();
        }
    }
}

impl Renderer for TerminalRenderer {
    fn open(&mut self) -> io::Result<()> {
        if self.terminal.is_none() {
            self.terminal = Some(setup_terminal()?);
        }
        Ok(())
    }

    fn close(&mut self) -> io::Result<()> {
        if self.terminal.take().is_some() {
            cleanup_terminal()?;
        }
        Ok(())
    }

    fn draw_full(&mut self, state: &GameRenderState) -> io::Result<()> {
        let Some(terminal) = self.terminal.as_mut() else {
            return Ok(());
        };
        let title = self.title.as_str();
        terminal.draw(|f| {
            let chunks = Layout::default()
                .direction(LayoutDirection::Vertical)
                .constraints([Constraint::Min(0), Constraint::Length(3)])
                .split(f.area());

            let game_paragraph = Paragraph::new(render_grid_to_text(state.grid, state.player))
                .block(Block::default().borders(Borders::ALL).title(title))
                .alignment(Alignment::Center);
            f.render_widget(game_paragraph, chunks[0]);

            let instructions = if state.won {
                "You found the exit! Press any key to continue.".to_string()
            } else {
                let mode = match state.mode {
                    GameMode::Manual => "manual",
                    GameMode::Assisted => "assisted",
                };
                format!("Controls: WASD or Arrow keys to move, Q to quit | Mode: {}", mode)
            };
            let instructions = match state.message {
                Some(message) if !state.won => format!("{} | {}", instructions, message),
                _ => instructions,
            };

            let instruction_paragraph = Paragraph::new(instructions)
                .block(Block::default().borders(Borders::ALL).title("Instructions"))
                .style(Style::default().fg(Color::Cyan))
                .alignment(Alignment::Center);
            f.render_widget(instruction_paragraph, chunks[1]);
        })?;
        Ok(())
    }

    // ratatui diffs against the previous frame, so only the two changed cells reach the terminal.
    fn draw_step(&mut self, state: &GameRenderState, _from: Vec2, _to: Vec2) -> io::Result<()> {
        self.draw_full(state)
    }
}

pub fn dir_from_key(code: KeyCode) -> InputEvent {
    match code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => InputEvent::Quit,
        KeyCode::Char('w') | KeyCode::Char('W') | KeyCode::Up => InputEvent::Move(Direction::Up),
        KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Down => InputEvent::Move(Direction::Down),
        KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Left => InputEvent::Move(Direction::Left),
        KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Right => {
            InputEvent::Move(Direction::Right)
        }
        _ => InputEvent::Ignored,
    }
}

pub struct KeyboardEvents;

impl EventSource for KeyboardEvents {
    fn next_event(&mut self) -> io::Result<InputEvent> {
        loop {
            if let Event::Key(KeyEvent {
                code,
                kind: KeyEventKind::Press,
                ..
            }) = event::read()?
            {
                return Ok(dir_from_key(code));
            }
        }
    }
}

pub struct StdinPrompter;

impl Prompter for StdinPrompter {
    fn ask(&mut self, question: &str) -> io::Result<Option<String>> {
        print!("{}", question);
        io::stdout().flush()?;
        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn announce(&mut self, line: &str) {
        println!("{}", line);
    }
}
