use std::io;
use std::path::Path;
use std::str::FromStr;

use crate::config::GameConfig;
use crate::core::{
    load_map, solve, Direction, GameUpdate, MazeError, MazeGrid, PlayerState, Vec2,
};
use crate::models::GameRenderState;

pub const UNSOLVABLE_MESSAGE: &str = "This maze is unsolvable!";
pub const SOLVABLE_MESSAGE: &str = "This maze is solvable! Follow the trail!";
pub const WIN_MESSAGE: &str = "You have found the exit to the maze!";
pub const FAREWELL_MESSAGE: &str = "Thank you for playing! Bye!";

const MODE_PROMPT: &str = "Select game mode ('1' for manual or '2' for assisted): ";
const MAP_PROMPT: &str = "Enter name of map file: ";
const REPLAY_PROMPT: &str = "Would you like to play again (Y/N)? ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    Manual,
    Assisted,
}

impl FromStr for GameMode {
    type Err = MazeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(GameMode::Manual),
            "2" => Ok(GameMode::Assisted),
            other => Err(MazeError::Input(format!(
                "{:?} is not a game mode, enter 1 or 2",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Move(Direction),
    Quit,
    Ignored,
}

/// Line based questions and the textual exit channel.
pub trait Prompter {
    /// Returns `None` once input is closed.
    fn ask(&mut self, question: &str) -> io::Result<Option<String>>;
    fn announce(&mut self, line: &str);
}

pub trait EventSource {
    /// Blocks until the next event is available.
    fn next_event(&mut self) -> io::Result<InputEvent>;
}

pub trait Renderer {
    fn open(&mut self) -> io::Result<()> {
        Ok(())
    }

    fn close(&mut self) -> io::Result<()> {
        Ok(())
    }

    fn draw_full(&mut self, state: &GameRenderState) -> io::Result<()>;

    /// Repaints only the cells the player left and entered.
    fn draw_step(&mut self, state: &GameRenderState, from: Vec2, to: Vec2) -> io::Result<()>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Play,
    Won,
}

#[derive(Debug)]
pub enum SessionOutcome {
    Won,
    Failed(MazeError),
    Quit,
}

/// One round of the game: a grid, the player on it, and the rules between them.
pub struct GameSession {
    grid: MazeGrid,
    player: PlayerState,
    mode: GameMode,
    state: SessionState,
    message: Option<String>,
}

impl GameSession {
    pub fn initialize(mode: GameMode, map_path: &Path) -> Result<Self, MazeError> {
        let grid = load_map(map_path)?;
        Self::from_grid(mode, grid)
    }

    /// Places start and exit on a freshly loaded grid and, in assisted mode, runs the solver.
    pub fn from_grid(mode: GameMode, mut grid: MazeGrid) -> Result<Self, MazeError> {
        grid.place_markers()?;
        let player = PlayerState::at_start(&grid)?;

        let mut message = None;
        if mode == GameMode::Assisted {
            if !solve(&mut grid)?.solved {
                return Err(MazeError::Unsolvable);
            }
            message = Some(SOLVABLE_MESSAGE.to_string());
        }

        log::info!("session entering play in {:?} mode", mode);
        Ok(GameSession {
            grid,
            player,
            mode,
            state: SessionState::Play,
            message,
        })
    }

    /// Applies one directional event. Events after a win are ignored.
    pub fn handle_event(&mut self, direction: Direction) -> GameUpdate {
        if self.state == SessionState::Won {
            return GameUpdate::Blocked("The maze is already solved".to_string());
        }

        let update = self.player.step(&self.grid, direction);
        match &update {
            GameUpdate::Moved { .. } => self.message = None,
            GameUpdate::Blocked(reason) => self.message = Some(reason.clone()),
        }
        if self.player.is_on_exit(&self.grid) {
            log::info!("player reached the exit at {:?}", self.player.position());
            self.state = SessionState::Won;
            self.message = Some(WIN_MESSAGE.to_string());
        }
        update
    }

    pub fn grid(&self) -> &MazeGrid {
        &self.grid
    }

    pub fn player(&self) -> &PlayerState {
        &self.player
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_won(&self) -> bool {
        self.state == SessionState::Won
    }

    pub fn render_state(&self) -> GameRenderState<'_> {
        GameRenderState {
            grid: &self.grid,
            player: &self.player,
            mode: self.mode,
            won: self.is_won(),
            message: self.message.as_deref(),
        }
    }
}

fn read_mode(prompter: &mut impl Prompter) -> io::Result<Option<GameMode>> {
    loop {
        let Some(answer) = prompter.ask(MODE_PROMPT)? else {
            return Ok(None);
        };
        match answer.parse::<GameMode>() {
            Ok(mode) => return Ok(Some(mode)),
            Err(e) => {
                log::warn!("{}", e);
                prompter.announce(&e.to_string());
            }
        }
    }
}

/// Runs one session from the mode prompt to a terminal state.
pub fn run_session(
    config: &GameConfig,
    prompter: &mut impl Prompter,
    events: &mut impl EventSource,
    renderer: &mut impl Renderer,
) -> io::Result<SessionOutcome> {
    let Some(mode) = read_mode(prompter)? else {
        return Ok(SessionOutcome::Quit);
    };
    let Some(typed_path) = prompter.ask(MAP_PROMPT)? else {
        return Ok(SessionOutcome::Quit);
    };
    let map_path = config.resolve_map_path(&typed_path);

    let mut session = match GameSession::initialize(mode, &map_path) {
        Ok(session) => session,
        Err(MazeError::Unsolvable) => {
            log::info!("session failed: {} is unsolvable", map_path.display());
            prompter.announce(UNSOLVABLE_MESSAGE);
            return Ok(SessionOutcome::Failed(MazeError::Unsolvable));
        }
        Err(e) => {
            log::warn!("session failed: {}", e);
            prompter.announce(&e.to_string());
            return Ok(SessionOutcome::Failed(e));
        }
    };
    if mode == GameMode::Assisted {
        prompter.announce(SOLVABLE_MESSAGE);
    }

    renderer.open()?;
    let result = play(&mut session, events, renderer);
    renderer.close()?;
    let outcome = result?;

    if let SessionOutcome::Won = outcome {
        prompter.announce(WIN_MESSAGE);
    }
    Ok(outcome)
}

fn play(
    session: &mut GameSession,
    events: &mut impl EventSource,
    renderer: &mut impl Renderer,
) -> io::Result<SessionOutcome> {
    renderer.draw_full(&session.render_state())?;

    loop {
        match events.next_event()? {
            InputEvent::Move(direction) => {
                match session.handle_event(direction) {
                    GameUpdate::Moved { from, to } => {
                        renderer.draw_step(&session.render_state(), from, to)?
                    }
                    GameUpdate::Blocked(_) => renderer.draw_full(&session.render_state())?,
                }
                if session.is_won() {
                    renderer.draw_full(&session.render_state())?;
                    // Keep the win screen up until the next key
                    events.next_event()?;
                    return Ok(SessionOutcome::Won);
                }
            }
            InputEvent::Quit => {
                log::info!("session quit during play");
                return Ok(SessionOutcome::Quit);
            }
            InputEvent::Ignored => {}
        }
    }
}

/// Plays sessions until the player declines a replay. Each round starts from a fresh session.
pub fn play_rounds(
    config: &GameConfig,
    prompter: &mut impl Prompter,
    events: &mut impl EventSource,
    renderer: &mut impl Renderer,
) -> io::Result<Vec<SessionOutcome>> {
    let mut outcomes = Vec::new();
    loop {
        let outcome = run_session(config, prompter, events, renderer)?;
        let quit = matches!(outcome, SessionOutcome::Quit);
        outcomes.push(outcome);
        if quit {
            break;
        }

        let again = prompter
            .ask(REPLAY_PROMPT)?
            .is_some_and(|answer| answer.trim().eq_ignore_ascii_case("y"));
        log::info!("replay requested: {}", again);
        if !again {
            break;
        }
    }
    prompter.announce(FAREWELL_MESSAGE);
    Ok(outcomes)
}
