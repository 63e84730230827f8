use crate::core::{MazeGrid, PlayerState};
use crate::session::GameMode;

/// Everything a renderer needs to draw one frame.
pub struct GameRenderState<'a> {
    pub grid: &'a MazeGrid,
    pub player: &'a PlayerState,
    pub mode: GameMode,
    pub won: bool,
    pub message: Option<&'a str>,
}
