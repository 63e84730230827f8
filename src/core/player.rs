use crate::core::{step, Cell, Direction, GameUpdate, MazeError, MazeGrid, UserAction, Vec2};

/// The avatar position. Always in bounds and never on a wall.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlayerState {
    position: Vec2,
}

impl PlayerState {
    /// Places the player on the grid's start marker.
    pub fn at_start(grid: &MazeGrid) -> Result<Self, MazeError> {
        let position = grid.find_unique(Cell::Start)?;
        Ok(PlayerState { position })
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn step(&mut self, grid: &MazeGrid, direction: Direction) -> GameUpdate {
        let update = step(grid, self, UserAction::Move(direction));
        if let GameUpdate::Moved { to, .. } = update {
            self.position = to;
        }
        update
    }

    pub fn is_on_exit(&self, grid: &MazeGrid) -> bool {
        grid.get(self.position) == Some(Cell::Exit)
    }
}
