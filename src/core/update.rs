use crate::core::{Cell, GameUpdate, MazeGrid, PlayerState, UserAction};

/// Computes the outcome of one action without changing anything.
pub fn step(grid: &MazeGrid, player: &PlayerState, action: UserAction) -> GameUpdate {
    let dir = match action {
        UserAction::Move(d) => d.offset(),
    };

    let from = player.position();
    let to = from + dir;
    match grid.get(to) {
        None => GameUpdate::Blocked("Cannot move out of bounds".to_string()),
        Some(Cell::Wall) => GameUpdate::Blocked("Cannot walk into a wall".to_string()),
        Some(_) => GameUpdate::Moved { from, to },
    }
}
