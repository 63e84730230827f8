use crate::core::MazeError;

/// Cell codes as stored in map files and on the grid.
/// 0 - Hall, 1 - Wall, 2 - Start, 3 - Exit, 4 - Visited (solver trail)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Cell {
    Hall = 0,
    Wall = 1,
    Start = 2,
    Exit = 3,
    Visited = 4,
}

impl Cell {
    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn is_walkable(self) -> bool {
        self != Cell::Wall
    }
}

impl TryFrom<u8> for Cell {
    type Error = MazeError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Cell::Hall),
            1 => Ok(Cell::Wall),
            2 => Ok(Cell::Start),
            3 => Ok(Cell::Exit),
            4 => Ok(Cell::Visited),
            other => Err(MazeError::InvariantViolation(format!(
                "{} is not a cell code",
                other
            ))),
        }
    }
}

/// A grid position. `i` is the row (grows downward), `j` the column (grows rightward).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Vec2 {
    pub i: i32,
    pub j: i32,
}

impl Vec2 {
    pub const fn new(i: i32, j: i32) -> Self {
        Vec2 { i, j }
    }
}

impl std::ops::Add for Vec2 {
    type Output = Vec2;

    fn add(self, rhs: Vec2) -> Self::Output {
        Vec2 {
            i: self.i + rhs.i,
            j: self.j + rhs.j,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn offset(self) -> Vec2 {
        match self {
            Direction::Up => Vec2 { i: -1, j: 0 },
            Direction::Down => Vec2 { i: 1, j: 0 },
            Direction::Left => Vec2 { i: 0, j: -1 },
            Direction::Right => Vec2 { i: 0, j: 1 },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UserAction {
    Move(Direction),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameUpdate {
    Moved { from: Vec2, to: Vec2 },
    Blocked(String),
}
