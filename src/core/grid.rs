use crate::core::{Cell, MazeError, Vec2, EXIT_POSITION, GRID_SIZE, START_POSITION};

/// Fixed 20x20 cell storage. Every read and write of a cell goes through this type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MazeGrid {
    cells: [[Cell; GRID_SIZE]; GRID_SIZE],
}

impl Default for MazeGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl MazeGrid {
    pub fn new() -> Self {
        MazeGrid {
            cells: [[Cell::Hall; GRID_SIZE]; GRID_SIZE],
        }
    }

    /// Wraps a fully built cell array. No markers are placed.
    pub fn from_cells(cells: [[Cell; GRID_SIZE]; GRID_SIZE]) -> Self {
        MazeGrid { cells }
    }

    pub fn in_bounds(&self, pos: Vec2) -> bool {
        pos.i >= 0 && pos.j >= 0 && (pos.i as usize) < GRID_SIZE && (pos.j as usize) < GRID_SIZE
    }

    pub fn get(&self, pos: Vec2) -> Option<Cell> {
        if !self.in_bounds(pos) {
            return None;
        }
        Some(self.cells[pos.i as usize][pos.j as usize])
    }

    pub fn set(&mut self, pos: Vec2, cell: Cell) -> Result<(), MazeError> {
        if !self.in_bounds(pos) {
            return Err(MazeError::InvariantViolation(format!(
                "write outside the grid at row {}, column {}",
                pos.i, pos.j
            )));
        }
        self.cells[pos.i as usize][pos.j as usize] = cell;
        Ok(())
    }

    /// Returns the one position holding `cell`, failing when there are zero or several.
    pub fn find_unique(&self, cell: Cell) -> Result<Vec2, MazeError> {
        let mut found = self.positions().filter(|&pos| self[pos] == cell);
        let Some(first) = found.next() else {
            return Err(MazeError::InvariantViolation(format!(
                "no {:?} cell on the grid",
                cell
            )));
        };
        if found.next().is_some() {
            return Err(MazeError::InvariantViolation(format!(
                "more than one {:?} cell on the grid",
                cell
            )));
        }
        Ok(first)
    }

    /// Overwrites the fixed start and exit cells, whatever the map file had there.
    pub fn place_markers(&mut self) -> Result<(), MazeError> {
        self.set(START_POSITION, Cell::Start)?;
        self.set(EXIT_POSITION, Cell::Exit)
    }

    pub fn count(&self, cell: Cell) -> usize {
        self.positions().filter(|&pos| self[pos] == cell).count()
    }

    /// All positions in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Vec2> + use<> {
        (0..GRID_SIZE as i32).flat_map(|i| (0..GRID_SIZE as i32).map(move |j| Vec2 { i, j }))
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell; GRID_SIZE]> {
        self.cells.iter()
    }
}

impl std::ops::Index<Vec2> for MazeGrid {
    type Output = Cell;

    fn index(&self, index: Vec2) -> &Self::Output {
        &self.cells[index.i as usize][index.j as usize]
    }
}
