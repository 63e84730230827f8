use crate::core::{Cell, Direction, MazeError, MazeGrid, Vec2, GRID_SIZE};

/// Neighbor order of the search. Changing it changes which trail gets highlighted.
pub const SEARCH_ORDER: [Direction; 4] = [
    Direction::Right,
    Direction::Up,
    Direction::Left,
    Direction::Down,
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exploration {
    pub solved: bool,
    /// Every cell the search entered, in order, excluding the start and exit markers.
    pub visited: Vec<Vec2>,
    /// Start to exit inclusive. Empty when unsolved.
    pub route: Vec<Vec2>,
}

struct Frame {
    pos: Vec2,
    next: usize,
}

enum Entry {
    Rejected,
    Entered,
    ReachedExit,
}

struct Search<'a> {
    grid: &'a MazeGrid,
    seen: [[bool; GRID_SIZE]; GRID_SIZE],
    visited: Vec<Vec2>,
    stack: Vec<Frame>,
}

impl<'a> Search<'a> {
    fn new(grid: &'a MazeGrid) -> Self {
        Search {
            grid,
            seen: [[false; GRID_SIZE]; GRID_SIZE],
            visited: Vec::new(),
            stack: Vec::new(),
        }
    }

    // The start cell is never marked, so the search may walk back into it.
    fn enter(&mut self, pos: Vec2) -> Entry {
        let Some(cell) = self.grid.get(pos) else {
            return Entry::Rejected;
        };
        let seen = &mut self.seen[pos.i as usize][pos.j as usize];
        match cell {
            Cell::Wall | Cell::Visited => Entry::Rejected,
            _ if *seen => Entry::Rejected,
            Cell::Exit => Entry::ReachedExit,
            Cell::Start => {
                self.stack.push(Frame { pos, next: 0 });
                Entry::Entered
            }
            Cell::Hall => {
                *seen = true;
                self.visited.push(pos);
                self.stack.push(Frame { pos, next: 0 });
                Entry::Entered
            }
        }
    }

    fn route_to(&self, exit: Vec2) -> Vec<Vec2> {
        let from = self
            .stack
            .iter()
            .rposition(|frame| self.grid[frame.pos] == Cell::Start)
            .unwrap_or(0);
        let mut route: Vec<Vec2> = self.stack[from..].iter().map(|frame| frame.pos).collect();
        route.push(exit);
        route
    }

    fn run(mut self, start: Vec2) -> Exploration {
        self.enter(start);

        while let Some(top) = self.stack.last_mut() {
            if top.next == SEARCH_ORDER.len() {
                self.stack.pop();
                continue;
            }
            let next = top.pos + SEARCH_ORDER[top.next].offset();
            top.next += 1;

            if let Entry::ReachedExit = self.enter(next) {
                let route = self.route_to(next);
                return Exploration {
                    solved: true,
                    visited: self.visited,
                    route,
                };
            }
        }

        Exploration {
            solved: false,
            visited: self.visited,
            route: Vec::new(),
        }
    }
}

/// Depth-first search from the start marker toward the exit marker. The grid is not modified.
pub fn explore(grid: &MazeGrid) -> Result<Exploration, MazeError> {
    let start = grid.find_unique(Cell::Start)?;
    grid.find_unique(Cell::Exit)?;
    Ok(Search::new(grid).run(start))
}

/// Marks every explored cell as visited so the renderer can show the trail.
pub fn stamp_trail(grid: &mut MazeGrid, exploration: &Exploration) -> Result<(), MazeError> {
    for &pos in &exploration.visited {
        grid.set(pos, Cell::Visited)?;
    }
    Ok(())
}

/// Runs the search and writes its trail into the grid.
pub fn solve(grid: &mut MazeGrid) -> Result<Exploration, MazeError> {
    let exploration = explore(grid)?;
    stamp_trail(grid, &exploration)?;
    log::info!(
        "solver visited {} cells, route length {}, solved: {}",
        exploration.visited.len(),
        exploration.route.len(),
        exploration.solved
    );
    Ok(exploration)
}
