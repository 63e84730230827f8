use std::fs;
use std::path::Path;

use crate::core::{Cell, MazeError, MazeGrid, Vec2, GRID_SIZE};

/// Reads a map file: 20 lines of 20 comma separated 0/1 values.
/// The returned grid has no start or exit markers yet.
pub fn load_map(path: &Path) -> Result<MazeGrid, MazeError> {
    let contents = fs::read_to_string(path).map_err(|source| MazeError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let grid = parse_map(&contents)?;
    log::info!("loaded map from {}", path.display());
    Ok(grid)
}

pub fn parse_map(contents: &str) -> Result<MazeGrid, MazeError> {
    let lines: Vec<&str> = contents.lines().collect();
    if lines.len() != GRID_SIZE {
        return Err(MazeError::Parse {
            line: lines.len(),
            reason: format!("expected {} rows, found {}", GRID_SIZE, lines.len()),
        });
    }

    let mut grid = MazeGrid::new();
    for (i, line) in lines.iter().enumerate() {
        let line_number = i + 1;
        let tokens: Vec<&str> = line.trim_end_matches('\r').split(',').collect();
        if tokens.len() != GRID_SIZE {
            return Err(MazeError::Parse {
                line: line_number,
                reason: format!("expected {} values, found {}", GRID_SIZE, tokens.len()),
            });
        }

        for (j, token) in tokens.iter().enumerate() {
            let cell = parse_cell(token.trim()).ok_or_else(|| MazeError::Parse {
                line: line_number,
                reason: format!("column {}: {:?} is not 0 or 1", j + 1, token),
            })?;
            grid.set(Vec2::new(i as i32, j as i32), cell)?;
        }
    }
    Ok(grid)
}

fn parse_cell(token: &str) -> Option<Cell> {
    match token.parse::<u8>().ok()? {
        0 => Some(Cell::Hall),
        1 => Some(Cell::Wall),
        _ => None,
    }
}
