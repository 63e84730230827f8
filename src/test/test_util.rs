pub use dissimilar::diff as __diff;
use crate::console_interface::{parse_level, render_grid_to_string};
use crate::core::{Direction, GameUpdate, MazeGrid, PlayerState, Vec2, GRID_SIZE};

#[macro_export]
macro_rules! assert_eq_text {
    ($left:expr, $right:expr) => {
        assert_eq_text!($left, $right,)
    };
    ($left:expr, $right:expr, $($tt:tt)*) => {{
        let left = $left;
        let right = $right;
        if left != right {
            if left.trim() == right.trim() {
                std::eprintln!("Left:\n{:?}\n\nRight:\n{:?}\n\nWhitespace difference\n", left, right);
            } else {
                let diff = $crate::test::test_util::__diff(left, right);
                std::eprintln!("Left:\n{}\n\nRight:\n{}\n\nDiff:\n{}\n", left, right, $crate::test::test_util::format_diff(diff));
            }
            std::eprintln!($($tt)*);
            panic!("text differs");
        }
    }};
}

pub fn format_diff(chunks: Vec<dissimilar::Chunk>) -> String {
    let mut buf = String::new();
    for chunk in chunks {
        let formatted = match chunk {
            dissimilar::Chunk::Equal(text) => text.into(),
            dissimilar::Chunk::Delete(text) => format!("\x1b[41m{}\x1b[0m", text),
            dissimilar::Chunk::Insert(text) => format!("\x1b[42m{}\x1b[0m", text),
        };
        buf.push_str(&formatted);
    }
    buf
}

/// Column 1 open from the top down to row 18, row 18 open end to end, walls elsewhere.
pub fn corridor_rows() -> Vec<String> {
    let mut rows = Vec::new();
    for _ in 0..18 {
        rows.push(format!("#.{}", "#".repeat(GRID_SIZE - 2)));
    }
    rows.push(".".repeat(GRID_SIZE));
    rows.push("#".repeat(GRID_SIZE));
    rows
}

pub fn level_from_rows(rows: &[String]) -> String {
    rows.join("\n")
}

/// The same layout in map file format.
pub fn map_file_from_rows(rows: &[String]) -> String {
    let mut out = String::new();
    for row in rows {
        let codes: Vec<&str> = row
            .chars()
            .map(|ch| if ch == '#' { "1" } else { "0" })
            .collect();
        out.push_str(&codes.join(","));
        out.push('\n');
    }
    out
}

pub struct GameTestState {
    pub grid: MazeGrid,
    pub player: PlayerState,
}

impl GameTestState {
    /// Parses the level and places the fixed start and exit markers on it.
    pub fn new(level: &str) -> Self {
        let mut grid = parse_level(level);
        grid.place_markers().unwrap();
        let player = PlayerState::at_start(&grid).unwrap();
        Self { grid, player }
    }

    pub fn game_to_string(&self) -> String {
        render_grid_to_string(&self.grid, Some(&self.player)).trim_matches('\n').into()
    }

    pub fn grid_to_string(&self) -> String {
        render_grid_to_string(&self.grid, None).trim_matches('\n').into()
    }

    pub fn assert_move(&mut self, direction: Direction) -> GameUpdate {
        let update = self.player.step(&self.grid, direction);
        let GameUpdate::Moved { .. } = &update else {
            panic!("Expected a move, got {:?}, in map\n{}", update, self.game_to_string());
        };
        update
    }

    pub fn assert_moves(&mut self, directions: &[Direction]) {
        for &dir in directions {
            self.assert_move(dir);
        }
    }

    pub fn assert_blocked(&mut self, direction: Direction) {
        let before = self.player;
        let update = self.player.step(&self.grid, direction);
        let GameUpdate::Blocked(_) = &update else {
            panic!("Expected a blocked step, got {:?}, in map\n{}", update, self.game_to_string());
        };
        assert_eq!(before, self.player);
    }

    pub fn assert_matches(&self, expected: &str) {
        let actual = self.game_to_string();
        assert_eq_text!(expected.trim_matches('\n'), actual.as_str().trim_matches('\n'));
    }

    pub fn assert_grid_matches(&self, expected: &str) {
        let actual = self.grid_to_string();
        assert_eq_text!(expected.trim_matches('\n'), actual.as_str().trim_matches('\n'));
    }

    pub fn render_where_present(&self, positions: &[Vec2], present: char, absent: char) -> String {
        let mut result = String::new();
        for pos in self.grid.positions() {
            result.push(if positions.contains(&pos) { present } else { absent });
            if pos.j as usize == GRID_SIZE - 1 {
                result.push('\n');
            }
        }
        result
    }
}

pub fn assert_symbols_match(expected: &str, actual: &str) {
    assert_eq_text!(expected.trim_matches('\n'), actual.trim_matches('\n'));
}
