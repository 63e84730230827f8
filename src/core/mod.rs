mod consts;
mod errors;
mod grid;
mod map_loader;
mod models;
mod player;
mod solver;
mod update;

pub use consts::*;
pub use errors::MazeError;
pub use grid::MazeGrid;
pub use map_loader::{load_map, parse_map};
pub use models::{Cell, Direction, GameUpdate, UserAction, Vec2};
pub use player::PlayerState;
pub use solver::{explore, solve, stamp_trail, Exploration, SEARCH_ORDER};
pub use update::step;
