use crate::core::Vec2;

pub const GRID_SIZE: usize = 20;
pub const START_POSITION: Vec2 = Vec2::new(0, 1);
pub const EXIT_POSITION: Vec2 = Vec2::new(18, 19);
