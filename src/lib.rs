pub mod board;
pub mod camera;
pub mod commands;
pub mod config;
pub mod engine;
pub mod error;
pub mod grid;
pub mod life;
pub mod patterns;
pub mod scheduler;
pub mod state;

pub mod prelude {
    use bevy::{color::Color, math::Vec2};

    pub const DEFAULT_TARGET: &str = "Game of Life";
    pub const DEFAULT_ROWS: usize = 48;
    pub const DEFAULT_COLS: usize = 48;
    pub const DEFAULT_INTERVAL_MS: u64 = 500;
    /// Share of alive cells when randomizing the board.
    pub const RANDOM_DENSITY: f32 = 0.3;

    pub const WINDOW_SIZE_PX: f32 = 1000.0;
    pub const BG_COLOR: Color = Color::srgb(0.0, 0.1, 0.3);

    pub const BOARD_POS: Vec2 = Vec2::ZERO;
    pub const BORDER_WIDTH_PX: f32 = 8.0;
    pub const BORDER_COLOR: Color = Color::srgb(1.0, 1.0, 1.0);

    pub const CELL_SIZE_PX: Vec2 = Vec2::splat(18.0);
    pub const CELL_SCALE: Vec2 = Vec2::splat(0.9);
    pub const CELL_ALIVE_COLOR: Color = Color::srgb(0.2, 1.0, 0.2);
    pub const CELL_DEAD_COLOR: Color = Color::srgb(0.7, 0.1, 0.1);
    pub const CELL_EMPTY_COLOR: Color = Color::srgb(0.05, 0.15, 0.4);
}
