use bevy::{
    math::{vec2, Vec2, Vec3},
    prelude::{Component, Resource},
};

use crate::{config::LifeConfig, prelude::*};

/// Grid coordinates carried by every cell entity.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellCoord {
    pub row: usize,
    pub col: usize,
}

/// Where and how large the board is drawn. Row 0 is the top row.
#[derive(Resource, Debug, Clone, Copy)]
pub struct Board {
    /// the center of the board
    pub center: Vec2,
    pub rows: usize,
    pub cols: usize,
    /// the size of each individual cell
    pub cell_size: Vec2,
    /// scale of each individual cell (should be 0.0 - 1.0)
    pub cell_scale: Vec2,
}

impl Board {
    pub fn from_config(config: &LifeConfig) -> Self {
        Self {
            center: BOARD_POS,
            rows: config.rows().get(),
            cols: config.cols().get(),
            cell_size: CELL_SIZE_PX,
            cell_scale: CELL_SCALE,
        }
    }

    /// computes full size of the board in pixels
    #[inline]
    pub fn pixel_size(&self) -> Vec2 {
        vec2(
            self.cols as f32 * self.cell_size.x,
            self.rows as f32 * self.cell_size.y,
        )
    }

    /// Center of a cell in world space; `z` keeps cells above the background.
    #[inline]
    pub fn cell_translation(&self, coord: CellCoord) -> Vec3 {
        let top_left = self.center + self.pixel_size() * vec2(-0.5, 0.5);
        let offset = vec2(
            coord.col as f32 * self.cell_size.x,
            -(coord.row as f32) * self.cell_size.y,
        );
        (top_left + offset + self.cell_size * vec2(0.5, -0.5)).extend(10.0)
    }

    /// Every cell coordinate, row-major.
    pub fn coords(&self) -> impl Iterator<Item = CellCoord> + Clone {
        let cols = self.cols;
        (0..self.rows).flat_map(move |row| (0..cols).map(move |col| CellCoord { row, col }))
    }

    /// Center and size of the four border bars: left, right, top, bottom.
    pub fn border_rects(&self) -> [(Vec2, Vec2); 4] {
        let px = self.pixel_size();
        let vert = vec2(BORDER_WIDTH_PX, px.y + 2.0 * BORDER_WIDTH_PX);
        let horiz = vec2(px.x + 2.0 * BORDER_WIDTH_PX, BORDER_WIDTH_PX);
        let dx = (px.x + BORDER_WIDTH_PX) * 0.5;
        let dy = (px.y + BORDER_WIDTH_PX) * 0.5;
        [
            (self.center - vec2(dx, 0.0), vert),
            (self.center + vec2(dx, 0.0), vert),
            (self.center + vec2(0.0, dy), horiz),
            (self.center - vec2(0.0, dy), horiz),
        ]
    }
}
