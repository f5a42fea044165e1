//! Row-major cell storage shared by every generation stage.

use crate::types::{Cell, Pos};

#[derive(Clone, Debug, PartialEq, Eq)]
pub(super) struct CellGrid {
    pub(super) width: usize,
    pub(super) height: usize,
    cells: Vec<Cell>,
}

impl CellGrid {
    pub(super) fn filled(width: usize, height: usize, cell: Cell) -> Self {
        Self { width, height, cells: vec![cell; width * height] }
    }

    pub(super) fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }

    pub(super) fn get(&self, x: i32, y: i32) -> Option<Cell> {
        if !self.in_bounds(x, y) {
            return None;
        }
        Some(self.cells[(y as usize) * self.width + (x as usize)])
    }

    /// Writes are ignored outside the grid.
    pub(super) fn set(&mut self, x: i32, y: i32, cell: Cell) {
        if self.in_bounds(x, y) {
            self.cells[(y as usize) * self.width + (x as usize)] = cell;
        }
    }

    pub(super) fn set_at(&mut self, pos: Pos, cell: Cell) {
        self.set(pos.x, pos.y, cell);
    }

    pub(super) fn is(&self, x: i32, y: i32, cell: Cell) -> bool {
        self.get(x, y) == Some(cell)
    }

    pub(super) fn replace_all(&mut self, from: Cell, to: Cell) {
        for cell in &mut self.cells {
            if *cell == from {
                *cell = to;
            }
        }
    }

    pub(super) fn into_cells(self) -> Vec<Cell> {
        self.cells
    }
}
