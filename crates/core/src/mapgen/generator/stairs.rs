//! Inter-floor stair markers for multi-floor dungeons.

use crate::types::{Cell, Pos};

use super::super::grid::CellGrid;
use super::super::model::Room;

/// Every floor but the last gets an ascent in its last room; every floor but the
/// first gets a descent in its first room. Single-floor maps are left alone.
pub(super) fn stamp_floor_stairs(
    grid: &mut CellGrid,
    rooms: &[Room],
    floor_index: u32,
    total_floors: u32,
) {
    if total_floors <= 1 {
        return;
    }
    if floor_index < total_floors - 1
        && let Some(last) = rooms.last()
    {
        grid.set_at(ascent_cell(last), Cell::StairsUp);
    }
    if floor_index > 0
        && let Some(first) = rooms.first()
    {
        grid.set_at(descent_cell(first), Cell::StairsDown);
    }
}

pub(super) fn ascent_cell(room: &Room) -> Pos {
    Pos { y: room.y as i32 + 1, x: (room.x + room.width) as i32 - 2 }
}

pub(super) fn descent_cell(room: &Room) -> Pos {
    Pos { y: room.y as i32 + 1, x: room.x as i32 + 1 }
}
