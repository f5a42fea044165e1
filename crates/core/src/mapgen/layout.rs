//! Room placement with padded collision checks, and room carving.

use log::debug;

use crate::content::{encounters, room_labels};
use crate::types::{Cell, Environment, RoomKind};

use super::grid::CellGrid;
use super::model::Room;
use super::seed::SeededRandom;

pub(super) const PLACEMENT_ATTEMPTS: usize = 200;
pub(super) const ROOM_PADDING: usize = 2;
pub(super) const MIN_ROOM_WIDTH: usize = 5;
pub(super) const MAX_ROOM_WIDTH: usize = 10;
pub(super) const MIN_ROOM_HEIGHT: usize = 4;
pub(super) const MAX_ROOM_HEIGHT: usize = 8;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) struct RoomRect {
    pub(super) x: usize,
    pub(super) y: usize,
    pub(super) width: usize,
    pub(super) height: usize,
}

impl RoomRect {
    fn right(self) -> usize {
        self.x + self.width - 1
    }

    fn bottom(self) -> usize {
        self.y + self.height - 1
    }

    pub(super) fn of(room: &Room) -> Self {
        Self { x: room.x, y: room.y, width: room.width, height: room.height }
    }

    pub(super) fn expanded(self, margin: usize) -> Self {
        let expanded_x = self.x.saturating_sub(margin);
        let expanded_y = self.y.saturating_sub(margin);
        let expanded_right = self.right().saturating_add(margin);
        let expanded_bottom = self.bottom().saturating_add(margin);
        Self {
            x: expanded_x,
            y: expanded_y,
            width: expanded_right - expanded_x + 1,
            height: expanded_bottom - expanded_y + 1,
        }
    }

    pub(super) fn intersects(self, other: &Self) -> bool {
        self.x <= other.right()
            && self.right() >= other.x
            && self.y <= other.bottom()
            && self.bottom() >= other.y
    }
}

/// Places one room per plan slot; a slot whose attempts all collide is dropped.
pub(super) fn place_rooms(
    plan: &[RoomKind],
    environment: Environment,
    width: usize,
    height: usize,
    rng: &mut SeededRandom,
) -> Vec<Room> {
    let catalog = encounters(environment);
    let mut rooms: Vec<Room> = Vec::with_capacity(plan.len());

    for (slot, &kind) in plan.iter().enumerate() {
        let Some(rect) = find_free_rect(&rooms, width, height, rng) else {
            debug!(
                "dropping {} slot {slot} after {PLACEMENT_ATTEMPTS} placement attempts",
                kind.name()
            );
            continue;
        };
        let encounter = if kind.has_encounter() { rng.pick(catalog) } else { None };
        let label = rng.pick(room_labels(environment, kind)).copied().unwrap_or(kind.name());
        rooms.push(Room {
            id: slot,
            x: rect.x,
            y: rect.y,
            width: rect.width,
            height: rect.height,
            kind,
            label,
            encounter,
        });
    }
    rooms
}

fn find_free_rect(
    rooms: &[Room],
    width: usize,
    height: usize,
    rng: &mut SeededRandom,
) -> Option<RoomRect> {
    for _ in 0..PLACEMENT_ATTEMPTS {
        let room_width = MIN_ROOM_WIDTH + rng.below(MAX_ROOM_WIDTH - MIN_ROOM_WIDTH + 1);
        let room_height = MIN_ROOM_HEIGHT + rng.below(MAX_ROOM_HEIGHT - MIN_ROOM_HEIGHT + 1);
        let x = 1 + rng.below(width.saturating_sub(room_width + 2));
        let y = 1 + rng.below(height.saturating_sub(room_height + 2));
        let candidate = RoomRect { x, y, width: room_width, height: room_height };
        if !rooms.iter().any(|room| RoomRect::of(room).expanded(ROOM_PADDING).intersects(&candidate))
        {
            return Some(candidate);
        }
    }
    None
}

pub(super) fn carve_rooms(grid: &mut CellGrid, rooms: &[Room], environment: Environment) {
    let floor = environment.floor_cell();
    for room in rooms {
        for y in room.y..room.y + room.height {
            for x in room.x..room.x + room.width {
                grid.set(x as i32, y as i32, floor);
            }
        }
        if environment == Environment::Urban {
            stamp_building_wall(grid, room);
        }
    }
}

fn stamp_building_wall(grid: &mut CellGrid, room: &Room) {
    let left = room.x as i32 - 1;
    let right = (room.x + room.width) as i32;
    let top = room.y as i32 - 1;
    let bottom = (room.y + room.height) as i32;
    for x in left..=right {
        grid.set(x, top, Cell::BuildingWall);
        grid.set(x, bottom, Cell::BuildingWall);
    }
    for y in room.y as i32..bottom {
        grid.set(left, y, Cell::BuildingWall);
        grid.set(right, y, Cell::BuildingWall);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn room(id: usize, x: usize, y: usize, width: usize, height: usize) -> Room {
        Room { id, x, y, width, height, kind: RoomKind::Empty, label: "Alcove", encounter: None }
    }

    #[test]
    fn padding_requires_a_two_cell_gap() {
        let existing = RoomRect { x: 10, y: 10, width: 5, height: 4 };
        let padded = existing.expanded(ROOM_PADDING);
        let adjacent = RoomRect { x: 15, y: 10, width: 5, height: 4 };
        let gap_of_one = RoomRect { x: 16, y: 10, width: 5, height: 4 };
        let gap_of_two = RoomRect { x: 17, y: 10, width: 5, height: 4 };
        let diagonal_gap_of_two = RoomRect { x: 17, y: 16, width: 5, height: 4 };
        assert!(padded.intersects(&adjacent));
        assert!(padded.intersects(&gap_of_one));
        assert!(!padded.intersects(&gap_of_two));
        assert!(!padded.intersects(&diagonal_gap_of_two));
    }

    #[test]
    fn placed_rooms_respect_padding_and_margins() {
        let plan = vec![RoomKind::Empty; 9];
        let mut rng = SeededRandom::new("placement");
        let rooms = place_rooms(&plan, Environment::Dungeon, 48, 36, &mut rng);
        assert!(rooms.len() >= 5, "expected most slots placed, got {}", rooms.len());
        for (index, left) in rooms.iter().enumerate() {
            assert!(left.x >= 1 && left.x + left.width <= 46, "{left:?} escapes the x margin");
            assert!(left.y >= 1 && left.y + left.height <= 34, "{left:?} escapes the y margin");
            for right in &rooms[index + 1..] {
                assert!(
                    !RoomRect::of(left).expanded(ROOM_PADDING).intersects(&RoomRect::of(right)),
                    "rooms {} and {} violate padding",
                    left.id,
                    right.id
                );
            }
        }
    }

    #[test]
    fn only_combat_and_boss_rooms_draw_encounters() {
        let plan = RoomKind::ALL.to_vec();
        let mut rng = SeededRandom::new("encounters");
        for room in place_rooms(&plan, Environment::Urban, 48, 36, &mut rng) {
            assert_eq!(room.encounter.is_some(), room.kind.has_encounter(), "{room:?}");
            assert!(room_labels(Environment::Urban, room.kind).contains(&room.label));
        }
    }

    #[test]
    fn crowded_grids_drop_slots_instead_of_failing() {
        let plan = vec![RoomKind::Combat; 12];
        let mut rng = SeededRandom::new("crowded");
        let rooms = place_rooms(&plan, Environment::Dungeon, 13, 11, &mut rng);
        assert_eq!(rooms.len(), 1, "a 13x11 grid has space for a single room");
        assert_eq!(rooms[0].id, 0);
    }

    #[test]
    fn urban_rooms_get_a_building_wall_ring() {
        let mut grid = CellGrid::filled(12, 10, Cell::Wall);
        carve_rooms(&mut grid, &[room(0, 3, 3, 5, 4)], Environment::Urban);
        assert!(grid.is(2, 2, Cell::BuildingWall));
        assert!(grid.is(8, 7, Cell::BuildingWall));
        assert!(grid.is(2, 5, Cell::BuildingWall));
        assert!(grid.is(3, 3, Cell::Street));
        assert!(grid.is(7, 6, Cell::Street));
        assert!(grid.is(1, 1, Cell::Wall));
    }
}
