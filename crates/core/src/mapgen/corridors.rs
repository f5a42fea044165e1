//! Spanning corridor network between room centres, plus door placement.

use log::trace;

use crate::types::{Cell, Environment, Pos};

use super::grid::CellGrid;
use super::model::{CorridorLink, Room};
use super::seed::SeededRandom;

const LOOP_THRESHOLD: usize = 3;

/// Returns link endpoints as indices into `rooms`.
///
/// Links grow a tree from the first room by always attaching the nearest pending
/// room; ties keep the first pair found. Larger floors add one or two loops.
pub(super) fn plan_links(rooms: &[Room], rng: &mut SeededRandom) -> Vec<(usize, usize)> {
    if rooms.len() < 2 {
        return Vec::new();
    }

    let mut connected = vec![0_usize];
    let mut links = Vec::with_capacity(rooms.len() + 1);
    while connected.len() < rooms.len() {
        let mut best: Option<(i64, usize, usize)> = None;
        for &from in &connected {
            for to in 0..rooms.len() {
                if connected.contains(&to) {
                    continue;
                }
                let distance = doubled_center_distance(&rooms[from], &rooms[to]);
                if best.is_none_or(|(best_distance, _, _)| distance < best_distance) {
                    best = Some((distance, from, to));
                }
            }
        }
        let Some((_, from, to)) = best else {
            break;
        };
        connected.push(to);
        links.push((from, to));
    }

    if rooms.len() > LOOP_THRESHOLD {
        let extra_links = 1 + rng.below(2);
        for _ in 0..extra_links {
            let from = rng.below(rooms.len());
            let mut to = rng.below(rooms.len());
            while to == from {
                to = rng.below(rooms.len());
            }
            links.push((from, to));
        }
    }
    links
}

/// Squared distance between centres, scaled by four to stay in integers.
fn doubled_center_distance(a: &Room, b: &Room) -> i64 {
    let dx = (2 * a.x + a.width) as i64 - (2 * b.x + b.width) as i64;
    let dy = (2 * a.y + a.height) as i64 - (2 * b.y + b.height) as i64;
    dx * dx + dy * dy
}

pub(super) fn carve_links(
    grid: &mut CellGrid,
    rooms: &[Room],
    links: &[(usize, usize)],
    environment: Environment,
) -> Vec<CorridorLink> {
    let corridor = environment.corridor_cell();
    let mut carved = Vec::with_capacity(links.len());
    for &(from, to) in links {
        let (Some(source), Some(target)) = (rooms.get(from), rooms.get(to)) else {
            continue;
        };
        trace!("corridor {} -> {}", source.id, target.id);
        carve_l_shaped_corridor(grid, rooms, source.center(), target.center(), corridor);
        carved.push(CorridorLink { from: source.id, to: target.id });
    }
    carved
}

/// Horizontal leg first, widened one row down; vertical leg widened one column right.
fn carve_l_shaped_corridor(
    grid: &mut CellGrid,
    rooms: &[Room],
    start: Pos,
    end: Pos,
    corridor: Cell,
) {
    let Pos { mut x, mut y } = start;
    while x != end.x {
        carve_cell(grid, rooms, x, y, corridor);
        carve_cell(grid, rooms, x, y + 1, corridor);
        x += (end.x - x).signum();
    }
    while y != end.y {
        carve_cell(grid, rooms, x, y, corridor);
        carve_cell(grid, rooms, x + 1, y, corridor);
        y += (end.y - y).signum();
    }
}

fn carve_cell(grid: &mut CellGrid, rooms: &[Room], x: i32, y: i32, corridor: Cell) {
    let Some(cell) = grid.get(x, y) else {
        return;
    };
    if cell.is_terrain() && !rooms.iter().any(|room| room.contains(Pos { y, x })) {
        grid.set(x, y, corridor);
    }
}

/// Room edge cells facing an outside corridor or street become doors.
pub(super) fn place_doors(grid: &mut CellGrid, rooms: &[Room], environment: Environment) {
    if !environment.has_doors() {
        return;
    }
    let opens_onto = |grid: &CellGrid, x: i32, y: i32| {
        grid.is(x, y, Cell::Corridor) || grid.is(x, y, Cell::Street)
    };
    for room in rooms {
        let left = room.x as i32;
        let top = room.y as i32;
        let right = (room.x + room.width) as i32 - 1;
        let bottom = (room.y + room.height) as i32 - 1;
        for x in left..=right {
            if opens_onto(grid, x, top - 1) {
                grid.set(x, top, Cell::Door);
            }
            if opens_onto(grid, x, bottom + 1) {
                grid.set(x, bottom, Cell::Door);
            }
        }
        for y in top..=bottom {
            if opens_onto(grid, left - 1, y) {
                grid.set(left, y, Cell::Door);
            }
            if opens_onto(grid, right + 1, y) {
                grid.set(right, y, Cell::Door);
            }
        }
    }
}
