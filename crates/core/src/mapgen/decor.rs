//! Per-room furnishing recipes keyed by environment and room kind.

use crate::types::{Cell, Environment, RoomKind};

use super::grid::CellGrid;
use super::model::Room;
use super::seed::SeededRandom;

const ATTEMPTS_PER_PLACEMENT: usize = 20;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Count {
    Fixed(usize),
    /// `base + below(spread)`.
    Roll { base: usize, spread: usize },
}

impl Count {
    fn resolve(self, rng: &mut SeededRandom) -> usize {
        match self {
            Count::Fixed(count) => count,
            Count::Roll { base, spread } => base + rng.below(spread),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Anchor {
    /// Middle of one side picked at random: top, bottom, left, right.
    RandomSide,
    BottomRight,
    LeftMiddle,
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum Step {
    Centre(Cell),
    Place(Cell, Count),
    /// Runs the placement only when the coin lands above the threshold.
    Chance(f64, Cell, Count),
    SecretDoor(Anchor),
}

const fn fixed(count: usize) -> Count {
    Count::Fixed(count)
}

const fn roll(base: usize, spread: usize) -> Count {
    Count::Roll { base, spread }
}

use Step::{Centre, Chance, Place, SecretDoor};

const MONSTERS: Step = Place(Cell::Monster, roll(2, 3));
const CHESTS: Step = Place(Cell::Chest, roll(2, 2));
const TRAPS: Step = Place(Cell::Trap, roll(3, 3));
const ENTRANCE_STAIRS: Step = Centre(Cell::StairsDown);

const DUNGEON_ENTRANCE: &[Step] = &[
    ENTRANCE_STAIRS,
    Place(Cell::Statue, roll(0, 2)),
    Chance(0.5, Cell::Pillar, fixed(2)),
];
const DUNGEON_COMBAT: &[Step] = &[
    MONSTERS,
    Place(Cell::Pillar, roll(0, 3)),
    Chance(0.5, Cell::Barrel, roll(1, 2)),
];
const DUNGEON_TREASURE: &[Step] =
    &[CHESTS, Place(Cell::Altar, fixed(1)), Place(Cell::Pillar, roll(0, 2))];
const DUNGEON_TRAP: &[Step] = &[
    TRAPS,
    Place(Cell::Pit, roll(1, 2)),
    Place(Cell::Rubble, roll(0, 2)),
    SecretDoor(Anchor::RandomSide),
];
const DUNGEON_BOSS: &[Step] = &[
    Centre(Cell::Throne),
    Place(Cell::Monster, roll(2, 2)),
    Place(Cell::Pillar, roll(2, 2)),
    Chance(0.5, Cell::Chest, fixed(1)),
    SecretDoor(Anchor::BottomRight),
];
const DUNGEON_EMPTY: &[Step] = &[
    Place(Cell::Barrel, roll(0, 3)),
    Place(Cell::Rubble, roll(0, 2)),
    Chance(0.6, Cell::Water, roll(2, 3)),
];
const DUNGEON_PUZZLE: &[Step] = &[
    Place(Cell::Bookshelf, roll(2, 3)),
    Place(Cell::Altar, fixed(1)),
    Place(Cell::Statue, roll(0, 2)),
    SecretDoor(Anchor::LeftMiddle),
];

const WILDERNESS_ENTRANCE: &[Step] = &[
    ENTRANCE_STAIRS,
    Place(Cell::Campfire, fixed(1)),
    Place(Cell::Rock, fixed(2)),
    Chance(0.5, Cell::Barrel, fixed(1)),
];
const WILDERNESS_COMBAT: &[Step] = &[MONSTERS, Place(Cell::Rock, roll(0, 3))];
const WILDERNESS_TREASURE: &[Step] =
    &[CHESTS, Place(Cell::Rock, fixed(1)), Place(Cell::StandingStone, fixed(1))];
const WILDERNESS_TRAP: &[Step] =
    &[TRAPS, Place(Cell::Pit, fixed(1)), Place(Cell::Water, fixed(2))];
const WILDERNESS_BOSS: &[Step] = &[
    Place(Cell::StandingStone, fixed(3)),
    Place(Cell::Monster, fixed(2)),
    Place(Cell::Campfire, fixed(1)),
];
const WILDERNESS_EMPTY: &[Step] =
    &[Place(Cell::Rock, roll(0, 3)), Chance(0.5, Cell::Water, roll(2, 3))];
const WILDERNESS_PUZZLE: &[Step] =
    &[Place(Cell::StandingStone, roll(3, 2)), Place(Cell::Well, fixed(1))];

const URBAN_ENTRANCE: &[Step] =
    &[ENTRANCE_STAIRS, Place(Cell::Table, fixed(2)), Place(Cell::Barrel, fixed(1))];
const URBAN_COMBAT: &[Step] =
    &[MONSTERS, Place(Cell::Table, roll(0, 2)), Place(Cell::Barrel, roll(0, 2))];
const URBAN_TREASURE: &[Step] =
    &[CHESTS, Place(Cell::Bookshelf, fixed(1)), Place(Cell::Table, fixed(1))];
const URBAN_BOSS: &[Step] = &[
    Centre(Cell::Throne),
    Place(Cell::Monster, fixed(2)),
    Place(Cell::Table, fixed(2)),
    Place(Cell::Bookshelf, fixed(1)),
];
const URBAN_EMPTY: &[Step] = &[Place(Cell::Barrel, roll(0, 3)), Place(Cell::Table, roll(0, 2))];
const URBAN_PUZZLE: &[Step] = &[
    Place(Cell::Bookshelf, fixed(3)),
    Place(Cell::Table, fixed(2)),
    Place(Cell::Statue, fixed(1)),
];

const SPECIAL_ENTRANCE: &[Step] = &[ENTRANCE_STAIRS, Place(Cell::Pillar, fixed(2))];
const SPECIAL_COMBAT: &[Step] =
    &[MONSTERS, Place(Cell::Pillar, fixed(2)), Chance(0.5, Cell::Magma, fixed(2))];
const SPECIAL_TREASURE: &[Step] =
    &[CHESTS, Place(Cell::Pillar, fixed(2)), Place(Cell::Statue, fixed(1))];
const SPECIAL_TRAP: &[Step] = &[TRAPS, Place(Cell::Magma, fixed(3)), Place(Cell::Pit, fixed(1))];
const SPECIAL_BOSS: &[Step] = &[
    Centre(Cell::Throne),
    Place(Cell::Monster, fixed(3)),
    Place(Cell::Pillar, fixed(3)),
    Place(Cell::Chest, fixed(2)),
    Place(Cell::Magma, fixed(2)),
];
const SPECIAL_PUZZLE: &[Step] = &[
    Place(Cell::Altar, fixed(1)),
    Place(Cell::Pillar, fixed(3)),
    Place(Cell::StandingStone, fixed(2)),
];

fn recipe(environment: Environment, kind: RoomKind) -> &'static [Step] {
    match (environment, kind) {
        (Environment::Dungeon, RoomKind::Entrance) => DUNGEON_ENTRANCE,
        (Environment::Dungeon, RoomKind::Combat) => DUNGEON_COMBAT,
        (Environment::Dungeon, RoomKind::Treasure) => DUNGEON_TREASURE,
        (Environment::Dungeon | Environment::Urban, RoomKind::Trap) => DUNGEON_TRAP,
        (Environment::Dungeon, RoomKind::Boss) => DUNGEON_BOSS,
        (Environment::Dungeon | Environment::Special, RoomKind::Empty) => DUNGEON_EMPTY,
        (Environment::Dungeon, RoomKind::Puzzle) => DUNGEON_PUZZLE,

        (Environment::Wilderness, RoomKind::Entrance) => WILDERNESS_ENTRANCE,
        (Environment::Wilderness, RoomKind::Combat) => WILDERNESS_COMBAT,
        (Environment::Wilderness, RoomKind::Treasure) => WILDERNESS_TREASURE,
        (Environment::Wilderness, RoomKind::Trap) => WILDERNESS_TRAP,
        (Environment::Wilderness, RoomKind::Boss) => WILDERNESS_BOSS,
        (Environment::Wilderness, RoomKind::Empty) => WILDERNESS_EMPTY,
        (Environment::Wilderness, RoomKind::Puzzle) => WILDERNESS_PUZZLE,

        (Environment::Urban, RoomKind::Entrance) => URBAN_ENTRANCE,
        (Environment::Urban, RoomKind::Combat) => URBAN_COMBAT,
        (Environment::Urban, RoomKind::Treasure) => URBAN_TREASURE,
        (Environment::Urban, RoomKind::Boss) => URBAN_BOSS,
        (Environment::Urban, RoomKind::Empty) => URBAN_EMPTY,
        (Environment::Urban, RoomKind::Puzzle) => URBAN_PUZZLE,

        (Environment::Special, RoomKind::Entrance) => SPECIAL_ENTRANCE,
        (Environment::Special, RoomKind::Combat) => SPECIAL_COMBAT,
        (Environment::Special, RoomKind::Treasure) => SPECIAL_TREASURE,
        (Environment::Special, RoomKind::Trap) => SPECIAL_TRAP,
        (Environment::Special, RoomKind::Boss) => SPECIAL_BOSS,
        (Environment::Special, RoomKind::Puzzle) => SPECIAL_PUZZLE,
    }
}

pub(super) fn decorate_rooms(
    grid: &mut CellGrid,
    rooms: &[Room],
    environment: Environment,
    rng: &mut SeededRandom,
) {
    let floor = environment.floor_cell();
    for room in rooms {
        for &step in recipe(environment, room.kind) {
            apply_step(grid, room, floor, step, rng);
        }
    }
}

fn apply_step(grid: &mut CellGrid, room: &Room, floor: Cell, step: Step, rng: &mut SeededRandom) {
    match step {
        Step::Centre(cell) => grid.set_at(room.center(), cell),
        Step::Place(cell, count) => {
            let count = count.resolve(rng);
            place_in_room(grid, room, floor, cell, count, rng);
        }
        Step::Chance(threshold, cell, count) => {
            if rng.chance_above(threshold) {
                let count = count.resolve(rng);
                place_in_room(grid, room, floor, cell, count, rng);
            }
        }
        Step::SecretDoor(anchor) => {
            let (x, y) = anchor_cell(room, anchor, rng);
            grid.set(x, y, Cell::SecretDoor);
        }
    }
}

/// Drops `count` cells on untouched interior floor, giving up after a bounded number of misses.
fn place_in_room(
    grid: &mut CellGrid,
    room: &Room,
    floor: Cell,
    cell: Cell,
    count: usize,
    rng: &mut SeededRandom,
) {
    let mut placed = 0;
    let mut attempts = 0;
    while attempts < count * ATTEMPTS_PER_PLACEMENT && placed < count {
        attempts += 1;
        let x = room.x + 1 + rng.below(room.width.saturating_sub(2).max(1));
        let y = room.y + 1 + rng.below(room.height.saturating_sub(2).max(1));
        if grid.is(x as i32, y as i32, floor) {
            grid.set(x as i32, y as i32, cell);
            placed += 1;
        }
    }
}

fn anchor_cell(room: &Room, anchor: Anchor, rng: &mut SeededRandom) -> (i32, i32) {
    let left = room.x as i32;
    let top = room.y as i32;
    let right = (room.x + room.width) as i32 - 1;
    let bottom = (room.y + room.height) as i32 - 1;
    let center = room.center();
    match anchor {
        Anchor::RandomSide => match rng.below(4) {
            0 => (center.x, top),
            1 => (center.x, bottom),
            2 => (left, center.y),
            _ => (right, center.y),
        },
        Anchor::BottomRight => (right, bottom),
        Anchor::LeftMiddle => (left, center.y),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn carved(environment: Environment, kind: RoomKind) -> (CellGrid, Room) {
        let room = Room {
            id: 0,
            x: 2,
            y: 2,
            width: 8,
            height: 6,
            kind,
            label: "Test",
            encounter: None,
        };
        let mut grid = CellGrid::filled(14, 12, environment.base_cell());
        for y in 2..8 {
            for x in 2..10 {
                grid.set(x, y, environment.floor_cell());
            }
        }
        (grid, room)
    }

    fn count(grid: &CellGrid, cell: Cell) -> usize {
        grid.clone().into_cells().into_iter().filter(|&candidate| candidate == cell).count()
    }

    #[test]
    fn every_environment_marks_the_entrance_centre_with_stairs() {
        for environment in Environment::ALL {
            let (mut grid, room) = carved(environment, RoomKind::Entrance);
            let mut rng = SeededRandom::new("entrance");
            decorate_rooms(&mut grid, std::slice::from_ref(&room), environment, &mut rng);
            let center = room.center();
            assert!(grid.is(center.x, center.y, Cell::StairsDown), "{environment:?}");
        }
    }

    #[test]
    fn dungeon_boss_gets_throne_monsters_and_corner_secret_door() {
        let (mut grid, room) = carved(Environment::Dungeon, RoomKind::Boss);
        let mut rng = SeededRandom::new("boss");
        decorate_rooms(&mut grid, std::slice::from_ref(&room), Environment::Dungeon, &mut rng);
        assert!(grid.is(6, 5, Cell::Throne));
        assert!(grid.is(9, 7, Cell::SecretDoor));
        let monsters = count(&grid, Cell::Monster);
        assert!((2..=3).contains(&monsters), "monsters={monsters}");
    }

    #[test]
    fn wilderness_boss_has_no_throne_or_secret_door() {
        let (mut grid, room) = carved(Environment::Wilderness, RoomKind::Boss);
        let mut rng = SeededRandom::new("boss");
        decorate_rooms(&mut grid, std::slice::from_ref(&room), Environment::Wilderness, &mut rng);
        assert_eq!(count(&grid, Cell::Throne), 0);
        assert_eq!(count(&grid, Cell::SecretDoor), 0);
        assert_eq!(count(&grid, Cell::StandingStone), 3);
        assert_eq!(count(&grid, Cell::Campfire), 1);
    }

    #[test]
    fn decorations_stay_in_the_room_interior() {
        for environment in Environment::ALL {
            for kind in RoomKind::ALL {
                let (mut grid, room) = carved(environment, kind);
                let before = grid.clone();
                let mut rng = SeededRandom::new(kind.name());
                decorate_rooms(&mut grid, std::slice::from_ref(&room), environment, &mut rng);
                for y in 0..12 {
                    for x in 0..14 {
                        let inside = room.contains(crate::types::Pos { y, x });
                        if !inside {
                            assert_eq!(grid.get(x, y), before.get(x, y), "{environment:?}/{kind:?}");
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn puzzle_secret_door_sits_on_the_left_wall() {
        let (mut grid, room) = carved(Environment::Dungeon, RoomKind::Puzzle);
        let mut rng = SeededRandom::new("puzzle");
        decorate_rooms(&mut grid, std::slice::from_ref(&room), Environment::Dungeon, &mut rng);
        assert!(grid.is(2, 5, Cell::SecretDoor));
    }

    #[test]
    fn zero_count_placements_consume_no_attempts() {
        let (mut grid, room) = carved(Environment::Dungeon, RoomKind::Empty);
        let mut rng = SeededRandom::new("zero");
        let before = rng.clone();
        place_in_room(&mut grid, &room, Cell::Floor, Cell::Barrel, 0, &mut rng);
        assert_eq!(rng, before);
    }

    #[test]
    fn placement_only_overwrites_plain_floor() {
        let (mut grid, room) = carved(Environment::Dungeon, RoomKind::Empty);
        let mut rng = SeededRandom::new("crowd");
        place_in_room(&mut grid, &room, Cell::Floor, Cell::Barrel, 24, &mut rng);
        place_in_room(&mut grid, &room, Cell::Floor, Cell::Pillar, 24, &mut rng);
        assert_eq!(count(&grid, Cell::Barrel) + count(&grid, Cell::Pillar), 24);
    }
}
