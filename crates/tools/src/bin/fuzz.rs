use std::collections::{BTreeSet, VecDeque};

use anyhow::Result;
use cartograph::mapgen::{GeneratedMap, Room, is_final_floor};
use cartograph::{Environment, MapGenerator, Pos, RoomKind};
use clap::Parser;
use rand_chacha::{
    ChaCha8Rng,
    rand_core::{Rng, SeedableRng},
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
    #[arg(short, long, default_value_t = 500)]
    iterations: u32,
}

const DIFFICULTIES: [&str; 8] = [
    "Easy",
    "Easy to Medium",
    "Medium",
    "Medium to Hard",
    "Hard",
    "Hard to Deadly",
    "Varies",
    "",
];

fn choose<T: Clone>(rng: &mut ChaCha8Rng, slice: &[T]) -> T {
    let p = rng.next_u64() as usize % slice.len();
    slice[p].clone()
}

const ROOM_PADDING: usize = 2;

/// True when `b` comes within the padding band around `a`.
fn within_padding(a: &Room, b: &Room) -> bool {
    b.x < a.x + a.width + ROOM_PADDING
        && a.x < b.x + b.width + ROOM_PADDING
        && b.y < a.y + a.height + ROOM_PADDING
        && a.y < b.y + b.height + ROOM_PADDING
}

fn reachable_rooms(map: &GeneratedMap) -> usize {
    let Some(first) = map.rooms.first() else {
        return 0;
    };
    let passable = |pos: Pos| map.cell_at(pos).is_walkable() || map.room_at(pos).is_some();
    let mut seen = BTreeSet::from([first.center()]);
    let mut open = VecDeque::from([first.center()]);
    while let Some(Pos { y, x }) = open.pop_front() {
        let neighbours =
            [Pos { y: y - 1, x }, Pos { y, x: x + 1 }, Pos { y: y + 1, x }, Pos { y, x: x - 1 }];
        for next in neighbours {
            if passable(next) && seen.insert(next) {
                open.push_back(next);
            }
        }
    }
    map.rooms.iter().filter(|room| seen.contains(&room.center())).count()
}

fn check_floor(map: &GeneratedMap) {
    assert_eq!(map.cells.len(), map.width * map.height, "Invariant failed: grid size");
    for (index, room) in map.rooms.iter().enumerate() {
        assert!(
            room.x >= 1
                && room.y >= 1
                && room.x + room.width < map.width
                && room.y + room.height < map.height,
            "Invariant failed: room {} touches the border",
            room.id
        );
        assert_eq!(
            room.encounter.is_some(),
            room.kind.has_encounter(),
            "Invariant failed: encounter attachment on room {}",
            room.id
        );
        for other in &map.rooms[index + 1..] {
            assert!(
                !within_padding(room, other),
                "Invariant failed: rooms {} and {} violate the padding",
                room.id,
                other.id
            );
        }
    }
    let bosses = map.rooms_of_kind(RoomKind::Boss).count();
    assert!(bosses <= 1, "Invariant failed: {bosses} boss rooms");
    if !is_final_floor(map.floor_index, map.total_floors) {
        assert_eq!(bosses, 0, "Invariant failed: boss before the final floor");
    }
    assert_eq!(reachable_rooms(map), map.rooms.len(), "Invariant failed: unreachable room");
}

fn main() -> Result<()> {
    let args = Args::parse();

    println!("Starting map fuzz on seed {} for {} iterations...", args.seed, args.iterations);
    let mut rng = ChaCha8Rng::seed_from_u64(args.seed);

    let mut floors_checked = 0;
    for _ in 0..args.iterations {
        let seed = format!("fuzz-{:016x}", rng.next_u64());
        let environment = choose(&mut rng, &Environment::ALL);
        let difficulty = choose(&mut rng, &DIFFICULTIES);
        let grid_size = format!("{} floors", 1 + rng.next_u64() % 4);

        let generator = MapGenerator::new(seed.as_str(), environment, difficulty, &grid_size);
        let floors = generator.generate_all_floors();
        for map in &floors {
            check_floor(map);
            assert_eq!(
                map.fingerprint(),
                generator.generate(map.floor_index).fingerprint(),
                "Invariant failed: regeneration differs for {seed}"
            );
        }
        floors_checked += floors.len();
    }

    println!("Fuzzing completed successfully ({floors_checked} floors checked).");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn room(x: usize, y: usize) -> Room {
        Room {
            id: 0,
            x,
            y,
            width: 5,
            height: 4,
            kind: RoomKind::Empty,
            label: "Alcove",
            encounter: None,
        }
    }

    #[test]
    fn padding_check_requires_a_two_cell_gap() {
        let anchor = room(10, 10);
        assert!(within_padding(&anchor, &room(15, 10)));
        assert!(within_padding(&anchor, &room(16, 10)));
        assert!(!within_padding(&anchor, &room(17, 10)));
        assert!(within_padding(&anchor, &room(4, 10)));
        assert!(!within_padding(&anchor, &room(3, 10)));
        assert!(within_padding(&anchor, &room(10, 15)));
        assert!(!within_padding(&anchor, &room(10, 16)));
        assert!(!within_padding(&anchor, &room(17, 16)));
    }

    #[test]
    fn generated_floors_pass_every_check() {
        let generator = MapGenerator::new("fuzz-smoke", Environment::Urban, "Hard", "2 floors");
        for map in generator.generate_all_floors() {
            check_floor(&map);
        }
    }
}
