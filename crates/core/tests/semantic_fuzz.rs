use std::collections::{BTreeSet, VecDeque};

use cartograph::mapgen::GeneratedMap;
use cartograph::{Environment, MapGenerator, Pos, RoomKind};
use proptest::{
    arbitrary::any,
    test_runner::{Config as ProptestConfig, TestCaseError, TestRunner},
};
use rand_chacha::{
    ChaCha8Rng,
    rand_core::{Rng, SeedableRng},
};

const DIFFICULTIES: [&str; 8] = [
    "Easy",
    "Easy to Medium",
    "Medium",
    "Medium to Hard",
    "Hard",
    "Hard to Deadly",
    "Varies",
    "Legendary",
];

fn choose<T: Clone>(rng: &mut ChaCha8Rng, slice: &[T]) -> T {
    let p = rng.next_u64() as usize % slice.len();
    slice[p].clone()
}

fn reachable_room_ids(map: &GeneratedMap) -> BTreeSet<usize> {
    let Some(first) = map.rooms.first() else {
        return BTreeSet::new();
    };
    let passable = |pos: Pos| map.cell_at(pos).is_walkable() || map.room_at(pos).is_some();
    let mut open = VecDeque::from([first.center()]);
    let mut seen = BTreeSet::from([first.center()]);
    while let Some(pos) = open.pop_front() {
        for next in [
            Pos { y: pos.y - 1, x: pos.x },
            Pos { y: pos.y, x: pos.x + 1 },
            Pos { y: pos.y + 1, x: pos.x },
            Pos { y: pos.y, x: pos.x - 1 },
        ] {
            if !seen.contains(&next) && passable(next) {
                seen.insert(next);
                open.push_back(next);
            }
        }
    }
    map.rooms.iter().filter(|room| seen.contains(&room.center())).map(|room| room.id).collect()
}

fn run_fuzz_generation(input_seed: u64) -> Result<(), String> {
    let mut rng = ChaCha8Rng::seed_from_u64(input_seed);
    let seed = format!("{:x}", rng.next_u64());
    let environment = choose(&mut rng, &Environment::ALL);
    let difficulty = choose(&mut rng, &DIFFICULTIES);
    let floors = 1 + rng.next_u64() % 5;
    let side = 20 + rng.next_u64() % 80;
    let grid_size = format!("{side}x{side} ({floors} floors)");

    let generator = MapGenerator::new(seed.clone(), environment, difficulty, &grid_size);
    for map in generator.generate_all_floors() {
        let context = format!("seed={seed} env={environment:?} floor={}", map.floor_index);
        if map.cells.len() != map.width * map.height {
            return Err(format!("Invariant failed: grid size mismatch ({context})"));
        }
        if map.rooms.iter().any(|room| room.encounter.is_some() != room.kind.has_encounter()) {
            return Err(format!("Invariant failed: encounter attachment ({context})"));
        }
        let entrances = map.rooms.iter().filter(|room| room.kind == RoomKind::Entrance).count();
        if entrances != usize::from(map.floor_index == 0) {
            return Err(format!("Invariant failed: {entrances} entrances ({context})"));
        }
        let reachable = reachable_room_ids(&map);
        if reachable.len() != map.rooms.len() {
            return Err(format!("Invariant failed: unreachable rooms ({context})"));
        }
        let mut linked: BTreeSet<usize> = BTreeSet::from([map.rooms[0].id]);
        for link in &map.links {
            linked.insert(link.from);
            linked.insert(link.to);
        }
        if linked.len() != map.rooms.len() {
            return Err(format!("Invariant failed: rooms missing from the link set ({context})"));
        }
    }
    Ok(())
}

#[test]
fn test_fuzz_map_generation() {
    let mut runner = TestRunner::new(ProptestConfig::with_cases(64));

    runner
        .run(&any::<u64>(), |input_seed| {
            run_fuzz_generation(input_seed).map_err(TestCaseError::fail)?;
            Ok(())
        })
        .expect("fuzzed generation should preserve map invariants");
}
