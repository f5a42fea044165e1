//! Procedural map generation domain split into coherent submodules.

pub mod model;
pub mod progression;
pub mod request;

mod corridors;
mod decor;
mod generator;
mod grid;
mod layout;
mod seed;
mod terrain;

use crate::types::Environment;

pub use generator::{DEFAULT_HEIGHT, DEFAULT_WIDTH, MIN_HEIGHT, MIN_WIDTH, MapGenerator};
pub use model::{CorridorLink, GeneratedMap, Room};
pub use progression::{
    MAX_FLOORS, floor_count, is_final_floor, room_count_for_difficulty, rooms_per_floor,
};
pub use request::MapRequest;
pub use seed::SeededRandom;

pub fn generate(
    seed: &str,
    environment: Environment,
    difficulty: &str,
    grid_size: &str,
    floor_index: u32,
) -> GeneratedMap {
    MapGenerator::new(seed, environment, difficulty, grid_size).generate(floor_index)
}

#[cfg(test)]
mod tests {
    use super::{Environment, MapGenerator};
    use crate::types::{Cell, Pos, RoomKind};

    #[test]
    fn generate_matches_map_generator_output() {
        let from_helper = super::generate("seed", Environment::Urban, "Hard", "2 floors", 1);
        let from_generator =
            MapGenerator::new("seed", Environment::Urban, "Hard", "2 floors").generate(1);

        assert_eq!(from_helper, from_generator);
    }

    #[test]
    fn largest_floor_index_still_generates() {
        for grid_size in ["", "3 floors"] {
            let map = super::generate("x", Environment::Dungeon, "Medium", grid_size, u32::MAX);
            assert_eq!(map.floor_index, u32::MAX);
            assert!(!map.rooms.is_empty());
            assert_eq!(map.rooms[0].kind, RoomKind::Combat);
            assert_eq!(map.rooms_of_kind(RoomKind::Boss).count(), 0, "{grid_size:?}");
            assert_eq!(map.count_cells(Cell::StairsUp), 0);
        }

        let deep = super::generate("x", Environment::Dungeon, "Medium", "3 floors", u32::MAX);
        let first = &deep.rooms[0];
        let descent = Pos { y: first.y as i32 + 1, x: first.x as i32 + 1 };
        assert_eq!(deep.cell_at(descent), Cell::StairsDown);
    }
}
