//! Floor-construction pipeline that composes mapgen subsystems.

use log::debug;

use crate::types::Environment;

use super::super::corridors::{carve_links, place_doors, plan_links};
use super::super::decor::decorate_rooms;
use super::super::layout::{carve_rooms, place_rooms};
use super::super::model::GeneratedMap;
use super::super::progression::plan_room_kinds;
use super::super::seed::{SeededRandom, compose_floor_seed};
use super::super::terrain::{lay_base_terrain, open_urban_streets};
use super::stairs::stamp_floor_stairs;

pub(super) struct FloorContext<'a> {
    pub(super) seed: &'a str,
    pub(super) environment: Environment,
    pub(super) room_count: usize,
    pub(super) total_floors: u32,
    pub(super) width: usize,
    pub(super) height: usize,
}

/// Stage order fixes the order of random draws, so reordering stages changes every map.
pub(super) fn generate_floor(context: &FloorContext<'_>, floor_index: u32) -> GeneratedMap {
    let FloorContext { seed, environment, room_count, total_floors, width, height } = *context;
    let mut rng = SeededRandom::new(&compose_floor_seed(seed, environment, floor_index));

    let mut grid = lay_base_terrain(environment, width, height, &mut rng);
    let plan = plan_room_kinds(room_count, floor_index, total_floors, &mut rng);
    let rooms = place_rooms(&plan, environment, width, height, &mut rng);
    carve_rooms(&mut grid, &rooms, environment);

    let link_plan = plan_links(&rooms, &mut rng);
    let links = carve_links(&mut grid, &rooms, &link_plan, environment);
    place_doors(&mut grid, &rooms, environment);
    if environment == Environment::Urban {
        open_urban_streets(&mut grid);
    }

    decorate_rooms(&mut grid, &rooms, environment, &mut rng);
    stamp_floor_stairs(&mut grid, &rooms, floor_index, total_floors);

    debug!(
        "floor {}/{total_floors} of {:?} ({}): placed {} of {} rooms, {} links",
        floor_index.saturating_add(1),
        seed,
        environment.name(),
        rooms.len(),
        plan.len(),
        links.len()
    );

    GeneratedMap {
        width,
        height,
        environment,
        floor_index,
        total_floors,
        cells: grid.into_cells(),
        rooms,
        links,
    }
}
