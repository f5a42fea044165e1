//! Difficulty and floor-count rules that size each generated floor.

use std::sync::LazyLock;

use regex::Regex;

use crate::types::RoomKind;

use super::seed::SeededRandom;

/// Upper bound on floors parsed from a grid-size label.
pub const MAX_FLOORS: u32 = 100;
pub const DEFAULT_ROOM_COUNT: usize = 7;

const MIN_ROOMS_PER_FLOOR: usize = 3;
const COMBAT_SHARE: f64 = 0.3;
const FILL_KINDS: [RoomKind; 3] = [RoomKind::Empty, RoomKind::Puzzle, RoomKind::Combat];

static FLOOR_COUNT_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?i)(\d+)\s*floors?").ok());

/// Room count for a difficulty label; unrecognized labels get the "Medium" count.
pub fn room_count_for_difficulty(difficulty: &str) -> usize {
    match difficulty.trim() {
        "Easy" => 5,
        "Easy to Medium" => 6,
        "Medium" => 7,
        "Medium to Hard" | "Hard" => 8,
        "Hard to Deadly" => 9,
        "Varies" => 7,
        _ => DEFAULT_ROOM_COUNT,
    }
}

/// Floors encoded in a grid-size label such as `"60x60 (3 floors)"`.
pub fn floor_count(grid_size: &str) -> u32 {
    let Some(captures) =
        FLOOR_COUNT_PATTERN.as_ref().and_then(|pattern| pattern.captures(grid_size))
    else {
        return 1;
    };
    match captures[1].parse::<u32>() {
        Ok(0) => 1,
        Ok(floors) => floors.min(MAX_FLOORS),
        Err(_) => MAX_FLOORS,
    }
}

pub fn rooms_per_floor(difficulty: &str, total_floors: u32) -> usize {
    let base = room_count_for_difficulty(difficulty);
    if total_floors <= 1 {
        return base;
    }
    MIN_ROOMS_PER_FLOOR.max(base.div_ceil(total_floors as usize) + 1)
}

pub fn is_final_floor(floor_index: u32, total_floors: u32) -> bool {
    total_floors.checked_sub(1) == Some(floor_index)
}

/// Slot-ordered room kinds; slot index becomes the room id.
pub(super) fn plan_room_kinds(
    room_count: usize,
    floor_index: u32,
    total_floors: u32,
    rng: &mut SeededRandom,
) -> Vec<RoomKind> {
    let lead = if floor_index == 0 { RoomKind::Entrance } else { RoomKind::Combat };
    let combat_rooms = ((room_count as f64 * COMBAT_SHARE).floor() as usize).max(1);

    let mut plan = vec![lead];
    plan.extend(std::iter::repeat_n(RoomKind::Combat, combat_rooms));
    if is_final_floor(floor_index, total_floors) {
        plan.push(RoomKind::Boss);
    }
    plan.push(RoomKind::Treasure);
    if plan.len() < room_count {
        plan.push(RoomKind::Trap);
    }
    while plan.len() < room_count {
        if let Some(&kind) = rng.pick(&FILL_KINDS) {
            plan.push(kind);
        }
    }
    plan.truncate(room_count);
    plan
}
