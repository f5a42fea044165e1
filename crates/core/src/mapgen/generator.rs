//! High-level map generation entry point holding per-dungeon inputs.

mod pipeline;
mod stairs;

use crate::error::{GenerateError, GenerateResult};
use crate::types::Environment;

use super::layout::{MAX_ROOM_HEIGHT, MAX_ROOM_WIDTH};
use super::model::GeneratedMap;
use super::progression::{floor_count, rooms_per_floor};
use pipeline::{FloorContext, generate_floor};

pub const DEFAULT_WIDTH: usize = 48;
pub const DEFAULT_HEIGHT: usize = 36;
/// One maximal room plus a one-cell margin and the two-cell placement reserve.
pub const MIN_WIDTH: usize = MAX_ROOM_WIDTH + 3;
pub const MIN_HEIGHT: usize = MAX_ROOM_HEIGHT + 3;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MapGenerator {
    seed: String,
    environment: Environment,
    room_count: usize,
    total_floors: u32,
    width: usize,
    height: usize,
}

impl MapGenerator {
    pub fn new(
        seed: impl Into<String>,
        environment: Environment,
        difficulty: &str,
        grid_size: &str,
    ) -> Self {
        let total_floors = floor_count(grid_size);
        Self {
            seed: seed.into(),
            environment,
            room_count: rooms_per_floor(difficulty, total_floors),
            total_floors,
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }

    pub fn with_dimensions(mut self, width: usize, height: usize) -> GenerateResult<Self> {
        if width < MIN_WIDTH || height < MIN_HEIGHT {
            return Err(GenerateError::GridTooSmall {
                width,
                height,
                min_width: MIN_WIDTH,
                min_height: MIN_HEIGHT,
            });
        }
        self.width = width;
        self.height = height;
        Ok(self)
    }

    pub fn total_floors(&self) -> u32 {
        self.total_floors
    }

    pub fn rooms_per_floor(&self) -> usize {
        self.room_count
    }

    pub fn environment(&self) -> Environment {
        self.environment
    }

    /// Indices past the last floor still generate; they get no boss and a descent marker.
    pub fn generate(&self, floor_index: u32) -> GeneratedMap {
        generate_floor(
            &FloorContext {
                seed: &self.seed,
                environment: self.environment,
                room_count: self.room_count,
                total_floors: self.total_floors,
                width: self.width,
                height: self.height,
            },
            floor_index,
        )
    }

    pub fn generate_all_floors(&self) -> Vec<GeneratedMap> {
        (0..self.total_floors).map(|floor_index| self.generate(floor_index)).collect()
    }
}
