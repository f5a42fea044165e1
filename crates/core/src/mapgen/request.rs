//! Caller-facing description of one map entry, as stored in request files.

use serde::Deserialize;

use crate::types::Environment;

use super::generator::MapGenerator;
use super::model::GeneratedMap;
use super::progression::floor_count;

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct MapRequest {
    /// Doubles as the generation seed.
    pub id: String,
    pub name: String,
    pub environment: String,
    pub difficulty: String,
    pub grid_size: String,
}

impl MapRequest {
    pub fn environment(&self) -> Environment {
        Environment::from_name(&self.environment)
    }

    pub fn floor_count(&self) -> u32 {
        floor_count(&self.grid_size)
    }

    pub fn generator(&self) -> MapGenerator {
        MapGenerator::new(self.id.as_str(), self.environment(), &self.difficulty, &self.grid_size)
    }

    pub fn generate_floors(&self) -> Vec<GeneratedMap> {
        self.generator().generate_all_floors()
    }
}
