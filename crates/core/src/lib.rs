pub mod content;
pub mod error;
pub mod mapgen;
pub mod style;
pub mod types;

pub use content::Encounter;
pub use error::{GenerateError, GenerateResult};
pub use mapgen::{GeneratedMap, MapGenerator, MapRequest, generate};
pub use types::*;
