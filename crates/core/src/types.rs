use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Pos {
    pub y: i32,
    pub x: i32,
}

/// One grid square. Discriminants are stable and feed the canonical byte encoding.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum Cell {
    Wall = 0,
    Floor = 1,
    Corridor = 2,
    Door = 3,
    SecretDoor = 4,
    Trap = 5,
    Chest = 6,
    Monster = 7,
    Pillar = 8,
    Water = 9,
    StairsUp = 10,
    StairsDown = 11,
    Altar = 12,
    Table = 13,
    Bookshelf = 14,
    Throne = 15,
    Pit = 16,
    Rubble = 17,
    Barrel = 18,
    Statue = 19,
    Tree = 20,
    Rock = 21,
    Grass = 22,
    Path = 23,
    Campfire = 24,
    StandingStone = 25,
    Well = 26,
    Stall = 27,
    BuildingWall = 28,
    Street = 29,
    Magma = 30,
    Obsidian = 31,
}

impl Cell {
    pub const ALL: [Cell; 32] = [
        Cell::Wall,
        Cell::Floor,
        Cell::Corridor,
        Cell::Door,
        Cell::SecretDoor,
        Cell::Trap,
        Cell::Chest,
        Cell::Monster,
        Cell::Pillar,
        Cell::Water,
        Cell::StairsUp,
        Cell::StairsDown,
        Cell::Altar,
        Cell::Table,
        Cell::Bookshelf,
        Cell::Throne,
        Cell::Pit,
        Cell::Rubble,
        Cell::Barrel,
        Cell::Statue,
        Cell::Tree,
        Cell::Rock,
        Cell::Grass,
        Cell::Path,
        Cell::Campfire,
        Cell::StandingStone,
        Cell::Well,
        Cell::Stall,
        Cell::BuildingWall,
        Cell::Street,
        Cell::Magma,
        Cell::Obsidian,
    ];

    pub fn code(self) -> u8 {
        self as u8
    }

    /// Cells a corridor may be carved through.
    pub fn is_terrain(self) -> bool {
        matches!(
            self,
            Cell::Wall
                | Cell::Grass
                | Cell::Obsidian
                | Cell::Tree
                | Cell::Rock
                | Cell::Water
                | Cell::Magma
                | Cell::BuildingWall
        )
    }

    /// Cells a marching token can cross outside of a room footprint.
    pub fn is_walkable(self) -> bool {
        matches!(
            self,
            Cell::Floor
                | Cell::Corridor
                | Cell::Door
                | Cell::SecretDoor
                | Cell::StairsUp
                | Cell::StairsDown
                | Cell::Grass
                | Cell::Path
                | Cell::Street
        )
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Environment {
    #[default]
    Dungeon,
    Wilderness,
    Urban,
    Special,
}

impl Environment {
    pub const ALL: [Environment; 4] =
        [Environment::Dungeon, Environment::Wilderness, Environment::Urban, Environment::Special];

    /// Case-insensitive lookup; anything unrecognized uses the Dungeon tables.
    pub fn from_name(name: &str) -> Self {
        let trimmed = name.trim();
        Self::ALL
            .into_iter()
            .find(|environment| environment.name().eq_ignore_ascii_case(trimmed))
            .unwrap_or_default()
    }

    pub fn name(self) -> &'static str {
        match self {
            Environment::Dungeon => "Dungeon",
            Environment::Wilderness => "Wilderness",
            Environment::Urban => "Urban",
            Environment::Special => "Special",
        }
    }

    pub(crate) fn base_cell(self) -> Cell {
        match self {
            Environment::Dungeon | Environment::Urban => Cell::Wall,
            Environment::Wilderness => Cell::Grass,
            Environment::Special => Cell::Obsidian,
        }
    }

    pub(crate) fn floor_cell(self) -> Cell {
        match self {
            Environment::Dungeon | Environment::Special => Cell::Floor,
            Environment::Wilderness => Cell::Grass,
            Environment::Urban => Cell::Street,
        }
    }

    pub(crate) fn corridor_cell(self) -> Cell {
        match self {
            Environment::Dungeon => Cell::Corridor,
            Environment::Wilderness => Cell::Path,
            Environment::Urban => Cell::Street,
            Environment::Special => Cell::Floor,
        }
    }

    pub(crate) fn has_doors(self) -> bool {
        matches!(self, Environment::Dungeon | Environment::Urban)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RoomKind {
    Entrance,
    Combat,
    Treasure,
    Trap,
    Boss,
    Empty,
    Puzzle,
}

impl RoomKind {
    pub const ALL: [RoomKind; 7] = [
        RoomKind::Entrance,
        RoomKind::Combat,
        RoomKind::Treasure,
        RoomKind::Trap,
        RoomKind::Boss,
        RoomKind::Empty,
        RoomKind::Puzzle,
    ];

    pub fn name(self) -> &'static str {
        match self {
            RoomKind::Entrance => "entrance",
            RoomKind::Combat => "combat",
            RoomKind::Treasure => "treasure",
            RoomKind::Trap => "trap",
            RoomKind::Boss => "boss",
            RoomKind::Empty => "empty",
            RoomKind::Puzzle => "puzzle",
        }
    }

    pub fn has_encounter(self) -> bool {
        matches!(self, RoomKind::Combat | RoomKind::Boss)
    }
}
