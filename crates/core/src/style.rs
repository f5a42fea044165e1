//! Renderer-facing presentation tables. The generator never reads these.

use serde::Serialize;

use crate::types::{Cell, Environment, RoomKind};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct CellStyle {
    pub fill: &'static str,
    pub glyph: Option<char>,
    pub glyph_color: Option<&'static str>,
    pub glyph_size: Option<u8>,
}

const fn plain(fill: &'static str) -> CellStyle {
    CellStyle { fill, glyph: None, glyph_color: None, glyph_size: None }
}

const fn marked(fill: &'static str, glyph: char, color: &'static str, size: u8) -> CellStyle {
    CellStyle { fill, glyph: Some(glyph), glyph_color: Some(color), glyph_size: Some(size) }
}

/// Glyph size used when a style leaves it unspecified.
pub const DEFAULT_GLYPH_SIZE: u8 = 8;

impl CellStyle {
    /// `None` when the cell carries no glyph at all.
    pub fn resolved_glyph_size(&self) -> Option<u8> {
        self.glyph.map(|_| self.glyph_size.unwrap_or(DEFAULT_GLYPH_SIZE))
    }
}

pub fn cell_style(cell: Cell) -> CellStyle {
    match cell {
        Cell::Wall => plain("#1a1d23"),
        Cell::Floor => plain("#2a2d35"),
        Cell::Corridor => plain("#252830"),
        Cell::Door => CellStyle {
            fill: "#8B4513",
            glyph: Some('D'),
            glyph_color: Some("#fff"),
            glyph_size: None,
        },
        Cell::SecretDoor => marked("#2a2d35", 'S', "#ff8c00", 7),
        Cell::Trap => marked("#2a2d35", '!', "#ff8c00", 8),
        Cell::Chest => marked("#2a2d35", '*', "#ffd700", 9),
        Cell::Monster => marked("#2a2d35", 'M', "#ff4a4a", 8),
        Cell::Pillar => plain("#555860"),
        Cell::Water => marked("#1a3a5c", '~', "#4a9eff", 9),
        Cell::StairsUp => marked("#2a2d35", '^', "#aaa", 8),
        Cell::StairsDown => marked("#2a2d35", 'v', "#aaa", 8),
        Cell::Altar => marked("#2a2d35", '+', "#9b59b6", 9),
        Cell::Table => plain("#3d3020"),
        Cell::Bookshelf => marked("#4a3520", '=', "#c4a06a", 8),
        Cell::Throne => marked("#3d2050", 'T', "#ffd700", 8),
        Cell::Pit => marked("#0d0d0d", 'X', "#555", 7),
        Cell::Rubble => marked("#333639", '.', "#777", 10),
        Cell::Barrel => marked("#5a4020", 'o', "#8a7040", 7),
        Cell::Statue => marked("#2a2d35", 'i', "#aaa", 8),
        Cell::Tree => marked("#1a3a1a", 'T', "#2d8a2d", 9),
        Cell::Rock => marked("#3a3a3a", '.', "#777", 8),
        Cell::Grass => plain("#1e3820"),
        Cell::Path => plain("#3a3525"),
        Cell::Campfire => marked("#3a2010", 'f', "#ff6a00", 8),
        Cell::StandingStone => marked("#3a3c40", 'O', "#9b9b9b", 8),
        Cell::Well => marked("#1a2a3a", 'W', "#6aafff", 8),
        Cell::Stall => marked("#4a3a20", '#', "#c4a06a", 7),
        Cell::BuildingWall => plain("#2a2520"),
        Cell::Street => plain("#353530"),
        Cell::Magma => marked("#8a2000", '~', "#ff6a00", 9),
        Cell::Obsidian => marked("#101018", '.', "#4a4a5a", 7),
    }
}

pub fn room_color(kind: RoomKind) -> &'static str {
    match kind {
        RoomKind::Entrance => "#4a9eff",
        RoomKind::Combat => "#ff4a4a",
        RoomKind::Treasure => "#ffd700",
        RoomKind::Trap => "#ff8c00",
        RoomKind::Boss => "#9b59b6",
        RoomKind::Empty => "#6b7280",
        RoomKind::Puzzle => "#2ecc71",
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct LegendEntry {
    pub cell: Cell,
    pub name: &'static str,
}

const fn entry(cell: Cell, name: &'static str) -> LegendEntry {
    LegendEntry { cell, name }
}

const DUNGEON_LEGEND: [LegendEntry; 16] = [
    entry(Cell::Floor, "Floor"),
    entry(Cell::Corridor, "Corridor"),
    entry(Cell::Door, "Door"),
    entry(Cell::SecretDoor, "Secret Door"),
    entry(Cell::Trap, "Trap"),
    entry(Cell::Chest, "Treasure"),
    entry(Cell::Monster, "Monster"),
    entry(Cell::Pillar, "Pillar"),
    entry(Cell::Water, "Water"),
    entry(Cell::StairsDown, "Stairs"),
    entry(Cell::Altar, "Altar"),
    entry(Cell::Bookshelf, "Bookshelf"),
    entry(Cell::Throne, "Throne"),
    entry(Cell::Pit, "Pit"),
    entry(Cell::Barrel, "Barrel"),
    entry(Cell::Statue, "Statue"),
];

const WILDERNESS_LEGEND: [LegendEntry; 11] = [
    entry(Cell::Grass, "Open Ground"),
    entry(Cell::Path, "Trail"),
    entry(Cell::Tree, "Tree"),
    entry(Cell::Rock, "Rock"),
    entry(Cell::Water, "Water"),
    entry(Cell::Campfire, "Campfire"),
    entry(Cell::StandingStone, "Stone"),
    entry(Cell::Well, "Well"),
    entry(Cell::Monster, "Creature"),
    entry(Cell::Trap, "Hazard"),
    entry(Cell::Chest, "Hidden Cache"),
];

const URBAN_LEGEND: [LegendEntry; 12] = [
    entry(Cell::Street, "Street"),
    entry(Cell::BuildingWall, "Wall"),
    entry(Cell::Door, "Door"),
    entry(Cell::SecretDoor, "Passage"),
    entry(Cell::Table, "Furniture"),
    entry(Cell::Stall, "Counter"),
    entry(Cell::Barrel, "Barrel"),
    entry(Cell::Monster, "NPC"),
    entry(Cell::Chest, "Valuables"),
    entry(Cell::StairsDown, "Stairs"),
    entry(Cell::Bookshelf, "Shelf"),
    entry(Cell::Trap, "Trap"),
];

const SPECIAL_LEGEND: [LegendEntry; 9] = [
    entry(Cell::Obsidian, "Obsidian"),
    entry(Cell::Floor, "Stone"),
    entry(Cell::Magma, "Magma"),
    entry(Cell::Pillar, "Pillar"),
    entry(Cell::Chest, "Treasure"),
    entry(Cell::Monster, "Creature"),
    entry(Cell::Throne, "Throne"),
    entry(Cell::StairsUp, "Ledge"),
    entry(Cell::Trap, "Gas Vent"),
];

pub fn legend(environment: Environment) -> &'static [LegendEntry] {
    match environment {
        Environment::Dungeon => &DUNGEON_LEGEND,
        Environment::Wilderness => &WILDERNESS_LEGEND,
        Environment::Urban => &URBAN_LEGEND,
        Environment::Special => &SPECIAL_LEGEND,
    }
}
