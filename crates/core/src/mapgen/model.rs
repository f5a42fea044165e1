//! Public data models for generated maps, rooms, and corridor links.

use serde::Serialize;
use xxhash_rust::xxh3::xxh3_64;

use crate::content::Encounter;
use crate::types::{Cell, Environment, Pos, RoomKind};

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Room {
    pub id: usize,
    pub x: usize,
    pub y: usize,
    pub width: usize,
    pub height: usize,
    pub kind: RoomKind,
    pub label: &'static str,
    pub encounter: Option<&'static Encounter>,
}

impl Room {
    /// Integer centre; corridors start and end here and centre stamps land here.
    pub fn center(&self) -> Pos {
        Pos { y: (self.y + self.height / 2) as i32, x: (self.x + self.width / 2) as i32 }
    }

    pub fn contains(&self, pos: Pos) -> bool {
        pos.x >= self.x as i32
            && pos.y >= self.y as i32
            && pos.x < (self.x + self.width) as i32
            && pos.y < (self.y + self.height) as i32
    }
}

/// Two room ids joined by a carved corridor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct CorridorLink {
    pub from: usize,
    pub to: usize,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GeneratedMap {
    pub width: usize,
    pub height: usize,
    pub environment: Environment,
    pub floor_index: u32,
    pub total_floors: u32,
    pub cells: Vec<Cell>,
    pub rooms: Vec<Room>,
    pub links: Vec<CorridorLink>,
}

impl GeneratedMap {
    pub fn cell_at(&self, pos: Pos) -> Cell {
        if pos.x < 0 || pos.y < 0 {
            return Cell::Wall;
        }
        let x = pos.x as usize;
        let y = pos.y as usize;
        if x >= self.width || y >= self.height {
            return Cell::Wall;
        }
        self.cells[y * self.width + x]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.width.max(1))
    }

    pub fn to_rows(&self) -> Vec<Vec<Cell>> {
        self.rows().map(<[Cell]>::to_vec).collect()
    }

    pub fn room_at(&self, pos: Pos) -> Option<&Room> {
        self.rooms.iter().find(|room| room.contains(pos))
    }

    pub fn rooms_of_kind(&self, kind: RoomKind) -> impl Iterator<Item = &Room> {
        self.rooms.iter().filter(move |room| room.kind == kind)
    }

    pub fn count_cells(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|&&candidate| candidate == cell).count()
    }

    pub fn canonical_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.cells.len() + 64);
        bytes.extend((self.width as u32).to_le_bytes());
        bytes.extend((self.height as u32).to_le_bytes());
        bytes.extend(self.environment.name().as_bytes());
        bytes.extend(self.floor_index.to_le_bytes());
        bytes.extend(self.total_floors.to_le_bytes());
        bytes.extend(self.cells.iter().map(|cell| cell.code()));

        bytes.extend((self.rooms.len() as u32).to_le_bytes());
        for room in &self.rooms {
            for value in [room.id, room.x, room.y, room.width, room.height] {
                bytes.extend((value as u32).to_le_bytes());
            }
            bytes.extend(room.kind.name().as_bytes());
            push_text(&mut bytes, room.label);
            push_text(&mut bytes, room.encounter.map_or("", |encounter| encounter.name));
        }

        bytes.extend((self.links.len() as u32).to_le_bytes());
        for link in &self.links {
            bytes.extend((link.from as u32).to_le_bytes());
            bytes.extend((link.to as u32).to_le_bytes());
        }
        bytes
    }

    pub fn fingerprint(&self) -> u64 {
        xxh3_64(&self.canonical_bytes())
    }
}

fn push_text(bytes: &mut Vec<u8>, text: &str) {
    bytes.extend((text.len() as u32).to_le_bytes());
    bytes.extend(text.as_bytes());
}
