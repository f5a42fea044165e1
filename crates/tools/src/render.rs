//! Plain-text rendering of generated floors.

use cartograph::mapgen::GeneratedMap;
use cartograph::style::{cell_style, legend, room_color};
use cartograph::{Cell, Pos};

/// Glyph for cells whose style only carries a fill colour.
fn fallback_glyph(cell: Cell) -> char {
    match cell {
        Cell::Wall => '#',
        Cell::BuildingWall => '%',
        Cell::Floor => '.',
        Cell::Corridor | Cell::Street => ',',
        Cell::Path => ':',
        Cell::Grass => '"',
        Cell::Pillar => 'I',
        Cell::Table => 't',
        _ => '?',
    }
}

pub fn glyph(cell: Cell) -> char {
    cell_style(cell).glyph.unwrap_or_else(|| fallback_glyph(cell))
}

pub fn render_ascii(map: &GeneratedMap) -> String {
    let mut out = String::with_capacity((map.width + 1) * map.height);
    for row in map.rows() {
        out.extend(row.iter().map(|cell| glyph(*cell)));
        out.push('\n');
    }
    out
}

pub fn render_rooms(map: &GeneratedMap) -> String {
    let mut out = String::new();
    for room in &map.rooms {
        let Pos { y, x } = room.center();
        out.push_str(&format!(
            "  #{:<2} {:<8} {} {:<24} {}x{} at ({x}, {y})",
            room.id,
            room.kind.name(),
            room_color(room.kind),
            room.label,
            room.width,
            room.height
        ));
        if let Some(encounter) = room.encounter {
            out.push_str(&format!(
                " | {} [{}] AC {} HP {} CR {}",
                encounter.name,
                encounter.creatures,
                encounter.armor_class,
                encounter.hit_points,
                encounter.challenge
            ));
        }
        out.push('\n');
    }
    out
}

pub fn render_legend(map: &GeneratedMap) -> String {
    legend(map.environment)
        .iter()
        .map(|entry| format!("{} {}", glyph(entry.cell), entry.name))
        .collect::<Vec<_>>()
        .join("  ")
}
