//! Environment base layers laid down before any room exists.

use crate::types::{Cell, Environment};

use super::grid::CellGrid;
use super::seed::SeededRandom;

const TREE_BELOW: f64 = 0.25;
const ROCK_BELOW: f64 = 0.30;
const WATER_BELOW: f64 = 0.34;

const MAGMA_RIVERS: usize = 3;
const MAGMA_RIVER_STEPS: usize = 30;

pub(super) fn lay_base_terrain(
    environment: Environment,
    width: usize,
    height: usize,
    rng: &mut SeededRandom,
) -> CellGrid {
    let mut grid = CellGrid::filled(width, height, environment.base_cell());
    match environment {
        Environment::Wilderness => scatter_wilderness(&mut grid, rng),
        Environment::Special => run_magma_rivers(&mut grid, rng),
        Environment::Dungeon | Environment::Urban => {}
    }
    grid
}

fn scatter_wilderness(grid: &mut CellGrid, rng: &mut SeededRandom) {
    for y in 0..grid.height as i32 {
        for x in 0..grid.width as i32 {
            let roll = rng.next_f64();
            if roll < TREE_BELOW {
                grid.set(x, y, Cell::Tree);
            } else if roll < ROCK_BELOW {
                grid.set(x, y, Cell::Rock);
            } else if roll < WATER_BELOW {
                grid.set(x, y, Cell::Water);
            }
        }
    }
}

/// Random walks two cells wide; a walk that leaves the grid keeps stepping but stops painting.
fn run_magma_rivers(grid: &mut CellGrid, rng: &mut SeededRandom) {
    for _ in 0..MAGMA_RIVERS {
        let mut x = rng.below(grid.width) as i32;
        let mut y = rng.below(grid.height) as i32;
        for _ in 0..MAGMA_RIVER_STEPS {
            if grid.in_bounds(x, y) {
                grid.set(x, y, Cell::Magma);
                grid.set(x + 1, y, Cell::Magma);
            }
            x += rng.below(3) as i32 - 1;
            y += rng.below(3) as i32 - 1;
        }
    }
}

/// Urban blocks read as open street once buildings and doors are in place.
pub(super) fn open_urban_streets(grid: &mut CellGrid) {
    grid.replace_all(Cell::Wall, Cell::Street);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count(grid: &CellGrid, cell: Cell) -> usize {
        grid.clone().into_cells().into_iter().filter(|&candidate| candidate == cell).count()
    }

    #[test]
    fn dungeon_and_urban_start_as_solid_wall() {
        for environment in [Environment::Dungeon, Environment::Urban] {
            let mut rng = SeededRandom::new("solid");
            let grid = lay_base_terrain(environment, 48, 36, &mut rng);
            assert_eq!(count(&grid, Cell::Wall), 48 * 36);
            assert_eq!(rng, SeededRandom::new("solid"), "solid layers must not consume draws");
        }
    }

    #[test]
    fn wilderness_scatter_leaves_mostly_grass_with_some_trees() {
        let mut rng = SeededRandom::new("forest");
        let grid = lay_base_terrain(Environment::Wilderness, 48, 36, &mut rng);
        let grass = count(&grid, Cell::Grass);
        let trees = count(&grid, Cell::Tree);
        assert!(grass > trees, "grass={grass} trees={trees}");
        assert!(trees > 0);
        assert_eq!(
            grass + trees + count(&grid, Cell::Rock) + count(&grid, Cell::Water),
            48 * 36
        );
    }

    #[test]
    fn special_layer_is_obsidian_crossed_by_magma() {
        let mut rng = SeededRandom::new("caldera");
        let grid = lay_base_terrain(Environment::Special, 48, 36, &mut rng);
        let magma = count(&grid, Cell::Magma);
        assert!(magma > 0);
        assert_eq!(magma + count(&grid, Cell::Obsidian), 48 * 36);
    }

    #[test]
    fn scatter_checks_tree_then_rock_then_water() {
        // Draws for this seed: 0.325 (water), 0.047 (tree), 0.738 (grass), 0.270 (rock).
        let mut rng = SeededRandom::new("grove-34");
        let grid = lay_base_terrain(Environment::Wilderness, 2, 2, &mut rng);
        assert_eq!(grid.into_cells(), vec![Cell::Water, Cell::Tree, Cell::Grass, Cell::Rock]);
    }

    #[test]
    fn magma_walks_paint_the_cell_and_its_right_neighbour() {
        let mut rng = SeededRandom::new("caldera");
        let mut replay = rng.clone();
        let grid = lay_base_terrain(Environment::Special, 48, 36, &mut rng);

        let (mut x, mut y) = (replay.below(48) as i32, replay.below(36) as i32);
        assert_eq!((x, y), (8, 23));
        for river in 0..MAGMA_RIVERS {
            if river > 0 {
                x = replay.below(48) as i32;
                y = replay.below(36) as i32;
            }
            for _ in 0..MAGMA_RIVER_STEPS {
                if grid.in_bounds(x, y) {
                    assert!(grid.is(x, y, Cell::Magma), "walk cell ({x}, {y})");
                    if grid.in_bounds(x + 1, y) {
                        assert!(grid.is(x + 1, y, Cell::Magma), "right of ({x}, {y})");
                    }
                }
                x += replay.below(3) as i32 - 1;
                y += replay.below(3) as i32 - 1;
            }
        }
        assert_eq!(replay, rng, "walks consume exactly the replayed draws");
    }

    #[test]
    fn urban_streets_replace_only_plain_wall() {
        let mut grid = CellGrid::filled(5, 5, Cell::Wall);
        grid.set(2, 2, Cell::BuildingWall);
        open_urban_streets(&mut grid);
        assert!(grid.is(2, 2, Cell::BuildingWall));
        assert_eq!(count(&grid, Cell::Street), 24);
    }
}
