use alloc::vec::Vec;

use ndarray::Array2;
use rand::{Rng, RngExt};

use crate::*;

/// True when `pos` lies in the mine-free zone around `center`: the cell
/// itself plus its up to eight neighbors.
fn in_exclusion_zone(pos: Coord2, center: Coord2) -> bool {
    pos.0.abs_diff(center.0) <= 1 && pos.1.abs_diff(center.1) <= 1
}

/// Generates a grid for `config`, drawing mine positions uniformly without
/// replacement from the cells outside the exclusion zone. Without an
/// exclusion at least one cell is still kept mine-free, so every board has
/// something to reveal.
pub fn generate(config: GridConfig, exclude: Option<Coord2>, rng: &mut impl Rng) -> Result<Grid> {
    let (size_x, size_y) = config.size;
    let total = config.total_cells();

    let mut candidates: Vec<Coord2> = Vec::with_capacity(usize::from(total));
    for y in 0..size_y {
        for x in 0..size_x {
            let coords = (x, y);
            if exclude.is_some_and(|center| in_exclusion_zone(coords, center)) {
                continue;
            }
            candidates.push(coords);
        }
    }

    let available: CellCount = candidates.len().try_into().unwrap();
    let placeable = if available < total {
        available
    } else {
        total.saturating_sub(1)
    };
    if config.mines > placeable {
        log::warn!(
            "cannot place {} mines, only {} cells are available",
            config.mines,
            placeable
        );
        return Err(GameError::InsufficientSpace {
            placeable,
            requested: config.mines,
        });
    }

    // partial Fisher-Yates: after `mines` swaps the head of the candidate
    // list is a uniform draw without replacement
    let mut mine_mask: Array2<bool> = Array2::default(config.size.to_nd_index());
    for i in 0..usize::from(config.mines) {
        let pick = rng.random_range(i..candidates.len());
        candidates.swap(i, pick);
        mine_mask[candidates[i].to_nd_index()] = true;
    }

    log::debug!(
        "generated {}x{} grid with {} mines, excluded start: {:?}",
        size_x,
        size_y,
        config.mines,
        exclude
    );
    Ok(Grid::from_mine_mask(mine_mask))
}
