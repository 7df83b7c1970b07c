use core::ops::Index;

use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Play field: the fixed cell matrix plus a running count of revealed safe
/// cells, which answers "is any safe cell still hidden?" without a scan.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Grid {
    cells: Array2<Cell>,
    mine_count: CellCount,
    revealed_safe_count: CellCount,
}

impl Grid {
    /// Builds an all-hidden grid from a mine mask, filling in every safe
    /// cell's adjacent-mine count. Counts never change after this.
    pub fn from_mine_mask(mine_mask: Array2<bool>) -> Self {
        let dim = mine_mask.dim();
        let size: Coord2 = (dim.0.try_into().unwrap(), dim.1.try_into().unwrap());
        let mut cells: Array2<Cell> = Array2::default(size.to_nd_index());
        let mut mine_count: CellCount = 0;

        for x in 0..size.0 {
            for y in 0..size.1 {
                let coords = (x, y);
                let content = if mine_mask[coords.to_nd_index()] {
                    mine_count += 1;
                    CellContent::Mine
                } else {
                    let adjacent_mines = mine_mask
                        .iter_neighbors(coords)
                        .filter(|&pos| mine_mask[pos.to_nd_index()])
                        .count()
                        .try_into()
                        .unwrap();
                    CellContent::Safe(adjacent_mines)
                };
                cells[coords.to_nd_index()] = Cell::hidden(content);
            }
        }

        Self {
            cells,
            mine_count,
            revealed_safe_count: 0,
        }
    }

    /// Builds a grid with mines exactly at `mine_coords`, for callers that
    /// pick the positions themselves.
    pub fn with_mines(size: Coord2, mine_coords: &[Coord2]) -> Result<Self> {
        let mut mine_mask: Array2<bool> = Array2::default(size.to_nd_index());

        for &coords in mine_coords {
            if coords.0 >= size.0 || coords.1 >= size.1 {
                return Err(GameError::InvalidCoords);
            }
            mine_mask[coords.to_nd_index()] = true;
        }

        Ok(Self::from_mine_mask(mine_mask))
    }

    pub fn size(&self) -> Coord2 {
        let dim = self.cells.dim();
        (dim.0.try_into().unwrap(), dim.1.try_into().unwrap())
    }

    pub fn contains(&self, coords: Coord2) -> bool {
        let size = self.size();
        coords.0 < size.0 && coords.1 < size.1
    }

    pub fn total_cells(&self) -> CellCount {
        self.cells.len().try_into().unwrap()
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn safe_cell_count(&self) -> CellCount {
        self.total_cells() - self.mine_count
    }

    pub fn revealed_safe_count(&self) -> CellCount {
        self.revealed_safe_count
    }

    pub fn cell_at(&self, coords: Coord2) -> Cell {
        self.cells[coords.to_nd_index()]
    }

    pub fn content_at(&self, coords: Coord2) -> CellContent {
        self.cell_at(coords).content
    }

    pub fn is_revealed(&self, coords: Coord2) -> bool {
        self.cell_at(coords).is_revealed()
    }

    /// Marks the cell revealed. Each safe cell is counted the first time
    /// only, so repeated calls keep the counter exact.
    pub(crate) fn set_revealed(&mut self, coords: Coord2) {
        let cell = &mut self.cells[coords.to_nd_index()];
        if !cell.is_revealed() {
            if !cell.content.is_mine() {
                self.revealed_safe_count += 1;
            }
            cell.visibility = Visibility::Revealed;
        }
    }

    pub(crate) fn iter_neighbors(&self, coords: Coord2) -> NeighborIter {
        self.cells.iter_neighbors(coords)
    }
}

impl Index<Coord2> for Grid {
    type Output = Cell;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cells[coords.to_nd_index()]
    }
}
