#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use cell::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use grid::*;
pub use types::*;

mod cell;
mod engine;
mod error;
mod generator;
mod grid;
mod types;

/// Board dimensions and mine count for a game.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GridConfig {
    pub size: Coord2,
    pub mines: CellCount,
}

impl GridConfig {
    pub const fn new_unchecked(size: Coord2, mines: CellCount) -> Self {
        Self { size, mines }
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.size.0, self.size.1)
    }

    /// 8x8 board with 10 mines.
    pub const fn easy() -> Self {
        Self::new_unchecked((8, 8), 10)
    }

    /// 16x16 board with 40 mines.
    pub const fn normal() -> Self {
        Self::new_unchecked((16, 16), 40)
    }

    /// 24x24 board with 99 mines.
    pub const fn hard() -> Self {
        Self::new_unchecked((24, 24), 99)
    }
}
