use thiserror::Error;

use crate::types::CellCount;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Cannot place {requested} mines, only {placeable} cells are available")]
    InsufficientSpace {
        placeable: CellCount,
        requested: CellCount,
    },
}

pub type Result<T> = core::result::Result<T, GameError>;
