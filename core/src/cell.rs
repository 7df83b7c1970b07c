use serde::{Deserialize, Serialize};

/// What a cell permanently holds: a mine, or the count of mines among its
/// up-to-8 neighbors. Fixed at grid creation.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellContent {
    Safe(u8),
    Mine,
}

impl CellContent {
    pub const fn is_mine(self) -> bool {
        matches!(self, Self::Mine)
    }
}

impl Default for CellContent {
    fn default() -> Self {
        Self::Safe(0)
    }
}

/// Whether the player can see the cell's content. The only attribute that
/// changes after creation.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Visibility {
    Hidden,
    Revealed,
}

impl Visibility {
    pub const fn is_revealed(self) -> bool {
        matches!(self, Self::Revealed)
    }
}

impl Default for Visibility {
    fn default() -> Self {
        Self::Hidden
    }
}

/// One board cell. A revealed mine is representable (the end-of-game display
/// state after a full reveal) but is never a disclosure target.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub content: CellContent,
    pub visibility: Visibility,
}

impl Cell {
    pub const fn hidden(content: CellContent) -> Self {
        Self {
            content,
            visibility: Visibility::Hidden,
        }
    }

    pub const fn is_revealed(self) -> bool {
        self.visibility.is_revealed()
    }
}
