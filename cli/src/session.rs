use std::collections::BTreeSet;

use rand::SeedableRng;
use rand::rngs::SmallRng;
use sapador_core::{Coord2, DiscloseOutcome, Grid, GridConfig, generate};

/// What a reveal request did to the session.
#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) enum RevealOutcome {
    /// Out of bounds or already visible; nothing changed.
    Rejected,
    /// A safe cell was revealed and hidden safe cells remain.
    Continued,
    /// The last hidden safe cell was revealed; the whole board is shown.
    Won,
    /// A mine was revealed; the whole board is shown.
    Lost,
}

/// One game from start to win, loss, or abandonment. The grid is created
/// lazily on the first reveal, so that cell and its neighbors are mine-free.
/// Flags are display-side bookkeeping and never affect disclosure.
#[derive(Clone, Debug)]
pub(crate) struct Session {
    config: GridConfig,
    seed: u64,
    grid: Option<Grid>,
    flags: BTreeSet<Coord2>,
}

impl Session {
    pub(crate) fn new(config: GridConfig, seed: u64) -> Self {
        Self {
            config,
            seed,
            grid: None,
            flags: BTreeSet::new(),
        }
    }

    pub(crate) fn config(&self) -> GridConfig {
        self.config
    }

    pub(crate) fn grid(&self) -> Option<&Grid> {
        self.grid.as_ref()
    }

    pub(crate) fn flags(&self) -> &BTreeSet<Coord2> {
        &self.flags
    }

    pub(crate) fn contains(&self, coords: Coord2) -> bool {
        coords.0 < self.config.size.0 && coords.1 < self.config.size.1
    }

    /// Reveals a cell, creating the grid on the first in-bounds request.
    /// A winning or losing reveal also discloses the whole board, so the
    /// final state is ready for display.
    pub(crate) fn reveal(&mut self, coords: Coord2) -> RevealOutcome {
        if !self.contains(coords) {
            return RevealOutcome::Rejected;
        }

        if self.grid.is_none() {
            let mut rng = SmallRng::seed_from_u64(self.seed);
            match generate(self.config, Some(coords), &mut rng) {
                Ok(grid) => self.grid = Some(grid),
                Err(err) => {
                    log::warn!("could not generate the grid: {err}");
                    return RevealOutcome::Rejected;
                }
            }
        }
        let Some(grid) = self.grid.as_mut() else {
            return RevealOutcome::Rejected;
        };

        match grid.disclose(coords) {
            DiscloseOutcome::NoChange => RevealOutcome::Rejected,
            DiscloseOutcome::HitMine => {
                grid.disclose_all();
                RevealOutcome::Lost
            }
            DiscloseOutcome::Revealed if grid.has_hidden_safe_cell() => RevealOutcome::Continued,
            DiscloseOutcome::Revealed => {
                grid.disclose_all();
                RevealOutcome::Won
            }
        }
    }

    /// Toggles a flag. Rejected out of bounds or on a revealed cell; before
    /// the grid exists every cell counts as hidden.
    pub(crate) fn toggle_flag(&mut self, coords: Coord2) -> bool {
        if !self.contains(coords) {
            return false;
        }
        if self
            .grid
            .as_ref()
            .is_some_and(|grid| grid.is_revealed(coords))
        {
            return false;
        }

        if !self.flags.remove(&coords) {
            self.flags.insert(coords);
        }
        true
    }

    /// Abandons the game: the whole board is shown when it exists, with no
    /// win or loss verdict.
    pub(crate) fn finish(&mut self) {
        if let Some(grid) = self.grid.as_mut() {
            grid.disclose_all();
        }
    }
}
