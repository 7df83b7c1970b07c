use alloc::collections::{BTreeSet, VecDeque};

use crate::*;

/// Outcome of a single disclosure request.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum DiscloseOutcome {
    /// Out of bounds or already revealed; the grid was left untouched.
    NoChange,
    /// A safe cell, and possibly its zero-count surroundings, became visible.
    Revealed,
    /// The cell holds a mine. It stays hidden; the caller decides how to
    /// show the end of the game.
    HitMine,
}

impl Grid {
    /// Reveals the cell at `coords`. A zero-count cell floods into its
    /// neighbors, chaining through every connected zero-count cell.
    pub fn disclose(&mut self, coords: Coord2) -> DiscloseOutcome {
        if !self.contains(coords) || self.is_revealed(coords) {
            return DiscloseOutcome::NoChange;
        }

        let count = match self.content_at(coords) {
            CellContent::Mine => return DiscloseOutcome::HitMine,
            CellContent::Safe(count) => count,
        };

        self.set_revealed(coords);
        log::debug!("disclosed cell at {:?}, mine count: {}", coords, count);

        if count == 0 {
            self.flood_reveal(coords);
        }

        DiscloseOutcome::Revealed
    }

    /// Work-list flood fill out of a zero-count cell. The visited set and
    /// the revealed check each stop revisits on their own; keeping both
    /// also keeps the work list short.
    fn flood_reveal(&mut self, start: Coord2) {
        let mut visited = BTreeSet::from([start]);
        let mut to_visit: VecDeque<_> = self
            .iter_neighbors(start)
            .filter(|&pos| !self.is_revealed(pos))
            .collect();
        log::trace!(
            "starting flood-fill from {:?}, initial neighbors: {:?}",
            start,
            to_visit
        );

        while let Some(visit_coords) = to_visit.pop_front() {
            if !visited.insert(visit_coords) {
                continue;
            }

            if self.is_revealed(visit_coords) {
                continue;
            }

            let visit_count = match self.content_at(visit_coords) {
                // neighbors of a zero-count cell are never mines
                CellContent::Mine => continue,
                CellContent::Safe(count) => count,
            };
            self.set_revealed(visit_coords);
            log::trace!(
                "flood revealed cell at {:?}, mine count: {}",
                visit_coords,
                visit_count
            );

            if visit_count == 0 {
                to_visit.extend(
                    self.iter_neighbors(visit_coords)
                        .filter(|&pos| !self.is_revealed(pos))
                        .filter(|pos| !visited.contains(pos)),
                );
            }
        }
    }

    /// Makes every cell visible, mines included. Run once when the game
    /// ends to show the final board.
    pub fn disclose_all(&mut self) {
        let (x_end, y_end) = self.size();
        for x in 0..x_end {
            for y in 0..y_end {
                self.set_revealed((x, y));
            }
        }
    }

    /// True while at least one safe cell is still hidden.
    pub fn has_hidden_safe_cell(&self) -> bool {
        self.revealed_safe_count() < self.safe_cell_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(size: Coord2, mines: &[Coord2]) -> Grid {
        Grid::with_mines(size, mines).unwrap()
    }

    #[test]
    fn disclosing_a_mine_reports_it_and_leaves_it_hidden() {
        let mut grid = grid((2, 2), &[(0, 0)]);

        assert_eq!(grid.disclose((0, 0)), DiscloseOutcome::HitMine);
        assert!(!grid.is_revealed((0, 0)));
        assert_eq!(grid.revealed_safe_count(), 0);

        grid.disclose_all();
        assert!(grid.is_revealed((0, 0)));
    }

    #[test]
    fn disclose_out_of_bounds_is_a_no_op() {
        let mut grid = grid((3, 3), &[(2, 2)]);

        assert_eq!(grid.disclose((3, 0)), DiscloseOutcome::NoChange);
        assert_eq!(grid.disclose((0, 7)), DiscloseOutcome::NoChange);
        assert_eq!(grid.revealed_safe_count(), 0);
    }

    #[test]
    fn second_disclosure_of_the_same_cell_changes_nothing() {
        let mut grid = grid((3, 3), &[(0, 0)]);

        assert_eq!(grid.disclose((2, 2)), DiscloseOutcome::Revealed);
        let snapshot = grid.clone();
        assert_eq!(grid.disclose((2, 2)), DiscloseOutcome::NoChange);
        assert_eq!(grid, snapshot);
    }

    #[test]
    fn numbered_cell_reveals_only_itself() {
        let mut grid = grid((3, 3), &[(0, 0)]);

        assert_eq!(grid.disclose((1, 1)), DiscloseOutcome::Revealed);
        assert!(grid.is_revealed((1, 1)));
        assert!(!grid.is_revealed((2, 2)));
        assert_eq!(grid.revealed_safe_count(), 1);
        assert!(grid.has_hidden_safe_cell());
    }

    #[test]
    fn zero_cell_floods_its_region_and_the_numbered_border() {
        let mut grid = grid((4, 4), &[(3, 3)]);

        assert_eq!(grid.disclose((0, 0)), DiscloseOutcome::Revealed);
        assert_eq!(grid.revealed_safe_count(), 15);
        assert!(!grid.is_revealed((3, 3)));
        assert!(!grid.has_hidden_safe_cell());
    }

    #[test]
    fn flood_does_not_cross_a_numbered_boundary() {
        // a mine column down the middle splits the board in two
        let mut grid = grid((5, 5), &[(2, 0), (2, 1), (2, 2), (2, 3), (2, 4)]);

        assert_eq!(grid.disclose((0, 0)), DiscloseOutcome::Revealed);
        for y in 0..5 {
            assert!(grid.is_revealed((0, y)));
            assert!(grid.is_revealed((1, y)));
            assert!(!grid.is_revealed((3, y)));
            assert!(!grid.is_revealed((4, y)));
        }
        assert!(grid.has_hidden_safe_cell());
    }

    #[test]
    fn revealing_the_last_safe_cell_ends_the_liveness_check() {
        let mut grid = grid((2, 1), &[(0, 0)]);

        assert!(grid.has_hidden_safe_cell());
        assert_eq!(grid.disclose((1, 0)), DiscloseOutcome::Revealed);
        assert!(!grid.has_hidden_safe_cell());
    }

    #[test]
    fn disclose_all_reveals_every_cell_and_stays_stable() {
        let mut grid = grid((3, 2), &[(1, 0)]);
        grid.disclose((0, 1));

        grid.disclose_all();
        assert_eq!(grid.revealed_safe_count(), grid.safe_cell_count());
        for x in 0..3 {
            for y in 0..2 {
                assert!(grid.is_revealed((x, y)));
            }
        }

        grid.disclose_all();
        assert_eq!(grid.revealed_safe_count(), grid.safe_cell_count());
    }
}
