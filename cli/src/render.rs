use std::collections::BTreeSet;

use sapador_core::{CellContent, Coord2, Grid, GridConfig};

/// Renders the board as text: a column-letter header, 1-based row labels,
/// then one glyph per cell. Boards ten or more rows tall get a wider label
/// column so the letters stay aligned.
pub(crate) fn render_board(
    config: GridConfig,
    grid: Option<&Grid>,
    flags: &BTreeSet<Coord2>,
) -> String {
    let (width, height) = config.size;
    let label_width = if height >= 10 { 2 } else { 1 };

    let mut header = " ".repeat(label_width + 1);
    for x in 0..width {
        if x > 0 {
            header.push(' ');
        }
        header.push((b'A' + x) as char);
    }

    let mut lines = vec![header];
    for y in 0..height {
        let mut line = format!("{:>width$}", y + 1, width = label_width);
        for x in 0..width {
            line.push(' ');
            line.push(cell_glyph((x, y), grid, flags));
        }
        lines.push(line);
    }

    lines.join("\n")
}

/// A revealed cell shows its content; a hidden cell shows its flag state.
fn cell_glyph(coords: Coord2, grid: Option<&Grid>, flags: &BTreeSet<Coord2>) -> char {
    let hidden_glyph = if flags.contains(&coords) { 'F' } else { '?' };

    match grid {
        None => hidden_glyph,
        Some(grid) if !grid.is_revealed(coords) => hidden_glyph,
        Some(grid) => match grid.content_at(coords) {
            CellContent::Mine => 'X',
            CellContent::Safe(0) => ' ',
            CellContent::Safe(count) => (b'0' + count) as char,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_flags() -> BTreeSet<Coord2> {
        BTreeSet::new()
    }

    #[test]
    fn board_without_a_grid_renders_all_hidden() {
        let config = GridConfig::new_unchecked((4, 4), 2);
        let text = render_board(config, None, &no_flags());

        assert_eq!(
            text,
            "  A B C D\n\
             1 ? ? ? ?\n\
             2 ? ? ? ?\n\
             3 ? ? ? ?\n\
             4 ? ? ? ?"
        );
    }

    #[test]
    fn tall_boards_widen_the_row_labels() {
        let config = GridConfig::new_unchecked((4, 10), 2);
        let text = render_board(config, None, &no_flags());
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "   A B C D");
        assert_eq!(lines[1], " 1 ? ? ? ?");
        assert_eq!(lines[10], "10 ? ? ? ?");
    }

    #[test]
    fn revealed_cells_show_counts_blanks_and_mines() {
        let config = GridConfig::new_unchecked((3, 1), 1);
        let mut grid = Grid::with_mines((3, 1), &[(2, 0)]).unwrap();
        grid.disclose_all();

        let text = render_board(config, Some(&grid), &no_flags());
        assert_eq!(text, "  A B C\n1   1 X");
    }

    #[test]
    fn flags_show_on_hidden_cells_only() {
        let config = GridConfig::new_unchecked((4, 4), 2);
        let mut grid = Grid::with_mines((4, 4), &[(1, 1), (3, 3)]).unwrap();
        grid.disclose((0, 0));

        let flags = BTreeSet::from([(0, 0), (3, 0)]);
        let text = render_board(config, Some(&grid), &flags);
        assert_eq!(
            text,
            "  A B C D\n\
             1 1 ? ? F\n\
             2 ? ? ? ?\n\
             3 ? ? ? ?\n\
             4 ? ? ? ?"
        );
    }
}
