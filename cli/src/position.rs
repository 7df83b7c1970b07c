use sapador_core::{Coord, Coord2};

/// Parses a 0-based board position out of one or two lowercased tokens: a
/// column letter `a..=z` and a 1-based row number, in either order, with or
/// without a separating space.
pub(crate) fn parse_position(tokens: &[&str]) -> Option<Coord2> {
    let joined = match tokens {
        [single] => (*single).to_owned(),
        [first, second] => format!("{first}{second}"),
        _ => return None,
    };

    let (column_char, row_digits) = if let Some(rest) = joined.strip_prefix(is_column_letter) {
        (joined.chars().next()?, rest)
    } else if let Some(rest) = joined.strip_suffix(is_column_letter) {
        (joined.chars().next_back()?, rest)
    } else {
        return None;
    };

    // rows are 1-based on screen
    let row = row_digits.parse::<u16>().ok()?;
    let row: Coord = row.checked_sub(1)?.try_into().ok()?;
    let column = column_char as u8 - b'a';

    Some((column, row))
}

fn is_column_letter(c: char) -> bool {
    c.is_ascii_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_all_four_documented_layouts() {
        assert_eq!(parse_position(&["b3"]), Some((1, 2)));
        assert_eq!(parse_position(&["3b"]), Some((1, 2)));
        assert_eq!(parse_position(&["b", "3"]), Some((1, 2)));
        assert_eq!(parse_position(&["3", "b"]), Some((1, 2)));
    }

    #[test]
    fn parses_multi_digit_rows() {
        assert_eq!(parse_position(&["z26"]), Some((25, 25)));
        assert_eq!(parse_position(&["10a"]), Some((0, 9)));
        assert_eq!(parse_position(&["a", "10"]), Some((0, 9)));
    }

    #[test]
    fn rejects_malformed_input() {
        assert_eq!(parse_position(&[]), None);
        assert_eq!(parse_position(&["b", "3", "c"]), None);
        assert_eq!(parse_position(&["33"]), None);
        assert_eq!(parse_position(&["bb"]), None);
        assert_eq!(parse_position(&["b"]), None);
        assert_eq!(parse_position(&["3"]), None);
    }

    #[test]
    fn rejects_rows_outside_the_coordinate_range() {
        assert_eq!(parse_position(&["b0"]), None);
        assert_eq!(parse_position(&["b999"]), None);
        assert_eq!(parse_position(&["b256"]), Some((1, 255)));
    }
}
