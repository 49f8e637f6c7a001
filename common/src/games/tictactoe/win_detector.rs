use super::board::{CELL_COUNT, COLUMNS, ROWS, WINNING_LENGTH};
use super::types::{Mark, Piece};

// The probes below walk flat indices. A rightward run starting in a column
// that leaves room for WINNING_LENGTH cells never wraps into the next row
// only because WINNING_LENGTH == COLUMNS; other geometries need the bounds
// re-derived.
const _: () = assert!(WINNING_LENGTH == COLUMNS && WINNING_LENGTH == ROWS);

/// Scans every occupied cell for a run of `WINNING_LENGTH` identical marks
/// going right, down, down-right or down-left. Returns the first winner
/// found in row-major order.
pub fn check_win(cells: &[Mark; CELL_COUNT]) -> Option<Piece> {
    for position in 0..CELL_COUNT {
        let Some(piece) = cells[position].piece() else {
            continue;
        };

        let row = position / COLUMNS;
        let col = position % COLUMNS;

        if check_horizontal(cells, row, col, piece)
            || check_vertical(cells, row, col, piece)
            || check_diagonal_down_right(cells, row, col, piece)
            || check_diagonal_down_left(cells, row, col, piece)
        {
            return Some(piece);
        }
    }

    None
}

fn holds(cells: &[Mark; CELL_COUNT], row: usize, col: usize, piece: Piece) -> bool {
    cells[row * COLUMNS + col] == Mark::from(piece)
}

fn check_horizontal(cells: &[Mark; CELL_COUNT], row: usize, col: usize, piece: Piece) -> bool {
    if col + WINNING_LENGTH > COLUMNS {
        return false;
    }

    (0..WINNING_LENGTH).all(|i| holds(cells, row, col + i, piece))
}

fn check_vertical(cells: &[Mark; CELL_COUNT], row: usize, col: usize, piece: Piece) -> bool {
    if row + WINNING_LENGTH > ROWS {
        return false;
    }

    (0..WINNING_LENGTH).all(|i| holds(cells, row + i, col, piece))
}

fn check_diagonal_down_right(cells: &[Mark; CELL_COUNT], row: usize, col: usize, piece: Piece) -> bool {
    if col + WINNING_LENGTH > COLUMNS || row + WINNING_LENGTH > ROWS {
        return false;
    }

    (0..WINNING_LENGTH).all(|i| holds(cells, row + i, col + i, piece))
}

fn check_diagonal_down_left(cells: &[Mark; CELL_COUNT], row: usize, col: usize, piece: Piece) -> bool {
    if col + 1 < WINNING_LENGTH || row + WINNING_LENGTH > ROWS {
        return false;
    }

    (0..WINNING_LENGTH).all(|i| holds(cells, row + i, col - i, piece))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells(layout: &str) -> [Mark; CELL_COUNT] {
        let mut cells = [Mark::Empty; CELL_COUNT];
        for (i, c) in layout.chars().enumerate() {
            cells[i] = Mark::from_char(c).unwrap();
        }
        cells
    }

    #[test]
    fn test_every_line_is_detected() {
        let lines = [
            "XXX......",
            "...XXX...",
            "......XXX",
            "X..X..X..",
            ".X..X..X.",
            "..X..X..X",
            "X...X...X",
            "..X.X.X..",
        ];
        for layout in lines {
            assert_eq!(check_win(&cells(layout)), Some(Piece::X), "{layout}");
        }
    }

    #[test]
    fn test_runs_do_not_wrap_across_rows() {
        // 1,2,3 are consecutive flat indices but span two rows.
        assert_eq!(check_win(&cells(".XXX....O")), None);
        // 2,4,6 only counts as the anti-diagonal, 3,5,7 is not a line.
        assert_eq!(check_win(&cells("...O.O.O.")), None);
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        assert_eq!(check_win(&cells("XXO......")), None);
        assert_eq!(check_win(&cells("O...O...O")), Some(Piece::O));
    }
}
