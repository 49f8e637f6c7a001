use std::io::{self, BufRead, Write};

use common::games::tictactoe::{Board, CELL_COUNT, COLUMNS, Piece};

/// Line-oriented terminal access. Generic over the streams so the prompts
/// can be driven from byte buffers in tests.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    #[cfg(test)]
    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    /// `Ok(None)` on end of input.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Repeats the question until the answer starts with `y` or `n`.
    pub fn confirm(&mut self, message: &str) -> io::Result<Option<bool>> {
        loop {
            write!(self.output, "{}", message)?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            match line.chars().next() {
                Some('y') | Some('Y') => return Ok(Some(true)),
                Some('n') | Some('N') => return Ok(Some(false)),
                _ => {}
            }
        }
    }

    /// Reads lines until one names a free cell on `board`.
    pub fn read_position(&mut self, board: &Board) -> io::Result<Option<usize>> {
        loop {
            write!(self.output, "\nYour position? (0-{}):", CELL_COUNT - 1)?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            if let Some(position) = parse_position(&line, board) {
                return Ok(Some(position));
            }
            writeln!(self.output, "Please input a valid number (0-{})", CELL_COUNT - 1)?;
        }
    }

    pub fn print_board(&mut self, board: &Board, human_piece: Option<Piece>) -> io::Result<()> {
        writeln!(self.output)?;
        if let Some(piece) = human_piece {
            writeln!(self.output, "You: {}\n", piece)?;
        }
        write!(self.output, "{}", board)?;
        self.output.flush()
    }

    pub fn print_index_guide(&mut self) -> io::Result<()> {
        writeln!(self.output, "\nPlease input the following index number")?;
        for row in (0..CELL_COUNT).collect::<Vec<_>>().chunks(COLUMNS) {
            let line: Vec<String> = row.iter().map(usize::to_string).collect();
            writeln!(self.output, "{}", line.join(" "))?;
        }
        Ok(())
    }

    pub fn say(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.output, "{}", message)
    }
}

/// A single digit naming an empty cell.
pub fn parse_position(line: &str, board: &Board) -> Option<usize> {
    let mut chars = line.trim().chars();
    let digit = chars.next()?.to_digit(10)? as usize;
    if chars.next().is_some() || !board.is_legal_move(digit) {
        return None;
    }
    Some(digit)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn console(input: &str) -> Console<&[u8], Vec<u8>> {
        Console::new(input.as_bytes(), Vec::new())
    }

    #[test]
    fn test_parse_position_accepts_single_free_digit() {
        let board: Board = "X../.../...".parse().unwrap();
        assert_eq!(parse_position("4", &board), Some(4));
        assert_eq!(parse_position(" 8 ", &board), Some(8));
        assert_eq!(parse_position("0", &board), None);
        assert_eq!(parse_position("9", &board), None);
        assert_eq!(parse_position("12", &board), None);
        assert_eq!(parse_position("a", &board), None);
        assert_eq!(parse_position("", &board), None);
    }

    #[test]
    fn test_read_position_reprompts_until_valid() {
        let board: Board = "X../.../...".parse().unwrap();
        let mut console = console("0\nfoo\n5\n");

        assert_eq!(console.read_position(&board).unwrap(), Some(5));
        let printed = String::from_utf8(console.output().clone()).unwrap();
        assert_eq!(printed.matches("Please input a valid number (0-8)").count(), 2);
    }

    #[test]
    fn test_read_position_end_of_input() {
        let mut console = console("");
        assert_eq!(console.read_position(&Board::new()).unwrap(), None);
    }

    #[test]
    fn test_confirm_waits_for_y_or_n() {
        let mut patient = console("maybe\nyes\n");
        assert_eq!(patient.confirm("Are you first? (y/n):").unwrap(), Some(true));

        let mut declining = console("N\n");
        assert_eq!(declining.confirm("?").unwrap(), Some(false));
    }

    #[test]
    fn test_index_guide_lists_rows() {
        let mut console = console("");
        console.print_index_guide().unwrap();
        let printed = String::from_utf8(console.output().clone()).unwrap();
        assert!(printed.contains("0 1 2\n3 4 5\n6 7 8\n"));
    }
}
