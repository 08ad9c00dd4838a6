use anyhow::{anyhow, Result};

use std::fmt;

use crate::{CONNECT, HEIGHT, WIDTH};

/// The contents of a single tile
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Cell {
    Empty,
    PlayerOne,
    PlayerTwo,
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    fn symbol(&self) -> char {
        match self {
            Cell::Empty => ' ',
            Cell::PlayerOne => 'X',
            Cell::PlayerTwo => 'O',
        }
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Player {
    One,
    Two,
}

impl Player {
    pub fn cell(&self) -> Cell {
        match self {
            Player::One => Cell::PlayerOne,
            Player::Two => Cell::PlayerTwo,
        }
    }

    pub fn opponent(&self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::One => write!(f, "Player 1"),
            Player::Two => write!(f, "Player 2"),
        }
    }
}

// (row step, column step) of each line orientation: horizontal, vertical, and both diagonals
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (-1, 1)];

/// A Connect 4 grid
///
/// Row 0 is the bottom of the board. Tiles only ever enter a column at its
/// lowest empty row, so every column is filled contiguously from the bottom.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Board {
    cells: [Cell; WIDTH * HEIGHT], // cells are stored left-to-right, bottom-to-top
    heights: [usize; WIDTH],
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; WIDTH * HEIGHT],
            heights: [0; WIDTH],
        }
    }

    /// Builds a position from a string of one-indexed columns, players alternating from `Player::One`
    pub fn from_moves<S: AsRef<str>>(moves: S) -> Result<Self> {
        let mut board = Self::new();
        let mut player = Player::One;

        for column_char in moves.as_ref().chars() {
            match column_char.to_digit(10).map(|c| c as usize) {
                Some(column @ 1..=WIDTH) => {
                    if board.drop_piece(column - 1, player).is_none() {
                        return Err(anyhow!("Invalid move, column {} full", column));
                    }
                    player = player.opponent();
                }
                _ => return Err(anyhow!("could not parse '{}' as a valid move", column_char)),
            }
        }
        Ok(board)
    }

    /// Builds a position from a picture of the board, top row first
    ///
    /// `.` is an empty tile, `X` belongs to `Player::One` and `O` to `Player::Two`.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self> {
        if rows.len() != HEIGHT {
            return Err(anyhow!("expected {} rows, found {}", HEIGHT, rows.len()));
        }
        let mut board = Self::new();

        for (i, line) in rows.iter().enumerate() {
            let row = HEIGHT - 1 - i;
            let line = line.as_ref();
            if line.chars().count() != WIDTH {
                return Err(anyhow!("row '{}' is not {} tiles wide", line, WIDTH));
            }
            for (column, symbol) in line.chars().enumerate() {
                board.cells[column + WIDTH * row] = match symbol {
                    '.' => Cell::Empty,
                    'X' | 'x' => Cell::PlayerOne,
                    'O' | 'o' => Cell::PlayerTwo,
                    _ => return Err(anyhow!("could not parse '{}' as a tile", symbol)),
                };
            }
        }

        for column in 0..WIDTH {
            let height = (0..HEIGHT)
                .take_while(|&row| !board.get(row, column).is_empty())
                .count();
            if (height..HEIGHT).any(|row| !board.get(row, column).is_empty()) {
                return Err(anyhow!("column {} has a floating tile", column + 1));
            }
            board.heights[column] = height;
        }
        Ok(board)
    }

    pub fn get(&self, row: usize, column: usize) -> Cell {
        self.cells[column + WIDTH * row]
    }

    /// The number of tiles in a column
    pub fn height(&self, column: usize) -> usize {
        self.heights[column]
    }

    pub fn num_pieces(&self) -> usize {
        self.heights.iter().sum()
    }

    pub fn playable(&self, column: usize) -> bool {
        column < WIDTH && self.get(HEIGHT - 1, column).is_empty()
    }

    /// Columns that can still take a tile, in ascending order
    pub fn valid_columns(&self) -> Vec<usize> {
        (0..WIDTH).filter(|&column| self.playable(column)).collect()
    }

    /// Drops a tile for `player` into the lowest empty row of `column`
    ///
    /// Returns the row the tile landed in, or `None` if the column is out of
    /// range or full, in which case the board is unchanged.
    pub fn drop_piece(&mut self, column: usize, player: Player) -> Option<usize> {
        if !self.playable(column) {
            return None;
        }
        let row = self.heights[column];
        self.cells[column + WIDTH * row] = player.cell();
        self.heights[column] += 1;
        Some(row)
    }

    pub fn is_full(&self) -> bool {
        (0..WIDTH).all(|column| !self.playable(column))
    }

    pub fn has_four_in_a_row(&self, player: Player) -> bool {
        let cell = player.cell();
        self.windows()
            .any(|window| window.iter().all(|&tile| tile == cell))
    }

    /// Every run of `CONNECT` tiles in a row, column or diagonal
    pub fn windows(&self) -> impl Iterator<Item = [Cell; CONNECT]> + '_ {
        DIRECTIONS.iter().flat_map(move |&(d_row, d_column)| {
            (0..HEIGHT).flat_map(move |row| {
                (0..WIDTH).filter_map(move |column| self.window(row, column, d_row, d_column))
            })
        })
    }

    fn window(
        &self,
        row: usize,
        column: usize,
        d_row: isize,
        d_column: isize,
    ) -> Option<[Cell; CONNECT]> {
        let reach = CONNECT as isize - 1;
        let end_row = row as isize + d_row * reach;
        let end_column = column as isize + d_column * reach;
        if end_row < 0 || end_row >= HEIGHT as isize || end_column >= WIDTH as isize {
            return None;
        }

        let mut window = [Cell::Empty; CONNECT];
        for (i, tile) in window.iter_mut().enumerate() {
            let y = row as isize + d_row * i as isize;
            let x = column as isize + d_column * i as isize;
            *tile = self.get(y as usize, x as usize);
        }
        Some(window)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..HEIGHT).rev() {
            write!(f, "|")?;
            for column in 0..WIDTH {
                write!(f, "{}|", self.get(row, column).symbol())?;
            }
            writeln!(f)?;
        }
        writeln!(f, "+{}+", "-".repeat(WIDTH * 2 - 1))?;
        let legend: Vec<String> = (0..WIDTH).map(|column| column.to_string()).collect();
        writeln!(f, " {}", legend.join(" "))
    }
}
