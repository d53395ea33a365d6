use anyhow::{anyhow, Result};

use std::fmt;
use std::str::FromStr;

use crate::SIZE;

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Player {
    Cross,
    Nought,
}

impl Player {
    pub fn opponent(&self) -> Self {
        match self {
            Player::Cross => Player::Nought,
            Player::Nought => Player::Cross,
        }
    }
}

/// A square on the board, written as a column letter and a row digit: `b2`
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Move {
    column: usize,
    row: usize,
}

impl Move {
    pub fn new(column: usize, row: usize) -> Self {
        Self { column, row }
    }

    pub fn column(&self) -> usize {
        self.column
    }

    pub fn row(&self) -> usize {
        self.row
    }

    fn from_chars(column_char: char, row_char: char) -> Result<Self> {
        let column = match (column_char.to_ascii_lowercase() as usize).checked_sub('a' as usize) {
            Some(column) if column < SIZE => column,
            _ => {
                return Err(anyhow!(
                    "could not parse '{}{}' as a square",
                    column_char,
                    row_char
                ))
            }
        };
        match row_char.to_digit(10).map(|r| r as usize) {
            Some(row @ 1..=SIZE) => Ok(Self::new(column, row - 1)),
            _ => Err(anyhow!(
                "could not parse '{}{}' as a square",
                column_char,
                row_char
            )),
        }
    }
}

impl FromStr for Move {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let mut chars = s.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(column_char), Some(row_char), None) => Move::from_chars(column_char, row_char),
            _ => Err(anyhow!("could not parse '{}' as a square", s)),
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (b'a' + self.column as u8) as char, self.row + 1)
    }
}

#[derive(Copy, Clone)]
pub struct Board {
    // squares are stored row by row, top row first
    cells: [Option<Player>; SIZE * SIZE],
    to_move: Player,
    winner: Option<Player>,
    num_moves: usize,
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [None; SIZE * SIZE],
            to_move: Player::Cross,
            winner: None,
            num_moves: 0,
        }
    }

    /// Builds a board by replaying a string of squares, e.g. `"b2a1c3"`
    pub fn from_moves<S: AsRef<str>>(moves: S) -> Result<Self> {
        let mut board = Self::new();

        let mut chars = moves.as_ref().chars();
        while let Some(column_char) = chars.next() {
            match chars.next() {
                Some(row_char) => board.play_checked(Move::from_chars(column_char, row_char)?)?,
                None => return Err(anyhow!("could not parse '{}' as a square", column_char)),
            }
        }
        Ok(board)
    }

    pub fn play_checked(&mut self, square: Move) -> Result<()> {
        if square.column >= SIZE || square.row >= SIZE {
            return Err(anyhow!("Invalid move, square {} is off the board", square));
        }
        if self.has_ended() {
            return Err(anyhow!("Invalid move, the game is already over"));
        }
        if !self.is_empty(square) {
            return Err(anyhow!(
                "Invalid move, square {} is already occupied",
                square
            ));
        }
        self.play(square);
        Ok(())
    }

    // assumes the square is empty and the game is still running
    pub fn play(&mut self, square: Move) {
        self.cells[Self::index(square)] = Some(self.to_move);
        self.to_move = self.to_move.opponent();
        self.num_moves += 1;
        self.update_winner(square);
    }

    // only the lines through the played square can newly become winning
    fn update_winner(&mut self, square: Move) {
        let occupant = self.get(square);

        let column = (0..SIZE).all(|row| self.get(Move::new(square.column, row)) == occupant);
        let row = (0..SIZE).all(|column| self.get(Move::new(column, square.row)) == occupant);
        // squares off the diagonals can be skipped
        let diagonal = square.column == square.row
            && (0..SIZE).all(|i| self.get(Move::new(i, i)) == occupant);
        let anti_diagonal = square.column + square.row == SIZE - 1
            && (0..SIZE).all(|i| self.get(Move::new(SIZE - 1 - i, i)) == occupant);

        if column || row || diagonal || anti_diagonal {
            self.winner = occupant;
        }
    }

    pub fn get(&self, square: Move) -> Option<Player> {
        self.cells[Self::index(square)]
    }

    pub fn is_empty(&self, square: Move) -> bool {
        self.get(square).is_none()
    }

    pub fn has_ended(&self) -> bool {
        self.winner.is_some() || self.num_moves == SIZE * SIZE
    }

    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    pub fn num_moves(&self) -> usize {
        self.num_moves
    }

    pub fn to_move(&self) -> Player {
        self.to_move
    }

    fn index(square: Move) -> usize {
        square.row * SIZE + square.column
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
