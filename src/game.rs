use anyhow::{anyhow, Result};
use tracing::info;

use crate::{board::*, search::Engine, WIDTH};

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum GameState {
    Playing,
    PlayerOneWin,
    PlayerTwoWin,
    Draw,
}

impl GameState {
    pub fn is_over(&self) -> bool {
        !matches!(self, GameState::Playing)
    }

    pub fn win_for(player: Player) -> Self {
        match player {
            Player::One => GameState::PlayerOneWin,
            Player::Two => GameState::PlayerTwoWin,
        }
    }
}

/// The authoritative record of a game in progress
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    to_move: Player,
    /// one-indexed columns played so far
    pub moves: String,
    pub state: GameState,
}

impl Game {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            to_move: Player::One,
            moves: String::new(),
            state: GameState::Playing,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn to_move(&self) -> Player {
        self.to_move
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn play_checked(&mut self, column_one_indexed: usize) -> Result<GameState> {
        if self.state.is_over() {
            return Err(anyhow!("Invalid move, the game is over"));
        }
        if column_one_indexed < 1 || column_one_indexed > WIDTH {
            return Err(anyhow!(
                "Invalid move, column {} out of range. Columns must be between 1 and {}",
                column_one_indexed,
                WIDTH
            ));
        }
        let column = column_one_indexed - 1;
        if self.board.drop_piece(column, self.to_move).is_none() {
            return Err(anyhow!("Invalid move, column {} full", column_one_indexed));
        }
        self.moves.push_str(&column_one_indexed.to_string());

        self.state = if self.board.has_four_in_a_row(self.to_move) {
            GameState::win_for(self.to_move)
        } else if self.board.is_full() {
            GameState::Draw
        } else {
            GameState::Playing
        };
        if self.state.is_over() {
            info!(state = ?self.state, moves = %self.moves, "game finished");
        } else {
            self.to_move = self.to_move.opponent();
        }

        Ok(self.state)
    }

    /// Lets `engine` choose a column for the side to move and plays it
    ///
    /// Returns the zero-indexed column played
    pub fn computer_move(&mut self, engine: &mut Engine) -> Result<usize> {
        if engine.computer() != self.to_move {
            return Err(anyhow!("it is not {}'s turn", engine.computer()));
        }
        let column = engine
            .best_move(&self.board)
            .ok_or_else(|| anyhow!("no legal moves remain"))?;
        self.play_checked(column + 1)?;
        Ok(column)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
