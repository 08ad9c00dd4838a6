//! An agent to pick the computer's move in Connect 4

use tracing::debug;

use crate::{board::*, evaluation::*};

/// The number of plies searched unless configured otherwise
pub const DEFAULT_DEPTH: usize = 4;

/// A fixed-depth minimax agent with alpha-beta pruning
///
/// # Notes
/// The computer is always the maximising side. Positions are scored from its
/// point of view: a win for it is [`WIN_SCORE`], a win for its opponent is
/// `-WIN_SCORE`, a full board is 0 and anything at the depth limit is scored
/// by [`evaluate`].
///
/// Columns are always explored left to right and only a strictly better score
/// replaces the current best, so the leftmost of equally scored columns is chosen.
#[derive(Clone, Debug)]
pub struct Engine {
    computer: Player,
    depth: usize,

    /// The number of nodes searched by this `Engine` so far (for diagnostics only)
    pub node_count: usize,
}

impl Engine {
    /// Creates a new `Engine` playing as `Player::Two` with the default depth
    pub fn new() -> Self {
        Self {
            computer: Player::Two,
            depth: DEFAULT_DEPTH,
            node_count: 0,
        }
    }

    /// Sets the number of plies to search
    pub fn with_depth(mut self, depth: usize) -> Self {
        self.depth = depth;
        self
    }

    /// Sets the side the engine plays for
    pub fn with_computer(mut self, computer: Player) -> Self {
        self.computer = computer;
        self
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn computer(&self) -> Player {
        self.computer
    }

    /// Returns the column the computer should play, or `None` if the board is full
    pub fn best_move(&mut self, board: &Board) -> Option<usize> {
        self.search(board).1
    }

    /// Searches `board` to the configured depth
    ///
    /// Returns the score of the position and the chosen column
    pub fn search(&mut self, board: &Board) -> (i32, Option<usize>) {
        let start = self.node_count;
        let result = self.minimax(*board, self.depth, i32::MIN, i32::MAX, true);
        debug!(
            depth = self.depth,
            score = result.0,
            column = ?result.1,
            nodes = self.node_count - start,
            "search finished"
        );
        result
    }

    /// Performs game tree search
    ///
    /// `board` is this node's own copy; children are searched on copies of it.
    fn minimax(
        &mut self,
        board: Board,
        depth: usize,
        mut alpha: i32,
        mut beta: i32,
        maximising: bool,
    ) -> (i32, Option<usize>) {
        self.node_count += 1;

        if board.has_four_in_a_row(self.computer) {
            return (WIN_SCORE, None);
        }
        if board.has_four_in_a_row(self.computer.opponent()) {
            return (-WIN_SCORE, None);
        }
        let columns = board.valid_columns();
        if columns.is_empty() {
            return (0, None);
        }
        if depth == 0 {
            return (evaluate(&board, self.computer), None);
        }

        let player = if maximising {
            self.computer
        } else {
            self.computer.opponent()
        };

        let mut best_column = columns[0];
        let mut best_score = if maximising { i32::MIN } else { i32::MAX };
        for column in columns {
            let mut next = board;
            next.drop_piece(column, player);

            let (score, _) = self.minimax(next, depth - 1, alpha, beta, !maximising);
            if maximising {
                if score > best_score {
                    best_score = score;
                    best_column = column;
                }
                alpha = alpha.max(best_score);
            } else {
                if score < best_score {
                    best_score = score;
                    best_column = column;
                }
                beta = beta.min(best_score);
            }
            // the other side will never let play reach this branch
            if alpha >= beta {
                break;
            }
        }

        (best_score, Some(best_column))
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}
