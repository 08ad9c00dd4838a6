//! Static scoring of positions at the search frontier

use crate::{board::*, CONNECT, HEIGHT, WIDTH};

/// The score of a position that is already won
pub const WIN_SCORE: i32 = 1_000_000;

/// Bonus for each tile in the middle column
pub const CENTER_WEIGHT: i32 = 3;

/// The middle column of the board
pub const CENTER_COLUMN: usize = WIDTH / 2;

/// Scores a single window from `player`'s point of view
///
/// Only windows the opponent has not entered are worth anything.
pub fn score_window(window: &[Cell; CONNECT], player: Player) -> i32 {
    let own = window.iter().filter(|&&tile| tile == player.cell()).count();
    let opponent = window
        .iter()
        .filter(|&&tile| tile == player.opponent().cell())
        .count();

    if opponent != 0 {
        return 0;
    }
    match own {
        4 => 100,
        3 => 5,
        2 => 2,
        1 => 1,
        _ => 0,
    }
}

/// Scores a position from `player`'s point of view
///
/// A completed four for either side dominates everything else. Otherwise the
/// score is the center column bonus plus the sum of [`score_window`] over
/// every window on the board.
pub fn evaluate(board: &Board, player: Player) -> i32 {
    if board.has_four_in_a_row(player) {
        return WIN_SCORE;
    }
    if board.has_four_in_a_row(player.opponent()) {
        return -WIN_SCORE;
    }

    let center: i32 = (0..HEIGHT)
        .map(|row| match board.get(row, CENTER_COLUMN) {
            tile if tile == player.cell() => CENTER_WEIGHT,
            Cell::Empty => 0,
            _ => -CENTER_WEIGHT,
        })
        .sum();

    let windows: i32 = board
        .windows()
        .map(|window| score_window(&window, player))
        .sum();

    center + windows
}
