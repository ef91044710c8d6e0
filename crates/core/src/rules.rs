//! Rules module - bracket detection and capture
//!
//! A placement at (x, y) captures along a direction when walking outward
//! crosses a contiguous run of one or more opponent stones and then lands on
//! one of the mover's own stones. Every direction is evaluated on its own;
//! a single placement can capture along several of them at once.

use arrayvec::ArrayVec;

use crate::board::Board;
use crate::types::{Player, BOARD_SIZE};

/// The eight compass directions as `(dx, dy)`, clockwise from north
pub const DIRECTIONS: [(i8, i8); 8] = [
    (0, -1),
    (1, -1),
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
];

/// Longest possible capture run in one direction (edge to edge minus both ends)
pub const MAX_RUN: usize = BOARD_SIZE as usize - 2;

/// Upper bound on stones flipped by one placement
///
/// Each of the four lines through a cell captures at most `MAX_RUN` stones,
/// since from an edge cell a single direction can flip `SIZE - 2`.
pub const MAX_FLIPS: usize = 4 * MAX_RUN;

/// Length of the opponent run bracketed from (x, y) in direction (dx, dy)
///
/// Returns `None` when the direction does not capture: no opponent stone
/// next to the origin, or the run ends at an empty cell or the board edge.
/// The origin cell itself is not inspected.
pub fn bracket_len(board: &Board, x: i8, y: i8, dx: i8, dy: i8, player: Player) -> Option<usize> {
    let opponent = player.opponent();
    let mut nx = x + dx;
    let mut ny = y + dy;
    let mut run = 0;

    while board.is_player_at(nx, ny, opponent) {
        run += 1;
        nx += dx;
        ny += dy;
    }

    if run > 0 && board.is_player_at(nx, ny, player) {
        Some(run)
    } else {
        None
    }
}

/// Check if `player` may place a stone at (x, y)
///
/// Occupied and off-board cells are never legal.
pub fn is_legal(board: &Board, x: i8, y: i8, player: Player) -> bool {
    board.is_empty_at(x, y)
        && DIRECTIONS
            .iter()
            .any(|&(dx, dy)| bracket_len(board, x, y, dx, dy, player).is_some())
}

/// Cells that would flip if `player` placed at (x, y)
///
/// Does not check that (x, y) is empty. The list is grouped by direction in
/// `DIRECTIONS` order, nearest cell first.
pub fn captures(board: &Board, x: i8, y: i8, player: Player) -> ArrayVec<(i8, i8), MAX_FLIPS> {
    let mut out = ArrayVec::new();
    for &(dx, dy) in DIRECTIONS.iter() {
        if let Some(run) = bracket_len(board, x, y, dx, dy, player) {
            for step in 1..=run as i8 {
                out.push((x + dx * step, y + dy * step));
            }
        }
    }
    out
}

/// Flip every run bracketed from (x, y) to `player`
///
/// Each direction is converted whole or not at all. Returns the number of
/// stones flipped.
pub fn apply_captures(board: &mut Board, x: i8, y: i8, player: Player) -> usize {
    let flips = captures(board, x, y, player);
    for &(fx, fy) in flips.iter() {
        board.set(fx, fy, Some(player));
    }
    flips.len()
}

/// Check if `player` has a legal placement anywhere
pub fn any_legal(board: &Board, player: Player) -> bool {
    let size = BOARD_SIZE as i8;
    (0..size).any(|y| (0..size).any(|x| is_legal(board, x, y, player)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(diagram: &str) -> Board {
        Board::from_ascii(diagram).unwrap()
    }

    #[test]
    fn opening_moves_for_black() {
        let b = Board::initial();
        let mut legal = Vec::new();
        for y in 0..8 {
            for x in 0..8 {
                if is_legal(&b, x, y, Player::Black) {
                    legal.push((x, y));
                }
            }
        }
        assert_eq!(legal, vec![(3, 2), (2, 3), (5, 4), (4, 5)]);
    }

    #[test]
    fn run_must_contain_an_opponent_stone() {
        let b = board(
            "BB......
             ........
             ........
             ........
             ........
             ........
             ........
             ........",
        );
        assert_eq!(bracket_len(&b, 2, 0, -1, 0, Player::Black), None);
        assert!(!is_legal(&b, 2, 0, Player::Black));
    }

    #[test]
    fn run_ending_at_edge_or_gap_does_not_capture() {
        let b = board(
            "WWW.....
             ........
             ..W.....
             ........
             ..B.....
             ........
             ........
             ........",
        );
        // West run hits the edge.
        assert_eq!(bracket_len(&b, 3, 0, -1, 0, Player::Black), None);
        // Gap between the run and the black stone.
        assert_eq!(bracket_len(&b, 2, 1, 0, 1, Player::Black), None);
    }

    #[test]
    fn captures_in_several_directions_at_once() {
        let b = board(
            "B.B.B...
             .WWW....
             BW.WB...
             .WWW....
             B.B.B...
             ........
             ........
             ........",
        );
        let flips = captures(&b, 2, 2, Player::Black);
        assert_eq!(flips.len(), 8);

        let mut after = b;
        after.set(2, 2, Some(Player::Black));
        assert_eq!(apply_captures(&mut after, 2, 2, Player::Black), 8);
        assert_eq!(after.score().white, 0);
    }

    #[test]
    fn long_run_is_flipped_whole() {
        let b = board(
            "BWWWWWW.
             ........
             ........
             ........
             ........
             ........
             ........
             ........",
        );
        assert_eq!(bracket_len(&b, 7, 0, -1, 0, Player::Black), Some(MAX_RUN));
        assert_eq!(
            captures(&b, 7, 0, Player::Black).as_slice(),
            &[(6, 0), (5, 0), (4, 0), (3, 0), (2, 0), (1, 0)]
        );
    }

    #[test]
    fn corner_captures_full_runs_in_three_directions() {
        let b = board(
            ".WWWWWWB
             WW......
             W.W.....
             W..W....
             W...W...
             W....W..
             W.....W.
             B......B",
        );
        let flips = captures(&b, 0, 0, Player::Black);
        assert_eq!(flips.len(), 3 * MAX_RUN);
        assert!(flips.len() <= MAX_FLIPS);

        let mut after = b;
        assert_eq!(apply_captures(&mut after, 0, 0, Player::Black), 3 * MAX_RUN);
        let score = after.score();
        assert_eq!((score.black, score.white), (21, 0));
    }

    #[test]
    fn off_board_is_never_legal() {
        let b = Board::initial();
        assert!(!is_legal(&b, -1, 3, Player::Black));
        assert!(!is_legal(&b, 8, 3, Player::White));
    }

    #[test]
    fn any_legal_on_initial_board() {
        let b = Board::initial();
        assert!(any_legal(&b, Player::Black));
        assert!(any_legal(&b, Player::White));
        assert!(!any_legal(&Board::new(), Player::Black));
    }
}
