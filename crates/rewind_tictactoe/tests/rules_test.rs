//! Rule checks over every reachable board.

use std::collections::HashSet;

use rewind_tictactoe::rules::{self, LINES};
use rewind_tictactoe::{Board, Cell, Player, Position};

/// Every board reachable by legal play from the empty board.
fn reachable_boards() -> Vec<Board> {
    let mut seen = HashSet::new();
    let mut stack = vec![(Board::new(), Player::X)];

    while let Some((board, to_move)) = stack.pop() {
        if !seen.insert(board) {
            continue;
        }
        if rules::winner(&board).is_some() {
            continue;
        }
        for pos in board.empty_positions() {
            stack.push((board.with_mark(pos, to_move), to_move.opponent()));
        }
    }

    seen.into_iter().collect()
}

#[test]
fn test_reachable_board_count() {
    assert_eq!(reachable_boards().len(), 5478);
}

#[test]
fn test_winning_line_only_on_uniform_triples() {
    for board in reachable_boards() {
        match rules::winning_line(&board) {
            Some(found) => {
                let cells = found.line.map(|pos| board.cell(pos));
                assert!(cells.iter().all(|&c| c == Cell::Occupied(found.player)));
            }
            None => {
                for line in LINES {
                    let [a, b, c] = line.map(|pos| board.cell(pos));
                    assert!(a == Cell::Empty || a != b || b != c, "missed {line:?}");
                }
            }
        }
    }
}

#[test]
fn test_draw_means_full_without_line() {
    for board in reachable_boards() {
        assert_eq!(
            rules::is_draw(&board),
            board.is_full() && rules::winning_line(&board).is_none()
        );
    }
}

#[test]
fn test_differing_cell_is_the_move() {
    let board = Board::new()
        .with_mark(Position::Center, Player::X)
        .with_mark(Position::TopLeft, Player::O);

    for pos in board.empty_positions() {
        let next = board.with_mark(pos, Player::X);
        assert_eq!(rules::first_differing_cell(&board, &next), Some(pos));
    }
}

#[test]
fn test_center_coordinate() {
    let center = Position::try_from(4).unwrap();
    assert_eq!(rules::format_coordinate(center), "(2, 2)");
    assert_eq!(center.coordinate().row, 2);
    assert_eq!(center.coordinate().col, 2);
}
