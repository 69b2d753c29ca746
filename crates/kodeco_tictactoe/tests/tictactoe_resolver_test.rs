//! Tests for the computer's move selection.

use kodeco_tictactoe::{
    Board, GameOutcome, GameRng, Player, Position, Tier, apply_human_move, decide,
    deterministic_move, evaluate, new_game, reset_game, select_computer_move,
};

fn board_from(layout: &str) -> Board {
    let mut board = Board::new();
    for (pos, c) in Position::ALL.into_iter().zip(layout.chars()) {
        match c {
            'X' => {
                board.place(Player::Human, pos).unwrap();
            }
            'O' => {
                board.place(Player::Computer, pos).unwrap();
            }
            _ => {}
        }
    }
    board
}

#[test]
fn test_empty_board_takes_center() {
    let mut rng = GameRng::new(0);
    let pos = select_computer_move(&new_game(), &mut rng).unwrap();
    assert_eq!(pos, Position::Center);
    assert_eq!((pos.row(), pos.column()), (1, 1));
}

#[test]
fn test_win_takes_priority_over_block() {
    // Human threatens the top row, computer can finish the middle row.
    let board = board_from("XX.OO...X");
    let decision = deterministic_move(&board).unwrap();
    assert_eq!(decision.tier, Tier::Win);
    assert_eq!(decision.position, Position::MiddleRight);
}

#[test]
fn test_blocks_human_line() {
    let board = board_from("X..XO....");
    let decision = deterministic_move(&board).unwrap();
    assert_eq!(decision.tier, Tier::Block);
    assert_eq!(decision.position, Position::BottomLeft);
}

#[test]
fn test_corner_tie_break_order() {
    let decision = deterministic_move(&board_from("....X....")).unwrap();
    assert_eq!(decision.tier, Tier::Corner);
    assert_eq!(decision.position, Position::TopLeft);

    let decision = deterministic_move(&board_from("X...O....")).unwrap();
    assert_eq!(decision.tier, Tier::Corner);
    assert_eq!(decision.position, Position::TopRight);
}

#[test]
fn test_random_tier_returns_unoccupied_edge() {
    // O X O / . X . / X O X
    let board = board_from("OXO.X.XOX");
    assert_eq!(deterministic_move(&board), None);

    let mut seen = std::collections::BTreeSet::new();
    for seed in 0..64 {
        let mut rng = GameRng::new(seed);
        let decision = decide(&board, &mut rng).unwrap();
        assert_eq!(decision.tier, Tier::Random);
        assert!(!board.is_occupied(decision.position));
        seen.insert(decision.position);
    }
    assert!(seen.is_subset(&[Position::MiddleLeft, Position::MiddleRight].into()));
}

#[test]
fn test_end_to_end_block_scenario() {
    let board = new_game();
    let board = apply_human_move(&board, Position::from_row_column(0, 0).unwrap()).unwrap();
    let board = apply_human_move(&board, Position::from_row_column(0, 1).unwrap()).unwrap();
    assert_eq!(evaluate(&board), GameOutcome::InProgress);

    let decision = deterministic_move(&board).unwrap();
    assert_eq!(decision.tier, Tier::Block);
    assert_eq!(decision.position, Position::from_row_column(0, 2).unwrap());
}

#[test]
fn test_full_game_never_picks_occupied_cell() {
    for seed in 0..16 {
        let mut rng = GameRng::new(seed);
        let mut board = reset_game();
        let mut human_cells = Position::ALL.into_iter();

        while !evaluate(&board).is_over() {
            let Some(pos) = human_cells.find(|pos| !board.is_occupied(*pos)) else {
                break;
            };
            board = apply_human_move(&board, pos).unwrap();
            if evaluate(&board).is_over() {
                break;
            }

            let reply = select_computer_move(&board, &mut rng).unwrap();
            assert!(!board.is_occupied(reply));
            board.place(Player::Computer, reply).unwrap();
        }

        assert!(evaluate(&board).is_over());
    }
}
