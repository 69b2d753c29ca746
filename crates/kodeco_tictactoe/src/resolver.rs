//! Move selection for the computer player.
//!
//! The computer walks a fixed list of tiers and takes the first one that
//! yields a cell:
//!
//! 1. [`Tier::Win`]: complete its own line.
//! 2. [`Tier::Block`]: complete the human's line before they do.
//! 3. [`Tier::Center`]: take the center.
//! 4. [`Tier::Corner`]: take the first free corner in
//!    [`Position::CORNERS`] order.
//! 5. [`Tier::Random`]: any free cell, drawn uniformly from the caller's
//!    random source.
//!
//! Tiers 1 to 4 are deterministic; [`deterministic_move`] runs only those.

use super::rules::find_immediate_win;
use super::{Board, ExhaustedBoardError, Player, Position};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, instrument};

/// Which rule produced the computer's move.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
pub enum Tier {
    /// Completes a computer line.
    Win,
    /// Stops a human line.
    Block,
    /// Takes the center cell.
    Center,
    /// Takes a free corner.
    Corner,
    /// Picks a free cell at random.
    Random,
}

/// The computer's chosen cell and the tier that chose it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decision {
    /// Cell to play.
    pub position: Position,
    /// Rule that picked it.
    pub tier: Tier,
}

impl Decision {
    fn new(position: Position, tier: Tier) -> Self {
        Self { position, tier }
    }
}

/// Runs tiers 1 to 4 only.
///
/// Returns `None` when none of the deterministic tiers applies, meaning the
/// center and every corner are taken and nobody is one move from a line.
#[instrument(skip(board), fields(moves = board.len()))]
pub fn deterministic_move(board: &Board) -> Option<Decision> {
    if let Some(pos) = find_immediate_win(Player::Computer, board) {
        return Some(Decision::new(pos, Tier::Win));
    }

    if let Some(pos) = find_immediate_win(Player::Human, board) {
        return Some(Decision::new(pos, Tier::Block));
    }

    if !board.is_occupied(Position::CENTER) {
        return Some(Decision::new(Position::CENTER, Tier::Center));
    }

    Position::CORNERS
        .into_iter()
        .find(|&pos| !board.is_occupied(pos))
        .map(|pos| Decision::new(pos, Tier::Corner))
}

/// Picks the computer's next cell and reports which tier picked it.
///
/// # Errors
///
/// Returns [`ExhaustedBoardError`] if the board is full. Callers should
/// only ask for a computer move while the game is in progress.
#[instrument(skip(board, rng), fields(moves = board.len()))]
pub fn decide<R>(board: &Board, rng: &mut R) -> Result<Decision, ExhaustedBoardError>
where
    R: Rng + ?Sized,
{
    let decision = match deterministic_move(board) {
        Some(decision) => decision,
        None => Decision::new(random_move(board, rng)?, Tier::Random),
    };

    debug!(position = %decision.position, tier = %decision.tier, "Computer move selected");
    Ok(decision)
}

/// Picks the computer's next cell.
///
/// See [`decide`] for the tier order and errors.
pub fn select_computer_move<R>(board: &Board, rng: &mut R) -> Result<Position, ExhaustedBoardError>
where
    R: Rng + ?Sized,
{
    decide(board, rng).map(|decision| decision.position)
}

fn random_move<R>(board: &Board, rng: &mut R) -> Result<Position, ExhaustedBoardError>
where
    R: Rng + ?Sized,
{
    let available = board.empty_positions();
    if available.is_empty() {
        error!("Computer move requested on a full board");
        return Err(ExhaustedBoardError);
    }

    let idx = rng.random_range(0..available.len());
    Ok(available[idx])
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn board_with(human: &[Position], computer: &[Position]) -> Board {
        let mut board = Board::new();
        for &pos in human {
            board.place(Player::Human, pos).unwrap();
        }
        for &pos in computer {
            board.place(Player::Computer, pos).unwrap();
        }
        board
    }

    #[test]
    fn test_empty_board_takes_center() {
        let decision = deterministic_move(&Board::new()).unwrap();
        assert_eq!(decision, Decision::new(Position::Center, Tier::Center));
    }

    #[test]
    fn test_win_beats_block() {
        let board = board_with(
            &[Position::TopLeft, Position::TopCenter],
            &[Position::MiddleLeft, Position::Center],
        );
        let decision = deterministic_move(&board).unwrap();
        assert_eq!(decision, Decision::new(Position::MiddleRight, Tier::Win));
    }

    #[test]
    fn test_block_when_no_win() {
        let board = board_with(&[Position::TopLeft, Position::TopCenter], &[Position::Center]);
        let decision = deterministic_move(&board).unwrap();
        assert_eq!(decision, Decision::new(Position::TopRight, Tier::Block));
    }

    #[test]
    fn test_corner_order() {
        let board = board_with(&[Position::Center], &[]);
        assert_eq!(
            deterministic_move(&board),
            Some(Decision::new(Position::TopLeft, Tier::Corner))
        );

        let board = board_with(&[Position::Center, Position::TopLeft], &[Position::BottomRight]);
        assert_eq!(
            deterministic_move(&board),
            Some(Decision::new(Position::TopRight, Tier::Corner))
        );
    }

    #[test]
    fn test_random_tier_only_picks_edges() {
        // O X O / . X . / X O X: center and corners taken, no open line.
        let board = board_with(
            &[Position::TopCenter, Position::Center, Position::BottomLeft, Position::BottomRight],
            &[Position::TopLeft, Position::TopRight, Position::BottomCenter],
        );
        assert_eq!(deterministic_move(&board), None);

        for seed in 0..32 {
            let mut rng = StdRng::seed_from_u64(seed);
            let decision = decide(&board, &mut rng).unwrap();
            assert_eq!(decision.tier, Tier::Random);
            assert!(!board.is_occupied(decision.position));
            assert!(matches!(
                decision.position,
                Position::MiddleLeft | Position::MiddleRight
            ));
        }
    }

    #[test]
    fn test_same_seed_same_choice() {
        let board = board_with(
            &[Position::TopCenter, Position::Center, Position::BottomLeft, Position::BottomRight],
            &[Position::TopLeft, Position::TopRight, Position::BottomCenter],
        );
        let first = select_computer_move(&board, &mut StdRng::seed_from_u64(7)).unwrap();
        let second = select_computer_move(&board, &mut StdRng::seed_from_u64(7)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_full_board_exhausted() {
        let mut board = Board::new();
        for (i, pos) in Position::ALL.into_iter().enumerate() {
            let player = if i % 2 == 0 { Player::Human } else { Player::Computer };
            board.place(player, pos).unwrap();
        }
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(decide(&board, &mut rng), Err(ExhaustedBoardError));
    }
}
