//! End-of-game alert copy.

use kodeco_tictactoe::{GameOutcome, Player};

/// The popup shown when a game ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutcomeAlert {
    /// Popup title.
    pub title: &'static str,
    /// Body text.
    pub message: &'static str,
    /// Label of the button that starts the next game.
    pub action: &'static str,
}

impl OutcomeAlert {
    /// Returns the alert for a finished game, or `None` while it is still
    /// in progress.
    pub fn for_outcome(outcome: GameOutcome) -> Option<Self> {
        let alert = match outcome {
            GameOutcome::InProgress => return None,
            GameOutcome::Win(Player::Human) => Self {
                title: "You win",
                message: "You beat your own AI.",
                action: "Oh yeah!",
            },
            GameOutcome::Win(Player::Computer) => Self {
                title: "You lose",
                message: "You got beat by your own AI.",
                action: "Get revenge now!",
            },
            GameOutcome::Draw => Self {
                title: "Oh snap",
                message: "You tied with your own AI.",
                action: "Try again?",
            },
        };
        Some(alert)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_alert_while_in_progress() {
        assert_eq!(OutcomeAlert::for_outcome(GameOutcome::InProgress), None);
    }

    #[test]
    fn test_alert_copy() {
        let win = OutcomeAlert::for_outcome(GameOutcome::Win(Player::Human)).unwrap();
        assert_eq!(win.title, "You win");
        assert_eq!(win.action, "Oh yeah!");

        let loss = OutcomeAlert::for_outcome(GameOutcome::Win(Player::Computer)).unwrap();
        assert_eq!(loss.message, "You got beat by your own AI.");

        let draw = OutcomeAlert::for_outcome(GameOutcome::Draw).unwrap();
        assert_eq!(draw.title, "Oh snap");
        assert_eq!(draw.action, "Try again?");
    }
}
