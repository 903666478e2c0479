use crate::Position;
use thiserror::Error;

/// why a proposed play or pass was refused.
///
/// every variant is a normal outcome of rule enforcement, reported
/// synchronously and mutating nothing; the session stays usable
/// after any of them.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    #[error("seat {0} acted out of turn")]
    OutOfTurn(Position),
    #[error("played cards are not all in the seat's hand")]
    NotInHand,
    #[error("cards do not form a recognized shape")]
    Unshaped,
    #[error("cards do not follow the binding shape")]
    WrongShape,
    #[error("shape does not beat the binding hand")]
    TooWeak,
    #[error("nothing to pass on while the round is open")]
    OpenRound,
}
