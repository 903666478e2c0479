use super::hand::Hand;
use crate::Position;
use serde::Deserialize;
use serde::Serialize;

/// the round/turn state between plays: whose turn it is, who made
/// the last accepted play, whether the round is open (any shape may
/// be led), and the binding hand while it is not.
///
/// mutated only by the Game transition methods, never externally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    turn: Position,
    previous: Option<Position>,
    open: bool,
    binding: Option<Hand>,
}

impl GameState {
    pub fn turn(&self) -> Position {
        self.turn
    }
    pub fn previous(&self) -> Option<Position> {
        self.previous
    }
    pub fn is_open(&self) -> bool {
        self.open
    }
    pub fn binding(&self) -> Option<&Hand> {
        self.binding.as_ref()
    }

    pub(crate) fn opening(leader: Position) -> Self {
        Self {
            turn: leader,
            previous: None,
            open: true,
            binding: None,
        }
    }

    /// an accepted play closes the round and becomes binding
    pub(crate) fn accept(&mut self, seat: Position, hand: Hand) {
        self.previous = Some(seat);
        self.open = false;
        self.binding = Some(hand);
    }

    /// rotate one seat; if rotation returns to whoever played last,
    /// everyone else passed and the round opens back up.
    pub(crate) fn advance(&mut self, seats: usize) {
        self.turn = (self.turn + 1) % seats;
        if Some(self.turn) == self.previous {
            self.open = true;
        }
    }
}

impl std::fmt::Display for GameState {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match (self.open, self.binding.as_ref()) {
            (true, _) => write!(f, "seat {} to lead", self.turn),
            (_, Some(hand)) => write!(f, "seat {} to beat {}", self.turn, hand),
            (_, None) => unreachable!("closed round always has a binding hand"),
        }
    }
}
