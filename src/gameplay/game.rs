use super::classifier::Classifier;
use super::hand::Hand;
use super::rejection::Rejection;
use super::state::GameState;
use crate::Position;
use crate::cards::card::Card;
use crate::cards::deck::Deck;

/// one match of the landlord game: per-seat card multisets, the
/// landlord designation, the round/turn state, and the winner once
/// a seat empties.
///
/// this is a single-writer state machine. play() and pass() are the
/// only mutations, each applied atomically against `&mut self`; any
/// rejection leaves the session byte-for-byte unchanged. a session
/// exposed to concurrent callers belongs behind one lock or mailbox.
#[derive(Debug, Clone)]
pub struct Game {
    seats: Vec<Vec<Card>>,
    landlord: Position,
    bonus: Card,
    state: GameState,
    winner: Option<Position>,
}

impl Game {
    /// deal a fresh match with a randomly chosen landlord and a
    /// freshly shuffled single or double pack as the table size demands.
    pub fn new(seats: usize) -> Self {
        assert!((2..=6).contains(&seats), "2 to 6 seats");
        let landlord = rand::rng().random_range(0..seats);
        let mut deck = if seats > 3 {
            Deck::double()
        } else {
            Deck::single()
        };
        deck.shuffle();
        Self::deal(seats, landlord, deck)
    }

    /// deal an externally shuffled deck, in its order: the landlord's
    /// bonus cards come off the top, the rest go round-robin. the
    /// landlord's first card is published as the bonus card and the
    /// landlord leads the opening round.
    pub fn deal(seats: usize, landlord: Position, deck: Deck) -> Self {
        assert!((2..=6).contains(&seats), "2 to 6 seats");
        assert!(landlord < seats);
        let mut hands = vec![Vec::new(); seats];
        let mut cards = deck.into_iter();
        for _ in 0..Self::bonus_count(seats) {
            hands[landlord].push(cards.next().expect("deck covers the bonus"));
        }
        for (i, card) in cards.enumerate() {
            hands[i % seats].push(card);
        }
        let bonus = hands[landlord][0];
        log::debug!(
            "{:<32}{:<8}{:<8}",
            "dealt match",
            format!("seats {}", seats),
            format!("landlord {}", landlord)
        );
        Self {
            seats: hands,
            landlord,
            bonus,
            state: GameState::opening(landlord),
            winner: None,
        }
    }

    /// the single transition for a card play, applied atomically:
    /// turn check, ownership check, classification against the round
    /// state, strength comparison, then mutation + rotation + win check.
    /// input order is the caller's; sorting happens here, once.
    pub fn play(&mut self, seat: Position, cards: Vec<Card>) -> Result<&GameState, Rejection> {
        if seat != self.state.turn() {
            return Err(Rejection::OutOfTurn(seat));
        }
        let mut cards = cards;
        cards.sort();
        let remaining = self.without(seat, &cards)?;
        let hand = self.classified(&cards)?;
        if !self.state.is_open() {
            let binding = self.state.binding().expect("closed round binds a hand");
            if !hand.beats(binding) {
                return Err(Rejection::TooWeak);
            }
        }
        log::debug!("{:<32}{}", format!("seat {} plays", seat), hand);
        self.seats[seat] = remaining;
        if self.seats[seat].is_empty() {
            log::debug!("{:<32}{}", "match won by", seat);
            self.winner.get_or_insert(seat);
        }
        self.state.accept(seat, hand);
        self.state.advance(self.seats.len());
        Ok(&self.state)
    }

    /// decline to beat the binding hand. only meaningful while a
    /// shape is binding; leading seats must play.
    pub fn pass(&mut self, seat: Position) -> Result<&GameState, Rejection> {
        if seat != self.state.turn() {
            return Err(Rejection::OutOfTurn(seat));
        }
        if self.state.is_open() {
            return Err(Rejection::OpenRound);
        }
        log::trace!("{:<32}", format!("seat {} passes", seat));
        self.state.advance(self.seats.len());
        Ok(&self.state)
    }

    //

    pub fn n(&self) -> usize {
        self.seats.len()
    }
    pub fn state(&self) -> &GameState {
        &self.state
    }
    pub fn landlord(&self) -> Position {
        self.landlord
    }
    pub fn bonus(&self) -> Card {
        self.bonus
    }
    pub fn winner(&self) -> Option<Position> {
        self.winner
    }
    pub fn cards(&self, seat: Position) -> &[Card] {
        &self.seats[seat]
    }
    pub fn remaining(&self, seat: Position) -> usize {
        self.seats[seat].len()
    }

    //

    /// the seat's hand with the played cards removed, or NotInHand if
    /// they are not a sub-multiset of it. pure; mutation is the caller's.
    fn without(&self, seat: Position, cards: &[Card]) -> Result<Vec<Card>, Rejection> {
        let mut remaining = self.seats[seat].clone();
        for card in cards {
            match remaining.iter().position(|held| held == card) {
                Some(i) => {
                    remaining.swap_remove(i);
                }
                None => return Err(Rejection::NotInHand),
            }
        }
        Ok(remaining)
    }

    /// classification against the round state: anything recognizable
    /// while the round is open; otherwise bombs and nukes first, then
    /// strictly the binding shape at its stored length.
    fn classified(&self, cards: &[Card]) -> Result<Hand, Rejection> {
        let classifier = Classifier::from(cards);
        match self.state.binding() {
            _ if self.state.is_open() => classifier.resolve().ok_or(Rejection::Unshaped),
            Some(binding) => classifier
                .escalation()
                .or_else(|| classifier.classify(binding.shape()))
                .ok_or(Rejection::WrongShape),
            None => unreachable!("closed round binds a hand"),
        }
    }

    const fn bonus_count(seats: usize) -> usize {
        match seats {
            3 | 5 => 3,
            6 => 6,
            _ => 0,
        }
    }
}

impl std::fmt::Display for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for (i, hand) in self.seats.iter().enumerate() {
            let tag = if i == self.landlord { "L" } else { " " };
            write!(f, "{}{:<2}[{:>2}] ", tag, i, hand.len())?;
        }
        write!(f, "@ {}", self.state)
    }
}

use rand::Rng;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::card::row;

    fn rigged(hands: Vec<Vec<Card>>) -> Game {
        let bonus = hands[0][0];
        Game {
            seats: hands,
            landlord: 0,
            bonus,
            state: GameState::opening(0),
            winner: None,
        }
    }

    fn three_seats() -> Game {
        rigged(vec![
            row("3d 5c 9h Kd"),
            row("3c Ad 8s Th"),
            row("5d 5h 5s 5c 7d"),
        ])
    }

    #[test]
    fn deal_single_deck_three_seats() {
        let game = Game::deal(3, 1, Deck::single());
        assert_eq!(game.remaining(1), 20); // 3 bonus + 17
        assert_eq!(game.remaining(0), 17);
        assert_eq!(game.remaining(2), 17);
        assert_eq!(game.bonus(), game.cards(1)[0]);
        assert_eq!(game.state().turn(), 1);
        assert!(game.state().is_open());
        assert!(game.winner().is_none());
    }

    #[test]
    fn deal_double_deck_four_seats() {
        let game = Game::deal(4, 0, Deck::double());
        for seat in 0..4 {
            assert_eq!(game.remaining(seat), 27);
        }
    }

    #[test]
    fn deal_double_deck_six_seats() {
        let game = Game::deal(6, 2, Deck::double());
        assert_eq!(game.remaining(2), 23); // 6 bonus + 17
        assert_eq!(game.remaining(0), 17);
    }

    #[test]
    fn randomized_deal_is_well_formed() {
        let game = Game::new(3);
        assert!(game.landlord() < 3);
        let total = (0..3).map(|s| game.remaining(s)).sum::<usize>();
        assert_eq!(total, Deck::SINGLE);
    }

    #[test]
    fn lead_single_then_outbid_then_bomb() {
        let mut game = three_seats();

        // seat 0 leads a Single 3
        let state = game.play(0, row("3d")).unwrap();
        assert_eq!(state.turn(), 1);
        assert_eq!(state.previous(), Some(0));
        assert!(!state.is_open());

        // equal strength is rejected, state untouched
        let before = game.state().clone();
        assert_eq!(game.play(1, row("3c")), Err(Rejection::TooWeak));
        assert_eq!(game.state(), &before);

        // seat 1 beats with a Single Ace
        let state = game.play(1, row("Ad")).unwrap();
        assert_eq!(state.turn(), 2);
        assert_eq!(state.previous(), Some(1));

        // seat 2 bombs over the binding Single
        let state = game.play(2, row("5d 5h 5s 5c")).unwrap();
        assert_eq!(state.turn(), 0);
        assert_eq!(state.previous(), Some(2));
        assert!(!state.is_open());
    }

    #[test]
    fn out_of_turn_rejected() {
        let mut game = three_seats();
        assert_eq!(game.play(1, row("Ad")), Err(Rejection::OutOfTurn(1)));
        assert_eq!(game.pass(2), Err(Rejection::OutOfTurn(2)));
    }

    #[test]
    fn cards_must_come_from_the_seat() {
        let mut game = three_seats();
        assert_eq!(game.play(0, row("Ad")), Err(Rejection::NotInHand));
        // holding one 5c does not allow playing two
        assert_eq!(game.play(0, row("5c 5c")), Err(Rejection::NotInHand));
    }

    #[test]
    fn unrecognized_lead_rejected() {
        let mut game = three_seats();
        assert_eq!(game.play(0, row("3d 5c")), Err(Rejection::Unshaped));
    }

    #[test]
    fn wrong_shape_against_binding() {
        let mut game = three_seats();
        game.play(0, row("3d")).unwrap();
        // a two-card play is not even attempted against a Single
        assert_eq!(game.play(1, row("8s Th")), Err(Rejection::WrongShape));
    }

    #[test]
    fn pass_rejected_while_open() {
        let mut game = three_seats();
        assert_eq!(game.pass(0), Err(Rejection::OpenRound));
    }

    #[test]
    fn full_rotation_of_passes_reopens() {
        let mut game = three_seats();
        game.play(0, row("Kd")).unwrap();
        let state = game.pass(1).unwrap();
        assert!(!state.is_open());
        let state = game.pass(2).unwrap();
        assert!(state.is_open());
        assert_eq!(state.turn(), 0);
        // the fresh leader may now play any shape
        assert!(game.play(0, row("3d")).is_ok());
    }

    #[test]
    fn winner_recorded_and_stable() {
        let mut game = rigged(vec![row("3d"), row("4d 9c"), row("6h 6s")]);
        game.play(0, row("3d")).unwrap();
        assert_eq!(game.winner(), Some(0));
        assert_eq!(game.remaining(0), 0);
        // the machine does not block further plays, and the winner holds
        game.play(1, row("4d")).unwrap();
        game.play(2, row("6h 6s")).ok();
        assert_eq!(game.winner(), Some(0));
    }

    #[test]
    fn rejection_is_idempotent() {
        let mut game = three_seats();
        game.play(0, row("Kd")).unwrap();
        let before = game.clone();
        assert_eq!(game.play(1, row("3c")), Err(Rejection::TooWeak));
        assert_eq!(game.state(), before.state());
        assert_eq!(game.play(1, row("3c")), Err(Rejection::TooWeak));
        assert_eq!(game.state(), before.state());
        assert_eq!(game.remaining(1), before.remaining(1));
    }

    #[test]
    fn unsorted_input_is_sorted_at_entry() {
        let mut game = rigged(vec![row("7d 3c 5h 4s 6d"), row("8d"), row("9d")]);
        let state = game.play(0, row("7d 3c 5h 4s 6d")).unwrap();
        let binding = state.binding().unwrap();
        assert_eq!(binding.shape(), crate::gameplay::shape::Shape::Straight(5));
        assert_eq!(
            binding.strength(),
            u8::from(crate::cards::rank::Rank::Seven)
        );
    }

    #[test]
    fn nuke_over_bomb_over_shape() {
        let mut game = rigged(vec![
            row("4d 4c 3d"),
            row("8d 8c 8h 8s 5d"),
            row("Bj Cj 6d"),
        ]);
        game.play(0, row("4d 4c")).unwrap();
        game.play(1, row("8d 8c 8h 8s")).unwrap();
        let state = game.play(2, row("Bj Cj")).unwrap();
        assert_eq!(state.previous(), Some(2));
        // a lone bomb cannot answer the nuke
        assert_eq!(game.play(0, row("3d")), Err(Rejection::WrongShape));
    }
}
