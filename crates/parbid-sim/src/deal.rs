use parbid_core::{Card, Deal, Hand, Rank, Suit};
use rand::seq::SliceRandom;
use rand::Rng;

/// Shuffle a 52-card deck and deal thirteen to each seat, hands sorted
/// for display.
pub fn random_deal(rng: &mut impl Rng) -> Deal {
    let mut deck = Vec::with_capacity(52);
    for suit in Suit::ALL {
        for rank in Rank::ALL {
            deck.push(Card::new(suit, rank));
        }
    }
    deck.shuffle(rng);

    let hands = std::array::from_fn(|i| {
        let mut hand = Hand::new(deck[i * 13..(i + 1) * 13].to_vec());
        hand.sort();
        hand
    });
    Deal::new(hands).expect("a shuffled standard deck always deals cleanly")
}
