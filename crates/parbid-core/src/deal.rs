use crate::card::Card;
use crate::hand::Hand;
use crate::seat::Seat;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

pub const HAND_SIZE: usize = 13;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    #[error("malformed deal: {seat} holds {count} cards, expected 13")]
    HandSize { seat: Seat, count: usize },
    #[error("malformed deal: {card} is dealt more than once")]
    DuplicateCard { card: Card },
}

/// A full deal: thirteen cards to each seat, covering the deck exactly
/// once. The invariant is checked on construction and never after.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deal {
    hands: [Hand; 4],
}

impl Deal {
    pub fn new(hands: [Hand; 4]) -> Result<Self, DealError> {
        let mut seen = HashSet::with_capacity(52);
        for (seat, hand) in Seat::ALL.into_iter().zip(&hands) {
            if hand.cards.len() != HAND_SIZE {
                return Err(DealError::HandSize {
                    seat,
                    count: hand.cards.len(),
                });
            }
            for &card in &hand.cards {
                if !seen.insert(card) {
                    return Err(DealError::DuplicateCard { card });
                }
            }
        }
        // 52 distinct cards across 4 hands of 13 is necessarily the whole deck.
        Ok(Self { hands })
    }

    pub fn hand(&self, seat: Seat) -> &Hand {
        &self.hands[seat.idx()]
    }
}
