use crate::card::{Card, Rank, Suit};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Hand {
    pub cards: Vec<Card>,
}

impl Hand {
    pub fn new(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Parse a hand string in the format "Clubs.Diamonds.Hearts.Spades",
    /// e.g. "AQ2.K53.JT9.86542". Unknown rank characters are skipped.
    pub fn parse(s: &str) -> Self {
        let suit_order = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];
        let mut cards = Vec::new();
        for (suit_str, suit) in s.split('.').zip(suit_order) {
            for c in suit_str.chars() {
                if let Some(rank) = Rank::from_char(c) {
                    cards.push(Card::new(suit, rank));
                }
            }
        }
        Self { cards }
    }

    pub fn hcp(&self) -> u8 {
        self.cards
            .iter()
            .map(|c| match c.rank {
                Rank::Ace => 4,
                Rank::King => 3,
                Rank::Queen => 2,
                Rank::Jack => 1,
                _ => 0,
            })
            .sum()
    }

    pub fn length(&self, suit: Suit) -> u8 {
        self.cards.iter().filter(|c| c.suit == suit).count() as u8
    }

    /// The longest suit in the hand; ties go to the higher-ranking suit.
    pub fn longest_suit(&self) -> Suit {
        let mut longest = Suit::Clubs;
        let mut max_len = 0;
        for suit in Suit::ALL {
            let len = self.length(suit);
            if len >= max_len {
                max_len = len;
                longest = suit;
            }
        }
        longest
    }

    /// Sort into display order: spades first, then hearts, diamonds, clubs,
    /// high card first within each suit.
    pub fn sort(&mut self) {
        self.cards.sort_by(|a, b| {
            if a.suit != b.suit {
                b.suit.cmp(&a.suit)
            } else {
                b.rank.cmp(&a.rank)
            }
        });
    }
}

impl fmt::Display for Hand {
    /// Renders the same "C.D.H.S" format `Hand::parse` accepts.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut suits = [String::new(), String::new(), String::new(), String::new()];
        for suit in Suit::ALL {
            let mut ranks: Vec<Rank> = self
                .cards
                .iter()
                .filter(|c| c.suit == suit)
                .map(|c| c.rank)
                .collect();
            ranks.sort_by(|a, b| b.cmp(a));
            suits[suit as usize] = ranks.iter().map(|r| r.to_char()).collect();
        }
        write!(f, "{}.{}.{}.{}", suits[0], suits[1], suits[2], suits[3])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hcp_calculation() {
        let hand = Hand::parse("J.Q.K.A2");
        assert_eq!(hand.hcp(), 10);
    }

    #[test]
    fn test_length() {
        let hand = Hand::parse("..Q.AK");
        assert_eq!(hand.length(Suit::Spades), 2);
        assert_eq!(hand.length(Suit::Hearts), 1);
        assert_eq!(hand.length(Suit::Diamonds), 0);
    }

    #[test]
    fn test_longest_suit() {
        let hand = Hand::parse(".A.AK.AKQJT");
        assert_eq!(hand.longest_suit(), Suit::Spades);
    }

    #[test]
    fn test_longest_suit_tie_goes_high() {
        // 5 hearts and 5 spades
        let hand = Hand::parse("64.6.AK732.QJ854");
        assert_eq!(hand.longest_suit(), Suit::Spades);
    }

    #[test]
    fn test_sort() {
        let mut hand = Hand::parse("A...2");
        hand.sort();
        assert_eq!(hand.cards[0].suit, Suit::Spades);
        assert_eq!(hand.cards[1].suit, Suit::Clubs);
    }

    #[test]
    fn test_display_round_trips() {
        let hand = Hand::parse("AQ2.K53.JT9.86542");
        assert_eq!(hand.to_string(), "AQ2.K53.JT9.86542");
        assert_eq!(Hand::parse(&hand.to_string()), hand);
    }
}
