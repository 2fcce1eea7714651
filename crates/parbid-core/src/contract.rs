use crate::scoring::{self, ScoreError};
use crate::seat::{Seat, Side, Vulnerability};
use crate::strain::Strain;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Doubling {
    #[default]
    Undoubled,
    Doubled,
    Redoubled,
}

impl Doubling {
    /// Factor applied to trick points: x1, x2, x4.
    pub fn multiplier(self) -> i32 {
        match self {
            Doubling::Undoubled => 1,
            Doubling::Doubled => 2,
            Doubling::Redoubled => 4,
        }
    }

    /// Bonus for making a doubled or redoubled contract.
    pub fn insult(self) -> i32 {
        match self {
            Doubling::Undoubled => 0,
            Doubling::Doubled => 50,
            Doubling::Redoubled => 100,
        }
    }

    fn suffix(self) -> &'static str {
        match self {
            Doubling::Undoubled => "",
            Doubling::Doubled => "X",
            Doubling::Redoubled => "XX",
        }
    }
}

/// The contract an auction has settled on. Always derived from the call
/// log, never stored independently of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Contract {
    pub level: u8,
    pub strain: Strain,
    pub doubling: Doubling,
    pub declarer: Seat,
}

impl Contract {
    pub fn tricks_needed(&self) -> u8 {
        self.level + 6
    }

    pub fn side(&self) -> Side {
        self.declarer.side()
    }

    /// "2H", "2HX", "2HXX".
    pub fn render(&self) -> String {
        format!("{}{}{}", self.level, self.strain, self.doubling.suffix())
    }

    /// Score this contract for the declaring side, given the board
    /// vulnerability and the number of tricks the declarer takes.
    pub fn score(&self, vulnerability: Vulnerability, tricks_made: u8) -> Result<i32, ScoreError> {
        scoring::score(
            self.level,
            self.strain,
            self.doubling,
            vulnerability.is_vulnerable(self.declarer),
            tricks_made,
        )
    }
}

impl fmt::Display for Contract {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} by {}", self.render(), self.declarer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tricks_needed() {
        let contract = Contract {
            level: 3,
            strain: Strain::NoTrump,
            doubling: Doubling::Undoubled,
            declarer: Seat::South,
        };
        assert_eq!(contract.tricks_needed(), 9);
    }

    #[test]
    fn test_render() {
        let mut contract = Contract {
            level: 4,
            strain: Strain::Hearts,
            doubling: Doubling::Undoubled,
            declarer: Seat::West,
        };
        assert_eq!(contract.render(), "4H");
        assert_eq!(contract.to_string(), "4H by W");
        contract.doubling = Doubling::Redoubled;
        assert_eq!(contract.render(), "4HXX");
    }

    #[test]
    fn test_multiplier_and_insult() {
        assert_eq!(Doubling::Undoubled.multiplier(), 1);
        assert_eq!(Doubling::Redoubled.multiplier(), 4);
        assert_eq!(Doubling::Doubled.insult(), 50);
    }
}
