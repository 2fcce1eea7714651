use crate::contract::Doubling;
use crate::scoring::score;
use crate::seat::{Seat, Side, Vulnerability};
use crate::strain::Strain;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Double-dummy trick potential: for each (seat, strain), how many tricks
/// that seat would take as declarer. Supplied by an external oracle and
/// immutable for the lifetime of one deal's evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrickTable {
    tricks: [[u8; 5]; 4],
}

impl TrickTable {
    /// Rows indexed by seat (N, E, S, W), columns by strain (C, D, H, S, NT).
    pub fn new(tricks: [[u8; 5]; 4]) -> Self {
        debug_assert!(
            tricks.iter().flatten().all(|&t| t <= 13),
            "trick counts are at most 13"
        );
        Self { tricks }
    }

    pub fn from_fn(mut f: impl FnMut(Seat, Strain) -> u8) -> Self {
        Self::new(Seat::ALL.map(|seat| Strain::ALL.map(|strain| f(seat, strain))))
    }

    pub fn tricks(&self, seat: Seat, strain: Strain) -> u8 {
        self.tricks[seat.idx()][strain.idx()]
    }
}

/// The best makeable contract for a deal, bid at exactly its makeable
/// level, with the undoubled score it would collect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParContract {
    pub declarer: Seat,
    pub level: u8,
    pub strain: Strain,
    pub score: i32,
}

impl ParContract {
    pub fn side(&self) -> Side {
        self.declarer.side()
    }
}

impl fmt::Display for ParContract {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{} by {}", self.level, self.strain, self.declarer)
    }
}

// Enumeration order of the search, matching the double-dummy table layout.
// Ties are broken by the first entry encountered, so this order is part of
// the function's contract.
const SEARCH_STRAINS: [Strain; 5] = [
    Strain::Spades,
    Strain::Hearts,
    Strain::Diamonds,
    Strain::Clubs,
    Strain::NoTrump,
];

/// Search every (seat, strain) able to make a contract (more than six
/// tricks) and return the highest-scoring one, assuming it is bid at
/// exactly the makeable level and left undoubled. `None` when nothing
/// makes: the par result is a pass-out, worth zero.
pub fn par_contract(table: &TrickTable, vulnerability: Vulnerability) -> Option<ParContract> {
    let mut best: Option<ParContract> = None;
    for strain in SEARCH_STRAINS {
        for seat in Seat::ALL {
            let tricks = table.tricks(seat, strain);
            if tricks <= 6 {
                continue;
            }
            let level = tricks - 6;
            let value = score(
                level,
                strain,
                Doubling::Undoubled,
                vulnerability.is_vulnerable(seat),
                tricks,
            )
            .expect("a table entry above six tricks always forms a 1..=7 contract");
            if best.map_or(true, |b| value > b.score) {
                best = Some(ParContract {
                    declarer: seat,
                    level,
                    strain,
                    score: value,
                });
            }
        }
    }
    best
}
