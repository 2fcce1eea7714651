use crate::call::Call;
use crate::contract::{Contract, Doubling};
use crate::seat::Seat;
use crate::strain::Strain;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AuctionError {
    /// The call is not in the seat's legal set, or it is not the seat's turn.
    #[error("illegal call {call} by {seat}")]
    IllegalCall { seat: Seat, call: Call },
    /// The auction has completed; the log is read-only.
    #[error("auction is closed")]
    AuctionClosed,
}

/// The auction log: a dealer and an append-only sequence of calls, one per
/// seat per turn, cycling clockwise from the dealer. Everything else (whose
/// turn it is, the current contract, the doubling state, completion) is
/// derived from the log on demand, so the log can never disagree with it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Auction {
    dealer: Seat,
    calls: Vec<Call>,
}

impl Auction {
    pub fn new(dealer: Seat) -> Self {
        Self {
            dealer,
            calls: Vec::new(),
        }
    }

    pub fn dealer(&self) -> Seat {
        self.dealer
    }

    pub fn calls(&self) -> &[Call] {
        &self.calls
    }

    /// The log with seats attributed: (seat, call) in the order made.
    pub fn events(&self) -> impl Iterator<Item = (Seat, Call)> + '_ {
        self.calls
            .iter()
            .enumerate()
            .map(|(i, call)| (self.seat_at(i), *call))
    }

    fn seat_at(&self, index: usize) -> Seat {
        Seat::ALL[(self.dealer.idx() + index) % 4]
    }

    /// The seat whose turn it is to call.
    pub fn current_seat(&self) -> Seat {
        self.seat_at(self.calls.len())
    }

    /// True once at least four calls have been made and the last three are
    /// all passes. Monotonic: appends are rejected after this point, so it
    /// can never become false again. Four opening passes end the auction
    /// with no contract.
    pub fn is_complete(&self) -> bool {
        self.calls.len() >= 4
            && self.calls[self.calls.len() - 3..]
                .iter()
                .all(|c| *c == Call::Pass)
    }

    /// Complete with no bid ever made.
    pub fn is_passed_out(&self) -> bool {
        self.is_complete() && self.last_bid().is_none()
    }

    /// The most recent bid: who made it, at what level, in what strain.
    pub fn last_bid(&self) -> Option<(Seat, u8, Strain)> {
        self.calls
            .iter()
            .enumerate()
            .rev()
            .find_map(|(i, call)| match call {
                Call::Bid { level, strain } => Some((self.seat_at(i), *level, *strain)),
                _ => None,
            })
    }

    /// Doubling state of the current contract: decided by the most recent
    /// non-pass call, since a new bid always clears an earlier double.
    pub fn doubling(&self) -> Doubling {
        for call in self.calls.iter().rev() {
            match call {
                Call::Redouble => return Doubling::Redoubled,
                Call::Double => return Doubling::Doubled,
                Call::Bid { .. } => return Doubling::Undoubled,
                Call::Pass => {}
            }
        }
        Doubling::Undoubled
    }

    /// The contract as it stands, derived by scanning the log backward.
    /// `None` while no bid has been made (and for a passed-out auction).
    pub fn contract(&self) -> Option<Contract> {
        let (declarer, level, strain) = self.last_bid()?;
        Some(Contract {
            level,
            strain,
            doubling: self.doubling(),
            declarer,
        })
    }

    /// The contract of a completed auction; `None` if the auction is still
    /// open or was passed out.
    pub fn final_contract(&self) -> Option<Contract> {
        if self.is_complete() {
            self.contract()
        } else {
            None
        }
    }

    /// Every call `seat` could legally make next. Pass is always included
    /// while the auction is open; bids must be strictly higher than the
    /// standing bid; Double requires an undoubled contract last bid by the
    /// other side; Redouble requires a doubled contract last bid by the
    /// seat's own side. Empty once the auction is complete.
    pub fn legal_calls(&self, seat: Seat) -> Vec<Call> {
        if self.is_complete() {
            return Vec::new();
        }
        let mut legal = vec![Call::Pass];
        match self.last_bid() {
            None => {
                for level in 1..=7 {
                    for strain in Strain::ALL {
                        legal.push(Call::Bid { level, strain });
                    }
                }
            }
            Some((bidder, last_level, last_strain)) => {
                for level in last_level..=7 {
                    for strain in Strain::ALL {
                        if (level, strain) > (last_level, last_strain) {
                            legal.push(Call::Bid { level, strain });
                        }
                    }
                }
                let own_bid = bidder.side() == seat.side();
                match self.doubling() {
                    Doubling::Undoubled if !own_bid => legal.push(Call::Double),
                    Doubling::Doubled if own_bid => legal.push(Call::Redouble),
                    _ => {}
                }
            }
        }
        legal
    }

    /// Append a call. Fails if it is not `seat`'s turn, if the call is not
    /// in `legal_calls(seat)`, or if the auction has already completed.
    pub fn record_call(&mut self, seat: Seat, call: Call) -> Result<(), AuctionError> {
        if self.is_complete() {
            return Err(AuctionError::AuctionClosed);
        }
        if seat != self.current_seat() || !self.legal_calls(seat).contains(&call) {
            return Err(AuctionError::IllegalCall { seat, call });
        }
        self.calls.push(call);
        Ok(())
    }

    /// Returns the lowest legal bid in the given strain, or `None` if the
    /// strain can no longer be bid.
    pub fn minimum_bid_in(&self, strain: Strain) -> Option<Call> {
        if self.is_complete() {
            return None;
        }
        let Some((_, level, last_strain)) = self.last_bid() else {
            return Some(Call::Bid { level: 1, strain });
        };
        let min_level = if strain > last_strain { level } else { level + 1 };
        (min_level <= 7).then_some(Call::Bid {
            level: min_level,
            strain,
        })
    }

    /// Parse and record a single call from a string like "1C", "P", or "X",
    /// on behalf of the seat to act.
    /// Panics on invalid input — use for tests and known-good data only.
    pub fn bid(&mut self, s: &str) {
        let call = s.parse().expect("invalid call");
        self.record_call(self.current_seat(), call)
            .expect("illegal call");
    }

    /// Parse and record multiple space-separated calls like "P 1C P".
    /// Panics on invalid input — use for tests and known-good data only.
    pub fn bids(&mut self, s: &str) {
        for token in s.split_whitespace() {
            self.bid(token);
        }
    }

    /// Build an auction from space-separated calls like "P 1C P 2C".
    /// Panics on invalid input — use for tests and known-good data only.
    pub fn bidding(dealer: Seat, calls: &str) -> Self {
        let mut auction = Self::new(dealer);
        auction.bids(calls);
        auction
    }
}
