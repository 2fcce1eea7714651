//! Auction simulation over the parbid core: a policy seam for bid
//! selection, a driver that runs one auction to completion, an evaluator
//! that scores each seat against double-dummy par, and a parallel batch
//! runner for fitness-style trials.

pub mod deal;
pub mod driver;
pub mod evaluator;
pub mod policy;
pub mod trials;

pub use deal::random_deal;
pub use driver::{run_auction, BiddingTable};
pub use evaluator::{evaluate, Scorecard, SeatScore};
pub use policy::{AlwaysPass, AuctionView, BidPolicy, PointCount, UniformRandom};
pub use trials::{run_trials, TrialConfig, TrialReport, TrickOracle};

use parbid_core::{AuctionError, Call, ScoreError, Seat};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SimError {
    /// The external policy returned a call outside the legal set. A bug in
    /// the collaborator; never corrected on its behalf.
    #[error("policy for {seat} returned illegal call {call}")]
    NoLegalPolicyOutput { seat: Seat, call: Call },
    /// Evaluation requested before the auction completed.
    #[error("auction is still open")]
    AuctionOpen,
    #[error(transparent)]
    Auction(#[from] AuctionError),
    #[error(transparent)]
    Score(#[from] ScoreError),
}
