use parbid_core::{Auction, Call, Hand, Seat, Strain, Vulnerability};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Everything a seat is allowed to see when choosing its call: its own
/// identity and hand, the board vulnerability, the full auction so far,
/// and the set of calls it may legally make.
pub struct AuctionView<'a> {
    pub seat: Seat,
    pub hand: &'a Hand,
    pub vulnerability: Vulnerability,
    pub auction: &'a Auction,
    pub legal_calls: &'a [Call],
}

/// The bid-selection capability. Implementations rank or pick one call
/// from `view.legal_calls`; anything outside that set is a contract
/// violation the driver treats as fatal.
pub trait BidPolicy {
    fn select_call(&mut self, view: &AuctionView<'_>) -> Call;
}

/// Passes throughout. Useful as a test opponent and as the floor any
/// learned policy has to beat.
pub struct AlwaysPass;

impl BidPolicy for AlwaysPass {
    fn select_call(&mut self, _view: &AuctionView<'_>) -> Call {
        Call::Pass
    }
}

/// Picks uniformly among the legal calls.
pub struct UniformRandom {
    rng: StdRng,
}

impl UniformRandom {
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl BidPolicy for UniformRandom {
    fn select_call(&mut self, view: &AuctionView<'_>) -> Call {
        *view
            .legal_calls
            .choose(&mut self.rng)
            .expect("legal call set is never empty while the auction is open")
    }
}

/// Baseline natural bidder: competes in its longest suit up to the level
/// its high-card points justify, and passes once its side holds the
/// contract. Deterministic; stands in for a trained policy.
pub struct PointCount;

impl PointCount {
    fn target_level(hcp: u8) -> u8 {
        match hcp {
            0..=11 => 0,
            12..=15 => 1,
            16..=18 => 2,
            19..=21 => 3,
            _ => 4,
        }
    }
}

impl BidPolicy for PointCount {
    fn select_call(&mut self, view: &AuctionView<'_>) -> Call {
        let target = Self::target_level(view.hand.hcp());
        if target == 0 {
            return Call::Pass;
        }
        if let Some(contract) = view.auction.contract() {
            if contract.side() == view.seat.side() {
                return Call::Pass;
            }
        }
        let strain = Strain::from_suit(view.hand.longest_suit());
        match view.auction.minimum_bid_in(strain) {
            Some(bid @ Call::Bid { level, .. })
                if level <= target && view.legal_calls.contains(&bid) =>
            {
                bid
            }
            _ => Call::Pass,
        }
    }
}
