use crate::policy::{AuctionView, BidPolicy};
use crate::SimError;
use parbid_core::{Auction, Call, Deal, Seat, Vulnerability};

/// One table bidding one deal: four seat policies around an auction.
/// Repeatedly asks the seat to act for a call, verifies it against the
/// legal set, and appends it until three consecutive passes close the
/// auction.
pub struct BiddingTable<'d> {
    deal: &'d Deal,
    vulnerability: Vulnerability,
    auction: Auction,
    policies: [Box<dyn BidPolicy>; 4],
}

impl<'d> BiddingTable<'d> {
    pub fn new(
        deal: &'d Deal,
        dealer: Seat,
        vulnerability: Vulnerability,
        policies: [Box<dyn BidPolicy>; 4],
    ) -> Self {
        Self {
            deal,
            vulnerability,
            auction: Auction::new(dealer),
            policies,
        }
    }

    pub fn auction(&self) -> &Auction {
        &self.auction
    }

    pub fn vulnerability(&self) -> Vulnerability {
        self.vulnerability
    }

    /// Ask the seat to act for one call and record it. Returns what was
    /// called and by whom. A policy answering outside its legal set is a
    /// fatal collaborator bug, not something to correct or retry.
    pub fn step(&mut self) -> Result<(Seat, Call), SimError> {
        let seat = self.auction.current_seat();
        let legal = self.auction.legal_calls(seat);
        let view = AuctionView {
            seat,
            hand: self.deal.hand(seat),
            vulnerability: self.vulnerability,
            auction: &self.auction,
            legal_calls: &legal,
        };
        let call = self.policies[seat.idx()].select_call(&view);
        if !legal.contains(&call) {
            return Err(SimError::NoLegalPolicyOutput { seat, call });
        }
        self.auction.record_call(seat, call)?;
        Ok((seat, call))
    }

    pub fn run(&mut self) -> Result<(), SimError> {
        while !self.auction.is_complete() {
            self.step()?;
        }
        Ok(())
    }

    pub fn into_auction(self) -> Auction {
        self.auction
    }
}

/// Drive a full auction and hand back the completed log.
pub fn run_auction(
    deal: &Deal,
    dealer: Seat,
    vulnerability: Vulnerability,
    policies: [Box<dyn BidPolicy>; 4],
) -> Result<Auction, SimError> {
    let mut table = BiddingTable::new(deal, dealer, vulnerability, policies);
    table.run()?;
    Ok(table.into_auction())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::{AlwaysPass, PointCount};
    use parbid_core::{Card, Hand, Rank, Suit};

    fn one_suit_deal() -> Deal {
        let hands = [Suit::Spades, Suit::Hearts, Suit::Diamonds, Suit::Clubs]
            .map(|suit| Hand::new(Rank::ALL.map(|rank| Card::new(suit, rank)).to_vec()));
        Deal::new(hands).unwrap()
    }

    fn passers() -> [Box<dyn BidPolicy>; 4] {
        [
            Box::new(AlwaysPass),
            Box::new(AlwaysPass),
            Box::new(AlwaysPass),
            Box::new(AlwaysPass),
        ]
    }

    #[test]
    fn test_all_pass_auction() {
        let deal = one_suit_deal();
        let auction =
            run_auction(&deal, Seat::North, Vulnerability::None, passers()).unwrap();
        assert!(auction.is_passed_out());
        assert_eq!(auction.calls().len(), 4);
    }

    #[test]
    fn test_point_count_table_terminates() {
        let deal = one_suit_deal();
        let policies: [Box<dyn BidPolicy>; 4] = [
            Box::new(PointCount),
            Box::new(PointCount),
            Box::new(PointCount),
            Box::new(PointCount),
        ];
        let auction =
            run_auction(&deal, Seat::East, Vulnerability::Both, policies).unwrap();
        assert!(auction.is_complete());
        // Every 13-card suit holds exactly 10 HCP, so nobody opens.
        assert!(auction.is_passed_out());
    }

    #[test]
    fn test_step_reports_caller() {
        let deal = one_suit_deal();
        let mut table =
            BiddingTable::new(&deal, Seat::South, Vulnerability::None, passers());
        assert_eq!(table.step().unwrap(), (Seat::South, Call::Pass));
        assert_eq!(table.step().unwrap(), (Seat::West, Call::Pass));
    }

    #[test]
    fn test_illegal_policy_output_is_fatal() {
        struct Stubborn;
        impl BidPolicy for Stubborn {
            fn select_call(&mut self, _view: &AuctionView<'_>) -> Call {
                "1C".parse().unwrap()
            }
        }
        let deal = one_suit_deal();
        let policies: [Box<dyn BidPolicy>; 4] = [
            Box::new(Stubborn),
            Box::new(Stubborn),
            Box::new(Stubborn),
            Box::new(Stubborn),
        ];
        let mut table = BiddingTable::new(&deal, Seat::North, Vulnerability::None, policies);
        // North opens 1C legally; East repeating 1C is not a legal call.
        table.step().unwrap();
        assert_eq!(
            table.step(),
            Err(SimError::NoLegalPolicyOutput {
                seat: Seat::East,
                call: "1C".parse().unwrap()
            })
        );
    }
}
