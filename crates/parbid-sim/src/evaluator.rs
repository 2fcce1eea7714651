use crate::SimError;
use parbid_core::{par_contract, Auction, Contract, ParContract, Seat, TrickTable, Vulnerability};
use serde::Serialize;

/// One seat's result for a deal: the score its side realized and the
/// benchmark the par contract sets for it (negative when the par contract
/// belongs to the opponents, since the seat would be defending it).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SeatScore {
    pub seat: Seat,
    pub realized: i32,
    pub benchmark: i32,
}

impl SeatScore {
    /// Signed distance from par: what a scorecard prints.
    pub fn differential(&self) -> i32 {
        self.realized - self.benchmark
    }

    /// Fitness-style reduction: never positive, zero exactly at par.
    pub fn fitness(&self) -> i32 {
        -self.differential().abs()
    }
}

/// Full evaluation of one completed auction against the trick table.
#[derive(Debug, Clone, Serialize)]
pub struct Scorecard {
    pub contract: Option<Contract>,
    /// Double-dummy tricks for the declarer in the contract strain.
    pub tricks_made: Option<u8>,
    /// Declaring side's score; zero for a passed-out deal.
    pub declarer_score: i32,
    pub par: Option<ParContract>,
    pub seats: [SeatScore; 4],
}

/// Score a completed auction. The realized result assumes the declarer
/// takes exactly the double-dummy trick count for its strain; each seat is
/// credited with the declaring side's score (negated for the defenders)
/// and benchmarked against the par contract the same way.
pub fn evaluate(
    auction: &Auction,
    vulnerability: Vulnerability,
    table: &TrickTable,
) -> Result<Scorecard, SimError> {
    if !auction.is_complete() {
        return Err(SimError::AuctionOpen);
    }

    let contract = auction.contract();
    let (tricks_made, declarer_score) = match contract {
        Some(c) => {
            let tricks = table.tricks(c.declarer, c.strain);
            (Some(tricks), c.score(vulnerability, tricks)?)
        }
        None => (None, 0),
    };

    let par = par_contract(table, vulnerability);

    let seats = Seat::ALL.map(|seat| {
        let realized = match contract {
            Some(c) if c.side() == seat.side() => declarer_score,
            Some(_) => -declarer_score,
            None => 0,
        };
        let benchmark = match par {
            Some(p) if p.side() == seat.side() => p.score,
            Some(p) => -p.score,
            None => 0,
        };
        SeatScore {
            seat,
            realized,
            benchmark,
        }
    });

    Ok(Scorecard {
        contract,
        tricks_made,
        declarer_score,
        par,
        seats,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use parbid_core::Strain;

    fn table_with(entries: &[(Seat, Strain, u8)]) -> TrickTable {
        TrickTable::from_fn(|seat, strain| {
            entries
                .iter()
                .find(|(s, st, _)| *s == seat && *st == strain)
                .map(|(_, _, t)| *t)
                .unwrap_or(0)
        })
    }

    #[test]
    fn test_open_auction_rejected() {
        let auction = Auction::bidding(Seat::North, "1C P");
        let table = TrickTable::new([[0; 5]; 4]);
        assert!(matches!(
            evaluate(&auction, Vulnerability::None, &table),
            Err(SimError::AuctionOpen)
        ));
    }

    #[test]
    fn test_passed_out_scores_zero() {
        let auction = Auction::bidding(Seat::North, "P P P P");
        // Par is nonzero, so the differentials are not, but realized is.
        let table = table_with(&[(Seat::North, Strain::Hearts, 10)]);
        let card = evaluate(&auction, Vulnerability::None, &table).unwrap();
        assert_eq!(card.contract, None);
        assert_eq!(card.declarer_score, 0);
        for s in &card.seats {
            assert_eq!(s.realized, 0);
        }
        assert_eq!(card.seats[Seat::North.idx()].benchmark, 420);
        assert_eq!(card.seats[Seat::East.idx()].benchmark, -420);
        assert_eq!(card.seats[Seat::North.idx()].differential(), -420);
        assert_eq!(card.seats[Seat::East.idx()].fitness(), -420);
    }

    #[test]
    fn test_declaring_side_credited() {
        // North plays 4H making exactly ten tricks: 420 not vulnerable.
        let auction = Auction::bidding(Seat::North, "4H P P P");
        let table = table_with(&[(Seat::North, Strain::Hearts, 10)]);
        let card = evaluate(&auction, Vulnerability::None, &table).unwrap();
        assert_eq!(card.tricks_made, Some(10));
        assert_eq!(card.declarer_score, 420);
        assert_eq!(card.seats[Seat::North.idx()].realized, 420);
        assert_eq!(card.seats[Seat::South.idx()].realized, 420);
        assert_eq!(card.seats[Seat::East.idx()].realized, -420);
        assert_eq!(card.seats[Seat::West.idx()].realized, -420);
        // The auction landed exactly on par.
        for s in &card.seats {
            assert_eq!(s.differential(), 0);
            assert_eq!(s.fitness(), 0);
        }
    }

    #[test]
    fn test_overbid_contract_goes_down() {
        // North overreaches to 6H with only ten tricks available:
        // down two, -100, while par was +420.
        let auction = Auction::bidding(Seat::North, "6H P P P");
        let table = table_with(&[(Seat::North, Strain::Hearts, 10)]);
        let card = evaluate(&auction, Vulnerability::None, &table).unwrap();
        assert_eq!(card.declarer_score, -100);
        let north = card.seats[Seat::North.idx()];
        assert_eq!(north.realized, -100);
        assert_eq!(north.benchmark, 420);
        assert_eq!(north.differential(), -520);
        assert_eq!(north.fitness(), -520);
        let east = card.seats[Seat::East.idx()];
        assert_eq!(east.realized, 100);
        assert_eq!(east.benchmark, -420);
        assert_eq!(east.differential(), 520);
        assert_eq!(east.fitness(), -520);
    }

    #[test]
    fn test_doubled_defense_beats_par() {
        // East doubles North's hopeless 6H: down two doubled is -300,
        // better for the defense than letting par through.
        let auction = Auction::bidding(Seat::North, "6H X P P P");
        let table = table_with(&[(Seat::North, Strain::Hearts, 10)]);
        let card = evaluate(&auction, Vulnerability::None, &table).unwrap();
        assert_eq!(card.declarer_score, -300);
        assert_eq!(card.seats[Seat::East.idx()].realized, 300);
    }

    #[test]
    fn test_vulnerability_follows_declarer() {
        let auction = Auction::bidding(Seat::North, "P 4H P P P");
        // East declares 4H; only East-West vulnerability matters.
        let table = table_with(&[(Seat::East, Strain::Hearts, 10)]);
        let ew = evaluate(&auction, Vulnerability::EW, &table).unwrap();
        assert_eq!(ew.declarer_score, 620);
        let ns = evaluate(&auction, Vulnerability::NS, &table).unwrap();
        assert_eq!(ns.declarer_score, 420);
    }
}
