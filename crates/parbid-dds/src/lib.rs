//! Reference trick-potential oracle: solves a deal double-dummy with the
//! `dds-bridge` bindings and packs the result into a `TrickTable`.

use dds_bridge::contract::Strain as DdsStrain;
use dds_bridge::deal::{Deal as DdsDeal, Seat as DdsSeat, SmallSet, Suit as DdsSuit};
use dds_bridge::solver::{self, StrainFlags};
use parbid_core::{Deal, Rank, Seat, Strain, Suit, TrickTable};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SolveError {
    #[error("double dummy solver failed: {0}")]
    Solver(String),
}

/// Compute the full 4x5 double-dummy table for a deal.
pub fn solve(deal: &Deal) -> Result<TrickTable, SolveError> {
    let mut dds_deal = DdsDeal::default();
    for seat in Seat::ALL {
        let dds_seat = to_dds_seat(seat);
        for card in &deal.hand(seat).cards {
            let rank = match card.rank {
                Rank::Two => 2,
                Rank::Three => 3,
                Rank::Four => 4,
                Rank::Five => 5,
                Rank::Six => 6,
                Rank::Seven => 7,
                Rank::Eight => 8,
                Rank::Nine => 9,
                Rank::Ten => 10,
                Rank::Jack => 11,
                Rank::Queen => 12,
                Rank::King => 13,
                Rank::Ace => 14,
            };
            dds_deal[dds_seat][to_dds_suit(card.suit)].insert(rank);
        }
    }

    let tables = solver::solve_deals(&[dds_deal], StrainFlags::all())
        .map_err(|e| SolveError::Solver(format!("{e:?}")))?;
    let table = tables[0];

    Ok(TrickTable::from_fn(|seat, strain| {
        u32::from(table[to_dds_strain(strain)].get(to_dds_seat(seat))) as u8
    }))
}

fn to_dds_seat(seat: Seat) -> DdsSeat {
    match seat {
        Seat::North => DdsSeat::North,
        Seat::East => DdsSeat::East,
        Seat::South => DdsSeat::South,
        Seat::West => DdsSeat::West,
    }
}

fn to_dds_suit(suit: Suit) -> DdsSuit {
    match suit {
        Suit::Clubs => DdsSuit::Clubs,
        Suit::Diamonds => DdsSuit::Diamonds,
        Suit::Hearts => DdsSuit::Hearts,
        Suit::Spades => DdsSuit::Spades,
    }
}

fn to_dds_strain(strain: Strain) -> DdsStrain {
    match strain {
        Strain::Clubs => DdsStrain::Clubs,
        Strain::Diamonds => DdsStrain::Diamonds,
        Strain::Hearts => DdsStrain::Hearts,
        Strain::Spades => DdsStrain::Spades,
        Strain::NoTrump => DdsStrain::Notrump,
    }
}
