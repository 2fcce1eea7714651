pub mod auction;
pub mod call;
pub mod card;
pub mod contract;
pub mod deal;
pub mod hand;
pub mod par;
pub mod scoring;
pub mod seat;
pub mod strain;

pub use auction::{Auction, AuctionError};
pub use call::Call;
pub use card::{Card, Rank, Suit};
pub use contract::{Contract, Doubling};
pub use deal::{Deal, DealError};
pub use hand::Hand;
pub use par::{par_contract, ParContract, TrickTable};
pub use scoring::{score, ScoreError};
pub use seat::{Seat, Side, Vulnerability};
pub use strain::Strain;
