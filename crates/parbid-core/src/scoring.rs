use crate::contract::Doubling;
use crate::strain::Strain;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ScoreError {
    #[error("invalid contract: level {0} is outside 1..=7")]
    InvalidContract(u8),
}

// Undertrick penalties for doubled and redoubled contracts, indexed by
// (tricks short - 1). The schedule stops being arithmetic after the third
// undertrick, so it is kept as data rather than a formula.
const DOUBLED_NOT_VULNERABLE: [i32; 13] = [
    100, 300, 500, 800, 1100, 1400, 1700, 2000, 2300, 2600, 2900, 3200, 3500,
];
const DOUBLED_VULNERABLE: [i32; 13] = [
    200, 500, 800, 1100, 1400, 1700, 2000, 2300, 2600, 2900, 3200, 3500, 3800,
];
const REDOUBLED_NOT_VULNERABLE: [i32; 13] = [
    200, 600, 1000, 1600, 2200, 2800, 3400, 4000, 4600, 5200, 5800, 6400, 7000,
];
const REDOUBLED_VULNERABLE: [i32; 13] = [
    400, 1000, 1600, 2200, 2800, 3400, 4000, 4600, 5200, 5800, 6400, 7000, 7600,
];

/// Duplicate score for one contract, signed from the declaring side's
/// point of view. `tricks_made` is taken at face value; callers constrain
/// it to a physically possible count upstream.
pub fn score(
    level: u8,
    strain: Strain,
    doubling: Doubling,
    vulnerable: bool,
    tricks_made: u8,
) -> Result<i32, ScoreError> {
    if !(1..=7).contains(&level) {
        return Err(ScoreError::InvalidContract(level));
    }
    let tricks_needed = level + 6;
    if tricks_made >= tricks_needed {
        Ok(made_score(level, strain, doubling, vulnerable, tricks_made))
    } else {
        Ok(undertrick_penalty(
            tricks_needed,
            tricks_made,
            doubling,
            vulnerable,
        ))
    }
}

/// Points per trick over book: 20 for the minors, 30 for majors and
/// no-trump (the extra 10 for the first no-trump trick is added separately).
fn trick_value(strain: Strain) -> i32 {
    match strain {
        Strain::Clubs | Strain::Diamonds => 20,
        Strain::Hearts | Strain::Spades | Strain::NoTrump => 30,
    }
}

fn made_score(level: u8, strain: Strain, doubling: Doubling, vulnerable: bool, made: u8) -> i32 {
    let trick = trick_score(level, strain, doubling, vulnerable, made);
    let game = game_bonus(level, strain, doubling, vulnerable);
    let slam = slam_bonus(level, vulnerable);
    let part = if game == 0 && slam == 0 { 50 } else { 0 };
    trick + doubling.insult() + game + slam + part
}

fn trick_score(level: u8, strain: Strain, doubling: Doubling, vulnerable: bool, made: u8) -> i32 {
    let needed = i32::from(level) + 6;
    let made = i32::from(made);
    let mult = doubling.multiplier();

    // Undoubled contracts count every trick over book at face value.
    // Doubled and redoubled contracts count only the contracted tricks at
    // the multiplied rate and price each overtrick at a flat premium.
    let (tricks, overtricks) = match doubling {
        Doubling::Undoubled => (made, 0),
        Doubling::Doubled | Doubling::Redoubled => (needed, made - needed),
    };
    let overtrick_value = if vulnerable { 100 } else { 50 };

    let mut score = trick_value(strain) * (tricks - 6) * mult + overtricks * overtrick_value * mult;
    if strain == Strain::NoTrump {
        // The first no-trump trick is worth 40.
        score += 10 * mult;
    }
    score
}

/// 300 (500 vulnerable) when the contracted tricks alone are worth 100+
/// points. Doubling counts toward the threshold; overtricks never do.
fn game_bonus(level: u8, strain: Strain, doubling: Doubling, vulnerable: bool) -> i32 {
    let mult = doubling.multiplier();
    let mut bid_score = i32::from(level) * trick_value(strain) * mult;
    if strain == Strain::NoTrump {
        bid_score += 10 * mult;
    }
    if bid_score >= 100 {
        if vulnerable {
            500
        } else {
            300
        }
    } else {
        0
    }
}

fn slam_bonus(level: u8, vulnerable: bool) -> i32 {
    match level + 6 {
        12 => {
            if vulnerable {
                750
            } else {
                500
            }
        }
        13 => {
            if vulnerable {
                1500
            } else {
                1000
            }
        }
        _ => 0,
    }
}

fn undertrick_penalty(needed: u8, made: u8, doubling: Doubling, vulnerable: bool) -> i32 {
    let short = usize::from(needed - made);
    match doubling {
        Doubling::Undoubled => {
            let per_trick = if vulnerable { 100 } else { 50 };
            -(short as i32) * per_trick
        }
        Doubling::Doubled => {
            let table = if vulnerable {
                &DOUBLED_VULNERABLE
            } else {
                &DOUBLED_NOT_VULNERABLE
            };
            -table[short - 1]
        }
        Doubling::Redoubled => {
            let table = if vulnerable {
                &REDOUBLED_VULNERABLE
            } else {
                &REDOUBLED_NOT_VULNERABLE
            };
            -table[short - 1]
        }
    }
}
