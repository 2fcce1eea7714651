use crate::strain::Strain;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A single call in the auction. The derived ordering ranks bids by
/// (level, strain); Pass/Double/Redouble sort below all bids and are never
/// compared for height, since their legality follows separate rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Call {
    Pass,
    Double,
    Redouble,
    Bid { level: u8, strain: Strain },
}

impl Call {
    pub fn is_bid(&self) -> bool {
        matches!(self, Call::Bid { .. })
    }

    pub fn level(&self) -> Option<u8> {
        match self {
            Call::Bid { level, .. } => Some(*level),
            _ => None,
        }
    }

    pub fn strain(&self) -> Option<Strain> {
        match self {
            Call::Bid { strain, .. } => Some(*strain),
            _ => None,
        }
    }

    pub fn render(self) -> String {
        match self {
            Call::Pass => "P".to_string(),
            Call::Double => "X".to_string(),
            Call::Redouble => "XX".to_string(),
            Call::Bid { level, strain } => format!("{}{}", level, strain.to_char()),
        }
    }
}

impl FromStr for Call {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_ascii_uppercase();
        match s.as_str() {
            "P" | "PASS" => return Ok(Call::Pass),
            "X" | "DBL" | "DOUBLE" => return Ok(Call::Double),
            "XX" | "RDBL" | "REDOUBLE" => return Ok(Call::Redouble),
            _ => {}
        }
        let mut chars = s.chars();
        let level = chars.next().and_then(|c| c.to_digit(10)).ok_or(())? as u8;
        if !(1..=7).contains(&level) {
            return Err(());
        }
        let strain = chars.next().and_then(Strain::from_char).ok_or(())?;
        Ok(Call::Bid { level, strain })
    }
}

impl fmt::Display for Call {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_call_parsing() {
        assert_eq!("P".parse(), Ok(Call::Pass));
        assert_eq!("pass".parse(), Ok(Call::Pass));
        assert_eq!("X".parse(), Ok(Call::Double));
        assert_eq!("XX".parse(), Ok(Call::Redouble));
        assert_eq!(
            "1C".parse(),
            Ok(Call::Bid {
                level: 1,
                strain: Strain::Clubs
            })
        );
        assert_eq!(
            "7n".parse(),
            Ok(Call::Bid {
                level: 7,
                strain: Strain::NoTrump
            })
        );
        assert_eq!("0C".parse::<Call>(), Err(()));
        assert_eq!("8C".parse::<Call>(), Err(()));
        assert_eq!("zzz".parse::<Call>(), Err(()));
    }

    #[test]
    fn test_bid_ordering() {
        let b = |s: &str| s.parse::<Call>().unwrap();
        assert!(b("1C") < b("1D"));
        assert!(b("1N") < b("2C"));
        assert!(b("7S") < b("7N"));
    }

    #[test]
    fn test_render() {
        assert_eq!(Call::Pass.render(), "P");
        assert_eq!(Call::Redouble.render(), "XX");
        assert_eq!("4H".parse::<Call>().unwrap().render(), "4H");
    }
}
