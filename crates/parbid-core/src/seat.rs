use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the four positions at the table, in clockwise calling order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Seat {
    #[default]
    North,
    East,
    South,
    West,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    NS,
    EW,
}

impl Seat {
    pub const ALL: [Seat; 4] = [Seat::North, Seat::East, Seat::South, Seat::West];

    pub fn side(self) -> Side {
        match self {
            Seat::North | Seat::South => Side::NS,
            Seat::East | Seat::West => Side::EW,
        }
    }

    pub fn next(self) -> Self {
        match self {
            Seat::North => Seat::East,
            Seat::East => Seat::South,
            Seat::South => Seat::West,
            Seat::West => Seat::North,
        }
    }

    pub fn partner(self) -> Self {
        self.next().next()
    }

    pub fn idx(self) -> usize {
        match self {
            Seat::North => 0,
            Seat::East => 1,
            Seat::South => 2,
            Seat::West => 3,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Seat::North => 'N',
            Seat::East => 'E',
            Seat::South => 'S',
            Seat::West => 'W',
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'N' => Some(Seat::North),
            'E' => Some(Seat::East),
            'S' => Some(Seat::South),
            'W' => Some(Seat::West),
            _ => None,
        }
    }
}

impl fmt::Display for Seat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

impl Side {
    pub fn contains(self, seat: Seat) -> bool {
        seat.side() == self
    }

    pub fn opponent(self) -> Self {
        match self {
            Side::NS => Side::EW,
            Side::EW => Side::NS,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::NS => write!(f, "NS"),
            Side::EW => write!(f, "EW"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Vulnerability {
    #[default]
    None,
    NS,
    EW,
    Both,
}

impl Vulnerability {
    pub const ALL: [Vulnerability; 4] = [
        Vulnerability::None,
        Vulnerability::NS,
        Vulnerability::EW,
        Vulnerability::Both,
    ];

    pub fn is_vulnerable(self, seat: Seat) -> bool {
        match self {
            Vulnerability::None => false,
            Vulnerability::NS => seat.side() == Side::NS,
            Vulnerability::EW => seat.side() == Side::EW,
            Vulnerability::Both => true,
        }
    }
}

impl FromStr for Vulnerability {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" => Ok(Vulnerability::None),
            "ns" => Ok(Vulnerability::NS),
            "ew" => Ok(Vulnerability::EW),
            "both" => Ok(Vulnerability::Both),
            _ => Err(()),
        }
    }
}

impl fmt::Display for Vulnerability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Vulnerability::None => write!(f, "none"),
            Vulnerability::NS => write!(f, "NS"),
            Vulnerability::EW => write!(f, "EW"),
            Vulnerability::Both => write!(f, "both"),
        }
    }
}
