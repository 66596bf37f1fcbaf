use crate::Position;

/// Semantic seat label relative to the blinds.
///
/// Seat 1 posts the small blind and seat 2 the big blind. Heads-up tables
/// only have those two seats, so one rule covers every table size; later
/// seats are named by position.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Role {
    SmallBlind,
    BigBlind,
    Position(Position),
}

impl Role {
    pub fn assign(seat: Position) -> Self {
        match seat {
            1 => Self::SmallBlind,
            2 => Self::BigBlind,
            n => Self::Position(n),
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::SmallBlind => write!(f, "small blind"),
            Self::BigBlind => write!(f, "big blind"),
            Self::Position(n) => write!(f, "position {}", n),
        }
    }
}

/// Serialized by name, which also lets roles key JSON objects.
impl serde::Serialize for Role {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}
