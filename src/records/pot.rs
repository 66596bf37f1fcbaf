use crate::Chips;
use crate::cards::Stage;

/// Pot snapshot at the end of a stage: contributing players and chips.
///
/// A descriptor that does not parse still yields a pot carrying its stage,
/// so every hand keeps four pots in stage order.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Pot {
    pub stage: Stage,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_players: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<Chips>,
}

impl Pot {
    pub fn placeholder(stage: Stage) -> Self {
        Self {
            stage,
            num_players: None,
            size: None,
        }
    }
    /// Parses a `players/size` descriptor.
    pub fn parse(stage: Stage, token: &str) -> Option<Self> {
        let (players, size) = token.split_once('/')?;
        Some(Self {
            stage,
            num_players: Some(players.parse().ok()?),
            size: Some(size.parse().ok()?),
        })
    }
}

impl std::fmt::Display for Pot {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match (self.num_players, self.size) {
            (Some(n), Some(size)) => write!(f, "{}:{}/{}", self.stage.symbol(), n, size),
            _ => write!(f, "{}:?", self.stage.symbol()),
        }
    }
}
