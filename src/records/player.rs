use super::bets::StageAction;
use crate::Chips;
use crate::Position;
use crate::cards::Card;

/// One action-log line: everything a player's own log adds to a hand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Activity {
    pub pos: Position,
    pub bets: [StageAction; 4],
    pub bankroll: Chips,
    pub action: i64,
    pub winnings: Chips,
    pub pocket_cards: Vec<Card>,
}

/// A seated player within one hand.
///
/// The roster supplies the username and seat; the per-player action log
/// fills in the rest. Until then the log-derived fields are empty.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PlayerRecord {
    pub user: String,
    pub pos: Position,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bankroll: Option<Chips>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub winnings: Option<Chips>,
    #[serde(default)]
    pub pocket_cards: Vec<Card>,
    #[serde(default)]
    pub bets: Vec<StageAction>,
}

impl PlayerRecord {
    pub fn seated(user: String, pos: Position) -> Self {
        Self {
            user,
            pos,
            bankroll: None,
            action: None,
            winnings: None,
            pocket_cards: Vec::new(),
            bets: Vec::new(),
        }
    }
    pub fn attach(&mut self, activity: Activity) {
        self.pos = activity.pos;
        self.bets = activity.bets.to_vec();
        self.bankroll = Some(activity.bankroll);
        self.action = Some(activity.action);
        self.winnings = Some(activity.winnings);
        self.pocket_cards = activity.pocket_cards;
    }
    /// True once the player's action log line has been merged in.
    pub fn is_attached(&self) -> bool {
        self.bankroll.is_some()
    }
}

impl std::fmt::Display for PlayerRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "#{} {:<12}", self.pos, self.user)?;
        match (self.bankroll, self.winnings) {
            (Some(bankroll), Some(winnings)) => write!(f, " {:>8} {:>+8}", bankroll, winnings)?,
            _ => write!(f, " {:>8} {:>8}", "?", "?")?,
        }
        let cards = self
            .pocket_cards
            .iter()
            .map(|c| c.to_string())
            .collect::<Vec<_>>()
            .join(" ");
        let bets = self
            .bets
            .iter()
            .map(|b| b.actions.iter().map(|c| c.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join(" ");
        write!(f, " [{:<5}] {}", cards, bets)
    }
}
