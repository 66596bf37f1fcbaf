use super::id::HandId;
use super::player::PlayerRecord;
use super::pot::Pot;
use crate::Position;
use crate::cards::Card;
use std::collections::BTreeMap;

/// A fully merged hand: the hand database line, its roster line, and one
/// action-log line per seated player.
///
/// Players are keyed by seat, starting from 1. Once the join completes,
/// `num_players` equals the number of players and `pots` holds exactly one
/// pot per tagged stage (flop, turn, river, showdown).
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct HandRecord {
    pub id: HandId,
    pub game: String,
    pub dealer: Position,
    pub hand_num: u64,
    pub num_players: usize,
    pub pots: Vec<Pot>,
    pub board: Vec<Card>,
    #[serde(default)]
    pub players: BTreeMap<Position, PlayerRecord>,
}

impl HandRecord {
    pub fn player(&self, seat: Position) -> Option<&PlayerRecord> {
        self.players.get(&seat)
    }
    pub fn find_mut(&mut self, user: &str) -> Option<&mut PlayerRecord> {
        self.players.values_mut().find(|p| p.user == user)
    }
    /// Seats players in roster order, replacing any previous roster.
    pub fn seat<I>(&mut self, users: I)
    where
        I: IntoIterator<Item = String>,
    {
        self.players = users
            .into_iter()
            .enumerate()
            .map(|(i, user)| (i + 1, PlayerRecord::seated(user, i + 1)))
            .collect();
    }
    /// The board as seen by a player, truncated to `n` tokens if given.
    pub fn board(&self, n: Option<usize>) -> &[Card] {
        match n {
            Some(n) => &self.board[..n.min(self.board.len())],
            None => &self.board[..],
        }
    }
}

impl std::fmt::Display for HandRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(f, "{:>7} : {}", "id", self.id)?;
        writeln!(f, "{:>7} : {} #{}", "game", self.game, self.hand_num)?;
        writeln!(
            f,
            "{:>7} : {}",
            "board",
            self.board
                .iter()
                .map(|c| c.to_string())
                .collect::<Vec<_>>()
                .join(" ")
        )?;
        writeln!(
            f,
            "{:>7} : {}",
            "pots",
            self.pots
                .iter()
                .map(|p| p.to_string())
                .collect::<Vec<_>>()
                .join(" ")
        )?;
        for player in self.players.values() {
            let dealer = if player.pos == self.dealer { "D" } else { " " };
            writeln!(f, "{:>7} {} {}", "", dealer, player)?;
        }
        Ok(())
    }
}
