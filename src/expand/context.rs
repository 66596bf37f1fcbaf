use super::role::Role;
use crate::Chips;
use crate::Position;
use crate::cards::Card;
use crate::cards::Stage;
use crate::join::Failure;
use crate::records::HandRecord;
use std::collections::BTreeMap;

/// What the acting seat can observe when it decides.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Context {
    pub num_players: usize,
    pub position: Position,
    pub role: Role,
    pub bankroll: BTreeMap<Role, Chips>,
    pub pocket_cards: Vec<Card>,
    pub board: Vec<Card>,
}

impl Context {
    /// Observes `hand` from `seat` as it decides in `stage`.
    pub fn observe(hand: &HandRecord, seat: Position, stage: Stage) -> Result<Self, Failure> {
        let player = hand
            .player(seat)
            .ok_or_else(|| Failure::lookup(format!("no player at seat {}", seat)))?;
        Ok(Self {
            num_players: hand.num_players,
            position: seat,
            role: Role::assign(seat),
            bankroll: bankrolls(hand)?,
            pocket_cards: player.pocket_cards.clone(),
            board: hand.board(stage.visible()).to_vec(),
        })
    }
}

/// Every seated player's bankroll, keyed by role.
pub fn bankrolls(hand: &HandRecord) -> Result<BTreeMap<Role, Chips>, Failure> {
    hand.players
        .values()
        .map(|p| {
            p.bankroll
                .map(|chips| (Role::assign(p.pos), chips))
                .ok_or_else(|| Failure::lookup(format!("no bankroll for {}", p.user)))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::join::Joiner;
    use crate::join::Layout;

    fn hand() -> HandRecord {
        let mut joiner = Joiner::new(Layout::new("holdem", "199505"));
        let hdb = "000001 1 1 3 3/60 2/100 2/100 2/100 As Kd Qh Jc Ts";
        let roster = "000001 3 alice bob carol";
        joiner.hdb(hdb.as_bytes()).unwrap();
        joiner.roster(roster.as_bytes()).unwrap();
        let logs = [
            ("alice", "alice 000001 3 1 Bc k k k 800 50 -50"),
            ("bob", "bob 000001 3 2 Bk b b b 1200 50 100 Ah Ad"),
            ("carol", "carol 000001 3 3 f - - - 400 0 0"),
        ];
        for (user, line) in logs {
            joiner.actions(user, line.as_bytes()).unwrap();
        }
        let joined = joiner.finish();
        assert!(joined.invalid.is_empty());
        joined.hands.into_values().next().unwrap()
    }

    #[test]
    fn observe_preflop() {
        let context = Context::observe(&hand(), 2, Stage::Pref).unwrap();
        assert!(context.num_players == 3);
        assert!(context.position == 2);
        assert!(context.role == Role::BigBlind);
        assert!(context.pocket_cards == Card::parse(["Ah", "Ad"]).unwrap());
        assert!(context.board.is_empty());
        assert!(context.bankroll[&Role::SmallBlind] == 800);
        assert!(context.bankroll[&Role::BigBlind] == 1200);
        assert!(context.bankroll[&Role::Position(3)] == 400);
    }

    #[test]
    fn board_by_stage() {
        let hand = hand();
        let board = |stage| Context::observe(&hand, 1, stage).unwrap().board.len();
        assert!(board(Stage::Pref) == 0);
        assert!(board(Stage::Flop) == 4);
        assert!(board(Stage::Turn) == 5);
        assert!(board(Stage::Rive) == 5);
        assert!(board(Stage::Show) == 5);
    }

    #[test]
    fn missing_seat() {
        let result = Context::observe(&hand(), 4, Stage::Flop);
        assert!(matches!(result, Err(Failure::Lookup(_))));
    }

    #[test]
    fn serialized_shape() {
        let context = Context::observe(&hand(), 3, Stage::Flop).unwrap();
        let json = serde_json::to_value(context).unwrap();
        assert!(
            json == serde_json::json!({
                "num_players": 3,
                "position": 3,
                "role": "position 3",
                "bankroll": {
                    "small blind": 800,
                    "big blind": 1200,
                    "position 3": 400,
                },
                "pocket_cards": [],
                "board": ["As", "Kd", "Qh", "Jc"],
            })
        );
    }
}
