use super::failure::Failure;
use super::failure::Rejection;
use super::layout::Layout;
use super::line::Line;
use crate::cards::Card;
use crate::cards::Stage;
use crate::records::HandId;
use crate::records::HandRecord;
use crate::records::Pot;
use std::collections::BTreeMap;

/// Local id, dealer, hand number, player count, then four pots.
const FIXED: usize = 8;

/// A hand database line that produced a record.
///
/// Malformed pot descriptors do not stop the record from being built; they
/// are carried as defects so the joiner can mark the hand invalid.
#[derive(Debug, Clone)]
pub struct Entry {
    pub hand: HandRecord,
    pub defects: Vec<Failure>,
}

/// Parses one hand database line:
///
/// `local dealer hand_num num_players f_pot t_pot r_pot s_pot board...`
///
/// where each pot is `players/size` and the board is zero to five cards.
pub fn parse(layout: &Layout, raw: &str) -> Option<Result<Entry, Rejection>> {
    let line = Line::split(raw)?;
    let local = line.token(0)?;
    let id = layout.id(local);
    Some(build(layout, &line, id.clone()).map_err(|failure| Rejection::new(id, failure)))
}

fn build(layout: &Layout, line: &Line, id: HandId) -> Result<Entry, Failure> {
    line.least(FIXED)?;
    let mut defects = Vec::new();
    let pots = Stage::tagged()
        .into_iter()
        .zip(line.range(4, FIXED))
        .map(|(stage, token)| match Pot::parse(stage, token) {
            Some(pot) => pot,
            None => {
                defects.push(Failure::structural(format!(
                    "malformed {} pot: {}",
                    stage, token
                )));
                Pot::placeholder(stage)
            }
        })
        .collect::<Vec<Pot>>();
    let board = Card::parse(line.tail(FIXED).iter().copied())
        .map_err(|e| Failure::structural(format!("board: {}", e)))?;
    let hand = HandRecord {
        id,
        game: layout.game.clone(),
        dealer: line.numeric(1, "dealer")?,
        hand_num: line.numeric(2, "hand number")?,
        num_players: line.numeric(3, "player count")?,
        pots,
        board,
        players: BTreeMap::new(),
    };
    Ok(Entry { hand, defects })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> Layout {
        Layout::new("holdem", "199505")
    }

    #[test]
    fn parse_line() {
        let entry = parse(&layout(), "000001 1 1 2 2/100 2/200 0/0 0/0 As Kd Qh")
            .unwrap()
            .unwrap();
        assert!(entry.defects.is_empty());
        assert!(entry.hand.id.as_str() == "holdem_199505_000001");
        assert!(entry.hand.game == "holdem");
        assert!(entry.hand.dealer == 1);
        assert!(entry.hand.hand_num == 1);
        assert!(entry.hand.num_players == 2);
        assert!(entry.hand.pots.len() == 4);
        assert!(entry.hand.pots[1].size == Some(200));
        assert!(entry.hand.pots[3].stage == Stage::Show);
        assert!(entry.hand.board == Card::parse(["As", "Kd", "Qh"]).unwrap());
    }

    #[test]
    fn preflop_fold_has_no_board() {
        let entry = parse(&layout(), "000002 2 2 3 0/0 0/0 0/0 0/0").unwrap().unwrap();
        assert!(entry.hand.board.is_empty());
    }

    #[test]
    fn malformed_pot_keeps_placeholder() {
        let entry = parse(&layout(), "000003 1 3 2 2/100 oops 0/0 0/0 As Kd Qh")
            .unwrap()
            .unwrap();
        assert!(entry.defects.len() == 1);
        assert!(entry.hand.pots.len() == 4);
        assert!(entry.hand.pots[1] == Pot::placeholder(Stage::Turn));
        assert!(entry.hand.pots[2].size == Some(0));
    }

    #[test]
    fn short_line_rejected() {
        let rejection = parse(&layout(), "000004 1 4 2 2/100").unwrap().unwrap_err();
        assert!(rejection.id.as_str() == "holdem_199505_000004");
        assert!(matches!(rejection.failure, Failure::Structural(_)));
    }

    #[test]
    fn non_numeric_rejected() {
        let rejection = parse(&layout(), "000005 x 5 2 2/100 2/200 0/0 0/0")
            .unwrap()
            .unwrap_err();
        assert!(matches!(rejection.failure, Failure::Structural(_)));
    }

    #[test]
    fn bad_card_rejected() {
        assert!(parse(&layout(), "000006 1 6 2 2/100 2/200 0/0 0/0 As ?? Qh")
            .unwrap()
            .is_err());
    }

    #[test]
    fn blank_skipped() {
        assert!(parse(&layout(), "  ").is_none());
    }
}
