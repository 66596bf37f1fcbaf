use super::failure::Failure;
use super::failure::Rejection;
use super::layout::Layout;
use super::line::Line;
use crate::cards::Card;
use crate::cards::Stage;
use crate::records::Activity;
use crate::records::HandId;
use crate::records::StageAction;

/// User, local id, player count, position, four stage actions, then
/// bankroll, cumulative action, and winnings.
const FIXED: usize = 11;
/// Pocket cards are only recorded when exactly two trailing tokens remain.
const SHOWN: usize = FIXED + 2;

/// One action-log line, addressed to a hand and a roster player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contribution {
    pub id: HandId,
    pub user: String,
    pub activity: Activity,
}

/// The username an action-log file belongs to, from its `pdb.<user>` name.
pub fn username(file: &str) -> Option<&str> {
    file.strip_prefix("pdb.")
        .or_else(|| file.rsplit_once('.').map(|(_, user)| user))
        .filter(|user| !user.is_empty())
}

/// Parses one line of `user`'s action log:
///
/// `user local count pos pre flop turn river bankroll action winnings [card card]`
///
/// Each stage-action token is decoded per character into betting rounds.
pub fn parse(layout: &Layout, user: &str, raw: &str) -> Option<Result<Contribution, Rejection>> {
    let line = Line::split(raw)?;
    let id = layout.id(line.token(1)?);
    Some(
        build(&line)
            .map(|activity| Contribution {
                id: id.clone(),
                user: user.to_string(),
                activity,
            })
            .map_err(|failure| Rejection::new(id, failure)),
    )
}

fn build(line: &Line) -> Result<Activity, Failure> {
    line.least(FIXED)?;
    let bets = decode(line.range(4, 8))?;
    let pocket_cards = match line.len() {
        SHOWN => Card::parse(line.tail(FIXED).iter().copied())
            .map_err(|e| Failure::structural(format!("pocket cards: {}", e)))?,
        _ => Vec::new(),
    };
    Ok(Activity {
        pos: line.numeric(3, "position")?,
        bets,
        bankroll: line.numeric(8, "bankroll")?,
        action: line.numeric(9, "action")?,
        winnings: line.numeric(10, "winnings")?,
        pocket_cards,
    })
}

fn decode(tokens: &[&str]) -> Result<[StageAction; 4], Failure> {
    let [a, b, c, d] = Stage::tagged();
    let slot = |stage: Stage, i: usize| {
        StageAction::decode(stage, tokens[i])
            .map_err(|code| Failure::structural(format!("unknown action code: {}", code)))
    };
    Ok([slot(a, 0)?, slot(b, 1)?, slot(c, 2)?, slot(d, 3)?])
}
