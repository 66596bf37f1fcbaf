use super::failure::Failure;
use super::failure::Rejection;
use super::layout::Layout;
use super::line::Line;
use crate::records::HandId;

/// The players dealt into one hand, in seat order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Roster {
    pub id: HandId,
    pub users: Vec<String>,
}

/// Parses one roster line: `local count user user ...`.
///
/// Seats follow list order starting from 1. The count token is skipped;
/// the hand database's player count is the one enforced once the join
/// completes.
pub fn parse(layout: &Layout, raw: &str) -> Option<Result<Roster, Rejection>> {
    let line = Line::split(raw)?;
    let id = layout.id(line.token(0)?);
    Some(build(layout, &line, id.clone()).map_err(|failure| Rejection::new(id, failure)))
}

fn build(layout: &Layout, line: &Line, id: HandId) -> Result<Roster, Failure> {
    let users = line
        .tail(2)
        .iter()
        .map(|user| layout.user(user))
        .collect::<Vec<String>>();
    match users.is_empty() {
        true => Err(Failure::structural("roster lists no players")),
        false => Ok(Roster { id, users }),
    }
}
