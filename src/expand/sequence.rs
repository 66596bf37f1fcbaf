use super::event::ActionEvent;
use super::role::Role;
use crate::Position;
use crate::cards::Stage;
use crate::join::Failure;
use crate::records::Code;
use crate::records::HandRecord;
use crate::records::StageAction;

/// A code played by a seat, placed in the hand's global order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Turn {
    pub seat: Position,
    pub stage: Stage,
    pub round: usize,
    pub code: Code,
}

impl Turn {
    pub fn event(&self) -> ActionEvent {
        ActionEvent::new(Role::assign(self.seat), self.stage, self.code)
    }
}

/// Interleaves per-seat action strings into chronological order.
///
/// `seats[i]` holds the four stored bet slots of seat `i + 1`, read
/// positionally as preflop, flop, turn, river. Within a stage, every seat
/// acts once per betting round in seat order; a seat with no code at a
/// round (folded, or already all-in) is skipped for that round.
pub fn interleave(seats: &[&[StageAction]]) -> Result<Vec<Turn>, Failure> {
    if let Some((i, slots)) = seats
        .iter()
        .enumerate()
        .find(|(_, slots)| slots.len() != Stage::betting().len())
    {
        return Err(Failure::structural(format!(
            "seat {} has {} bet slots",
            i + 1,
            slots.len()
        )));
    }
    let mut turns = Vec::new();
    for (slot, stage) in Stage::betting().into_iter().enumerate() {
        let rounds = seats
            .iter()
            .map(|slots| slots[slot].rounds())
            .max()
            .unwrap_or(0);
        for round in 0..rounds {
            for (i, slots) in seats.iter().enumerate() {
                if let Some(code) = slots[slot].at(round) {
                    turns.push(Turn {
                        seat: i + 1,
                        stage,
                        round,
                        code,
                    });
                }
            }
        }
    }
    Ok(turns)
}

/// Reconstructs the turn order of a joined hand, seats 1 through N.
pub fn reconstruct(hand: &HandRecord) -> Result<Vec<Turn>, Failure> {
    let seats = (1..=hand.num_players)
        .map(|seat| {
            hand.player(seat)
                .map(|p| p.bets.as_slice())
                .ok_or_else(|| Failure::lookup(format!("no player at seat {}", seat)))
        })
        .collect::<Result<Vec<&[StageAction]>, Failure>>()?;
    interleave(&seats)
}
