use super::context::Context;
use super::event::ActionEvent;
use super::sequence;
use crate::join::Failure;
use crate::records::HandRecord;
use std::collections::BTreeMap;

/// One supervised step: the observable state, everything that already
/// happened in the hand, and the action to predict.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct TrainingExample {
    pub context: Context,
    /// Prior events keyed from 1, local to the hand.
    pub action_history: BTreeMap<usize, ActionEvent>,
    pub next_action: ActionEvent,
}

/// Pairs each event with its context and the events strictly before it.
pub fn prefixes(events: &[ActionEvent], contexts: Vec<Context>) -> Vec<TrainingExample> {
    events
        .iter()
        .zip(contexts)
        .enumerate()
        .map(|(i, (event, context))| TrainingExample {
            context,
            action_history: events[..i]
                .iter()
                .enumerate()
                .map(|(j, prior)| (j + 1, *prior))
                .collect(),
            next_action: *event,
        })
        .collect()
}

/// Expands a joined hand into one example per action, or fails as a whole.
pub fn expand(hand: &HandRecord) -> Result<Vec<TrainingExample>, Failure> {
    let turns = sequence::reconstruct(hand)?;
    let contexts = turns
        .iter()
        .map(|turn| Context::observe(hand, turn.seat, turn.stage))
        .collect::<Result<Vec<Context>, Failure>>()?;
    let events = turns.iter().map(|turn| turn.event()).collect::<Vec<_>>();
    Ok(prefixes(&events, contexts))
}
