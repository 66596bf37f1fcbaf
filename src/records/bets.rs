use super::code::Code;
use crate::cards::Stage;

/// One player's action codes within one stage, one code per betting round.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct StageAction {
    pub stage: Stage,
    pub actions: Vec<Code>,
}

impl StageAction {
    /// Decodes a raw stage-action token.
    pub fn decode(stage: Stage, token: &str) -> Result<Self, char> {
        Code::decode(token).map(|actions| Self { stage, actions })
    }
    /// The code played in the given betting round, if any.
    pub fn at(&self, round: usize) -> Option<Code> {
        self.actions.get(round).copied()
    }
    pub fn rounds(&self) -> usize {
        self.actions.len()
    }
}
