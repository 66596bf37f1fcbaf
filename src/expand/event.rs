use super::role::Role;
use crate::cards::Stage;
use crate::records::Code;

/// One atomic step of a reconstructed hand: who acted, when, and how.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionEvent {
    pub role: Role,
    pub stage: Stage,
    pub action: Code,
}

impl ActionEvent {
    pub fn new(role: Role, stage: Stage, action: Code) -> Self {
        Self {
            role,
            stage,
            action,
        }
    }
}

/// `{"role": "big blind", "stage": "flop", "action": "check"}`
impl serde::Serialize for ActionEvent {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut state = serializer.serialize_struct("ActionEvent", 3)?;
        state.serialize_field("role", &self.role)?;
        state.serialize_field("stage", self.stage.label())?;
        state.serialize_field("action", self.action.label())?;
        state.end()
    }
}

impl std::fmt::Display for ActionEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} {} {}", self.stage, self.role, self.action.label())
    }
}
