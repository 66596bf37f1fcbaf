/// Composite hand identifier `<game>_<session>_<local>`.
///
/// The local hand number repeats across sessions, so the game and session
/// names are folded in to keep the identifier unique within an archive.
#[derive(Debug, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct HandId(String);

impl HandId {
    pub fn new(game: &str, session: &str, local: &str) -> Self {
        Self(format!("{}_{}_{}", game, session, local))
    }
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for HandId {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn composite() {
        let id = HandId::new("holdem", "199505", "000001");
        assert!(id.as_str() == "holdem_199505_000001");
        assert!(serde_json::to_string(&id).unwrap() == "\"holdem_199505_000001\"");
    }
}
