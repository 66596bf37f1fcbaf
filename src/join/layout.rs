use crate::records::HandId;
use std::path::Path;

/// Naming configuration for one session, passed explicitly to the joiner.
///
/// Sessions live at `<game>/<session>/` once an archive is unpacked, and
/// every hand identifier is prefixed with both names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    pub game: String,
    pub session: String,
    /// Replace `|` with `_` in roster usernames, matching action-log file
    /// names on filesystems that reject `|`.
    pub sanitize: bool,
}

impl Layout {
    pub fn new(game: &str, session: &str) -> Self {
        Self {
            game: game.to_string(),
            session: session.to_string(),
            sanitize: false,
        }
    }
    pub fn sanitized(self, sanitize: bool) -> Self {
        Self { sanitize, ..self }
    }
    /// Derives game and session names from a session directory path.
    pub fn from_dir(dir: &Path) -> Option<Self> {
        let session = dir.file_name()?.to_str()?;
        let game = dir.parent()?.file_name()?.to_str()?;
        Some(Self::new(game, session))
    }
    pub fn id(&self, local: &str) -> HandId {
        HandId::new(&self.game, &self.session, local)
    }
    pub fn user(&self, raw: &str) -> String {
        if self.sanitize {
            raw.replace('|', "_")
        } else {
            raw.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_session_dir() {
        let layout = Layout::from_dir(Path::new("IRCdata/holdem/199505")).unwrap();
        assert!(layout.game == "holdem");
        assert!(layout.session == "199505");
        assert!(layout.id("000042").as_str() == "holdem_199505_000042");
    }

    #[test]
    fn from_bare_dir() {
        assert!(Layout::from_dir(Path::new("199505")).is_none());
    }

    #[test]
    fn sanitize_users() {
        let layout = Layout::new("holdem", "199505");
        assert!(layout.user("a|b") == "a|b");
        assert!(layout.sanitized(true).user("a|b") == "a_b");
    }
}
