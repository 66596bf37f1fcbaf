/// The betting phases of an IRC hold'em hand.
///
/// The hand database tracks one pot per post-preflop stage, including a
/// showdown pot, so there are five stages even though no betting occurs
/// after the river.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Stage {
    Pref = 0isize,
    Flop = 1isize,
    Turn = 2isize,
    Rive = 3isize,
    Show = 4isize,
}

impl Stage {
    /// Stages that own a pot descriptor and a stored bet slot, in order.
    pub const fn tagged() -> [Self; 4] {
        [Self::Flop, Self::Turn, Self::Rive, Self::Show]
    }
    /// Stages in which players act, in order.
    pub const fn betting() -> [Self; 4] {
        [Self::Pref, Self::Flop, Self::Turn, Self::Rive]
    }
    /// Single-character tag used in hand records.
    pub const fn symbol(&self) -> char {
        match self {
            Self::Pref => 'p',
            Self::Flop => 'f',
            Self::Turn => 't',
            Self::Rive => 'r',
            Self::Show => 's',
        }
    }
    /// Human-readable name used in training examples.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Pref => "preflop",
            Self::Flop => "flop",
            Self::Turn => "turn",
            Self::Rive => "river",
            Self::Show => "showdown",
        }
    }
    /// Board tokens observable by a player deciding in this stage.
    /// `None` means the whole board.
    ///
    /// The flop exposes four tokens rather than three. Hand records were
    /// always sliced this way for training, so it is kept as-is.
    pub const fn visible(&self) -> Option<usize> {
        match self {
            Self::Pref => Some(0),
            Self::Flop => Some(4),
            Self::Turn => Some(5),
            Self::Rive => None,
            Self::Show => None,
        }
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl TryFrom<char> for Stage {
    type Error = String;
    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            'p' => Ok(Self::Pref),
            'f' => Ok(Self::Flop),
            't' => Ok(Self::Turn),
            'r' => Ok(Self::Rive),
            's' => Ok(Self::Show),
            _ => Err(format!("invalid stage character: {}", c)),
        }
    }
}

impl TryFrom<String> for Stage {
    type Error = String;
    fn try_from(s: String) -> Result<Self, Self::Error> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::try_from(c),
            _ => Err(format!("invalid stage tag: {}", s)),
        }
    }
}
impl From<Stage> for String {
    fn from(stage: Stage) -> Self {
        stage.symbol().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bijective_symbol() {
        for stage in Stage::betting().into_iter().chain(Stage::tagged()) {
            assert!(stage == Stage::try_from(stage.symbol()).unwrap());
        }
    }

    #[test]
    fn serializes_as_tag() {
        assert!(serde_json::to_string(&Stage::Show).unwrap() == "\"s\"");
        assert!(serde_json::from_str::<Stage>("\"t\"").unwrap() == Stage::Turn);
        assert!(serde_json::from_str::<Stage>("\"turn\"").is_err());
    }

    #[test]
    fn flop_sees_four_tokens() {
        assert!(Stage::Pref.visible() == Some(0));
        assert!(Stage::Flop.visible() == Some(4));
        assert!(Stage::Turn.visible() == Some(5));
        assert!(Stage::Rive.visible().is_none());
        assert!(Stage::Show.visible().is_none());
    }
}
