/// A single-character action code from a per-player action log.
///
/// Each character of a stage-action token is one betting round for that
/// player. The table is fixed by the IRC dealer's log format.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Code {
    Pass,
    Blind,
    Fold,
    Check,
    Bet,
    Call,
    Raise,
    Shove,
    Quit,
    Kick,
}

const TABLE: [(char, Code); 10] = [
    ('-', Code::Pass),
    ('B', Code::Blind),
    ('f', Code::Fold),
    ('k', Code::Check),
    ('b', Code::Bet),
    ('c', Code::Call),
    ('r', Code::Raise),
    ('A', Code::Shove),
    ('Q', Code::Quit),
    ('K', Code::Kick),
];

impl Code {
    /// Decodes a stage-action token into one code per betting round.
    /// Fails with the first character missing from the table.
    pub fn decode(token: &str) -> Result<Vec<Self>, char> {
        token
            .chars()
            .map(|c| Self::try_from(c))
            .collect::<Result<Vec<Self>, char>>()
    }
    pub const fn symbol(&self) -> char {
        match self {
            Self::Pass => '-',
            Self::Blind => 'B',
            Self::Fold => 'f',
            Self::Check => 'k',
            Self::Bet => 'b',
            Self::Call => 'c',
            Self::Raise => 'r',
            Self::Shove => 'A',
            Self::Quit => 'Q',
            Self::Kick => 'K',
        }
    }
    /// Human-readable action name used in training examples.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Pass => "no action",
            Self::Blind => "blind bet",
            Self::Fold => "fold",
            Self::Check => "check",
            Self::Bet => "bet",
            Self::Call => "call",
            Self::Raise => "raise",
            Self::Shove => "all-in",
            Self::Quit => "quits game",
            Self::Kick => "kicked from game",
        }
    }
}

impl TryFrom<char> for Code {
    type Error = char;
    fn try_from(c: char) -> Result<Self, Self::Error> {
        TABLE
            .iter()
            .find(|(symbol, _)| *symbol == c)
            .map(|(_, code)| *code)
            .ok_or(c)
    }
}

impl TryFrom<String> for Code {
    type Error = String;
    fn try_from(s: String) -> Result<Self, Self::Error> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::try_from(c).map_err(|c| format!("unknown action code: {}", c)),
            _ => Err(format!("action code must be 1 character: {}", s)),
        }
    }
}
impl From<Code> for String {
    fn from(code: Code) -> Self {
        code.symbol().to_string()
    }
}

impl std::fmt::Display for Code {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bijective_symbol() {
        for (c, code) in TABLE {
            assert!(code.symbol() == c);
            assert!(Code::try_from(c) == Ok(code));
        }
    }

    #[test]
    fn decode_rounds() {
        assert!(Code::decode("Bkr") == Ok(vec![Code::Blind, Code::Check, Code::Raise]));
        assert!(Code::decode("-") == Ok(vec![Code::Pass]));
        assert!(Code::decode("") == Ok(vec![]));
    }

    #[test]
    fn decode_unknown() {
        assert!(Code::decode("kx") == Err('x'));
    }

    #[test]
    fn labels() {
        assert!(Code::Check.label() == "check");
        assert!(Code::Shove.label() == "all-in");
        assert!(Code::Kick.label() == "kicked from game");
    }
}
