use super::rank::Rank;
use super::suit::Suit;

/// A playing card encoded as a single byte.
///
/// The 52 cards are bijectively mapped to `0..52` where the encoding is
/// `rank * 4 + suit`. This yields a natural ordering where cards are sorted
/// first by rank, then by suit within each rank.
///
/// # Serialization
///
/// Hand records keep cards in the same two-character notation the IRC
/// dealer logged, like `"As"` (ace of spades) or `"Tc"` (ten of clubs),
/// so a card round-trips through JSON as a plain string.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Card(u8);

impl Card {
    /// Extracts the rank component (2 through Ace).
    pub fn rank(&self) -> Rank {
        Rank::from(self.0 / 4)
    }
    /// Extracts the suit component (clubs, diamonds, hearts, spades).
    pub fn suit(&self) -> Suit {
        Suit::from(self.0 % 4)
    }
}

/// (Rank, Suit) isomorphism
impl From<(Rank, Suit)> for Card {
    fn from((r, s): (Rank, Suit)) -> Self {
        Self(u8::from(r) * 4 + u8::from(s))
    }
}

/// u8 isomorphism
/// each card is mapped to its location in a sorted deck 0-51
/// Ts
/// 35
impl From<Card> for u8 {
    fn from(c: Card) -> u8 {
        c.0
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}{}", self.rank(), self.suit())
    }
}

/// str isomorphism
impl TryFrom<&str> for Card {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let s = s.trim();
        match (s.len(), s.is_ascii()) {
            (2, true) => {
                let rank = Rank::try_from(&s[0..1])?;
                let suit = Suit::try_from(&s[1..2])?;
                Ok(Card::from((rank, suit)))
            }
            _ => Err(format!("card must be 2 characters: {}", s)),
        }
    }
}
impl TryFrom<String> for Card {
    type Error = String;
    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::try_from(s.as_str())
    }
}
impl From<Card> for String {
    fn from(card: Card) -> Self {
        card.to_string()
    }
}

impl Card {
    /// Parses a sequence of whitespace-separated tokens into cards.
    /// Returns an error on the first token that fails to parse.
    pub fn parse<'a, I>(tokens: I) -> Result<Vec<Self>, String>
    where
        I: IntoIterator<Item = &'a str>,
    {
        tokens
            .into_iter()
            .map(Self::try_from)
            .collect::<Result<Vec<Self>, _>>()
    }
}
