use super::failure::Failure;
use std::str::FromStr;

/// Whitespace-tokenized view of one raw line. Runs of spaces collapse.
pub struct Line<'a>(Vec<&'a str>);

impl<'a> Line<'a> {
    /// `None` for blank lines, which carry no hand and are skipped.
    pub fn split(raw: &'a str) -> Option<Self> {
        let tokens = raw.split_whitespace().collect::<Vec<_>>();
        match tokens.is_empty() {
            true => None,
            false => Some(Self(tokens)),
        }
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn token(&self, i: usize) -> Option<&'a str> {
        self.0.get(i).copied()
    }
    pub fn tail(&self, from: usize) -> &[&'a str] {
        &self.0[from.min(self.0.len())..]
    }
    pub fn range(&self, from: usize, to: usize) -> &[&'a str] {
        &self.0[from.min(self.0.len())..to.min(self.0.len())]
    }
    /// Requires at least `n` tokens.
    pub fn least(&self, n: usize) -> Result<(), Failure> {
        match self.len() >= n {
            true => Ok(()),
            false => Err(Failure::structural(format!(
                "expected at least {} tokens, found {}",
                n,
                self.len()
            ))),
        }
    }
    /// Parses the token at `i` as a number named `name`.
    pub fn numeric<T>(&self, i: usize, name: &str) -> Result<T, Failure>
    where
        T: FromStr,
    {
        let token = self
            .token(i)
            .ok_or_else(|| Failure::structural(format!("missing {}", name)))?;
        token
            .parse::<T>()
            .map_err(|_| Failure::structural(format!("non-numeric {}: {}", name, token)))
    }
}
