use super::failure::Failure;
use super::failure::Rejection;
use super::hdb;
use super::layout::Layout;
use super::pdb;
use super::roster;
use crate::records::HandId;
use crate::records::HandRecord;
use std::collections::BTreeMap;
use std::io::BufRead;

/// Merges one session's three file kinds into hand records.
///
/// Files must be fed in order: hand database, then roster, then action
/// logs. Every line either merges into a record or becomes a [`Failure`]
/// against its hand; nothing short of an I/O error stops the join.
pub struct Joiner {
    layout: Layout,
    hands: BTreeMap<HandId, HandRecord>,
    invalid: BTreeMap<HandId, Vec<Failure>>,
}

/// The outcome of a completed join: valid hands and why the rest were dropped.
#[derive(Debug, Clone, Default)]
pub struct Joined {
    pub hands: BTreeMap<HandId, HandRecord>,
    pub invalid: BTreeMap<HandId, Vec<Failure>>,
}

impl Joiner {
    pub fn new(layout: Layout) -> Self {
        Self {
            layout,
            hands: BTreeMap::new(),
            invalid: BTreeMap::new(),
        }
    }

    /// Reads the hand database, creating one record per line.
    pub fn hdb<R: BufRead>(&mut self, reader: R) -> std::io::Result<()> {
        for raw in lines(reader) {
            match hdb::parse(&self.layout, &raw?) {
                None => continue,
                Some(Err(rejection)) => self.reject(rejection),
                Some(Ok(entry)) => {
                    let id = entry.hand.id.clone();
                    for defect in entry.defects {
                        self.reject(Rejection::new(id.clone(), defect));
                    }
                    self.hands.insert(id, entry.hand);
                }
            }
        }
        Ok(())
    }

    /// Reads the roster, seating players into known hands.
    pub fn roster<R: BufRead>(&mut self, reader: R) -> std::io::Result<()> {
        for raw in lines(reader) {
            match roster::parse(&self.layout, &raw?) {
                None => continue,
                Some(Err(rejection)) => self.reject(rejection),
                Some(Ok(roster)) => match self.hands.get_mut(&roster.id) {
                    Some(hand) => hand.seat(roster.users),
                    None => self.reject(Rejection::new(
                        roster.id,
                        Failure::referential("roster references unknown hand"),
                    )),
                },
            }
        }
        Ok(())
    }

    /// Reads one player's action log, attaching each line to its hand.
    /// The username is sanitized the same way roster names are.
    pub fn actions<R: BufRead>(&mut self, user: &str, reader: R) -> std::io::Result<()> {
        let user = self.layout.user(user);
        for raw in lines(reader) {
            match pdb::parse(&self.layout, &user, &raw?) {
                None => continue,
                Some(Err(rejection)) => self.reject(rejection),
                Some(Ok(contribution)) => {
                    let id = contribution.id.clone();
                    if let Err(failure) = self.attach(contribution) {
                        self.reject(Rejection::new(id, failure));
                    }
                }
            }
        }
        Ok(())
    }

    fn attach(&mut self, contribution: pdb::Contribution) -> Result<(), Failure> {
        let pdb::Contribution { id, user, activity } = contribution;
        if self.invalid.contains_key(&id) {
            return Ok(());
        }
        let hand = self
            .hands
            .get_mut(&id)
            .ok_or_else(|| Failure::referential("action log references unknown hand"))?;
        let player = hand
            .find_mut(&user)
            .ok_or_else(|| Failure::referential(format!("{} is not on the roster", user)))?;
        match player.pos == activity.pos {
            true => Ok(player.attach(activity)),
            false => Err(Failure::referential(format!(
                "{} logged seat {} but is rostered at seat {}",
                user, activity.pos, player.pos
            ))),
        }
    }

    fn reject(&mut self, rejection: Rejection) {
        log::debug!("{}", rejection);
        self.invalid
            .entry(rejection.id)
            .or_default()
            .push(rejection.failure);
    }

    /// Checks every surviving hand is complete, then splits off the invalid.
    pub fn finish(mut self) -> Joined {
        let rejections = self
            .hands
            .values()
            .filter(|hand| !self.invalid.contains_key(&hand.id))
            .filter_map(|hand| incomplete(hand).map(|f| Rejection::new(hand.id.clone(), f)))
            .collect::<Vec<_>>();
        for rejection in rejections {
            self.reject(rejection);
        }
        let invalid = self.invalid;
        let hands = self
            .hands
            .into_iter()
            .filter(|(id, _)| !invalid.contains_key(id))
            .collect();
        Joined { hands, invalid }
    }
}

fn incomplete(hand: &HandRecord) -> Option<Failure> {
    if hand.players.is_empty() {
        return Some(Failure::referential("no roster line"));
    }
    if hand.players.len() != hand.num_players {
        return Some(Failure::referential(format!(
            "{} players rostered for a {} player hand",
            hand.players.len(),
            hand.num_players
        )));
    }
    hand.players
        .values()
        .find(|player| !player.is_attached())
        .map(|player| Failure::referential(format!("{} has no action log", player.user)))
}

/// Lines as lossy UTF-8, since usernames are not guaranteed to be valid.
fn lines<R: BufRead>(reader: R) -> impl Iterator<Item = std::io::Result<String>> {
    reader
        .split(b'\n')
        .map(|bytes| bytes.map(|b| String::from_utf8_lossy(&b).into_owned()))
}

impl Joined {
    /// Session diagnostics: the count and list of excluded hands, then
    /// either the valid count or a notice that none survived.
    pub fn notices(&self, label: &str) -> Vec<(log::Level, String)> {
        let mut notices = Vec::new();
        if !self.invalid.is_empty() {
            notices.push((
                log::Level::Warn,
                format!("{}: {} invalid hands found and ignored", label, self.invalid.len()),
            ));
            notices.push((
                log::Level::Warn,
                format!(
                    "{}: invalid hands: {}",
                    label,
                    self.invalid
                        .keys()
                        .map(|id| id.as_str())
                        .collect::<Vec<_>>()
                        .join(", ")
                ),
            ));
        }
        match self.hands.is_empty() {
            true => notices.push((log::Level::Warn, format!("{}: no valid hands found", label))),
            false => notices.push((
                log::Level::Info,
                format!("{}: {} valid hands joined", label, self.hands.len()),
            )),
        }
        notices
    }

    pub fn report(&self, label: &str) {
        for (level, notice) in self.notices(label) {
            log::log!(level, "{}", notice);
        }
    }
}
