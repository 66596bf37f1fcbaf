use crate::expand::TrainingExample;
use crate::join::Failure;
use crate::records::HandRecord;
use anyhow::Context;
use std::fs::File;
use std::io::BufWriter;
use std::io::Write;
use std::path::PathBuf;

/// Writes one newline-delimited JSON file per hand, grouping files into
/// folders of `size` hands so no single directory grows unbounded.
///
/// Hands are numbered from 1 in the order they are pushed, so
/// `batch_1-10000/hand_1.jsonl` holds the first hand written.
pub struct Batches {
    root: PathBuf,
    size: usize,
    count: usize,
}

impl Batches {
    pub fn new(root: PathBuf, size: usize) -> anyhow::Result<Self> {
        anyhow::ensure!(size > 0, "batch size must be positive");
        std::fs::create_dir_all(&root).with_context(|| format!("creating {}", root.display()))?;
        Ok(Self {
            root,
            size,
            count: 0,
        })
    }

    /// Hands written so far.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Folder holding the `n`th hand, counting from 1.
    pub fn folder(&self, n: usize) -> PathBuf {
        let index = (n - 1) / self.size;
        self.root.join(format!(
            "batch_{}-{}",
            index * self.size + 1,
            (index + 1) * self.size
        ))
    }

    /// Writes one hand's examples, one JSON object per line.
    pub fn push(&mut self, examples: &[TrainingExample]) -> anyhow::Result<PathBuf> {
        let n = self.count + 1;
        let folder = self.folder(n);
        std::fs::create_dir_all(&folder)
            .with_context(|| format!("creating {}", folder.display()))?;
        let path = folder.join(format!("hand_{}.jsonl", n));
        let file = File::create(&path).with_context(|| format!("creating {}", path.display()))?;
        let mut writer = BufWriter::new(file);
        for example in examples {
            serde_json::to_writer(&mut writer, example)?;
            writer.write_all(b"\n")?;
        }
        writer.flush()?;
        self.count = n;
        Ok(path)
    }

    /// Writes every hand that expanded, in the order given. Hands that
    /// failed are logged and skipped without taking a hand number.
    pub fn absorb<'a, I>(&mut self, expanded: I) -> anyhow::Result<Tally>
    where
        I: IntoIterator<Item = (&'a HandRecord, Result<Vec<TrainingExample>, Failure>)>,
    {
        let mut tally = Tally::default();
        for (hand, result) in expanded {
            match result {
                Ok(examples) => {
                    self.push(&examples)?;
                    tally.hands += 1;
                    tally.examples += examples.len();
                }
                Err(failure) => {
                    log::debug!("{}: skipped, {}", hand.id, failure);
                    tally.skipped += 1;
                }
            }
        }
        Ok(tally)
    }
}

/// Running totals across calls to [`Batches::absorb`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    pub hands: usize,
    pub examples: usize,
    pub skipped: usize,
}

impl std::ops::AddAssign for Tally {
    fn add_assign(&mut self, other: Self) {
        self.hands += other.hands;
        self.examples += other.examples;
        self.skipped += other.skipped;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expand;
    use crate::join::Joiner;
    use crate::join::Layout;

    fn hand() -> HandRecord {
        let mut joiner = Joiner::new(Layout::new("holdem", "199505"));
        let hdb = "000001 1 1 2 2/100 2/200 0/0 0/0 As Kd Qh\n";
        joiner.hdb(hdb.as_bytes()).unwrap();
        joiner.roster("000001 2 alice bob\n".as_bytes()).unwrap();
        let alice = "alice 000001 2 1 Bc k - - 1000 20 40 Ah Kh\n";
        let bob = "bob 000001 2 2 Bk b - - 1000 20 -20\n";
        joiner.actions("alice", alice.as_bytes()).unwrap();
        joiner.actions("bob", bob.as_bytes()).unwrap();
        joiner.finish().hands.into_values().next().unwrap()
    }

    fn examples() -> Vec<TrainingExample> {
        expand::expand(&hand()).unwrap()
    }

    #[test]
    fn folder_names() {
        let dir = tempfile::tempdir().unwrap();
        let batches = Batches::new(dir.path().to_path_buf(), 10_000).unwrap();
        assert!(batches.folder(1).ends_with("batch_1-10000"));
        assert!(batches.folder(10_000).ends_with("batch_1-10000"));
        assert!(batches.folder(10_001).ends_with("batch_10001-20000"));
    }

    #[test]
    fn one_line_per_example() {
        let dir = tempfile::tempdir().unwrap();
        let mut batches = Batches::new(dir.path().to_path_buf(), 2).unwrap();
        let examples = examples();
        let mut paths = Vec::new();
        for _ in 0..3 {
            paths.push(batches.push(&examples).unwrap());
        }
        assert!(batches.count() == 3);
        assert!(paths[0].ends_with("batch_1-2/hand_1.jsonl"));
        assert!(paths[1].ends_with("batch_1-2/hand_2.jsonl"));
        assert!(paths[2].ends_with("batch_3-4/hand_3.jsonl"));
        let text = std::fs::read_to_string(&paths[0]).unwrap();
        let lines = text.lines().collect::<Vec<_>>();
        assert!(lines.len() == examples.len());
        for (i, line) in lines.iter().enumerate() {
            let json = serde_json::from_str::<serde_json::Value>(line).unwrap();
            assert!(json["action_history"].as_object().unwrap().len() == i);
            assert!(json.get("context").is_some());
            assert!(json.get("next_action").is_some());
        }
    }

    #[test]
    fn failed_hands_take_no_number() {
        let dir = tempfile::tempdir().unwrap();
        let mut batches = Batches::new(dir.path().to_path_buf(), 2).unwrap();
        let examples = examples();
        let mut hand = hand();
        let ok = || Ok::<_, Failure>(examples.clone());
        let failed = || Err::<Vec<TrainingExample>, _>(Failure::lookup("no player at seat 2"));
        let tally = batches
            .absorb([(&hand, ok()), (&hand, failed()), (&hand, ok())])
            .unwrap();
        assert!(tally.hands == 2);
        assert!(tally.skipped == 1);
        assert!(tally.examples == 2 * examples.len());
        assert!(batches.count() == 2);
        let folder = dir.path().join("batch_1-2");
        assert!(folder.join("hand_1.jsonl").is_file());
        assert!(folder.join("hand_2.jsonl").is_file());
        assert!(!dir.path().join("batch_3-4").exists());

        hand.players.remove(&2);
        let tally = batches.absorb([(&hand, expand::expand(&hand))]).unwrap();
        assert!(tally == Tally { hands: 0, examples: 0, skipped: 1 });
        assert!(batches.count() == 2);
    }

    #[test]
    fn zero_size_rejected() {
        let dir = tempfile::tempdir().unwrap();
        assert!(Batches::new(dir.path().to_path_buf(), 0).is_err());
    }
}
