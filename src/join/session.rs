use super::joiner::Joined;
use super::joiner::Joiner;
use super::layout::Layout;
use super::pdb;
use anyhow::Context;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::path::PathBuf;

/// The companion files of one unpacked session directory.
#[derive(Debug, Clone)]
pub struct Session {
    pub layout: Layout,
    pub hdb: PathBuf,
    pub roster: PathBuf,
    /// Action logs as `(username, path)`, sorted by path.
    pub logs: Vec<(String, PathBuf)>,
}

impl Session {
    /// Finds `hdb`, `hroster`, and `pdb.*` files in a `<game>/<session>/`
    /// directory. Action logs may sit beside the others or under `pdb/`.
    pub fn locate(dir: &Path, sanitize: bool) -> anyhow::Result<Self> {
        let layout = Layout::from_dir(dir)
            .with_context(|| format!("{} is not a <game>/<session> path", dir.display()))?
            .sanitized(sanitize);
        let files = listing(dir)?;
        let hdb = files
            .iter()
            .find(|p| named(p, "hdb"))
            .cloned()
            .with_context(|| format!("no hand database in {}", dir.display()))?;
        let roster = files
            .iter()
            .find(|p| named(p, "hroster"))
            .cloned()
            .with_context(|| format!("no roster in {}", dir.display()))?;
        let nested = dir.join("pdb");
        let mut logs = match nested.is_dir() {
            true => listing(&nested)?,
            false => Vec::new(),
        }
        .into_iter()
        .chain(files)
        .filter_map(|path| {
            let name = path.file_name()?.to_str()?;
            let user = pdb::username(name).filter(|_| name.starts_with("pdb."))?;
            Some((user.to_string(), path.clone()))
        })
        .collect::<Vec<_>>();
        logs.sort_by(|a, b| a.1.cmp(&b.1));
        Ok(Self {
            layout,
            hdb,
            roster,
            logs,
        })
    }

    /// A label for log lines, `<game>_<session>`.
    pub fn label(&self) -> String {
        format!("{}_{}", self.layout.game, self.layout.session)
    }

    /// Runs the full join: hand database, then roster, then every action log.
    pub fn join(&self) -> anyhow::Result<Joined> {
        let mut joiner = Joiner::new(self.layout.clone());
        joiner
            .hdb(open(&self.hdb)?)
            .with_context(|| format!("reading {}", self.hdb.display()))?;
        joiner
            .roster(open(&self.roster)?)
            .with_context(|| format!("reading {}", self.roster.display()))?;
        for (user, path) in self.logs.iter() {
            joiner
                .actions(user, open(path)?)
                .with_context(|| format!("reading {}", path.display()))?;
        }
        log::debug!("{}: joined {} action logs", self.label(), self.logs.len());
        Ok(joiner.finish())
    }
}

fn open(path: &Path) -> anyhow::Result<BufReader<File>> {
    File::open(path)
        .map(BufReader::new)
        .with_context(|| format!("opening {}", path.display()))
}

fn listing(dir: &Path) -> anyhow::Result<Vec<PathBuf>> {
    let mut files = std::fs::read_dir(dir)
        .with_context(|| format!("listing {}", dir.display()))?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_file())
        .collect::<Vec<_>>();
    files.sort();
    Ok(files)
}

/// Matches both `hdb` and `*.hdb` style names.
fn named(path: &Path, kind: &str) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .map(|name| name.to_lowercase())
        .map(|name| name == kind || name.ends_with(&format!(".{}", kind)))
        .unwrap_or(false)
}
