use crate::records::HandRecord;
use anyhow::Context;
use std::fs::File;
use std::io::BufReader;
use std::io::BufWriter;
use std::io::Write;
use std::path::Path;

/// Writes hands as one pretty-printed JSON array, in the order given.
pub fn write<'a, I>(path: &Path, hands: I) -> anyhow::Result<usize>
where
    I: IntoIterator<Item = &'a HandRecord>,
{
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("creating {}", parent.display()))?;
    }
    let hands = hands.into_iter().collect::<Vec<_>>();
    let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, &hands)
        .with_context(|| format!("serializing {}", path.display()))?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    log::info!("wrote {} hands to {}", hands.len(), path.display());
    Ok(hands.len())
}

/// Reads back a JSON array of hands.
pub fn read(path: &Path) -> anyhow::Result<Vec<HandRecord>> {
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("parsing {}", path.display()))
}
