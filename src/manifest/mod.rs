//! Split manifests: plain-text files listing one image key per line.

use std::collections::BTreeMap;
use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::dataset::{Gender, ImageKey};
use crate::error::FldPrepError;

/// Read a prior split manifest.
///
/// Lines are trimmed and normalized into keys. Blank lines and mirror
/// entries are dropped, since mirrors are regenerated from their base keys.
pub fn read_manifest(path: &Path) -> Result<Vec<ImageKey>, FldPrepError> {
    let content = fs::read_to_string(path).map_err(|source| FldPrepError::ManifestRead {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.contains("mirror"))
        .map(ImageKey::normalize)
        .collect())
}

/// Split manifest entries by gender, preserving their order.
///
/// Entries whose leading component names no gender are dropped.
pub fn partition_by_gender(keys: &[ImageKey]) -> BTreeMap<Gender, Vec<ImageKey>> {
    let mut by_gender: BTreeMap<Gender, Vec<ImageKey>> =
        Gender::ALL.iter().map(|g| (*g, Vec::new())).collect();

    for key in keys {
        match key.gender() {
            Some(gender) => by_gender.entry(gender).or_default().push(key.clone()),
            None => tracing::warn!(key = %key, "manifest entry has no gender prefix; ignoring"),
        }
    }

    by_gender
}

/// Overwrite `path` with one key per line, in list order.
pub fn write_manifest(path: &Path, keys: &[ImageKey]) -> Result<(), FldPrepError> {
    let file = fs::File::create(path).map_err(FldPrepError::Io)?;
    let mut writer = BufWriter::new(file);
    for key in keys {
        writeln!(writer, "{}", key).map_err(FldPrepError::Io)?;
    }
    writer.flush().map_err(FldPrepError::Io)
}
