//! Combined manifests for the landmark annotation editor.
//!
//! Each line lists an image, its points file, and the face box in corner
//! form:
//!
//! ```text
//! /data/fld/male/0001.jpg /data/fld/male/0001_bv78c.txt 10 20 40 60
//! ```
//!
//! Writing a manifest also rewrites every listed points file in place with
//! the header the editor expects (see [`crate::dataset::points`]).

use serde::Serialize;
use std::fmt;
use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::dataset::points::augment_points_file;
use crate::dataset::rect::read_rect_file;
use crate::dataset::{BoxXYXY, DataLayout, HeaderOutcome, ImageKey};
use crate::error::FldPrepError;

/// Outcome of writing one combined manifest.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct AeditReport {
    pub manifest: PathBuf,
    /// Keys passed in.
    pub listed: usize,
    /// Lines written to the manifest.
    pub written: usize,
    /// Keys missing their rectangle or points file.
    pub skipped: usize,
    pub header_added: usize,
    pub header_present: usize,
}

impl fmt::Display for AeditReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "  {}: {} of {} images written, {} skipped (headers: {} added, {} already present)",
            self.manifest.display(),
            self.written,
            self.listed,
            self.skipped,
            self.header_added,
            self.header_present
        )
    }
}

/// Format one combined manifest line.
pub fn aedit_line(image_path: &Path, points_path: &Path, bbox: BoxXYXY) -> String {
    format!("{} {} {}", image_path.display(), points_path.display(), bbox)
}

/// Write the combined manifest for `keys` and augment their points files.
///
/// The manifest is truncated first. Keys without both a rectangle and a
/// points file are skipped. A malformed rectangle aborts the run.
pub fn write_aedit_manifest(
    layout: &DataLayout,
    keys: &[ImageKey],
    manifest_path: &Path,
    num_points: u32,
) -> Result<AeditReport, FldPrepError> {
    let root = layout.root();
    let file = fs::File::create(manifest_path).map_err(FldPrepError::Io)?;
    let mut writer = BufWriter::new(file);

    let mut report = AeditReport {
        manifest: manifest_path.to_path_buf(),
        listed: keys.len(),
        ..Default::default()
    };

    tracing::info!(manifest = %manifest_path.display(), images = keys.len(), "writing combined manifest");

    for (index, key) in keys.iter().enumerate() {
        tracing::debug!("{}:{} - {}", index + 1, keys.len(), key);

        let rect_path = key.rect_path(root);
        let points_path = key.points_path(root, num_points);
        if !rect_path.is_file() || !points_path.is_file() {
            tracing::debug!(%key, "rectangle or points file missing; skipping");
            report.skipped += 1;
            continue;
        }

        let bbox = read_rect_file(&rect_path)?.to_xyxy(&rect_path)?;

        match augment_points_file(&points_path, num_points)? {
            HeaderOutcome::Added => report.header_added += 1,
            HeaderOutcome::AlreadyPresent => report.header_present += 1,
        }

        let line = aedit_line(&key.image_path(root), &points_path, bbox);
        writeln!(writer, "{line}").map_err(FldPrepError::Io)?;
        report.written += 1;
    }

    writer.flush().map_err(FldPrepError::Io)?;
    Ok(report)
}
