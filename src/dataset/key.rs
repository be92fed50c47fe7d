//! Image identifiers and gender partitions.
//!
//! An [`ImageKey`] is the extension-less relative path of an image under the
//! data directory (e.g. `male/0001`). Every annotation file for that image is
//! derived from it by appending a fixed suffix.

use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};

/// Suffix marking the horizontally flipped counterpart of an image.
pub const MIRROR_SUFFIX: &str = "_mirror";

/// Suffix of rectangle annotation files.
pub const RECT_SUFFIX: &str = "_rect.txt";

/// Gender partition of the dataset. Each one lives in its own subdirectory.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// Both partitions, in the order they are processed and concatenated.
    pub const ALL: [Gender; 2] = [Gender::Male, Gender::Female];

    /// Name of the subdirectory holding this partition.
    pub fn dir_name(self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dir_name())
    }
}

/// Relative, extension-less identifier of one image.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ImageKey(String);

impl ImageKey {
    /// Creates a key from a raw manifest entry or discovered path.
    ///
    /// Backslashes become forward slashes. Absolute paths are cut down to
    /// their last two components, so `/data/fld/male/0001` becomes
    /// `male/0001`. Relative entries are kept as written.
    pub fn normalize(raw: &str) -> Self {
        let unified = raw.trim().replace('\\', "/");
        if !is_absolute_like(&unified) {
            return Self(unified);
        }

        let parts: Vec<&str> = unified.split('/').filter(|p| !p.is_empty()).collect();
        let tail = &parts[parts.len().saturating_sub(2)..];
        Self(tail.join("/"))
    }

    /// Builds `<gender>/<stem>`.
    pub fn from_parts(gender: Gender, stem: &str) -> Self {
        Self(format!("{}/{}", gender.dir_name(), stem))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Gender derived from the leading path component, if it names one.
    pub fn gender(&self) -> Option<Gender> {
        let head = self.0.split('/').next()?;
        Gender::ALL.into_iter().find(|g| g.dir_name() == head)
    }

    pub fn is_mirror(&self) -> bool {
        self.0.ends_with(MIRROR_SUFFIX)
    }

    /// Key of the horizontally flipped counterpart.
    pub fn mirrored(&self) -> Self {
        Self(format!("{}{}", self.0, MIRROR_SUFFIX))
    }

    /// `<root>/<key>_rect.txt`
    pub fn rect_path(&self, root: &Path) -> PathBuf {
        root.join(format!("{}{}", self.0, RECT_SUFFIX))
    }

    /// `<root>/<key>_bv<N>c.txt`
    pub fn points_path(&self, root: &Path, num_points: u32) -> PathBuf {
        root.join(format!("{}_bv{}c.txt", self.0, num_points))
    }

    /// `<root>/<key>.jpg`
    pub fn image_path(&self, root: &Path) -> PathBuf {
        root.join(format!("{}.jpg", self.0))
    }
}

impl fmt::Debug for ImageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ImageKey({})", self.0)
    }
}

impl fmt::Display for ImageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ImageKey {
    fn from(raw: &str) -> Self {
        Self::normalize(raw)
    }
}

fn is_absolute_like(path: &str) -> bool {
    // Windows drive paths arrive here already slash-normalized (C:/...).
    path.starts_with('/') || Path::new(path).is_absolute() || has_drive_prefix(path)
}

fn has_drive_prefix(path: &str) -> bool {
    let bytes = path.as_bytes();
    bytes.len() >= 3 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':' && bytes[2] == b'/'
}
