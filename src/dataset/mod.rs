//! On-disk dataset model: image keys, directory layout, and the per-image
//! rectangle and points files.

mod key;
mod layout;
pub mod points;
pub mod rect;

pub use key::{Gender, ImageKey, MIRROR_SUFFIX, RECT_SUFFIX};
pub use layout::{
    DataLayout, AEDIT_TESTING, AEDIT_TRAINING, TEST_V1_MANIFEST, TEST_V2_MANIFEST,
    TRAIN_V1_MANIFEST, TRAIN_V2_MANIFEST, XML_TESTING, XML_TRAINING,
};
pub use points::{HeaderOutcome, Point};
pub use rect::{BoxXYXY, Rect};
