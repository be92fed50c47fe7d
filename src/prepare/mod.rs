//! End-to-end preparation of a facial landmark data directory.
//!
//! Steps, in order:
//!
//! 1. discover non-mirrored image keys under `male/` and `female/`
//! 2. read `train.v1.txt` and `test.v1.txt`
//! 3. build the extended splits (see [`crate::split`])
//! 4. write `train.v2.txt` and `test.v2.txt`
//! 5. write `aedit-training.txt` and `aedit-testing.txt`, augmenting points
//!    files along the way
//! 6. optionally write the landmark XML documents

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;

use crate::dataset::{
    DataLayout, Gender, AEDIT_TESTING, AEDIT_TRAINING, TEST_V1_MANIFEST, TEST_V2_MANIFEST,
    TRAIN_V1_MANIFEST, TRAIN_V2_MANIFEST, XML_TESTING, XML_TRAINING,
};
use crate::error::FldPrepError;
use crate::export::{write_aedit_manifest, write_landmark_xml, AeditReport, XmlReport};
use crate::manifest::{read_manifest, write_manifest};
use crate::split::{build_splits, SplitInput, SplitOptions, SplitReport};

/// Options for a full preparation run.
#[derive(Clone, Debug)]
pub struct PrepareOptions {
    pub data_dir: PathBuf,
    /// Landmark count, used in points file names and headers.
    pub num_points: u32,
    pub split: SplitOptions,
    /// Also write the dlib-style landmark XML files.
    pub write_xml: bool,
}

impl PrepareOptions {
    pub fn new(data_dir: impl Into<PathBuf>, num_points: u32) -> Self {
        Self {
            data_dir: data_dir.into(),
            num_points,
            split: SplitOptions::default(),
            write_xml: false,
        }
    }
}

/// Everything a run produced.
#[derive(Clone, Debug, Serialize)]
pub struct PrepareReport {
    pub data_dir: PathBuf,
    pub split: SplitReport,
    pub train_manifest: PathBuf,
    pub test_manifest: PathBuf,
    pub training: AeditReport,
    pub testing: AeditReport,
    pub xml: Vec<XmlReport>,
}

impl fmt::Display for PrepareReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Prepared {}", self.data_dir.display())?;
        writeln!(f)?;
        write!(f, "{}", self.split)?;
        writeln!(f)?;
        writeln!(f, "Manifests:")?;
        writeln!(f, "  {}", self.train_manifest.display())?;
        writeln!(f, "  {}", self.test_manifest.display())?;
        write!(f, "{}", self.training)?;
        write!(f, "{}", self.testing)?;

        if !self.xml.is_empty() {
            writeln!(f)?;
            writeln!(f, "XML:")?;
            for xml in &self.xml {
                writeln!(
                    f,
                    "  {}: {} images, {} skipped",
                    xml.path.display(),
                    xml.images,
                    xml.skipped
                )?;
            }
        }
        Ok(())
    }
}

/// Run every preparation step against `opts.data_dir`.
pub fn run_prepare(opts: &PrepareOptions) -> Result<PrepareReport, FldPrepError> {
    let layout = DataLayout::discover(&opts.data_dir)?;
    tracing::info!(data_dir = %layout.root().display(), num_points = opts.num_points, "preparing dataset");

    let mut discovered = BTreeMap::new();
    for gender in Gender::ALL {
        let keys = layout.discover_image_keys(gender)?;
        tracing::info!(%gender, images = keys.len(), "discovered images");
        discovered.insert(gender, keys);
    }

    let input = SplitInput {
        discovered,
        prior_train: read_manifest(&layout.file(TRAIN_V1_MANIFEST))?,
        prior_test: read_manifest(&layout.file(TEST_V1_MANIFEST))?,
    };

    let splits = build_splits(&input, &opts.split)?;
    tracing::info!(
        train = splits.train.len(),
        test = splits.test.len(),
        "split lists built"
    );

    let train_manifest = layout.file(TRAIN_V2_MANIFEST);
    let test_manifest = layout.file(TEST_V2_MANIFEST);
    write_manifest(&train_manifest, &splits.train)?;
    write_manifest(&test_manifest, &splits.test)?;

    let training = write_aedit_manifest(
        &layout,
        &splits.train,
        &layout.file(AEDIT_TRAINING),
        opts.num_points,
    )?;
    let testing = write_aedit_manifest(
        &layout,
        &splits.test,
        &layout.file(AEDIT_TESTING),
        opts.num_points,
    )?;

    let mut xml = Vec::new();
    if opts.write_xml {
        xml.push(write_landmark_xml(
            &layout,
            &splits.train,
            &layout.file(XML_TRAINING),
            opts.num_points,
        )?);
        xml.push(write_landmark_xml(
            &layout,
            &splits.test,
            &layout.file(XML_TESTING),
            opts.num_points,
        )?);
    }

    Ok(PrepareReport {
        data_dir: layout.root().to_path_buf(),
        split: splits.report,
        train_manifest,
        test_manifest,
        training,
        testing,
        xml,
    })
}
