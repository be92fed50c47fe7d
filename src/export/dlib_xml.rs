//! Landmark XML export in the dlib imglab layout.
//!
//! ```xml
//! <dataset>
//!   <name>Training Faces</name>
//!   <images>
//!     <image file="/data/fld/male/0001.jpg">
//!       <box top="20" left="10" width="30" height="40">
//!         <part name="00" x="12" y="31"/>
//!       </box>
//!     </image>
//!   </images>
//! </dataset>
//! ```

use serde::Serialize;
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use crate::dataset::points::read_points_file;
use crate::dataset::rect::read_rect_file;
use crate::dataset::{DataLayout, ImageKey};
use crate::error::FldPrepError;

pub const DATASET_NAME: &str = "Training Faces";

/// Outcome of writing one XML document.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct XmlReport {
    pub path: PathBuf,
    pub images: usize,
    pub skipped: usize,
}

/// Write one XML document covering `keys`.
///
/// Keys without both a rectangle and a points file are left out. Points
/// coordinates are truncated toward zero.
pub fn write_landmark_xml(
    layout: &DataLayout,
    keys: &[ImageKey],
    xml_path: &Path,
    num_points: u32,
) -> Result<XmlReport, FldPrepError> {
    let root = layout.root();
    let mut report = XmlReport {
        path: xml_path.to_path_buf(),
        ..Default::default()
    };

    tracing::info!(xml = %xml_path.display(), images = keys.len(), "writing landmark XML");

    let mut xml = String::new();
    writeln!(xml, "<?xml version='1.0' encoding='UTF-8'?>").expect("write to string");
    writeln!(xml, "<dataset>").expect("write to string");
    writeln!(xml, "  <name>{}</name>", xml_escape(DATASET_NAME)).expect("write to string");
    writeln!(xml, "  <images>").expect("write to string");

    for (index, key) in keys.iter().enumerate() {
        tracing::debug!("{}:{} - {}", index + 1, keys.len(), key);

        let rect_path = key.rect_path(root);
        let points_path = key.points_path(root, num_points);
        if !rect_path.is_file() || !points_path.is_file() {
            report.skipped += 1;
            continue;
        }

        let rect = read_rect_file(&rect_path)?;
        let points = read_points_file(&points_path)?;

        writeln!(
            xml,
            "    <image file=\"{}\">",
            xml_escape(&key.image_path(root).to_string_lossy())
        )
        .expect("write to string");
        writeln!(
            xml,
            "      <box top=\"{}\" left=\"{}\" width=\"{}\" height=\"{}\">",
            rect.top, rect.left, rect.width, rect.height
        )
        .expect("write to string");

        for (i, point) in points.iter().enumerate() {
            let (x, y) = point.to_int();
            writeln!(xml, "        <part name=\"{i:02}\" x=\"{x}\" y=\"{y}\"/>")
                .expect("write to string");
        }

        writeln!(xml, "      </box>").expect("write to string");
        writeln!(xml, "    </image>").expect("write to string");
        report.images += 1;
    }

    writeln!(xml, "  </images>").expect("write to string");
    writeln!(xml, "</dataset>").expect("write to string");

    fs::write(xml_path, xml).map_err(FldPrepError::Io)?;
    Ok(report)
}

fn xml_escape(raw: &str) -> String {
    raw.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
