//! Writers for the downstream annotation formats.

pub mod aedit;
pub mod dlib_xml;

pub use aedit::{write_aedit_manifest, AeditReport};
pub use dlib_xml::{write_landmark_xml, XmlReport};
