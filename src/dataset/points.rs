//! Landmark points files (`<key>_bv<N>c.txt`).
//!
//! A raw points file lists one `x y` pair per line. The annotation tool that
//! consumes the combined manifests expects the list wrapped in a small
//! header and footer:
//!
//! ```text
//! version: 1
//! n_points:  78
//! {
//! 12.5 30.0
//! ...
//! }
//! ```

use std::fs;
use std::path::Path;

use crate::error::FldPrepError;

const HEADER_VERSION_PREFIX: &str = "version:";
const HEADER_COUNT_PREFIX: &str = "n_points:";

/// One landmark coordinate.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Coordinates truncated toward zero.
    pub fn to_int(self) -> (i64, i64) {
        (self.x.trunc() as i64, self.y.trunc() as i64)
    }
}

/// What happened to a points file during augmentation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeaderOutcome {
    /// Header and footer were written.
    Added,
    /// The file already carried a header and was left alone.
    AlreadyPresent,
}

/// Returns true if `content` already starts with the `version:` header line.
pub fn has_header(content: &str) -> bool {
    content.trim_start().starts_with(HEADER_VERSION_PREFIX)
}

/// Wrap raw points content in the header and footer.
pub fn with_header(content: &str, num_points: u32) -> String {
    let mut out = format!("version: 1\nn_points:  {num_points}\n{{\n");
    out.push_str(content);
    if !content.is_empty() && !content.ends_with('\n') {
        out.push('\n');
    }
    out.push_str("}\n");
    out
}

/// Rewrite a points file in place with the header and footer.
///
/// Files that already start with a header are not touched. The rewrite is
/// not atomic.
pub fn augment_points_file(path: &Path, num_points: u32) -> Result<HeaderOutcome, FldPrepError> {
    let content = fs::read_to_string(path).map_err(FldPrepError::Io)?;
    if has_header(&content) {
        return Ok(HeaderOutcome::AlreadyPresent);
    }

    fs::write(path, with_header(&content, num_points)).map_err(FldPrepError::Io)?;
    Ok(HeaderOutcome::Added)
}

pub fn read_points_file(path: &Path) -> Result<Vec<Point>, FldPrepError> {
    let content = fs::read_to_string(path).map_err(FldPrepError::Io)?;
    parse_points_str(&content, path)
}

/// Parse points, with or without the header and footer.
///
/// Blank lines are skipped. Any other line must hold exactly two numbers.
pub fn parse_points_str(content: &str, path: &Path) -> Result<Vec<Point>, FldPrepError> {
    let mut points = Vec::new();

    for (line_idx, line) in content.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty()
            || trimmed == "{"
            || trimmed == "}"
            || trimmed.starts_with(HEADER_VERSION_PREFIX)
            || trimmed.starts_with(HEADER_COUNT_PREFIX)
        {
            continue;
        }

        let parse_err = |message: String| FldPrepError::PointsParse {
            path: path.to_path_buf(),
            line: line_idx + 1,
            message,
        };

        let tokens: Vec<&str> = trimmed.split_whitespace().collect();
        let [x, y] = tokens.as_slice() else {
            return Err(parse_err(format!(
                "expected 2 values 'x y', found {}",
                tokens.len()
            )));
        };

        let x = x
            .parse::<f64>()
            .map_err(|_| parse_err(format!("invalid x value '{x}'")))?;
        let y = y
            .parse::<f64>()
            .map_err(|_| parse_err(format!("invalid y value '{y}'")))?;
        points.push(Point { x, y });
    }

    Ok(points)
}
