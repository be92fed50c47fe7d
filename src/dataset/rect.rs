//! Face rectangle files and their corner-form boxes.

use std::fmt;
use std::fs;
use std::path::Path;

use crate::error::FldPrepError;

/// A face rectangle as stored on disk: left, top, width, height.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rect {
    pub left: i64,
    pub top: i64,
    pub width: i64,
    pub height: i64,
}

impl Rect {
    pub fn new(left: i64, top: i64, width: i64, height: i64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Converts to (x1, y1, x2, y2) corner form.
    ///
    /// Width and height are not checked, so a negative extent yields a box
    /// whose max corner lies before its min corner. A corner outside the
    /// `i64` range is an error for the rectangle file at `path`.
    pub fn to_xyxy(&self, path: &Path) -> Result<BoxXYXY, FldPrepError> {
        let overflow = || FldPrepError::RectParse {
            path: path.to_path_buf(),
            message: "box corner overflows".to_string(),
        };

        Ok(BoxXYXY {
            x1: self.left,
            y1: self.top,
            x2: self.left.checked_add(self.width).ok_or_else(overflow)?,
            y2: self.top.checked_add(self.height).ok_or_else(overflow)?,
        })
    }
}

/// Axis-aligned box in corner form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoxXYXY {
    pub x1: i64,
    pub y1: i64,
    pub x2: i64,
    pub y2: i64,
}

/// Formats as `x1 y1 x2 y2`, the layout used in combined manifest lines.
impl fmt::Display for BoxXYXY {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} {}", self.x1, self.y1, self.x2, self.y2)
    }
}

/// Read the rectangle from the first line of a `_rect.txt` file.
pub fn read_rect_file(path: &Path) -> Result<Rect, FldPrepError> {
    let content = fs::read_to_string(path).map_err(FldPrepError::Io)?;
    parse_rect_str(&content, path)
}

/// Parse the first four whitespace-separated integers of the first line.
///
/// Tokens beyond the fourth are ignored.
pub fn parse_rect_str(content: &str, path: &Path) -> Result<Rect, FldPrepError> {
    let first_line = content.lines().next().unwrap_or("");
    let tokens: Vec<&str> = first_line.split_whitespace().take(4).collect();

    if tokens.len() < 4 {
        return Err(FldPrepError::RectParse {
            path: path.to_path_buf(),
            message: format!(
                "expected 4 values 'left top width height', found {}",
                tokens.len()
            ),
        });
    }

    let mut values = [0i64; 4];
    for (slot, (token, name)) in values
        .iter_mut()
        .zip(tokens.iter().zip(["left", "top", "width", "height"]))
    {
        *slot = token.parse::<i64>().map_err(|_| FldPrepError::RectParse {
            path: path.to_path_buf(),
            message: format!("invalid {name} value '{token}'; expected integer"),
        })?;
    }

    Ok(Rect::new(values[0], values[1], values[2], values[3]))
}
