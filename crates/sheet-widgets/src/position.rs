#![forbid(unsafe_code)]

//! Resting positions of the sheet.

use std::fmt;

/// One of the three places a sheet can be deliberately sent to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "config-file", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "config-file", serde(rename_all = "snake_case"))]
pub enum SheetPosition {
    /// Fully open, offset 0.
    Open,
    /// Half open, offset = peek offset.
    Peek,
    /// Off-screen, offset = viewport height.
    Closed,
}

impl SheetPosition {
    /// Initial position selected by an `index_start` input.
    ///
    /// Negative → closed, `0` → peek, anything else → open.
    #[must_use]
    pub const fn from_index_start(index_start: i32) -> Self {
        if index_start < 0 {
            Self::Closed
        } else if index_start == 0 {
            Self::Peek
        } else {
            Self::Open
        }
    }

    /// Stable lowercase name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Peek => "peek",
            Self::Closed => "closed",
        }
    }
}

impl fmt::Display for SheetPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_start_mapping() {
        assert_eq!(SheetPosition::from_index_start(-1), SheetPosition::Closed);
        assert_eq!(SheetPosition::from_index_start(i32::MIN), SheetPosition::Closed);
        assert_eq!(SheetPosition::from_index_start(0), SheetPosition::Peek);
        assert_eq!(SheetPosition::from_index_start(1), SheetPosition::Open);
        assert_eq!(SheetPosition::from_index_start(7), SheetPosition::Open);
    }

    #[test]
    fn display_names() {
        assert_eq!(SheetPosition::Peek.to_string(), "peek");
        assert_eq!(SheetPosition::Closed.as_str(), "closed");
    }
}
