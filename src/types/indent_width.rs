use serde::{Serialize, Serializer};
use std::fmt;

/// Spaces per indentation level, always within `MIN..=MAX`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IndentWidth(u8);

/// A width outside the accepted range
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("indentation width must be {min} to {max} spaces, got {0}", min = IndentWidth::MIN, max = IndentWidth::MAX)]
pub struct IndentWidthError(i64);

impl IndentWidth {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 8;
    pub const DEFAULT: IndentWidth = IndentWidth(4);

    pub fn new(spaces: i64) -> Result<Self, IndentWidthError> {
        u8::try_from(spaces)
            .ok()
            .filter(|width| (Self::MIN..=Self::MAX).contains(width))
            .map(Self)
            .ok_or(IndentWidthError(spaces))
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl Default for IndentWidth {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for IndentWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl Serialize for IndentWidth {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u8(self.0)
    }
}
