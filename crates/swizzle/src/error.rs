use thiserror::Error;

use crate::alias::AliasGroup;
use crate::pattern::Dimension;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SwizzleError {
    #[error("unsupported vector dimension {0}, expected 2, 3 or 4")]
    UnsupportedDimension(usize),

    #[error("unsupported swizzle length {0}, expected 2, 3 or 4")]
    UnsupportedLength(usize),

    #[error("'{letter}' is not a letter of any alias group")]
    UnknownLetter { letter: char },

    #[error("'{letter}' of group {group} names component {index}, out of range for a {dim}-vector")]
    OutOfRange {
        letter: char,
        group: AliasGroup,
        index: usize,
        dim: usize,
    },

    #[error("component index {index} is out of range for a {dim}-vector")]
    IndexOutOfRange { index: usize, dim: usize },

    #[error("'{name}' mixes letters of groups {first} and {second}")]
    MixedGroups {
        name: String,
        first: AliasGroup,
        second: AliasGroup,
    },

    #[error("write pattern '{0}' repeats a component")]
    RepeatedIndex(String),

    #[error("alias group {0} is configured more than once")]
    DuplicateGroup(AliasGroup),

    #[error("dimension {0} is configured more than once")]
    DuplicateDimension(Dimension),

    #[error("no alias group configured")]
    NoGroups,

    #[error("no dimension configured")]
    NoDimensions,

    #[error("'{name}' resolves to {resolved:?}, expected {expected:?}")]
    Mismatch {
        name: String,
        resolved: Vec<usize>,
        expected: Vec<usize>,
    },
}

pub type Result<T> = std::result::Result<T, SwizzleError>;
