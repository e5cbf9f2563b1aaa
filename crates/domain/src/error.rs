use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    InvalidArtistId(String),
    SlotOutOfRange { slot: usize, count: usize },
}

impl Display for DomainError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidArtistId(value) => {
                write!(f, "artist id must be a single non-empty path segment, got {value:?}")
            }
            Self::SlotOutOfRange { slot, count } => {
                write!(f, "gallery slot {slot} is out of range for {count} sections")
            }
        }
    }
}

impl std::error::Error for DomainError {}
