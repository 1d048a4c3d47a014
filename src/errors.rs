/// Error types for tab strip operations
use std::fmt;

/// Errors from tab strip operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TabError {
    /// The tab index is past the end of the tab list
    InvalidIndex(usize),
}

impl fmt::Display for TabError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TabError::InvalidIndex(index) => write!(f, "Invalid tab index: {}", index),
        }
    }
}

impl std::error::Error for TabError {}
