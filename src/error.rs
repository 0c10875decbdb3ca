use std::fmt;

/// Errors surfaced by sink registration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SinkError {
    /// Every slot of the registry is occupied; the sink was not added.
    RegistryFull { capacity: usize },
}

impl fmt::Display for SinkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RegistryFull { capacity } => {
                write!(f, "sink registry full: all {capacity} slots occupied")
            }
        }
    }
}

impl std::error::Error for SinkError {}
