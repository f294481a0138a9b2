use thiserror::Error;

/// Errors raised by the allocation core
///
/// Every variant is a precondition violation on the caller's data. An empty
/// or fully ineligible hospital list is not an error; the selector reports it
/// as "no selection".
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AllocationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Data inconsistency in hospital {hospital_id}: {available} available {pool} beds but 0 total")]
    DataInconsistency {
        hospital_id: String,
        pool: BedPool,
        available: u32,
    },
}

impl AllocationError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }
}

/// Which bed pool a capacity figure refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BedPool {
    General,
    Icu,
}

impl std::fmt::Display for BedPool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BedPool::General => write!(f, "general"),
            BedPool::Icu => write!(f, "ICU"),
        }
    }
}
