use thiserror::Error;

pub type Result<T> = std::result::Result<T, PayrollError>;

/// Everything that can go wrong while managing payroll records.
///
/// The record-operation variants (`DuplicateId`, `NotFound`,
/// `InvalidSalary`) are recoverable: the collection is left exactly as it
/// was and the menu keeps running. `CorruptData` means the backing file
/// exists but cannot be trusted; `Persistence` means a read or write
/// failed while the in-memory collection may already hold the change.
#[derive(Debug, Error)]
pub enum PayrollError {
    #[error("employee id {0:?} already exists")]
    DuplicateId(String),

    #[error("employee {0:?} not found")]
    NotFound(String),

    #[error("invalid salary {0:?}")]
    InvalidSalary(String),

    #[error("corrupt payroll data: {0}")]
    CorruptData(String),

    #[error("persistence failure: {0}")]
    Persistence(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("missing configuration: {0}")]
    MissingConfig(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
