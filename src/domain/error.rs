//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors represent report-structure violations.
/// These are independent of infrastructure concerns.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum DomainError {
    #[error("no dependency tree found in report, check the input file")]
    NoProjects,
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
