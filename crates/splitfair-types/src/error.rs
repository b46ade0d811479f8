//! Error types for the SplitFair settlement engine.
//!
//! All errors use the `SF_ERR_` prefix convention for easy grepping in logs.
//! Error codes are grouped by subsystem:
//! - 1xx: Input errors
//!
//! The engine has no transient failures (pure computation), so nothing here
//! is retriable. A residual imbalance after a run is a diagnostic carried on
//! the settlement result, not an error.

use thiserror::Error;

/// Central error enum for all SplitFair operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SplitfairError {
    // =================================================================
    // Input Errors (1xx)
    // =================================================================
    /// The participant group is empty: the fair share (mean contribution)
    /// is undefined for zero participants. Fatal, never retried.
    #[error("SF_ERR_100: Cannot settle an empty participant group")]
    EmptyGroup,
}

/// Crate-wide `Result` alias.
pub type Result<T> = std::result::Result<T, SplitfairError>;
