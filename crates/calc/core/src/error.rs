//! Common error infrastructure for calc-core.
//!
//! Domain-specific errors (e.g. [`crate::engine::CalcError`]) live next to the
//! code that raises them. This module provides the classification shared by
//! all of them.
//!
//! # Design Principles
//!
//! - **Type Safety**: Each failure source has its own error type with specific variants
//! - **Rich Context**: Errors carry the display id of the monster being evaluated
//! - **Severity Classification**: Errors are categorized so callers can decide what aborts a run

/// Severity level of an error, used for categorization and logging.
///
/// - **Validation**: The input monster cannot be evaluated as given
/// - **Fatal**: The calculation itself broke down and the run cannot be trusted
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Validation error - the monster's data cannot be fed to the engine.
    ///
    /// Examples: missing combat style, style the engine does not model
    Validation,

    /// Fatal error - arithmetic or engine invariant violated.
    ///
    /// Examples: intermediate value overflow
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Fatal => "fatal",
        }
    }
}

/// Common trait for all calc-core errors.
///
/// # Implementation Guidelines
///
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Include the monster display id in variants
/// - Give every variant a stable error code
pub trait CalcFailure: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a stable identifier for this error variant.
    fn error_code(&self) -> &'static str;
}
