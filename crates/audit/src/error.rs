//! Audit errors.

use calc_core::{CalcError, CalcFailure, ErrorSeverity};
use thiserror::Error;

/// Errors that abort an audit run.
///
/// There is no partial result: a report missing monsters would misstate
/// coverage, so the first failure ends the run.
#[derive(Debug, Error)]
pub enum AuditError {
    #[error("max hit calculation failed for '{monster}': {source}")]
    Calculation {
        monster: String,
        #[source]
        source: CalcError,
    },
}

impl AuditError {
    /// Display id of the monster the run stopped on.
    pub fn monster(&self) -> &str {
        match self {
            Self::Calculation { monster, .. } => monster,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Calculation { source, .. } => source.severity(),
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Calculation { source, .. } => source.error_code(),
        }
    }
}

pub type Result<T> = std::result::Result<T, AuditError>;
