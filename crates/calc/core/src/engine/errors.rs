//! Errors raised by max-hit engines.

use crate::error::{CalcFailure, ErrorSeverity};

/// Why an engine could not produce a max hit for a monster.
///
/// Every variant names the monster by its display id.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CalcError {
    /// The monster has no combat style the engine models.
    #[error("monster '{monster}' has no supported combat style")]
    UnsupportedStyle { monster: String },

    /// An intermediate value did not fit the engine's arithmetic.
    #[error("max hit calculation for monster '{monster}' overflowed")]
    Overflow { monster: String },
}

impl CalcFailure for CalcError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::UnsupportedStyle { .. } => ErrorSeverity::Validation,
            Self::Overflow { .. } => ErrorSeverity::Fatal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::UnsupportedStyle { .. } => "CALC_UNSUPPORTED_STYLE",
            Self::Overflow { .. } => "CALC_OVERFLOW",
        }
    }
}
