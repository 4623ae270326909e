//! Common error infrastructure for skilling-core.
//!
//! The core never fails a computation: configuration problems (a tea that
//! cannot be used for an action type, an equipped item that does not exist)
//! are reported as errors by the individual source catalogs, and the caller
//! logs them and substitutes a zero bonus vector.

/// Severity level of an error, used for categorization and logging.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorSeverity {
    /// Invalid player configuration. Computation continues without the
    /// offending contribution.
    Validation,

    /// Static data is inconsistent with itself (e.g. a drink without buffs).
    /// Loader validation should have caught it.
    Internal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Internal => "internal",
        }
    }

    /// Returns true if this error indicates an internal bug.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal)
    }
}

/// Common trait for all skilling-core errors.
///
/// # Implementation Guidelines
///
/// - All error enums should implement this trait
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on who has to act on it, not impact
pub trait CalcError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    fn error_code(&self) -> &'static str;
}

/// Logs a non-fatal error at a level matching its severity.
pub(crate) fn report<E: CalcError>(err: &E) {
    if err.severity().is_internal() {
        tracing::error!(code = err.error_code(), severity = err.severity().as_str(), "{err}");
    } else {
        tracing::warn!(code = err.error_code(), severity = err.severity().as_str(), "{err}");
    }
}
