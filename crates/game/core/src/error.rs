//! Common error infrastructure for tactics-core.
//!
//! Domain-specific errors (`AttackError`, `EquipError`, `InventoryError`, ...)
//! are defined next to the operations they validate. This module only holds the
//! shared severity classification and the [`GameError`] trait they implement.
//!
//! # Design Principles
//!
//! - **Type Safety**: each operation has its own error type with specific variants
//! - **No Partial Mutation**: every error is raised before any state changes
//! - **Severity Classification**: errors are categorized for recovery strategies

/// Severity level of an error, used for categorization and logging priority.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Recoverable error - the same request may succeed once the board changes.
    ///
    /// Examples: target out of range, destination occupied
    Recoverable,

    /// Validation error - invalid input, should not retry without changes.
    ///
    /// Examples: unknown unit id, item not in inventory
    Validation,

    /// Internal error - unexpected state inconsistency.
    ///
    /// Core rules reject before mutating and never report this or `Fatal`;
    /// both are for `GameError` implementors built on top of the core.
    Internal,

    /// Fatal error - state corrupted, the match cannot continue.
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    /// Returns true if this error indicates an internal bug.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

/// Common trait for all tactics-core errors.
///
/// # Implementation Guidelines
///
/// - All error enums should implement this trait
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Default implementation uses the error type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_classification() {
        assert!(ErrorSeverity::Recoverable.is_recoverable());
        assert!(!ErrorSeverity::Validation.is_recoverable());
        assert!(ErrorSeverity::Fatal.is_internal());
        assert!(ErrorSeverity::Internal.is_internal());
        assert!(!ErrorSeverity::Recoverable.is_internal());
        assert_eq!(ErrorSeverity::Validation.as_str(), "validation");
    }

    #[derive(Debug, thiserror::Error)]
    #[error("save slot corrupted")]
    struct CorruptSave;

    impl GameError for CorruptSave {
        fn severity(&self) -> ErrorSeverity {
            ErrorSeverity::Fatal
        }
    }

    #[test]
    fn outside_implementors_can_escalate() {
        let err = CorruptSave;
        assert!(err.severity().is_internal());
        assert!(!err.severity().is_recoverable());
        assert!(err.error_code().ends_with("CorruptSave"));
    }
}
