//! Common error infrastructure for menu-core.
//!
//! Every error enum in this crate implements [`MenuError`] so callers can
//! classify failures uniformly. No error raised here is fatal to the host:
//! the worst outcome is a single action that silently does nothing.
//!
//! # Classification
//!
//! - **Configuration**: malformed parameters, unparsable expressions, unknown
//!   action types. These degrade to a safe default wherever a default exists.
//! - **Collaborator**: an external surface (command dispatcher, item factory,
//!   session store) refused or failed the request. Caught at the action
//!   boundary, logged, and treated as a no-op.
//! - **Internal**: state inconsistencies inside the engine itself.

/// Classification of an error, used for logging priority and recovery.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorSeverity {
    /// Invalid configuration value. The affected step falls back to a default.
    ///
    /// Examples: `"2+"` as a math expression, `delay: soon`, unknown action type
    Configuration,

    /// An external collaborator rejected or failed the request.
    ///
    /// Examples: command dispatch failure, unknown item identifier, session store missing
    Collaborator,

    /// Unexpected inconsistency inside the engine.
    ///
    /// These indicate bugs and should be investigated.
    Internal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Configuration => "configuration",
            Self::Collaborator => "collaborator",
            Self::Internal => "internal",
        }
    }

    /// Returns true if the failure originates from user-authored configuration.
    pub const fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration)
    }

    /// Returns true if this error indicates an internal bug.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal)
    }
}

/// Common trait for all menu-core errors.
///
/// # Implementation Guidelines
///
/// - All error enums should implement this trait
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity by origin (config, collaborator, engine), not by impact
pub trait MenuError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Useful for log filtering and assertions in tests.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
