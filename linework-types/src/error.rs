//! Error type used by the crate.

use thiserror::Error;

use crate::GeometryKind;

/// Error enum.
///
/// Both variants mean that the caller handed over a geometry of a shape the called operation is not defined for.
/// They are contract violations of an upstream collaborator, not data errors, and should abort the processing.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LineworkTypesError {
    /// A geometry of unexpected variant was given to an operation.
    #[error("contract violation: expected {expected}, got {found}")]
    ContractViolation {
        /// Variant the operation is defined for.
        expected: GeometryKind,
        /// Variant that was actually given.
        found: GeometryKind,
    },
    /// Input geometry variant cannot be represented by the model.
    #[error("unsupported geometry variant: {0}")]
    UnsupportedGeometry(GeometryKind),
}
