//! N-body configuration error types.

/// Errors raised when assembling or running the simulation.
///
/// All variants are configuration errors, validated eagerly before any body
/// state changes.
#[derive(Debug, thiserror::Error)]
pub enum NBodyError {
    /// A body names a parent that does not exist in the configuration.
    #[error("body \"{body}\" references unknown parent \"{parent}\"")]
    UnknownParent {
        /// The body whose parent reference failed to resolve.
        body: String,
        /// The missing parent name.
        parent: String,
    },

    /// A body names itself as its parent.
    #[error("body \"{0}\" cannot be its own parent")]
    SelfParent(String),

    /// Two bodies share a name, making parent references ambiguous.
    #[error("duplicate body name \"{0}\"")]
    DuplicateName(String),

    /// The fixed time step must be positive and finite.
    #[error("time step must be positive and finite, got {0}")]
    InvalidTimeStep(f64),

    /// A body index was out of range for the current body set.
    #[error("body index {index} out of range for {count} bodies")]
    BodyIndexOutOfRange {
        /// The offending index.
        index: usize,
        /// Number of bodies in the set.
        count: usize,
    },
}
