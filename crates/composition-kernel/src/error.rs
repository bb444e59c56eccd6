//! Error types for composition kernel operations.

/// Errors arising from kernel inputs.
///
/// The arithmetic is total; only the textual surface can fail.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CompositionError {
    /// A strategy name did not match any known evaluation mode.
    #[error("unknown strategy: {0} (expected application, composition, or curried)")]
    UnknownStrategy(String),
}
