mod tally_error;

pub use tally_error::TallyError;

/// Convenience alias used across the workspace.
pub type TallyResult<T> = Result<T, TallyError>;
