//! Argument checks run at the top of every public operation, before any I/O.

use crate::error::HarnessError;

/// Rejects an empty string argument.
///
/// Only emptiness is checked; whitespace-only values pass. Type correctness
/// is the compiler's job.
pub fn require_non_empty(name: &'static str, value: &str) -> Result<(), HarnessError> {
    if value.is_empty() {
        return Err(HarnessError::EmptyArgument { name });
    }
    Ok(())
}

/// Checks several arguments at once, reporting the first empty one.
pub fn require_non_empty_all(args: &[(&'static str, &str)]) -> Result<(), HarnessError> {
    for (name, value) in args {
        require_non_empty(name, value)?;
    }
    Ok(())
}
