//! Single filename validation

use crate::{Error, Result};

/// Check that `name` is usable as one component of a repository path.
///
/// Rejects names containing `/`, the self and parent references `.` and
/// `..`, and the empty name. Anything else is accepted as-is, including
/// `foo..`, `..bar` and names containing `:`.
pub fn is_valid_filename(name: &str) -> Result<()> {
    let rejection = if name.contains('/') {
        Error::PathSeparator { name: name.to_string() }
    } else if name == "." || name == ".." {
        Error::ReservedName { name: name.to_string() }
    } else if name.is_empty() {
        Error::EmptyName
    } else {
        return Ok(());
    };

    tracing::debug!(?name, kind = %rejection.kind(), "Rejected filename");
    Err(rejection)
}
