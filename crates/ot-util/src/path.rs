//! Splitting relative paths into validated components

use crate::{Error, Result, filename::is_valid_filename};

/// Split `path` on `/` and validate each component.
///
/// Empty segments are kept in place, so leading, trailing or doubled
/// separators show up as empty components and are rejected by filename
/// validation. On success the returned components borrow from `path` and
/// appear in input order.
///
/// # Errors
///
/// - [`Error::ParentReference`] for the first component equal to `..`
/// - [`Error::InvalidComponent`] for the first component that fails
///   [`is_valid_filename`], wrapping that failure
pub fn split_and_validate(path: &str) -> Result<Vec<&str>> {
    let components: Vec<&str> = path.split('/').collect();

    if let Err(e) = validate_components(&components) {
        tracing::debug!(?path, index = ?e.index(), "Rejected path");
        return Err(e);
    }

    Ok(components)
}

/// Validate an already split list of components.
///
/// Applies the same per-component rules as [`split_and_validate`], with
/// indices taken from the iteration order.
pub fn validate_components<I>(components: I) -> Result<()>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    for (index, component) in components.into_iter().enumerate() {
        let component = component.as_ref();
        if component == ".." {
            return Err(Error::ParentReference { index });
        }
        is_valid_filename(component)
            .map_err(|e| Error::invalid_component(index, component, e))?;
    }
    Ok(())
}
