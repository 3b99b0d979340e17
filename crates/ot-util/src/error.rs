//! Error types for ot-util

use serde::Serialize;

/// Result type for ot-util validation
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced by path and filename validation
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("Invalid uplink '..' at path component {index}")]
    ParentReference { index: usize },

    #[error("Invalid reserved filename {name:?}")]
    ReservedName { name: String },

    #[error("Invalid '/' in filename {name:?}")]
    PathSeparator { name: String },

    #[error("Invalid empty filename")]
    EmptyName,

    #[error("Invalid path component {index} ({component:?}): {source}")]
    InvalidComponent {
        index: usize,
        component: String,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    pub fn invalid_component(index: usize, component: impl Into<String>, source: Error) -> Self {
        Self::InvalidComponent {
            index,
            component: component.into(),
            source: Box::new(source),
        }
    }

    /// The fieldless kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::ParentReference { .. } => ErrorKind::ParentReference,
            Self::ReservedName { .. } => ErrorKind::ReservedName,
            Self::PathSeparator { .. } => ErrorKind::PathSeparator,
            Self::EmptyName => ErrorKind::EmptyName,
            Self::InvalidComponent { .. } => ErrorKind::InvalidComponent,
        }
    }

    /// Position of the offending component, for path-level errors.
    pub fn index(&self) -> Option<usize> {
        match self {
            Self::ParentReference { index } | Self::InvalidComponent { index, .. } => Some(*index),
            _ => None,
        }
    }

    /// The offending text, when the error carries one.
    pub fn component(&self) -> Option<&str> {
        match self {
            Self::ParentReference { .. } => Some(".."),
            Self::ReservedName { name } | Self::PathSeparator { name } => Some(name),
            Self::EmptyName => Some(""),
            Self::InvalidComponent { component, .. } => Some(component),
        }
    }
}

/// Classification of validation failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// A path component was exactly `..`
    ParentReference,
    /// A filename was exactly `.` or `..`
    ReservedName,
    /// A filename contained `/`
    PathSeparator,
    /// A filename was empty
    EmptyName,
    /// A path component failed filename validation
    InvalidComponent,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ParentReference => "parent_reference",
            Self::ReservedName => "reserved_name",
            Self::PathSeparator => "path_separator",
            Self::EmptyName => "empty_name",
            Self::InvalidComponent => "invalid_component",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
