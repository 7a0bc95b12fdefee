use derive_getters::{Dissolve, Getters};
use derive_more::{Display, Error};

/// A namespace path was requested before it was created in the registry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display, Error, Getters, Dissolve)]
#[display("Attempt to access module for namespace '{path}' before it was created")]
pub struct MissingNamespaceError {
    path: String,
}

impl MissingNamespaceError {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }
}

/// The same fully-qualified namespace was declared twice.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display, Error, Getters, Dissolve)]
#[display("Namespace '{path}' is already declared")]
pub struct DuplicateNamespaceError {
    path: String,
}

impl DuplicateNamespaceError {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }
}

/// A child segment is empty or contains the path separator.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display, Error, Getters, Dissolve)]
#[display("Invalid namespace segment '{segment}': must be non-empty and free of '::'")]
pub struct InvalidSegmentError {
    segment: String,
}

impl InvalidSegmentError {
    pub fn new(segment: impl Into<String>) -> Self {
        Self {
            segment: segment.into(),
        }
    }
}
