//! Entity identifiers and output document names.

use std::fmt;

/// Stable identifier of a documentation entity.
///
/// Used as anchor (`standardese-<id>`) and as link destination.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId(String);

impl EntityId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EntityId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for EntityId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Name of an output document.
///
/// A name created with [`from_name`](Self::from_name) gets the generator's
/// link extension appended when used as a file name; one created with
/// [`from_file_name`](Self::from_file_name) is used verbatim.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct OutputName {
    name: String,
    needs_extension: bool,
}

impl OutputName {
    /// Name without extension, e.g. `"foo"`.
    #[must_use]
    pub fn from_name(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            needs_extension: true,
        }
    }

    /// Complete file name, e.g. `"index.html"`.
    #[must_use]
    pub fn from_file_name(file_name: impl Into<String>) -> Self {
        Self {
            name: file_name.into(),
            needs_extension: false,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// File name of the document for the given extension (without dot).
    #[must_use]
    pub fn file_name(&self, extension: &str) -> String {
        if self.needs_extension {
            format!("{}.{extension}", self.name)
        } else {
            self.name.clone()
        }
    }
}
