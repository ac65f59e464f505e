//! Hyperlink entities.

use crate::id::{EntityId, OutputName};
use crate::phrasing::Phrasing;

/// Destination of a documentation link.
///
/// Links are created [`Unresolved`](Self::Unresolved) when only the target id
/// is known. Resolution happens at render time through a
/// [`Linker`](crate::Linker); construction never resolves.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LinkDestination {
    /// Target known by id only.
    Unresolved(EntityId),
    /// Target entity in generated documentation.
    Internal {
        id: EntityId,
        /// Document containing the target, if already assigned.
        document: Option<OutputName>,
    },
    /// Target outside the generated documentation.
    External(String),
}

impl LinkDestination {
    /// Internal destination in a known document.
    #[must_use]
    pub fn internal(id: impl Into<EntityId>, document: OutputName) -> Self {
        Self::Internal {
            id: id.into(),
            document: Some(document),
        }
    }

    pub fn is_resolved(&self) -> bool {
        !matches!(self, Self::Unresolved(_))
    }
}

/// Link to an arbitrary URL.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExternalLink {
    url: String,
    title: String,
    children: Vec<Phrasing>,
}

impl ExternalLink {
    #[must_use]
    pub fn new(url: impl Into<String>, children: Vec<Phrasing>) -> Self {
        Self {
            url: url.into(),
            title: String::new(),
            children,
        }
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Link title, empty if none.
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn children(&self) -> &[Phrasing] {
        &self.children
    }
}

/// Cross-reference to another documentation entity or an external URL.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DocumentationLink {
    destination: LinkDestination,
    title: String,
    children: Vec<Phrasing>,
}

impl DocumentationLink {
    #[must_use]
    pub fn new(destination: LinkDestination, children: Vec<Phrasing>) -> Self {
        Self {
            destination,
            title: String::new(),
            children,
        }
    }

    /// Link to an entity known by id only.
    #[must_use]
    pub fn unresolved(id: impl Into<EntityId>, children: Vec<Phrasing>) -> Self {
        Self::new(LinkDestination::Unresolved(id.into()), children)
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn destination(&self) -> &LinkDestination {
        &self.destination
    }

    /// Link title, empty if none.
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn children(&self) -> &[Phrasing] {
        &self.children
    }
}
