//! Sections of a documentation comment.

use crate::block::Block;
use crate::list::ListEntry;
use crate::phrasing::Phrasing;

/// Short summary of an entity, rendered as the first paragraph.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BriefSection {
    children: Vec<Phrasing>,
}

impl BriefSection {
    #[must_use]
    pub fn new(children: Vec<Phrasing>) -> Self {
        Self { children }
    }

    pub fn children(&self) -> &[Phrasing] {
        &self.children
    }
}

/// Free-form body of a documentation comment.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DetailsSection {
    children: Vec<Block>,
}

impl DetailsSection {
    #[must_use]
    pub fn new(children: Vec<Block>) -> Self {
        Self { children }
    }

    pub fn children(&self) -> &[Block] {
        &self.children
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

/// Kind of an inline section.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SectionKind {
    Requires,
    Effects,
    Synchronization,
    Postconditions,
    Returns,
    Throws,
    Complexity,
    Remarks,
    ErrorConditions,
    Notes,
    Preconditions,
    Constraints,
    Diagnostics,
    See,
}

impl SectionKind {
    /// Name shown when the comment does not override it.
    #[must_use]
    pub fn default_name(self) -> &'static str {
        match self {
            Self::Requires => "Requires",
            Self::Effects => "Effects",
            Self::Synchronization => "Synchronization",
            Self::Postconditions => "Postconditions",
            Self::Returns => "Return values",
            Self::Throws => "Throws",
            Self::Complexity => "Complexity",
            Self::Remarks => "Remarks",
            Self::ErrorConditions => "Error conditions",
            Self::Notes => "Notes",
            Self::Preconditions => "Preconditions",
            Self::Constraints => "Constraints",
            Self::Diagnostics => "Diagnostics",
            Self::See => "See also",
        }
    }
}

/// Named section rendered as one paragraph, e.g. `Returns: ...`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InlineSection {
    kind: SectionKind,
    name: String,
    children: Vec<Phrasing>,
}

impl InlineSection {
    #[must_use]
    pub fn new(kind: SectionKind, name: impl Into<String>, children: Vec<Phrasing>) -> Self {
        Self {
            kind,
            name: name.into(),
            children,
        }
    }

    /// Section using the default name of its kind.
    #[must_use]
    pub fn with_default_name(kind: SectionKind, children: Vec<Phrasing>) -> Self {
        Self::new(kind, kind.default_name(), children)
    }

    pub fn section_kind(&self) -> SectionKind {
        self.kind
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn children(&self) -> &[Phrasing] {
        &self.children
    }
}

/// Named section rendered as a heading and a list, e.g. `Parameters`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListSection {
    name: String,
    items: Vec<ListEntry>,
}

impl ListSection {
    #[must_use]
    pub fn new(name: impl Into<String>, items: Vec<ListEntry>) -> Self {
        Self {
            name: name.into(),
            items,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn items(&self) -> &[ListEntry] {
        &self.items
    }
}

/// Section of a documentation entity other than brief and details.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DocSection {
    Inline(InlineSection),
    List(ListSection),
}

impl From<InlineSection> for DocSection {
    fn from(section: InlineSection) -> Self {
        Self::Inline(section)
    }
}

impl From<ListSection> for DocSection {
    fn from(section: ListSection) -> Self {
        Self::List(section)
    }
}
