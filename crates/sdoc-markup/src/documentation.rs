//! Documentation entities.
//!
//! File, entity, module and namespace documentation share one
//! [`DocumentationBody`] and differ in the kind of children they own: file
//! and entity documentation nest further entity documentation, module and
//! namespace documentation group index entries.
//!
//! # Example
//!
//! ```
//! use sdoc_markup::{
//!     BriefSection, Documentation, DocumentationHeader, EntityDocumentation, Heading, Phrasing,
//! };
//!
//! let doc = EntityDocumentation::builder("foo")
//!     .with_header(DocumentationHeader::new(Heading::from_text("Function foo")))
//!     .with_brief(BriefSection::new(vec![Phrasing::text("Does foo.")]))
//!     .finish();
//! assert_eq!(doc.body().id().as_str(), "foo");
//! ```

use std::marker::PhantomData;

use crate::block::Heading;
use crate::code_block::CodeBlock;
use crate::doc_section::{BriefSection, DetailsSection, DocSection, InlineSection, ListSection};
use crate::id::EntityId;
use crate::index::IndexEntry;

/// Heading of a documentation entity with an optional module tag.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DocumentationHeader {
    heading: Heading,
    module: Option<String>,
}

impl DocumentationHeader {
    #[must_use]
    pub fn new(heading: Heading) -> Self {
        Self {
            heading,
            module: None,
        }
    }

    /// Tag the header with the module the entity belongs to.
    #[must_use]
    pub fn with_module(mut self, module: impl Into<String>) -> Self {
        self.module = Some(module.into());
        self
    }

    pub fn heading(&self) -> &Heading {
        &self.heading
    }

    pub fn module(&self) -> Option<&str> {
        self.module.as_deref()
    }
}

/// Content shared by all documentation entities.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DocumentationBody {
    id: EntityId,
    header: Option<DocumentationHeader>,
    synopsis: Option<CodeBlock>,
    brief: Option<BriefSection>,
    sections: Vec<DocSection>,
    details: Option<DetailsSection>,
}

impl DocumentationBody {
    fn new(id: EntityId) -> Self {
        Self {
            id,
            header: None,
            synopsis: None,
            brief: None,
            sections: Vec::new(),
            details: None,
        }
    }

    pub fn id(&self) -> &EntityId {
        &self.id
    }

    pub fn header(&self) -> Option<&DocumentationHeader> {
        self.header.as_ref()
    }

    pub fn synopsis(&self) -> Option<&CodeBlock> {
        self.synopsis.as_ref()
    }

    pub fn brief(&self) -> Option<&BriefSection> {
        self.brief.as_ref()
    }

    /// Inline and list sections in declaration order.
    pub fn sections(&self) -> &[DocSection] {
        &self.sections
    }

    pub fn inline_sections(&self) -> impl Iterator<Item = &InlineSection> {
        self.sections.iter().filter_map(|section| match section {
            DocSection::Inline(inline) => Some(inline),
            DocSection::List(_) => None,
        })
    }

    pub fn list_sections(&self) -> impl Iterator<Item = &ListSection> {
        self.sections.iter().filter_map(|section| match section {
            DocSection::List(list) => Some(list),
            DocSection::Inline(_) => None,
        })
    }

    pub fn details(&self) -> Option<&DetailsSection> {
        self.details.as_ref()
    }
}

mod sealed {
    pub trait Sealed {}
}

/// Common interface of the documentation entities.
///
/// This trait is sealed.
pub trait Documentation: sealed::Sealed + Sized {
    /// Type of the owned children.
    type Child;

    fn body(&self) -> &DocumentationBody;

    fn children(&self) -> &[Self::Child];

    #[doc(hidden)]
    fn from_parts(body: DocumentationBody, children: Vec<Self::Child>) -> Self;
}

/// Accumulates the parts of a documentation entity.
///
/// The entity is immutable once [`finish`](Self::finish) returns it.
#[must_use = "call `finish` to build the documentation entity"]
pub struct DocumentationBuilder<T: Documentation> {
    body: DocumentationBody,
    children: Vec<T::Child>,
    _target: PhantomData<fn() -> T>,
}

impl<T: Documentation> DocumentationBuilder<T> {
    pub fn new(id: impl Into<EntityId>) -> Self {
        Self {
            body: DocumentationBody::new(id.into()),
            children: Vec::new(),
            _target: PhantomData,
        }
    }

    pub fn with_header(mut self, header: DocumentationHeader) -> Self {
        self.body.header = Some(header);
        self
    }

    pub fn with_synopsis(mut self, synopsis: CodeBlock) -> Self {
        self.body.synopsis = Some(synopsis);
        self
    }

    pub fn with_brief(mut self, brief: BriefSection) -> Self {
        self.body.brief = Some(brief);
        self
    }

    /// Add an inline or list section.
    pub fn with_section(mut self, section: impl Into<DocSection>) -> Self {
        self.body.sections.push(section.into());
        self
    }

    pub fn with_details(mut self, details: DetailsSection) -> Self {
        self.body.details = Some(details);
        self
    }

    pub fn with_child(mut self, child: impl Into<T::Child>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn with_children(mut self, children: impl IntoIterator<Item = T::Child>) -> Self {
        self.children.extend(children);
        self
    }

    #[must_use]
    pub fn finish(self) -> T {
        T::from_parts(self.body, self.children)
    }
}

macro_rules! documentation_entity {
    ($(#[$meta:meta])* $name:ident, $child:ty) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq, Eq)]
        pub struct $name {
            body: DocumentationBody,
            children: Vec<$child>,
        }

        impl $name {
            /// Start building documentation for the entity with the given id.
            pub fn builder(id: impl Into<EntityId>) -> DocumentationBuilder<Self> {
                DocumentationBuilder::new(id)
            }
        }

        impl sealed::Sealed for $name {}

        impl Documentation for $name {
            type Child = $child;

            fn body(&self) -> &DocumentationBody {
                &self.body
            }

            fn children(&self) -> &[$child] {
                &self.children
            }

            fn from_parts(body: DocumentationBody, children: Vec<$child>) -> Self {
                Self { body, children }
            }
        }
    };
}

documentation_entity!(
    /// Documentation of a source file and the entities declared in it.
    FileDocumentation,
    EntityDocumentation
);

documentation_entity!(
    /// Documentation of a single entity and its members.
    EntityDocumentation,
    EntityDocumentation
);

documentation_entity!(
    /// Documentation of a module, grouping the index entries of its members.
    ModuleDocumentation,
    IndexEntry
);

documentation_entity!(
    /// Documentation of a namespace, grouping the index entries of its members.
    ///
    /// Only valid inside an index or another grouping.
    NamespaceDocumentation,
    IndexEntry
);
