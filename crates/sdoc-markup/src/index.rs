//! Index entities: lists of documented entities grouped by file, namespace
//! or module.

use crate::block::Heading;
use crate::documentation::{ModuleDocumentation, NamespaceDocumentation};
use crate::id::EntityId;
use crate::kind::EntityKind;
use crate::list::{Description, Term};

/// One entry of an index with its brief.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EntityIndexItem {
    id: EntityId,
    entity: Term,
    brief: Option<Description>,
}

impl EntityIndexItem {
    #[must_use]
    pub fn new(id: impl Into<EntityId>, entity: Term, brief: Option<Description>) -> Self {
        Self {
            id: id.into(),
            entity,
            brief,
        }
    }

    pub fn id(&self) -> &EntityId {
        &self.id
    }

    /// Name of the entity, usually a documentation link.
    pub fn entity(&self) -> &Term {
        &self.entity
    }

    pub fn brief(&self) -> Option<&Description> {
        self.brief.as_ref()
    }
}

/// Child of an index or grouping.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum IndexEntry {
    Item(EntityIndexItem),
    Namespace(NamespaceDocumentation),
    Module(ModuleDocumentation),
}

impl IndexEntry {
    pub fn kind(&self) -> EntityKind {
        match self {
            Self::Item(_) => EntityKind::EntityIndexItem,
            Self::Namespace(_) => EntityKind::NamespaceDocumentation,
            Self::Module(_) => EntityKind::ModuleDocumentation,
        }
    }
}

impl From<EntityIndexItem> for IndexEntry {
    fn from(item: EntityIndexItem) -> Self {
        Self::Item(item)
    }
}

impl From<NamespaceDocumentation> for IndexEntry {
    fn from(doc: NamespaceDocumentation) -> Self {
        Self::Namespace(doc)
    }
}

impl From<ModuleDocumentation> for IndexEntry {
    fn from(doc: ModuleDocumentation) -> Self {
        Self::Module(doc)
    }
}

macro_rules! index_entity {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq, Eq)]
        pub struct $name {
            id: EntityId,
            heading: Heading,
            entries: Vec<IndexEntry>,
        }

        impl $name {
            #[must_use]
            pub fn new(id: impl Into<EntityId>, heading: Heading, entries: Vec<IndexEntry>) -> Self {
                Self {
                    id: id.into(),
                    heading,
                    entries,
                }
            }

            pub fn id(&self) -> &EntityId {
                &self.id
            }

            pub fn heading(&self) -> &Heading {
                &self.heading
            }

            pub fn entries(&self) -> &[IndexEntry] {
                &self.entries
            }
        }
    };
}

index_entity!(
    /// Index of all documented files.
    FileIndex
);

index_entity!(
    /// Index of all documented entities, grouped by namespace.
    EntityIndex
);

index_entity!(
    /// Index of all modules.
    ModuleIndex
);
