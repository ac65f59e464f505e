//! Lists and their items.

use crate::block::Block;
use crate::id::EntityId;
use crate::kind::EntityKind;
use crate::phrasing::Phrasing;

/// Item of a list: either generic blocks or a term with its description.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ListEntry {
    Item(ListItem),
    TermDescription(TermDescriptionItem),
}

impl ListEntry {
    pub fn kind(&self) -> EntityKind {
        match self {
            Self::Item(_) => EntityKind::ListItem,
            Self::TermDescription(_) => EntityKind::TermDescriptionItem,
        }
    }
}

impl From<ListItem> for ListEntry {
    fn from(item: ListItem) -> Self {
        Self::Item(item)
    }
}

impl From<TermDescriptionItem> for ListEntry {
    fn from(item: TermDescriptionItem) -> Self {
        Self::TermDescription(item)
    }
}

/// List item holding arbitrary blocks.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ListItem {
    children: Vec<Block>,
}

impl ListItem {
    #[must_use]
    pub fn new(children: Vec<Block>) -> Self {
        Self { children }
    }

    pub fn children(&self) -> &[Block] {
        &self.children
    }
}

/// Term of a term/description pair, or the entity name of an index item.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Term {
    children: Vec<Phrasing>,
}

impl Term {
    #[must_use]
    pub fn new(children: Vec<Phrasing>) -> Self {
        Self { children }
    }

    pub fn children(&self) -> &[Phrasing] {
        &self.children
    }
}

/// Description of a term/description pair, or the brief of an index item.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Description {
    children: Vec<Phrasing>,
}

impl Description {
    #[must_use]
    pub fn new(children: Vec<Phrasing>) -> Self {
        Self { children }
    }

    pub fn children(&self) -> &[Phrasing] {
        &self.children
    }
}

/// List item of the form `term - description`, e.g. a documented parameter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TermDescriptionItem {
    id: EntityId,
    term: Term,
    description: Description,
}

impl TermDescriptionItem {
    #[must_use]
    pub fn new(id: impl Into<EntityId>, term: Term, description: Description) -> Self {
        Self {
            id: id.into(),
            term,
            description,
        }
    }

    pub fn id(&self) -> &EntityId {
        &self.id
    }

    pub fn term(&self) -> &Term {
        &self.term
    }

    pub fn description(&self) -> &Description {
        &self.description
    }
}

/// Bullet list.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UnorderedList {
    items: Vec<ListEntry>,
}

impl UnorderedList {
    #[must_use]
    pub fn new(items: Vec<ListEntry>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[ListEntry] {
        &self.items
    }
}

/// Numbered list, starting at one.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OrderedList {
    items: Vec<ListEntry>,
}

impl OrderedList {
    #[must_use]
    pub fn new(items: Vec<ListEntry>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[ListEntry] {
        &self.items
    }
}
