//! Entity kind tags.

use std::fmt;

/// Kind tag of a documentation entity.
///
/// Every entity type reports exactly one kind through its `kind()` method.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EntityKind {
    MainDocument,
    Subdocument,
    TemplateDocument,

    FileDocumentation,
    EntityDocumentation,
    ModuleDocumentation,
    NamespaceDocumentation,

    FileIndex,
    EntityIndex,
    ModuleIndex,
    EntityIndexItem,

    Heading,
    Subheading,
    Paragraph,

    ListItem,
    Term,
    Description,
    TermDescriptionItem,
    UnorderedList,
    OrderedList,

    BlockQuote,
    CodeBlock,
    CodeBlockKeyword,
    CodeBlockIdentifier,
    CodeBlockStringLiteral,
    CodeBlockIntLiteral,
    CodeBlockFloatLiteral,
    CodeBlockPunctuation,
    CodeBlockPreprocessor,
    ThematicBreak,

    BriefSection,
    DetailsSection,
    InlineSection,
    ListSection,

    Text,
    Emphasis,
    StrongEmphasis,
    Code,
    SoftBreak,
    HardBreak,
    ExternalLink,
    DocumentationLink,
}

impl EntityKind {
    /// All kinds, in declaration order.
    pub const ALL: [Self; 42] = [
        Self::MainDocument,
        Self::Subdocument,
        Self::TemplateDocument,
        Self::FileDocumentation,
        Self::EntityDocumentation,
        Self::ModuleDocumentation,
        Self::NamespaceDocumentation,
        Self::FileIndex,
        Self::EntityIndex,
        Self::ModuleIndex,
        Self::EntityIndexItem,
        Self::Heading,
        Self::Subheading,
        Self::Paragraph,
        Self::ListItem,
        Self::Term,
        Self::Description,
        Self::TermDescriptionItem,
        Self::UnorderedList,
        Self::OrderedList,
        Self::BlockQuote,
        Self::CodeBlock,
        Self::CodeBlockKeyword,
        Self::CodeBlockIdentifier,
        Self::CodeBlockStringLiteral,
        Self::CodeBlockIntLiteral,
        Self::CodeBlockFloatLiteral,
        Self::CodeBlockPunctuation,
        Self::CodeBlockPreprocessor,
        Self::ThematicBreak,
        Self::BriefSection,
        Self::DetailsSection,
        Self::InlineSection,
        Self::ListSection,
        Self::Text,
        Self::Emphasis,
        Self::StrongEmphasis,
        Self::Code,
        Self::SoftBreak,
        Self::HardBreak,
        Self::ExternalLink,
        Self::DocumentationLink,
    ];

    /// Snake-case name of the kind.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::MainDocument => "main_document",
            Self::Subdocument => "subdocument",
            Self::TemplateDocument => "template_document",
            Self::FileDocumentation => "file_documentation",
            Self::EntityDocumentation => "entity_documentation",
            Self::ModuleDocumentation => "module_documentation",
            Self::NamespaceDocumentation => "namespace_documentation",
            Self::FileIndex => "file_index",
            Self::EntityIndex => "entity_index",
            Self::ModuleIndex => "module_index",
            Self::EntityIndexItem => "entity_index_item",
            Self::Heading => "heading",
            Self::Subheading => "subheading",
            Self::Paragraph => "paragraph",
            Self::ListItem => "list_item",
            Self::Term => "term",
            Self::Description => "description",
            Self::TermDescriptionItem => "term_description_item",
            Self::UnorderedList => "unordered_list",
            Self::OrderedList => "ordered_list",
            Self::BlockQuote => "block_quote",
            Self::CodeBlock => "code_block",
            Self::CodeBlockKeyword => "code_block_keyword",
            Self::CodeBlockIdentifier => "code_block_identifier",
            Self::CodeBlockStringLiteral => "code_block_string_literal",
            Self::CodeBlockIntLiteral => "code_block_int_literal",
            Self::CodeBlockFloatLiteral => "code_block_float_literal",
            Self::CodeBlockPunctuation => "code_block_punctuation",
            Self::CodeBlockPreprocessor => "code_block_preprocessor",
            Self::ThematicBreak => "thematic_break",
            Self::BriefSection => "brief_section",
            Self::DetailsSection => "details_section",
            Self::InlineSection => "inline_section",
            Self::ListSection => "list_section",
            Self::Text => "text",
            Self::Emphasis => "emphasis",
            Self::StrongEmphasis => "strong_emphasis",
            Self::Code => "code",
            Self::SoftBreak => "soft_break",
            Self::HardBreak => "hard_break",
            Self::ExternalLink => "external_link",
            Self::DocumentationLink => "documentation_link",
        }
    }

    /// Whether entities of this kind may be rendered on their own.
    ///
    /// Child-only kinds are only valid inside one specific container type.
    /// Documents are rendered through their own entry point.
    #[must_use]
    pub fn is_standalone(self) -> bool {
        !matches!(
            self,
            Self::MainDocument
                | Self::Subdocument
                | Self::TemplateDocument
                | Self::NamespaceDocumentation
                | Self::EntityIndexItem
                | Self::ListItem
                | Self::Term
                | Self::Description
                | Self::TermDescriptionItem
                | Self::BriefSection
                | Self::DetailsSection
                | Self::InlineSection
                | Self::ListSection
        )
    }

    /// Whether this is an inline-level kind.
    #[must_use]
    pub fn is_phrasing(self) -> bool {
        matches!(
            self,
            Self::Text
                | Self::Emphasis
                | Self::StrongEmphasis
                | Self::Code
                | Self::SoftBreak
                | Self::HardBreak
                | Self::ExternalLink
                | Self::DocumentationLink
        )
    }

    /// Whether this is one of the document kinds.
    #[must_use]
    pub fn is_document(self) -> bool {
        matches!(
            self,
            Self::MainDocument | Self::Subdocument | Self::TemplateDocument
        )
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Implement `kind()` for entity types with a fixed kind.
macro_rules! impl_entity_kind {
    ($($ty:ty => $kind:ident),* $(,)?) => {
        $(
            impl $ty {
                pub fn kind(&self) -> EntityKind {
                    EntityKind::$kind
                }
            }
        )*
    };
}

impl_entity_kind!(
    crate::block::Paragraph => Paragraph,
    crate::block::Heading => Heading,
    crate::block::Subheading => Subheading,
    crate::block::BlockQuote => BlockQuote,
    crate::code_block::CodeBlock => CodeBlock,
    crate::list::ListItem => ListItem,
    crate::list::Term => Term,
    crate::list::Description => Description,
    crate::list::TermDescriptionItem => TermDescriptionItem,
    crate::list::UnorderedList => UnorderedList,
    crate::list::OrderedList => OrderedList,
    crate::doc_section::BriefSection => BriefSection,
    crate::doc_section::DetailsSection => DetailsSection,
    crate::doc_section::InlineSection => InlineSection,
    crate::doc_section::ListSection => ListSection,
    crate::documentation::FileDocumentation => FileDocumentation,
    crate::documentation::EntityDocumentation => EntityDocumentation,
    crate::documentation::ModuleDocumentation => ModuleDocumentation,
    crate::documentation::NamespaceDocumentation => NamespaceDocumentation,
    crate::index::FileIndex => FileIndex,
    crate::index::EntityIndex => EntityIndex,
    crate::index::ModuleIndex => ModuleIndex,
    crate::index::EntityIndexItem => EntityIndexItem,
    crate::phrasing::Text => Text,
    crate::phrasing::Emphasis => Emphasis,
    crate::phrasing::StrongEmphasis => StrongEmphasis,
    crate::phrasing::Code => Code,
    crate::link::ExternalLink => ExternalLink,
    crate::link::DocumentationLink => DocumentationLink,
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_child_only_kinds() {
        let child_only: Vec<_> = EntityKind::ALL
            .into_iter()
            .filter(|kind| !kind.is_standalone())
            .map(EntityKind::as_str)
            .collect();
        assert_eq!(
            child_only,
            [
                "main_document",
                "subdocument",
                "template_document",
                "namespace_documentation",
                "entity_index_item",
                "list_item",
                "term",
                "description",
                "term_description_item",
                "brief_section",
                "details_section",
                "inline_section",
                "list_section",
            ]
        );
    }

    #[test]
    fn test_phrasing_kinds_are_standalone() {
        for kind in EntityKind::ALL.into_iter().filter(|k| k.is_phrasing()) {
            assert!(kind.is_standalone(), "{kind}");
            assert!(!kind.is_document(), "{kind}");
        }
    }
}
