//! Link resolution table.
//!
//! A [`Linker`] maps entity ids to the documents that contain them and knows
//! URL templates for external documentation (e.g. `std::` names to
//! cppreference). [`LinkResolver`] combines a linker with the generator's
//! link options and turns link destinations into URLs at render time.

use std::collections::HashMap;

use percent_encoding::{NON_ALPHANUMERIC, utf8_percent_encode};

use crate::id::{EntityId, OutputName};
use crate::link::LinkDestination;
use crate::util::anchor_id;

/// Placeholder in external URL templates replaced by the encoded entity name.
const NAME_PLACEHOLDER: &str = "$$";

/// External documentation rule.
#[derive(Clone, Debug, PartialEq, Eq)]
struct ExternalDoc {
    namespace: String,
    url_template: String,
}

impl ExternalDoc {
    fn matches(&self, name: &str) -> bool {
        name.strip_prefix(self.namespace.as_str())
            .is_some_and(|rest| rest.starts_with("::"))
    }

    fn url(&self, name: &str) -> String {
        let encoded = utf8_percent_encode(name, NON_ALPHANUMERIC).to_string();
        self.url_template.replace(NAME_PLACEHOLDER, &encoded)
    }
}

/// Table of link targets, filled by the documentation assembler.
#[derive(Clone, Debug, Default)]
pub struct Linker {
    documents: HashMap<EntityId, OutputName>,
    external: Vec<ExternalDoc>,
}

impl Linker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that entity `id` is documented in `document`.
    ///
    /// A later registration for the same id replaces the earlier one.
    pub fn register(&mut self, id: impl Into<EntityId>, document: OutputName) {
        self.documents.insert(id.into(), document);
    }

    /// Send names in `namespace` to external documentation.
    ///
    /// `$$` in `url_template` is replaced by the percent-encoded name. Rules
    /// are tried in registration order.
    pub fn register_external(
        &mut self,
        namespace: impl Into<String>,
        url_template: impl Into<String>,
    ) {
        self.external.push(ExternalDoc {
            namespace: namespace.into(),
            url_template: url_template.into(),
        });
    }

    /// Document containing entity `id`, if registered.
    pub fn lookup(&self, id: &EntityId) -> Option<&OutputName> {
        self.documents.get(id)
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty() && self.external.is_empty()
    }

    /// Resolve a destination against the table.
    ///
    /// Unresolved ids become internal destinations when registered, external
    /// ones when an external rule matches, and stay unresolved otherwise.
    /// Internal destinations without a document pick up a registered one.
    #[must_use]
    pub fn resolve(&self, destination: &LinkDestination) -> LinkDestination {
        match destination {
            LinkDestination::Unresolved(id) => {
                if let Some(document) = self.lookup(id) {
                    LinkDestination::Internal {
                        id: id.clone(),
                        document: Some(document.clone()),
                    }
                } else if let Some(rule) = self.external.iter().find(|r| r.matches(id.as_str())) {
                    LinkDestination::External(rule.url(id.as_str()))
                } else {
                    destination.clone()
                }
            }
            LinkDestination::Internal { id, document: None } => LinkDestination::Internal {
                id: id.clone(),
                document: self.lookup(id).cloned(),
            },
            LinkDestination::Internal { .. } | LinkDestination::External(_) => destination.clone(),
        }
    }
}

/// Link options of one render.
///
/// Turns destinations into URLs: internal destinations become
/// `<prefix><document>.<extension>#standardese-<id>`, with an empty file
/// part when the document is not known.
#[derive(Clone, Copy, Debug)]
pub struct LinkResolver<'a> {
    prefix: &'a str,
    extension: &'a str,
    linker: Option<&'a Linker>,
}

impl<'a> LinkResolver<'a> {
    #[must_use]
    pub fn new(prefix: &'a str, extension: &'a str, linker: Option<&'a Linker>) -> Self {
        Self {
            prefix,
            extension,
            linker,
        }
    }

    /// URL of a destination, or `None` if it cannot be resolved.
    #[must_use]
    pub fn url(&self, destination: &LinkDestination) -> Option<String> {
        let resolved;
        let destination = match (destination, self.linker) {
            (
                LinkDestination::Unresolved(_) | LinkDestination::Internal { document: None, .. },
                Some(linker),
            ) => {
                resolved = linker.resolve(destination);
                &resolved
            }
            _ => destination,
        };

        match destination {
            LinkDestination::Unresolved(_) => None,
            LinkDestination::Internal { id, document } => {
                let file = document
                    .as_ref()
                    .map(|document| document.file_name(self.extension))
                    .unwrap_or_default();
                Some(format!("{}{file}#{}", self.prefix, anchor_id(id.as_str())))
            }
            LinkDestination::External(url) => Some(url.clone()),
        }
    }
}
