/// Link reference definitions and destination resolution
use std::borrow::Cow;
use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::ast::LinkTarget;

/// A `[label]: destination "title"` definition
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkDefinition {
    pub destination: String,
    #[serde(default)]
    pub title: Option<String>,
}

impl LinkDefinition {
    pub fn new(destination: impl Into<String>, title: Option<String>) -> Self {
        LinkDefinition {
            destination: destination.into(),
            title,
        }
    }
}

/// Label -> definition table. Labels are matched exactly as the parser stored them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReferenceMap {
    definitions: HashMap<String, LinkDefinition>,
}

impl ReferenceMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// First definition for a label wins, as in CommonMark
    pub fn insert(&mut self, label: impl Into<String>, definition: LinkDefinition) {
        self.definitions.entry(label.into()).or_insert(definition);
    }

    pub fn get(&self, label: &str) -> Option<&LinkDefinition> {
        self.definitions.get(label)
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

impl<L: Into<String>> FromIterator<(L, LinkDefinition)> for ReferenceMap {
    fn from_iter<I: IntoIterator<Item = (L, LinkDefinition)>>(iter: I) -> Self {
        let mut map = ReferenceMap::new();
        for (label, definition) in iter {
            map.insert(label, definition);
        }
        map
    }
}

/// Destination and title of a link or image after resolution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved<'a> {
    pub destination: Cow<'a, str>,
    pub title: Option<Cow<'a, str>>,
}

/// Resolve a link target against the reference map.
///
/// An unknown label resolves to an empty destination with no title; the
/// label is reported through `tracing` instead of failing the render.
pub fn resolve<'a>(target: &'a LinkTarget, references: &'a ReferenceMap) -> Resolved<'a> {
    match target {
        LinkTarget::Inline { destination, title } => Resolved {
            destination: Cow::Borrowed(destination),
            title: title.as_deref().map(Cow::Borrowed),
        },
        LinkTarget::Reference(label) => match references.get(label) {
            Some(definition) => Resolved {
                destination: Cow::Borrowed(&definition.destination),
                title: definition.title.as_deref().map(Cow::Borrowed),
            },
            None => {
                if !label.is_empty() {
                    tracing::warn!(label = %label, "unresolved link reference");
                }
                Resolved {
                    destination: Cow::Borrowed(""),
                    title: None,
                }
            }
        },
    }
}
