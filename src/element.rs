use egui::Pos2;
use serde::Serialize;

use crate::catalog::ElementKind;
use crate::style::StyleMap;

/// Unique identifier of a placed element. Assigned at creation, immutable,
/// never reused within a document's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct ElementId(pub(crate) u64);

impl std::fmt::Display for ElementId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "e{}", self.0)
    }
}

/// Kind-dependent content of a placed element.
///
/// The variant is fixed at creation: commits may replace the inner string,
/// but nothing ever turns one kind into another.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum ElementContent {
    /// Literal text painted onto the page.
    Text(String),
    /// Image source reference (URL or session-scoped `bytes://` URI).
    Image(String),
    /// Label of a clickable-looking button.
    Button(String),
    /// Address of an embedded external page.
    EmbeddedPage(String),
}

impl ElementContent {
    /// Content of `kind` carrying a caller-supplied value.
    pub fn new(kind: ElementKind, value: String) -> Self {
        match kind {
            ElementKind::Text => Self::Text(value),
            ElementKind::Image => Self::Image(value),
            ElementKind::Button => Self::Button(value),
            ElementKind::EmbeddedPage => Self::EmbeddedPage(value),
        }
    }

    pub fn kind(&self) -> ElementKind {
        match self {
            Self::Text(_) => ElementKind::Text,
            Self::Image(_) => ElementKind::Image,
            Self::Button(_) => ElementKind::Button,
            Self::EmbeddedPage(_) => ElementKind::EmbeddedPage,
        }
    }

    pub fn value(&self) -> &str {
        match self {
            Self::Text(value) | Self::Image(value) | Self::Button(value) | Self::EmbeddedPage(value) => value,
        }
    }

    pub(crate) fn set_value(&mut self, new_value: String) {
        match self {
            Self::Text(value) | Self::Image(value) | Self::Button(value) | Self::EmbeddedPage(value) => {
                *value = new_value;
            }
        }
    }
}

/// One item placed on the canvas.
#[derive(Debug, Clone, Serialize)]
pub struct PlacedElement {
    pub id: ElementId,
    pub content: ElementContent,
    /// Offset of the element's top-left corner from the canvas origin.
    pub position: Pos2,
    pub style: StyleMap,
}

impl PlacedElement {
    pub fn kind(&self) -> ElementKind {
        self.content.kind()
    }

    pub fn value(&self) -> &str {
        self.content.value()
    }
}
