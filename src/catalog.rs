use serde::{Deserialize, Serialize};

use crate::element::ElementContent;
use crate::style::StyleMap;

/// The fixed set of element kinds the palette offers. Not user-extensible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ElementKind {
    Text,
    Image,
    Button,
    EmbeddedPage,
}

/// Palette order.
pub const ALL_KINDS: [ElementKind; 4] = [
    ElementKind::Text,
    ElementKind::Image,
    ElementKind::Button,
    ElementKind::EmbeddedPage,
];

/// Image shown until the user points an Image element somewhere else.
pub const PLACEHOLDER_IMAGE: &str = "https://placehold.co/300x200";

/// Address a freshly placed embedded page starts with.
pub const DEFAULT_PAGE_ADDRESS: &str = "https://example.com";

impl ElementKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::Text => "Text",
            Self::Image => "Image",
            Self::Button => "Button",
            Self::EmbeddedPage => "Embedded Page",
        }
    }
}

/// Content a catalog-origin insert starts with.
pub fn default_content(kind: ElementKind) -> ElementContent {
    match kind {
        ElementKind::Text => ElementContent::Text("Text".to_owned()),
        ElementKind::Image => ElementContent::Image(PLACEHOLDER_IMAGE.to_owned()),
        ElementKind::Button => ElementContent::Button("Click Me".to_owned()),
        ElementKind::EmbeddedPage => ElementContent::EmbeddedPage(DEFAULT_PAGE_ADDRESS.to_owned()),
    }
}

/// Style a freshly placed element starts with. Only embedded pages carry
/// defaults; everything else begins empty.
pub fn default_style(kind: ElementKind) -> StyleMap {
    let mut style = StyleMap::new();
    if kind == ElementKind::EmbeddedPage {
        style.insert("width".to_owned(), "100%".to_owned());
        style.insert("height".to_owned(), "100%".to_owned());
        style.insert("borderRadius".to_owned(), "0px".to_owned());
    }
    style
}
