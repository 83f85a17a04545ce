use egui::Pos2;

use crate::catalog::ElementKind;
use crate::document::Document;
use crate::element::ElementId;
use crate::style::StyleMap;

/// A single mutation of the document.
///
/// Every input event the panels produce (drop, drag stop, click, Apply)
/// becomes one of these and is executed synchronously, so no handler ever
/// observes a half-applied mutation.
#[derive(Debug, Clone)]
pub enum Command {
    /// Insert a new element with the catalog defaults for its kind.
    Insert { kind: ElementKind, position: Pos2 },

    /// Insert with a caller-supplied value (file-origin drops).
    InsertExternal {
        kind: ElementKind,
        value: String,
        position: Pos2,
    },

    /// Overwrite an element's position (drag stop).
    MoveElement { id: ElementId, x: f32, y: f32 },

    /// Point the selection cursor at an element, or at nothing.
    Select { id: Option<ElementId> },

    /// Remove an element.
    Delete { id: ElementId },

    /// Merge buffered style edits into an element, applying the clamp rules.
    Commit { id: ElementId, edits: StyleMap },
}

impl Command {
    /// Executes against the document. Returns the id of a newly inserted
    /// element, if any.
    pub fn execute(self, document: &mut Document) -> Option<ElementId> {
        match self {
            Command::Insert { kind, position } => {
                let id = document.insert(kind, position);
                log::debug!("inserted {} as {id} at {position:?}", kind.label());
                Some(id)
            }
            Command::InsertExternal { kind, value, position } => {
                let id = document.insert_external(kind, value, position);
                log::debug!("inserted external {} as {id} at {position:?}", kind.label());
                Some(id)
            }
            Command::MoveElement { id, x, y } => {
                document.move_to(id, x, y);
                None
            }
            Command::Select { id } => {
                document.select(id);
                None
            }
            Command::Delete { id } => {
                log::debug!("deleting {id}");
                document.delete(id);
                None
            }
            Command::Commit { id, edits } => {
                document.commit(id, edits);
                None
            }
        }
    }
}
