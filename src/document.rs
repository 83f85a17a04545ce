use egui::Pos2;
use serde::Serialize;

use crate::catalog::{self, ElementKind};
use crate::element::{ElementContent, ElementId, PlacedElement};
use crate::id_generator::IdGenerator;
use crate::style::{self, StyleMap};

/// The canvas document: the ordered collection of placed elements plus the
/// selection cursor.
///
/// Insertion order is paint order; later elements sit visually above earlier
/// ones. This struct is the single mutation surface for the whole document:
/// every input event ends up in exactly one of the operations below, applied
/// synchronously and atomically with respect to the next event.
#[derive(Debug, Default, Serialize)]
pub struct Document {
    elements: Vec<PlacedElement>,
    selected: Option<ElementId>,
    #[serde(skip)]
    ids: IdGenerator,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an element with the catalog defaults for `kind`, appends it,
    /// and selects it.
    pub fn insert(&mut self, kind: ElementKind, position: Pos2) -> ElementId {
        self.insert_content(catalog::default_content(kind), catalog::default_style(kind), position)
    }

    /// Like [`insert`](Self::insert), but with a caller-supplied value.
    /// Used for file-originated drops.
    pub fn insert_external(&mut self, kind: ElementKind, value: String, position: Pos2) -> ElementId {
        self.insert_content(ElementContent::new(kind, value), catalog::default_style(kind), position)
    }

    fn insert_content(&mut self, content: ElementContent, style: StyleMap, position: Pos2) -> ElementId {
        let id = self.ids.next_id();
        self.elements.push(PlacedElement {
            id,
            content,
            position,
            style,
        });
        self.selected = Some(id);
        id
    }

    /// Overwrites the element's position unconditionally. No-op on an absent
    /// id; the selection is untouched either way.
    pub fn move_to(&mut self, id: ElementId, x: f32, y: f32) {
        if let Some(element) = self.get_mut(id) {
            element.position = Pos2::new(x, y);
        }
    }

    /// Sets the selection cursor. Deliberately does not touch the pending
    /// style buffer; the discard-on-reselect policy lives in the app layer.
    pub fn select(&mut self, id: Option<ElementId>) {
        self.selected = id;
    }

    /// Removes the element if present; clears the selection if it pointed at
    /// it. Idempotent on absent ids.
    pub fn delete(&mut self, id: ElementId) {
        self.elements.retain(|element| element.id != id);
        if self.selected == Some(id) {
            self.selected = None;
        }
    }

    /// Shallow-merges `edits` into the element's style: keys present in
    /// `edits` overwrite, keys absent are retained, nothing is ever removed.
    ///
    /// A `value` key overwrites the element's content instead of landing in
    /// the style map. `width`/`height` keys pass through the clamp rule, so
    /// only validated pixel values are ever stored. Keys not in `edits` are
    /// left alone, which makes an empty commit a no-op. No-op on absent ids.
    pub fn commit(&mut self, id: ElementId, mut edits: StyleMap) {
        let Some(element) = self.elements.iter_mut().find(|element| element.id == id) else {
            return;
        };

        if let Some(value) = edits.remove("value") {
            if !value.is_empty() {
                element.content.set_value(value);
            }
        }

        for (key, default, max) in [
            ("width", style::WIDTH_DEFAULT, style::WIDTH_MAX),
            ("height", style::HEIGHT_DEFAULT, style::HEIGHT_MAX),
        ] {
            if let Some(raw) = edits.get(key) {
                let clamped = style::clamp_dimension(raw, default, max);
                edits.insert(key.to_owned(), clamped);
            }
        }

        element.style.append(&mut edits);
    }

    pub fn elements(&self) -> &[PlacedElement] {
        &self.elements
    }

    pub fn get(&self, id: ElementId) -> Option<&PlacedElement> {
        self.elements.iter().find(|element| element.id == id)
    }

    fn get_mut(&mut self, id: ElementId) -> Option<&mut PlacedElement> {
        self.elements.iter_mut().find(|element| element.id == id)
    }

    pub fn selected(&self) -> Option<ElementId> {
        self.selected
    }

    pub fn selected_element(&self) -> Option<&PlacedElement> {
        self.selected.and_then(|id| self.get(id))
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Pretty-printed snapshot for the debug window.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
