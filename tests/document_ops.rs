use std::collections::HashSet;

use egui::Pos2;
use pagecanvas::{Document, ElementKind};

#[test]
fn ids_are_distinct_under_rapid_inserts() {
    let mut document = Document::new();
    let mut seen = HashSet::new();
    for _ in 0..200 {
        let id = document.insert(ElementKind::Text, Pos2::ZERO);
        assert!(seen.insert(id), "id {id} handed out twice");
    }
    assert_eq!(document.len(), 200);
}

#[test]
fn collection_size_tracks_inserts_minus_deletes() {
    let mut document = Document::new();
    let a = document.insert(ElementKind::Text, Pos2::ZERO);
    let b = document.insert(ElementKind::Button, Pos2::ZERO);
    let c = document.insert_external(ElementKind::Image, "bytes://x".to_owned(), Pos2::ZERO);
    assert_eq!(document.len(), 3);

    document.delete(b);
    assert_eq!(document.len(), 2);
    assert!(document.get(a).is_some());
    assert!(document.get(c).is_some());
}

#[test]
fn paint_order_equals_insertion_order() {
    let mut document = Document::new();
    let first = document.insert(ElementKind::Text, Pos2::ZERO);
    let second = document.insert(ElementKind::Button, Pos2::ZERO);
    let third = document.insert(ElementKind::Image, Pos2::ZERO);

    let order: Vec<_> = document.elements().iter().map(|e| e.id).collect();
    assert_eq!(order, vec![first, second, third]);
}

#[test]
fn move_overwrites_position_unconditionally() {
    let mut document = Document::new();
    let id = document.insert(ElementKind::Text, Pos2::new(5.0, 5.0));

    document.move_to(id, 100.0, 200.0);
    assert_eq!(document.get(id).unwrap().position, Pos2::new(100.0, 200.0));

    // Absolute, not relative to the previous position.
    document.move_to(id, 3.0, 4.0);
    assert_eq!(document.get(id).unwrap().position, Pos2::new(3.0, 4.0));
}

#[test]
fn move_on_absent_id_is_a_noop() {
    let mut document = Document::new();
    let id = document.insert(ElementKind::Text, Pos2::new(1.0, 2.0));
    let ghost = {
        let g = document.insert(ElementKind::Text, Pos2::ZERO);
        document.delete(g);
        g
    };

    document.move_to(ghost, 50.0, 50.0);
    assert_eq!(document.len(), 1);
    assert_eq!(document.get(id).unwrap().position, Pos2::new(1.0, 2.0));
}

#[test]
fn delete_on_absent_id_changes_nothing() {
    let mut document = Document::new();
    let id = document.insert(ElementKind::Text, Pos2::ZERO);
    let ghost = {
        let g = document.insert(ElementKind::Button, Pos2::ZERO);
        document.delete(g);
        g
    };
    document.select(Some(id));

    document.delete(ghost);
    document.delete(ghost); // idempotent
    assert_eq!(document.len(), 1);
    assert_eq!(document.selected(), Some(id));
}

#[test]
fn deleting_the_selected_element_clears_the_selection() {
    let mut document = Document::new();
    let id = document.insert(ElementKind::Text, Pos2::ZERO);
    assert_eq!(document.selected(), Some(id));

    document.delete(id);
    assert_eq!(document.selected(), None);
    assert!(document.is_empty());
}

#[test]
fn deleting_an_unselected_element_keeps_the_selection() {
    let mut document = Document::new();
    let a = document.insert(ElementKind::Text, Pos2::ZERO);
    let b = document.insert(ElementKind::Button, Pos2::ZERO);
    document.select(Some(a));

    document.delete(b);
    assert_eq!(document.selected(), Some(a));
}

#[test]
fn insert_then_delete_scenario() {
    // Select e1, insert e2 (auto-selected), delete e1: only e2 remains,
    // still selected.
    let mut document = Document::new();
    let e1 = document.insert(ElementKind::Text, Pos2::new(10.0, 20.0));
    document.select(Some(e1));

    let e2 = document.insert(ElementKind::Image, Pos2::ZERO);
    assert_eq!(document.selected(), Some(e2));

    document.delete(e1);
    let remaining: Vec<_> = document.elements().iter().map(|e| e.id).collect();
    assert_eq!(remaining, vec![e2]);
    assert_eq!(document.selected(), Some(e2));
}

#[test]
fn selection_is_a_cursor_not_an_element_property() {
    let mut document = Document::new();
    let id = document.insert(ElementKind::Text, Pos2::ZERO);

    document.select(None);
    assert_eq!(document.selected(), None);
    assert!(document.selected_element().is_none());

    document.select(Some(id));
    assert_eq!(document.selected_element().map(|e| e.id), Some(id));
}

#[test]
fn document_snapshot_serializes() {
    let mut document = Document::new();
    document.insert(ElementKind::Button, Pos2::new(1.0, 2.0));
    let json = document.to_json().unwrap();
    assert!(json.contains("Click Me"));
}
