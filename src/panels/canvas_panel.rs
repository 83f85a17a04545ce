use eframe::egui::{self, Align2, Color32, FontId, Pos2, Rect, Sense, Stroke, Vec2, vec2};

use crate::app::{BuilderApp, DragPreview};
use crate::catalog::ElementKind;
use crate::command::Command;
use crate::renderer::Renderer;

const SELECTION_RING: Color32 = Color32::from_rgb(0x4c, 0x8b, 0xf5);
const DELETE_FILL: Color32 = Color32::from_rgb(0xdc, 0x3c, 0x3c);

/// The canvas: drop target for both palette drags and OS file drops, and the
/// surface where elements are selected, dragged and deleted.
///
/// Dragging is presentation-only until the stop signal: the document sees a
/// single `MoveElement` with the final position, so an aborted drag leaves
/// the element at its last confirmed stop.
pub fn canvas_panel(app: &mut BuilderApp, ctx: &egui::Context) {
    let mut commands: Vec<Command> = Vec::new();

    egui::CentralPanel::default().show(ctx, |ui| {
        let canvas_rect = ui.available_rect_before_wrap();
        app.set_canvas_rect(canvas_rect);

        ui.painter().rect_filled(canvas_rect, 0.0, Color32::WHITE);

        // Registered before the elements so their interactions sit on top.
        let background = ui.interact(canvas_rect, ui.id().with("canvas_background"), Sense::click());

        if app.document().is_empty() {
            ui.painter().text(
                canvas_rect.center(),
                Align2::CENTER_CENTER,
                "Page preview area",
                FontId::proportional(16.0),
                Color32::from_gray(170),
            );
        }

        let renderer = Renderer::new();
        let selected = app.document().selected();
        let mut drag = app.take_drag();

        for element in app.document().elements() {
            let id = element.id;
            let preview = drag
                .as_ref()
                .filter(|d| d.id == id)
                .map_or(Vec2::ZERO, |d| d.delta);
            let origin = canvas_rect.min + element.position.to_vec2() + preview;
            let rect = renderer.paint(ui, canvas_rect, element, origin);

            let response = ui.interact(rect, ui.id().with(id), Sense::click_and_drag());
            if response.clicked() {
                commands.push(Command::Select { id: Some(id) });
            }
            if response.drag_started() {
                drag = Some(DragPreview { id, delta: Vec2::ZERO });
            }
            if response.dragged() {
                if let Some(d) = drag.as_mut().filter(|d| d.id == id) {
                    d.delta = clamp_to_canvas(
                        element.position,
                        d.delta + response.drag_delta(),
                        rect.size(),
                        canvas_rect,
                    );
                }
            }
            if response.drag_stopped() {
                if let Some(d) = drag.take_if(|d| d.id == id) {
                    let stop = element.position + d.delta;
                    commands.push(Command::MoveElement { id, x: stop.x, y: stop.y });
                }
            } else if !response.dragged()
                && !response.drag_started()
                && drag.as_ref().is_some_and(|d| d.id == id)
            {
                // The host input system dropped the drag without a stop
                // signal; the element keeps its last confirmed position.
                drag = None;
            }

            if selected == Some(id) {
                let outline = rect.expand(3.0);
                ui.painter()
                    .rect_stroke(outline, 3.0, Stroke::new(2.0, SELECTION_RING));

                let delete_rect = Rect::from_center_size(outline.right_top(), vec2(16.0, 16.0));
                let delete = ui.interact(delete_rect, ui.id().with(("delete", id)), Sense::click());
                ui.painter().circle_filled(delete_rect.center(), 8.0, DELETE_FILL);
                ui.painter().text(
                    delete_rect.center(),
                    Align2::CENTER_CENTER,
                    "✕",
                    FontId::proportional(10.0),
                    Color32::WHITE,
                );
                if delete.clicked() {
                    commands.push(Command::Delete { id });
                }
            }
        }

        app.set_drag(drag);

        // Palette-origin drop: translate the pointer into canvas-relative
        // coordinates and insert with the catalog defaults.
        if ui.input(|i| i.pointer.any_released()) {
            if let Some(kind) = egui::DragAndDrop::take_payload::<ElementKind>(ui.ctx()) {
                if let Some(pointer) = ui.input(|i| i.pointer.hover_pos()).filter(|p| canvas_rect.contains(*p)) {
                    let position = (pointer - canvas_rect.min).to_pos2();
                    commands.push(Command::Insert { kind: *kind, position });
                }
            }
        }

        if background.clicked() {
            commands.push(Command::Select { id: None });
        }

        // File-origin drops come in through the OS, not egui's dnd payloads.
        if let Some(command) = app.process_file_drops(ui.ctx(), canvas_rect) {
            commands.push(command);
        }
    });

    app.execute_all(commands);
}

/// Keeps a dragged element inside the canvas. This is a presentation-layer
/// bound; the document's `move_to` itself is unconditional.
fn clamp_to_canvas(position: Pos2, delta: Vec2, size: Vec2, canvas: Rect) -> Vec2 {
    let desired = position + delta;
    let max = (canvas.size() - size).max(Vec2::ZERO);
    let clamped = Pos2::new(desired.x.clamp(0.0, max.x), desired.y.clamp(0.0, max.y));
    clamped - position
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drag_is_bounded_by_the_canvas() {
        let canvas = Rect::from_min_size(Pos2::new(100.0, 100.0), vec2(800.0, 600.0));
        let size = vec2(100.0, 50.0);

        // Unbounded inside the canvas.
        let delta = clamp_to_canvas(Pos2::new(10.0, 10.0), vec2(20.0, 30.0), size, canvas);
        assert_eq!(delta, vec2(20.0, 30.0));

        // Pushed past the right edge: clamped to width - element width.
        let delta = clamp_to_canvas(Pos2::new(650.0, 10.0), vec2(200.0, 0.0), size, canvas);
        assert_eq!(delta, vec2(50.0, 0.0));

        // Pushed past the origin: clamped to zero.
        let delta = clamp_to_canvas(Pos2::new(10.0, 10.0), vec2(-50.0, -50.0), size, canvas);
        assert_eq!(delta, vec2(-10.0, -10.0));
    }
}
