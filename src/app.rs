use eframe::egui;

use crate::command::Command;
use crate::document::Document;
use crate::element::ElementId;
use crate::file_handler::FileHandler;
use crate::panels;
use crate::pending::PendingEdits;

/// In-flight drag of a placed element. Presentation-only state: the document
/// is not touched until the drag stops.
#[derive(Debug, Clone, Copy)]
pub struct DragPreview {
    pub id: ElementId,
    pub delta: egui::Vec2,
}

/// Runs one command against the document. Whenever the selection ends up
/// pointing somewhere new (insert auto-selects, delete may clear, select
/// retargets), the pending buffer is discarded: buffered edits belong to
/// the element that was selected when they were typed.
pub fn dispatch(document: &mut Document, pending: &mut PendingEdits, command: Command) -> Option<ElementId> {
    let selected_before = document.selected();
    let inserted = command.execute(document);
    if document.selected() != selected_before {
        pending.clear();
    }
    inserted
}

pub struct BuilderApp {
    document: Document,
    pending: PendingEdits,
    file_handler: FileHandler,
    drag: Option<DragPreview>,
    canvas_rect: egui::Rect,
}

impl BuilderApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        egui_extras::install_image_loaders(&cc.egui_ctx);
        Self {
            document: Document::new(),
            pending: PendingEdits::new(),
            file_handler: FileHandler::new(),
            drag: None,
            canvas_rect: egui::Rect::ZERO,
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn pending_mut(&mut self) -> &mut PendingEdits {
        &mut self.pending
    }

    pub fn take_drag(&mut self) -> Option<DragPreview> {
        self.drag.take()
    }

    pub fn set_drag(&mut self, drag: Option<DragPreview>) {
        self.drag = drag;
    }

    pub fn set_canvas_rect(&mut self, rect: egui::Rect) {
        self.canvas_rect = rect;
    }

    pub fn canvas_rect(&self) -> egui::Rect {
        self.canvas_rect
    }

    pub fn process_file_drops(&mut self, ctx: &egui::Context, canvas_rect: egui::Rect) -> Option<Command> {
        self.file_handler.process_dropped_files(ctx, canvas_rect)
    }

    pub fn execute(&mut self, command: Command) -> Option<ElementId> {
        dispatch(&mut self.document, &mut self.pending, command)
    }

    pub fn execute_all(&mut self, commands: Vec<Command>) {
        for command in commands {
            self.execute(command);
        }
    }

    fn debug_window(&self, ctx: &egui::Context) {
        egui::Window::new("Document Debug")
            .default_open(false)
            .show(ctx, |ui| {
                ui.label(format!("Elements: {}", self.document.len()));
                ui.label(match self.document.selected() {
                    Some(id) => format!("Selected: {id}"),
                    None => "Selected: none".to_owned(),
                });
                ui.label(format!("Pending edits: {}", self.pending.len()));
                ui.collapsing("JSON", |ui| match self.document.to_json() {
                    Ok(json) => {
                        ui.monospace(json);
                    }
                    Err(err) => {
                        ui.label(format!("serialization failed: {err}"));
                    }
                });
            });
    }
}

impl eframe::App for BuilderApp {
    /// Called each time the UI needs repainting. All document mutations
    /// happen synchronously in here, in event order.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        panels::palette_panel(self, ctx);
        panels::properties_panel(self, ctx);
        panels::canvas_panel(self, ctx);

        self.file_handler.preview_files_being_dropped(ctx);
        self.debug_window(ctx);
    }
}
