use eframe::egui;

use crate::app::BuilderApp;
use crate::catalog;

/// Left-hand palette: one drag source per catalog kind.
pub fn palette_panel(app: &BuilderApp, ctx: &egui::Context) {
    egui::SidePanel::left("palette_panel")
        .resizable(true)
        .default_width(180.0)
        .show(ctx, |ui| {
            ui.heading("Page Studio");
            ui.separator();

            ui.label("Elements");
            for kind in catalog::ALL_KINDS {
                let id = egui::Id::new("palette_item").with(kind.label());
                ui.dnd_drag_source(id, kind, |ui| {
                    ui.label(kind.label());
                });
            }

            ui.separator();
            ui.small("Drag an element onto the canvas, or drop an image file straight from your file manager.");

            ui.separator();
            ui.label(format!("{} element(s) placed", app.document().len()));
        });
}
