use eframe::egui::{self, Color32};

use crate::app::BuilderApp;
use crate::catalog::ElementKind;
use crate::command::Command;
use crate::pending::PendingEdits;
use crate::style::{self, StyleMap};

/// Right-hand settings panel. Every field change writes one key into the
/// pending buffer; nothing touches the document until Apply.
pub fn properties_panel(app: &mut BuilderApp, ctx: &egui::Context) {
    egui::SidePanel::right("properties_panel")
        .resizable(true)
        .default_width(260.0)
        .show(ctx, |ui| {
            ui.heading("Element Settings");
            ui.separator();

            let Some(element) = app.document().selected_element() else {
                ui.label("Select an element to start editing.");
                return;
            };
            let id = element.id;
            let kind = element.kind();
            let current_value = element.value().to_owned();
            let current_style = element.style.clone();

            {
                let pending = app.pending_mut();
                value_field(ui, pending, kind, &current_value);

                match kind {
                    ElementKind::Text => {
                        px_field(ui, pending, &current_style, "fontSize", "Font size");
                        color_field(ui, pending, &current_style, "color", "Text color", Color32::from_gray(30));
                    }
                    ElementKind::Image => {
                        px_field(ui, pending, &current_style, "width", "Width");
                        px_field(ui, pending, &current_style, "height", "Height");
                        brightness_field(ui, pending, &current_style);
                    }
                    ElementKind::Button => {
                        px_field(ui, pending, &current_style, "fontSize", "Font size");
                        color_field(
                            ui,
                            pending,
                            &current_style,
                            "backgroundColor",
                            "Background",
                            Color32::from_rgb(0x3b, 0x82, 0xf6),
                        );
                        color_field(ui, pending, &current_style, "color", "Text color", Color32::WHITE);
                        text_field(ui, pending, "padding", "Padding", "e.g. 10px 20px");
                        text_field(ui, pending, "borderRadius", "Border radius", "e.g. 8px");
                    }
                    ElementKind::EmbeddedPage => {
                        px_field(ui, pending, &current_style, "width", "Width");
                        px_field(ui, pending, &current_style, "height", "Height");
                    }
                }
            }

            ui.separator();
            // Committing an empty buffer is a deliberate no-op, so the
            // button can stay enabled.
            if ui.button("Apply Changes").clicked() {
                let edits = app.pending_mut().take();
                app.execute(Command::Commit { id, edits });
            }
        });
}

fn value_field(ui: &mut egui::Ui, pending: &mut PendingEdits, kind: ElementKind, current: &str) {
    let label = match kind {
        ElementKind::Text => "Text",
        ElementKind::Image => "Image source",
        ElementKind::Button => "Label",
        ElementKind::EmbeddedPage => "Page address",
    };
    let mut value = pending.get("value").unwrap_or_default().to_owned();
    ui.label(label);
    if ui
        .add(egui::TextEdit::singleline(&mut value).hint_text(current))
        .changed()
    {
        pending.set("value", value);
    }
}

fn text_field(ui: &mut egui::Ui, pending: &mut PendingEdits, key: &str, label: &str, hint: &str) {
    let mut value = pending.get(key).unwrap_or_default().to_owned();
    ui.label(label);
    if ui
        .add(egui::TextEdit::singleline(&mut value).hint_text(hint))
        .changed()
    {
        pending.set(key, value);
    }
}

fn px_field(ui: &mut egui::Ui, pending: &mut PendingEdits, current: &StyleMap, key: &str, label: &str) {
    let mut value = pending
        .get(key)
        .and_then(style::parse_dimension)
        .or_else(|| current.get(key).and_then(|raw| style::parse_dimension(raw)))
        .unwrap_or(0);
    ui.horizontal(|ui| {
        ui.label(label);
        if ui
            .add(egui::DragValue::new(&mut value).range(0..=2000).suffix(" px"))
            .changed()
        {
            pending.set(key, format!("{value}px"));
        }
    });
}

fn brightness_field(ui: &mut egui::Ui, pending: &mut PendingEdits, current: &StyleMap) {
    let mut value = pending
        .get("brightness")
        .or_else(|| current.get("brightness").map(String::as_str))
        .and_then(|raw| raw.trim().parse::<f32>().ok())
        .unwrap_or(1.0);
    ui.horizontal(|ui| {
        ui.label("Brightness");
        if ui.add(egui::Slider::new(&mut value, 0.5..=1.5)).changed() {
            pending.set("brightness", format!("{value:.1}"));
        }
    });
}

fn color_field(
    ui: &mut egui::Ui,
    pending: &mut PendingEdits,
    current: &StyleMap,
    key: &str,
    label: &str,
    default: Color32,
) {
    let mut color = pending
        .get(key)
        .and_then(style::parse_color)
        .or_else(|| current.get(key).and_then(|raw| style::parse_color(raw)))
        .unwrap_or(default);
    ui.horizontal(|ui| {
        ui.label(label);
        if egui::color_picker::color_edit_button_srgba(ui, &mut color, egui::color_picker::Alpha::Opaque)
            .changed()
        {
            pending.set(key, format!("#{:02x}{:02x}{:02x}", color.r(), color.g(), color.b()));
        }
    });
}
