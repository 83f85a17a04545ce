use eframe::egui;

use crate::catalog::ElementKind;
use crate::command::Command;
use crate::error::DropError;

/// Translates operating-system file drops into canvas insert commands.
///
/// Only image files dropped over the canvas are accepted; anything else is
/// dropped with no observable effect beyond a log line. One file per drop
/// event is considered.
pub struct FileHandler {
    drop_counter: u64,
}

impl Default for FileHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl FileHandler {
    pub fn new() -> Self {
        Self { drop_counter: 0 }
    }

    /// Turns this frame's dropped file (if any) into an insert command at
    /// the canvas-relative drop position.
    pub fn process_dropped_files(&mut self, ctx: &egui::Context, canvas_rect: egui::Rect) -> Option<Command> {
        let (file, pointer) = ctx.input(|i| (i.raw.dropped_files.first().cloned(), i.pointer.hover_pos()));
        let file = file?;

        match self.image_insert_command(ctx, &file, canvas_rect, pointer) {
            Ok(command) => {
                ctx.request_repaint();
                Some(command)
            }
            Err(err) => {
                log::warn!("rejected dropped file {}: {err}", display_name(&file));
                None
            }
        }
    }

    fn image_insert_command(
        &mut self,
        ctx: &egui::Context,
        file: &egui::DroppedFile,
        canvas_rect: egui::Rect,
        pointer: Option<egui::Pos2>,
    ) -> Result<Command, DropError> {
        if !is_image_file(file) {
            return Err(DropError::NotAnImage);
        }

        // A drop over the side panels must not insert; only a pointer the
        // platform never reported falls back to the canvas center.
        if pointer.is_some_and(|p| !canvas_rect.contains(p)) {
            return Err(DropError::OutsideCanvas);
        }

        let bytes = file_bytes(file)?;

        // Validate before anything reaches the document: data that cannot
        // be decoded must not become an element.
        image::load_from_memory(&bytes)?;

        // Session-scoped reference: the bytes live in the egui context for
        // the lifetime of this run and the URI resolves only here.
        let uri = format!("bytes://dropped/{}-{}", self.drop_counter, display_name(file));
        self.drop_counter += 1;
        ctx.include_bytes(uri.clone(), bytes);

        let drop_point = pointer.unwrap_or_else(|| canvas_rect.center());
        let position = (drop_point - canvas_rect.min).to_pos2();
        log::info!("placing dropped image {uri} at {position:?}");

        Ok(Command::InsertExternal {
            kind: ElementKind::Image,
            value: uri,
            position,
        })
    }

    /// Dims the screen and names the hovered file while a drag is over the
    /// window.
    pub fn preview_files_being_dropped(&self, ctx: &egui::Context) {
        use egui::{Align2, Color32, FontId, Id, LayerId, Order};

        let Some(file) = ctx.input(|i| i.raw.hovered_files.first().cloned()) else {
            return;
        };
        let text = match &file.path {
            Some(path) => format!("Drop to place image:\n{}", path.display()),
            None => "Drop to place image".to_owned(),
        };

        let painter = ctx.layer_painter(LayerId::new(Order::Foreground, Id::new("file_drop_overlay")));
        let screen_rect = ctx.screen_rect();
        painter.rect_filled(screen_rect, 0.0, Color32::from_black_alpha(160));
        painter.text(
            screen_rect.center(),
            Align2::CENTER_CENTER,
            text,
            FontId::proportional(18.0),
            Color32::WHITE,
        );
    }
}

/// The MIME type wins; fall back to the extension when the platform did not
/// supply one.
fn is_image_file(file: &egui::DroppedFile) -> bool {
    if !file.mime.is_empty() {
        file.mime.starts_with("image/")
    } else if let Some(path) = &file.path {
        match path.extension() {
            Some(ext) => {
                let ext = ext.to_string_lossy().to_lowercase();
                matches!(ext.as_str(), "png" | "jpg" | "jpeg" | "gif" | "webp" | "bmp")
            }
            None => false,
        }
    } else {
        false
    }
}

fn file_bytes(file: &egui::DroppedFile) -> Result<Vec<u8>, DropError> {
    if let Some(bytes) = &file.bytes {
        return Ok(bytes.to_vec());
    }
    #[cfg(not(target_arch = "wasm32"))]
    if let Some(path) = &file.path {
        return std::fs::read(path).map_err(|source| DropError::Read {
            path: path.display().to_string(),
            source,
        });
    }
    Err(DropError::NoData)
}

fn display_name(file: &egui::DroppedFile) -> String {
    if let Some(path) = &file.path {
        path.display().to_string()
    } else if !file.name.is_empty() {
        file.name.clone()
    } else {
        "unknown".to_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn tiny_png() -> Vec<u8> {
        let img = image::RgbaImage::from_pixel(2, 2, image::Rgba([255, 0, 0, 255]));
        let mut bytes = Vec::new();
        img.write_to(&mut std::io::Cursor::new(&mut bytes), image::ImageFormat::Png)
            .unwrap();
        bytes
    }

    fn canvas() -> egui::Rect {
        egui::Rect::from_min_size(egui::pos2(100.0, 50.0), egui::vec2(800.0, 600.0))
    }

    #[test]
    fn mime_type_detection() {
        let png = egui::DroppedFile {
            mime: "image/png".to_owned(),
            ..Default::default()
        };
        assert!(is_image_file(&png));

        let text = egui::DroppedFile {
            mime: "text/plain".to_owned(),
            ..Default::default()
        };
        assert!(!is_image_file(&text));

        let by_extension = egui::DroppedFile {
            path: Some("photo.JPG".into()),
            ..Default::default()
        };
        assert!(is_image_file(&by_extension));

        let unknown = egui::DroppedFile {
            path: Some("notes.txt".into()),
            ..Default::default()
        };
        assert!(!is_image_file(&unknown));
    }

    #[test]
    fn non_image_drop_is_rejected_silently() {
        let ctx = egui::Context::default();
        let mut handler = FileHandler::new();

        let mut raw = egui::RawInput::default();
        raw.dropped_files.push(egui::DroppedFile {
            name: "notes.txt".to_owned(),
            mime: "text/plain".to_owned(),
            bytes: Some(Arc::from(b"hello".as_slice())),
            ..Default::default()
        });

        let mut command = None;
        let _ = ctx.run(raw, |ctx| {
            command = handler.process_dropped_files(ctx, canvas());
        });
        assert!(command.is_none());
    }

    #[test]
    fn drop_outside_the_canvas_is_rejected() {
        let ctx = egui::Context::default();
        let mut handler = FileHandler::new();
        let file = egui::DroppedFile {
            name: "pixel.png".to_owned(),
            mime: "image/png".to_owned(),
            bytes: Some(Arc::from(tiny_png().as_slice())),
            ..Default::default()
        };

        // Pointer left of a canvas starting at x = 100: a palette drop.
        let result = handler.image_insert_command(&ctx, &file, canvas(), Some(egui::pos2(50.0, 100.0)));
        assert!(matches!(result, Err(DropError::OutsideCanvas)));

        let mut raw = egui::RawInput::default();
        raw.events.push(egui::Event::PointerMoved(egui::pos2(50.0, 100.0)));
        raw.dropped_files.push(file);
        let mut command = None;
        let _ = ctx.run(raw, |ctx| {
            command = handler.process_dropped_files(ctx, canvas());
        });
        assert!(command.is_none());
    }

    #[test]
    fn undecodable_image_is_rejected() {
        let ctx = egui::Context::default();
        let mut handler = FileHandler::new();
        let file = egui::DroppedFile {
            name: "broken.png".to_owned(),
            mime: "image/png".to_owned(),
            bytes: Some(Arc::from(b"not a png".as_slice())),
            ..Default::default()
        };
        let result = handler.image_insert_command(&ctx, &file, canvas(), None);
        assert!(matches!(result, Err(DropError::Decode(_))));
    }

    #[test]
    fn image_drop_inserts_at_translated_position() {
        let ctx = egui::Context::default();
        let mut handler = FileHandler::new();
        let file = egui::DroppedFile {
            name: "pixel.png".to_owned(),
            mime: "image/png".to_owned(),
            bytes: Some(Arc::from(tiny_png().as_slice())),
            ..Default::default()
        };

        let command = handler
            .image_insert_command(&ctx, &file, canvas(), Some(egui::pos2(150.0, 80.0)))
            .unwrap();

        match command {
            Command::InsertExternal { kind, value, position } => {
                assert_eq!(kind, ElementKind::Image);
                assert!(value.starts_with("bytes://dropped/0-"));
                assert_eq!(position, egui::pos2(50.0, 30.0));
            }
            other => panic!("expected InsertExternal, got {other:?}"),
        }
    }

    #[test]
    fn missing_pointer_falls_back_to_canvas_center() {
        let ctx = egui::Context::default();
        let mut handler = FileHandler::new();
        let file = egui::DroppedFile {
            name: "pixel.png".to_owned(),
            mime: "image/png".to_owned(),
            bytes: Some(Arc::from(tiny_png().as_slice())),
            ..Default::default()
        };

        let command = handler.image_insert_command(&ctx, &file, canvas(), None).unwrap();
        match command {
            Command::InsertExternal { position, .. } => {
                assert_eq!(position, egui::pos2(400.0, 300.0));
            }
            other => panic!("expected InsertExternal, got {other:?}"),
        }
    }
}
