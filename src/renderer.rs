use eframe::egui::{self, Align2, Color32, FontId, Pos2, Rect, Stroke, Ui, vec2};

use crate::element::{ElementContent, PlacedElement};
use crate::style;

/// Size an image paints at before any dimensions are committed; matches the
/// catalog's placeholder image.
const IMAGE_FALLBACK: egui::Vec2 = egui::Vec2::new(300.0, 200.0);

const TEXT_COLOR: Color32 = Color32::from_gray(30);
const BUTTON_FILL: Color32 = Color32::from_rgb(0x3b, 0x82, 0xf6);

/// Paints placed elements. A pure projection from (kind, value, style) to
/// paint calls: never mutates the document and carries no state of its own.
#[derive(Debug, Default)]
pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    /// Paints `element` with its top-left corner at `origin` (screen space)
    /// and returns the rect it occupied. `canvas` resolves percent-sized
    /// elements.
    pub fn paint(&self, ui: &Ui, canvas: Rect, element: &PlacedElement, origin: Pos2) -> Rect {
        match &element.content {
            ElementContent::Text(text) => self.paint_text(ui, element, text, origin),
            ElementContent::Image(src) => self.paint_image(ui, canvas, element, src, origin),
            ElementContent::Button(label) => self.paint_button(ui, element, label, origin),
            ElementContent::EmbeddedPage(address) => self.paint_page(ui, canvas, element, address, origin),
        }
    }

    fn paint_text(&self, ui: &Ui, element: &PlacedElement, text: &str, origin: Pos2) -> Rect {
        let font = FontId::proportional(style::font_size(&element.style, 16.0));
        let color = style::color_or(&element.style, "color", TEXT_COLOR);
        let galley = ui.painter().layout_no_wrap(text.to_owned(), font, color);
        let rect = Rect::from_min_size(origin, galley.size());
        ui.painter().galley(origin, galley, color);
        rect
    }

    fn paint_image(&self, ui: &Ui, canvas: Rect, element: &PlacedElement, src: &str, origin: Pos2) -> Rect {
        let size = vec2(
            style::resolve_extent(&element.style, "width", canvas.width(), IMAGE_FALLBACK.x, style::WIDTH_MAX),
            style::resolve_extent(&element.style, "height", canvas.height(), IMAGE_FALLBACK.y, style::HEIGHT_MAX),
        );
        let rect = Rect::from_min_size(origin, size);
        let rounding = style::corner_radius(&element.style, 0.0);

        let image = egui::Image::from_uri(src.to_owned())
            .tint(style::brightness_tint(&element.style))
            .rounding(rounding)
            .fit_to_exact_size(size);

        match image.load_for_size(ui.ctx(), size) {
            Ok(egui::load::TexturePoll::Ready { .. }) => image.paint_at(ui, rect),
            // Still loading, or the source is unreachable: the element is
            // kept and a generic placeholder stands in.
            _ => self.paint_image_placeholder(ui, rect),
        }

        // Tinting only darkens; above-neutral brightness is a white wash on
        // top of the painted image.
        if let Some(wash) = style::brightness_overlay(&element.style) {
            ui.painter().rect_filled(rect, rounding, wash);
        }
        rect
    }

    fn paint_image_placeholder(&self, ui: &Ui, rect: Rect) {
        let painter = ui.painter();
        painter.rect_filled(rect, 4.0, Color32::from_gray(230));
        painter.rect_stroke(rect, 4.0, Stroke::new(1.0, Color32::from_gray(180)));
        painter.text(
            rect.center(),
            Align2::CENTER_CENTER,
            "🖼",
            FontId::proportional(24.0),
            Color32::from_gray(130),
        );
    }

    fn paint_button(&self, ui: &Ui, element: &PlacedElement, label: &str, origin: Pos2) -> Rect {
        let font = FontId::proportional(style::font_size(&element.style, 14.0));
        let text_color = style::color_or(&element.style, "color", Color32::WHITE);
        let fill = style::color_or(&element.style, "backgroundColor", BUTTON_FILL);
        let padding = style::padding(&element.style, vec2(16.0, 8.0));
        let rounding = style::corner_radius(&element.style, 4.0);

        let galley = ui.painter().layout_no_wrap(label.to_owned(), font, text_color);
        let rect = Rect::from_min_size(origin, galley.size() + padding * 2.0);
        ui.painter().rect_filled(rect, rounding, fill);
        ui.painter().galley(rect.min + padding, galley, text_color);
        rect
    }

    fn paint_page(&self, ui: &Ui, canvas: Rect, element: &PlacedElement, address: &str, origin: Pos2) -> Rect {
        let size = vec2(
            style::resolve_extent(&element.style, "width", canvas.width(), canvas.width(), style::WIDTH_MAX),
            style::resolve_extent(&element.style, "height", canvas.height(), canvas.height(), style::HEIGHT_MAX),
        );
        let rect = Rect::from_min_size(origin, size);
        let rounding = style::corner_radius(&element.style, 0.0);

        let painter = ui.painter();
        painter.rect_filled(rect, rounding, Color32::from_gray(248));
        painter.rect_stroke(rect, rounding, Stroke::new(1.0, Color32::from_gray(200)));

        // Address bar across the top; the body stays empty. A target that
        // refuses to load looks exactly like this, which is the accepted
        // non-fatal outcome.
        let bar = Rect::from_min_size(rect.min, vec2(rect.width(), 22.0));
        painter.rect_filled(bar, rounding, Color32::from_gray(235));
        painter.text(
            bar.left_center() + vec2(6.0, 0.0),
            Align2::LEFT_CENTER,
            address,
            FontId::monospace(11.0),
            Color32::from_gray(90),
        );
        rect
    }
}
