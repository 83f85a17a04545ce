use std::collections::BTreeMap;

use egui::Color32;

/// Open-ended property bag controlling how an element is painted. Grows via
/// commits; a key is never removed once set.
pub type StyleMap = BTreeMap<String, String>;

pub const WIDTH_DEFAULT: i64 = 900;
pub const WIDTH_MAX: i64 = 1000;
pub const HEIGHT_DEFAULT: i64 = 300;
pub const HEIGHT_MAX: i64 = 600;

/// Leading-integer parse in the spirit of `parseInt`: optional sign, then
/// digits; anything after (such as a `px` suffix) is ignored.
pub fn parse_dimension(raw: &str) -> Option<i64> {
    let trimmed = raw.trim();
    let (sign, rest) = match trimmed.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let digits: String = rest.chars().take_while(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return None;
    }
    digits.parse::<i64>().ok().map(|n| sign * n)
}

/// Commit-time rule for `width`/`height`: unparseable input falls back to
/// the default, the result is clamped into `[0, max]` and stored with a
/// physical-pixel suffix.
pub fn clamp_dimension(raw: &str, default: i64, max: i64) -> String {
    let n = parse_dimension(raw).unwrap_or(default).clamp(0, max);
    format!("{n}px")
}

/// Render-time size lookup. Percent values resolve against the canvas
/// extent; pixel values go through the same clamp as commit, so raw
/// unclamped input never reaches the screen.
pub fn resolve_extent(style: &StyleMap, key: &str, canvas_extent: f32, fallback: f32, max: i64) -> f32 {
    let Some(raw) = style.get(key) else {
        return fallback;
    };
    if let Some(pct) = raw.trim().strip_suffix('%') {
        return match pct.trim().parse::<f32>() {
            Ok(pct) => (pct / 100.0 * canvas_extent).clamp(0.0, canvas_extent),
            Err(_) => fallback,
        };
    }
    match parse_dimension(raw) {
        Some(n) => n.clamp(0, max) as f32,
        None => fallback,
    }
}

/// `#rrggbb` hex colors, as submitted by the property panel's color fields.
pub fn parse_color(raw: &str) -> Option<Color32> {
    Color32::from_hex(raw.trim()).ok()
}

pub fn color_or(style: &StyleMap, key: &str, default: Color32) -> Color32 {
    style
        .get(key)
        .and_then(|raw| parse_color(raw))
        .unwrap_or(default)
}

fn brightness(style: &StyleMap) -> f32 {
    style
        .get("brightness")
        .and_then(|raw| raw.trim().parse::<f32>().ok())
        .unwrap_or(1.0)
}

/// Brightness tint for images. A tint can only darken, so values at or above
/// neutral paint as white; an absent or unparseable value is neutral.
pub fn brightness_tint(style: &StyleMap) -> Color32 {
    let brightness = brightness(style);
    if brightness >= 1.0 {
        Color32::WHITE
    } else {
        Color32::from_gray((brightness.max(0.0) * 255.0) as u8)
    }
}

/// Additive counterpart of [`brightness_tint`] for values above neutral: a
/// translucent white wash painted over the image, saturating at 2.0.
pub fn brightness_overlay(style: &StyleMap) -> Option<Color32> {
    let brightness = brightness(style);
    if brightness > 1.0 {
        let alpha = ((brightness - 1.0).min(1.0) * 128.0) as u8;
        Some(Color32::from_white_alpha(alpha))
    } else {
        None
    }
}

pub fn font_size(style: &StyleMap, default: f32) -> f32 {
    style
        .get("fontSize")
        .and_then(|raw| parse_dimension(raw))
        .map(|n| n.max(1) as f32)
        .unwrap_or(default)
}

/// CSS-style one- or two-value padding: `"10px 20px"` is vertical then
/// horizontal; a single value applies to both axes.
pub fn padding(style: &StyleMap, default: egui::Vec2) -> egui::Vec2 {
    let Some(raw) = style.get("padding") else {
        return default;
    };
    let parts: Vec<i64> = raw
        .split_whitespace()
        .filter_map(parse_dimension)
        .collect();
    match parts[..] {
        [all] => egui::vec2(all as f32, all as f32),
        [vertical, horizontal] => egui::vec2(horizontal as f32, vertical as f32),
        _ => default,
    }
}

pub fn corner_radius(style: &StyleMap, default: f32) -> f32 {
    style
        .get("borderRadius")
        .and_then(|raw| parse_dimension(raw))
        .map(|n| n.max(0) as f32)
        .unwrap_or(default)
}
