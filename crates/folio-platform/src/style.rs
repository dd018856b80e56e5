//! Inline CSS for a view.
//!
//! The browser does layout: rows and columns become flex boxes, grids become
//! CSS grids, and transitions are handed to the browser as `transition`
//! declarations so a changed opacity or transform animates by itself.

use std::fmt::Write;

use folio_core::modifier::{GridColumns, PositionType};
use folio_core::*;

fn px(v: f32) -> String {
    if v.fract() == 0.0 {
        format!("{}px", v as i64)
    } else {
        format!("{v:.1}px")
    }
}

fn secs(d: std::time::Duration) -> String {
    format!("{}s", (d.as_secs_f32() * 1000.0).round() / 1000.0)
}

fn justify(j: JustifyContent) -> &'static str {
    match j {
        JustifyContent::Start => "flex-start",
        JustifyContent::Center => "center",
        JustifyContent::End => "flex-end",
        JustifyContent::SpaceBetween => "space-between",
    }
}

fn align(a: AlignItems) -> &'static str {
    match a {
        AlignItems::Start => "flex-start",
        AlignItems::Center => "center",
        AlignItems::End => "flex-end",
        AlignItems::Stretch => "stretch",
    }
}

fn weight(w: FontWeight) -> u16 {
    match w {
        FontWeight::Regular => 400,
        FontWeight::Medium => 500,
        FontWeight::SemiBold => 600,
        FontWeight::Bold => 700,
    }
}

/// `transform` value, or `None` for the identity.
pub fn transform_css(t: &Transform) -> Option<String> {
    if t.is_identity() {
        return None;
    }
    Some(format!(
        "translate({}, {})",
        px(t.translate_x),
        px(t.translate_y)
    ))
}

/// Declarations for `view`, joined as a `style` attribute value. Empty
/// when the view needs no inline style.
pub fn css(view: &View) -> String {
    let m = &view.modifier;
    let mut out: Vec<(&'static str, String)> = Vec::new();
    let mut push = |k: &'static str, v: String| out.push((k, v));

    match &view.kind {
        ViewKind::Row => {
            push("display", "flex".into());
            push("flex-direction", "row".into());
        }
        ViewKind::Column if m.grid.is_none() => {
            push("display", "flex".into());
            push("flex-direction", "column".into());
        }
        ViewKind::Text {
            color,
            font_size,
            weight: w,
            family,
            role,
            ..
        } => {
            push("margin", "0".into());
            push("font-size", px(*font_size));
            if *w != FontWeight::Regular || matches!(role, TextRole::Heading(_)) {
                push("font-weight", weight(*w).to_string());
            }
            if *family == FontFamily::Mono {
                push("font-family", "ui-monospace, SFMono-Regular, Menlo, monospace".into());
            }
            if *role == TextRole::Code {
                push("white-space", "pre-wrap".into());
                push("overflow-x", "auto".into());
            }
            if let Some(c) = color {
                push("color", c.to_css());
            }
        }
        ViewKind::Caret { color, font_size } => {
            push("font-size", px(*font_size));
            push("color", color.to_css());
            push("animation", "folio-blink 1s step-end infinite".into());
            push("margin-left", "2px".into());
        }
        ViewKind::Button { enabled, .. } => {
            push("cursor", if *enabled { "pointer" } else { "not-allowed" }.into());
            if !enabled {
                push("opacity", "0.6".into());
            }
        }
        ViewKind::Image { .. } | ViewKind::Frame { .. } => {
            push("display", "block".into());
            push("border", "0".into());
        }
        ViewKind::ProgressBar { .. } => {
            push("width", "100%".into());
            push("height", "8px".into());
        }
        _ => {}
    }

    if let Some(g) = &m.grid {
        push("display", "grid".into());
        let cols = match g.columns {
            GridColumns::Fixed(n) => format!("repeat({n}, minmax(0, 1fr))"),
            GridColumns::AutoFit { min_width } => {
                format!("repeat(auto-fit, minmax({}, 1fr))", px(min_width))
            }
        };
        push("grid-template-columns", cols);
        push("row-gap", px(g.row_gap));
        push("column-gap", px(g.column_gap));
    }
    if let Some(span) = m.grid_col_span {
        push("grid-column", format!("span {span}"));
    }

    if let Some(p) = m.position_type {
        let v = match p {
            PositionType::Relative => "relative",
            PositionType::Absolute => "absolute",
            PositionType::Fixed => "fixed",
        };
        push("position", v.into());
    }
    for (k, v) in [
        ("left", m.offset_left),
        ("top", m.offset_top),
        ("right", m.offset_right),
        ("bottom", m.offset_bottom),
    ] {
        if let Some(v) = v {
            push(k, px(v));
        }
    }
    if let Some(z) = m.z_index {
        push("z-index", z.to_string());
    }

    if let Some(s) = m.size {
        push("width", px(s.width));
        push("height", px(s.height));
    }
    if let Some(w) = m.width {
        push("width", px(w));
    }
    if let Some(h) = m.height {
        push("height", px(h));
    }
    if m.fill_max_w {
        push("width", "100%".into());
        push("box-sizing", "border-box".into());
    }
    if let Some(v) = m.min_height {
        push("min-height", px(v));
    }
    if let Some(v) = m.max_width {
        push("max-width", px(v));
    }
    if let Some(v) = m.max_height {
        push("max-height", px(v));
    }
    if m.center_horizontally {
        push("margin-left", "auto".into());
        push("margin-right", "auto".into());
    }
    if let Some(v) = m.margin_top {
        push("margin-top", px(v));
    }
    if let Some(v) = m.margin_bottom {
        push("margin-bottom", px(v));
    }

    if let Some(p) = m.padding_values {
        push(
            "padding",
            format!(
                "{} {} {} {}",
                px(p.top),
                px(p.right),
                px(p.bottom),
                px(p.left)
            ),
        );
    } else if let Some(p) = m.padding {
        push("padding", px(p));
    }

    if let Some(g) = m.gap
        && m.grid.is_none()
    {
        push("gap", px(g));
    }
    if m.flex_wrap {
        push("flex-wrap", "wrap".into());
    }
    if let Some(g) = m.flex_grow {
        push("flex", format!("{g} 1 0%"));
    }
    if let Some(j) = m.justify_content {
        push("justify-content", justify(j).into());
    }
    if let Some(a) = m.align_items_container {
        push("align-items", align(a).into());
    }

    match &m.background {
        Some(Brush::Solid(c)) => push("background-color", c.to_css()),
        Some(b) => push("background-image", b.to_css()),
        None => {}
    }
    if let Some(c) = m.content_color {
        push("color", c.to_css());
    }
    if let Some(b) = &m.border {
        push("border", format!("{} solid {}", px(b.width), b.color.to_css()));
        push("border-radius", px(b.radius));
    }
    if let Some((w, c)) = m.border_left {
        push("border-left", format!("{} solid {}", px(w), c.to_css()));
    }
    if let Some(r) = m.clip_rounded {
        push("border-radius", px(r));
        push("overflow", "hidden".into());
    }
    if let Some(e) = m.shadow {
        push(
            "box-shadow",
            format!(
                "0 {} {} rgba(0, 0, 0, 0.1)",
                px((e / 2.0).max(1.0)),
                px(e * 2.0)
            ),
        );
    }
    if m.scroll_y {
        push("overflow-y", "auto".into());
    }

    if let Some(a) = m.alpha {
        push("opacity", format!("{}", (a * 1000.0).round() / 1000.0));
    }
    if let Some(t) = &m.transform {
        push("transform", transform_css(t).unwrap_or_else(|| "none".into()));
    }
    if let Some(spec) = &m.transition {
        let timing = format!(
            "{} {} {}",
            secs(spec.duration),
            spec.easing.css_name(),
            secs(spec.delay)
        );
        push(
            "transition",
            format!("opacity {timing}, transform {timing}"),
        );
    }

    let mut s = String::new();
    for (i, (k, v)) in out.iter().enumerate() {
        if i > 0 {
            s.push(' ');
        }
        let _ = write!(s, "{k}: {v};");
    }
    s
}
