//! SVG serialization of a [`Drawing`].

use crate::config::RenderConfig;
use crate::drawing::{Drawing, DrawingPrimitive, StyleClass};
use crate::geom::Point;
use std::fmt::Write as _;

pub(crate) fn fmt(v: f64) -> String {
    // Round-trippable decimal form without `-0` or tiny float noise from our own arithmetic.
    if !v.is_finite() {
        return "0".to_string();
    }

    let mut v = if v.abs() < 1e-9 { 0.0 } else { v };
    let nearest = v.round();
    if (v - nearest).abs() < 1e-6 {
        v = nearest;
    }
    let s = v.to_string();
    if s == "-0" { "0".to_string() } else { s }
}

pub(crate) fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    escape_xml_into(&mut out, text);
    out
}

pub(crate) fn escape_xml_into(out: &mut String, text: &str) {
    let bytes = text.as_bytes();
    let mut start = 0usize;
    for (i, &b) in bytes.iter().enumerate() {
        let esc = match b {
            b'&' => "&amp;",
            b'<' => "&lt;",
            b'>' => "&gt;",
            b'"' => "&quot;",
            b'\'' => "&#39;",
            _ => continue,
        };
        if start < i {
            out.push_str(&text[start..i]);
        }
        out.push_str(esc);
        start = i + 1;
    }
    if start < text.len() {
        out.push_str(&text[start..]);
    }
}

fn style_rule(class: StyleClass) -> &'static str {
    match class {
        StyleClass::Grid => "stroke: #ccc; stroke-width: 0.5;",
        StyleClass::Axis => "stroke: #000; stroke-width: 2;",
        StyleClass::Profile => "fill: rgba(70, 130, 180, 0.3); stroke: steelblue; stroke-width: 2;",
        StyleClass::Text => "font-family: Arial, sans-serif; font-size: 12px; fill: #333;",
        StyleClass::Title => {
            "font-family: Arial, sans-serif; font-size: 18px; font-weight: bold; fill: #000;"
        }
        StyleClass::Label => "font-family: Arial, sans-serif; font-size: 10px; fill: #666;",
    }
}

fn write_points(out: &mut String, points: &[Point]) {
    for (i, p) in points.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        let _ = write!(out, "{},{}", fmt(p.x), fmt(p.y));
    }
}

fn write_primitive(out: &mut String, primitive: &DrawingPrimitive) {
    match primitive {
        DrawingPrimitive::Line { from, to, style } => {
            let _ = writeln!(
                out,
                r#"  <line x1="{}" y1="{}" x2="{}" y2="{}" class="{}"/>"#,
                fmt(from.x),
                fmt(from.y),
                fmt(to.x),
                fmt(to.y),
                style.as_str()
            );
        }
        DrawingPrimitive::Polyline { points, style } => {
            out.push_str(r#"  <polyline points=""#);
            write_points(out, points);
            let _ = writeln!(out, r#"" class="{}"/>"#, style.as_str());
        }
        DrawingPrimitive::Text {
            position,
            content,
            style,
            options,
        } => {
            let _ = write!(
                out,
                r#"  <text x="{}" y="{}" class="{}""#,
                fmt(position.x),
                fmt(position.y),
                style.as_str()
            );
            if let Some(anchor) = options.anchor {
                let _ = write!(out, r#" text-anchor="{}""#, anchor.as_str());
            }
            if let Some(rot) = options.rotation {
                let _ = write!(
                    out,
                    r#" transform="rotate({} {} {})""#,
                    fmt(rot.degrees),
                    fmt(rot.pivot.x),
                    fmt(rot.pivot.y)
                );
            }
            out.push('>');
            escape_xml_into(out, content);
            out.push_str("</text>\n");
        }
        DrawingPrimitive::Circle {
            center,
            radius,
            fill,
        } => {
            let _ = writeln!(
                out,
                r#"  <circle cx="{}" cy="{}" r="{}" fill="{}"/>"#,
                fmt(center.x),
                fmt(center.y),
                fmt(*radius),
                escape_xml(fill)
            );
        }
    }
}

impl Drawing {
    /// Serializes the drawing into a standalone SVG document sized by `config`.
    ///
    /// Consumes the drawing: primitives are written once, in insertion order, after the
    /// stylesheet and a white background.
    pub fn into_svg(self, config: &RenderConfig) -> String {
        let canvas = config.canvas();
        let w = fmt(canvas.width);
        let h = fmt(canvas.height);
        let primitives = self.into_primitives();

        let mut out = String::with_capacity(256 + primitives.len() * 96);
        out.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        let _ = writeln!(
            &mut out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#
        );
        let _ = writeln!(
            &mut out,
            "  <title>{}</title>",
            escape_xml(&config.document_title)
        );
        out.push_str("  <defs>\n    <style>\n");
        for class in StyleClass::ALL {
            let _ = writeln!(&mut out, "      .{} {{ {} }}", class.as_str(), style_rule(class));
        }
        out.push_str("    </style>\n  </defs>\n");
        let _ = writeln!(&mut out, r#"  <rect width="{w}" height="{h}" fill="white"/>"#);

        for primitive in &primitives {
            write_primitive(&mut out, primitive);
        }
        out.push_str("</svg>\n");
        out
    }
}
