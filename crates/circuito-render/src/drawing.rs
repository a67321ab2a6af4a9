//! Ordered drawing instructions.
//!
//! A [`Drawing`] only ever grows. Insertion order is paint order: later primitives are drawn on
//! top of earlier ones, and serialization preserves that order exactly.

use crate::geom::Point;

/// Semantic style of a primitive; each maps to one rule of the embedded stylesheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleClass {
    Grid,
    Axis,
    Profile,
    Text,
    Title,
    Label,
}

impl StyleClass {
    pub const ALL: [StyleClass; 6] = [
        StyleClass::Grid,
        StyleClass::Axis,
        StyleClass::Profile,
        StyleClass::Text,
        StyleClass::Title,
        StyleClass::Label,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            StyleClass::Grid => "grid",
            StyleClass::Axis => "axis",
            StyleClass::Profile => "profile",
            StyleClass::Text => "text",
            StyleClass::Title => "title",
            StyleClass::Label => "label",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAnchor {
    Start,
    Middle,
    End,
}

impl TextAnchor {
    pub fn as_str(self) -> &'static str {
        match self {
            TextAnchor::Start => "start",
            TextAnchor::Middle => "middle",
            TextAnchor::End => "end",
        }
    }
}

/// Rotation of a text element, in degrees, about `pivot`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rotation {
    pub degrees: f64,
    pub pivot: Point,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TextOptions {
    pub anchor: Option<TextAnchor>,
    pub rotation: Option<Rotation>,
}

impl TextOptions {
    pub fn anchored(anchor: TextAnchor) -> Self {
        Self {
            anchor: Some(anchor),
            rotation: None,
        }
    }

    pub fn rotated(mut self, degrees: f64, pivot: Point) -> Self {
        self.rotation = Some(Rotation { degrees, pivot });
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawingPrimitive {
    Line {
        from: Point,
        to: Point,
        style: StyleClass,
    },
    Polyline {
        points: Vec<Point>,
        style: StyleClass,
    },
    Text {
        position: Point,
        content: String,
        style: StyleClass,
        options: TextOptions,
    },
    Circle {
        center: Point,
        radius: f64,
        fill: String,
    },
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Drawing {
    primitives: Vec<DrawingPrimitive>,
}

impl Drawing {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn line(&mut self, from: Point, to: Point, style: StyleClass) {
        self.primitives
            .push(DrawingPrimitive::Line { from, to, style });
    }

    pub fn polyline(&mut self, points: Vec<Point>, style: StyleClass) {
        self.primitives
            .push(DrawingPrimitive::Polyline { points, style });
    }

    pub fn text(
        &mut self,
        position: Point,
        content: impl Into<String>,
        style: StyleClass,
        options: TextOptions,
    ) {
        self.primitives.push(DrawingPrimitive::Text {
            position,
            content: content.into(),
            style,
            options,
        });
    }

    pub fn circle(&mut self, center: Point, radius: f64, fill: impl Into<String>) {
        self.primitives.push(DrawingPrimitive::Circle {
            center,
            radius,
            fill: fill.into(),
        });
    }

    pub fn primitives(&self) -> &[DrawingPrimitive] {
        &self.primitives
    }

    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    pub(crate) fn into_primitives(self) -> Vec<DrawingPrimitive> {
        self.primitives
    }
}
