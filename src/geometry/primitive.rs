//! Drawing primitives: the geometry engine's output unit.

use apron_svg::PathData;
use glam::DVec2;

use crate::fill::Artwork;

/// Stacking layer. Variants are listed bottom to top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Layer {
    Background,
    Body,
    Straps,
    Pockets,
    Logo,
    Annotations,
    Legend,
    Title,
}

impl Layer {
    pub const ALL: [Layer; 8] = [
        Layer::Background,
        Layer::Body,
        Layer::Straps,
        Layer::Pockets,
        Layer::Logo,
        Layer::Annotations,
        Layer::Legend,
        Layer::Title,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Layer::Background => "background",
            Layer::Body => "body",
            Layer::Straps => "straps",
            Layer::Pockets => "pockets",
            Layer::Logo => "logo",
            Layer::Annotations => "annotations",
            Layer::Legend => "legend",
            Layer::Title => "title",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Anchor {
    #[default]
    Start,
    Middle,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Font {
    pub size: f64,
    pub bold: bool,
    pub anchor: Anchor,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Path(PathData),
    Rect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        rx: Option<f64>,
    },
    Line {
        from: DVec2,
        to: DVec2,
    },
    Polygon(Vec<DVec2>),
    Circle {
        center: DVec2,
        r: f64,
    },
    Text {
        at: DVec2,
        content: String,
        font: Font,
        /// Rotation in degrees around `at`
        rotate: Option<f64>,
    },
    /// Uploaded artwork fitted into a box
    Embed {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        artwork: Artwork,
    },
}

/// Paint and identification of a primitive
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Style {
    pub class: &'static str,
    pub fill: Option<String>,
    pub fill_opacity: Option<f64>,
    pub stroke: Option<String>,
    pub stroke_width: Option<f64>,
    pub dash: Option<&'static str>,
    pub round_caps: bool,
    pub opacity: Option<f64>,
}

impl Style {
    pub fn new(class: &'static str) -> Self {
        Self {
            class,
            ..Default::default()
        }
    }

    pub fn fill(mut self, color: impl Into<String>) -> Self {
        self.fill = Some(color.into());
        self
    }

    pub fn fill_opacity(mut self, opacity: f64) -> Self {
        self.fill_opacity = Some(opacity);
        self
    }

    /// Stroke only; fill is set to `none`
    pub fn outline(mut self, color: impl Into<String>, width: f64) -> Self {
        self.stroke = Some(color.into());
        self.stroke_width = Some(width);
        if self.fill.is_none() {
            self.fill = Some("none".to_string());
        }
        self
    }

    pub fn dashed(mut self, pattern: &'static str) -> Self {
        self.dash = Some(pattern);
        self
    }

    pub fn round_caps(mut self) -> Self {
        self.round_caps = true;
        self
    }

    pub fn opacity(mut self, opacity: f64) -> Self {
        self.opacity = Some(opacity);
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Primitive {
    pub layer: Layer,
    pub shape: Shape,
    pub style: Style,
}

impl Primitive {
    pub fn new(layer: Layer, shape: Shape, style: Style) -> Self {
        Self {
            layer,
            shape,
            style,
        }
    }

    pub fn class(&self) -> &'static str {
        self.style.class
    }
}

/// Collects primitives for one layer
pub(crate) struct LayerSink<'a> {
    layer: Layer,
    out: &'a mut Vec<Primitive>,
}

impl<'a> LayerSink<'a> {
    pub fn new(layer: Layer, out: &'a mut Vec<Primitive>) -> Self {
        Self { layer, out }
    }

    pub fn push(&mut self, shape: Shape, style: Style) {
        self.out.push(Primitive::new(self.layer, shape, style));
    }

    pub fn line(&mut self, from: DVec2, to: DVec2, style: Style) {
        self.push(Shape::Line { from, to }, style);
    }

    pub fn text(&mut self, at: DVec2, content: impl Into<String>, font: Font, style: Style) {
        self.push(
            Shape::Text {
                at,
                content: content.into(),
                font,
                rotate: None,
            },
            style,
        );
    }
}
