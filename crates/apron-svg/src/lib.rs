//! Typed SVG elements for apron drawings, with XML serialization and parsing.
//!
//! Drawings are built from strongly-typed element structs ([`Rect`], [`Path`],
//! [`Text`], ...) that lower into a generic [`Element`] tree. The generic tree is
//! what gets written to XML, and it is also what [`parse`] returns, so uploaded
//! artwork can be cloned verbatim into a drawing.
//!
//! # Example
//!
//! ```rust
//! use apron_svg::{Rect, Svg, to_string};
//!
//! let mut svg = Svg::new(100.0, 50.0);
//! svg.push(Rect {
//!     x: Some(10.0),
//!     y: Some(10.0),
//!     width: Some(80.0),
//!     height: Some(30.0),
//!     presentation: apron_svg::Presentation {
//!         fill: Some("#ff6b6b".to_string()),
//!         ..Default::default()
//!     },
//!     ..Default::default()
//! });
//!
//! let markup = to_string(&svg.into()).unwrap();
//! assert!(markup.starts_with("<svg"));
//! ```

mod path;
mod style;
mod xml;

pub use path::{PathCommand, PathData};
pub use style::Color;
pub use xml::{parse, to_string};

use thiserror::Error;

/// SVG namespace URI
pub const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// XLink namespace URI (for `xlink:href` consumers that still need it)
pub const XLINK_NS: &str = "http://www.w3.org/1999/xlink";

/// Errors raised while reading or writing SVG markup
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SvgError {
    #[error("malformed markup: {0}")]
    Parse(String),
    #[error("failed to write markup: {0}")]
    Write(String),
    #[error("document has no root element")]
    MissingRoot,
}

// ============================================================================
// Generic tree
// ============================================================================

/// A node in the generic element tree
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element(Element),
    Text(String),
}

/// A generic XML element: name, ordered attributes, children
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Element {
    pub name: String,
    pub attributes: Vec<(String, String)>,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Builder-style attribute setter
    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attr(key, value);
        self
    }

    /// Set an attribute, replacing an existing value with the same key
    pub fn set_attr(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.attributes.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.attributes.push((key, value)),
        }
    }

    /// Set an attribute only when a value is present
    pub fn set_opt(&mut self, key: &str, value: Option<String>) {
        if let Some(value) = value {
            self.set_attr(key, value);
        }
    }

    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn push(&mut self, child: impl Into<Node>) {
        self.children.push(child.into());
    }

    pub fn with_child(mut self, child: impl Into<Node>) -> Self {
        self.push(child);
        self
    }

    /// Child elements, skipping text nodes
    pub fn elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|node| match node {
            Node::Element(el) => Some(el),
            Node::Text(_) => None,
        })
    }

    /// All descendant elements in document order (excluding `self`)
    pub fn descendants(&self) -> Vec<&Element> {
        let mut out = Vec::new();
        collect_descendants(self, &mut out);
        out
    }

    /// Concatenated text content of this element and its descendants
    pub fn text(&self) -> String {
        let mut out = String::new();
        for node in &self.children {
            match node {
                Node::Text(t) => out.push_str(t),
                Node::Element(el) => out.push_str(&el.text()),
            }
        }
        out
    }

    /// Whether the whitespace-separated `class` attribute contains `class`
    pub fn has_class(&self, class: &str) -> bool {
        self.attr("class")
            .is_some_and(|classes| classes.split_whitespace().any(|c| c == class))
    }

    /// Local name without any namespace prefix
    pub fn local_name(&self) -> &str {
        self.name.rsplit(':').next().unwrap_or(&self.name)
    }
}

fn collect_descendants<'a>(el: &'a Element, out: &mut Vec<&'a Element>) {
    for child in el.elements() {
        out.push(child);
        collect_descendants(child, out);
    }
}

impl From<Element> for Node {
    fn from(el: Element) -> Self {
        Node::Element(el)
    }
}

// ============================================================================
// Number formatting
// ============================================================================

/// Format a coordinate with 6 significant figures, trailing zeros trimmed.
pub fn fmt_num(value: f64) -> String {
    fmt_num_precision(value, 6)
}

fn fmt_num_precision(value: f64, sig_figs: i32) -> String {
    if value == 0.0 || !value.is_finite() {
        return "0".to_string();
    }

    let abs_val = value.abs();
    let magnitude = abs_val.log10().floor() as i32;
    let scale = 10_f64.powi(sig_figs - 1 - magnitude);
    let rounded = (value * scale).round() / scale;

    let decimals = (sig_figs - 1 - magnitude).max(0) as usize;
    let s = format!("{:.prec$}", rounded, prec = decimals);
    let s = if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s.as_str()
    };
    if s == "-0" { "0".to_string() } else { s.to_string() }
}

fn num(value: Option<f64>) -> Option<String> {
    value.map(fmt_num)
}

// ============================================================================
// Typed elements
// ============================================================================

/// Presentation attributes shared by the shape elements
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Presentation {
    pub class: Option<String>,
    pub fill: Option<String>,
    pub fill_opacity: Option<f64>,
    pub stroke: Option<String>,
    pub stroke_width: Option<f64>,
    pub stroke_dasharray: Option<String>,
    pub stroke_linecap: Option<String>,
    pub opacity: Option<f64>,
    pub transform: Option<String>,
}

impl Presentation {
    fn apply(self, el: &mut Element) {
        el.set_opt("class", self.class);
        el.set_opt("fill", self.fill);
        el.set_opt("fill-opacity", num(self.fill_opacity));
        el.set_opt("stroke", self.stroke);
        el.set_opt("stroke-width", num(self.stroke_width));
        el.set_opt("stroke-dasharray", self.stroke_dasharray);
        el.set_opt("stroke-linecap", self.stroke_linecap);
        el.set_opt("opacity", num(self.opacity));
        el.set_opt("transform", self.transform);
    }
}

/// Root SVG element
#[derive(Debug, Clone, Default)]
pub struct Svg {
    pub width: f64,
    pub height: f64,
    pub view_box: Option<String>,
    pub children: Vec<Node>,
}

impl Svg {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            view_box: Some(format!("0 0 {} {}", fmt_num(width), fmt_num(height))),
            children: Vec::new(),
        }
    }

    pub fn push(&mut self, child: impl Into<Element>) {
        self.children.push(Node::Element(child.into()));
    }
}

impl From<Svg> for Element {
    fn from(svg: Svg) -> Self {
        let mut el = Element::new("svg")
            .with_attr("xmlns", SVG_NS)
            .with_attr("xmlns:xlink", XLINK_NS)
            .with_attr("width", fmt_num(svg.width))
            .with_attr("height", fmt_num(svg.height));
        el.set_opt("viewBox", svg.view_box);
        el.children = svg.children;
        el
    }
}

/// SVG group element (`<g>`)
#[derive(Debug, Clone, Default)]
pub struct Group {
    pub id: Option<String>,
    pub presentation: Presentation,
    pub children: Vec<Node>,
}

impl Group {
    pub fn push(&mut self, child: impl Into<Node>) {
        self.children.push(child.into());
    }
}

impl From<Group> for Element {
    fn from(g: Group) -> Self {
        let mut el = Element::new("g");
        el.set_opt("id", g.id);
        g.presentation.apply(&mut el);
        el.children = g.children;
        el
    }
}

/// SVG defs element (`<defs>`)
#[derive(Debug, Clone, Default)]
pub struct Defs {
    pub children: Vec<Node>,
}

impl From<Defs> for Element {
    fn from(d: Defs) -> Self {
        let mut el = Element::new("defs");
        el.children = d.children;
        el
    }
}

/// SVG pattern element (`<pattern>`), always in user space units
#[derive(Debug, Clone, Default)]
pub struct Pattern {
    pub id: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub children: Vec<Node>,
}

impl From<Pattern> for Element {
    fn from(p: Pattern) -> Self {
        let mut el = Element::new("pattern")
            .with_attr("id", p.id)
            .with_attr("x", fmt_num(p.x))
            .with_attr("y", fmt_num(p.y))
            .with_attr("width", fmt_num(p.width))
            .with_attr("height", fmt_num(p.height))
            .with_attr("patternUnits", "userSpaceOnUse");
        el.children = p.children;
        el
    }
}

/// SVG rect element (`<rect>`)
#[derive(Debug, Clone, Default)]
pub struct Rect {
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub rx: Option<f64>,
    pub presentation: Presentation,
}

impl From<Rect> for Element {
    fn from(r: Rect) -> Self {
        let mut el = Element::new("rect");
        el.set_opt("x", num(r.x));
        el.set_opt("y", num(r.y));
        el.set_opt("width", num(r.width));
        el.set_opt("height", num(r.height));
        el.set_opt("rx", num(r.rx));
        r.presentation.apply(&mut el);
        el
    }
}

/// SVG circle element (`<circle>`)
#[derive(Debug, Clone, Default)]
pub struct Circle {
    pub cx: Option<f64>,
    pub cy: Option<f64>,
    pub r: Option<f64>,
    pub presentation: Presentation,
}

impl From<Circle> for Element {
    fn from(c: Circle) -> Self {
        let mut el = Element::new("circle");
        el.set_opt("cx", num(c.cx));
        el.set_opt("cy", num(c.cy));
        el.set_opt("r", num(c.r));
        c.presentation.apply(&mut el);
        el
    }
}

/// SVG line element (`<line>`)
#[derive(Debug, Clone, Default)]
pub struct Line {
    pub x1: Option<f64>,
    pub y1: Option<f64>,
    pub x2: Option<f64>,
    pub y2: Option<f64>,
    pub presentation: Presentation,
}

impl From<Line> for Element {
    fn from(l: Line) -> Self {
        let mut el = Element::new("line");
        el.set_opt("x1", num(l.x1));
        el.set_opt("y1", num(l.y1));
        el.set_opt("x2", num(l.x2));
        el.set_opt("y2", num(l.y2));
        l.presentation.apply(&mut el);
        el
    }
}

/// SVG path element (`<path>`)
#[derive(Debug, Clone, Default)]
pub struct Path {
    pub d: String,
    pub presentation: Presentation,
}

impl From<Path> for Element {
    fn from(p: Path) -> Self {
        let mut el = Element::new("path").with_attr("d", p.d);
        p.presentation.apply(&mut el);
        el
    }
}

/// Point list for polygons
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Points(Vec<(f64, f64)>);

impl Points {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn push(mut self, x: f64, y: f64) -> Self {
        self.0.push((x, y));
        self
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Display for Points {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, (x, y)) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{},{}", fmt_num(*x), fmt_num(*y))?;
        }
        Ok(())
    }
}

/// SVG polygon element (`<polygon>`)
#[derive(Debug, Clone, Default)]
pub struct Polygon {
    pub points: Points,
    pub presentation: Presentation,
}

impl From<Polygon> for Element {
    fn from(p: Polygon) -> Self {
        let mut el = Element::new("polygon").with_attr("points", p.points.to_string());
        p.presentation.apply(&mut el);
        el
    }
}

/// SVG text element (`<text>`)
#[derive(Debug, Clone, Default)]
pub struct Text {
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub font_family: Option<String>,
    pub font_size: Option<f64>,
    pub font_weight: Option<String>,
    pub text_anchor: Option<String>,
    pub dominant_baseline: Option<String>,
    pub presentation: Presentation,
    pub content: String,
}

impl From<Text> for Element {
    fn from(t: Text) -> Self {
        let mut el = Element::new("text");
        el.set_opt("x", num(t.x));
        el.set_opt("y", num(t.y));
        el.set_opt("font-family", t.font_family);
        el.set_opt("font-size", num(t.font_size));
        el.set_opt("font-weight", t.font_weight);
        el.set_opt("text-anchor", t.text_anchor);
        el.set_opt("dominant-baseline", t.dominant_baseline);
        t.presentation.apply(&mut el);
        el.children.push(Node::Text(t.content));
        el
    }
}

/// SVG image element (`<image>`)
#[derive(Debug, Clone, Default)]
pub struct Image {
    pub href: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub preserve_aspect_ratio: Option<String>,
    pub presentation: Presentation,
}

impl From<Image> for Element {
    fn from(i: Image) -> Self {
        let mut el = Element::new("image")
            .with_attr("href", i.href.clone())
            .with_attr("xlink:href", i.href)
            .with_attr("x", fmt_num(i.x))
            .with_attr("y", fmt_num(i.y))
            .with_attr("width", fmt_num(i.width))
            .with_attr("height", fmt_num(i.height));
        el.set_opt("preserveAspectRatio", i.preserve_aspect_ratio);
        i.presentation.apply(&mut el);
        el
    }
}

macro_rules! impl_into_node {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Node {
                fn from(value: $ty) -> Self {
                    Node::Element(value.into())
                }
            }
        )*
    };
}

impl_into_node!(Svg, Group, Defs, Pattern, Rect, Circle, Line, Path, Polygon, Text, Image);
