//! Lowering of primitives and fill definitions into SVG elements.

use apron_svg::{
    Circle, Element, Group, Image, Line, Node, Path, Pattern, Points, Polygon, Presentation, Rect,
    Text,
};
use glam::DVec2;

use crate::fill::{Artwork, ContentBox, PatternTile, fit_transform};
use crate::geometry::defaults::FONT_FAMILY;
use crate::geometry::{Anchor, Primitive, Shape, Style};

const EMBED_ASPECT: &str = "xMidYMid meet";

fn presentation(style: &Style) -> Presentation {
    Presentation {
        class: Some(style.class.to_string()).filter(|c| !c.is_empty()),
        fill: style.fill.clone(),
        fill_opacity: style.fill_opacity,
        stroke: style.stroke.clone(),
        stroke_width: style.stroke_width,
        stroke_dasharray: style.dash.map(str::to_string),
        stroke_linecap: style.round_caps.then(|| "round".to_string()),
        opacity: style.opacity,
        transform: None,
    }
}

fn points(pts: &[DVec2]) -> Points {
    pts.iter().fold(Points::new(), |acc, p| acc.push(p.x, p.y))
}

/// Artwork placed into `target`: vector children under a fitting transform,
/// or an image reference.
fn artwork(art: &Artwork, target: &ContentBox, preserve_aspect_ratio: &str) -> Node {
    match art {
        Artwork::Vector {
            view_box,
            namespaces,
            children,
        } => {
            let mut group: Element = Group {
                presentation: Presentation {
                    transform: Some(fit_transform(view_box, target)),
                    ..Default::default()
                },
                children: children.clone(),
                ..Default::default()
            }
            .into();
            for (prefix, uri) in namespaces {
                group.set_attr(prefix.clone(), uri.clone());
            }
            group.into()
        }
        Artwork::Image { href } => Image {
            href: href.clone(),
            x: target.x,
            y: target.y,
            width: target.width,
            height: target.height,
            preserve_aspect_ratio: Some(preserve_aspect_ratio.to_string()),
            presentation: Presentation::default(),
        }
        .into(),
    }
}

/// Lower one primitive
pub fn primitive(prim: &Primitive) -> Element {
    let mut pres = presentation(&prim.style);
    match &prim.shape {
        Shape::Path(d) => Path {
            d: d.to_string(),
            presentation: pres,
        }
        .into(),
        Shape::Rect {
            x,
            y,
            width,
            height,
            rx,
        } => Rect {
            x: Some(*x),
            y: Some(*y),
            width: Some(*width),
            height: Some(*height),
            rx: *rx,
            presentation: pres,
        }
        .into(),
        Shape::Line { from, to } => Line {
            x1: Some(from.x),
            y1: Some(from.y),
            x2: Some(to.x),
            y2: Some(to.y),
            presentation: pres,
        }
        .into(),
        Shape::Polygon(pts) => Polygon {
            points: points(pts),
            presentation: pres,
        }
        .into(),
        Shape::Circle { center, r } => Circle {
            cx: Some(center.x),
            cy: Some(center.y),
            r: Some(*r),
            presentation: pres,
        }
        .into(),
        Shape::Text {
            at,
            content,
            font,
            rotate,
        } => {
            pres.transform = rotate.map(|deg| {
                format!(
                    "rotate({} {} {})",
                    apron_svg::fmt_num(deg),
                    apron_svg::fmt_num(at.x),
                    apron_svg::fmt_num(at.y)
                )
            });
            Text {
                x: Some(at.x),
                y: Some(at.y),
                font_family: Some(FONT_FAMILY.to_string()),
                font_size: Some(font.size),
                font_weight: font.bold.then(|| "bold".to_string()),
                text_anchor: match font.anchor {
                    Anchor::Start => None,
                    Anchor::Middle => Some("middle".to_string()),
                },
                dominant_baseline: None,
                presentation: pres,
                content: content.clone(),
            }
            .into()
        }
        Shape::Embed {
            x,
            y,
            width,
            height,
            artwork: art,
        } => {
            let target = ContentBox {
                x: *x,
                y: *y,
                width: *width,
                height: *height,
            };
            Group {
                presentation: pres,
                children: vec![artwork(art, &target, EMBED_ASPECT)],
                ..Default::default()
            }
            .into()
        }
    }
}

/// `<pattern>` definition of a repeating tile
pub fn pattern(tile: &PatternTile) -> Element {
    let mut children: Vec<Node> = Vec::new();
    if let Some(backdrop) = tile.backdrop {
        children.push(
            Rect {
                width: Some(tile.width),
                height: Some(tile.height),
                presentation: Presentation {
                    fill: Some(backdrop.to_string()),
                    ..Default::default()
                },
                ..Default::default()
            }
            .into(),
        );
    }
    children.push(
        Group {
            presentation: Presentation {
                opacity: Some(tile.opacity),
                ..Default::default()
            },
            children: vec![artwork(&tile.artwork, &tile.content, tile.preserve_aspect_ratio)],
            ..Default::default()
        }
        .into(),
    );
    Pattern {
        id: tile.id.to_string(),
        x: tile.x,
        y: tile.y,
        width: tile.width,
        height: tile.height,
        children,
    }
    .into()
}
