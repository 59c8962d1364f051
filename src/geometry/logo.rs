//! Logo box: the artwork (or a dashed placeholder) plus its width and
//! offset annotations.

use glam::dvec2;

use super::defaults::*;
use super::dimensions::measure_line;
use super::frame::Frame;
use super::primitive::{Anchor, Font, LayerSink, Shape, Style};
use crate::asset::Asset;
use crate::config::LogoConfig;
use crate::fill::Artwork;
use crate::types::Cm;

/// Logo box in drawing pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogoBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Logo box; uploaded artwork overrides the configured aspect ratio
pub fn logo_box(frame: &Frame, logo: &LogoConfig, asset: Option<&Asset>) -> LogoBox {
    let aspect = match asset {
        Some(asset) => asset.aspect_ratio(),
        None if logo.aspect_ratio.is_finite() && logo.aspect_ratio > 0.0 => logo.aspect_ratio,
        None => 1.0,
    };
    let width = frame.px(Cm(logo.width)).max(0.0);
    LogoBox {
        x: frame.origin.x + frame.px(Cm(logo.offset_x)),
        y: frame.origin.y + frame.px(Cm(logo.offset_y)),
        width,
        height: width / aspect,
    }
}

fn annotation_label(sink: &mut LayerSink<'_>, x: f64, y: f64, text: String, rotate: Option<f64>) {
    sink.push(
        Shape::Text {
            at: dvec2(x, y),
            content: text,
            font: Font {
                size: LOGO_LABEL_FONT_SIZE,
                bold: false,
                anchor: Anchor::Middle,
            },
            rotate,
        },
        Style::new("logo-annotation-label").fill(DIMENSION_COLOR),
    );
}

pub(crate) fn draw(
    frame: &Frame,
    logo: &LogoConfig,
    asset: Option<&Asset>,
    sink: &mut LayerSink<'_>,
) {
    if !logo.enabled {
        return;
    }
    let b = logo_box(frame, logo, asset);

    match asset {
        Some(asset) => sink.push(
            Shape::Embed {
                x: b.x,
                y: b.y,
                width: b.width,
                height: b.height,
                artwork: Artwork::from(asset),
            },
            Style::new("logo").opacity(logo.opacity.clamp(0.0, 100.0) / 100.0),
        ),
        None => {
            sink.push(
                Shape::Rect {
                    x: b.x,
                    y: b.y,
                    width: b.width,
                    height: b.height,
                    rx: None,
                },
                Style::new("logo-placeholder")
                    .outline(DIMENSION_COLOR, DIMENSION_WIDTH)
                    .dashed(STITCH_DASH),
            );
            sink.text(
                dvec2(b.x + b.width / 2.0, b.y + b.height / 2.0 + LOGO_PLACEHOLDER_FONT_SIZE / 3.0),
                logo.name.clone(),
                Font {
                    size: LOGO_PLACEHOLDER_FONT_SIZE,
                    bold: false,
                    anchor: Anchor::Middle,
                },
                Style::new("logo-label").fill(DIMENSION_COLOR),
            );
        }
    }

    let gap = frame.px(LOGO_ANNOTATION_GAP);

    let under = b.y + b.height + gap;
    measure_line(
        sink,
        dvec2(b.x, under),
        dvec2(b.x + b.width, under),
        LOGO_ARROW_SIZE,
        "logo-annotation",
        "logo-annotation-arrow",
    );
    annotation_label(
        sink,
        b.x + b.width / 2.0,
        under + LOGO_LABEL_FONT_SIZE + 2.0,
        format!("{}cm", Cm(logo.width)),
        None,
    );

    let beside = b.x - gap;
    measure_line(
        sink,
        dvec2(beside, frame.origin.y),
        dvec2(beside, b.y),
        LOGO_ARROW_SIZE,
        "logo-annotation",
        "logo-annotation-arrow",
    );
    annotation_label(
        sink,
        beside - 4.0,
        (frame.origin.y + b.y) / 2.0,
        format!("{}cm", Cm(logo.offset_y)),
        Some(-90.0),
    );
}
