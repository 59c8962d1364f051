//! Dimension annotations: measured lines with arrowheads at both ends and
//! a CM/INCH label.

use glam::{DVec2, dvec2};

use super::defaults::*;
use super::frame::Frame;
use super::primitive::{Anchor, Font, LayerSink, Shape, Style};
use crate::config::{DesignConfig, DimensionSet};
use crate::types::Cm;

/// Label text for a measured length, e.g. `70CM/27.6INCH`
pub fn format_dimension(length: Cm) -> String {
    format!("{}CM/{:.1}INCH", length, length.inches())
}

/// Arrowhead triangle with its tip at `end`, pointing away from `start`.
///
/// Returns None for a zero-length line.
pub(crate) fn arrowhead(start: DVec2, end: DVec2, len: f64, width: f64) -> Option<Vec<DVec2>> {
    let delta = end - start;
    let length = delta.length();
    if length < 0.001 {
        return None;
    }
    let unit = delta / length;
    let perp = dvec2(-unit.y, unit.x);
    let base = end - unit * len;
    let half = width / 2.0;
    Some(vec![end, base + perp * half, base - perp * half])
}

/// Line with an arrowhead at each end
pub(crate) fn measure_line(
    sink: &mut LayerSink<'_>,
    from: DVec2,
    to: DVec2,
    arrow: f64,
    class: &'static str,
    arrow_class: &'static str,
) {
    sink.line(from, to, Style::new(class).outline(DIMENSION_COLOR, DIMENSION_WIDTH));
    for (tail, tip) in [(to, from), (from, to)] {
        if let Some(points) = arrowhead(tail, tip, arrow, arrow) {
            sink.push(Shape::Polygon(points), Style::new(arrow_class).fill(DIMENSION_COLOR));
        }
    }
}

fn label_font() -> Font {
    Font {
        size: LABEL_FONT_SIZE,
        bold: false,
        anchor: Anchor::Middle,
    }
}

fn horizontal(sink: &mut LayerSink<'_>, y: f64, x0: f64, x1: f64, length: Cm) {
    measure_line(sink, dvec2(x0, y), dvec2(x1, y), ARROW_SIZE, "dimension", "dimension-arrow");
    sink.text(
        dvec2((x0 + x1) / 2.0, y - LABEL_GAP),
        format_dimension(length),
        label_font(),
        Style::new("dimension-label").fill(LABEL_COLOR),
    );
}

/// Vertical dimension; the label sits on the `side` (-1 left, 1 right) of the line
fn vertical(sink: &mut LayerSink<'_>, x: f64, y0: f64, y1: f64, length: Cm, side: f64) {
    measure_line(sink, dvec2(x, y0), dvec2(x, y1), ARROW_SIZE, "dimension", "dimension-arrow");
    // rotated glyphs extend toward -x from the anchor
    let label_x = if side < 0.0 {
        x - LABEL_GAP
    } else {
        x + LABEL_GAP + LABEL_FONT_SIZE
    };
    sink.push(
        Shape::Text {
            at: dvec2(label_x, (y0 + y1) / 2.0),
            content: format_dimension(length),
            font: label_font(),
            rotate: Some(-90.0),
        },
        Style::new("dimension-label").fill(LABEL_COLOR),
    );
}

pub(crate) fn draw(
    frame: &Frame,
    config: &DesignConfig,
    set: DimensionSet,
    sink: &mut LayerSink<'_>,
) {
    let right = frame.origin.x + frame.bottom_width;
    if set.top_width {
        let y = frame.origin.y - frame.px(TOP_DIMENSION_OFFSET);
        let (tl, tr) = (frame.top_left(), frame.top_right());
        horizontal(sink, y, tl.x, tr.x, Cm(config.top_width));
    }
    if set.bottom_width {
        let y = frame.bottom_y + frame.px(BOTTOM_DIMENSION_OFFSET);
        horizontal(sink, y, frame.origin.x, right, Cm(config.bottom_width));
    }
    if set.total_height {
        let x = frame.origin.x - frame.px(TOTAL_DIMENSION_OFFSET);
        vertical(sink, x, frame.origin.y, frame.bottom_y, Cm(config.total_height()), -1.0);
    }
    if set.upper_height {
        let x = right + frame.px(UPPER_DIMENSION_OFFSET);
        vertical(sink, x, frame.origin.y, frame.waist_y, Cm(config.upper_height()), 1.0);
    }
    if set.lower_height {
        let x = right + frame.px(LOWER_DIMENSION_OFFSET);
        vertical(sink, x, frame.waist_y, frame.bottom_y, Cm(config.lower_height()), 1.0);
    }
}
