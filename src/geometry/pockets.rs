//! Pocket rectangles for the three pocket layouts.

use glam::dvec2;

use super::defaults::*;
use super::frame::Frame;
use super::primitive::{LayerSink, Shape, Style};
use crate::config::{MAX_POCKET_COUNT, MIN_POCKET_COUNT, PocketConfig, PocketSize};
use crate::types::Cm;

/// Top edge of a pocket row, as a percentage of the lower section
fn row_y(frame: &Frame, position_y: f64) -> f64 {
    frame.waist_y + frame.lower * position_y / 100.0
}

fn pocket(sink: &mut LayerSink<'_>, color: &str, x: f64, y: f64, width: f64, height: f64) {
    sink.push(
        Shape::Rect {
            x,
            y,
            width: width.max(0.0),
            height: height.max(0.0),
            rx: None,
        },
        Style::new("pocket")
            .fill(color)
            .fill_opacity(POCKET_OPACITY)
            .outline(OUTLINE_COLOR, POCKET_STROKE_WIDTH)
            .dashed(STITCH_DASH),
    );
}

pub(crate) fn draw(frame: &Frame, config: &PocketConfig, color: &str, sink: &mut LayerSink<'_>) {
    match config {
        PocketConfig::None => {}
        PocketConfig::Single(single) => {
            let w = frame.px(Cm(single.width));
            let y = row_y(frame, single.position_y);
            pocket(
                sink,
                color,
                frame.center_x - w / 2.0,
                y,
                w,
                frame.px(Cm(single.height)),
            );
        }
        PocketConfig::Double(double) => {
            let size = |s: PocketSize| (frame.px(Cm(s.width)), frame.px(Cm(s.height)));
            let (lw, lh) = size(double.left);
            let (rw, rh) = size(double.right);
            let gap = frame.px(Cm(double.spacing)).max(0.0);
            let y = row_y(frame, double.position_y);
            let left_x = frame.center_x - (lw + gap + rw) / 2.0;
            pocket(sink, color, left_x, y, lw, lh);
            pocket(sink, color, left_x + lw + gap, y, rw, rh);
        }
        PocketConfig::Multiple(multiple) => {
            let count = multiple.count.clamp(MIN_POCKET_COUNT, MAX_POCKET_COUNT);
            let total = frame.px(Cm(multiple.total_width)).max(0.0);
            let each = total / f64::from(count);
            let h = frame.px(Cm(multiple.height));
            let y = row_y(frame, multiple.position_y);
            let left_x = frame.center_x - total / 2.0;
            for i in 0..count {
                pocket(sink, color, left_x + each * f64::from(i), y, each, h);
            }
            for i in 1..count {
                let x = left_x + each * f64::from(i);
                sink.line(
                    dvec2(x, y),
                    dvec2(x, y + h.max(0.0)),
                    Style::new("pocket-divider").outline(OUTLINE_COLOR, POCKET_DIVIDER_WIDTH),
                );
            }
        }
    }
}
