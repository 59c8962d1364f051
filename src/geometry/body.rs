//! Body outline: straight top, curved shoulders down to the waist line,
//! rectangular lower section.

use apron_svg::PathData;
use glam::dvec2;

use super::defaults::*;
use super::frame::Frame;
use super::primitive::{Anchor, Font, LayerSink, Shape, Style};
use crate::fill::FillRef;

/// Closed outline path of the body
pub fn outline(frame: &Frame) -> PathData {
    let tl = frame.top_left();
    let tr = frame.top_right();
    let wl = frame.waist_left();
    let wr = frame.waist_right();
    let spread = (frame.bottom_width - frame.top_width) * SHOULDER_CURVE;
    let drop = frame.origin.y + frame.upper * SHOULDER_DROP;

    PathData::new()
        .m(tl.x, tl.y)
        .l(tr.x, tr.y)
        .q(tr.x + spread, drop, wr.x, wr.y)
        .l(frame.bottom_right().x, frame.bottom_right().y)
        .l(frame.bottom_left().x, frame.bottom_left().y)
        .l(wl.x, wl.y)
        .q(tl.x - spread, drop, tl.x, tl.y)
        .z()
}

pub(crate) fn draw(frame: &Frame, fill: &FillRef, sink: &mut LayerSink<'_>) {
    sink.push(
        Shape::Path(outline(frame)),
        Style::new("body")
            .fill(fill.paint())
            .outline(OUTLINE_COLOR, OUTLINE_WIDTH),
    );

    if let Some(note) = fill.placeholder_note() {
        let (cx, cy) = frame.fill_area().center();
        sink.text(
            dvec2(cx, cy),
            note,
            Font {
                size: NOTE_FONT_SIZE,
                bold: false,
                anchor: Anchor::Middle,
            },
            Style::new("pattern-note").fill(SUBTITLE_COLOR),
        );
    }
}
