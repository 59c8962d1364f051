//! Fill legend and title block.

use glam::dvec2;

use super::defaults::*;
use super::frame::Frame;
use super::primitive::{Anchor, Font, LayerSink, Shape, Style};
use crate::config::{DesignConfig, FillSpec};
use crate::types::Cm;

const SWATCH_WIDTH: f64 = 30.0;
const SWATCH_HEIGHT: f64 = 20.0;
const LINE_HEIGHT: f64 = 17.0;

fn legend_font() -> Font {
    Font {
        size: 12.0,
        ..Default::default()
    }
}

pub(crate) fn draw_legend(frame: &Frame, fill: &FillSpec, sink: &mut LayerSink<'_>) {
    let x = frame.width - LEGEND_INSET;
    let y = LEGEND_Y;
    let text = Style::new("legend-text").fill(LABEL_COLOR);
    match fill {
        FillSpec::Solid(solid) => {
            sink.push(
                Shape::Rect {
                    x,
                    y,
                    width: SWATCH_WIDTH,
                    height: SWATCH_HEIGHT,
                    rx: None,
                },
                Style::new("legend-swatch")
                    .fill(solid.hex.as_str())
                    .outline(OUTLINE_COLOR, DIMENSION_WIDTH),
            );
            let mut label = format!("Color: {}", solid.name);
            if let Some(pantone) = &solid.pantone {
                label.push_str(&format!(" (Pantone: {pantone})"));
            }
            sink.text(dvec2(x + SWATCH_WIDTH + 10.0, y + 15.0), label, legend_font(), text);
        }
        FillSpec::Pattern(pattern) => {
            sink.text(
                dvec2(x, y + 15.0),
                format!("Pattern: {}", pattern.name),
                legend_font(),
                text.clone(),
            );
            sink.text(
                dvec2(x, y + 15.0 + LINE_HEIGHT),
                format!("Repeat: {}", pattern.repeat_mode),
                legend_font(),
                text,
            );
        }
    }
}

pub(crate) fn draw_title(frame: &Frame, config: &DesignConfig, sink: &mut LayerSink<'_>) {
    let cx = frame.width / 2.0;
    sink.text(
        dvec2(cx, TITLE_Y),
        TITLE,
        Font {
            size: TITLE_FONT_SIZE,
            bold: true,
            anchor: Anchor::Middle,
        },
        Style::new("title").fill(OUTLINE_COLOR),
    );
    sink.text(
        dvec2(cx, SUBTITLE_Y),
        format!(
            "{}×{}×{}CM",
            Cm(config.top_width),
            Cm(config.bottom_width),
            Cm(config.total_height())
        ),
        Font {
            size: SUBTITLE_FONT_SIZE,
            bold: false,
            anchor: Anchor::Middle,
        },
        Style::new("subtitle").fill(SUBTITLE_COLOR),
    );
}
