//! Strap rendering, one algorithm per strap style.
//!
//! Every style starts from the body's top-left and top-right anchors.
//! Waist straps are drawn separately unless the style threads its own.

use apron_svg::PathData;
use enum_dispatch::enum_dispatch;
use glam::{DVec2, dvec2};

use super::defaults::*;
use super::frame::Frame;
use super::primitive::{LayerSink, Shape, Style};
use crate::config::{StrapConfig, StrapStyle};

/// Drawing inputs shared by all strap styles
pub(crate) struct StrapContext<'a> {
    pub frame: &'a Frame,
    pub color: &'a str,
}

impl StrapContext<'_> {
    fn stroke(&self, class: &'static str) -> Style {
        Style::new(class)
            .outline(self.color, STRAP_WIDTH)
            .round_caps()
    }

    /// y of the highest point reached by converging straps
    fn peak_y(&self) -> f64 {
        self.frame.origin.y - self.frame.neck_rise
    }
}

#[enum_dispatch]
pub(crate) trait DrawStrap {
    fn draw(&self, ctx: &StrapContext<'_>, sink: &mut LayerSink<'_>);

    /// Whether independent left/right waist straps accompany this style
    fn waist_straps(&self) -> bool {
        true
    }
}

pub(crate) struct Classic;
pub(crate) struct Halter;
pub(crate) struct Cross;
pub(crate) struct Adjustable;
pub(crate) struct Tie;

#[enum_dispatch(DrawStrap)]
pub(crate) enum StrapRenderer {
    Classic,
    Halter,
    Cross,
    Adjustable,
    Tie,
}

impl From<StrapStyle> for StrapRenderer {
    fn from(style: StrapStyle) -> Self {
        match style {
            StrapStyle::Classic => Classic.into(),
            StrapStyle::Halter => Halter.into(),
            StrapStyle::Cross => Cross.into(),
            StrapStyle::Adjustable => Adjustable.into(),
            StrapStyle::Tie => Tie.into(),
        }
    }
}

impl DrawStrap for Classic {
    fn draw(&self, ctx: &StrapContext<'_>, sink: &mut LayerSink<'_>) {
        let frame = ctx.frame;
        let (tl, tr) = (frame.top_left(), frame.top_right());
        let stub = frame.px(STRAP_ARC_HEIGHT * STRAP_STUB);
        let r = frame.top_width / 2.0;
        let d = PathData::new()
            .m(tl.x, tl.y)
            .l(tl.x, tl.y - stub)
            .a(r, r, 0.0, false, true, tr.x, tr.y - stub)
            .l(tr.x, tr.y);
        sink.push(Shape::Path(d), ctx.stroke("neck-strap"));
    }
}

impl DrawStrap for Halter {
    fn draw(&self, ctx: &StrapContext<'_>, sink: &mut LayerSink<'_>) {
        let frame = ctx.frame;
        let r = frame.px(HALTER_RING);
        let ring = dvec2(frame.center_x, ctx.peak_y() - r);
        for (anchor, side) in [(frame.top_left(), -1.0), (frame.top_right(), 1.0)] {
            let meet = ring + dvec2(side * r, r).normalize() * r;
            sink.line(anchor, meet, ctx.stroke("neck-strap"));
        }
        sink.push(
            Shape::Circle { center: ring, r },
            Style::new("strap-ring").outline(ctx.color, STRAP_WIDTH / 2.0),
        );
    }
}

impl DrawStrap for Cross {
    fn draw(&self, ctx: &StrapContext<'_>, sink: &mut LayerSink<'_>) {
        let frame = ctx.frame;
        let peak = ctx.peak_y();
        let reach = frame.top_width / 4.0;
        for (anchor, side) in [(frame.top_left(), -1.0), (frame.top_right(), 1.0)] {
            // rises on its own side, lands past center on the other
            let landing = dvec2(frame.center_x - side * reach, frame.origin.y - frame.neck_rise / 2.0);
            let d = PathData::new()
                .m(anchor.x, anchor.y)
                .l(anchor.x, peak)
                .l(landing.x, landing.y);
            sink.push(Shape::Path(d), ctx.stroke("neck-strap"));
        }

        let inset = frame.px(EYELET_INSET);
        let drop = frame.px(THREAD_DROP);
        for (corner, side) in [(frame.waist_left(), -1.0), (frame.waist_right(), 1.0)] {
            let eyelet = dvec2(corner.x - side * inset, corner.y);
            let exit = dvec2(corner.x, corner.y + drop);
            let end = exit + dvec2(side * frame.waist_draw, frame.waist_draw * CROSS_WAIST_SLOPE);
            sink.line(eyelet, exit, ctx.stroke("strap-threaded").dashed(STITCH_DASH).opacity(0.5));
            sink.line(exit, end, ctx.stroke("strap-tail"));
            sink.push(
                Shape::Circle {
                    center: eyelet,
                    r: frame.px(EYELET_RADIUS),
                },
                Style::new("eyelet")
                    .fill(BACKGROUND_COLOR)
                    .outline(OUTLINE_COLOR, DIMENSION_WIDTH),
            );
        }
    }

    fn waist_straps(&self) -> bool {
        false
    }
}

impl DrawStrap for Adjustable {
    fn draw(&self, ctx: &StrapContext<'_>, sink: &mut LayerSink<'_>) {
        let frame = ctx.frame;
        let w = frame.px(SLIDER_WIDTH);
        let h = frame.px(SLIDER_HEIGHT);
        let center = dvec2(frame.center_x, ctx.peak_y());
        for (anchor, side) in [(frame.top_left(), -1.0), (frame.top_right(), 1.0)] {
            sink.line(anchor, center + dvec2(side * w / 2.0, 0.0), ctx.stroke("neck-strap"));
        }
        sink.push(
            Shape::Rect {
                x: center.x - w / 2.0,
                y: center.y - h / 2.0,
                width: w,
                height: h,
                rx: Some(h / 4.0),
            },
            Style::new("strap-slider")
                .fill(BACKGROUND_COLOR)
                .outline(ctx.color, STRAP_WIDTH / 2.0),
        );
    }
}

impl DrawStrap for Tie {
    fn draw(&self, ctx: &StrapContext<'_>, sink: &mut LayerSink<'_>) {
        let frame = ctx.frame;
        let gap = frame.px(TIE_GAP) / 2.0;
        let flourish = frame.px(TIE_FLOURISH);
        for (anchor, side) in [(frame.top_left(), -1.0), (frame.top_right(), 1.0)] {
            let tip = dvec2(frame.center_x + side * gap, ctx.peak_y());
            sink.line(anchor, tip, ctx.stroke("neck-strap"));
            sink.push(
                Shape::Circle {
                    center: tip,
                    r: frame.px(TIE_CAP),
                },
                Style::new("strap-end").fill(ctx.color),
            );
            let flick: DVec2 = dvec2(-side, -1.0).normalize() * flourish;
            sink.line(tip, tip + flick, ctx.stroke("strap-flourish"));
        }
    }
}

fn draw_waist_straps(ctx: &StrapContext<'_>, sink: &mut LayerSink<'_>) {
    let frame = ctx.frame;
    for (corner, side) in [(frame.waist_left(), -1.0), (frame.waist_right(), 1.0)] {
        let end = corner + dvec2(side * frame.waist_draw, 0.0);
        sink.line(corner, end, ctx.stroke("waist-strap"));
    }
}

pub(crate) fn draw(frame: &Frame, strap: &StrapConfig, sink: &mut LayerSink<'_>) {
    let ctx = StrapContext {
        frame,
        color: &strap.color,
    };
    let renderer = StrapRenderer::from(strap.style);
    renderer.draw(&ctx, sink);
    if renderer.waist_straps() {
        draw_waist_straps(&ctx, sink);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DesignConfig;
    use crate::geometry::primitive::{Layer, Primitive};
    use crate::types::Scaler;

    fn strap_primitives(style: StrapStyle) -> Vec<Primitive> {
        let mut config = DesignConfig::default();
        config.strap.style = style;
        let frame = Frame::new(&config, Scaler::default());
        let mut out = Vec::new();
        draw(&frame, &config.strap, &mut LayerSink::new(Layer::Straps, &mut out));
        out
    }

    fn count(prims: &[Primitive], class: &str) -> usize {
        prims.iter().filter(|p| p.class() == class).count()
    }

    #[test]
    fn classic_is_one_continuous_loop() {
        let prims = strap_primitives(StrapStyle::Classic);
        assert_eq!(count(&prims, "neck-strap"), 1);
        assert_eq!(count(&prims, "waist-strap"), 2);
        let Shape::Path(d) = &prims[0].shape else {
            panic!("expected path");
        };
        // stubs 12cm up from (150,194) and (330,194), joined by a 90px arc
        insta::assert_snapshot!(d.to_string(), @"M150,194L150,146A90 90 0 0 1 330,146L330,194");
    }

    #[test]
    fn cross_threads_its_own_waist_straps() {
        let prims = strap_primitives(StrapStyle::Cross);
        assert_eq!(count(&prims, "neck-strap"), 2);
        assert_eq!(count(&prims, "eyelet"), 2);
        assert_eq!(count(&prims, "strap-threaded"), 2);
        assert_eq!(count(&prims, "strap-tail"), 2);
        assert_eq!(count(&prims, "waist-strap"), 0);
        for p in prims.iter().filter(|p| p.class() == "strap-threaded") {
            assert_eq!(p.style.dash, Some(STITCH_DASH));
            assert_eq!(p.style.opacity, Some(0.5));
        }
        // outward and down from the body edge
        for p in prims.iter().filter(|p| p.class() == "strap-tail") {
            let Shape::Line { from, to } = p.shape else {
                panic!("expected line");
            };
            assert!(to.y > from.y);
            assert!((to.x - 240.0).abs() > (from.x - 240.0).abs());
        }
    }

    #[test]
    fn cross_straps_land_on_the_opposite_side() {
        let prims = strap_primitives(StrapStyle::Cross);
        let landings: Vec<DVec2> = prims
            .iter()
            .filter(|p| p.class() == "neck-strap")
            .filter_map(|p| match &p.shape {
                Shape::Path(d) => match d.commands().last() {
                    Some(apron_svg::PathCommand::LineTo { x, y }) => Some(dvec2(*x, *y)),
                    _ => None,
                },
                _ => None,
            })
            .collect();
        assert_eq!(landings.len(), 2);
        assert!(landings[0].x > 240.0, "left strap crosses to the right");
        assert!(landings[1].x < 240.0, "right strap crosses to the left");
    }

    #[test]
    fn converging_styles_keep_waist_straps() {
        let halter = strap_primitives(StrapStyle::Halter);
        assert_eq!(count(&halter, "strap-ring"), 1);
        assert_eq!(count(&halter, "waist-strap"), 2);

        let adjustable = strap_primitives(StrapStyle::Adjustable);
        assert_eq!(count(&adjustable, "strap-slider"), 1);
        assert_eq!(count(&adjustable, "neck-strap"), 2);

        let tie = strap_primitives(StrapStyle::Tie);
        assert_eq!(count(&tie, "strap-end"), 2);
        assert_eq!(count(&tie, "strap-flourish"), 2);
        assert_eq!(count(&tie, "waist-strap"), 2);
    }

    #[test]
    fn waist_straps_run_outward_from_the_waist_line() {
        let prims = strap_primitives(StrapStyle::Classic);
        let lines: Vec<(DVec2, DVec2)> = prims
            .iter()
            .filter(|p| p.class() == "waist-strap")
            .filter_map(|p| match p.shape {
                Shape::Line { from, to } => Some((from, to)),
                _ => None,
            })
            .collect();
        // 80cm configured, drawn at a quarter
        assert_eq!(lines[0], (dvec2(120.0, 286.4), dvec2(40.0, 286.4)));
        assert_eq!(lines[1], (dvec2(360.0, 286.4), dvec2(440.0, 286.4)));
    }

    #[test]
    fn strap_strokes_use_the_strap_color() {
        for style in StrapStyle::ALL {
            for p in strap_primitives(style) {
                if matches!(p.class(), "neck-strap" | "waist-strap" | "strap-tail") {
                    assert_eq!(p.style.stroke.as_deref(), Some("#8B4513"));
                    assert_eq!(p.style.stroke_width, Some(STRAP_WIDTH));
                    assert!(p.style.round_caps);
                }
            }
        }
    }
}
