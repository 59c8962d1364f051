//! Drawing constants. Lengths in `Cm` scale with the drawing; plain `f64`
//! values are fixed pixel sizes.

use crate::types::Cm;

/// Body origin: left edge of the bottom width
pub const ORIGIN_X: Cm = Cm(30.0);
/// Body origin: top line
pub const ORIGIN_Y: Cm = Cm(40.0);
pub const RIGHT_MARGIN: Cm = Cm(40.0);
pub const BOTTOM_MARGIN: Cm = Cm(40.0);
/// Clear band above the highest strap for the title block
pub const TITLE_BAND: Cm = Cm(14.0);

/// Shoulder curve control point offset, share of the width difference
pub const SHOULDER_CURVE: f64 = 0.1;
/// Shoulder curve control point height, share of the upper section
pub const SHOULDER_DROP: f64 = 0.8;

/// Fixed strap arc height
pub const STRAP_ARC_HEIGHT: Cm = Cm(20.0);
/// Classic strap stubs, share of the arc height
pub const STRAP_STUB: f64 = 0.6;
/// Neck strap rise above the body, share of the neck strap length
pub const NECK_RISE: f64 = 0.4;
pub const NECK_RISE_MIN: Cm = Cm(10.0);
pub const NECK_RISE_MAX: Cm = Cm(30.0);
/// Drawn waist strap length, share of the configured length
pub const WAIST_DRAW_RATIO: f64 = 0.25;
pub const STRAP_WIDTH: f64 = 6.0;
pub const HALTER_RING: Cm = Cm(2.5);
pub const SLIDER_WIDTH: Cm = Cm(6.0);
pub const SLIDER_HEIGHT: Cm = Cm(2.5);
pub const TIE_GAP: Cm = Cm(2.0);
pub const TIE_CAP: Cm = Cm(1.0);
pub const TIE_FLOURISH: Cm = Cm(2.5);
pub const EYELET_INSET: Cm = Cm(2.5);
pub const EYELET_RADIUS: Cm = Cm(0.8);
pub const THREAD_DROP: Cm = Cm(1.5);
/// Outward strap from an eyelet drops this share of its length
pub const CROSS_WAIST_SLOPE: f64 = 0.3;

pub const OUTLINE_COLOR: &str = "#333333";
pub const OUTLINE_WIDTH: f64 = 2.0;
pub const BACKGROUND_COLOR: &str = "#ffffff";

pub const POCKET_OPACITY: f64 = 0.7;
pub const POCKET_STROKE_WIDTH: f64 = 1.0;
pub const POCKET_DIVIDER_WIDTH: f64 = 0.75;
pub const STITCH_DASH: &str = "3,3";

pub const DIMENSION_COLOR: &str = "#666666";
pub const LABEL_COLOR: &str = "#333333";
pub const DIMENSION_WIDTH: f64 = 1.0;
pub const ARROW_SIZE: f64 = 6.0;
pub const LABEL_FONT_SIZE: f64 = 11.0;
pub const LABEL_GAP: f64 = 8.0;
pub const TOP_DIMENSION_OFFSET: Cm = Cm(10.0);
pub const BOTTOM_DIMENSION_OFFSET: Cm = Cm(10.0);
pub const TOTAL_DIMENSION_OFFSET: Cm = Cm(15.0);
pub const UPPER_DIMENSION_OFFSET: Cm = Cm(10.0);
pub const LOWER_DIMENSION_OFFSET: Cm = Cm(25.0);

pub const LOGO_ANNOTATION_GAP: Cm = Cm(2.0);
pub const LOGO_ARROW_SIZE: f64 = 4.0;
pub const LOGO_LABEL_FONT_SIZE: f64 = 9.0;
pub const LOGO_PLACEHOLDER_FONT_SIZE: f64 = 10.0;

pub const FONT_FAMILY: &str = "Arial, sans-serif";
pub const LEGEND_INSET: f64 = 200.0;
pub const LEGEND_Y: f64 = 20.0;
pub const TITLE: &str = "Apron Design Draft";
pub const TITLE_Y: f64 = 28.0;
pub const TITLE_FONT_SIZE: f64 = 18.0;
pub const SUBTITLE_Y: f64 = 48.0;
pub const SUBTITLE_FONT_SIZE: f64 = 12.0;
pub const SUBTITLE_COLOR: &str = "#666666";
pub const NOTE_FONT_SIZE: f64 = 14.0;
