//! Canvas frame: body origin, key outline points and canvas size.

use glam::{DVec2, dvec2};

use super::defaults::*;
use crate::config::DesignConfig;
use crate::fill::FillArea;
use crate::types::{Cm, Scaler};

/// Key coordinates of one drawing, in drawing pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub scaler: Scaler,
    /// Left end of the bottom width on the top line
    pub origin: DVec2,
    pub top_width: f64,
    pub bottom_width: f64,
    pub upper: f64,
    pub lower: f64,
    pub total: f64,
    /// Left x of the top width
    pub top_x: f64,
    pub center_x: f64,
    /// y of the line between the upper and lower sections
    pub waist_y: f64,
    pub bottom_y: f64,
    /// Drawn waist strap length
    pub waist_draw: f64,
    /// Neck strap rise above the top line
    pub neck_rise: f64,
    pub width: f64,
    pub height: f64,
}

/// Neck strap rise for a configured neck length
pub(crate) fn neck_rise(neck_length: f64) -> Cm {
    (Cm(neck_length) * NECK_RISE)
        .max(NECK_RISE_MIN)
        .min(NECK_RISE_MAX)
}

impl Frame {
    pub fn new(config: &DesignConfig, scaler: Scaler) -> Self {
        let top = Cm(config.top_width);
        let bottom = Cm(config.bottom_width);
        let total = Cm(config.total_height());
        let waist_draw = Cm(config.strap.waist_length) * WAIST_DRAW_RATIO;
        let rise = neck_rise(config.strap.neck_length);

        // Straps and a wide top may reach past the default margins.
        let overhang = ((top - bottom) / 2.0).max(Cm::ZERO);
        let side = waist_draw + Cm(10.0);
        let start_x = ORIGIN_X.max(side) + overhang;
        let head = (STRAP_ARC_HEIGHT * STRAP_STUB + top / 2.0).max(rise + HALTER_RING + Cm(1.0));
        let start_y = ORIGIN_Y.max(head + TITLE_BAND);
        let width = start_x + bottom + overhang + RIGHT_MARGIN.max(side);
        let height = start_y + total + BOTTOM_MARGIN;

        let origin = scaler.point(start_x, start_y);
        let top_width = scaler.px(top);
        let bottom_width = scaler.px(bottom);
        let upper = scaler.px(Cm(config.upper_height()));
        Self {
            scaler,
            origin,
            top_width,
            bottom_width,
            upper,
            lower: scaler.px(Cm(config.lower_height())),
            total: scaler.px(total),
            top_x: origin.x + (bottom_width - top_width) / 2.0,
            center_x: origin.x + bottom_width / 2.0,
            waist_y: origin.y + upper,
            bottom_y: origin.y + scaler.px(total),
            waist_draw: scaler.px(waist_draw),
            neck_rise: scaler.px(rise),
            width: scaler.px(width),
            height: scaler.px(height),
        }
    }

    pub fn top_left(&self) -> DVec2 {
        dvec2(self.top_x, self.origin.y)
    }

    pub fn top_right(&self) -> DVec2 {
        dvec2(self.top_x + self.top_width, self.origin.y)
    }

    pub fn waist_left(&self) -> DVec2 {
        dvec2(self.origin.x, self.waist_y)
    }

    pub fn waist_right(&self) -> DVec2 {
        dvec2(self.origin.x + self.bottom_width, self.waist_y)
    }

    pub fn bottom_left(&self) -> DVec2 {
        dvec2(self.origin.x, self.bottom_y)
    }

    pub fn bottom_right(&self) -> DVec2 {
        dvec2(self.origin.x + self.bottom_width, self.bottom_y)
    }

    /// Bounding box of the body, where fills are painted
    pub fn fill_area(&self) -> FillArea {
        FillArea {
            x: self.origin.x,
            y: self.origin.y,
            width: self.bottom_width,
            height: self.total,
        }
    }

    pub fn px(&self, l: Cm) -> f64 {
        self.scaler.px(l)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_design_clears_the_title_band() {
        let frame = Frame::new(&DesignConfig::default(), Scaler::default());
        // 12cm stubs plus a 22.5cm arc radius plus the 14cm title band
        assert_eq!(frame.origin, dvec2(120.0, 194.0));
        assert_eq!(frame.top_x, 150.0);
        assert_eq!(frame.bottom_width, 240.0);
        assert_eq!(frame.total, 280.0);
        assert_eq!(frame.width, (30.0 + 60.0 + 40.0) * 4.0);
        assert_eq!(frame.height, (48.5 + 70.0 + 40.0) * 4.0);
    }

    #[test]
    fn long_waist_straps_widen_the_canvas() {
        let mut config = DesignConfig::default();
        config.strap.waist_length = 200.0;
        let frame = Frame::new(&config, Scaler::default());
        // 200 * 0.25 + 10 on both sides
        assert_eq!(frame.origin.x, 60.0 * 4.0);
        assert_eq!(frame.width, (60.0 + 60.0 + 60.0) * 4.0);
        assert!(frame.origin.x - frame.waist_draw >= 0.0);
    }

    #[test]
    fn short_top_keeps_minimum_origin() {
        let frame = Frame::new(&DesignConfig::new(20.0, 40.0, 60.0), Scaler::default());
        assert_eq!(frame.origin.y, 160.0);
    }

    #[test]
    fn wide_top_stays_on_canvas() {
        let config = DesignConfig::new(100.0, 40.0, 70.0);
        let frame = Frame::new(&config, Scaler::default());
        assert!(frame.top_x > 0.0);
        assert!(frame.top_x + frame.top_width < frame.width);
        // classic strap arc: 12cm stubs plus a 50cm radius
        assert!(frame.origin.y >= frame.px(Cm(62.0)));
    }

    #[test]
    fn fill_area_is_body_bounding_box() {
        let frame = Frame::new(&DesignConfig::default(), Scaler::default());
        let area = frame.fill_area();
        assert_eq!((area.x, area.y, area.width, area.height), (120.0, 194.0, 240.0, 280.0));
    }

    #[test]
    fn neck_rise_is_clamped() {
        assert_eq!(neck_rise(5.0), Cm(10.0));
        assert_eq!(neck_rise(50.0), Cm(20.0));
        assert_eq!(neck_rise(500.0), Cm(30.0));
    }
}
