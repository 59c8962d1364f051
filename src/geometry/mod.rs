//! Geometry Engine: turns a design configuration and its resolved fill
//! into positioned drawing primitives.
//!
//! Everything derives from one body origin and a uniform px-per-cm scale.
//! Out-of-range numbers never fail here; sizes that would go negative are
//! clamped at the point they are drawn.

mod body;
pub mod defaults;
mod dimensions;
mod frame;
mod legend;
mod logo;
mod pockets;
mod primitive;
mod straps;

pub use body::outline;
pub use dimensions::format_dimension;
pub use frame::Frame;
pub use logo::{LogoBox, logo_box};
pub use primitive::{Anchor, Font, Layer, Primitive, Shape, Style};

use crate::asset::Asset;
use crate::config::{DesignConfig, RenderOptions};
use crate::fill::{FillArea, FillRef};
use defaults::BACKGROUND_COLOR;
use primitive::LayerSink;

/// Positioned primitives of one drawing
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    pub width: f64,
    pub height: f64,
    pub fill: FillRef,
    /// In stacking order
    pub primitives: Vec<Primitive>,
}

impl Layout {
    /// Primitives carrying `class`
    pub fn with_class<'a>(&'a self, class: &'a str) -> impl Iterator<Item = &'a Primitive> + 'a {
        self.primitives.iter().filter(move |p| p.class() == class)
    }

    pub fn count(&self, class: &str) -> usize {
        self.with_class(class).count()
    }
}

/// Region the body fill covers, in drawing pixels
pub fn fill_area(config: &DesignConfig, options: &RenderOptions) -> FillArea {
    Frame::new(config, options.scaler()).fill_area()
}

/// Compute every primitive of the drawing
pub fn layout(
    config: &DesignConfig,
    fill: &FillRef,
    logo: Option<&Asset>,
    options: &RenderOptions,
) -> Layout {
    let frame = Frame::new(config, options.scaler());
    let mut out = Vec::new();

    LayerSink::new(Layer::Background, &mut out).push(
        Shape::Rect {
            x: 0.0,
            y: 0.0,
            width: frame.width,
            height: frame.height,
            rx: None,
        },
        Style::new("background").fill(BACKGROUND_COLOR),
    );
    body::draw(&frame, fill, &mut LayerSink::new(Layer::Body, &mut out));
    straps::draw(&frame, &config.strap, &mut LayerSink::new(Layer::Straps, &mut out));
    pockets::draw(
        &frame,
        &config.pocket,
        &config.pocket_color,
        &mut LayerSink::new(Layer::Pockets, &mut out),
    );
    logo::draw(&frame, &config.logo, logo, &mut LayerSink::new(Layer::Logo, &mut out));
    dimensions::draw(
        &frame,
        config,
        options.dimensions,
        &mut LayerSink::new(Layer::Annotations, &mut out),
    );
    legend::draw_legend(&frame, &config.fill, &mut LayerSink::new(Layer::Legend, &mut out));
    legend::draw_title(&frame, config, &mut LayerSink::new(Layer::Title, &mut out));

    crate::log::debug!(
        primitives = out.len(),
        width = frame.width,
        height = frame.height,
        "layout computed"
    );

    Layout {
        width: frame.width,
        height: frame.height,
        fill: fill.clone(),
        primitives: out,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{PocketMode, StrapStyle};
    use crate::fill::resolve_fill;

    fn default_layout(config: &DesignConfig) -> Layout {
        let options = RenderOptions::default();
        let fill = resolve_fill(&config.fill, None, fill_area(config, &options));
        layout(config, &fill, None, &options)
    }

    #[test]
    fn primitives_follow_layer_order() {
        let mut config = DesignConfig::default();
        config.set_pocket_mode(PocketMode::Double);
        config.logo.enabled = true;
        let layout = default_layout(&config);
        assert!(layout.primitives.windows(2).all(|w| w[0].layer <= w[1].layer));
        assert_eq!(layout.primitives[0].class(), "background");
        assert_eq!(layout.count("body"), 1);
        assert_eq!(layout.count("pocket"), 2);
        assert_eq!(layout.count("title"), 1);
    }

    #[test]
    fn every_strap_style_lays_out() {
        for style in StrapStyle::ALL {
            let mut config = DesignConfig::default();
            config.strap.style = style;
            let layout = default_layout(&config);
            assert!(layout.count("neck-strap") >= 1, "{style:?}");
            let waist = if style == StrapStyle::Cross { 0 } else { 2 };
            assert_eq!(layout.count("waist-strap"), waist, "{style:?}");
        }
    }

    #[test]
    fn degenerate_numbers_do_not_panic() {
        let mut config = DesignConfig::new(-10.0, 0.0, 0.0);
        config.strap.waist_length = -50.0;
        config.set_pocket_mode(PocketMode::Multiple);
        config.logo.enabled = true;
        config.logo.width = -3.0;
        let layout = default_layout(&config);
        assert!(layout.width.is_finite() && layout.height.is_finite());
        assert_eq!(layout.count("body"), 1);
    }
}
