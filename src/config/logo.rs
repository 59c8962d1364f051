//! Logo placement. Offsets are measured from the body's top-left reference
//! point (the left end of the bottom edge, projected to the top line).

use serde::{Deserialize, Serialize};

use super::lenient::{Num, Or};

pub const DEFAULT_LOGO_NAME: &str = "Custom Logo";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LogoConfig {
    pub enabled: bool,
    pub name: String,
    /// Box width, cm
    pub width: f64,
    /// Intrinsic width / height of the artwork
    pub aspect_ratio: f64,
    pub offset_x: f64,
    pub offset_y: f64,
    /// 0..=100
    pub opacity: f64,
}

impl Default for LogoConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            name: DEFAULT_LOGO_NAME.to_string(),
            width: 8.0,
            aspect_ratio: 1.0,
            offset_x: 15.0,
            offset_y: 12.0,
            opacity: 100.0,
        }
    }
}

impl LogoConfig {
    /// Box height derived from width and aspect ratio
    pub fn height(&self) -> f64 {
        if self.aspect_ratio > 0.0 && self.aspect_ratio.is_finite() {
            self.width / self.aspect_ratio
        } else {
            self.width
        }
    }

    /// Center the logo box over a body of the given bottom width
    pub fn center_horizontally(&mut self, bottom_width: f64) {
        let offset = ((bottom_width - self.width) / 2.0).max(0.0);
        self.offset_x = (offset * 10.0).round() / 10.0;
    }
}

/// Placement advice for a logo box that leaves the body outline
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LogoAdvisory {
    /// `offset_x + width` exceeds the bottom width by this much (cm)
    ExceedsWidth { overflow: f64 },
    /// `offset_y + height` exceeds the total height by this much (cm)
    ExceedsHeight { overflow: f64 },
}

impl std::fmt::Display for LogoAdvisory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogoAdvisory::ExceedsWidth { overflow } => write!(
                f,
                "logo extends {}cm past the apron width",
                apron_svg::fmt_num(*overflow)
            ),
            LogoAdvisory::ExceedsHeight { overflow } => write!(
                f,
                "logo extends {}cm past the apron height",
                apron_svg::fmt_num(*overflow)
            ),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct LogoRepr {
    enabled: Or<bool>,
    name: Or<String>,
    width: Num,
    aspect_ratio: Num,
    offset_x: Num,
    offset_y: Num,
    opacity: Num,
}

impl From<LogoRepr> for LogoConfig {
    fn from(repr: LogoRepr) -> Self {
        let d = LogoConfig::default();
        LogoConfig {
            enabled: repr.enabled.or(d.enabled),
            name: repr.name.text_or(&d.name),
            width: repr.width.or(d.width),
            aspect_ratio: repr
                .aspect_ratio
                .0
                .filter(|ratio| *ratio > 0.0)
                .unwrap_or(d.aspect_ratio),
            offset_x: repr.offset_x.or(d.offset_x),
            offset_y: repr.offset_y.or(d.offset_y),
            opacity: repr.opacity.clamped(d.opacity, 0.0, 100.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centering_rounds_to_one_decimal() {
        let mut logo = LogoConfig {
            width: 8.25,
            ..Default::default()
        };
        logo.center_horizontally(60.0);
        assert_eq!(logo.offset_x, 25.9);
    }

    #[test]
    fn centering_never_goes_negative() {
        let mut logo = LogoConfig {
            width: 80.0,
            ..Default::default()
        };
        logo.center_horizontally(60.0);
        assert_eq!(logo.offset_x, 0.0);
    }

    #[test]
    fn height_follows_aspect_ratio() {
        let logo = LogoConfig {
            width: 8.0,
            aspect_ratio: 2.0,
            ..Default::default()
        };
        assert_eq!(logo.height(), 4.0);
    }
}
