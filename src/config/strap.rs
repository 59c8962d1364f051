use serde::{Deserialize, Serialize};

use super::lenient::{Num, Or};

pub const DEFAULT_STRAP_COLOR_NAME: &str = "Saddle Brown";
pub const DEFAULT_STRAP_HEX: &str = "#8B4513";

/// One of the five strap drawing styles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrapStyle {
    #[default]
    Classic,
    Halter,
    Cross,
    Adjustable,
    Tie,
}

impl StrapStyle {
    pub const ALL: [StrapStyle; 5] = [
        StrapStyle::Classic,
        StrapStyle::Halter,
        StrapStyle::Cross,
        StrapStyle::Adjustable,
        StrapStyle::Tie,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            StrapStyle::Classic => "classic",
            StrapStyle::Halter => "halter",
            StrapStyle::Cross => "cross",
            StrapStyle::Adjustable => "adjustable",
            StrapStyle::Tie => "tie",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StrapConfig {
    pub style: StrapStyle,
    /// Neck strap length, cm
    pub neck_length: f64,
    /// Length of each waist strap, cm
    pub waist_length: f64,
    pub color_name: String,
    pub color: String,
}

impl Default for StrapConfig {
    fn default() -> Self {
        Self {
            style: StrapStyle::Classic,
            neck_length: 50.0,
            waist_length: 80.0,
            color_name: DEFAULT_STRAP_COLOR_NAME.to_string(),
            color: DEFAULT_STRAP_HEX.to_string(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct StrapRepr {
    style: Or<StrapStyle>,
    neck_length: Num,
    waist_length: Num,
    color_name: Or<String>,
    color: Or<String>,
}

impl From<StrapRepr> for StrapConfig {
    fn from(repr: StrapRepr) -> Self {
        let d = StrapConfig::default();
        StrapConfig {
            style: repr.style.or(d.style),
            neck_length: repr.neck_length.or(d.neck_length),
            waist_length: repr.waist_length.or(d.waist_length),
            color_name: repr.color_name.text_or(&d.color_name),
            color: repr
                .color
                .0
                .filter(|hex| apron_svg::Color::parse(hex).is_some())
                .unwrap_or(d.color),
        }
    }
}
