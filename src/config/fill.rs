//! Body fill specification: a solid color or a pattern over uploaded artwork.

use serde::{Deserialize, Serialize};

use super::lenient::{Num, Or};
use crate::asset::AssetRef;

pub const DEFAULT_SOLID_NAME: &str = "Coral Red";
pub const DEFAULT_SOLID_HEX: &str = "#FF6B6B";
pub const DEFAULT_PATTERN_NAME: &str = "Custom Pattern";
pub const DEFAULT_CUSTOM_SIZE: f64 = 30.0;
pub const DEFAULT_CUSTOM_POS: f64 = 50.0;
/// Bounds of the custom content size, percent of the smaller area side
pub const MIN_CUSTOM_SIZE: f64 = 10.0;
pub const MAX_CUSTOM_SIZE: f64 = 100.0;

/// How pattern artwork is laid over the body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RepeatMode {
    #[default]
    Tile,
    Stretch,
    Center,
    Custom,
}

impl RepeatMode {
    pub fn as_str(self) -> &'static str {
        match self {
            RepeatMode::Tile => "tile",
            RepeatMode::Stretch => "stretch",
            RepeatMode::Center => "center",
            RepeatMode::Custom => "custom",
        }
    }
}

impl std::fmt::Display for RepeatMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A flat color fill
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SolidFill {
    pub name: String,
    pub hex: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pantone: Option<String>,
}

impl Default for SolidFill {
    fn default() -> Self {
        Self {
            name: DEFAULT_SOLID_NAME.to_string(),
            hex: DEFAULT_SOLID_HEX.to_string(),
            pantone: None,
        }
    }
}

/// A pattern fill. The `custom_*` percentages only matter for [`RepeatMode::Custom`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PatternFill {
    pub name: String,
    pub repeat_mode: RepeatMode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asset: Option<AssetRef>,
    /// Content size, percent of the smaller fill-area side (10..=100)
    pub custom_size: f64,
    /// Horizontal position, percent of the free horizontal range (0..=100)
    pub custom_pos_x: f64,
    /// Vertical position, percent of the free vertical range (0..=100)
    pub custom_pos_y: f64,
}

impl Default for PatternFill {
    fn default() -> Self {
        Self {
            name: DEFAULT_PATTERN_NAME.to_string(),
            repeat_mode: RepeatMode::Tile,
            asset: None,
            custom_size: DEFAULT_CUSTOM_SIZE,
            custom_pos_x: DEFAULT_CUSTOM_POS,
            custom_pos_y: DEFAULT_CUSTOM_POS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FillSpec {
    Solid(SolidFill),
    Pattern(PatternFill),
}

impl Default for FillSpec {
    fn default() -> Self {
        FillSpec::Solid(SolidFill::default())
    }
}

impl FillSpec {
    /// Display name of the color or pattern
    pub fn name(&self) -> &str {
        match self {
            FillSpec::Solid(solid) => &solid.name,
            FillSpec::Pattern(pattern) => &pattern.name,
        }
    }

    /// The pattern asset, if this is a pattern fill with artwork attached
    pub fn asset(&self) -> Option<&AssetRef> {
        match self {
            FillSpec::Pattern(pattern) => pattern.asset.as_ref(),
            FillSpec::Solid(_) => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
enum FillKind {
    Solid,
    Pattern,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct FillRepr {
    #[serde(rename = "type")]
    kind: Or<FillKind>,
    name: Or<String>,
    hex: Or<String>,
    pantone: Or<String>,
    repeat_mode: Or<RepeatMode>,
    asset: Or<AssetRef>,
    custom_size: Num,
    custom_pos_x: Num,
    custom_pos_y: Num,
}

impl From<FillRepr> for FillSpec {
    fn from(repr: FillRepr) -> Self {
        match repr.kind.or(FillKind::Solid) {
            FillKind::Solid => {
                let hex = repr
                    .hex
                    .0
                    .filter(|hex| apron_svg::Color::parse(hex).is_some())
                    .unwrap_or_else(|| DEFAULT_SOLID_HEX.to_string());
                FillSpec::Solid(SolidFill {
                    name: repr.name.text_or(DEFAULT_SOLID_NAME),
                    hex,
                    pantone: repr.pantone.0.filter(|code| !code.trim().is_empty()),
                })
            }
            FillKind::Pattern => FillSpec::Pattern(PatternFill {
                name: repr.name.text_or(DEFAULT_PATTERN_NAME),
                repeat_mode: repr.repeat_mode.or(RepeatMode::Tile),
                asset: repr.asset.0,
                custom_size: repr.custom_size.clamped(DEFAULT_CUSTOM_SIZE, MIN_CUSTOM_SIZE, MAX_CUSTOM_SIZE),
                custom_pos_x: repr.custom_pos_x.clamped(DEFAULT_CUSTOM_POS, 0.0, 100.0),
                custom_pos_y: repr.custom_pos_y.clamped(DEFAULT_CUSTOM_POS, 0.0, 100.0),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fill(json: &str) -> FillSpec {
        let repr: FillRepr = serde_json::from_str(json).unwrap();
        repr.into()
    }

    #[test]
    fn missing_type_is_default_solid() {
        assert_eq!(fill("{}"), FillSpec::default());
    }

    #[test]
    fn invalid_hex_falls_back() {
        let FillSpec::Solid(solid) = fill(r##"{"type": "solid", "name": "Navy", "hex": "navy-ish"}"##)
        else {
            panic!("expected solid fill");
        };
        assert_eq!(solid.name, "Navy");
        assert_eq!(solid.hex, DEFAULT_SOLID_HEX);
    }

    #[test]
    fn custom_percentages_are_clamped() {
        let FillSpec::Pattern(pattern) = fill(
            r#"{"type": "pattern", "repeat_mode": "custom", "custom_size": 5,
                "custom_pos_x": 140, "custom_pos_y": "-3"}"#,
        ) else {
            panic!("expected pattern fill");
        };
        assert_eq!(pattern.repeat_mode, RepeatMode::Custom);
        assert_eq!(pattern.custom_size, 10.0);
        assert_eq!(pattern.custom_pos_x, 100.0);
        assert_eq!(pattern.custom_pos_y, 0.0);
        assert_eq!(pattern.name, DEFAULT_PATTERN_NAME);
    }

    #[test]
    fn zero_position_is_kept() {
        let FillSpec::Pattern(pattern) =
            fill(r#"{"type": "pattern", "repeat_mode": "custom", "custom_pos_x": 0}"#)
        else {
            panic!("expected pattern fill");
        };
        assert_eq!(pattern.custom_pos_x, 0.0);
    }

    #[test]
    fn unknown_repeat_mode_is_tile() {
        let FillSpec::Pattern(pattern) = fill(r#"{"type": "pattern", "repeat_mode": "zigzag"}"#)
        else {
            panic!("expected pattern fill");
        };
        assert_eq!(pattern.repeat_mode, RepeatMode::Tile);
    }
}
