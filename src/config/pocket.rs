//! Pocket layouts. Exactly one sub-record exists, matching the mode.

use serde::{Deserialize, Serialize};

use super::lenient::{Num, Or};

pub const DEFAULT_POCKET_COLOR: &str = "#D3D3D3";
pub const MIN_POCKET_COUNT: u8 = 2;
pub const MAX_POCKET_COUNT: u8 = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PocketMode {
    #[default]
    None,
    Single,
    Double,
    Multiple,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SinglePocket {
    pub width: f64,
    pub height: f64,
    /// Top edge, percent of the lower section height below the waist line
    pub position_y: f64,
}

impl Default for SinglePocket {
    fn default() -> Self {
        Self {
            width: 15.0,
            height: 12.0,
            position_y: 60.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PocketSize {
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DoublePockets {
    pub left: PocketSize,
    pub right: PocketSize,
    pub spacing: f64,
    pub position_y: f64,
}

impl Default for DoublePockets {
    fn default() -> Self {
        let size = PocketSize {
            width: 12.0,
            height: 10.0,
        };
        Self {
            left: size,
            right: size,
            spacing: 5.0,
            position_y: 60.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MultiplePockets {
    pub total_width: f64,
    pub height: f64,
    pub count: u8,
    pub position_y: f64,
}

impl Default for MultiplePockets {
    fn default() -> Self {
        Self {
            total_width: 30.0,
            height: 8.0,
            count: 3,
            position_y: 60.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum PocketConfig {
    #[default]
    None,
    Single(SinglePocket),
    Double(DoublePockets),
    Multiple(MultiplePockets),
}

impl PocketConfig {
    pub fn mode(&self) -> PocketMode {
        match self {
            PocketConfig::None => PocketMode::None,
            PocketConfig::Single(_) => PocketMode::Single,
            PocketConfig::Double(_) => PocketMode::Double,
            PocketConfig::Multiple(_) => PocketMode::Multiple,
        }
    }

    /// Fresh layout for `mode` with that mode's defaults
    pub fn defaults_for(mode: PocketMode) -> Self {
        match mode {
            PocketMode::None => PocketConfig::None,
            PocketMode::Single => PocketConfig::Single(SinglePocket::default()),
            PocketMode::Double => PocketConfig::Double(DoublePockets::default()),
            PocketMode::Multiple => PocketConfig::Multiple(MultiplePockets::default()),
        }
    }

    /// Switch to `mode`, discarding the previous sub-record.
    ///
    /// Selecting the current mode again keeps its values.
    pub fn switch_mode(&mut self, mode: PocketMode) {
        if self.mode() != mode {
            *self = Self::defaults_for(mode);
        }
    }

    /// Number of pocket rectangles this layout draws
    pub fn pocket_count(&self) -> usize {
        match self {
            PocketConfig::None => 0,
            PocketConfig::Single(_) => 1,
            PocketConfig::Double(_) => 2,
            PocketConfig::Multiple(m) => m.count as usize,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct SizeRepr {
    width: Num,
    height: Num,
}

impl SizeRepr {
    fn into_size(self, default: PocketSize) -> PocketSize {
        PocketSize {
            width: self.width.or(default.width),
            height: self.height.or(default.height),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct PocketRepr {
    mode: Or<PocketMode>,
    width: Num,
    height: Num,
    position_y: Num,
    left: Or<SizeRepr>,
    right: Or<SizeRepr>,
    spacing: Num,
    total_width: Num,
    count: Num,
}

impl From<PocketRepr> for PocketConfig {
    fn from(repr: PocketRepr) -> Self {
        match repr.mode.or(PocketMode::None) {
            PocketMode::None => PocketConfig::None,
            PocketMode::Single => {
                let d = SinglePocket::default();
                PocketConfig::Single(SinglePocket {
                    width: repr.width.or(d.width),
                    height: repr.height.or(d.height),
                    position_y: repr.position_y.or(d.position_y),
                })
            }
            PocketMode::Double => {
                let d = DoublePockets::default();
                PocketConfig::Double(DoublePockets {
                    left: repr.left.or(SizeRepr::default()).into_size(d.left),
                    right: repr.right.or(SizeRepr::default()).into_size(d.right),
                    spacing: repr.spacing.or(d.spacing),
                    position_y: repr.position_y.or(d.position_y),
                })
            }
            PocketMode::Multiple => {
                let d = MultiplePockets::default();
                let count = repr
                    .count
                    .clamped(d.count as f64, MIN_POCKET_COUNT as f64, MAX_POCKET_COUNT as f64)
                    .round() as u8;
                PocketConfig::Multiple(MultiplePockets {
                    total_width: repr.total_width.or(d.total_width),
                    height: repr.height.or(d.height),
                    count,
                    position_y: repr.position_y.or(d.position_y),
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pocket(json: &str) -> PocketConfig {
        let repr: PocketRepr = serde_json::from_str(json).unwrap();
        repr.into()
    }

    #[test]
    fn switching_modes_reseeds_defaults() {
        let mut config = PocketConfig::Single(SinglePocket {
            width: 20.0,
            height: 9.0,
            position_y: 10.0,
        });
        config.switch_mode(PocketMode::Double);
        assert_eq!(config, PocketConfig::Double(DoublePockets::default()));
        config.switch_mode(PocketMode::Single);
        assert_eq!(
            config,
            PocketConfig::Single(SinglePocket {
                width: 15.0,
                height: 12.0,
                position_y: 60.0
            })
        );
    }

    #[test]
    fn same_mode_keeps_values() {
        let custom = PocketConfig::Multiple(MultiplePockets {
            count: 5,
            ..Default::default()
        });
        let mut config = custom;
        config.switch_mode(PocketMode::Multiple);
        assert_eq!(config, custom);
    }

    #[test]
    fn count_is_clamped() {
        assert_eq!(pocket(r#"{"mode": "multiple", "count": 9}"#).pocket_count(), 6);
        assert_eq!(pocket(r#"{"mode": "multiple", "count": 1}"#).pocket_count(), 2);
        assert_eq!(pocket(r#"{"mode": "multiple", "count": "4"}"#).pocket_count(), 4);
        assert_eq!(pocket(r#"{"mode": "multiple"}"#).pocket_count(), 3);
    }

    #[test]
    fn double_sizes_fill_in_per_field() {
        let PocketConfig::Double(d) =
            pocket(r#"{"mode": "double", "left": {"width": 14}, "right": 7, "spacing": -2}"#)
        else {
            panic!("expected double pockets");
        };
        assert_eq!(d.left, PocketSize { width: 14.0, height: 10.0 });
        assert_eq!(d.right, PocketSize { width: 12.0, height: 10.0 });
        assert_eq!(d.spacing, -2.0);
    }

    #[test]
    fn serializes_with_mode_tag() {
        let json = serde_json::to_value(PocketConfig::defaults_for(PocketMode::Single)).unwrap();
        assert_eq!(json["mode"], "single");
        assert_eq!(json["width"], 15.0);
        assert_eq!(pocket(&json.to_string()), PocketConfig::defaults_for(PocketMode::Single));
    }
}
