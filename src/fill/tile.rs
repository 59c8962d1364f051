//! Repeating-tile construction for the four pattern repeat modes.

use apron_svg::Node;

use super::FillArea;
use crate::asset::{Asset, AssetContent, ViewBox};
use crate::config::{
    DEFAULT_CUSTOM_POS, DEFAULT_CUSTOM_SIZE, MAX_CUSTOM_SIZE, MIN_CUSTOM_SIZE, PatternFill,
    RepeatMode,
};

/// Id of the body pattern definition
pub const PATTERN_ID: &str = "apron-pattern";

/// Side of the fixed tile used by [`RepeatMode::Tile`]
pub const TILE_SIZE: f64 = 100.0;

/// Box the artwork is fitted into inside a fixed tile
pub const TILE_CONTENT: ContentBox = ContentBox {
    x: 20.0,
    y: 20.0,
    width: 30.0,
    height: 30.0,
};

const TILE_OPACITY: f64 = 0.7;
const AREA_OPACITY: f64 = 0.8;
/// Share of the smaller fill-area side the centered artwork takes
const CENTER_SHARE: f64 = 0.3;

/// Placement of the artwork, relative to the tile origin
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContentBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Drawable artwork inside the tile
#[derive(Debug, Clone, PartialEq)]
pub enum Artwork {
    /// Cloned child nodes of the uploaded vector root
    Vector {
        view_box: ViewBox,
        /// `xmlns:*` declarations the children rely on
        namespaces: Vec<(String, String)>,
        children: Vec<Node>,
    },
    /// Bitmap referenced by data URL
    Image { href: String },
}

impl From<&Asset> for Artwork {
    fn from(asset: &Asset) -> Self {
        match &asset.content {
            AssetContent::Vector {
                view_box,
                namespaces,
                children,
            } => Artwork::Vector {
                view_box: *view_box,
                namespaces: namespaces.clone(),
                children: children.clone(),
            },
            AssetContent::Raster { .. } => Artwork::Image {
                href: asset.data_url().unwrap_or_default(),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PatternTile {
    pub id: &'static str,
    pub mode: RepeatMode,
    /// Tile rectangle in drawing coordinates
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub content: ContentBox,
    pub opacity: f64,
    /// Opaque color behind the artwork; `None` leaves the tile transparent
    pub backdrop: Option<&'static str>,
    /// `preserveAspectRatio` for image artwork
    pub preserve_aspect_ratio: &'static str,
    pub artwork: Artwork,
}

impl PatternTile {
    /// `transform` mapping vector artwork coordinates into the content box
    pub fn vector_transform(&self, view_box: &ViewBox) -> String {
        fit_transform(view_box, &self.content)
    }
}

/// `transform` that maps `view_box` onto `target`, stretching if needed
pub fn fit_transform(view_box: &ViewBox, target: &ContentBox) -> String {
    let sx = target.width / view_box.width;
    let sy = target.height / view_box.height;
    let tx = target.x - view_box.min_x * sx;
    let ty = target.y - view_box.min_y * sy;
    format!(
        "translate({},{}) scale({},{})",
        apron_svg::fmt_num(tx),
        apron_svg::fmt_num(ty),
        apron_svg::fmt_num(sx),
        apron_svg::fmt_num(sy)
    )
}

/// Largest box with the given aspect ratio inside a `side`×`side` square
fn fit_square(side: f64, aspect: f64) -> (f64, f64) {
    if aspect >= 1.0 {
        (side, side / aspect)
    } else {
        (side * aspect, side)
    }
}

/// Clamp a percentage into `min..=max`; non-finite values take `default`
fn percent_in(value: f64, default: f64, min: f64, max: f64) -> f64 {
    if value.is_finite() {
        value.clamp(min, max)
    } else {
        default
    }
}

/// Position within `free` space by percentage, never past either edge
fn place(free: f64, percent: f64) -> f64 {
    let percent = percent_in(percent, DEFAULT_CUSTOM_POS, 0.0, 100.0);
    (free * percent / 100.0).clamp(0.0, free.max(0.0))
}

/// Build the tile for a pattern fill over `area`
pub fn build_tile(pattern: &PatternFill, asset: &Asset, area: FillArea) -> PatternTile {
    let aspect = asset.aspect_ratio();
    let smaller = area.width.min(area.height).max(0.0);

    let (tile_w, tile_h, content, opacity) = match pattern.repeat_mode {
        RepeatMode::Tile => {
            let (w, h) = fit_square(TILE_CONTENT.width, aspect);
            let content = ContentBox {
                x: TILE_CONTENT.x + (TILE_CONTENT.width - w) / 2.0,
                y: TILE_CONTENT.y + (TILE_CONTENT.height - h) / 2.0,
                width: w,
                height: h,
            };
            (TILE_SIZE, TILE_SIZE, content, TILE_OPACITY)
        }
        RepeatMode::Stretch => {
            let content = ContentBox {
                x: 0.0,
                y: 0.0,
                width: area.width,
                height: area.height,
            };
            (area.width, area.height, content, AREA_OPACITY)
        }
        RepeatMode::Center => {
            let (w, h) = fit_square(smaller * CENTER_SHARE, aspect);
            let content = ContentBox {
                x: (area.width - w) / 2.0,
                y: (area.height - h) / 2.0,
                width: w,
                height: h,
            };
            (area.width, area.height, content, AREA_OPACITY)
        }
        RepeatMode::Custom => {
            let size = percent_in(
                pattern.custom_size,
                DEFAULT_CUSTOM_SIZE,
                MIN_CUSTOM_SIZE,
                MAX_CUSTOM_SIZE,
            );
            let (w, h) = fit_square(smaller * size / 100.0, aspect);
            let content = ContentBox {
                x: place(area.width - w, pattern.custom_pos_x),
                y: place(area.height - h, pattern.custom_pos_y),
                width: w,
                height: h,
            };
            (area.width, area.height, content, AREA_OPACITY)
        }
    };

    PatternTile {
        id: PATTERN_ID,
        mode: pattern.repeat_mode,
        x: area.x,
        y: area.y,
        width: tile_w,
        height: tile_h,
        content,
        opacity,
        backdrop: match pattern.repeat_mode {
            RepeatMode::Tile => Some(super::PATTERN_BASE_COLOR),
            _ => None,
        },
        preserve_aspect_ratio: match pattern.repeat_mode {
            RepeatMode::Stretch => "none",
            _ => "xMidYMid meet",
        },
        artwork: Artwork::from(asset),
    }
}
