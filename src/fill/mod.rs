//! Fill Resolver: turns a fill specification plus optional artwork into a
//! fill reference the geometry engine can paint the body with.

mod tile;

pub use tile::{
    Artwork, ContentBox, PATTERN_ID, PatternTile, TILE_CONTENT, TILE_SIZE, build_tile, fit_transform,
};

use crate::asset::{AcceptedUpload, Asset, AssetNormalizer, AssetReader, PageRenderer};
use crate::config::{FillSpec, RepeatMode};

/// Body paint under a pattern that has no usable artwork
pub const PATTERN_BASE_COLOR: &str = "#f5f5f5";

/// Fillable region of the body in drawing pixels (its bounding box)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FillArea {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl FillArea {
    pub fn center(&self) -> (f64, f64) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}

/// How the body is painted
#[derive(Debug, Clone, PartialEq)]
pub enum FillRef {
    /// Opaque color
    Solid { color: String },
    /// Repeating tile definition
    Pattern(PatternTile),
    /// Pattern without artwork: flat base color plus a centered note
    Placeholder { name: String, mode: RepeatMode },
}

impl FillRef {
    /// Value for the body's `fill` attribute
    pub fn paint(&self) -> String {
        match self {
            FillRef::Solid { color } => color.clone(),
            FillRef::Pattern(tile) => format!("url(#{})", tile.id),
            FillRef::Placeholder { .. } => PATTERN_BASE_COLOR.to_string(),
        }
    }

    /// Note drawn in the fill area when the pattern has no artwork
    pub fn placeholder_note(&self) -> Option<String> {
        match self {
            FillRef::Placeholder { name, mode } => Some(format!("pattern: {name}, mode: {mode}")),
            _ => None,
        }
    }
}

/// Resolve a fill from already-normalized artwork
pub fn resolve_fill(spec: &FillSpec, asset: Option<&Asset>, area: FillArea) -> FillRef {
    match spec {
        FillSpec::Solid(solid) => FillRef::Solid {
            color: solid.hex.clone(),
        },
        FillSpec::Pattern(pattern) => match asset {
            Some(asset) => FillRef::Pattern(build_tile(pattern, asset, area)),
            None => FillRef::Placeholder {
                name: pattern.name.clone(),
                mode: pattern.repeat_mode,
            },
        },
    }
}

/// Decode the pattern upload (if the fill needs one) and resolve the fill.
///
/// Decode failures are logged and resolve to the textual placeholder.
pub async fn resolve<R: AssetReader, P: PageRenderer>(
    normalizer: &AssetNormalizer<R, P>,
    spec: &FillSpec,
    upload: Option<&AcceptedUpload>,
    area: FillArea,
) -> FillRef {
    let asset = match (spec, upload) {
        (FillSpec::Pattern(_), Some(upload)) => normalizer.normalize_or_warn(upload).await,
        _ => None,
    };
    resolve_fill(spec, asset.as_ref(), area)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::asset::{MemoryAssetReader, Upload};
    use crate::config::{PatternFill, SolidFill};

    const AREA: FillArea = FillArea {
        x: 120.0,
        y: 160.0,
        width: 240.0,
        height: 280.0,
    };

    #[test]
    fn solid_is_its_hex_color() {
        let fill = resolve_fill(&FillSpec::Solid(SolidFill::default()), None, AREA);
        assert_eq!(fill.paint(), "#FF6B6B");
        assert_eq!(fill.placeholder_note(), None);
    }

    #[test]
    fn pattern_without_asset_is_placeholder() {
        let spec = FillSpec::Pattern(PatternFill {
            name: "Daisies".into(),
            repeat_mode: RepeatMode::Stretch,
            ..Default::default()
        });
        let fill = resolve_fill(&spec, None, AREA);
        assert_eq!(fill.paint(), PATTERN_BASE_COLOR);
        assert_eq!(
            fill.placeholder_note().as_deref(),
            Some("pattern: Daisies, mode: stretch")
        );
    }

    #[tokio::test]
    async fn corrupt_vector_resolves_to_placeholder() {
        let reader = MemoryAssetReader::new().with_file("bad.svg", "<svg><g></svg>");
        let normalizer = AssetNormalizer::new(reader);
        let upload = Upload::from_file_name("bad.svg", 14).accept().unwrap();
        let spec = FillSpec::Pattern(PatternFill::default());
        let fill = resolve(&normalizer, &spec, Some(&upload), AREA).await;
        assert!(matches!(fill, FillRef::Placeholder { .. }));
        assert_eq!(normalizer.reader().reads(), 1);
    }

    #[tokio::test]
    async fn solid_fill_never_reads_the_upload() {
        let reader = MemoryAssetReader::new().with_file("art.svg", "<svg/>");
        let normalizer = AssetNormalizer::new(reader);
        let upload = Upload::from_file_name("art.svg", 6).accept().unwrap();
        let spec = FillSpec::Solid(SolidFill::default());
        let fill = resolve(&normalizer, &spec, Some(&upload), AREA).await;
        assert_eq!(fill.paint(), "#FF6B6B");
        assert_eq!(normalizer.reader().reads(), 0);
    }

    #[tokio::test]
    async fn vector_asset_resolves_to_pattern() {
        let reader = MemoryAssetReader::new()
            .with_file("dots.svg", r#"<svg viewBox="0 0 20 20"><circle cx="10" cy="10" r="4"/></svg>"#);
        let normalizer = AssetNormalizer::new(reader);
        let upload = normalizer.reader().upload("dots.svg").unwrap().accept().unwrap();
        let spec = FillSpec::Pattern(PatternFill::default());
        let fill = resolve(&normalizer, &spec, Some(&upload), AREA).await;
        assert_eq!(fill.paint(), format!("url(#{PATTERN_ID})"));
    }
}
