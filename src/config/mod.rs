//! Design configuration: the immutable input of one render pass.
//!
//! All dimensions are centimetres. The upper and lower section heights are
//! derived from the total height and can only change together with it.
//! Deserialization is lenient: malformed values inside a well-formed document
//! fall back to the defaults of their fields.

mod fill;
mod lenient;
mod logo;
mod options;
mod pocket;
mod strap;
mod summary;

pub use fill::{
    DEFAULT_CUSTOM_POS, DEFAULT_CUSTOM_SIZE, DEFAULT_PATTERN_NAME, DEFAULT_SOLID_HEX,
    DEFAULT_SOLID_NAME, FillSpec, MAX_CUSTOM_SIZE, MIN_CUSTOM_SIZE, PatternFill, RepeatMode,
    SolidFill,
};
pub use logo::{DEFAULT_LOGO_NAME, LogoAdvisory, LogoConfig};
pub use options::{DimensionSet, RenderOptions};
pub use pocket::{
    DEFAULT_POCKET_COLOR, DoublePockets, MAX_POCKET_COUNT, MIN_POCKET_COUNT, MultiplePockets,
    PocketConfig, PocketMode, PocketSize, SinglePocket,
};
pub use strap::{DEFAULT_STRAP_COLOR_NAME, DEFAULT_STRAP_HEX, StrapConfig, StrapStyle};
pub use summary::design_summary;

use serde::{Deserialize, Serialize};

use crate::asset::{Asset, AssetRef, MimeCategory, Upload};
use crate::errors::{ConfigError, SourceContext, UploadError};
use crate::types::Cm;
use lenient::{Num, Or};

pub const DEFAULT_TOP_WIDTH: f64 = 45.0;
pub const DEFAULT_BOTTOM_WIDTH: f64 = 60.0;
pub const DEFAULT_TOTAL_HEIGHT: f64 = 70.0;

/// Share of the total height taken by the upper (bib) section
pub const UPPER_SECTION_RATIO: f64 = 0.33;

/// Split a total height into (upper, lower) section heights, one decimal each
pub fn derive_heights(total_height: f64) -> (f64, f64) {
    let upper = Cm(total_height * UPPER_SECTION_RATIO).round1();
    let lower = (Cm(total_height) - upper).round1();
    (upper.raw(), lower.raw())
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "DesignConfigRepr")]
pub struct DesignConfig {
    pub top_width: f64,
    pub bottom_width: f64,
    total_height: f64,
    upper_height: f64,
    lower_height: f64,
    pub fill: FillSpec,
    pub strap: StrapConfig,
    pub pocket: PocketConfig,
    pub pocket_color: String,
    pub logo: LogoConfig,
}

impl Default for DesignConfig {
    fn default() -> Self {
        Self::new(DEFAULT_TOP_WIDTH, DEFAULT_BOTTOM_WIDTH, DEFAULT_TOTAL_HEIGHT)
    }
}

impl DesignConfig {
    /// Default design with the given outline dimensions
    pub fn new(top_width: f64, bottom_width: f64, total_height: f64) -> Self {
        let (upper_height, lower_height) = derive_heights(total_height);
        Self {
            top_width,
            bottom_width,
            total_height,
            upper_height,
            lower_height,
            fill: FillSpec::default(),
            strap: StrapConfig::default(),
            pocket: PocketConfig::None,
            pocket_color: DEFAULT_POCKET_COLOR.to_string(),
            logo: LogoConfig::default(),
        }
    }

    pub fn total_height(&self) -> f64 {
        self.total_height
    }

    pub fn upper_height(&self) -> f64 {
        self.upper_height
    }

    pub fn lower_height(&self) -> f64 {
        self.lower_height
    }

    /// Change the total height; both section heights are recomputed
    pub fn set_total_height(&mut self, total_height: f64) {
        let (upper, lower) = derive_heights(total_height);
        self.total_height = total_height;
        self.upper_height = upper;
        self.lower_height = lower;
    }

    /// Parse a JSON configuration document
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        Self::from_json_named("<input>", text)
    }

    /// Parse a JSON configuration document, naming it in diagnostics
    pub fn from_json_named(name: &str, text: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(text).map_err(|e| ConfigError::json(&SourceContext::new(name, text), &e))
    }

    /// Load a JSON configuration file
    pub async fn load(path: impl AsRef<std::path::Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| ConfigError::Io {
                path: path.display().to_string(),
                source,
            })?;
        Self::from_json_named(&path.display().to_string(), &text)
    }

    /// Attach pattern artwork: the fill becomes a pattern (keeping the
    /// previous pattern settings if it already was one) named after the file.
    ///
    /// Unsupported types are rejected and the configuration stays unchanged.
    pub fn attach_pattern(&mut self, upload: &Upload) -> Result<(), UploadError> {
        MimeCategory::classify(upload)?;
        let mut pattern = match &self.fill {
            FillSpec::Pattern(pattern) => pattern.clone(),
            FillSpec::Solid(_) => PatternFill::default(),
        };
        pattern.name = upload.stem().to_string();
        pattern.asset = Some(AssetRef::from(upload));
        self.fill = FillSpec::Pattern(pattern);
        Ok(())
    }

    /// Attach logo artwork: the logo is enabled and named after the file.
    ///
    /// Unsupported types are rejected and the configuration stays unchanged.
    pub fn attach_logo(&mut self, upload: &Upload) -> Result<(), UploadError> {
        MimeCategory::classify(upload)?;
        self.logo.enabled = true;
        self.logo.name = upload.stem().to_string();
        Ok(())
    }

    /// Take the logo box's aspect ratio from decoded logo artwork
    pub fn apply_logo_asset(&mut self, asset: &Asset) {
        self.logo.aspect_ratio = asset.aspect_ratio();
    }

    /// Switch the pocket layout, reseeding defaults when the mode changes
    pub fn set_pocket_mode(&mut self, mode: PocketMode) {
        self.pocket.switch_mode(mode);
    }

    /// Advice (never enforced) for a logo box that leaves the body outline
    pub fn logo_advisories(&self) -> Vec<LogoAdvisory> {
        let mut out = Vec::new();
        if !self.logo.enabled {
            return out;
        }
        let right = self.logo.offset_x + self.logo.width;
        if right > self.bottom_width {
            out.push(LogoAdvisory::ExceedsWidth {
                overflow: Cm(right - self.bottom_width).round1().raw(),
            });
        }
        let bottom = self.logo.offset_y + self.logo.height();
        if bottom > self.total_height {
            out.push(LogoAdvisory::ExceedsHeight {
                overflow: Cm(bottom - self.total_height).round1().raw(),
            });
        }
        out
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct DesignConfigRepr {
    top_width: Num,
    bottom_width: Num,
    total_height: Num,
    fill: Or<fill::FillRepr>,
    strap: Or<strap::StrapRepr>,
    pocket: Or<pocket::PocketRepr>,
    pocket_color: Or<String>,
    logo: Or<logo::LogoRepr>,
}

impl From<DesignConfigRepr> for DesignConfig {
    fn from(repr: DesignConfigRepr) -> Self {
        let mut config = DesignConfig::new(
            repr.top_width.or(DEFAULT_TOP_WIDTH),
            repr.bottom_width.or(DEFAULT_BOTTOM_WIDTH),
            repr.total_height.or(DEFAULT_TOTAL_HEIGHT),
        );
        config.fill = repr.fill.0.map(FillSpec::from).unwrap_or_default();
        config.strap = repr.strap.0.map(StrapConfig::from).unwrap_or_default();
        config.pocket = repr.pocket.0.map(PocketConfig::from).unwrap_or_default();
        config.logo = repr.logo.0.map(LogoConfig::from).unwrap_or_default();
        if let Some(color) = repr
            .pocket_color
            .0
            .filter(|hex| apron_svg::Color::parse(hex).is_some())
        {
            config.pocket_color = color;
        }
        config
    }
}
