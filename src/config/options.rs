use crate::types::Scaler;

/// Which dimension annotations a drawing exposes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DimensionSet {
    pub top_width: bool,
    pub bottom_width: bool,
    pub total_height: bool,
    pub upper_height: bool,
    pub lower_height: bool,
}

impl DimensionSet {
    pub const ALL: DimensionSet = DimensionSet {
        top_width: true,
        bottom_width: true,
        total_height: true,
        upper_height: true,
        lower_height: true,
    };

    pub const NONE: DimensionSet = DimensionSet {
        top_width: false,
        bottom_width: false,
        total_height: false,
        upper_height: false,
        lower_height: false,
    };

    pub fn count(&self) -> usize {
        [
            self.top_width,
            self.bottom_width,
            self.total_height,
            self.upper_height,
            self.lower_height,
        ]
        .iter()
        .filter(|on| **on)
        .count()
    }
}

impl Default for DimensionSet {
    fn default() -> Self {
        Self::ALL
    }
}

/// Rendering options that are not part of the design itself
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderOptions {
    /// Drawing pixels per centimetre
    pub px_per_cm: f64,
    pub dimensions: DimensionSet,
    /// Upscale factor for raster exports
    pub raster_scale: f64,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            px_per_cm: 4.0,
            dimensions: DimensionSet::ALL,
            raster_scale: crate::export::DEFAULT_RASTER_SCALE,
        }
    }
}

impl RenderOptions {
    /// Scaler for `px_per_cm`; unusable values fall back to the default scale
    pub fn scaler(&self) -> Scaler {
        Scaler::try_new(self.px_per_cm).unwrap_or_default()
    }
}
