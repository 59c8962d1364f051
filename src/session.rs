//! Render passes: decode uploads, resolve the fill, lay out and assemble.
//!
//! Renders may overlap. Each pass takes the newest ticket of both upload
//! slots when it starts; a pass whose tickets were superseded while it was
//! decoding discards its result.

use crate::asset::{
    AcceptedUpload, Asset, AssetNormalizer, AssetReader, DecodeTracker, NoPageRenderer,
    PageRenderer, Slot,
};
use crate::config::{DesignConfig, RenderOptions};
use crate::errors::RenderError;
use crate::fill;
use crate::geometry::{self, Layout};
use crate::render;

/// Uploaded files accompanying a configuration
#[derive(Debug, Clone, Default)]
pub struct Uploads {
    pub pattern: Option<AcceptedUpload>,
    pub logo: Option<AcceptedUpload>,
}

/// Result of a render pass that was still current when it finished
#[derive(Debug, Clone)]
pub struct RenderedDesign {
    /// Configuration the drawing was computed from, with the logo aspect
    /// ratio taken from the decoded logo
    pub config: DesignConfig,
    pub layout: Layout,
    /// Serialized drawing
    pub svg: String,
    pub logo: Option<Asset>,
}

#[derive(Debug, Clone)]
pub enum RenderOutcome {
    Current(RenderedDesign),
    /// A newer render started while this one was decoding
    Superseded,
}

impl RenderOutcome {
    pub fn current(self) -> Option<RenderedDesign> {
        match self {
            RenderOutcome::Current(design) => Some(design),
            RenderOutcome::Superseded => None,
        }
    }
}

pub struct RenderSession<R, P = NoPageRenderer> {
    normalizer: AssetNormalizer<R, P>,
    tracker: DecodeTracker,
    options: RenderOptions,
}

impl<R: AssetReader> RenderSession<R, NoPageRenderer> {
    pub fn new(reader: R) -> Self {
        Self::with_normalizer(AssetNormalizer::new(reader), RenderOptions::default())
    }
}

impl<R: AssetReader, P: PageRenderer> RenderSession<R, P> {
    pub fn with_normalizer(normalizer: AssetNormalizer<R, P>, options: RenderOptions) -> Self {
        Self {
            normalizer,
            tracker: DecodeTracker::new(),
            options,
        }
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    pub fn set_options(&mut self, options: RenderOptions) {
        self.options = options;
    }

    pub fn normalizer(&self) -> &AssetNormalizer<R, P> {
        &self.normalizer
    }

    /// Run one render pass.
    ///
    /// Asset decode failures are logged and drawn as placeholders; only
    /// serializing the finished drawing can fail.
    pub async fn render(
        &self,
        config: &DesignConfig,
        uploads: &Uploads,
    ) -> Result<RenderOutcome, RenderError> {
        let tickets = [self.tracker.begin(Slot::Pattern), self.tracker.begin(Slot::Logo)];

        let area = geometry::fill_area(config, &self.options);
        let fill = fill::resolve(&self.normalizer, &config.fill, uploads.pattern.as_ref(), area).await;
        let logo = match (&uploads.logo, config.logo.enabled) {
            (Some(upload), true) => self.normalizer.normalize_or_warn(upload).await,
            _ => None,
        };

        if let Some(stale) = tickets.iter().find(|t| !self.tracker.is_current(**t)) {
            crate::log::debug!(slot = ?stale.slot, generation = stale.generation, "render superseded, discarding result");
            return Ok(RenderOutcome::Superseded);
        }

        let mut config = config.clone();
        if let Some(asset) = &logo {
            config.apply_logo_asset(asset);
        }
        let layout = geometry::layout(&config, &fill, logo.as_ref(), &self.options);
        let svg = render::assemble(&layout)?;
        crate::log::info!(
            width = layout.width,
            height = layout.height,
            primitives = layout.primitives.len(),
            "rendered design"
        );
        Ok(RenderOutcome::Current(RenderedDesign {
            config,
            layout,
            svg,
            logo,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::asset::{MemoryAssetReader, Upload};
    use crate::errors::AssetError;
    use crate::fill::FillRef;

    const ART: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 10 10"><circle cx="5" cy="5" r="4"/></svg>"#;

    /// Yields to the scheduler before every read
    struct YieldingReader(MemoryAssetReader);

    impl AssetReader for YieldingReader {
        async fn read(&self, upload: &Upload) -> Result<Vec<u8>, AssetError> {
            tokio::task::yield_now().await;
            self.0.read(upload).await
        }
    }

    fn pattern_config(upload: &Upload) -> DesignConfig {
        let mut config = DesignConfig::default();
        config.attach_pattern(upload).unwrap();
        config
    }

    #[tokio::test]
    async fn pattern_upload_becomes_a_tile() {
        let reader = MemoryAssetReader::new().with_file("dots.svg", ART);
        let session = RenderSession::new(reader);
        let upload = session.normalizer().reader().upload("dots.svg").unwrap();
        let uploads = Uploads {
            pattern: Some(upload.clone().accept().unwrap()),
            logo: None,
        };
        let design = session
            .render(&pattern_config(&upload), &uploads)
            .await
            .unwrap()
            .current()
            .unwrap();
        assert!(matches!(design.layout.fill, FillRef::Pattern(_)));
        assert!(design.svg.contains("url(#apron-pattern)"));
    }

    #[tokio::test]
    async fn disabled_logo_is_not_decoded() {
        let reader = MemoryAssetReader::new().with_file("mark.svg", ART);
        let session = RenderSession::new(reader);
        let upload = session.normalizer().reader().upload("mark.svg").unwrap();
        let uploads = Uploads {
            pattern: None,
            logo: Some(upload.accept().unwrap()),
        };
        let outcome = session.render(&DesignConfig::default(), &uploads).await.unwrap();
        assert!(outcome.current().unwrap().logo.is_none());
        assert_eq!(session.normalizer().reader().reads(), 0);
    }

    #[tokio::test]
    async fn decoded_logo_sets_the_aspect_ratio() {
        let mut png = std::io::Cursor::new(Vec::new());
        image::RgbaImage::from_pixel(40, 10, image::Rgba([20, 40, 60, 255]))
            .write_to(&mut png, image::ImageFormat::Png)
            .unwrap();
        let png = png.into_inner();
        let reader = MemoryAssetReader::new().with_file("brand.png", png);
        let session = RenderSession::new(reader);
        let upload = session.normalizer().reader().upload("brand.png").unwrap();
        let mut config = DesignConfig::default();
        config.attach_logo(&upload).unwrap();
        config.logo.offset_y = 65.0;
        let uploads = Uploads {
            pattern: None,
            logo: Some(upload.accept().unwrap()),
        };

        let design = session.render(&config, &uploads).await.unwrap().current().unwrap();
        assert_eq!(design.config.logo.aspect_ratio, 4.0);
        assert!(design.config.logo_advisories().is_empty());
        assert_eq!(config.logo.aspect_ratio, 1.0);
    }

    #[tokio::test]
    async fn overlapping_render_supersedes_the_older_one() {
        let reader = YieldingReader(MemoryAssetReader::new().with_file("dots.svg", ART));
        let session = RenderSession::new(reader);
        let upload = session.normalizer().reader().0.upload("dots.svg").unwrap();
        let config = pattern_config(&upload);
        let uploads = Uploads {
            pattern: Some(upload.accept().unwrap()),
            logo: None,
        };

        let (older, newer) = tokio::join!(
            session.render(&config, &uploads),
            session.render(&config, &uploads)
        );
        assert!(matches!(older.unwrap(), RenderOutcome::Superseded));
        assert!(matches!(newer.unwrap(), RenderOutcome::Current(_)));
    }
}
