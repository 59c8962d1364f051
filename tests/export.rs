use std::io::{Cursor, Read};

use apron::asset::MemoryAssetReader;
use apron::config::{FillSpec, RepeatMode};
use apron::export::{DEFAULT_RASTER_SCALE, export_bundle, export_raster};
use apron::{
    DesignConfig, ExportStamp, RenderSession, RenderedDesign, ResvgRasterizer, Upload, UploadError,
    Uploads,
};
use image::{DynamicImage, GenericImageView};
use zip::ZipArchive;

const DOTS: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 20 20"><circle cx="10" cy="10" r="6" fill="#2E86AB"/></svg>"##;

/// Inkscape-style artwork: prefixed attributes and editor elements
const INKSCAPE_ART: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" xmlns:inkscape="http://www.inkscape.org/namespaces/inkscape" xmlns:sodipodi="http://sodipodi.sourceforge.net/DTD/sodipodi-0.dtd" viewBox="0 0 10 10"><sodipodi:namedview id="base" inkscape:zoom="1"/><g inkscape:label="Layer 1" inkscape:groupmode="layer"><rect width="10" height="10" fill="#2E86AB"/></g></svg>"##;

/// Center of the body fill area in a 2x raster of the default design
const BODY_CENTER: (u32, u32) = (480, 668);

/// Center of the default logo box in a 2x raster of the default design
const LOGO_CENTER: (u32, u32) = (392, 516);

const WHITE: [u8; 4] = [255, 255, 255, 255];

fn png(width: u32, height: u32, rgba: [u8; 4]) -> Vec<u8> {
    let mut out = Cursor::new(Vec::new());
    image::RgbaImage::from_pixel(width, height, image::Rgba(rgba))
        .write_to(&mut out, image::ImageFormat::Png)
        .unwrap();
    out.into_inner()
}

fn stretch_pattern(config: &mut DesignConfig) {
    if let FillSpec::Pattern(pattern) = &mut config.fill {
        pattern.repeat_mode = RepeatMode::Stretch;
    }
}

async fn render_with(
    reader: MemoryAssetReader,
    pattern: Option<&str>,
    logo: Option<&str>,
) -> RenderedDesign {
    let mut config = DesignConfig::default();
    let mut uploads = Uploads::default();
    if let Some(name) = pattern {
        let upload = reader.upload(name).unwrap();
        config.attach_pattern(&upload).unwrap();
        stretch_pattern(&mut config);
        uploads.pattern = Some(upload.accept().unwrap());
    }
    if let Some(name) = logo {
        let upload = reader.upload(name).unwrap();
        config.attach_logo(&upload).unwrap();
        uploads.logo = Some(upload.accept().unwrap());
    }
    RenderSession::new(reader)
        .render(&config, &uploads)
        .await
        .unwrap()
        .current()
        .unwrap()
}

fn rasterize(design: &RenderedDesign) -> DynamicImage {
    let export = export_raster(&ResvgRasterizer::default(), &design.svg, DEFAULT_RASTER_SCALE)
        .expect("drawing should rasterize");
    image::load_from_memory(&export.bytes).unwrap()
}

fn pixel(image: &DynamicImage, (x, y): (u32, u32)) -> [u8; 4] {
    image.get_pixel(x, y).0
}

fn entries(bytes: Vec<u8>) -> ZipArchive<Cursor<Vec<u8>>> {
    ZipArchive::new(Cursor::new(bytes)).unwrap()
}

fn names(archive: &ZipArchive<Cursor<Vec<u8>>>) -> Vec<String> {
    let mut names: Vec<String> = archive.file_names().map(str::to_string).collect();
    names.sort();
    names
}

#[tokio::test]
async fn solid_bundle_has_three_entries() {
    let svg = apron::draw(&DesignConfig::default()).unwrap();
    let reader = MemoryAssetReader::new();
    let export = export_bundle(&svg, &DesignConfig::default(), &reader, ExportStamp(0))
        .await
        .unwrap();
    assert_eq!(export.file_name, "apron-design-package.zip");

    let mut archive = entries(export.bytes);
    assert_eq!(
        names(&archive),
        ["README.txt", "design-parameters.json", "design.svg"]
    );
    let mut drawing = String::new();
    archive
        .by_name("design.svg")
        .unwrap()
        .read_to_string(&mut drawing)
        .unwrap();
    assert_eq!(drawing, svg);
    assert_eq!(reader.reads(), 0);
}

#[tokio::test]
async fn pattern_bundle_carries_the_pattern_file() {
    let reader = MemoryAssetReader::new().with_file("dots.svg", DOTS);
    let upload = reader.upload("dots.svg").unwrap();
    let mut config = DesignConfig::default();
    config.attach_pattern(&upload).unwrap();

    let session = RenderSession::new(reader);
    let uploads = Uploads {
        pattern: Some(upload.accept().unwrap()),
        logo: None,
    };
    let design = session.render(&config, &uploads).await.unwrap().current().unwrap();
    let export = export_bundle(&design.svg, &design.config, session.normalizer().reader(), ExportStamp(0))
        .await
        .unwrap();

    let mut archive = entries(export.bytes);
    assert_eq!(
        names(&archive),
        [
            "README.txt",
            "design-parameters.json",
            "design.svg",
            "pattern-files/dots.svg"
        ]
    );
    let mut pattern = String::new();
    archive
        .by_name("pattern-files/dots.svg")
        .unwrap()
        .read_to_string(&mut pattern)
        .unwrap();
    assert_eq!(pattern, DOTS);

    let mut manifest = String::new();
    archive
        .by_name("design-parameters.json")
        .unwrap()
        .read_to_string(&mut manifest)
        .unwrap();
    let value: serde_json::Value = serde_json::from_str(&manifest).unwrap();
    assert_eq!(value["exported_at"], "1970-01-01T00:00:00Z");
    assert_eq!(DesignConfig::from_json(&manifest).unwrap(), config);
}

#[test]
fn raster_export_doubles_the_canvas() {
    let svg = apron::draw(&DesignConfig::default()).unwrap();
    let export = export_raster(&ResvgRasterizer::default(), &svg, DEFAULT_RASTER_SCALE).unwrap();
    assert_eq!(export.file_name, "apron-design.png");
    let image = image::load_from_memory(&export.bytes).unwrap();
    assert_eq!(image.dimensions(), (1040, 1268));
    // Canvas corner is the white background
    assert_eq!(image.get_pixel(0, 0).0, [255, 255, 255, 255]);
}

#[tokio::test]
async fn unsupported_upload_leaves_config_untouched() {
    let reader = MemoryAssetReader::new().with_file("notes.txt", "hello");
    let upload = reader.upload("notes.txt").unwrap();
    let mut config = DesignConfig::default();
    let before = config.clone();

    let err = config.attach_pattern(&upload).unwrap_err();
    assert!(matches!(err, UploadError::UnsupportedType { .. }));
    assert_eq!(config, before);
    assert!(upload.accept().is_err());
    assert_eq!(reader.reads(), 0);
}

#[tokio::test]
async fn corrupt_document_logo_becomes_a_placeholder() {
    let reader = MemoryAssetReader::new().with_file("brand.pdf", "definitely not a pdf");
    let upload = reader.upload("brand.pdf").unwrap();
    let mut config = DesignConfig::default();
    config.attach_logo(&upload).unwrap();

    let session = RenderSession::new(reader);
    let uploads = Uploads {
        pattern: None,
        logo: Some(upload.accept().unwrap()),
    };
    let design = session.render(&config, &uploads).await.unwrap().current().unwrap();
    let logo = design.logo.unwrap();
    assert!(logo.placeholder);
    assert_eq!((logo.width, logo.height), (600.0, 400.0));
    assert!(design.svg.contains("data:image/png;base64,"));
}

#[tokio::test]
async fn namespaced_vector_pattern_rasterizes() {
    let reader = MemoryAssetReader::new().with_file("waves.svg", INKSCAPE_ART);
    let design = render_with(reader, Some("waves.svg"), None).await;
    assert!(design.svg.contains("inkscape:label"));

    let image = rasterize(&design);
    let [r, g, b, _] = pixel(&image, BODY_CENTER);
    assert_ne!([r, g, b, 255], WHITE);
    assert!(b > r, "expected the blue artwork, got {:?}", [r, g, b]);
}

#[tokio::test]
async fn namespaced_pattern_bundles() {
    let reader = MemoryAssetReader::new().with_file("waves.svg", INKSCAPE_ART);
    let design = render_with(reader, Some("waves.svg"), None).await;
    let reader = MemoryAssetReader::new().with_file("waves.svg", INKSCAPE_ART);
    let export = export_bundle(&design.svg, &design.config, &reader, ExportStamp(0))
        .await
        .unwrap();
    assert!(names(&entries(export.bytes)).contains(&"pattern-files/waves.svg".to_string()));
}

#[tokio::test]
async fn raster_pattern_rasterizes() {
    let reader = MemoryAssetReader::new().with_file("swatch.png", png(8, 8, [200, 30, 30, 255]));
    let design = render_with(reader, Some("swatch.png"), None).await;

    let image = rasterize(&design);
    let [r, g, b, _] = pixel(&image, BODY_CENTER);
    assert_ne!([r, g, b, 255], WHITE);
    assert!(r > g && r > b, "expected the red artwork, got {:?}", [r, g, b]);
}

#[tokio::test]
async fn embedded_logo_rasterizes() {
    let reader = MemoryAssetReader::new().with_file("brand.png", png(16, 16, [20, 40, 200, 255]));
    let design = render_with(reader, None, Some("brand.png")).await;

    let image = rasterize(&design);
    let [r, g, b, _] = pixel(&image, LOGO_CENTER);
    assert!(b > 150 && r < 100, "expected the blue logo, got {:?}", [r, g, b]);
}

#[tokio::test]
async fn namespaced_vector_logo_rasterizes() {
    let reader = MemoryAssetReader::new().with_file("mark.svg", INKSCAPE_ART);
    let design = render_with(reader, None, Some("mark.svg")).await;

    let image = rasterize(&design);
    let [r, g, b, _] = pixel(&image, LOGO_CENTER);
    assert!(b > r, "expected the blue logo, got {:?}", [r, g, b]);
}
