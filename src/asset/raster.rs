//! Raster image assets

use image::GenericImageView;

use super::{Asset, AssetContent, MimeCategory};
use crate::errors::AssetError;

pub(crate) fn normalize(file_name: &str, mime: &str, bytes: &[u8]) -> Result<Asset, AssetError> {
    let decoded = image::load_from_memory(bytes).map_err(|e| AssetError::RasterDecode {
        file_name: file_name.to_string(),
        reason: e.to_string(),
    })?;
    let (width, height) = decoded.dimensions();
    let mime = match mime.trim().to_ascii_lowercase().as_str() {
        "image/jpg" | "image/jpeg" => "image/jpeg",
        _ => "image/png",
    };
    Ok(Asset {
        file_name: file_name.to_string(),
        category: MimeCategory::Raster,
        width: width as f64,
        height: height as f64,
        content: AssetContent::Raster {
            mime: mime.to_string(),
            data: bytes.to_vec(),
        },
        placeholder: false,
    })
}

/// Encode an RGBA bitmap as PNG
pub(crate) fn encode_png(bitmap: &image::RgbaImage) -> Result<Vec<u8>, image::ImageError> {
    let mut out = std::io::Cursor::new(Vec::new());
    bitmap.write_to(&mut out, image::ImageFormat::Png)?;
    Ok(out.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn png(width: u32, height: u32) -> Vec<u8> {
        encode_png(&image::RgbaImage::from_pixel(width, height, image::Rgba([9, 9, 9, 255]))).unwrap()
    }

    #[test]
    fn natural_size_gives_aspect_ratio() {
        let asset = normalize("swatch.png", "image/png", &png(40, 10)).unwrap();
        assert_eq!((asset.width, asset.height), (40.0, 10.0));
        assert_eq!(asset.aspect_ratio(), 4.0);
        assert!(asset.data_url().unwrap().starts_with("data:image/png;base64,"));
    }

    #[test]
    fn undecodable_bytes_are_an_error() {
        assert!(matches!(
            normalize("broken.jpg", "image/jpg", b"definitely not a jpeg"),
            Err(AssetError::RasterDecode { .. })
        ));
    }
}
