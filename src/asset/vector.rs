//! Vector markup assets

use apron_svg::{Element, SvgError};

use super::{Asset, AssetContent, MimeCategory};
use crate::errors::AssetError;

/// Side length assumed for artwork that declares no size at all
pub const NOMINAL_VECTOR_SIZE: f64 = 200.0;

/// Coordinate box of vector artwork
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewBox {
    pub min_x: f64,
    pub min_y: f64,
    pub width: f64,
    pub height: f64,
}

impl ViewBox {
    pub fn sized(width: f64, height: f64) -> Self {
        Self {
            min_x: 0.0,
            min_y: 0.0,
            width,
            height,
        }
    }

    /// Parse a `viewBox` attribute (`min-x min-y width height`)
    pub fn parse(value: &str) -> Option<Self> {
        let parts: Vec<f64> = value
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|part| !part.is_empty())
            .map(|part| part.parse::<f64>())
            .collect::<Result<_, _>>()
            .ok()?;
        match parts.as_slice() {
            [min_x, min_y, width, height] if usable(*width) && usable(*height) => Some(Self {
                min_x: *min_x,
                min_y: *min_y,
                width: *width,
                height: *height,
            }),
            _ => None,
        }
    }
}

fn usable(v: f64) -> bool {
    v.is_finite() && v > 0.0
}

/// Parse a length attribute, accepting a trailing `px`
fn parse_length(value: &str) -> Option<f64> {
    let value = value.trim();
    let value = value.strip_suffix("px").unwrap_or(value).trim();
    value.parse::<f64>().ok().filter(|v| usable(*v))
}

/// Coordinate box of a root `<svg>`: viewBox, else width/height, else square
pub(crate) fn intrinsic_box(root: &Element) -> ViewBox {
    if let Some(view_box) = root.attr("viewBox").and_then(ViewBox::parse) {
        return view_box;
    }
    let width = root.attr("width").and_then(parse_length);
    let height = root.attr("height").and_then(parse_length);
    match (width, height) {
        (Some(w), Some(h)) => ViewBox::sized(w, h),
        _ => ViewBox::sized(NOMINAL_VECTOR_SIZE, NOMINAL_VECTOR_SIZE),
    }
}

pub(crate) fn normalize(file_name: &str, bytes: &[u8]) -> Result<Asset, AssetError> {
    let markup_err = |source| AssetError::VectorMarkup {
        file_name: file_name.to_string(),
        source,
    };
    let text = std::str::from_utf8(bytes)
        .map_err(|e| markup_err(SvgError::Parse(e.to_string())))?;
    let root = apron_svg::parse(text).map_err(markup_err)?;
    if root.local_name() != "svg" {
        return Err(markup_err(SvgError::Parse(format!(
            "root element is <{}>, expected <svg>",
            root.name
        ))));
    }

    let view_box = intrinsic_box(&root);
    let namespaces = root
        .attributes
        .iter()
        .filter(|(key, _)| key.starts_with("xmlns:"))
        .cloned()
        .collect();
    Ok(Asset {
        file_name: file_name.to_string(),
        category: MimeCategory::Vector,
        width: view_box.width,
        height: view_box.height,
        content: AssetContent::Vector {
            view_box,
            namespaces,
            children: root.children,
        },
        placeholder: false,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn aspect(markup: &str) -> f64 {
        normalize("art.svg", markup.as_bytes()).unwrap().aspect_ratio()
    }

    #[test]
    fn aspect_from_view_box() {
        assert_eq!(aspect(r#"<svg viewBox="0 0 300 150" width="10" height="10"/>"#), 2.0);
        assert_eq!(aspect(r#"<svg viewBox="-5,-5, 50,100"><rect/></svg>"#), 0.5);
    }

    #[test]
    fn aspect_from_width_and_height() {
        assert_eq!(aspect(r#"<svg width="120px" height="40"/>"#), 3.0);
    }

    #[test]
    fn aspect_falls_back_to_square() {
        assert_eq!(aspect(r#"<svg viewBox="0 0 0 10" width="12"/>"#), 1.0);
        assert_eq!(aspect(r#"<svg width="12cm" height="4cm"/>"#), 1.0);
        assert_eq!(aspect("<svg/>"), 1.0);
    }

    #[test]
    fn children_are_kept() {
        let asset = normalize(
            "art.svg",
            br#"<svg viewBox="0 0 10 10"><circle r="2"/><path d="M0,0"/></svg>"#,
        )
        .unwrap();
        let AssetContent::Vector { children, view_box, .. } = asset.content else {
            panic!("expected vector content");
        };
        assert_eq!(children.len(), 2);
        assert_eq!(view_box, ViewBox::sized(10.0, 10.0));
    }

    #[test]
    fn prefixed_namespaces_are_kept() {
        let asset = normalize(
            "art.svg",
            br#"<svg xmlns="http://www.w3.org/2000/svg" xmlns:inkscape="http://www.inkscape.org/namespaces/inkscape" viewBox="0 0 10 10"><g inkscape:label="Layer 1"/></svg>"#,
        )
        .unwrap();
        let AssetContent::Vector { namespaces, .. } = asset.content else {
            panic!("expected vector content");
        };
        assert_eq!(
            namespaces,
            [(
                "xmlns:inkscape".to_string(),
                "http://www.inkscape.org/namespaces/inkscape".to_string()
            )]
        );
    }

    #[test]
    fn corrupt_markup_is_an_error() {
        assert!(matches!(
            normalize("bad.svg", b"<svg><g></svg>"),
            Err(AssetError::VectorMarkup { .. })
        ));
        assert!(normalize("html.svg", b"<html/>").is_err());
    }
}
