//! Color values accepted in presentation attributes.

/// A paint color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    /// No paint (transparent)
    None,
    /// Opaque RGB color
    Rgb { r: u8, g: u8, b: u8 },
}

impl Color {
    pub const WHITE: Color = Color::Rgb { r: 255, g: 255, b: 255 };
    pub const BLACK: Color = Color::Rgb { r: 0, g: 0, b: 0 };

    /// Parse `#rrggbb`, `#rgb`, `rgb(r,g,b)`, `none`/`transparent` or a basic color name.
    ///
    /// Returns `None` for anything else.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("none") || s.eq_ignore_ascii_case("transparent") {
            return Some(Color::None);
        }

        if let Some(inner) = s.strip_prefix("rgb(").and_then(|s| s.strip_suffix(')')) {
            let parts: Vec<&str> = inner.split(',').collect();
            if let [r, g, b] = parts.as_slice() {
                if let (Ok(r), Ok(g), Ok(b)) = (
                    r.trim().parse::<u8>(),
                    g.trim().parse::<u8>(),
                    b.trim().parse::<u8>(),
                ) {
                    return Some(Color::Rgb { r, g, b });
                }
            }
            return None;
        }

        if let Some(hex) = s.strip_prefix('#') {
            if !hex.is_ascii() {
                return None;
            }
            return match hex.len() {
                6 => {
                    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
                    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
                    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
                    Some(Color::Rgb { r, g, b })
                }
                3 => {
                    // Expand 3-digit hex: #abc -> #aabbcc
                    let r = u8::from_str_radix(&hex[0..1], 16).ok()?;
                    let g = u8::from_str_radix(&hex[1..2], 16).ok()?;
                    let b = u8::from_str_radix(&hex[2..3], 16).ok()?;
                    Some(Color::Rgb {
                        r: r * 17,
                        g: g * 17,
                        b: b * 17,
                    })
                }
                _ => None,
            };
        }

        match s.to_ascii_lowercase().as_str() {
            "black" => Some(Color::BLACK),
            "white" => Some(Color::WHITE),
            "red" => Some(Color::Rgb { r: 255, g: 0, b: 0 }),
            "green" => Some(Color::Rgb { r: 0, g: 128, b: 0 }),
            "blue" => Some(Color::Rgb { r: 0, g: 0, b: 255 }),
            "gray" | "grey" => Some(Color::Rgb {
                r: 128,
                g: 128,
                b: 128,
            }),
            _ => None,
        }
    }

    /// Uppercase `#RRGGBB`, or `none`
    pub fn to_hex(&self) -> String {
        match self {
            Color::None => "none".to_string(),
            Color::Rgb { r, g, b } => format!("#{:02X}{:02X}{:02X}", r, g, b),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_hex_forms() {
        assert_eq!(
            Color::parse("#FF6B6B"),
            Some(Color::Rgb {
                r: 255,
                g: 107,
                b: 107
            })
        );
        assert_eq!(Color::parse("#fff"), Some(Color::WHITE));
        assert_eq!(Color::parse("#12345"), None);
        assert_eq!(Color::parse("#zzzzzz"), None);
    }

    #[test]
    fn parse_rgb_and_named() {
        assert_eq!(Color::parse("rgb(0, 0, 0)"), Some(Color::BLACK));
        assert_eq!(Color::parse("Grey"), Some(Color::Rgb { r: 128, g: 128, b: 128 }));
        assert_eq!(Color::parse("none"), Some(Color::None));
        assert_eq!(Color::parse("coral-ish"), None);
    }

    #[test]
    fn hex_roundtrip_is_uppercase() {
        let c = Color::parse("#d3d3d3").unwrap();
        assert_eq!(c.to_hex(), "#D3D3D3");
    }
}
