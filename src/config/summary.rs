use std::fmt::Write;

use super::{DesignConfig, FillSpec};
use crate::geometry::format_dimension;
use crate::types::Cm;

/// Short plain-text summary of a design
pub fn design_summary(config: &DesignConfig) -> String {
    let mut out = String::new();
    let rows = [
        ("Top width", config.top_width),
        ("Bottom width", config.bottom_width),
        ("Total height", config.total_height()),
        ("Upper section", config.upper_height()),
        ("Lower section", config.lower_height()),
    ];
    for (label, value) in rows {
        let _ = writeln!(out, "{label}: {}", format_dimension(Cm(value)));
    }
    let _ = writeln!(
        out,
        "Straps: {} (neck {}cm, waist {}cm)",
        config.strap.style.as_str(),
        Cm(config.strap.neck_length),
        Cm(config.strap.waist_length)
    );
    let _ = writeln!(out, "Fill: {}", fill_description(&config.fill));
    out
}

/// One-line description of the fill
pub(crate) fn fill_description(fill: &FillSpec) -> String {
    match fill {
        FillSpec::Solid(solid) => match &solid.pantone {
            Some(code) => format!("{} {} (Pantone {})", solid.name, solid.hex, code),
            None => format!("{} {}", solid.name, solid.hex),
        },
        FillSpec::Pattern(pattern) => {
            let mut text = format!("pattern \"{}\", {} mode", pattern.name, pattern.repeat_mode);
            if pattern.repeat_mode == super::RepeatMode::Custom {
                let _ = write!(
                    text,
                    " (size {}%, position {}%/{}%)",
                    apron_svg::fmt_num(pattern.custom_size),
                    apron_svg::fmt_num(pattern.custom_pos_x),
                    apron_svg::fmt_num(pattern.custom_pos_y)
                );
            }
            if let Some(asset) = &pattern.asset {
                let _ = write!(text, ", artwork {}", asset.file_name);
            }
            text
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_of_default_design() {
        insta::assert_snapshot!(design_summary(&DesignConfig::default()).trim_end(), @r"
        Top width: 45CM/17.7INCH
        Bottom width: 60CM/23.6INCH
        Total height: 70CM/27.6INCH
        Upper section: 23.1CM/9.1INCH
        Lower section: 46.9CM/18.5INCH
        Straps: classic (neck 50cm, waist 80cm)
        Fill: Coral Red #FF6B6B
        ");
    }
}
