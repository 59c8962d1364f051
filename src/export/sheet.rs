//! Human-readable specification sheet and export timestamps.

use std::fmt::Write;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::config::{DesignConfig, FillSpec, UPPER_SECTION_RATIO};
use crate::geometry::format_dimension;
use crate::types::Cm;

/// Moment an export was produced, in whole seconds since the Unix epoch
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ExportStamp(pub u64);

impl ExportStamp {
    pub fn now() -> Self {
        let secs = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or_default();
        ExportStamp(secs)
    }

    /// UTC timestamp such as `2024-01-15T08:30:00Z`
    pub fn to_rfc3339(self) -> String {
        let days = (self.0 / 86_400) as i64;
        let rem = self.0 % 86_400;
        let (year, month, day) = days_to_ymd(days);
        format!(
            "{year:04}-{month:02}-{day:02}T{:02}:{:02}:{:02}Z",
            rem / 3600,
            rem % 3600 / 60,
            rem % 60
        )
    }
}

/// Civil date for a day count since 1970-01-01
fn days_to_ymd(days: i64) -> (i64, u32, u32) {
    const DAYS_TO_1970: i64 = 719_468;
    let z = days + DAYS_TO_1970;
    let era = z.div_euclid(146_097);
    let doe = z.rem_euclid(146_097) as u32;
    let yoe = (doe - doe / 1460 + doe / 36524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let d = doy - (153 * mp + 2) / 5 + 1;
    let m = if mp < 10 { mp + 3 } else { mp - 9 };
    let y = i64::from(yoe) + era * 400;
    (if m <= 2 { y + 1 } else { y }, m, d)
}

fn fill_specification(fill: &FillSpec) -> String {
    match fill {
        FillSpec::Solid(solid) => {
            let mut out = format!(
                "Fill type: solid\nColor name: {}\nPreview color: {}",
                solid.name, solid.hex
            );
            if let Some(pantone) = &solid.pantone {
                let _ = write!(out, "\nPantone: {pantone}");
            }
            out
        }
        FillSpec::Pattern(pattern) => {
            let mut out = format!(
                "Fill type: pattern\nPattern name: {}\nRepeat mode: {}",
                pattern.name, pattern.repeat_mode
            );
            if let Some(asset) = &pattern.asset {
                let _ = write!(out, "\nPattern file: {} ({})", asset.file_name, asset.mime);
            }
            out
        }
    }
}

/// Plain-text specification sheet shipped as `README.txt` in bundles
pub fn specification_sheet(config: &DesignConfig, stamp: ExportStamp) -> String {
    let share = (UPPER_SECTION_RATIO * 100.0).round();
    let mut out = String::new();
    let _ = writeln!(out, "Apron Design Specification");
    let _ = writeln!(out, "==========================");
    let _ = writeln!(out);
    let _ = writeln!(out, "Base dimensions:");
    let _ = writeln!(out, "- Top width: {}", format_dimension(Cm(config.top_width)));
    let _ = writeln!(out, "- Bottom width: {}", format_dimension(Cm(config.bottom_width)));
    let _ = writeln!(out, "- Total height: {}", format_dimension(Cm(config.total_height())));
    let _ = writeln!(out);
    let _ = writeln!(out, "Derived dimensions:");
    let _ = writeln!(
        out,
        "- Upper section: {} (total height x {share}%)",
        format_dimension(Cm(config.upper_height()))
    );
    let _ = writeln!(
        out,
        "- Lower section: {} (total height - upper section)",
        format_dimension(Cm(config.lower_height()))
    );
    let _ = writeln!(out);
    let _ = writeln!(out, "Straps ({}):", config.strap.style.as_str());
    let _ = writeln!(out, "- Neck strap: {}", format_dimension(Cm(config.strap.neck_length)));
    let _ = writeln!(out, "- Waist strap: {}", format_dimension(Cm(config.strap.waist_length)));
    let _ = writeln!(out, "- Strap color: {} {}", config.strap.color_name, config.strap.color);
    let _ = writeln!(out);
    let _ = writeln!(out, "Fill:");
    let _ = writeln!(out, "{}", fill_specification(&config.fill));
    let _ = writeln!(out);
    let _ = writeln!(out, "Drawing conventions:");
    let _ = writeln!(out, "- Shape: trapezoid bib over a rectangular skirt");
    let _ = writeln!(out, "- Labels: CM/INCH, one decimal place");
    let _ = writeln!(out);
    let _ = writeln!(out, "Files:");
    let _ = writeln!(out, "- design.svg: editable vector drawing");
    let _ = writeln!(out, "- design-parameters.json: design parameters");
    let _ = writeln!(out, "- README.txt: this file");
    let _ = writeln!(out);
    let _ = writeln!(out, "Exported: {}", stamp.to_rfc3339());
    out
}
