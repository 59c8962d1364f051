use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Render an apron design and export it
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// JSON design configuration; built-in defaults when omitted
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Pattern artwork (SVG, PDF, PNG or JPEG); switches the fill to a pattern
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub pattern: Option<PathBuf>,

    /// Logo artwork (SVG, PDF, PNG or JPEG); enables the logo
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub logo: Option<PathBuf>,

    /// Directory the exports are written into
    #[arg(short, long, default_value = ".", value_hint = clap::ValueHint::DirPath)]
    pub out_dir: PathBuf,

    /// Export formats to write
    #[arg(short, long, value_enum, default_values_t = [Format::All])]
    pub format: Vec<Format>,

    /// Raster upscale factor
    #[arg(long, default_value_t = apron::export::DEFAULT_RASTER_SCALE)]
    pub scale: f64,

    /// Print the design summary before exporting
    #[arg(short, long)]
    pub summary: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Svg,
    Png,
    Zip,
    All,
}

impl Cli {
    /// Requested export kinds, deduplicated in pipeline order
    pub fn kinds(&self) -> Vec<apron::ExportKind> {
        use apron::ExportKind;
        ExportKind::ALL
            .into_iter()
            .filter(|kind| {
                self.format.iter().any(|format| match format {
                    Format::All => true,
                    Format::Svg => *kind == ExportKind::Vector,
                    Format::Png => *kind == ExportKind::Raster,
                    Format::Zip => *kind == ExportKind::Bundle,
                })
            })
            .collect()
    }
}
