//! Command-line front end: load a design, attach artwork, render and export.

mod args;

use std::path::Path;

use anyhow::{Context, Result, bail};
use apron::asset::MemoryAssetReader;
use apron::config::design_summary;
use apron::export::{export_bundle, export_raster, export_vector};
use apron::{DesignConfig, ExportKind, ExportStamp, RenderSession, ResvgRasterizer, Upload, Uploads};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::args::Cli;

/// Read an artwork file into the in-memory reader and return its upload handle
async fn stage(reader: &mut MemoryAssetReader, path: &Path) -> Result<Upload> {
    let bytes = tokio::fs::read(path)
        .await
        .with_context(|| format!("reading {}", path.display()))?;
    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .with_context(|| format!("{} has no usable file name", path.display()))?
        .to_string();
    let upload = Upload::from_file_name(name.clone(), bytes.len() as u64);
    reader.insert(name, bytes);
    Ok(upload)
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => DesignConfig::load(path)
            .await
            .map_err(|e| anyhow::anyhow!("{:?}", miette::Report::new(e)))?,
        None => DesignConfig::default(),
    };

    let mut reader = MemoryAssetReader::new();
    let mut uploads = Uploads::default();
    if let Some(path) = &cli.pattern {
        let upload = stage(&mut reader, path).await?;
        config
            .attach_pattern(&upload)
            .with_context(|| format!("attaching pattern {}", path.display()))?;
        uploads.pattern = Some(upload.accept()?);
    }
    if let Some(path) = &cli.logo {
        let upload = stage(&mut reader, path).await?;
        config
            .attach_logo(&upload)
            .with_context(|| format!("attaching logo {}", path.display()))?;
        uploads.logo = Some(upload.accept()?);
    }

    let session = RenderSession::new(reader);
    let Some(design) = session.render(&config, &uploads).await?.current() else {
        bail!("render was superseded");
    };

    if cli.summary {
        print!("{}", design_summary(&design.config));
    }
    for advisory in design.config.logo_advisories() {
        tracing::warn!("{advisory}");
    }

    tokio::fs::create_dir_all(&cli.out_dir)
        .await
        .with_context(|| format!("creating {}", cli.out_dir.display()))?;

    let rasterizer = ResvgRasterizer::default();
    let stamp = ExportStamp::now();
    for kind in cli.kinds() {
        let export = match kind {
            ExportKind::Vector => export_vector(&design.svg),
            ExportKind::Raster => export_raster(&rasterizer, &design.svg, cli.scale)?,
            ExportKind::Bundle => {
                export_bundle(&design.svg, &design.config, session.normalizer().reader(), stamp)
                    .await?
            }
        };
        let path = export.write_into(&cli.out_dir).await?;
        println!("{}", path.display());
    }

    Ok(())
}
