use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use spdlog::{debug, error, info, warn};

use postcheck::collection::Collection;
use postcheck::logger::configure_logger;
use postcheck::view::manifest::render_manifest;
use postcheck::view::report_renderer::ReportRenderer;

use crate::config::open_config;
use crate::{CheckArgs, ReportFormat};

pub fn check_cmd(args: CheckArgs) -> Result<ExitCode> {
    let (mut config, config_path) = open_config(args.config_path.map(PathBuf::from))?;
    if let Some(content_dir) = args.content_dir {
        config.paths.content_dir = PathBuf::from(content_dir);
    }
    if args.drafts {
        config.collection.include_drafts = true;
    }

    if let Err(err) = configure_logger(&config, args.verbose) {
        warn!("Error creating logger sinks. Using console instead. Desc={}", err);
    }
    match config_path {
        Some(path) => debug!("Configuration read from {}", path.display()),
        None => debug!("No configuration found, using defaults"),
    }

    let content_dir = &config.paths.content_dir;
    let collection = Collection::load(content_dir, &config.collection)
        .with_context(|| format!("Error reading content directory {}", content_dir.display()))?;

    match args.format {
        ReportFormat::Text => {
            let renderer = ReportRenderer::new()?;
            print!("{}", renderer.render(&collection));
        }
        ReportFormat::Json => {
            println!("{}", render_manifest(&collection, config.collection.include_drafts)?);
            // The manifest only lists valid posts
            for failure in collection.failures() {
                error!("{}: {}", failure.path.display(), failure.error);
            }
        }
    }

    if collection.has_failures() {
        error!("{} of {} posts have an invalid front matter",
            collection.failures().len(),
            collection.failures().len() + collection.entries().len());
        return Ok(ExitCode::FAILURE);
    }

    info!("All {} posts are valid", collection.entries().len());
    Ok(ExitCode::SUCCESS)
}
