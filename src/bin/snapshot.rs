//! Renders one frame without a window and writes it to disk.
//!
//! usage: snapshot [CONFIG.json] [OUT]

use anyhow::Context;
use env_logger::Env;
use log::info;
use raycaster::{config::{self, Config}, presenter, sampler, surface::ImageSurface};
use std::{env, fs, path::PathBuf};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let args: Vec<String> = env::args().skip(1).collect();
    let config = match args.first() {
        Some(path) => config::load(path)?,
        None => Config::default(),
    };
    let out = args.get(1).map(PathBuf::from).unwrap_or_else(|| config.snapshot_path());

    let buf = sampler::render(&config);
    let mut surface = ImageSurface::new(config.screen.width, config.screen.height);
    presenter::blit(&buf, &mut surface);

    if let Some(dir) = out.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
    }
    surface
        .into_image()
        .save(&out)
        .with_context(|| format!("writing {}", out.display()))?;

    info!("Saved → {}", out.display());
    Ok(())
}
