use crate::{algebra::Vec3, sphere::{Discriminant, Sphere}};
use anyhow::{bail, Context};
use image::Rgba;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Virtual image plane, in scene meters.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct WindowJson {
    pub width   : f64,
    pub height  : f64,
    pub distance: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SphereJson {
    pub radius: f64,
    /// Lateral offset of the center; depth always follows `distance + 3·radius`.
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
    pub rgba: [u8; 4],
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScreenJson {
    pub width : usize,
    pub height: usize,
    #[serde(default)]
    pub target_fps: Option<usize>,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GridJson {
    pub columns: usize,
    pub rows   : usize,
}

/// Every scene, sampling and display parameter of the raycaster.
/// Immutable once built; handed by reference to the sampler and presenter.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub title      : String,
    pub screen     : ScreenJson,
    pub window     : WindowJson,
    pub sphere     : SphereJson,
    pub background : [u8; 4],
    pub grid       : GridJson,
    pub discriminant: Discriminant,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            title: "CG I - Raycaster".to_string(),
            screen: ScreenJson { width: 800, height: 800, target_fps: None },
            window: WindowJson { width: 1.0, height: 1.0, distance: 0.5 },
            sphere: SphereJson { radius: 0.5, x: 0.0, y: 0.0, rgba: [255, 0, 0, 255] },
            background: [100, 100, 100, 255],
            grid: GridJson { columns: 400, rows: 400 },
            discriminant: Discriminant::Observed,
        }
    }
}

impl Config {
    /// The scene's only object, placed `distance + 3·radius` in front of the eye.
    pub fn sphere(&self) -> Sphere {
        let z = -(self.window.distance + 3.0 * self.sphere.radius);
        Sphere::new(Vec3(self.sphere.x, self.sphere.y, z), self.sphere.radius)
    }

    pub fn sphere_color(&self) -> Rgba<u8> { Rgba(self.sphere.rgba) }
    pub fn background_color(&self) -> Rgba<u8> { Rgba(self.background) }

    /// Display pixels per grid cell, horizontally and vertically.
    pub fn block_size(&self) -> (usize, usize) {
        (self.screen.width / self.grid.columns, self.screen.height / self.grid.rows)
    }

    /// Where `snapshot` writes when no output path is given.
    pub fn snapshot_path(&self) -> PathBuf {
        let formula = match self.discriminant {
            Discriminant::Observed => "observed",
            Discriminant::Textbook => "textbook",
        };
        PathBuf::from(format!("renders/raycast_{}x{}_{formula}.png", self.grid.columns, self.grid.rows))
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        let GridJson { columns, rows } = self.grid;
        let ScreenJson { width, height, .. } = self.screen;
        if columns == 0 || rows == 0 {
            bail!("grid must have at least one cell, got {columns}x{rows}");
        }
        if width == 0 || height == 0 {
            bail!("screen must be non-empty, got {width}x{height}");
        }
        if width % columns != 0 || height % rows != 0 {
            bail!("screen {width}x{height} is not a whole multiple of grid {columns}x{rows}");
        }
        // NaN fails these comparisons too
        if !(self.window.distance > 0.0) {
            bail!("window distance must be positive, got {}", self.window.distance);
        }
        if !(self.window.width > 0.0 && self.window.height > 0.0) {
            bail!("window size must be positive, got {}x{}", self.window.width, self.window.height);
        }
        if !(self.sphere.radius > 0.0) {
            bail!("sphere radius must be positive, got {}", self.sphere.radius);
        }
        Ok(())
    }
}

/// Reads a JSON config; fields left out keep their defaults.
pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Config> {
    let path = path.as_ref();
    let data = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    let config: Config = serde_json::from_str(&data)
        .with_context(|| format!("parsing config {}", path.display()))?;
    config.validate()?;
    Ok(config)
}
