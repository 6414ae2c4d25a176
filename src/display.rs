//! src/display.rs
//! --------------
//! On-screen surface and input source backed by a minifb window.

use crate::{
    config::Config,
    surface::{Event, EventSource, Surface},
};
use image::Rgba;
use log::{debug, warn};
use minifb::{Key, Scale, Window, WindowOptions};
use std::{ffi::OsString, fmt};

/// The ways opening the display can fail. Each carries the backend's message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayError {
    Subsystem(String),
    Window(String),
    Renderer(String),
}

impl fmt::Display for DisplayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Subsystem(e) => write!(f, "could not initialise the display subsystem: {e}"),
            Self::Window(e) => write!(f, "window creation failed: {e}"),
            Self::Renderer(e) => write!(f, "renderer creation failed: {e}"),
        }
    }
}

impl std::error::Error for DisplayError {}

/// minifb wants `0RGB` words; alpha is dropped.
pub fn pack_rgb(c: Rgba<u8>) -> u32 {
    let [r, g, b, _] = c.0;
    (r as u32) << 16 | (g as u32) << 8 | b as u32
}

/// A fixed-size window plus the back buffer bound to it.
///
/// Fields drop in declaration order, so the back buffer goes before the
/// window it was bound to.
pub struct Display {
    buffer   : Vec<u32>,
    color    : u32,
    width    : usize,
    height   : usize,
    quit_sent: bool,
    window   : Window,
}

impl Display {
    /// Opens the window described by `config`: subsystem check, window,
    /// then the back buffer. Anything created before a failing step is
    /// released on return.
    pub fn open(config: &Config) -> Result<Self, DisplayError> {
        probe_subsystem()?;
        debug!("display subsystem available");

        let (width, height) = (config.screen.width, config.screen.height);
        let mut window = Window::new(
            &config.title,
            width,
            height,
            WindowOptions {
                scale: Scale::X1,
                ..WindowOptions::default()
            },
        )
        .map_err(|e| DisplayError::Window(e.to_string()))?;
        if let Some(fps) = config.screen.target_fps {
            window.set_target_fps(fps);
        }
        debug!("window '{}' created at {width}x{height}", config.title);

        // binding the back buffer is the first thing that can reject it
        let buffer = vec![0u32; width * height];
        window
            .update_with_buffer(&buffer, width, height)
            .map_err(|e| DisplayError::Renderer(e.to_string()))?;
        debug!("back buffer bound");

        Ok(Self { buffer, color: 0, width, height, quit_sent: false, window })
    }
}

/// X11 and Wayland both announce themselves through the environment.
#[cfg_attr(not(all(unix, not(target_os = "macos"))), allow(dead_code))]
fn check_display_env(var: impl Fn(&str) -> Option<OsString>) -> Result<(), DisplayError> {
    let has = |k: &str| var(k).is_some_and(|v| !v.is_empty());
    if has("DISPLAY") || has("WAYLAND_DISPLAY") {
        Ok(())
    } else {
        Err(DisplayError::Subsystem("neither DISPLAY nor WAYLAND_DISPLAY is set".to_string()))
    }
}

#[cfg(all(unix, not(target_os = "macos")))]
fn probe_subsystem() -> Result<(), DisplayError> {
    check_display_env(|k| std::env::var_os(k))
}

#[cfg(not(all(unix, not(target_os = "macos"))))]
fn probe_subsystem() -> Result<(), DisplayError> {
    Ok(())
}

impl Surface for Display {
    fn size(&self) -> (usize, usize) { (self.width, self.height) }

    fn set_draw_color(&mut self, color: Rgba<u8>) { self.color = pack_rgb(color); }

    fn draw_point(&mut self, x: usize, y: usize) {
        if x < self.width && y < self.height {
            self.buffer[y * self.width + x] = self.color;
        }
    }

    fn clear(&mut self) {
        let color = self.color;
        self.buffer.iter_mut().for_each(|p| *p = color);
    }

    fn present(&mut self) {
        if let Err(e) = self.window.update_with_buffer(&self.buffer, self.width, self.height) {
            warn!("present failed: {e}");
        }
    }
}

impl EventSource for Display {
    /// minifb has no event queue; a closed window or Escape counts as one
    /// pending quit, reported once.
    fn poll_event(&mut self) -> Option<Event> {
        if self.quit_sent {
            return None;
        }
        if !self.window.is_open() || self.window.is_key_down(Key::Escape) {
            self.quit_sent = true;
            return Some(Event::Quit);
        }
        None
    }
}

impl Drop for Display {
    fn drop(&mut self) {
        debug!("tearing down display");
    }
}
