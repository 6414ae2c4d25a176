use image::{Rgba, RgbaImage};

/// Something the presenter can draw pixels onto.
pub trait Surface {
    /// Width and height in device pixels.
    fn size(&self) -> (usize, usize);
    fn set_draw_color(&mut self, color: Rgba<u8>);
    /// Plots one pixel in the current draw color.
    fn draw_point(&mut self, x: usize, y: usize);
    /// Fills the whole back buffer with the current draw color.
    fn clear(&mut self);
    /// Makes the back buffer visible.
    fn present(&mut self);
}

/// Discriminated input event. Only quitting matters to the raycaster.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Event {
    Quit,
}

pub trait EventSource {
    /// Next pending event, or `None` when the queue is empty. Never blocks.
    fn poll_event(&mut self) -> Option<Event>;
}

/// Off-screen surface backed by an `RgbaImage`, used for snapshots.
pub struct ImageSurface {
    img  : RgbaImage,
    color: Rgba<u8>,
}

impl ImageSurface {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            img: RgbaImage::new(width as u32, height as u32),
            color: Rgba([0, 0, 0, 255]),
        }
    }

    #[cfg(test)]
    pub(crate) fn image(&self) -> &RgbaImage { &self.img }

    pub fn into_image(self) -> RgbaImage { self.img }
}

impl Surface for ImageSurface {
    fn size(&self) -> (usize, usize) { (self.img.width() as usize, self.img.height() as usize) }

    fn set_draw_color(&mut self, color: Rgba<u8>) { self.color = color; }

    fn draw_point(&mut self, x: usize, y: usize) {
        if x < self.img.width() as usize && y < self.img.height() as usize {
            self.img.put_pixel(x as u32, y as u32, self.color);
        }
    }

    fn clear(&mut self) {
        let color = self.color;
        self.img.pixels_mut().for_each(|p| *p = color);
    }

    fn present(&mut self) {}
}
