use std::sync::Arc;

use pixels::{Error, Pixels, SurfaceTexture};
use winit::window::Window;

use crate::app::Point;

use super::Canvas;

/// Presents a fixed-size [`Canvas`] in a window, scaled to fit the surface.
pub struct Display {
    window: Arc<Window>,
    pixels: Pixels<'static>,
    buffer_width: u32,
    buffer_height: u32,
}

impl Display {
    pub fn new(window: Arc<Window>, buffer_width: u32, buffer_height: u32) -> Result<Self, Error> {
        let size = window.inner_size();
        let pixels = Self::build_pixels(
            Arc::clone(&window),
            buffer_width,
            buffer_height,
            size.width,
            size.height,
        )?;
        Ok(Self {
            window,
            pixels,
            buffer_width,
            buffer_height,
        })
    }

    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), Error> {
        if width == 0 || height == 0 {
            return Ok(());
        }
        self.pixels = Self::build_pixels(
            Arc::clone(&self.window),
            self.buffer_width,
            self.buffer_height,
            width,
            height,
        )?;
        Ok(())
    }

    fn build_pixels(
        window: Arc<Window>,
        buffer_width: u32,
        buffer_height: u32,
        surface_width: u32,
        surface_height: u32,
    ) -> Result<Pixels<'static>, Error> {
        let surface = SurfaceTexture::new(surface_width, surface_height, window);
        Pixels::new(buffer_width, buffer_height, surface)
    }

    pub fn present(&mut self, canvas: &Canvas) -> Result<(), Error> {
        let frame = self.pixels.frame_mut();
        if frame.len() == canvas.frame().len() {
            frame.copy_from_slice(canvas.frame());
        }
        self.pixels.render()
    }

    /// Maps a physical window position into canvas coordinates, clamping
    /// positions in the letterbox onto the nearest edge.
    pub fn pointer_to_canvas(&self, physical: (f32, f32)) -> Point {
        let (x, y) = match self.pixels.window_pos_to_pixel(physical) {
            Ok(position) => position,
            Err(outside) => self.pixels.clamp_pixel_pos(outside),
        };
        Point::new(x as i32, y as i32)
    }
}
