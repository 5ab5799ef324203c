use crate::app::{Point, Sprite};

/// CPU-side RGBA frame the size of the play field. The display copies it to
/// the window on present.
#[derive(Debug, Clone)]
pub struct Canvas {
    width: u32,
    height: u32,
    rgba: Vec<u8>,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            rgba: vec![0; width as usize * height as usize * 4],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn frame(&self) -> &[u8] {
        &self.rgba
    }

    pub fn pixel(&self, x: i32, y: i32) -> Option<[u8; 4]> {
        let offset = self.byte_offset(x, y)?;
        let mut pixel = [0; 4];
        pixel.copy_from_slice(&self.rgba[offset..offset + 4]);
        Some(pixel)
    }

    pub fn fill(&mut self, color: [u8; 4]) {
        for pixel in self.rgba.chunks_exact_mut(4) {
            pixel.copy_from_slice(&color);
        }
    }

    /// Draws `sprite` with its top-left at `at`, clipped to the canvas.
    /// Fully transparent sprite pixels are skipped.
    pub fn blit(&mut self, sprite: &Sprite, at: Point) {
        let image = sprite.as_image();
        let left = at.x.max(0);
        let top = at.y.max(0);
        let right = (at.x + sprite.width() as i32).min(self.width as i32);
        let bottom = (at.y + sprite.height() as i32).min(self.height as i32);
        if left >= right || top >= bottom {
            return;
        }

        for y in top..bottom {
            for x in left..right {
                let src = image.get_pixel((x - at.x) as u32, (y - at.y) as u32).0;
                if src[3] == 0 {
                    continue;
                }
                if let Some(offset) = self.byte_offset(x, y) {
                    self.rgba[offset..offset + 4].copy_from_slice(&src);
                }
            }
        }
    }

    fn byte_offset(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return None;
        }
        Some((y as usize * self.width as usize + x as usize) * 4)
    }
}
