use image::{imageops, Rgba, RgbaImage};

const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// Owned RGBA image. All transforms return a new sprite and leave `self` intact.
#[derive(Debug, Clone, PartialEq)]
pub struct Sprite {
    image: RgbaImage,
}

impl Sprite {
    pub fn from_image(image: RgbaImage) -> Self {
        Self { image }
    }

    pub fn solid(width: u32, height: u32, color: [u8; 4]) -> Self {
        Self {
            image: RgbaImage::from_pixel(width, height, Rgba(color)),
        }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        Some(self.image.get_pixel(x, y).0)
    }

    pub fn as_image(&self) -> &RgbaImage {
        &self.image
    }

    /// Makes every pixel whose RGB matches `key` fully transparent.
    pub fn with_color_key(mut self, key: [u8; 3]) -> Self {
        for pixel in self.image.pixels_mut() {
            if pixel.0[..3] == key {
                *pixel = TRANSPARENT;
            }
        }
        self
    }

    /// Color key taken from the top-left pixel.
    pub fn with_corner_color_key(self) -> Self {
        match self.pixel(0, 0) {
            Some([r, g, b, _]) => self.with_color_key([r, g, b]),
            None => self,
        }
    }

    pub fn flipped_horizontal(&self) -> Self {
        Self {
            image: imageops::flip_horizontal(&self.image),
        }
    }

    /// Counter-clockwise rotation. The result is the bounding box of the
    /// rotated image, so its size changes for angles off the right angles.
    pub fn rotated(&self, degrees: i32) -> Self {
        match degrees.rem_euclid(360) {
            0 => self.clone(),
            90 => Self {
                image: imageops::rotate270(&self.image),
            },
            180 => Self {
                image: imageops::rotate180(&self.image),
            },
            270 => Self {
                image: imageops::rotate90(&self.image),
            },
            other => self.rotated_sampled(other),
        }
    }

    fn rotated_sampled(&self, degrees: i32) -> Self {
        let (src_w, src_h) = (self.width(), self.height());
        if src_w == 0 || src_h == 0 {
            return self.clone();
        }
        let (sin, cos) = (degrees as f32).to_radians().sin_cos();
        let (dst_w, dst_h) = rotated_bounds(src_w, src_h, sin, cos);

        let src_cx = src_w as f32 * 0.5;
        let src_cy = src_h as f32 * 0.5;
        let dst_cx = dst_w as f32 * 0.5;
        let dst_cy = dst_h as f32 * 0.5;

        let image = RgbaImage::from_fn(dst_w, dst_h, |x, y| {
            let dx = x as f32 + 0.5 - dst_cx;
            let dy = y as f32 + 0.5 - dst_cy;
            // Inverse of the on-screen counter-clockwise rotation (y down).
            let sx = (dx * cos - dy * sin + src_cx).floor();
            let sy = (dx * sin + dy * cos + src_cy).floor();
            if sx < 0.0 || sy < 0.0 || sx >= src_w as f32 || sy >= src_h as f32 {
                return TRANSPARENT;
            }
            *self.image.get_pixel(sx as u32, sy as u32)
        });
        Self { image }
    }
}

fn rotated_bounds(width: u32, height: u32, sin: f32, cos: f32) -> (u32, u32) {
    let (w, h) = (width as f32, height as f32);
    let new_w = (w * cos.abs() + h * sin.abs()).trunc().max(1.0);
    let new_h = (w * sin.abs() + h * cos.abs()).trunc().max(1.0);
    (new_w as u32, new_h as u32)
}
