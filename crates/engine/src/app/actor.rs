use super::geometry::{Point, Rect};
use super::sprite::Sprite;

/// A sprite paired with the rect it occupies on the play field.
///
/// The actor keeps two images: `image` is what gets drawn, `baseline` is the
/// untransformed source that rotations are derived from. Rotating always starts
/// from the baseline so repeated rotations do not accumulate sampling error.
#[derive(Debug, Clone)]
pub struct Actor {
    rect: Rect,
    image: Sprite,
    baseline: Sprite,
    mirrored: bool,
}

impl Actor {
    pub fn new(image: Sprite, rect: Rect) -> Self {
        Self {
            rect,
            baseline: image.clone(),
            image,
            mirrored: false,
        }
    }

    /// Actor whose rect is the image size placed at `top_left`.
    pub fn at(image: Sprite, top_left: Point) -> Self {
        let rect = Rect::new(
            top_left.x,
            top_left.y,
            image.width() as i32,
            image.height() as i32,
        );
        Self::new(image, rect)
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn image(&self) -> &Sprite {
        &self.image
    }

    pub fn baseline(&self) -> &Sprite {
        &self.baseline
    }

    pub fn is_mirrored(&self) -> bool {
        self.mirrored
    }

    pub fn move_by(&mut self, dx: i32, dy: i32) {
        self.rect.move_by(dx, dy);
    }

    pub fn set_top_left(&mut self, point: Point) {
        self.rect.set_top_left(point);
    }

    pub fn set_midtop(&mut self, point: Point) {
        self.rect.set_midtop(point);
    }

    pub fn mirror_horizontal(&mut self) {
        self.image = self.image.flipped_horizontal();
        self.mirrored = !self.mirrored;
    }

    /// Records the displayed image as the source for later rotations.
    pub fn capture_baseline(&mut self) {
        self.baseline = self.image.clone();
    }

    pub fn rotate(&mut self, degrees: i32) {
        self.image = self.baseline.rotated(degrees);
        self.recenter_on_image();
    }

    pub fn restore_baseline(&mut self) {
        self.image = self.baseline.clone();
        self.recenter_on_image();
    }

    fn recenter_on_image(&mut self) {
        self.rect = Rect::with_center(
            self.image.width() as i32,
            self.image.height() as i32,
            self.rect.center(),
        );
    }
}
