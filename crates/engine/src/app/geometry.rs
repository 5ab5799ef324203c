/// Integer point in play-field coordinates (y grows downward).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned integer rectangle. `right` and `bottom` are exclusive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Rect of the given size whose [`Rect::center`] is `center`.
    pub fn with_center(width: i32, height: i32, center: Point) -> Self {
        Self {
            x: center.x - width / 2,
            y: center.y - height / 2,
            width,
            height,
        }
    }

    pub fn left(&self) -> i32 {
        self.x
    }

    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    pub fn top(&self) -> i32 {
        self.y
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    pub fn top_left(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2, self.y + self.height / 2)
    }

    pub fn midtop(&self) -> Point {
        Point::new(self.x + self.width / 2, self.y)
    }

    pub fn set_top_left(&mut self, point: Point) {
        self.x = point.x;
        self.y = point.y;
    }

    pub fn set_midtop(&mut self, point: Point) {
        self.x = point.x - self.width / 2;
        self.y = point.y;
    }

    pub fn move_by(&mut self, dx: i32, dy: i32) {
        self.x += dx;
        self.y += dy;
    }

    pub fn moved(mut self, dx: i32, dy: i32) -> Self {
        self.move_by(dx, dy);
        self
    }

    /// Grows the rect by `dx`/`dy` in total while keeping it centered.
    /// Negative values shrink it.
    pub fn inflated(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x - dx / 2,
            y: self.y - dy / 2,
            width: self.width + dx,
            height: self.height + dy,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// True only when the interiors overlap; shared edges do not count.
    pub fn intersects(&self, other: &Rect) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }

    pub fn contains(&self, other: &Rect) -> bool {
        other.left() >= self.left()
            && other.top() >= self.top()
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }
}
