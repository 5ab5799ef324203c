use engine::{Actor, Point, Rect, Sprite};

/// Extra offset applied while the punch button is held.
pub(crate) const PUNCH_THRUST: Point = Point::new(5, 10);
/// Inflation applied to the fist rect to get the hitbox; negative shrinks it.
pub(crate) const HITBOX_INFLATE: i32 = -5;

/// The player's fist. Follows the pointer and punches on button press.
#[derive(Debug, Clone)]
pub(crate) struct Cursor {
    actor: Actor,
    punching: bool,
}

impl Cursor {
    pub(crate) fn new(sprite: Sprite) -> Self {
        Self {
            actor: Actor::at(sprite, Point::default()),
            punching: false,
        }
    }

    pub(crate) fn actor(&self) -> &Actor {
        &self.actor
    }

    pub(crate) fn rect(&self) -> Rect {
        self.actor.rect()
    }

    #[cfg(test)]
    pub(crate) fn is_punching(&self) -> bool {
        self.punching
    }

    pub(crate) fn hitbox(&self) -> Rect {
        self.actor.rect().inflated(HITBOX_INFLATE, HITBOX_INFLATE)
    }

    pub(crate) fn update(&mut self, pointer: Point) {
        self.actor.set_midtop(pointer);
        if self.punching {
            self.actor.move_by(PUNCH_THRUST.x, PUNCH_THRUST.y);
        }
    }

    /// Returns whether the hitbox lands on `target`. While a punch is already
    /// out this does nothing and returns false.
    pub(crate) fn attempt_punch(&mut self, target: &Rect) -> bool {
        if self.punching {
            return false;
        }
        self.punching = true;
        self.hitbox().intersects(target)
    }

    pub(crate) fn release_punch(&mut self) {
        self.punching = false;
    }
}
