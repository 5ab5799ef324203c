use engine::{Actor, Point, Rect, Sprite};
use tracing::debug;

use super::play_field::PlayField;

pub(crate) const CHIMP_START: Point = Point::new(10, 10);
pub(crate) const CHIMP_SPEED: i32 = 9;
pub(crate) const SPIN_ENTRY_DEGREES: u32 = 1;
pub(crate) const SPIN_STEP_DEGREES: u32 = 12;
pub(crate) const FULL_TURN_DEGREES: u32 = 360;
pub(crate) const COLOR_TOGGLE_MODULUS: i32 = 13;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum AnimationState {
    Walking,
    /// `angle` is never 0 here; a fresh spin starts at [`SPIN_ENTRY_DEGREES`].
    Spinning { angle: u32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Facing {
    Left,
    Right,
}

/// The target. Walks side to side and spins in place after being punched.
#[derive(Debug, Clone)]
pub(crate) struct Character {
    actor: Actor,
    velocity: i32,
    animation: AnimationState,
}

impl Character {
    pub(crate) fn new(sprite: Sprite) -> Self {
        Self {
            actor: Actor::at(sprite, CHIMP_START),
            velocity: CHIMP_SPEED,
            animation: AnimationState::Walking,
        }
    }

    pub(crate) fn actor(&self) -> &Actor {
        &self.actor
    }

    pub(crate) fn rect(&self) -> Rect {
        self.actor.rect()
    }

    pub(crate) fn velocity(&self) -> i32 {
        self.velocity
    }

    pub(crate) fn facing(&self) -> Facing {
        if self.velocity < 0 {
            Facing::Left
        } else {
            Facing::Right
        }
    }

    #[cfg(test)]
    pub(crate) fn animation(&self) -> AnimationState {
        self.animation
    }

    #[cfg(test)]
    pub(crate) fn spin_angle(&self) -> u32 {
        match self.animation {
            AnimationState::Walking => 0,
            AnimationState::Spinning { angle } => angle,
        }
    }

    pub(crate) fn is_spinning(&self) -> bool {
        matches!(self.animation, AnimationState::Spinning { .. })
    }

    pub(crate) fn update(&mut self, field: &mut PlayField) {
        match self.animation {
            AnimationState::Walking => self.walk(field),
            AnimationState::Spinning { angle } => self.spin(angle),
        }
    }

    /// Starts a spin. Returns false if one is already running.
    pub(crate) fn punched(&mut self) -> bool {
        if self.is_spinning() {
            return false;
        }
        self.actor.capture_baseline();
        self.animation = AnimationState::Spinning {
            angle: SPIN_ENTRY_DEGREES,
        };
        true
    }

    pub(crate) fn reverse_direction(&mut self) {
        self.velocity = -self.velocity;
    }

    fn walk(&mut self, field: &mut PlayField) {
        let rect = self.actor.rect();
        let mut candidate = rect.moved(self.velocity, 0);
        if self.leading_edge_leaves(field.area(), candidate) {
            self.reverse_direction();
            candidate = rect.moved(self.velocity, 0);
            self.actor.mirror_horizontal();
            debug!(velocity = self.velocity, x = rect.x, "chimp_turned");
        }

        // The direction mirror above and this one are independent and may
        // both fire on the same tick.
        if candidate.right().rem_euclid(COLOR_TOGGLE_MODULUS) == 0 {
            self.actor.mirror_horizontal();
            field.toggle_background();
        }

        self.actor.move_by(self.velocity, 0);
    }

    fn leading_edge_leaves(&self, area: Rect, candidate: Rect) -> bool {
        match self.facing() {
            Facing::Right => candidate.right() > area.right(),
            Facing::Left => candidate.left() < area.left(),
        }
    }

    fn spin(&mut self, angle: u32) {
        let next = angle + SPIN_STEP_DEGREES;
        if next >= FULL_TURN_DEGREES {
            self.animation = AnimationState::Walking;
            self.actor.restore_baseline();
        } else {
            self.animation = AnimationState::Spinning { angle: next };
            self.actor.rotate(next as i32);
        }
    }
}
