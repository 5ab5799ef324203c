use engine::{Canvas, Point, Sprite};

use super::chimp::Character;
use super::fist::Cursor;
use super::play_field::{BackgroundColor, PlayField};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PunchOutcome {
    Hit,
    Miss,
}

/// Owns everything that changes during play. The chimp and the fist only
/// meet through [`SimulationState::press`].
#[derive(Debug, Clone)]
pub(crate) struct SimulationState {
    field: PlayField,
    character: Character,
    cursor: Cursor,
}

impl SimulationState {
    pub(crate) fn new(chimp: Sprite, fist: Sprite) -> Self {
        Self {
            field: PlayField::default(),
            character: Character::new(chimp),
            cursor: Cursor::new(fist),
        }
    }

    #[cfg(test)]
    pub(crate) fn field(&self) -> &PlayField {
        &self.field
    }

    pub(crate) fn background(&self) -> BackgroundColor {
        self.field.background()
    }

    pub(crate) fn character(&self) -> &Character {
        &self.character
    }

    #[cfg(test)]
    pub(crate) fn character_mut(&mut self) -> &mut Character {
        &mut self.character
    }

    pub(crate) fn cursor(&self) -> &Cursor {
        &self.cursor
    }

    pub(crate) fn press(&mut self) -> PunchOutcome {
        if self.cursor.attempt_punch(&self.character.rect()) {
            self.character.punched();
            PunchOutcome::Hit
        } else {
            PunchOutcome::Miss
        }
    }

    pub(crate) fn release(&mut self) {
        self.cursor.release_punch();
    }

    pub(crate) fn advance(&mut self, pointer: Point) {
        self.cursor.update(pointer);
        self.character.update(&mut self.field);
    }

    /// Background first, then the fist, then the chimp on top.
    pub(crate) fn draw(&self, canvas: &mut Canvas) {
        canvas.fill(self.field.background().rgba());
        for actor in [self.cursor.actor(), self.character.actor()] {
            canvas.blit(actor.image(), actor.rect().top_left());
        }
    }
}
