use std::collections::VecDeque;

use winit::event::{ElementState, MouseButton};
use winit::keyboard::{KeyCode, PhysicalKey};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Escape,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputEvent {
    Quit,
    KeyDown(Key),
    PointerButtonDown,
    PointerButtonUp,
}

impl InputEvent {
    pub fn is_stop_request(self) -> bool {
        matches!(self, InputEvent::Quit | InputEvent::KeyDown(Key::Escape))
    }
}

/// Buffers window events between ticks and tracks the latest pointer position.
#[derive(Debug, Default)]
pub(crate) struct InputCollector {
    pending: VecDeque<InputEvent>,
    pointer_position_px: Option<(f32, f32)>,
}

impl InputCollector {
    pub(crate) fn push(&mut self, event: InputEvent) {
        self.pending.push_back(event);
    }

    pub(crate) fn mark_quit_requested(&mut self) {
        self.push(InputEvent::Quit);
    }

    pub(crate) fn handle_key(&mut self, key: PhysicalKey, state: ElementState, repeat: bool) {
        if state != ElementState::Pressed || repeat {
            return;
        }
        let key = match key {
            PhysicalKey::Code(KeyCode::Escape) => Key::Escape,
            _ => Key::Other,
        };
        self.push(InputEvent::KeyDown(key));
    }

    pub(crate) fn handle_mouse_input(&mut self, button: MouseButton, state: ElementState) {
        if !matches!(
            button,
            MouseButton::Left | MouseButton::Right | MouseButton::Middle
        ) {
            return;
        }
        match state {
            ElementState::Pressed => self.push(InputEvent::PointerButtonDown),
            ElementState::Released => self.push(InputEvent::PointerButtonUp),
        }
    }

    pub(crate) fn set_pointer_position_px(&mut self, x: f32, y: f32) {
        self.pointer_position_px = Some((x, y));
    }

    pub(crate) fn pointer_position_px(&self) -> Option<(f32, f32)> {
        self.pointer_position_px
    }

    /// Hands out everything queued since the last tick, oldest first.
    pub(crate) fn drain(&mut self) -> std::collections::vec_deque::Drain<'_, InputEvent> {
        self.pending.drain(..)
    }
}
