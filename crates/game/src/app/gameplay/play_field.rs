use engine::Rect;

pub(crate) const PLAY_FIELD_WIDTH: u32 = 468;
pub(crate) const PLAY_FIELD_HEIGHT: u32 = 60;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) enum BackgroundColor {
    #[default]
    Red,
    Green,
}

impl BackgroundColor {
    pub(crate) fn rgba(self) -> [u8; 4] {
        match self {
            Self::Red => [211, 4, 4, 255],
            Self::Green => [153, 229, 80, 255],
        }
    }

    pub(crate) fn toggled(self) -> Self {
        match self {
            Self::Red => Self::Green,
            Self::Green => Self::Red,
        }
    }
}

/// The fixed arena the chimp bounces around in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct PlayField {
    area: Rect,
    background: BackgroundColor,
}

impl Default for PlayField {
    fn default() -> Self {
        Self {
            area: Rect::new(0, 0, PLAY_FIELD_WIDTH as i32, PLAY_FIELD_HEIGHT as i32),
            background: BackgroundColor::default(),
        }
    }
}

impl PlayField {
    pub(crate) fn area(&self) -> Rect {
        self.area
    }

    pub(crate) fn background(&self) -> BackgroundColor {
        self.background
    }

    pub(crate) fn toggle_background(&mut self) {
        self.background = self.background.toggled();
    }
}
