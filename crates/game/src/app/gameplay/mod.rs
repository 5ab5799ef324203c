use engine::{
    AppError, AssetLoader, AudioDevice, Canvas, ColorKey, Game, InputEvent, Point, Sound, Sprite,
};
use tracing::{debug, info};

mod chimp;
mod fist;
mod play_field;
mod simulation;

pub(crate) use play_field::{PLAY_FIELD_HEIGHT, PLAY_FIELD_WIDTH};
use simulation::{PunchOutcome, SimulationState};

pub(crate) const WINDOW_TITLE: &str = "Monkey Fever";
const CHIMP_IMAGE: &str = "chimp.bmp";
const FIST_IMAGE: &str = "fist.bmp";
const HIT_SOUND: &str = "punch.wav";
const MISS_SOUND: &str = "whiff.wav";

pub(crate) struct Sounds {
    hit: Sound,
    miss: Sound,
}

impl Sounds {
    #[cfg(test)]
    pub(crate) fn silent() -> Self {
        Self {
            hit: Sound::silent(),
            miss: Sound::silent(),
        }
    }
}

pub(crate) struct MonkeyFever {
    simulation: SimulationState,
    sounds: Sounds,
    // Sounds play through this device's stream; it lives as long as the game.
    _audio: AudioDevice,
}

impl MonkeyFever {
    pub(crate) fn new(chimp: Sprite, fist: Sprite, sounds: Sounds, audio: AudioDevice) -> Self {
        Self {
            simulation: SimulationState::new(chimp, fist),
            sounds,
            _audio: audio,
        }
    }

    /// Loads every asset up front. Any failure here is fatal, except a
    /// missing audio device which leaves the sounds silent.
    pub(crate) fn load(loader: &AssetLoader) -> Result<Self, AppError> {
        let (chimp, _) = loader.load_image(CHIMP_IMAGE, ColorKey::Corner)?;
        let (fist, _) = loader.load_image(FIST_IMAGE, ColorKey::Corner)?;
        let audio = AudioDevice::open();
        let sounds = Sounds {
            hit: audio.load_sound(loader, HIT_SOUND)?,
            miss: audio.load_sound(loader, MISS_SOUND)?,
        };
        info!(
            data_dir = %loader.data_dir().display(),
            audio_enabled = audio.is_enabled(),
            "assets_loaded"
        );
        Ok(Self::new(chimp, fist, sounds, audio))
    }

    #[cfg(test)]
    pub(crate) fn simulation(&self) -> &SimulationState {
        &self.simulation
    }
}

impl Game for MonkeyFever {
    fn handle_input(&mut self, event: InputEvent) {
        match event {
            InputEvent::PointerButtonDown => match self.simulation.press() {
                PunchOutcome::Hit => {
                    debug!(chimp = ?self.simulation.character().rect(), "punch_hit");
                    self.sounds.hit.play();
                }
                PunchOutcome::Miss => {
                    debug!(fist = ?self.simulation.cursor().rect(), "punch_missed");
                    self.sounds.miss.play();
                }
            },
            InputEvent::PointerButtonUp => self.simulation.release(),
            InputEvent::Quit | InputEvent::KeyDown(_) => {}
        }
    }

    fn update(&mut self, pointer: Point) {
        self.simulation.advance(pointer);
    }

    fn render(&self, canvas: &mut Canvas) {
        self.simulation.draw(canvas);
    }

    fn shutdown(&mut self) {
        info!(background = ?self.simulation.background(), "game_closed");
    }
}
