use std::io::Cursor;
use std::sync::Arc;

use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink};
use tracing::{info, warn};

use super::assets::{AssetError, AssetLoader};

/// The process-wide audio output. Without a usable device every sound it hands
/// out is silent.
pub struct AudioDevice {
    output: Option<(OutputStream, OutputStreamHandle)>,
}

impl AudioDevice {
    pub fn open() -> Self {
        match OutputStream::try_default() {
            Ok(output) => {
                info!("audio_device_opened");
                Self {
                    output: Some(output),
                }
            }
            Err(error) => {
                warn!(error = %error, "audio_device_unavailable_sound_disabled");
                Self::disabled()
            }
        }
    }

    pub fn disabled() -> Self {
        Self { output: None }
    }

    pub fn is_enabled(&self) -> bool {
        self.output.is_some()
    }

    /// Loads a sound asset. With audio disabled the file is not read at all.
    pub fn load_sound(&self, loader: &AssetLoader, name: &str) -> Result<Sound, AssetError> {
        let Some((_, handle)) = &self.output else {
            return Ok(Sound::silent());
        };

        let (path, bytes) = loader.read_bytes(name)?;
        let bytes: Arc<[u8]> = bytes.into();
        Decoder::new(Cursor::new(Arc::clone(&bytes)))
            .map_err(|source| AssetError::DecodeSound { path, source })?;
        info!(asset = name, bytes = bytes.len(), "sound_loaded");

        Ok(Sound {
            playback: Some(Playback {
                handle: handle.clone(),
                bytes,
            }),
        })
    }
}

struct Playback {
    handle: OutputStreamHandle,
    bytes: Arc<[u8]>,
}

/// A decoded-on-play sound effect. Playing is fire-and-forget.
pub struct Sound {
    playback: Option<Playback>,
}

impl Sound {
    pub fn silent() -> Self {
        Self { playback: None }
    }

    pub fn is_silent(&self) -> bool {
        self.playback.is_none()
    }

    pub fn play(&self) {
        let Some(playback) = &self.playback else {
            return;
        };
        let sink = match Sink::try_new(&playback.handle) {
            Ok(sink) => sink,
            Err(error) => {
                warn!(error = %error, "sound_play_failed");
                return;
            }
        };
        match Decoder::new(Cursor::new(Arc::clone(&playback.bytes))) {
            Ok(source) => {
                sink.append(source);
                sink.detach();
            }
            Err(error) => warn!(error = %error, "sound_decode_failed"),
        }
    }
}
