mod actor;
mod assets;
mod audio;
mod clock;
mod game_loop;
mod geometry;
mod input;
mod loop_runner;
mod metrics;
mod rendering;
mod sprite;

pub use actor::Actor;
pub use assets::{AssetError, AssetLoader, ColorKey};
pub use audio::{AudioDevice, Sound};
pub use clock::TickClock;
pub use game_loop::{Game, GameLoop, LoopState};
pub use geometry::{Point, Rect};
pub use input::{InputEvent, Key};
pub use loop_runner::{run_app, AppError, LoopConfig, WINDOW_SCALE_ENV_VAR};
pub use metrics::LoopMetricsSnapshot;
pub use rendering::{Canvas, Display};
pub use sprite::Sprite;
