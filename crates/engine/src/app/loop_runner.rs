use std::env;
use std::sync::Arc;
use std::time::{Duration, Instant};

use pixels::Error as PixelsError;
use thiserror::Error;
use tracing::{error, info, warn};
use winit::dpi::LogicalSize;
use winit::error::{EventLoopError, OsError};
use winit::event::{Event, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::WindowBuilder;

use crate::StartupError;

use super::assets::AssetError;
use super::clock::TickClock;
use super::input::InputCollector;
use super::metrics::MetricsAccumulator;
use super::{Canvas, Display, Game, GameLoop, LoopState, Point};

pub const WINDOW_SCALE_ENV_VAR: &str = "MONKEY_FEVER_WINDOW_SCALE";

#[derive(Debug, Clone)]
pub struct LoopConfig {
    pub window_title: String,
    pub play_field_width: u32,
    pub play_field_height: u32,
    pub window_scale: u32,
    pub target_tps: u32,
    pub metrics_log_interval: Duration,
    pub hide_cursor: bool,
}

impl Default for LoopConfig {
    fn default() -> Self {
        Self {
            window_title: "engine".to_string(),
            play_field_width: 468,
            play_field_height: 60,
            window_scale: 1,
            target_tps: 60,
            metrics_log_interval: Duration::from_secs(1),
            hide_cursor: true,
        }
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Startup(#[from] StartupError),
    #[error(transparent)]
    Asset(#[from] AssetError),
    #[error("failed to create event loop: {0}")]
    CreateEventLoop(#[source] EventLoopError),
    #[error("failed to create application window: {0}")]
    CreateWindow(#[source] OsError),
    #[error("failed to initialize display: {0}")]
    CreateDisplay(#[source] PixelsError),
    #[error("failed to present frame: {0}")]
    Render(#[source] PixelsError),
    #[error("event loop failed: {0}")]
    EventLoopRun(#[source] EventLoopError),
}

/// Opens the window and drives `game` at the configured tick rate until a stop
/// request or window close. Each tick: wait, drain input, update, present.
pub fn run_app<G: Game>(config: LoopConfig, game: G) -> Result<(), AppError> {
    let window_scale = resolve_window_scale(config.window_scale);
    let field_width = config.play_field_width.max(1);
    let field_height = config.play_field_height.max(1);

    let event_loop = EventLoop::new().map_err(AppError::CreateEventLoop)?;
    let window = Arc::new(
        WindowBuilder::new()
            .with_title(config.window_title.clone())
            .with_inner_size(LogicalSize::new(
                (field_width * window_scale) as f64,
                (field_height * window_scale) as f64,
            ))
            .with_resizable(false)
            .build(&event_loop)
            .map_err(AppError::CreateWindow)?,
    );
    window.set_cursor_visible(!config.hide_cursor);
    let mut display = Display::new(Arc::clone(&window), field_width, field_height)
        .map_err(AppError::CreateDisplay)?;

    event_loop.set_control_flow(ControlFlow::Poll);

    let metrics_log_interval =
        normalize_non_zero_duration(config.metrics_log_interval, Duration::from_secs(1));
    let mut canvas = Canvas::new(field_width, field_height);
    let mut clock = TickClock::new(config.target_tps);
    let mut input = InputCollector::default();
    let mut metrics = MetricsAccumulator::new(metrics_log_interval);
    let mut game_loop = GameLoop::new(game);
    let mut fatal: Option<AppError> = None;

    info!(
        title = config.window_title.as_str(),
        field_width,
        field_height,
        window_scale,
        target_tps = config.target_tps,
        tick_budget_ms = clock.budget().as_secs_f64() * 1000.0,
        "loop_config"
    );

    let run_result = event_loop.run(|event, window_target| match event {
        Event::WindowEvent { window_id, event } if window_id == window.id() => match event {
            WindowEvent::CloseRequested => {
                info!(reason = "window_close", "shutdown_requested");
                input.mark_quit_requested();
            }
            WindowEvent::Resized(new_size) => {
                if let Err(error) = display.resize(new_size.width, new_size.height) {
                    error!(error = %error, "display_resize_failed");
                    fatal = Some(AppError::Render(error));
                    window_target.exit();
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                input.set_pointer_position_px(position.x as f32, position.y as f32);
            }
            WindowEvent::MouseInput { state, button, .. } => {
                input.handle_mouse_input(button, state);
            }
            WindowEvent::KeyboardInput { event, .. } => {
                input.handle_key(event.physical_key, event.state, event.repeat);
            }
            _ => {}
        },
        Event::AboutToWait => {
            if game_loop.state() == LoopState::Stopped {
                return;
            }
            clock.wait();
            let tick_start = Instant::now();
            let pointer = input
                .pointer_position_px()
                .map(|physical| display.pointer_to_canvas(physical))
                .unwrap_or_default();

            if game_loop.tick(input.drain(), pointer, &mut canvas) == LoopState::Stopped {
                window_target.exit();
                return;
            }
            if let Err(error) = display.present(&canvas) {
                error!(error = %error, "display_present_failed");
                fatal = Some(AppError::Render(error));
                window_target.exit();
                return;
            }

            metrics.record_tick(tick_start.elapsed());
            if let Some(snapshot) = metrics.maybe_snapshot(Instant::now()) {
                info!(
                    tps = snapshot.tps,
                    tick_work_ms = snapshot.tick_work_ms,
                    ticks = game_loop.ticks(),
                    "loop_metrics"
                );
            }
        }
        Event::LoopExiting => {
            game_loop.shutdown();
            info!(ticks = game_loop.ticks(), "shutdown");
        }
        _ => {}
    });

    run_result.map_err(AppError::EventLoopRun)?;
    match fatal {
        Some(error) => Err(error),
        None => Ok(()),
    }
}

fn normalize_non_zero_duration(value: Duration, fallback: Duration) -> Duration {
    if value.is_zero() {
        fallback
    } else {
        value
    }
}

fn resolve_window_scale(config_scale: u32) -> u32 {
    match env::var(WINDOW_SCALE_ENV_VAR) {
        Ok(value) => parse_window_scale(&value).unwrap_or_else(|| {
            warn!(
                env_var = WINDOW_SCALE_ENV_VAR,
                value = value.as_str(),
                "invalid window scale env var value; falling back to config"
            );
            config_scale.max(1)
        }),
        Err(env::VarError::NotPresent) => config_scale.max(1),
        Err(err) => {
            warn!(
                env_var = WINDOW_SCALE_ENV_VAR,
                error = %err,
                "unable to read window scale env var; falling back to config"
            );
            config_scale.max(1)
        }
    }
}

fn parse_window_scale(value: &str) -> Option<u32> {
    value.trim().parse::<u32>().ok().filter(|scale| *scale > 0)
}
