use engine::{resolve_app_paths, AppError, AssetLoader, LoopConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

use super::gameplay::{self, MonkeyFever};

pub(crate) struct AppWiring {
    pub(crate) config: LoopConfig,
    pub(crate) game: MonkeyFever,
}

pub(crate) fn build_app() -> Result<AppWiring, AppError> {
    info!("=== Monkey Fever Startup ===");

    let app_paths = resolve_app_paths()?;
    info!(
        root = %app_paths.root.display(),
        data_dir = %app_paths.data_dir.display(),
        "startup"
    );
    let loader = AssetLoader::new(app_paths.data_dir);
    let game = MonkeyFever::load(&loader)?;

    let config = LoopConfig {
        window_title: gameplay::WINDOW_TITLE.to_string(),
        play_field_width: gameplay::PLAY_FIELD_WIDTH,
        play_field_height: gameplay::PLAY_FIELD_HEIGHT,
        ..LoopConfig::default()
    };

    Ok(AppWiring { config, game })
}

pub(crate) fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_names(true)
        .compact()
        .init();
}
